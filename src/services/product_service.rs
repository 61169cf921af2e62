// src/services/product_service.rs

use sqlx::SqliteConnection;
use tracing::{debug, instrument, warn};

use crate::errors::{AppError, Result};
use crate::models::{Product, ProductList, ProductView};

const PRODUCT_COLUMNS: &str = "id, name, description, price, category_id, image_url, created_at";

/// Read-side queries over the `products` table.
///
/// Borrows one connection for its lifetime; the caller owns the connection
/// and decides when it goes back to the pool.
pub struct ProductService<'c> {
  conn: &'c mut SqliteConnection,
}

impl<'c> ProductService<'c> {
  pub fn new(conn: &'c mut SqliteConnection) -> Self {
    Self { conn }
  }

  #[instrument(name = "product_service::get_all_products", skip(self))]
  pub async fn get_all_products(&mut self) -> Result<ProductList> {
    let rows: Vec<Product> = sqlx::query_as(&format!("SELECT {} FROM products ORDER BY id ASC", PRODUCT_COLUMNS))
      .fetch_all(&mut *self.conn)
      .await?;

    debug!(count = rows.len(), "Fetched all products.");
    Ok(ProductList::from(rows))
  }

  #[instrument(name = "product_service::get_product_by_id", skip(self))]
  pub async fn get_product_by_id(&mut self, product_id: i64) -> Result<ProductView> {
    let row: Option<Product> = sqlx::query_as(&format!("SELECT {} FROM products WHERE id = ?", PRODUCT_COLUMNS))
      .bind(product_id)
      .fetch_optional(&mut *self.conn)
      .await?;

    match row {
      Some(product) => Ok(ProductView::from(product)),
      None => {
        warn!("Product with ID {} not found.", product_id);
        Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
      }
    }
  }

  /// Products whose `category_id` matches. An unknown category yields an
  /// empty list rather than an error.
  #[instrument(name = "product_service::get_products_by_category", skip(self))]
  pub async fn get_products_by_category(&mut self, category_id: i64) -> Result<ProductList> {
    let rows: Vec<Product> = sqlx::query_as(&format!(
      "SELECT {} FROM products WHERE category_id = ? ORDER BY id ASC",
      PRODUCT_COLUMNS
    ))
    .bind(category_id)
    .fetch_all(&mut *self.conn)
    .await?;

    debug!(count = rows.len(), "Fetched products for category.");
    Ok(ProductList::from(rows))
  }
}
