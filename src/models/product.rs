// src/models/product.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A row of the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  pub price: f64,
  pub category_id: i64,
  pub image_url: Option<String>,
  pub created_at: DateTime<Utc>,
}

/// Input for the write path. `created_at` is always supplied by the caller.
#[derive(Debug, Clone)]
pub struct NewProduct {
  pub name: String,
  pub description: Option<String>,
  pub price: f64,
  pub category_id: i64,
  pub image_url: Option<String>,
  pub created_at: DateTime<Utc>,
}

/// The public JSON projection of a product.
///
/// Single-item and list responses both serialize through this type, so the
/// field names are identical everywhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  pub price: f64,
  pub category_id: i64,
  pub image_url: Option<String>,
  pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductView {
  fn from(p: Product) -> Self {
    Self {
      id: p.id,
      name: p.name,
      description: p.description,
      price: p.price,
      category_id: p.category_id,
      image_url: p.image_url,
      created_at: p.created_at,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductList {
  pub products: Vec<ProductView>,
  pub total: usize,
}

impl From<Vec<Product>> for ProductList {
  fn from(rows: Vec<Product>) -> Self {
    let products: Vec<ProductView> = rows.into_iter().map(ProductView::from).collect();
    let total = products.len();
    Self { products, total }
  }
}
