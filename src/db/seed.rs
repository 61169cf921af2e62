// src/db/seed.rs

//! Write path for catalog rows.
//!
//! The HTTP surface is read-only; these functions feed it demo data at
//! startup (`SEED_DB=true`) and back the storage tests.

use crate::db::DbPool;
use crate::errors::Result;
use crate::models::{Category, NewCategory, NewProduct, Product};
use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;
use tracing::{info, instrument};

pub async fn insert_category(conn: &mut SqliteConnection, new: &NewCategory) -> Result<Category> {
  let category = sqlx::query_as::<_, Category>("INSERT INTO categories (name, slug) VALUES (?, ?) RETURNING id, name, slug")
    .bind(&new.name)
    .bind(&new.slug)
    .fetch_one(conn)
    .await?;
  Ok(category)
}

pub async fn insert_product(conn: &mut SqliteConnection, new: &NewProduct) -> Result<Product> {
  let product = sqlx::query_as::<_, Product>(
    "INSERT INTO products (name, description, price, category_id, image_url, created_at) \
     VALUES (?, ?, ?, ?, ?, ?) \
     RETURNING id, name, description, price, category_id, image_url, created_at",
  )
  .bind(&new.name)
  .bind(&new.description)
  .bind(new.price)
  .bind(new.category_id)
  .bind(&new.image_url)
  .bind(new.created_at)
  .fetch_one(conn)
  .await?;
  Ok(product)
}

/// Inserts the demo catalog in a single transaction.
///
/// Returns `false` without writing anything when categories already exist.
#[instrument(name = "db::seed_demo_catalog", skip(pool))]
pub async fn seed_demo_catalog(pool: &DbPool, now: DateTime<Utc>) -> Result<bool> {
  let mut tx = pool.begin().await?;

  let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories").fetch_one(&mut *tx).await?;
  if existing > 0 {
    info!(existing, "Catalog already populated, skipping seed.");
    return Ok(false);
  }

  let demo: [(&str, &str, &[(&str, Option<&str>, f64)]); 3] = [
    (
      "Books",
      "books",
      &[
        ("The Rust Programming Language", Some("The official book on Rust."), 39.95),
        ("Designing Data-Intensive Applications", None, 44.99),
      ],
    ),
    (
      "Electronics",
      "electronics",
      &[("Mechanical Keyboard", Some("Tenkeyless, brown switches."), 89.0)],
    ),
    ("Garden", "garden", &[]),
  ];

  let mut inserted_products = 0usize;
  for (name, slug, products) in demo {
    let category = insert_category(
      &mut tx,
      &NewCategory {
        name: name.to_string(),
        slug: slug.to_string(),
      },
    )
    .await?;

    for (product_name, description, price) in products {
      insert_product(
        &mut tx,
        &NewProduct {
          name: product_name.to_string(),
          description: description.map(str::to_string),
          price: *price,
          category_id: category.id,
          image_url: None,
          created_at: now,
        },
      )
      .await?;
      inserted_products += 1;
    }
  }

  tx.commit().await?;
  info!(inserted_products, "Demo catalog seeded.");
  Ok(true)
}
