// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use product_catalog::db::{self, seed, DbPool};
use product_catalog::models::{Category, NewCategory, NewProduct, Product};
use std::time::Duration;
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn fixed_timestamp() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// A fresh, migrated in-memory database.
pub async fn test_pool() -> DbPool {
  setup_tracing();
  let pool = db::connect("sqlite::memory:", 1, Duration::from_secs(5))
    .await
    .expect("in-memory pool");
  db::run_migrations(&pool).await.expect("migrations");
  pool
}

pub struct Fixture {
  pub books: Category,
  pub garden: Category,
  pub foo: Product,
  pub bar: Product,
  pub baz: Product,
}

/// Books holds Foo and Baz, Garden holds Bar.
pub async fn seed_fixture(pool: &DbPool) -> Fixture {
  let mut conn = pool.acquire().await.expect("connection");

  let books = seed::insert_category(&mut conn, &new_category("Books", "books")).await.unwrap();
  let garden = seed::insert_category(&mut conn, &new_category("Garden", "garden")).await.unwrap();

  let foo = seed::insert_product(&mut conn, &new_product("Foo", 9.99, books.id)).await.unwrap();
  let mut bar_input = new_product("Bar", 15.5, garden.id);
  bar_input.description = Some("A sturdy trowel.".to_string());
  bar_input.image_url = Some("https://cdn.example.com/bar.png".to_string());
  let bar = seed::insert_product(&mut conn, &bar_input).await.unwrap();
  let baz = seed::insert_product(&mut conn, &new_product("Baz", 0.0, books.id)).await.unwrap();

  Fixture {
    books,
    garden,
    foo,
    bar,
    baz,
  }
}

/// A category with no products, inserted on top of the fixture.
pub async fn insert_empty_category(pool: &DbPool) -> Category {
  let mut conn = pool.acquire().await.expect("connection");
  seed::insert_category(&mut conn, &new_category("Toys", "toys")).await.unwrap()
}

pub fn new_category(name: &str, slug: &str) -> NewCategory {
  NewCategory {
    name: name.to_string(),
    slug: slug.to_string(),
  }
}

pub fn new_product(name: &str, price: f64, category_id: i64) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    description: None,
    price,
    category_id,
    image_url: None,
    created_at: fixed_timestamp(),
  }
}
