// tests/storage_tests.rs
mod common;

use common::*;
use product_catalog::db::seed;
use product_catalog::AppError;

fn is_constraint_violation(err: &AppError) -> bool {
  match err {
    AppError::Sqlx(sqlx::Error::Database(db_err)) => {
      db_err.is_unique_violation() || db_err.is_foreign_key_violation() || db_err.message().contains("constraint failed")
    }
    _ => false,
  }
}

#[tokio::test]
async fn test_duplicate_category_name_is_rejected() {
  let pool = test_pool().await;
  let mut conn = pool.acquire().await.unwrap();

  seed::insert_category(&mut conn, &new_category("Books", "books")).await.unwrap();
  let err = seed::insert_category(&mut conn, &new_category("Books", "books-2"))
    .await
    .unwrap_err();
  assert!(is_constraint_violation(&err), "got {:?}", err);
}

#[tokio::test]
async fn test_duplicate_category_slug_is_rejected() {
  let pool = test_pool().await;
  let mut conn = pool.acquire().await.unwrap();

  seed::insert_category(&mut conn, &new_category("Books", "books")).await.unwrap();
  let err = seed::insert_category(&mut conn, &new_category("Old Books", "books"))
    .await
    .unwrap_err();
  assert!(is_constraint_violation(&err), "got {:?}", err);
}

#[tokio::test]
async fn test_duplicate_product_name_is_rejected() {
  let pool = test_pool().await;
  let fixture = seed_fixture(&pool).await;
  let mut conn = pool.acquire().await.unwrap();

  let err = seed::insert_product(&mut conn, &new_product("Foo", 1.0, fixture.garden.id))
    .await
    .unwrap_err();
  assert!(is_constraint_violation(&err), "got {:?}", err);
}

#[tokio::test]
async fn test_product_requires_existing_category() {
  let pool = test_pool().await;
  let mut conn = pool.acquire().await.unwrap();

  let err = seed::insert_product(&mut conn, &new_product("Orphan", 3.5, 77))
    .await
    .unwrap_err();
  assert!(is_constraint_violation(&err), "got {:?}", err);

  let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
    .fetch_one(&mut *conn)
    .await
    .unwrap();
  assert_eq!(count, 0);
}

#[tokio::test]
async fn test_insert_product_keeps_supplied_timestamp() {
  let pool = test_pool().await;
  let fixture = seed_fixture(&pool).await;

  assert_eq!(fixture.foo.created_at, fixed_timestamp());
  assert_eq!(fixture.foo.category_id, fixture.books.id);
  assert_eq!(fixture.foo.description, None);
}

#[tokio::test]
async fn test_seed_demo_catalog_runs_once() {
  let pool = test_pool().await;

  assert!(seed::seed_demo_catalog(&pool, fixed_timestamp()).await.unwrap());
  let (categories,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories").fetch_one(&pool).await.unwrap();
  let (products,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products").fetch_one(&pool).await.unwrap();
  assert_eq!(categories, 3);
  assert_eq!(products, 3);

  assert!(!seed::seed_demo_catalog(&pool, fixed_timestamp()).await.unwrap());
  let (products_after,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products").fetch_one(&pool).await.unwrap();
  assert_eq!(products_after, products);
}
