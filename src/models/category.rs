// src/models/category.rs

use sqlx::FromRow;

/// A named grouping products belong to.
///
/// Holds no collection of its products; those are fetched on demand by
/// `category_id` through the product service.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
  pub id: i64,
  pub name: String,
  pub slug: String,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
  pub name: String,
  pub slug: String,
}
