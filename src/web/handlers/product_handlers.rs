// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::ProductService;
use crate::web::DbSession;

// The path extractor comes before the session so malformed ids are rejected
// without touching the pool.

#[instrument(name = "handler::list_products", skip(session))]
pub async fn list_products_handler(mut session: DbSession) -> Result<HttpResponse, AppError> {
  let list = ProductService::new(session.connection()).get_all_products().await?;

  info!("Successfully fetched {} products.", list.total);
  Ok(HttpResponse::Ok().json(list))
}

#[instrument(name = "handler::get_product", skip(path, session), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(path: web::Path<i64>, mut session: DbSession) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = ProductService::new(session.connection())
    .get_product_by_id(product_id)
    .await?;

  info!("Product {} fetched successfully.", product_id);
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::list_products_by_category", skip(path, session), fields(category_id = %path.as_ref()))]
pub async fn list_products_by_category_handler(
  path: web::Path<i64>,
  mut session: DbSession,
) -> Result<HttpResponse, AppError> {
  let category_id = path.into_inner();
  let list = ProductService::new(session.connection())
    .get_products_by_category(category_id)
    .await?;

  info!("Fetched {} products for category {}.", list.total, category_id);
  Ok(HttpResponse::Ok().json(list))
}
