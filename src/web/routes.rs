// src/web/routes.rs

use actix_web::error::PathError;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::product_handlers;

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

async fn unmatched_route_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  Err(AppError::NotFound(format!("No route matches '{}'.", req.path())))
}

// actix answers a failed path coercion with 404; a non-integer id is a
// malformed request, not a missing resource.
fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid path parameter in '{}': {}", req.path(), err)).into()
}

/// Registers the catalog API. Called from `main.rs` and from the HTTP tests.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .app_data(web::PathConfig::default().error_handler(path_error_handler))
      .default_service(web::to(unmatched_route_handler))
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          .default_service(web::to(unmatched_route_handler))
          .route("", web::get().to(product_handlers::list_products_handler))
          .route(
            "/category/{category_id}",
            web::get().to(product_handlers::list_products_by_category_handler),
          )
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
      ),
  );
}
