// src/web/extractors.rs

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};
use tracing::error;

use crate::errors::AppError;
use crate::state::AppState;

/// A database connection scoped to one request.
///
/// Acquired from the pool when the handler's arguments are extracted and
/// returned to it when the handler drops the session, whatever the outcome.
pub struct DbSession(PoolConnection<Sqlite>);

impl DbSession {
  pub fn connection(&mut self) -> &mut SqliteConnection {
    &mut self.0
  }
}

impl FromRequest for DbSession {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let pool = req.app_data::<web::Data<AppState>>().map(|state| state.db_pool.clone());

    Box::pin(async move {
      let pool = pool.ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;
      let conn = pool.acquire().await.map_err(|e| {
        error!("Failed to acquire a database connection: {}", e);
        AppError::Sqlx(e)
      })?;
      Ok(DbSession(conn))
    })
  }
}
