// src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;

use product_catalog::{db, telemetry, web, AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Configuration is loaded first since it selects the log format.
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  telemetry::init_tracing(app_config.log_format);

  tracing::info!("Starting product catalog server...");

  let db_pool = db::init_pool(&app_config)
    .await
    .context("Failed to connect to the database")?;
  tracing::info!("Successfully connected to the database.");

  db::run_migrations(&db_pool).await.context("Failed to apply migrations")?;

  if app_config.seed_db {
    db::seed::seed_demo_catalog(&db_pool, chrono::Utc::now())
      .await
      .context("Failed to seed database")?;
  }

  let app_state = AppState::new(db_pool.clone());

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await?;

  db_pool.close().await;
  tracing::info!("Server stopped.");
  Ok(())
}
