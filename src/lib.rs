// src/lib.rs

//! A read-only product catalog backend.
//!
//! Categories and products live in SQLite behind `sqlx`; three GET routes
//! under `/api/products` expose them as JSON through actix-web.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::{AppConfig, LogFormat};
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
