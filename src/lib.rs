//! Lending Desk
//!
//! A small book lending service: an in-memory catalog of books that can be
//! searched, borrowed and returned, exposed through a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{AppError, AppResult, CatalogError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(catalog)),
        }
    }
}
