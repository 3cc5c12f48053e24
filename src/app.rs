// src/app.rs
use crate::config::AppConfig;
use crate::dashboard::{provider_for, DashboardDataProvider};
use crate::db::connection::Database;

/// Everything a request handler may use. Built once in `main` and shared by
/// reference with every worker.
pub struct AppContext {
    pub db: Database,
    pub config: AppConfig,
    pub stats: Box<dyn DashboardDataProvider>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            db: Database::new(config.db_path.clone()),
            stats: provider_for(config.stats_source),
            config,
        }
    }
}
