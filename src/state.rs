use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::services::clock::Clock;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub clock: Arc<dyn Clock>,
}
