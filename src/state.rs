use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::Database;
use crate::fetch;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
    pub sessions: SessionStore,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Self::from_config(config)
    }

    pub fn from_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let db = Database::new(&config.database_path);
        let http = fetch::build_client(config.fetch_timeout_secs)?;
        Ok(Self {
            db,
            config,
            sessions: SessionStore::new(),
            http,
        })
    }
}
