use crate::config::AppConfig;
use crate::store::{MeetingStore, PgMeetingStore};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MeetingStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        // Run migrations if present
        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        let store = Arc::new(PgMeetingStore::new(db)) as Arc<dyn MeetingStore>;
        Ok(Self { store, config })
    }

    pub fn from_parts(store: Arc<dyn MeetingStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }
}
