// Repository selection from the configured database URL
use crate::application::observation_repository::ObservationRepository;
use crate::infrastructure::config::DatabaseSettings;
use crate::infrastructure::mysql_repository::MySqlRepository;
use crate::infrastructure::sqlite_repository::SqliteRepository;
use anyhow::Context;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    MySql,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> anyhow::Result<Self> {
        if url.starts_with("mysql://") {
            Ok(Backend::MySql)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            let scheme = url.split(':').next().unwrap_or_default();
            anyhow::bail!("Unsupported database scheme {:?} (expected mysql:// or sqlite:)", scheme)
        }
    }
}

pub async fn connect_repository(
    settings: &DatabaseSettings,
) -> anyhow::Result<Arc<dyn ObservationRepository>> {
    match Backend::from_url(&settings.url)? {
        Backend::MySql => {
            let repository = MySqlRepository::connect_lazy(settings)
                .context("Failed to configure MySQL connection pool")?;
            tracing::info!("Using MySQL store");
            Ok(Arc::new(repository))
        }
        Backend::Sqlite => {
            let repository = SqliteRepository::connect(settings)
                .await
                .context("Failed to open SQLite store")?;
            tracing::info!("Using SQLite store at {}", settings.url);
            Ok(Arc::new(repository))
        }
    }
}
