// SQLite repository implementation (local development and tests)
use crate::application::observation_repository::{ObservationRepository, StoreError, StoreResult};
use crate::domain::digest::DigestRow;
use crate::domain::observation::Observation;
use crate::domain::series::Series;
use crate::infrastructure::config::DatabaseSettings;
use crate::infrastructure::queries::{Dialect, ObservationQueries, FIND_SERIES, LIST_SERIES};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

// Mirrors the MySQL tables created by the ingestion job.
const CREATE_SERIES_TABLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS fred_series (
    series_id TEXT PRIMARY KEY,
    title_cn TEXT NOT NULL,
    link TEXT NOT NULL
)";

const CREATE_OBSERVATIONS_TABLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS observations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    series_id TEXT NOT NULL REFERENCES fred_series(series_id),
    frequency TEXT NOT NULL,
    \"limit\" INTEGER,
    channel_name TEXT NOT NULL,
    obs_date TEXT NOT NULL,
    value NUMERIC,
    value_unit TEXT NOT NULL,
    UNIQUE (series_id, channel_name, obs_date)
)";

#[derive(Debug, sqlx::FromRow)]
struct SeriesRow {
    series_id: String,
    title_cn: String,
    link: String,
}

#[derive(Debug, sqlx::FromRow)]
struct ObservationRow {
    id: i64,
    series_id: String,
    frequency: String,
    limit: Option<i32>,
    channel_name: String,
    obs_date: NaiveDate,
    value: Option<String>,
    value_unit: String,
}

impl TryFrom<ObservationRow> for Observation {
    type Error = StoreError;

    fn try_from(row: ObservationRow) -> StoreResult<Self> {
        Ok(Observation {
            id: row.id,
            series_id: row.series_id,
            frequency: row.frequency,
            limit: row.limit,
            channel_name: row.channel_name,
            obs_date: row.obs_date,
            value: parse_value(row.value)?,
            value_unit: row.value_unit,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DigestRecord {
    series_id: String,
    title_cn: String,
    frequency: String,
    obs_date: NaiveDate,
    value: Option<String>,
    value_unit: String,
}

impl TryFrom<DigestRecord> for DigestRow {
    type Error = StoreError;

    fn try_from(row: DigestRecord) -> StoreResult<Self> {
        Ok(DigestRow {
            series_id: row.series_id,
            title: row.title_cn,
            frequency: row.frequency,
            obs_date: row.obs_date,
            value: parse_value(row.value)?,
            value_unit: row.value_unit,
        })
    }
}

// Values arrive as text (see `Dialect::Sqlite`) and are parsed here.
fn parse_value(raw: Option<String>) -> StoreResult<Option<Decimal>> {
    raw.map(|text| {
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|e| StoreError::Decode {
                column: "value",
                message: format!("{text:?}: {e}"),
            })
    })
    .transpose()
}

#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
    queries: ObservationQueries,
}

impl SqliteRepository {
    /// Open the database file (created if missing) and make sure both tables exist.
    pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(&settings.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .connect_with(options)
            .await?;

        let repository = Self::from_pool(pool);
        repository.ensure_schema().await?;
        Ok(repository)
    }

    /// Wrap an existing pool without touching the schema
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            pool,
            queries: ObservationQueries::for_dialect(Dialect::Sqlite),
        }
    }

    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_SERIES_TABLE_SQL).execute(&self.pool).await?;
        sqlx::query(CREATE_OBSERVATIONS_TABLE_SQL)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn fetch_observations(
        &self,
        sql: &str,
        binds: &[&str],
    ) -> StoreResult<Vec<Observation>> {
        let mut query = sqlx::query_as::<_, ObservationRow>(sql);
        for bind in binds {
            query = query.bind(*bind);
        }

        query
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Observation::try_from)
            .collect()
    }
}

#[async_trait]
impl ObservationRepository for SqliteRepository {
    async fn list_series(&self) -> StoreResult<Vec<Series>> {
        let rows = sqlx::query_as::<_, SeriesRow>(LIST_SERIES)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Fetched {} series", rows.len());
        Ok(rows
            .into_iter()
            .map(|r| Series::new(r.series_id, r.title_cn, r.link))
            .collect())
    }

    async fn find_series(&self, series_id: &str) -> StoreResult<Option<Series>> {
        let row = sqlx::query_as::<_, SeriesRow>(FIND_SERIES)
            .bind(series_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| Series::new(r.series_id, r.title_cn, r.link)))
    }

    async fn observations_by_series(&self, series_id: &str) -> StoreResult<Vec<Observation>> {
        let rows = self
            .fetch_observations(&self.queries.by_series, &[series_id])
            .await?;

        tracing::debug!("Fetched {} observations for series {}", rows.len(), series_id);
        Ok(rows)
    }

    async fn observations_by_channel(&self, channel: &str) -> StoreResult<Vec<Observation>> {
        let rows = self
            .fetch_observations(&self.queries.by_channel, &[channel])
            .await?;

        tracing::debug!("Fetched {} observations for channel {}", rows.len(), channel);
        Ok(rows)
    }

    async fn observations_by_series_and_channel(
        &self,
        series_id: &str,
        channel: &str,
    ) -> StoreResult<Vec<Observation>> {
        self.fetch_observations(&self.queries.by_series_and_channel, &[series_id, channel])
            .await
    }

    async fn digest_rows(&self, channel: &str) -> StoreResult<Vec<DigestRow>> {
        let rows = sqlx::query_as::<_, DigestRecord>(&self.queries.digest)
            .bind(channel)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Fetched {} digest rows for channel {}", rows.len(), channel);
        rows.into_iter().map(DigestRow::try_from).collect()
    }
}
