// MySQL repository implementation
use crate::application::observation_repository::{ObservationRepository, StoreResult};
use crate::domain::digest::DigestRow;
use crate::domain::observation::Observation;
use crate::domain::series::Series;
use crate::infrastructure::config::DatabaseSettings;
use crate::infrastructure::queries::{Dialect, ObservationQueries, FIND_SERIES, LIST_SERIES};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

#[derive(Debug, sqlx::FromRow)]
struct SeriesRow {
    series_id: String,
    title_cn: String,
    link: String,
}

impl From<SeriesRow> for Series {
    fn from(row: SeriesRow) -> Self {
        Series::new(row.series_id, row.title_cn, row.link)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ObservationRow {
    id: i64,
    series_id: String,
    frequency: String,
    limit: Option<i32>,
    channel_name: String,
    obs_date: NaiveDate,
    value: Option<Decimal>,
    value_unit: String,
}

impl From<ObservationRow> for Observation {
    fn from(row: ObservationRow) -> Self {
        Observation {
            id: row.id,
            series_id: row.series_id,
            frequency: row.frequency,
            limit: row.limit,
            channel_name: row.channel_name,
            obs_date: row.obs_date,
            value: row.value,
            value_unit: row.value_unit,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DigestRecord {
    series_id: String,
    title_cn: String,
    frequency: String,
    obs_date: NaiveDate,
    value: Option<Decimal>,
    value_unit: String,
}

impl From<DigestRecord> for DigestRow {
    fn from(row: DigestRecord) -> Self {
        DigestRow {
            series_id: row.series_id,
            title: row.title_cn,
            frequency: row.frequency,
            obs_date: row.obs_date,
            value: row.value,
            value_unit: row.value_unit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
    queries: ObservationQueries,
}

impl MySqlRepository {
    /// Build the pool lazily; the first query opens the first connection.
    pub fn connect_lazy(settings: &DatabaseSettings) -> anyhow::Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .connect_lazy(&settings.url)?;

        Ok(Self {
            pool,
            queries: ObservationQueries::for_dialect(Dialect::MySql),
        })
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

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Observation::from).collect())
    }
}

#[async_trait]
impl ObservationRepository for MySqlRepository {
    async fn list_series(&self) -> StoreResult<Vec<Series>> {
        let rows = sqlx::query_as::<_, SeriesRow>(LIST_SERIES)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Fetched {} series", rows.len());
        Ok(rows.into_iter().map(Series::from).collect())
    }

    async fn find_series(&self, series_id: &str) -> StoreResult<Option<Series>> {
        let row = sqlx::query_as::<_, SeriesRow>(FIND_SERIES)
            .bind(series_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Series::from))
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
        Ok(rows.into_iter().map(DigestRow::from).collect())
    }
}
