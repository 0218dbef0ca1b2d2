// Repository trait for series and observation data access
use crate::domain::digest::DigestRow;
use crate::domain::observation::Observation;
use crate::domain::series::Series;
use async_trait::async_trait;

/// Failures raised by a store. Empty results are never errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("could not decode column {column}: {message}")]
    Decode { column: &'static str, message: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only access to `fred_series` and `observations`.
///
/// Every call is a single statement against the store; implementations keep
/// no state between calls.
#[async_trait]
pub trait ObservationRepository: Send + Sync {
    /// All series, in the store's natural order
    async fn list_series(&self) -> StoreResult<Vec<Series>>;

    /// Primary-key lookup
    async fn find_series(&self, series_id: &str) -> StoreResult<Option<Series>>;

    /// Observations of one series, newest first
    async fn observations_by_series(&self, series_id: &str) -> StoreResult<Vec<Observation>>;

    /// Observations of one channel across all series, newest first
    async fn observations_by_channel(&self, channel: &str) -> StoreResult<Vec<Observation>>;

    /// Observations of one series restricted to one channel, newest first
    async fn observations_by_series_and_channel(
        &self,
        series_id: &str,
        channel: &str,
    ) -> StoreResult<Vec<Observation>>;

    /// Channel observations joined with their series title,
    /// ordered by series id ascending then date descending
    async fn digest_rows(&self, channel: &str) -> StoreResult<Vec<DigestRow>>;
}
