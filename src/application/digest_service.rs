// Digest service - Use case for the fixed-channel summary listing
use crate::application::observation_repository::{ObservationRepository, StoreResult};
use crate::domain::digest::{DigestMode, DigestRow};
use std::sync::Arc;

#[derive(Clone)]
pub struct DigestService {
    repository: Arc<dyn ObservationRepository>,
    channel: String,
    mode: DigestMode,
}

impl DigestService {
    pub fn new(repository: Arc<dyn ObservationRepository>, channel: String, mode: DigestMode) -> Self {
        Self {
            repository,
            channel,
            mode,
        }
    }

    pub async fn digest(&self) -> StoreResult<Vec<DigestRow>> {
        let rows = self.repository.digest_rows(&self.channel).await?;
        let total = rows.len();
        let rows = self.mode.apply(rows);

        tracing::debug!(
            "Digest for channel {}: {} rows ({} before {:?} reduction)",
            self.channel,
            rows.len(),
            total,
            self.mode
        );

        Ok(rows)
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}
