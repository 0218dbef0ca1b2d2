// Observation service - Use cases for listing observations
use crate::application::observation_repository::{ObservationRepository, StoreResult};
use crate::domain::observation::Observation;
use std::sync::Arc;

#[derive(Clone)]
pub struct ObservationService {
    repository: Arc<dyn ObservationRepository>,
    web_channel: String,
}

impl ObservationService {
    pub fn new(repository: Arc<dyn ObservationRepository>, web_channel: String) -> Self {
        Self {
            repository,
            web_channel,
        }
    }

    /// Unknown series yield an empty list, not an error
    pub async fn by_series(&self, series_id: &str) -> StoreResult<Vec<Observation>> {
        self.repository.observations_by_series(series_id).await
    }

    pub async fn by_channel(&self, channel: &str) -> StoreResult<Vec<Observation>> {
        self.repository.observations_by_channel(channel).await
    }

    /// Rows shown on the rendered series page
    pub async fn web_view(&self, series_id: &str) -> StoreResult<Vec<Observation>> {
        self.repository
            .observations_by_series_and_channel(series_id, &self.web_channel)
            .await
    }

    pub fn web_channel(&self) -> &str {
        &self.web_channel
    }
}
