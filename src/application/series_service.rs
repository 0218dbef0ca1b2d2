// Series service - Use cases for listing and looking up series
use crate::application::observation_repository::{ObservationRepository, StoreResult};
use crate::domain::series::Series;
use std::sync::Arc;

#[derive(Clone)]
pub struct SeriesService {
    repository: Arc<dyn ObservationRepository>,
}

impl SeriesService {
    pub fn new(repository: Arc<dyn ObservationRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_series(&self) -> StoreResult<Vec<Series>> {
        self.repository.list_series().await
    }

    /// `None` when no series has this id
    pub async fn get_series(&self, series_id: &str) -> StoreResult<Option<Series>> {
        self.repository.find_series(series_id).await
    }
}
