// Application state for HTTP handlers
use crate::application::digest_service::DigestService;
use crate::application::observation_service::ObservationService;
use crate::application::series_service::SeriesService;

#[derive(Clone)]
pub struct AppState {
    pub series_service: SeriesService,
    pub observation_service: ObservationService,
    pub digest_service: DigestService,
}
