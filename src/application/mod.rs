// Application layer - Use cases and the repository port
pub mod digest_service;
pub mod observation_repository;
pub mod observation_service;
pub mod series_service;
