// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod database;
pub mod http_response;
pub mod mysql_repository;
pub mod queries;
pub mod sqlite_repository;
