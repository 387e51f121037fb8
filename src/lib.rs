//! # Tollgate Toll Fee Service
//!
//! Road-toll charging service: computes the billable toll for a vehicle from
//! its recorded passages through toll points.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, the toll calculation rules engine,
//!   and repository traits
//! - **application**: The toll fee orchestration service
//! - **infrastructure**: External concerns (SeaORM database, migrations)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Errors and shutdown handling

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
