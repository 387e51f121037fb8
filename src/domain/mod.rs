pub mod repositories;
pub mod toll;

// Re-export commonly used types
pub use repositories::RepositoryProvider;
pub use toll::model::{ChargeableEvent, TollFee, TollFreeDate, TollFreeVehicle};

// Re-export error types from shared for convenience
pub use crate::shared::errors::{DomainError, DomainResult};
