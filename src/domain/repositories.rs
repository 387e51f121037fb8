//! Repository provider for the domain layer

use super::toll::repository::{
    TollFeeRepository, TollFreeDateRepository, TollFreeVehicleRepository,
};

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let schedule = repos.toll_fees().find_all().await?;
///     let exempt = repos.toll_free_vehicles().find_all().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn toll_fees(&self) -> &dyn TollFeeRepository;
    fn toll_free_dates(&self) -> &dyn TollFreeDateRepository;
    fn toll_free_vehicles(&self) -> &dyn TollFreeVehicleRepository;
}
