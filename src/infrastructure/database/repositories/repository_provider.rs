//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::toll::repository::{
    TollFeeRepository, TollFreeDateRepository, TollFreeVehicleRepository,
};

use super::toll_fee_repository::SeaOrmTollFeeRepository;
use super::toll_free_date_repository::SeaOrmTollFreeDateRepository;
use super::toll_free_vehicle_repository::SeaOrmTollFreeVehicleRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let schedule = repos.toll_fees().find_all().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    toll_fees: SeaOrmTollFeeRepository,
    toll_free_dates: SeaOrmTollFreeDateRepository,
    toll_free_vehicles: SeaOrmTollFreeVehicleRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            toll_fees: SeaOrmTollFeeRepository::new(db.clone()),
            toll_free_dates: SeaOrmTollFreeDateRepository::new(db.clone()),
            toll_free_vehicles: SeaOrmTollFreeVehicleRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn toll_fees(&self) -> &dyn TollFeeRepository {
        &self.toll_fees
    }

    fn toll_free_dates(&self) -> &dyn TollFreeDateRepository {
        &self.toll_free_dates
    }

    fn toll_free_vehicles(&self) -> &dyn TollFreeVehicleRepository {
        &self.toll_free_vehicles
    }
}
