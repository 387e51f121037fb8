//! SeaORM repository implementations

pub mod repository_provider;
pub mod toll_fee_repository;
pub mod toll_free_date_repository;
pub mod toll_free_vehicle_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
pub use toll_fee_repository::SeaOrmTollFeeRepository;
pub use toll_free_date_repository::SeaOrmTollFreeDateRepository;
pub use toll_free_vehicle_repository::SeaOrmTollFreeVehicleRepository;
