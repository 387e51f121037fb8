//! Toll calculation domain: entities, repository traits, and the rules engine

pub mod calculator;
pub mod model;
pub mod repository;

pub use model::{ChargeableEvent, TollFee, TollFreeDate, TollFreeVehicle};
pub use repository::{TollFeeRepository, TollFreeDateRepository, TollFreeVehicleRepository};
