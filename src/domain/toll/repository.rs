//! Toll data repository interfaces

use std::collections::HashMap;

use async_trait::async_trait;

use super::model::{TollFee, TollFreeDate, TollFreeVehicle};
use crate::domain::DomainResult;

#[async_trait]
pub trait TollFeeRepository: Send + Sync {
    /// All fee schedule entries, ordered by id so that first-match
    /// precedence over overlapping bands is deterministic.
    async fn find_all(&self) -> DomainResult<Vec<TollFee>>;
}

#[async_trait]
pub trait TollFreeDateRepository: Send + Sync {
    /// Active toll-free calendar ranges only; inactive rows are ignored.
    async fn find_active(&self) -> DomainResult<Vec<TollFreeDate>>;
}

#[async_trait]
pub trait TollFreeVehicleRepository: Send + Sync {
    /// All vehicle classes keyed by vehicle type; callers check `is_active`.
    async fn find_all(&self) -> DomainResult<HashMap<String, TollFreeVehicle>>;
}
