//! SeaORM implementation of TollFreeVehicleRepository

use std::collections::HashMap;

use async_trait::async_trait;
use log::error;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::toll::repository::TollFreeVehicleRepository;
use crate::domain::{DomainResult, TollFreeVehicle};
use crate::infrastructure::database::entities::toll_free_vehicle;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(model: toll_free_vehicle::Model) -> TollFreeVehicle {
    TollFreeVehicle {
        vehicle_type: model.vehicle_type,
        is_active: model.is_active,
    }
}

// ── SeaOrmTollFreeVehicleRepository ─────────────────────────────

pub struct SeaOrmTollFreeVehicleRepository {
    db: DatabaseConnection,
}

impl SeaOrmTollFreeVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TollFreeVehicleRepository for SeaOrmTollFreeVehicleRepository {
    /// A storage error is logged and yields an empty map (no vehicle is
    /// exempt) rather than failing the request.
    async fn find_all(&self) -> DomainResult<HashMap<String, TollFreeVehicle>> {
        let result = toll_free_vehicle::Entity::find().all(&self.db).await;

        match result {
            Ok(models) => Ok(models
                .into_iter()
                .map(|model| (model.vehicle_type.clone(), entity_to_domain(model)))
                .collect()),
            Err(e) => {
                error!("An error occurred while fetching toll free vehicles: {}", e);
                Ok(HashMap::new())
            }
        }
    }
}
