//! SeaORM implementation of TollFeeRepository

use async_trait::async_trait;
use log::error;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::toll::repository::TollFeeRepository;
use crate::domain::{DomainResult, TollFee};
use crate::infrastructure::database::entities::toll_fee;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(model: toll_fee::Model) -> TollFee {
    TollFee {
        id: model.id,
        fee: model.fee,
        start: model.start,
        stop: model.stop,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── SeaOrmTollFeeRepository ─────────────────────────────────────

pub struct SeaOrmTollFeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmTollFeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TollFeeRepository for SeaOrmTollFeeRepository {
    /// Ordered by id so first-match precedence over overlapping bands is
    /// stable. A storage error is logged and yields the empty schedule
    /// (every passage then prices at 0) rather than failing the request.
    async fn find_all(&self) -> DomainResult<Vec<TollFee>> {
        let result = toll_fee::Entity::find()
            .order_by_asc(toll_fee::Column::Id)
            .all(&self.db)
            .await;

        match result {
            Ok(models) => Ok(models.into_iter().map(entity_to_domain).collect()),
            Err(e) => {
                error!("An error occurred while fetching toll fees: {}", e);
                Ok(Vec::new())
            }
        }
    }
}
