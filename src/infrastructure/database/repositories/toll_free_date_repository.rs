//! SeaORM implementation of TollFreeDateRepository

use async_trait::async_trait;
use log::error;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::toll::repository::TollFreeDateRepository;
use crate::domain::{DomainResult, TollFreeDate};
use crate::infrastructure::database::entities::toll_free_date;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(model: toll_free_date::Model) -> TollFreeDate {
    TollFreeDate {
        id: model.id,
        start: model.start,
        stop: model.stop,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── SeaOrmTollFreeDateRepository ────────────────────────────────

pub struct SeaOrmTollFreeDateRepository {
    db: DatabaseConnection,
}

impl SeaOrmTollFreeDateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TollFreeDateRepository for SeaOrmTollFreeDateRepository {
    /// A storage error is logged and yields no toll-free ranges (nothing
    /// gets filtered) rather than failing the request.
    async fn find_active(&self) -> DomainResult<Vec<TollFreeDate>> {
        let result = toll_free_date::Entity::find()
            .filter(toll_free_date::Column::IsActive.eq(true))
            .all(&self.db)
            .await;

        match result {
            Ok(models) => Ok(models.into_iter().map(entity_to_domain).collect()),
            Err(e) => {
                error!("An error occurred while fetching toll free dates: {}", e);
                Ok(Vec::new())
            }
        }
    }
}
