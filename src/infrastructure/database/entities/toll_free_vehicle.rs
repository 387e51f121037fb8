//! Toll-free vehicle class entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vehicle classification exempt from all tolls while active
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "toll_free_vehicles")]
pub struct Model {
    /// Unique row ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Vehicle type identifier (e.g., "Motorbike", "Emergency")
    #[sea_orm(unique)]
    pub vehicle_type: String,

    /// Whether the exemption is active
    pub is_active: bool,

    /// When the class was created
    pub created_at: DateTime<Utc>,

    /// When the class was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
