//! Toll fee schedule entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fee schedule entry - a recurring daily tariff band.
///
/// `start`/`stop` are stored as full timestamps but only their hour:minute
/// component is significant for fee matching.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "toll_fees")]
pub struct Model {
    /// Unique entry ID; list order for first-match precedence
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Fee amount charged for a passage inside this band
    pub fee: i32,

    /// Band start (time-of-day component)
    pub start: DateTime<Utc>,

    /// Band stop (time-of-day component, inclusive)
    pub stop: DateTime<Utc>,

    /// Whether this entry is active
    pub is_active: bool,

    /// When the entry was created
    pub created_at: DateTime<Utc>,

    /// When the entry was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
