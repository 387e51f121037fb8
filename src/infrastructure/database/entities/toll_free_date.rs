//! Toll-free date range entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Calendar interval during which all passages are toll-free
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "toll_free_dates")]
pub struct Model {
    /// Unique range ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Range start (full date + time)
    pub start: DateTime<Utc>,

    /// Range stop (full date + time, inclusive at minute precision)
    pub stop: DateTime<Utc>,

    /// Whether this range is active; inactive ranges are ignored
    pub is_active: bool,

    /// When the range was created
    pub created_at: DateTime<Utc>,

    /// When the range was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
