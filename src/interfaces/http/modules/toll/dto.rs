//! Toll calculation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to calculate the toll fee for a vehicle's passages
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CalculateTollRequest {
    /// Vehicle type identifier (e.g., "Car", "Motorbike")
    #[validate(length(min = 1, max = 100, message = "vehicle_type is required"))]
    pub vehicle_type: String,
    /// Timestamps of the vehicle's passages through toll points;
    /// need not be sorted
    pub passages: Vec<DateTime<Utc>>,
}

/// Calculated toll fee
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TollFeeResponse {
    /// Total billable amount across all passed days
    pub fee: i32,
}
