//! Fee schedule and exemption DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{TollFee, TollFreeDate, TollFreeVehicle};

/// Fee schedule entry
#[derive(Debug, Serialize, ToSchema)]
pub struct TollFeeDto {
    pub id: i32,
    pub fee: i32,
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub is_active: bool,
}

impl From<TollFee> for TollFeeDto {
    fn from(entry: TollFee) -> Self {
        Self {
            id: entry.id,
            fee: entry.fee,
            start: entry.start,
            stop: entry.stop,
            is_active: entry.is_active,
        }
    }
}

/// Toll-free calendar range
#[derive(Debug, Serialize, ToSchema)]
pub struct TollFreeDateDto {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub is_active: bool,
}

impl From<TollFreeDate> for TollFreeDateDto {
    fn from(range: TollFreeDate) -> Self {
        Self {
            id: range.id,
            start: range.start,
            stop: range.stop,
            is_active: range.is_active,
        }
    }
}

/// Exempt vehicle class
#[derive(Debug, Serialize, ToSchema)]
pub struct TollFreeVehicleDto {
    pub vehicle_type: String,
    pub is_active: bool,
}

impl From<TollFreeVehicle> for TollFreeVehicleDto {
    fn from(vehicle: TollFreeVehicle) -> Self {
        Self {
            vehicle_type: vehicle.vehicle_type,
            is_active: vehicle.is_active,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn toll_fee_dto_preserves_fields() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
        let stop = Utc.with_ymd_and_hms(2024, 1, 1, 6, 29, 0).unwrap();
        let dto = TollFeeDto::from(TollFee {
            id: 7,
            fee: 8,
            start,
            stop,
            is_active: true,
            created_at: start,
            updated_at: start,
        });
        assert_eq!(dto.id, 7);
        assert_eq!(dto.fee, 8);
        assert_eq!(dto.start, start);
        assert_eq!(dto.stop, stop);
        assert!(dto.is_active);
    }

    #[test]
    fn toll_free_vehicle_dto_preserves_fields() {
        let dto = TollFreeVehicleDto::from(TollFreeVehicle {
            vehicle_type: "Motorbike".to_string(),
            is_active: true,
        });
        assert_eq!(dto.vehicle_type, "Motorbike");
        assert!(dto.is_active);
    }
}
