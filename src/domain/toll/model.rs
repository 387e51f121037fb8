//! Toll domain entities

use chrono::{DateTime, Utc};

use super::calculator::{is_between_minute_precision, time_of_day};

/// A recurring daily tariff band.
///
/// `start` and `stop` are stored as full timestamps, but only their
/// hour:minute component is ever compared; the band applies every day.
#[derive(Debug, Clone, PartialEq)]
pub struct TollFee {
    pub id: i32,
    /// Fee amount for a passage inside this band
    pub fee: i32,
    /// Band start; only the time-of-day component is significant
    pub start: DateTime<Utc>,
    /// Band stop; only the time-of-day component is significant
    pub stop: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TollFee {
    /// Whether a passage at `passed_at` falls inside this band's
    /// time-of-day interval, inclusive on both ends.
    pub fn applies_at(&self, passed_at: DateTime<Utc>) -> bool {
        let tod = time_of_day(passed_at);
        time_of_day(self.start) <= tod && tod <= time_of_day(self.stop)
    }
}

/// A concrete calendar interval during which all passages are toll-free.
#[derive(Debug, Clone, PartialEq)]
pub struct TollFreeDate {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TollFreeDate {
    /// Whether `passed_at` lies within this range, at minute precision,
    /// inclusive on both ends. Full date precision: this is a one-off
    /// calendar interval, not a recurring daily band.
    pub fn contains(&self, passed_at: DateTime<Utc>) -> bool {
        is_between_minute_precision(passed_at, self.start, self.stop)
    }
}

/// A vehicle classification exempt from all tolls while active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TollFreeVehicle {
    pub vehicle_type: String,
    pub is_active: bool,
}

/// One billable event produced by window consolidation: the anchor passage
/// of a charge window, carrying the maximum fee found in that window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeableEvent {
    pub passed_at: DateTime<Utc>,
    pub fee: i32,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn band(start_h: u32, start_m: u32, stop_h: u32, stop_m: u32, fee: i32) -> TollFee {
        TollFee {
            id: 1,
            fee,
            start: ts(2024, 1, 1, start_h, start_m, 0),
            stop: ts(2024, 1, 1, stop_h, stop_m, 0),
            is_active: true,
            created_at: ts(2024, 1, 1, 0, 0, 0),
            updated_at: ts(2024, 1, 1, 0, 0, 0),
        }
    }

    #[test]
    fn band_applies_regardless_of_date() {
        let fee = band(6, 0, 6, 29, 8);
        // Band stored on 2024-01-01, passage years later
        assert!(fee.applies_at(ts(2030, 7, 15, 6, 15, 0)));
        assert!(!fee.applies_at(ts(2030, 7, 15, 6, 30, 0)));
    }

    #[test]
    fn band_bounds_are_inclusive() {
        let fee = band(7, 0, 7, 59, 18);
        assert!(fee.applies_at(ts(2024, 3, 1, 7, 0, 0)));
        assert!(fee.applies_at(ts(2024, 3, 1, 7, 59, 0)));
        assert!(!fee.applies_at(ts(2024, 3, 1, 8, 0, 0)));
    }

    #[test]
    fn band_ignores_seconds() {
        let fee = band(6, 0, 6, 29, 8);
        // 06:29:59 truncates to 06:29, still inside
        assert!(fee.applies_at(ts(2024, 3, 1, 6, 29, 59)));
    }

    #[test]
    fn toll_free_date_is_date_specific() {
        let range = TollFreeDate {
            id: 1,
            start: ts(2024, 12, 24, 0, 0, 0),
            stop: ts(2024, 12, 26, 23, 59, 0),
            is_active: true,
            created_at: ts(2024, 1, 1, 0, 0, 0),
            updated_at: ts(2024, 1, 1, 0, 0, 0),
        };
        assert!(range.contains(ts(2024, 12, 25, 12, 0, 0)));
        // Same time-of-day on a different date is NOT covered
        assert!(!range.contains(ts(2024, 11, 25, 12, 0, 0)));
    }

    #[test]
    fn toll_free_date_bounds_are_inclusive_at_minute_precision() {
        let range = TollFreeDate {
            id: 1,
            start: ts(2024, 6, 6, 0, 0, 0),
            stop: ts(2024, 6, 6, 23, 59, 0),
            is_active: true,
            created_at: ts(2024, 1, 1, 0, 0, 0),
            updated_at: ts(2024, 1, 1, 0, 0, 0),
        };
        // 23:59:45 truncates to 23:59 == stop minute
        assert!(range.contains(ts(2024, 6, 6, 23, 59, 45)));
        assert!(!range.contains(ts(2024, 6, 7, 0, 0, 0)));
    }
}
