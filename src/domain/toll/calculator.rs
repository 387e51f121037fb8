//! Toll fee rules engine.
//!
//! Pure functions that turn a sorted list of passage timestamps into a
//! billable amount: exemption filtering, fee schedule lookup, single-charge
//! window consolidation, and daily-cap aggregation. Two time precisions are
//! in play and deliberately kept apart:
//!
//! - minute-truncated full timestamps, for one-off calendar ranges
//! - time-of-day only (hour:minute), for recurring daily tariff bands

use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike, Utc};
use tracing::warn;

use super::model::{ChargeableEvent, TollFee, TollFreeDate};

/// Zero the seconds and sub-second components of a timestamp.
pub fn truncate_to_minute(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

/// Discard the date component entirely, keeping hour:minute only.
/// Used exclusively for matching against recurring fee-schedule bands.
pub fn time_of_day(ts: DateTime<Utc>) -> NaiveTime {
    NaiveTime::from_hms_opt(ts.hour(), ts.minute(), 0).unwrap_or_default()
}

/// Inclusive between-check at minute precision: all three arguments are
/// truncated to the minute before comparing.
pub fn is_between_minute_precision(
    value: DateTime<Utc>,
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
) -> bool {
    let value = truncate_to_minute(value);
    truncate_to_minute(start) <= value && value <= truncate_to_minute(stop)
}

/// Remove every passage that falls inside any toll-free calendar range.
pub fn remove_toll_free_dates(
    passages: &[DateTime<Utc>],
    toll_free: &[TollFreeDate],
) -> Vec<DateTime<Utc>> {
    passages
        .iter()
        .copied()
        .filter(|&passage| !toll_free.iter().any(|range| range.contains(passage)))
        .collect()
}

/// Fee for a single passage: the FIRST schedule entry (list order) whose
/// time-of-day band contains the passage wins. Entry order is significant
/// when bands overlap. No match is not an error; hours outside every band
/// are legitimately toll-free.
pub fn fee_for_passage(passed_at: DateTime<Utc>, schedule: &[TollFee]) -> i32 {
    match schedule.iter().find(|entry| entry.applies_at(passed_at)) {
        Some(entry) => entry.fee,
        None => {
            warn!("No fee found for passage at {}", passed_at);
            0
        }
    }
}

/// Apply the single-charge window rule: passages within
/// `window_minutes` of the FIRST passage in a cluster are billed once, at
/// the highest fee found in the cluster, attributed to the first passage.
///
/// The input must be sorted ascending; the window is measured from the
/// cluster anchor only, so a passage within range of a later cluster member
/// but outside range of the anchor starts a new cluster.
pub fn consolidate_passages(
    passages: &[DateTime<Utc>],
    schedule: &[TollFee],
    window_minutes: u32,
) -> Vec<ChargeableEvent> {
    let window = Duration::minutes(i64::from(window_minutes));
    let mut events = Vec::new();

    let mut i = 0;
    while i < passages.len() {
        let anchor = passages[i];
        let window_end = anchor + window;

        // Sorted input: everything in the window is a contiguous run from i.
        let mut j = i;
        while j < passages.len() && passages[j] <= window_end {
            j += 1;
        }

        if j == i {
            // The anchor always matches its own window; stop rather than spin.
            break;
        }

        let max_fee = passages[i..j]
            .iter()
            .map(|&passage| fee_for_passage(passage, schedule))
            .max()
            .unwrap_or(0);

        events.push(ChargeableEvent {
            passed_at: anchor,
            fee: max_fee,
        });

        i = j;
    }

    events
}

/// Sum chargeable events, capping each calendar day at `max_daily_fee`.
///
/// Within a day, fees accumulate in event order; the moment the running
/// total exceeds the cap, the day is clamped to exactly the cap and its
/// remaining events contribute nothing. Zero-fee events neither add nor
/// trigger the cap check.
pub fn total_fee_with_daily_cap(events: &[ChargeableEvent], max_daily_fee: i32) -> i32 {
    let mut days: Vec<((i32, u32), Vec<i32>)> = Vec::new();
    for event in events {
        let key = (event.passed_at.year(), event.passed_at.ordinal());
        match days.iter_mut().find(|(day, _)| *day == key) {
            Some((_, fees)) => fees.push(event.fee),
            None => days.push((key, vec![event.fee])),
        }
    }

    let mut total = 0;
    for (_, fees) in &days {
        let mut daily = 0;
        for &fee in fees {
            if fee != 0 {
                daily += fee;
                if daily > max_daily_fee {
                    daily = max_daily_fee;
                    break;
                }
            }
        }
        total += daily;
    }
    total
}

// ── Tests ──────────────────────────────────────────────────────
