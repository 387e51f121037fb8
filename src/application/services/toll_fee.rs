//! Toll fee orchestration service.
//!
//! Entry point for a toll calculation request: checks the vehicle exemption
//! (short-circuits to zero), then pipes the passages through the rules
//! engine: exemption filter, window consolidation, daily-cap aggregation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::TollSettings;
use crate::domain::toll::calculator::{
    consolidate_passages, remove_toll_free_dates, total_fee_with_daily_cap,
};
use crate::domain::RepositoryProvider;

/// Service computing the billable toll for a vehicle's recorded passages.
///
/// Stateless per request: every calculation works on fresh snapshots fetched
/// from the repositories, so concurrent requests never share mutable state.
pub struct TollFeeService {
    repos: Arc<dyn RepositoryProvider>,
    settings: TollSettings,
}

impl TollFeeService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, settings: TollSettings) -> Self {
        Self { repos, settings }
    }

    /// Compute the total toll fee for the given vehicle and passages.
    ///
    /// Never fails: a repository error degrades to the empty collection,
    /// which prices passages at zero / exempts nothing.
    pub async fn calculate_toll_fee(
        &self,
        vehicle_type: &str,
        mut passages: Vec<DateTime<Utc>>,
    ) -> i32 {
        // Awaited alone: a positive result makes the other fetches pointless.
        if self.is_toll_free_vehicle(vehicle_type).await {
            debug!("Vehicle type {} is toll free", vehicle_type);
            return 0;
        }

        passages.sort_unstable();

        // Independent reads; join before consolidation.
        let (toll_free_dates, schedule) = tokio::join!(
            self.repos.toll_free_dates().find_active(),
            self.repos.toll_fees().find_all(),
        );
        let toll_free_dates = toll_free_dates.unwrap_or_else(|e| {
            warn!("Failed to fetch toll free dates, treating none as exempt: {}", e);
            Vec::new()
        });
        let schedule = schedule.unwrap_or_else(|e| {
            warn!("Failed to fetch fee schedule, pricing passages at 0: {}", e);
            Vec::new()
        });

        let passages = remove_toll_free_dates(&passages, &toll_free_dates);
        let events =
            consolidate_passages(&passages, &schedule, self.settings.free_passage_minutes);
        total_fee_with_daily_cap(&events, self.settings.max_daily_fee)
    }

    async fn is_toll_free_vehicle(&self, vehicle_type: &str) -> bool {
        let toll_free = match self.repos.toll_free_vehicles().find_all().await {
            Ok(map) => map,
            Err(e) => {
                warn!("Failed to fetch toll free vehicles, treating none as exempt: {}", e);
                return false;
            }
        };
        toll_free
            .get(vehicle_type)
            .map(|vehicle| vehicle.is_active)
            .unwrap_or(false)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use async_trait::async_trait;
    use chrono::TimeZone;

    use crate::domain::toll::repository::{
        TollFeeRepository, TollFreeDateRepository, TollFreeVehicleRepository,
    };
    use crate::domain::{DomainError, DomainResult, TollFee, TollFreeDate, TollFreeVehicle};

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn band(start_h: u32, start_m: u32, stop_h: u32, stop_m: u32, fee: i32) -> TollFee {
        TollFee {
            id: 0,
            fee,
            start: ts(2024, 1, 1, start_h, start_m, 0),
            stop: ts(2024, 1, 1, stop_h, stop_m, 0),
            is_active: true,
            created_at: ts(2024, 1, 1, 0, 0, 0),
            updated_at: ts(2024, 1, 1, 0, 0, 0),
        }
    }

    /// In-memory repository provider; `fail` makes every query error.
    #[derive(Default)]
    struct StubRepos {
        fees: Vec<TollFee>,
        dates: Vec<TollFreeDate>,
        vehicles: HashMap<String, TollFreeVehicle>,
        fail: bool,
    }

    impl StubRepos {
        fn check(&self) -> DomainResult<()> {
            if self.fail {
                Err(DomainError::Validation("storage unreachable".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl TollFeeRepository for StubRepos {
        async fn find_all(&self) -> DomainResult<Vec<TollFee>> {
            self.check()?;
            Ok(self.fees.clone())
        }
    }

    #[async_trait]
    impl TollFreeDateRepository for StubRepos {
        async fn find_active(&self) -> DomainResult<Vec<TollFreeDate>> {
            self.check()?;
            Ok(self.dates.clone())
        }
    }

    #[async_trait]
    impl TollFreeVehicleRepository for StubRepos {
        async fn find_all(&self) -> DomainResult<HashMap<String, TollFreeVehicle>> {
            self.check()?;
            Ok(self.vehicles.clone())
        }
    }

    impl RepositoryProvider for StubRepos {
        fn toll_fees(&self) -> &dyn TollFeeRepository {
            self
        }
        fn toll_free_dates(&self) -> &dyn TollFreeDateRepository {
            self
        }
        fn toll_free_vehicles(&self) -> &dyn TollFreeVehicleRepository {
            self
        }
    }

    fn service(repos: StubRepos) -> TollFeeService {
        TollFeeService::new(
            Arc::new(repos),
            TollSettings {
                free_passage_minutes: 60,
                max_daily_fee: 60,
            },
        )
    }

    fn exempt(vehicle_type: &str, is_active: bool) -> (String, TollFreeVehicle) {
        (
            vehicle_type.to_string(),
            TollFreeVehicle {
                vehicle_type: vehicle_type.to_string(),
                is_active,
            },
        )
    }

    #[tokio::test]
    async fn empty_data_always_yields_zero() {
        let svc = service(StubRepos::default());
        let fee = svc
            .calculate_toll_fee("Car", vec![ts(2024, 3, 4, 7, 0, 0), ts(2024, 3, 4, 9, 0, 0)])
            .await;
        assert_eq!(fee, 0);
    }

    #[tokio::test]
    async fn active_exempt_vehicle_is_never_charged() {
        let svc = service(StubRepos {
            fees: vec![band(6, 0, 18, 29, 18)],
            vehicles: [exempt("Motorbike", true)].into(),
            ..Default::default()
        });
        let fee = svc
            .calculate_toll_fee("Motorbike", vec![ts(2024, 3, 4, 7, 0, 0)])
            .await;
        assert_eq!(fee, 0);
    }

    #[tokio::test]
    async fn inactive_exempt_class_is_charged() {
        let svc = service(StubRepos {
            fees: vec![band(6, 0, 18, 29, 18)],
            vehicles: [exempt("Motorbike", false)].into(),
            ..Default::default()
        });
        let fee = svc
            .calculate_toll_fee("Motorbike", vec![ts(2024, 3, 4, 7, 0, 0)])
            .await;
        assert_eq!(fee, 18);
    }

    #[tokio::test]
    async fn unsorted_passages_are_sorted_before_windowing() {
        let svc = service(StubRepos {
            fees: vec![band(6, 0, 18, 29, 10)],
            ..Default::default()
        });
        // Same cluster, given out of order
        let fee = svc
            .calculate_toll_fee(
                "Car",
                vec![
                    ts(2024, 3, 4, 7, 30, 0),
                    ts(2024, 3, 4, 7, 0, 0),
                    ts(2024, 3, 4, 7, 15, 0),
                ],
            )
            .await;
        assert_eq!(fee, 10);
    }

    #[tokio::test]
    async fn toll_free_date_removes_covered_passages() {
        let svc = service(StubRepos {
            fees: vec![band(6, 0, 18, 29, 10)],
            dates: vec![TollFreeDate {
                id: 1,
                start: ts(2024, 6, 6, 0, 0, 0),
                stop: ts(2024, 6, 6, 23, 59, 0),
                is_active: true,
                created_at: ts(2024, 1, 1, 0, 0, 0),
                updated_at: ts(2024, 1, 1, 0, 0, 0),
            }],
            ..Default::default()
        });
        let fee = svc
            .calculate_toll_fee(
                "Car",
                vec![ts(2024, 6, 6, 7, 0, 0), ts(2024, 6, 7, 7, 0, 0)],
            )
            .await;
        assert_eq!(fee, 10);
    }

    #[tokio::test]
    async fn daily_cap_applies_per_day() {
        let svc = service(StubRepos {
            fees: vec![band(0, 0, 23, 59, 25)],
            ..Default::default()
        });
        // Three windows per day, two days: 75 → capped to 60, twice
        let fee = svc
            .calculate_toll_fee(
                "Car",
                vec![
                    ts(2024, 3, 4, 6, 0, 0),
                    ts(2024, 3, 4, 9, 0, 0),
                    ts(2024, 3, 4, 12, 0, 0),
                    ts(2024, 3, 5, 6, 0, 0),
                    ts(2024, 3, 5, 9, 0, 0),
                    ts(2024, 3, 5, 12, 0, 0),
                ],
            )
            .await;
        assert_eq!(fee, 120);
    }

    #[tokio::test]
    async fn storage_failure_degrades_to_zero_fee() {
        let svc = service(StubRepos {
            fees: vec![band(6, 0, 18, 29, 18)],
            fail: true,
            ..Default::default()
        });
        let fee = svc
            .calculate_toll_fee("Car", vec![ts(2024, 3, 4, 7, 0, 0)])
            .await;
        assert_eq!(fee, 0);
    }

    #[tokio::test]
    async fn empty_passage_list_yields_zero() {
        let svc = service(StubRepos {
            fees: vec![band(6, 0, 18, 29, 18)],
            ..Default::default()
        });
        assert_eq!(svc.calculate_toll_fee("Car", Vec::new()).await, 0);
    }
}
