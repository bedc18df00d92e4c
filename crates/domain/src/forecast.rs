// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Predictive maintenance scoring.
//!
//! Flags vehicles overdue for service based on distance and time since
//! their last completed maintenance. Forecasts are **computed**, not
//! stored; they are a pure function of current state.

use crate::types::{MaintenanceRecord, MaintenanceStatus, Severity, Vehicle, VehicleStatus};
use time::Date;

/// Distance since last service that triggers an alert, in kilometers.
pub const SERVICE_DISTANCE_THRESHOLD_KM: u32 = 10_000;

/// Time since last service that triggers an alert, in days.
pub const SERVICE_AGE_THRESHOLD_DAYS: i64 = 90;

/// Multiplier over a threshold at which an alert escalates to critical.
const CRITICAL_MULTIPLIER: f64 = 1.5;

/// What triggered a maintenance alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastTrigger {
    /// Distance since last service crossed the threshold.
    Mileage,
    /// Time since last service crossed the threshold.
    Age,
    /// The vehicle has no completed service history at all.
    NoHistory,
}

/// A single overdue-service alert for a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceAlert {
    /// What triggered this alert.
    pub trigger: ForecastTrigger,
    /// The alert severity.
    pub severity: Severity,
    /// Human-readable reason.
    pub reason: String,
    /// Kilometers since the last completed service, when known.
    pub km_since_service: Option<u32>,
    /// Days since the last completed service, when known.
    pub days_since_service: Option<i64>,
}

/// All alerts raised for a single vehicle.
///
/// A vehicle may carry a mileage alert and an age alert simultaneously.
/// Vehicles with no triggered condition are excluded from the result set.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleForecast {
    /// The flagged vehicle.
    pub vehicle: Vehicle,
    /// The alerts raised for it, never empty.
    pub alerts: Vec<MaintenanceAlert>,
}

impl VehicleForecast {
    /// Returns the worst severity among this vehicle's alerts.
    #[must_use]
    pub fn worst_severity(&self) -> Severity {
        self.alerts
            .iter()
            .map(|a| a.severity)
            .min_by_key(Severity::rank)
            .unwrap_or(Severity::Warning)
    }
}

/// Finds the most recent completed maintenance record for a vehicle.
fn last_completed_service<'a>(
    vehicle: &Vehicle,
    records: &'a [MaintenanceRecord],
) -> Option<&'a MaintenanceRecord> {
    records
        .iter()
        .filter(|r| r.vehicle_id == vehicle.id && r.status == MaintenanceStatus::Completed)
        .min_by_key(|r| std::cmp::Reverse(r.date))
}

/// Escalates to critical once the measured value reaches 1.5x the threshold.
fn severity_for(measured: f64, threshold: f64) -> Severity {
    if measured >= threshold * CRITICAL_MULTIPLIER {
        Severity::Critical
    } else {
        Severity::Warning
    }
}

/// Flags vehicles overdue for service.
///
/// For each vehicle that is not Out of Service:
/// - with no completed service history: one warning alert,
/// - otherwise: a mileage alert when the distance since the last completed
///   service reaches [`SERVICE_DISTANCE_THRESHOLD_KM`], and an age alert
///   when the time since it reaches [`SERVICE_AGE_THRESHOLD_DAYS`]. Each
///   escalates to critical at 1.5x its threshold.
///
/// # Arguments
///
/// * `vehicles` - The vehicle collection
/// * `records` - The maintenance record collection
/// * `today` - The evaluation date
#[must_use]
pub fn forecast_maintenance(
    vehicles: &[Vehicle],
    records: &[MaintenanceRecord],
    today: Date,
) -> Vec<VehicleForecast> {
    vehicles
        .iter()
        .filter(|v| v.status != VehicleStatus::OutOfService)
        .filter_map(|vehicle| {
            let mut alerts: Vec<MaintenanceAlert> = Vec::new();

            if let Some(last) = last_completed_service(vehicle, records) {
                let km_since: u32 = vehicle.odometer_km.saturating_sub(last.odometer_at_service_km);
                let days_since: i64 = (today - last.date).whole_days();

                if km_since >= SERVICE_DISTANCE_THRESHOLD_KM {
                    alerts.push(MaintenanceAlert {
                        trigger: ForecastTrigger::Mileage,
                        severity: severity_for(
                            f64::from(km_since),
                            f64::from(SERVICE_DISTANCE_THRESHOLD_KM),
                        ),
                        reason: format!(
                            "{km_since} km since last service (threshold: {SERVICE_DISTANCE_THRESHOLD_KM} km)"
                        ),
                        km_since_service: Some(km_since),
                        days_since_service: None,
                    });
                }
                if days_since >= SERVICE_AGE_THRESHOLD_DAYS {
                    #[allow(clippy::cast_precision_loss)]
                    alerts.push(MaintenanceAlert {
                        trigger: ForecastTrigger::Age,
                        severity: severity_for(
                            days_since as f64,
                            SERVICE_AGE_THRESHOLD_DAYS as f64,
                        ),
                        reason: format!(
                            "{days_since} days since last service (threshold: {SERVICE_AGE_THRESHOLD_DAYS} days)"
                        ),
                        km_since_service: None,
                        days_since_service: Some(days_since),
                    });
                }
            } else {
                alerts.push(MaintenanceAlert {
                    trigger: ForecastTrigger::NoHistory,
                    severity: Severity::Warning,
                    reason: String::from(
                        "No service history found. Schedule an initial inspection",
                    ),
                    km_since_service: None,
                    days_since_service: None,
                });
            }

            if alerts.is_empty() {
                None
            } else {
                Some(VehicleForecast {
                    vehicle: vehicle.clone(),
                    alerts,
                })
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::{LicensePlate, MaintenanceId, VehicleId, VehicleType};
    use time::macros::date;

    fn test_vehicle(id: &str, odometer: u32, status: VehicleStatus) -> Vehicle {
        Vehicle {
            id: VehicleId::new(id),
            name: format!("Vehicle {id}"),
            model: String::from("2023"),
            license_plate: LicensePlate::new(&format!("KA-01-{id}")),
            vehicle_type: VehicleType::Truck,
            region: String::from("South"),
            max_capacity_kg: 25_000,
            odometer_km: odometer,
            status,
            acquisition_cost: 4_500_000.0,
            revenue: 1_200_000.0,
        }
    }

    fn completed_service(vehicle_id: &str, odometer: u32, date: Date) -> MaintenanceRecord {
        MaintenanceRecord {
            id: MaintenanceId::generate(),
            vehicle_id: VehicleId::new(vehicle_id),
            service_type: String::from("Oil Change"),
            description: String::new(),
            cost: 5_500.0,
            date,
            status: MaintenanceStatus::Completed,
            odometer_at_service_km: odometer,
        }
    }

    #[test]
    fn test_mileage_over_threshold_warns() {
        // 45_230 - 35_000 = 10_230 km: over 10_000, under 15_000.
        let vehicles = vec![test_vehicle("v1", 45_230, VehicleStatus::Available)];
        let records = vec![completed_service("v1", 35_000, date!(2026 - 02 - 01))];

        let forecasts = forecast_maintenance(&vehicles, &records, date!(2026 - 02 - 20));
        assert_eq!(forecasts.len(), 1);
        let alert = &forecasts[0].alerts[0];
        assert_eq!(alert.trigger, ForecastTrigger::Mileage);
        assert_eq!(alert.severity, Severity::Warning);
        assert_eq!(alert.km_since_service, Some(10_230));
    }

    #[test]
    fn test_mileage_far_over_threshold_is_critical() {
        let vehicles = vec![test_vehicle("v1", 50_000, VehicleStatus::Available)];
        let records = vec![completed_service("v1", 35_000, date!(2026 - 02 - 01))];

        let forecasts = forecast_maintenance(&vehicles, &records, date!(2026 - 02 - 20));
        assert_eq!(forecasts[0].alerts[0].severity, Severity::Critical);
    }

    #[test]
    fn test_age_over_threshold_warns() {
        let vehicles = vec![test_vehicle("v1", 36_000, VehicleStatus::Available)];
        let records = vec![completed_service("v1", 35_000, date!(2025 - 11 - 01))];

        // 111 days since service: over 90, under 135.
        let forecasts = forecast_maintenance(&vehicles, &records, date!(2026 - 02 - 20));
        assert_eq!(forecasts.len(), 1);
        let alert = &forecasts[0].alerts[0];
        assert_eq!(alert.trigger, ForecastTrigger::Age);
        assert_eq!(alert.severity, Severity::Warning);
        assert_eq!(alert.days_since_service, Some(111));
    }

    #[test]
    fn test_age_far_over_threshold_is_critical() {
        let vehicles = vec![test_vehicle("v1", 36_000, VehicleStatus::Available)];
        let records = vec![completed_service("v1", 35_000, date!(2025 - 09 - 01))];

        let forecasts = forecast_maintenance(&vehicles, &records, date!(2026 - 02 - 20));
        assert_eq!(forecasts[0].alerts[0].severity, Severity::Critical);
    }

    #[test]
    fn test_both_alerts_can_coexist() {
        let vehicles = vec![test_vehicle("v1", 50_000, VehicleStatus::Available)];
        let records = vec![completed_service("v1", 35_000, date!(2025 - 09 - 01))];

        let forecasts = forecast_maintenance(&vehicles, &records, date!(2026 - 02 - 20));
        assert_eq!(forecasts[0].alerts.len(), 2);
        assert_eq!(forecasts[0].worst_severity(), Severity::Critical);
    }

    #[test]
    fn test_no_history_warns() {
        let vehicles = vec![test_vehicle("v1", 8_750, VehicleStatus::Available)];

        let forecasts = forecast_maintenance(&vehicles, &[], date!(2026 - 02 - 20));
        assert_eq!(forecasts.len(), 1);
        assert_eq!(forecasts[0].alerts[0].trigger, ForecastTrigger::NoHistory);
        assert_eq!(forecasts[0].alerts[0].severity, Severity::Warning);
    }

    #[test]
    fn test_recently_serviced_vehicle_excluded() {
        let vehicles = vec![test_vehicle("v1", 36_000, VehicleStatus::Available)];
        let records = vec![completed_service("v1", 35_000, date!(2026 - 02 - 14))];

        let forecasts = forecast_maintenance(&vehicles, &records, date!(2026 - 02 - 20));
        assert!(forecasts.is_empty());
    }

    #[test]
    fn test_out_of_service_vehicle_skipped() {
        let vehicles = vec![test_vehicle("v1", 90_000, VehicleStatus::OutOfService)];

        let forecasts = forecast_maintenance(&vehicles, &[], date!(2026 - 02 - 20));
        assert!(forecasts.is_empty());
    }

    #[test]
    fn test_most_recent_completed_record_wins() {
        let vehicles = vec![test_vehicle("v1", 46_000, VehicleStatus::Available)];
        let mut in_progress = completed_service("v1", 45_500, date!(2026 - 02 - 18));
        in_progress.status = MaintenanceStatus::InProgress;
        let records = vec![
            completed_service("v1", 30_000, date!(2025 - 10 - 01)),
            completed_service("v1", 44_800, date!(2026 - 02 - 14)),
            in_progress,
        ];

        // The 2026-02-14 completed record governs: 1_200 km, 6 days, no alert.
        let forecasts = forecast_maintenance(&vehicles, &records, date!(2026 - 02 - 20));
        assert!(forecasts.is_empty());
    }
}
