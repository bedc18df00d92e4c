// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Financial risk and ROI scoring.
//!
//! Identifies vehicles that are financially underperforming, and provides
//! the per-vehicle and per-driver operating metrics the dashboard reports
//! are built from. All computations are pure functions of current state.

use crate::types::{DriverId, FuelLog, MaintenanceRecord, Trip, TripStatus, Vehicle, VehicleId};

/// ROI below this percentage flags a vehicle, when it has an acquisition cost.
pub const POOR_ROI_THRESHOLD_PCT: f64 = 5.0;

/// Maintenance consuming more than this share of revenue flags a vehicle.
pub const MAINTENANCE_BURDEN_RATIO: f64 = 0.20;

/// Operating costs attributed to a single vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VehicleCosts {
    /// Total fuel spend.
    pub fuel_cost: f64,
    /// Total maintenance spend.
    pub maintenance_cost: f64,
    /// Fuel plus maintenance.
    pub total: f64,
}

/// Sums the operating costs attributed to a vehicle.
///
/// # Arguments
///
/// * `vehicle_id` - The vehicle to total
/// * `fuel_logs` - The fuel log collection
/// * `records` - The maintenance record collection
#[must_use]
pub fn vehicle_costs(
    vehicle_id: &VehicleId,
    fuel_logs: &[FuelLog],
    records: &[MaintenanceRecord],
) -> VehicleCosts {
    let fuel_cost: f64 = fuel_logs
        .iter()
        .filter(|f| &f.vehicle_id == vehicle_id)
        .map(|f| f.cost)
        .sum();
    let maintenance_cost: f64 = records
        .iter()
        .filter(|m| &m.vehicle_id == vehicle_id)
        .map(|m| m.cost)
        .sum();

    VehicleCosts {
        fuel_cost,
        maintenance_cost,
        total: fuel_cost + maintenance_cost,
    }
}

/// Returns a vehicle's return on investment as a percentage.
///
/// ROI = (revenue - total operating cost) / acquisition cost x 100.
/// Vehicles with no acquisition cost report 0.
#[must_use]
pub fn vehicle_roi(vehicle: &Vehicle, total_cost: f64) -> f64 {
    if vehicle.acquisition_cost > 0.0 {
        (vehicle.revenue - total_cost) / vehicle.acquisition_cost * 100.0
    } else {
        0.0
    }
}

/// Returns a vehicle's operating cost per kilometer driven.
///
/// Vehicles with no odometer reading report 0.
#[must_use]
pub fn cost_per_km(vehicle: &Vehicle, total_cost: f64) -> f64 {
    if vehicle.odometer_km > 0 {
        total_cost / f64::from(vehicle.odometer_km)
    } else {
        0.0
    }
}

/// A financially underperforming vehicle with its accumulated risk flags.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialRisk {
    /// The flagged vehicle.
    pub vehicle: Vehicle,
    /// Its operating costs.
    pub costs: VehicleCosts,
    /// Its cumulative revenue.
    pub revenue: f64,
    /// Its ROI percentage.
    pub roi_pct: f64,
    /// Human-readable risk flags, never empty.
    pub risks: Vec<String>,
}

/// Identifies vehicles that are financially underperforming.
///
/// Flags are evaluated independently, with no short-circuit; a vehicle may
/// accumulate several:
/// - operating at a loss (total cost exceeds positive revenue),
/// - poor ROI (below [`POOR_ROI_THRESHOLD_PCT`] with a real acquisition
///   cost),
/// - high maintenance burden (maintenance above
///   [`MAINTENANCE_BURDEN_RATIO`] of revenue).
///
/// Vehicles with no flags are excluded from the result.
#[must_use]
pub fn assess_financial_risks(
    vehicles: &[Vehicle],
    fuel_logs: &[FuelLog],
    records: &[MaintenanceRecord],
) -> Vec<FinancialRisk> {
    vehicles
        .iter()
        .filter_map(|vehicle| {
            let costs: VehicleCosts = vehicle_costs(&vehicle.id, fuel_logs, records);
            let revenue: f64 = vehicle.revenue;
            let roi_pct: f64 = vehicle_roi(vehicle, costs.total);

            let mut risks: Vec<String> = Vec::new();

            if costs.total > revenue && revenue > 0.0 {
                risks.push(format!(
                    "Operating at a loss: cost ({:.0}) exceeds revenue ({revenue:.0})",
                    costs.total
                ));
            }
            if roi_pct < POOR_ROI_THRESHOLD_PCT && vehicle.acquisition_cost > 0.0 {
                risks.push(format!(
                    "Poor ROI: {roi_pct:.1}% on {:.0} acquisition cost",
                    vehicle.acquisition_cost
                ));
            }
            if revenue > 0.0 && costs.maintenance_cost / revenue > MAINTENANCE_BURDEN_RATIO {
                risks.push(format!(
                    "High maintenance: service costs consume {:.0}% of generated revenue",
                    costs.maintenance_cost / revenue * 100.0
                ));
            }

            if risks.is_empty() {
                None
            } else {
                Some(FinancialRisk {
                    vehicle: vehicle.clone(),
                    costs,
                    revenue,
                    roi_pct,
                    risks,
                })
            }
        })
        .collect()
}

/// Trip statistics for a single driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DriverTripStats {
    /// Trips ever assigned to the driver.
    pub total: usize,
    /// Trips the driver completed.
    pub completed: usize,
    /// Completion rate as a rounded percentage.
    pub completion_rate_pct: u32,
}

/// Computes trip statistics for a driver.
#[must_use]
pub fn driver_trip_stats(driver_id: &DriverId, trips: &[Trip]) -> DriverTripStats {
    let assigned: Vec<&Trip> = trips.iter().filter(|t| &t.driver_id == driver_id).collect();
    let total: usize = assigned.len();
    let completed: usize = assigned
        .iter()
        .filter(|t| t.status == TripStatus::Completed)
        .count();

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let completion_rate_pct: u32 = if total > 0 {
        (completed as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    DriverTripStats {
        total,
        completed,
        completion_rate_pct,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::{
        DriverId, FuelLogId, LicensePlate, MaintenanceId, MaintenanceStatus, TripId, VehicleId,
        VehicleType,
    };
    use time::macros::date;

    fn test_vehicle(id: &str, acquisition_cost: f64, revenue: f64) -> Vehicle {
        Vehicle {
            id: VehicleId::new(id),
            name: format!("Vehicle {id}"),
            model: String::from("2023"),
            license_plate: LicensePlate::new(&format!("KA-01-{id}")),
            vehicle_type: VehicleType::Truck,
            region: String::from("South"),
            max_capacity_kg: 25_000,
            odometer_km: 45_230,
            status: crate::types::VehicleStatus::Available,
            acquisition_cost,
            revenue,
        }
    }

    fn fuel(vehicle_id: &str, cost: f64) -> FuelLog {
        FuelLog {
            id: FuelLogId::generate(),
            vehicle_id: VehicleId::new(vehicle_id),
            liters: 100.0,
            cost,
            date: date!(2026 - 02 - 18),
            station: String::from("HP Petrol Pump"),
        }
    }

    fn service(vehicle_id: &str, cost: f64) -> MaintenanceRecord {
        MaintenanceRecord {
            id: MaintenanceId::generate(),
            vehicle_id: VehicleId::new(vehicle_id),
            service_type: String::from("Brake Inspection"),
            description: String::new(),
            cost,
            date: date!(2026 - 02 - 10),
            status: MaintenanceStatus::Completed,
            odometer_at_service_km: 40_000,
        }
    }

    fn trip(driver_id: &str, status: TripStatus) -> Trip {
        Trip {
            id: TripId::generate(),
            vehicle_id: VehicleId::new("v1"),
            driver_id: DriverId::new(driver_id),
            cargo_weight_kg: 10_000,
            cargo_description: String::from("Steel Coils"),
            origin: String::from("Mumbai"),
            destination: String::from("Delhi"),
            status,
            created_at: date!(2026 - 02 - 15),
            dispatched_at: None,
            completed_at: None,
        }
    }

    #[test]
    fn test_costs_sum_only_the_target_vehicle() {
        let fuel_logs = vec![fuel("v1", 18_000.0), fuel("v2", 9_000.0), fuel("v1", 16_000.0)];
        let records = vec![service("v1", 5_500.0), service("v2", 120_000.0)];

        let costs = vehicle_costs(&VehicleId::new("v1"), &fuel_logs, &records);
        assert!((costs.fuel_cost - 34_000.0).abs() < f64::EPSILON);
        assert!((costs.maintenance_cost - 5_500.0).abs() < f64::EPSILON);
        assert!((costs.total - 39_500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roi_zero_without_acquisition_cost() {
        let vehicle = test_vehicle("v1", 0.0, 500_000.0);
        assert!(vehicle_roi(&vehicle, 100_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cost_per_km_zero_without_odometer() {
        let mut vehicle = test_vehicle("v1", 1_000_000.0, 0.0);
        vehicle.odometer_km = 0;
        assert!(cost_per_km(&vehicle, 50_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_loss_and_poor_roi_flagged_together() {
        // total cost 1_100_000 > revenue 1_000_000; roi = -100_000 / 4_500_000
        // = -2.2%, below the 5% threshold.
        let vehicles = vec![test_vehicle("v1", 4_500_000.0, 1_000_000.0)];
        let fuel_logs = vec![fuel("v1", 800_000.0)];
        let records = vec![service("v1", 300_000.0)];

        let risks = assess_financial_risks(&vehicles, &fuel_logs, &records);
        assert_eq!(risks.len(), 1);
        let risk = &risks[0];
        assert!(risk.risks.iter().any(|r| r.contains("Operating at a loss")));
        assert!(risk.risks.iter().any(|r| r.contains("Poor ROI")));
        assert!(risk.roi_pct < 0.0);
    }

    #[test]
    fn test_maintenance_burden_flagged() {
        let vehicles = vec![test_vehicle("v1", 0.0, 1_000_000.0)];
        let records = vec![service("v1", 250_000.0)];

        let risks = assess_financial_risks(&vehicles, &[], &records);
        assert_eq!(risks.len(), 1);
        assert!(risks[0].risks.iter().any(|r| r.contains("High maintenance")));
    }

    #[test]
    fn test_healthy_vehicle_excluded() {
        // ROI = (1_200_000 - 39_500) / 4_500_000 = 25.8%.
        let vehicles = vec![test_vehicle("v1", 4_500_000.0, 1_200_000.0)];
        let fuel_logs = vec![fuel("v1", 34_000.0)];
        let records = vec![service("v1", 5_500.0)];

        let risks = assess_financial_risks(&vehicles, &fuel_logs, &records);
        assert!(risks.is_empty());
    }

    #[test]
    fn test_zero_revenue_vehicle_not_flagged_for_loss() {
        // Loss flag requires positive revenue; poor ROI still applies.
        let vehicles = vec![test_vehicle("v1", 7_500_000.0, 0.0)];
        let fuel_logs = vec![fuel("v1", 20_000.0)];

        let risks = assess_financial_risks(&vehicles, &fuel_logs, &[]);
        assert_eq!(risks.len(), 1);
        assert!(!risks[0].risks.iter().any(|r| r.contains("loss")));
        assert!(risks[0].risks.iter().any(|r| r.contains("Poor ROI")));
    }

    #[test]
    fn test_driver_trip_stats() {
        let trips = vec![
            trip("d1", TripStatus::Completed),
            trip("d1", TripStatus::Completed),
            trip("d1", TripStatus::Cancelled),
            trip("d2", TripStatus::Completed),
        ];

        let stats = driver_trip_stats(&DriverId::new("d1"), &trips);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.completion_rate_pct, 67);
    }

    #[test]
    fn test_driver_with_no_trips() {
        let stats = driver_trip_stats(&DriverId::new("d9"), &[]);
        assert_eq!(stats, DriverTripStats::default());
    }
}
