// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Unified system alerts.
//!
//! Merges four independent alert sources into one prioritized feed for
//! operational visibility: open incidents, overdue maintenance, expiring
//! driver licenses, and stale draft trips.

use crate::forecast::forecast_maintenance;
use crate::types::{
    Driver, Incident, IncidentSeverity, IncidentStatus, LicenseStatus, MaintenanceRecord,
    Severity, Trip, TripStatus, Vehicle,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// Licenses expiring within this many days raise an alert.
const LICENSE_EXPIRY_WINDOW_DAYS: i64 = 60;

/// Licenses expiring within this many days are critical.
const LICENSE_CRITICAL_DAYS: i64 = 14;

/// Draft trips older than this many days raise an alert.
const STALE_DRAFT_DAYS: i64 = 2;

/// Draft trips older than this many days are critical.
const STALE_DRAFT_CRITICAL_DAYS: i64 = 5;

/// The alert source category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCategory {
    /// An open incident.
    Incident,
    /// An overdue-maintenance forecast.
    Maintenance,
    /// An expiring driver license.
    Driver,
    /// A stale draft trip.
    Trip,
}

impl AlertCategory {
    /// Returns the string representation of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Incident => "incident",
            Self::Maintenance => "maintenance",
            Self::Driver => "driver",
            Self::Trip => "trip",
        }
    }
}

impl std::fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in the unified alert feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemAlert {
    /// Stable feed identifier, derived from the source entity.
    pub id: String,
    /// The alert source category.
    pub category: AlertCategory,
    /// The alert severity.
    pub severity: Severity,
    /// Short headline.
    pub title: String,
    /// Supporting detail line.
    pub detail: String,
}

/// Builds the unified, prioritized alert feed.
///
/// Sources are collected in a fixed category order (incidents, maintenance,
/// drivers, trips) and then stably sorted by severity rank, so alerts of
/// equal severity keep their category/insertion order.
///
/// # Arguments
///
/// * `vehicles` - The vehicle collection
/// * `drivers` - The driver collection
/// * `trips` - The trip collection
/// * `records` - The maintenance record collection
/// * `incidents` - The incident collection
/// * `today` - The evaluation date
#[must_use]
pub fn collect_system_alerts(
    vehicles: &[Vehicle],
    drivers: &[Driver],
    trips: &[Trip],
    records: &[MaintenanceRecord],
    incidents: &[Incident],
    today: Date,
) -> Vec<SystemAlert> {
    let mut alerts: Vec<SystemAlert> = Vec::new();

    collect_incident_alerts(vehicles, incidents, &mut alerts);
    collect_maintenance_alerts(vehicles, records, today, &mut alerts);
    collect_license_alerts(drivers, today, &mut alerts);
    collect_stale_draft_alerts(vehicles, trips, today, &mut alerts);

    alerts.sort_by_key(|a| a.severity.rank());
    alerts
}

/// Open incidents. Major and Critical incidents are critical alerts.
fn collect_incident_alerts(
    vehicles: &[Vehicle],
    incidents: &[Incident],
    alerts: &mut Vec<SystemAlert>,
) {
    for incident in incidents.iter().filter(|i| i.status == IncidentStatus::Open) {
        let vehicle_name: &str = vehicles
            .iter()
            .find(|v| v.id == incident.vehicle_id)
            .map_or("Vehicle", |v| v.name.as_str());

        let severity: Severity = match incident.severity {
            IncidentSeverity::Major | IncidentSeverity::Critical => Severity::Critical,
            IncidentSeverity::Minor => Severity::Warning,
        };

        alerts.push(SystemAlert {
            id: format!("inc-{}", incident.id),
            category: AlertCategory::Incident,
            severity,
            title: format!("INCIDENT: {vehicle_name}"),
            detail: format!(
                "{} severity. {}. Estimated cost: {:.0}",
                incident.severity, incident.description, incident.estimated_cost
            ),
        });
    }
}

/// Overdue-maintenance forecasts, one alert per flagged vehicle carrying the
/// worst sub-alert severity.
fn collect_maintenance_alerts(
    vehicles: &[Vehicle],
    records: &[MaintenanceRecord],
    today: Date,
    alerts: &mut Vec<SystemAlert>,
) {
    for forecast in forecast_maintenance(vehicles, records, today) {
        let severity: Severity = forecast.worst_severity();
        let top_reason: String = forecast
            .alerts
            .iter()
            .min_by_key(|a| a.severity.rank())
            .map(|a| a.reason.clone())
            .unwrap_or_default();

        alerts.push(SystemAlert {
            id: format!("maint-{}", forecast.vehicle.id),
            category: AlertCategory::Maintenance,
            severity,
            title: format!("{}: service overdue", forecast.vehicle.name),
            detail: top_reason,
        });
    }
}

/// Driver licenses expiring within the warning window. Already-expired
/// statuses are skipped (the license status itself records those), but a
/// known expiry date in the past still renders as "already expired".
fn collect_license_alerts(drivers: &[Driver], today: Date, alerts: &mut Vec<SystemAlert>) {
    for driver in drivers {
        if driver.license_status == LicenseStatus::Expired {
            continue;
        }
        let Some(expiry) = driver.license_expiry else {
            continue;
        };

        let days_left: i64 = (expiry - today).whole_days();
        if days_left > LICENSE_EXPIRY_WINDOW_DAYS {
            continue;
        }

        let severity: Severity = if days_left <= LICENSE_CRITICAL_DAYS {
            Severity::Critical
        } else {
            Severity::Warning
        };
        let detail: String = if days_left <= 0 {
            String::from("License has already expired")
        } else if days_left == 1 {
            format!("Expires in 1 day ({expiry})")
        } else {
            format!("Expires in {days_left} days ({expiry})")
        };

        alerts.push(SystemAlert {
            id: format!("license-{}", driver.id),
            category: AlertCategory::Driver,
            severity,
            title: format!("{}: license expiring", driver.name),
            detail,
        });
    }
}

/// Draft trips waiting for dispatch longer than the staleness window.
fn collect_stale_draft_alerts(
    vehicles: &[Vehicle],
    trips: &[Trip],
    today: Date,
    alerts: &mut Vec<SystemAlert>,
) {
    for trip in trips.iter().filter(|t| t.status == TripStatus::Draft) {
        let age_days: i64 = (today - trip.created_at).whole_days();
        if age_days < STALE_DRAFT_DAYS {
            continue;
        }

        let severity: Severity = if age_days >= STALE_DRAFT_CRITICAL_DAYS {
            Severity::Critical
        } else {
            Severity::Info
        };
        let vehicle_name: &str = vehicles
            .iter()
            .find(|v| v.id == trip.vehicle_id)
            .map_or("unassigned", |v| v.name.as_str());
        let cargo: &str = if trip.cargo_description.is_empty() {
            "Cargo"
        } else {
            trip.cargo_description.as_str()
        };

        alerts.push(SystemAlert {
            id: format!("trip-{}", trip.id),
            category: AlertCategory::Trip,
            severity,
            title: format!("Trip {}: pending dispatch", trip.id.value().to_uppercase()),
            detail: format!(
                "{cargo}. {} to {}. {vehicle_name} waiting {age_days} days",
                trip.origin, trip.destination
            ),
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::{
        DriverId, IncidentId, LicenseNumber, LicensePlate, MaintenanceId, MaintenanceStatus,
        TripId, VehicleId, VehicleStatus, VehicleType,
    };
    use time::macros::date;

    const TODAY: Date = date!(2026 - 02 - 20);

    fn test_vehicle(id: &str) -> Vehicle {
        Vehicle {
            id: VehicleId::new(id),
            name: format!("Vehicle {id}"),
            model: String::from("2023"),
            license_plate: LicensePlate::new(&format!("KA-01-{id}")),
            vehicle_type: VehicleType::Truck,
            region: String::from("South"),
            max_capacity_kg: 25_000,
            odometer_km: 45_000,
            status: VehicleStatus::Available,
            acquisition_cost: 4_500_000.0,
            revenue: 1_200_000.0,
        }
    }

    fn recent_service(vehicle_id: &str) -> MaintenanceRecord {
        MaintenanceRecord {
            id: MaintenanceId::generate(),
            vehicle_id: VehicleId::new(vehicle_id),
            service_type: String::from("Oil Change"),
            description: String::new(),
            cost: 5_500.0,
            date: date!(2026 - 02 - 14),
            status: MaintenanceStatus::Completed,
            odometer_at_service_km: 44_800,
        }
    }

    fn test_driver(id: &str, expiry: Option<Date>) -> Driver {
        Driver {
            id: DriverId::new(id),
            name: format!("Driver {id}"),
            license_number: LicenseNumber::new(&format!("DL-{id}")),
            license_expiry: expiry,
            license_status: LicenseStatus::Valid,
            license_category: vec![VehicleType::Truck],
            safety_score: 90,
            duty_status: crate::types::DutyStatus::OffDuty,
            phone: String::new(),
        }
    }

    fn draft_trip(id: &str, created_at: Date) -> Trip {
        Trip {
            id: TripId::new(id),
            vehicle_id: VehicleId::new("v1"),
            driver_id: DriverId::new("d1"),
            cargo_weight_kg: 12_000,
            cargo_description: String::from("Textiles"),
            origin: String::from("Ahmedabad"),
            destination: String::from("Jaipur"),
            status: TripStatus::Draft,
            created_at,
            dispatched_at: None,
            completed_at: None,
        }
    }

    fn incident(id: &str, severity: IncidentSeverity, status: IncidentStatus) -> Incident {
        Incident {
            id: IncidentId::new(id),
            vehicle_id: VehicleId::new("v1"),
            severity,
            description: String::from("Brake failure on highway"),
            estimated_cost: 75_000.0,
            insurance_status: String::from("Pending"),
            status,
            date: TODAY,
        }
    }

    #[test]
    fn test_open_major_incident_is_critical() {
        let vehicles = vec![test_vehicle("v1")];
        let records = vec![recent_service("v1")];
        let incidents = vec![incident("i1", IncidentSeverity::Major, IncidentStatus::Open)];

        let alerts = collect_system_alerts(&vehicles, &[], &[], &records, &incidents, TODAY);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].category, AlertCategory::Incident);
        assert_eq!(alerts[0].severity, Severity::Critical);
    }

    #[test]
    fn test_minor_incident_is_warning_and_closed_skipped() {
        let vehicles = vec![test_vehicle("v1")];
        let records = vec![recent_service("v1")];
        let incidents = vec![
            incident("i1", IncidentSeverity::Minor, IncidentStatus::Open),
            incident("i2", IncidentSeverity::Critical, IncidentStatus::Closed),
        ];

        let alerts = collect_system_alerts(&vehicles, &[], &[], &records, &incidents, TODAY);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Warning);
        assert_eq!(alerts[0].id, "inc-i1");
    }

    #[test]
    fn test_license_expiring_within_window_warns() {
        let drivers = vec![test_driver("d1", Some(date!(2026 - 04 - 01)))];

        let alerts = collect_system_alerts(&[], &drivers, &[], &[], &[], TODAY);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].category, AlertCategory::Driver);
        assert_eq!(alerts[0].severity, Severity::Warning);
        assert!(alerts[0].detail.contains("Expires in 40 days"));
    }

    #[test]
    fn test_license_expiring_soon_is_critical() {
        let drivers = vec![test_driver("d1", Some(date!(2026 - 02 - 28)))];

        let alerts = collect_system_alerts(&[], &drivers, &[], &[], &[], TODAY);
        assert_eq!(alerts[0].severity, Severity::Critical);
    }

    #[test]
    fn test_license_past_due_renders_already_expired() {
        let drivers = vec![test_driver("d1", Some(date!(2026 - 02 - 10)))];

        let alerts = collect_system_alerts(&[], &drivers, &[], &[], &[], TODAY);
        assert_eq!(alerts[0].detail, "License has already expired");
    }

    #[test]
    fn test_expired_status_and_far_expiry_skipped() {
        let mut expired = test_driver("d1", Some(date!(2026 - 01 - 10)));
        expired.license_status = LicenseStatus::Expired;
        let drivers = vec![expired, test_driver("d2", Some(date!(2027 - 06 - 15)))];

        let alerts = collect_system_alerts(&[], &drivers, &[], &[], &[], TODAY);
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_stale_draft_trip_is_info_then_critical() {
        let trips = vec![
            draft_trip("t1", date!(2026 - 02 - 17)),
            draft_trip("t2", date!(2026 - 02 - 12)),
            draft_trip("t3", date!(2026 - 02 - 19)),
        ];

        let alerts = collect_system_alerts(&[], &[], &trips, &[], &[], TODAY);
        assert_eq!(alerts.len(), 2);
        // Stable severity sort puts the critical 8-day-old draft first.
        assert_eq!(alerts[0].id, "trip-t2");
        assert_eq!(alerts[0].severity, Severity::Critical);
        assert_eq!(alerts[1].id, "trip-t1");
        assert_eq!(alerts[1].severity, Severity::Info);
    }

    #[test]
    fn test_feed_sorted_by_severity_with_stable_category_order() {
        let vehicles = vec![test_vehicle("v1")];
        let records = vec![recent_service("v1")];
        let incidents = vec![incident("i1", IncidentSeverity::Minor, IncidentStatus::Open)];
        let drivers = vec![test_driver("d1", Some(date!(2026 - 04 - 01)))];
        let trips = vec![draft_trip("t1", date!(2026 - 02 - 17))];

        let alerts =
            collect_system_alerts(&vehicles, &drivers, &trips, &records, &incidents, TODAY);
        assert_eq!(alerts.len(), 3);
        // Two warnings keep insertion order (incident before driver), info last.
        assert_eq!(alerts[0].category, AlertCategory::Incident);
        assert_eq!(alerts[1].category, AlertCategory::Driver);
        assert_eq!(alerts[2].category, AlertCategory::Trip);
    }

    #[test]
    fn test_maintenance_alert_carries_worst_severity() {
        let mut vehicle = test_vehicle("v1");
        vehicle.odometer_km = 60_000;
        let records = vec![MaintenanceRecord {
            id: MaintenanceId::generate(),
            vehicle_id: VehicleId::new("v1"),
            service_type: String::from("Oil Change"),
            description: String::new(),
            cost: 5_500.0,
            date: date!(2026 - 01 - 01),
            status: MaintenanceStatus::Completed,
            odometer_at_service_km: 40_000,
        }];

        // 20_000 km since service is critical; 50 days is no age alert.
        let alerts = collect_system_alerts(&[vehicle], &[], &[], &records, &[], TODAY);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].category, AlertCategory::Maintenance);
        assert_eq!(alerts[0].severity, Severity::Critical);
    }
}
