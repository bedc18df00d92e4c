// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod alerts;
mod dates;
mod dispatch;
mod error;
mod financial;
mod forecast;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use alerts::{AlertCategory, SystemAlert, collect_system_alerts};
pub use dates::{format_date, parse_date};
pub use dispatch::{
    DispatchRecommendation, available_drivers, available_vehicles, recommend_dispatch,
};
pub use error::DomainError;
pub use financial::{
    DriverTripStats, FinancialRisk, VehicleCosts, assess_financial_risks, cost_per_km,
    driver_trip_stats, vehicle_costs, vehicle_roi,
};
pub use forecast::{
    ForecastTrigger, MaintenanceAlert, SERVICE_AGE_THRESHOLD_DAYS, SERVICE_DISTANCE_THRESHOLD_KM,
    VehicleForecast, forecast_maintenance,
};
pub use types::{
    Driver, DriverId, DutyStatus, Expense, ExpenseId, FuelLog, FuelLogId, Incident, IncidentId,
    IncidentSeverity, IncidentStatus, LicenseNumber, LicensePlate, LicenseStatus, MaintenanceId,
    MaintenanceRecord, MaintenanceStatus, Severity, Trip, TripId, TripStatus, Vehicle, VehicleId,
    VehicleStatus, VehicleType,
};
pub use validation::{
    validate_amount, validate_driver_fields, validate_license_number_unique,
    validate_license_plate_unique, validate_trip_assignment, validate_vehicle_fields,
};
