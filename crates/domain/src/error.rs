// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{MaintenanceStatus, TripStatus, VehicleType};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Vehicle name is missing or too short.
    InvalidVehicleName(String),
    /// License plate is missing or contains invalid characters.
    InvalidLicensePlate(String),
    /// License plate is already registered to another vehicle.
    DuplicateLicensePlate(String),
    /// Driver name is missing.
    InvalidDriverName(String),
    /// License number is missing.
    InvalidLicenseNumber(String),
    /// License number is already registered to another driver.
    DuplicateLicenseNumber(String),
    /// Safety score is outside the 0-100 range.
    InvalidSafetyScore {
        /// The rejected score.
        score: u8,
    },
    /// Trip origin or destination is missing.
    InvalidRoute(String),
    /// Cargo weight exceeds the vehicle's maximum capacity.
    CargoExceedsCapacity {
        /// The requested cargo weight in kilograms.
        cargo_weight_kg: u32,
        /// The vehicle's maximum capacity in kilograms.
        max_capacity_kg: u32,
    },
    /// The driver's license has expired.
    LicenseExpired {
        /// The driver's name.
        driver_name: String,
    },
    /// The driver's license category does not cover the vehicle's type.
    LicenseCategoryMismatch {
        /// The vehicle type the trip requires.
        vehicle_type: VehicleType,
        /// The driver's name.
        driver_name: String,
    },
    /// Vehicle does not exist.
    VehicleNotFound(String),
    /// Driver does not exist.
    DriverNotFound(String),
    /// Trip does not exist.
    TripNotFound(String),
    /// Maintenance record does not exist.
    MaintenanceRecordNotFound(String),
    /// Trip state machine does not permit the attempted transition.
    InvalidTripTransition {
        /// The trip identifier.
        trip_id: String,
        /// The trip's current status.
        from: TripStatus,
        /// The attempted transition.
        attempted: &'static str,
    },
    /// Maintenance record state machine does not permit the attempted transition.
    InvalidMaintenanceTransition {
        /// The record identifier.
        record_id: String,
        /// The record's current status.
        from: MaintenanceStatus,
    },
    /// A final odometer reading lower than the current reading was supplied.
    OdometerRegression {
        /// The vehicle's current odometer reading in kilometers.
        current_km: u32,
        /// The rejected reading in kilometers.
        proposed_km: u32,
    },
    /// Vehicle type string is not recognized.
    InvalidVehicleType(String),
    /// License status string is not recognized.
    InvalidLicenseStatus(String),
    /// A lifecycle status string is not recognized.
    InvalidStatus {
        /// The status kind being parsed.
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
    /// Incident severity string is not recognized.
    InvalidIncidentSeverity(String),
    /// Maintenance service type is missing.
    InvalidServiceType(String),
    /// A monetary amount is negative or not finite.
    InvalidAmount {
        /// The field carrying the amount.
        field: &'static str,
        /// The rejected amount.
        amount: f64,
    },
    /// Failed to parse a date from a string.
    DateParse {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVehicleName(msg) => write!(f, "Invalid vehicle name: {msg}"),
            Self::InvalidLicensePlate(msg) => write!(f, "Invalid license plate: {msg}"),
            Self::DuplicateLicensePlate(plate) => {
                write!(f, "License plate '{plate}' already exists")
            }
            Self::InvalidDriverName(msg) => write!(f, "Invalid driver name: {msg}"),
            Self::InvalidLicenseNumber(msg) => write!(f, "Invalid license number: {msg}"),
            Self::DuplicateLicenseNumber(number) => {
                write!(f, "License number '{number}' already exists")
            }
            Self::InvalidSafetyScore { score } => {
                write!(f, "Invalid safety score: {score}. Must be between 0 and 100")
            }
            Self::InvalidRoute(msg) => write!(f, "Invalid route: {msg}"),
            Self::CargoExceedsCapacity {
                cargo_weight_kg,
                max_capacity_kg,
            } => {
                write!(
                    f,
                    "Cargo weight {cargo_weight_kg} kg exceeds vehicle max capacity {max_capacity_kg} kg"
                )
            }
            Self::LicenseExpired { driver_name } => {
                write!(f, "Driver '{driver_name}' has an expired license")
            }
            Self::LicenseCategoryMismatch {
                vehicle_type,
                driver_name,
            } => {
                write!(
                    f,
                    "Driver '{driver_name}' is not licensed for vehicle type '{vehicle_type}'"
                )
            }
            Self::VehicleNotFound(id) => write!(f, "Vehicle with id '{id}' not found"),
            Self::DriverNotFound(id) => write!(f, "Driver with id '{id}' not found"),
            Self::TripNotFound(id) => write!(f, "Trip with id '{id}' not found"),
            Self::MaintenanceRecordNotFound(id) => {
                write!(f, "Maintenance record with id '{id}' not found")
            }
            Self::InvalidTripTransition {
                trip_id,
                from,
                attempted,
            } => {
                write!(
                    f,
                    "Cannot {attempted} trip '{trip_id}' from status '{from}'"
                )
            }
            Self::InvalidMaintenanceTransition { record_id, from } => {
                write!(
                    f,
                    "Cannot complete maintenance record '{record_id}' from status '{from}'"
                )
            }
            Self::OdometerRegression {
                current_km,
                proposed_km,
            } => {
                write!(
                    f,
                    "Final odometer reading {proposed_km} km is below the current reading {current_km} km"
                )
            }
            Self::InvalidVehicleType(s) => write!(f, "Unknown vehicle type: {s}"),
            Self::InvalidLicenseStatus(s) => write!(f, "Unknown license status: {s}"),
            Self::InvalidStatus { kind, value } => {
                write!(f, "Unknown {kind} status: {value}")
            }
            Self::InvalidIncidentSeverity(s) => write!(f, "Unknown incident severity: {s}"),
            Self::InvalidServiceType(msg) => write!(f, "Invalid service type: {msg}"),
            Self::InvalidAmount { field, amount } => {
                write!(f, "Invalid amount for {field}: {amount}")
            }
            Self::DateParse { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
