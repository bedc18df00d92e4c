// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Driver, DriverId, LicenseStatus, Vehicle, VehicleId};

/// Minimum length of a vehicle name.
const MIN_VEHICLE_NAME_LEN: usize = 3;

/// Checks that a license plate consists only of ASCII letters, digits,
/// dashes, and spaces.
fn is_valid_plate(plate: &str) -> bool {
    !plate.is_empty()
        && plate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' ')
}

/// Validates a vehicle's basic field constraints.
///
/// This function checks required fields and formats. It does NOT check for
/// plate uniqueness (that requires context).
///
/// # Arguments
///
/// * `name` - The vehicle name
/// * `license_plate` - The raw (not yet normalized) license plate
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or shorter than three characters
/// - The plate is empty or contains invalid characters
pub fn validate_vehicle_fields(name: &str, license_plate: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidVehicleName(String::from(
            "Name is required",
        )));
    }
    if name.len() < MIN_VEHICLE_NAME_LEN {
        return Err(DomainError::InvalidVehicleName(String::from(
            "Vehicle name must be at least 3 characters",
        )));
    }
    if license_plate.is_empty() {
        return Err(DomainError::InvalidLicensePlate(String::from(
            "License plate is required",
        )));
    }
    if !is_valid_plate(license_plate) {
        return Err(DomainError::InvalidLicensePlate(String::from(
            "License plate may contain only letters, digits, dashes, and spaces",
        )));
    }
    Ok(())
}

/// Validates that a license plate is unique across the fleet.
///
/// Plates are compared after uppercase normalization. When updating an
/// existing vehicle, pass its id as `exclude` so the vehicle does not
/// collide with itself.
///
/// # Arguments
///
/// * `license_plate` - The raw license plate to check
/// * `vehicles` - The existing vehicle collection
/// * `exclude` - Vehicle id to skip (the vehicle being updated)
///
/// # Errors
///
/// Returns `DomainError::DuplicateLicensePlate` if another vehicle already
/// carries the plate.
pub fn validate_license_plate_unique(
    license_plate: &str,
    vehicles: &[Vehicle],
    exclude: Option<&VehicleId>,
) -> Result<(), DomainError> {
    let normalized: String = license_plate.to_uppercase();
    let collision: bool = vehicles
        .iter()
        .filter(|v| exclude.is_none_or(|id| &v.id != id))
        .any(|v| v.license_plate.value() == normalized);

    if collision {
        return Err(DomainError::DuplicateLicensePlate(normalized));
    }
    Ok(())
}

/// Validates a driver's basic field constraints.
///
/// # Arguments
///
/// * `name` - The driver's name
/// * `license_number` - The raw license number
/// * `safety_score` - The driver's safety score
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The license number is empty
/// - The safety score is above 100
pub fn validate_driver_fields(
    name: &str,
    license_number: &str,
    safety_score: u8,
) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidDriverName(String::from(
            "Name is required",
        )));
    }
    if license_number.is_empty() {
        return Err(DomainError::InvalidLicenseNumber(String::from(
            "License number is required",
        )));
    }
    if safety_score > 100 {
        return Err(DomainError::InvalidSafetyScore {
            score: safety_score,
        });
    }
    Ok(())
}

/// Validates that a license number is unique across all drivers.
///
/// License numbers are compared after uppercase normalization. When updating
/// an existing driver, pass their id as `exclude`.
///
/// # Arguments
///
/// * `license_number` - The raw license number to check
/// * `drivers` - The existing driver collection
/// * `exclude` - Driver id to skip (the driver being updated)
///
/// # Errors
///
/// Returns `DomainError::DuplicateLicenseNumber` if another driver already
/// holds the number.
pub fn validate_license_number_unique(
    license_number: &str,
    drivers: &[Driver],
    exclude: Option<&DriverId>,
) -> Result<(), DomainError> {
    let normalized: String = license_number.to_uppercase();
    let collision: bool = drivers
        .iter()
        .filter(|d| exclude.is_none_or(|id| &d.id != id))
        .any(|d| d.license_number.value() == normalized);

    if collision {
        return Err(DomainError::DuplicateLicenseNumber(normalized));
    }
    Ok(())
}

/// Validates that a monetary amount is finite and not negative.
///
/// # Arguments
///
/// * `field` - The field carrying the amount, for error reporting
/// * `amount` - The amount to check
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` if the amount is negative, NaN, or
/// infinite.
pub fn validate_amount(field: &'static str, amount: f64) -> Result<(), DomainError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DomainError::InvalidAmount { field, amount });
    }
    Ok(())
}

/// Validates that a vehicle/driver pair may be assigned to a new trip.
///
/// A trip may reference only a pair valid at creation time: the cargo must
/// fit the vehicle, the driver's license must not be expired, and the
/// driver's license category must include the vehicle's type.
///
/// # Arguments
///
/// * `vehicle` - The vehicle being assigned
/// * `driver` - The driver being assigned
/// * `cargo_weight_kg` - The cargo weight in kilograms
/// * `origin` - The trip origin
/// * `destination` - The trip destination
///
/// # Errors
///
/// Returns an error if:
/// - The origin or destination is empty
/// - The cargo weight exceeds the vehicle's maximum capacity
/// - The driver's license is expired
/// - The driver is not licensed for the vehicle's type
pub fn validate_trip_assignment(
    vehicle: &Vehicle,
    driver: &Driver,
    cargo_weight_kg: u32,
    origin: &str,
    destination: &str,
) -> Result<(), DomainError> {
    if origin.is_empty() || destination.is_empty() {
        return Err(DomainError::InvalidRoute(String::from(
            "Origin and destination are required",
        )));
    }
    if cargo_weight_kg > vehicle.max_capacity_kg {
        return Err(DomainError::CargoExceedsCapacity {
            cargo_weight_kg,
            max_capacity_kg: vehicle.max_capacity_kg,
        });
    }
    if driver.license_status == LicenseStatus::Expired {
        return Err(DomainError::LicenseExpired {
            driver_name: driver.name.clone(),
        });
    }
    if !driver.is_licensed_for(vehicle.vehicle_type) {
        return Err(DomainError::LicenseCategoryMismatch {
            vehicle_type: vehicle.vehicle_type,
            driver_name: driver.name.clone(),
        });
    }
    Ok(())
}
