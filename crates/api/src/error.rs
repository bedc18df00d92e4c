// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use fleetflow::CoreError;
use fleetflow_domain::DomainError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract: validation failures, uniqueness conflicts, missing resources,
/// and state-machine violations each surface as their own variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A uniqueness rule was violated.
    Conflict {
        /// The type of resource in conflict.
        resource_type: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A state transition was attempted from a state that does not permit it.
    InvalidState {
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Conflict {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} conflict: {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidState { message } => {
                write!(f, "Invalid state transition: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly. Validation failures map to `InvalidInput`, uniqueness
/// violations to `Conflict`, unknown ids to `ResourceNotFound`, and state
/// machine violations to `InvalidState`.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidVehicleName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidLicensePlate(msg) => ApiError::InvalidInput {
            field: String::from("license_plate"),
            message: msg,
        },
        DomainError::DuplicateLicensePlate(plate) => ApiError::Conflict {
            resource_type: String::from("Vehicle"),
            message: format!("License plate '{plate}' already exists"),
        },
        DomainError::InvalidDriverName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidLicenseNumber(msg) => ApiError::InvalidInput {
            field: String::from("license_number"),
            message: msg,
        },
        DomainError::DuplicateLicenseNumber(number) => ApiError::Conflict {
            resource_type: String::from("Driver"),
            message: format!("License number '{number}' already exists"),
        },
        DomainError::InvalidSafetyScore { score } => ApiError::InvalidInput {
            field: String::from("safety_score"),
            message: format!("Invalid safety score: {score}. Must be between 0 and 100"),
        },
        DomainError::InvalidRoute(msg) => ApiError::InvalidInput {
            field: String::from("route"),
            message: msg,
        },
        DomainError::CargoExceedsCapacity {
            cargo_weight_kg,
            max_capacity_kg,
        } => ApiError::InvalidInput {
            field: String::from("cargo_weight_kg"),
            message: format!(
                "Cargo weight {cargo_weight_kg} kg exceeds vehicle max capacity {max_capacity_kg} kg"
            ),
        },
        DomainError::LicenseExpired { driver_name } => ApiError::InvalidInput {
            field: String::from("driver_id"),
            message: format!("Driver '{driver_name}' has an expired license"),
        },
        DomainError::LicenseCategoryMismatch {
            vehicle_type,
            driver_name,
        } => ApiError::InvalidInput {
            field: String::from("driver_id"),
            message: format!(
                "Driver '{driver_name}' is not licensed for vehicle type '{vehicle_type}'"
            ),
        },
        DomainError::VehicleNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Vehicle"),
            message: format!("Vehicle with id '{id}' not found"),
        },
        DomainError::DriverNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Driver"),
            message: format!("Driver with id '{id}' not found"),
        },
        DomainError::TripNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Trip"),
            message: format!("Trip with id '{id}' not found"),
        },
        DomainError::MaintenanceRecordNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Maintenance record"),
            message: format!("Maintenance record with id '{id}' not found"),
        },
        DomainError::InvalidTripTransition {
            trip_id,
            from,
            attempted,
        } => ApiError::InvalidState {
            message: format!("Cannot {attempted} trip '{trip_id}' from status '{from}'"),
        },
        DomainError::InvalidMaintenanceTransition { record_id, from } => ApiError::InvalidState {
            message: format!(
                "Cannot complete maintenance record '{record_id}' from status '{from}'"
            ),
        },
        DomainError::OdometerRegression {
            current_km,
            proposed_km,
        } => ApiError::InvalidInput {
            field: String::from("final_odometer_km"),
            message: format!(
                "Final odometer reading {proposed_km} km is below the current reading {current_km} km"
            ),
        },
        DomainError::InvalidVehicleType(s) => ApiError::InvalidInput {
            field: String::from("vehicle_type"),
            message: format!("Unknown vehicle type: {s}"),
        },
        DomainError::InvalidLicenseStatus(s) => ApiError::InvalidInput {
            field: String::from("license_status"),
            message: format!("Unknown license status: {s}"),
        },
        DomainError::InvalidStatus { kind, value } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown {kind} status: {value}"),
        },
        DomainError::InvalidIncidentSeverity(s) => ApiError::InvalidInput {
            field: String::from("severity"),
            message: format!("Unknown incident severity: {s}"),
        },
        DomainError::InvalidServiceType(msg) => ApiError::InvalidInput {
            field: String::from("service_type"),
            message: msg,
        },
        DomainError::InvalidAmount { field, amount } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Invalid amount: {amount}"),
        },
        DomainError::DateParse { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
