// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Length of the random suffix appended to generated entity ids.
const ID_SUFFIX_LEN: usize = 9;

/// Generates an opaque entity id: a one-letter kind prefix plus a random
/// lowercase alphanumeric suffix. Ids are never reused.
fn generate_id(prefix: char) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| rng.sample(rand::distributions::Alphanumeric) as char)
        .collect();
    format!("{prefix}{}", suffix.to_lowercase())
}

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name {
            value: String,
        }

        impl $name {
            /// Wraps an existing id value.
            #[must_use]
            pub fn new(value: &str) -> Self {
                Self {
                    value: value.to_string(),
                }
            }

            /// Generates a fresh id with this entity kind's prefix.
            #[must_use]
            pub fn generate() -> Self {
                Self {
                    value: generate_id($prefix),
                }
            }

            /// Returns the id value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.value
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value)
            }
        }
    };
}

entity_id!(
    /// Opaque unique identifier for a vehicle.
    VehicleId,
    'v'
);
entity_id!(
    /// Opaque unique identifier for a driver.
    DriverId,
    'd'
);
entity_id!(
    /// Opaque unique identifier for a trip.
    TripId,
    't'
);
entity_id!(
    /// Opaque unique identifier for a maintenance record.
    MaintenanceId,
    'm'
);
entity_id!(
    /// Opaque unique identifier for a fuel log entry.
    FuelLogId,
    'f'
);
entity_id!(
    /// Opaque unique identifier for an expense entry.
    ExpenseId,
    'e'
);
entity_id!(
    /// Opaque unique identifier for an incident.
    IncidentId,
    'i'
);

/// A vehicle license plate.
///
/// Plates are normalized to uppercase to ensure case-insensitive uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicensePlate {
    value: String,
}

impl LicensePlate {
    /// Creates a new `LicensePlate`.
    ///
    /// # Arguments
    ///
    /// * `value` - The plate value (will be normalized to uppercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_uppercase(),
        }
    }

    /// Returns the plate value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A driver license number.
///
/// License numbers are normalized to uppercase to ensure case-insensitive
/// uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseNumber {
    value: String,
}

impl LicenseNumber {
    /// Creates a new `LicenseNumber`.
    ///
    /// # Arguments
    ///
    /// * `value` - The license number (will be normalized to uppercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_uppercase(),
        }
    }

    /// Returns the license number value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for LicenseNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The kind of vehicle. Drivers are licensed per vehicle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    /// Heavy goods truck.
    Truck,
    /// Light commercial van.
    Van,
    /// Two-wheeler courier bike.
    Bike,
}

impl VehicleType {
    /// Returns the string representation of this vehicle type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Truck => "Truck",
            Self::Van => "Van",
            Self::Bike => "Bike",
        }
    }

    /// Parses a vehicle type from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid vehicle type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Truck" => Ok(Self::Truck),
            "Van" => Ok(Self::Van),
            "Bike" => Ok(Self::Bike),
            _ => Err(DomainError::InvalidVehicleType(s.to_string())),
        }
    }
}

impl FromStr for VehicleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operational status of a vehicle.
///
/// Vehicle status is derived state: it is written only by trip, maintenance,
/// and incident transitions, never set directly while a trip referencing the
/// vehicle is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VehicleStatus {
    /// Idle and eligible for dispatch.
    #[default]
    Available,
    /// Currently assigned to a dispatched trip.
    OnTrip,
    /// Undergoing maintenance.
    InShop,
    /// Withdrawn from operation.
    OutOfService,
}

impl VehicleStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::OnTrip => "On Trip",
            Self::InShop => "In Shop",
            Self::OutOfService => "Out of Service",
        }
    }

    /// Parses a vehicle status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Available" => Ok(Self::Available),
            "On Trip" => Ok(Self::OnTrip),
            "In Shop" => Ok(Self::InShop),
            "Out of Service" => Ok(Self::OutOfService),
            _ => Err(DomainError::InvalidStatus {
                kind: "vehicle",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validity of a driver's license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LicenseStatus {
    /// License is valid.
    #[default]
    Valid,
    /// License expires soon.
    Expiring,
    /// License has expired; the driver may not be assigned to trips.
    Expired,
}

impl LicenseStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "Valid",
            Self::Expiring => "Expiring",
            Self::Expired => "Expired",
        }
    }

    /// Parses a license status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Valid" => Ok(Self::Valid),
            "Expiring" => Ok(Self::Expiring),
            "Expired" => Ok(Self::Expired),
            _ => Err(DomainError::InvalidLicenseStatus(s.to_string())),
        }
    }
}

impl FromStr for LicenseStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A driver's current work-availability state.
///
/// Duty status is derived state, kept in sync with trip and incident
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DutyStatus {
    /// Not currently assigned to a trip.
    #[default]
    OffDuty,
    /// Assigned to a dispatched trip.
    OnDuty,
    /// Suspended from duty following an incident.
    Suspended,
}

impl DutyStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OffDuty => "Off Duty",
            Self::OnDuty => "On Duty",
            Self::Suspended => "Suspended",
        }
    }

    /// Parses a duty status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Off Duty" => Ok(Self::OffDuty),
            "On Duty" => Ok(Self::OnDuty),
            "Suspended" => Ok(Self::Suspended),
            _ => Err(DomainError::InvalidStatus {
                kind: "duty",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TripStatus {
    /// Created but not yet dispatched. Full editing allowed.
    #[default]
    Draft,
    /// On the road. Vehicle and driver are committed.
    Dispatched,
    /// Finished successfully. Terminal.
    Completed,
    /// Abandoned from Draft or Dispatched. Terminal.
    Cancelled,
}

impl TripStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Dispatched => "Dispatched",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Parses a trip status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Draft" => Ok(Self::Draft),
            "Dispatched" => Ok(Self::Dispatched),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus {
                kind: "trip",
                value: s.to_string(),
            }),
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Draft → Dispatched
    /// - Draft → Cancelled
    /// - Dispatched → Completed
    /// - Dispatched → Cancelled
    ///
    /// No transition exists out of Completed or Cancelled.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Dispatched)
                | (Self::Draft | Self::Dispatched, Self::Cancelled)
                | (Self::Dispatched, Self::Completed)
        )
    }

    /// Returns whether this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns whether a trip in this status is active (holds its vehicle
    /// and driver assignment).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Draft | Self::Dispatched)
    }
}

impl FromStr for TripStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a maintenance record.
///
/// The only transition is In Progress → Completed; there is no cancel path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MaintenanceStatus {
    /// Work is underway; the vehicle is in the shop.
    #[default]
    InProgress,
    /// Work finished. Terminal.
    Completed,
}

impl MaintenanceStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Parses a maintenance status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidStatus {
                kind: "maintenance",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentSeverity {
    /// Cosmetic or low-impact damage.
    Minor,
    /// Significant damage or route disruption.
    Major,
    /// Vehicle disabled or safety-critical event.
    Critical,
}

impl IncidentSeverity {
    /// Returns the string representation of this severity.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Major => "Major",
            Self::Critical => "Critical",
        }
    }

    /// Parses an incident severity from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid severity.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Minor" => Ok(Self::Minor),
            "Major" => Ok(Self::Major),
            "Critical" => Ok(Self::Critical),
            _ => Err(DomainError::InvalidIncidentSeverity(s.to_string())),
        }
    }
}

impl FromStr for IncidentSeverity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for IncidentSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IncidentStatus {
    /// Reported and not yet resolved.
    #[default]
    Open,
    /// Resolved.
    Closed,
}

impl IncidentStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }

    /// Parses an incident status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Open" => Ok(Self::Open),
            "Closed" => Ok(Self::Closed),
            _ => Err(DomainError::InvalidStatus {
                kind: "incident",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a derived alert, ordered for feed display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Requires immediate attention.
    Critical,
    /// Should be addressed soon.
    Warning,
    /// Informational.
    Info,
}

impl Severity {
    /// Returns the display rank of this severity. Lower ranks sort first.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Warning => 1,
            Self::Info => 2,
        }
    }

    /// Returns the string representation of this severity.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parses a severity from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid severity.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "critical" => Ok(Self::Critical),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(DomainError::InvalidStatus {
                kind: "severity",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fleet vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Opaque unique identifier.
    pub id: VehicleId,
    /// Human-readable vehicle name.
    pub name: String,
    /// Model year or designation.
    pub model: String,
    /// Unique license plate.
    pub license_plate: LicensePlate,
    /// The kind of vehicle.
    pub vehicle_type: VehicleType,
    /// Operating region.
    pub region: String,
    /// Maximum cargo capacity in kilograms.
    pub max_capacity_kg: u32,
    /// Current odometer reading in kilometers. Monotonically non-decreasing;
    /// written only at trip completion.
    pub odometer_km: u32,
    /// Operational status (derived state).
    pub status: VehicleStatus,
    /// Purchase price.
    pub acquisition_cost: f64,
    /// Cumulative revenue attributed to this vehicle.
    pub revenue: f64,
}

/// A driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    /// Opaque unique identifier.
    pub id: DriverId,
    /// The driver's name.
    pub name: String,
    /// Unique license number.
    pub license_number: LicenseNumber,
    /// License expiry date, if known.
    pub license_expiry: Option<Date>,
    /// License validity.
    pub license_status: LicenseStatus,
    /// Vehicle types the driver may operate, in declaration order.
    pub license_category: Vec<VehicleType>,
    /// Safety score from 0 (worst) to 100 (best).
    pub safety_score: u8,
    /// Work-availability state (derived state).
    pub duty_status: DutyStatus,
    /// Contact phone number.
    pub phone: String,
}

impl Driver {
    /// Returns whether this driver can be recommended for dispatch:
    /// not already on duty, not suspended, and license not expired.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !matches!(self.duty_status, DutyStatus::OnDuty | DutyStatus::Suspended)
            && self.license_status != LicenseStatus::Expired
    }

    /// Returns whether this driver's license category covers a vehicle type.
    #[must_use]
    pub fn is_licensed_for(&self, vehicle_type: VehicleType) -> bool {
        self.license_category.contains(&vehicle_type)
    }
}

/// A cargo trip assigning one vehicle and one driver to a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Opaque unique identifier.
    pub id: TripId,
    /// The assigned vehicle.
    pub vehicle_id: VehicleId,
    /// The assigned driver.
    pub driver_id: DriverId,
    /// Cargo weight in kilograms.
    pub cargo_weight_kg: u32,
    /// Cargo description.
    pub cargo_description: String,
    /// Origin location.
    pub origin: String,
    /// Destination location.
    pub destination: String,
    /// Lifecycle state.
    pub status: TripStatus,
    /// Creation date.
    pub created_at: Date,
    /// Dispatch date, set when the trip leaves Draft.
    pub dispatched_at: Option<Date>,
    /// Completion date, set when the trip finishes.
    pub completed_at: Option<Date>,
}

/// A vehicle service record.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRecord {
    /// Opaque unique identifier.
    pub id: MaintenanceId,
    /// The serviced vehicle.
    pub vehicle_id: VehicleId,
    /// The kind of service performed.
    pub service_type: String,
    /// Description of the work.
    pub description: String,
    /// Cost of the service.
    pub cost: f64,
    /// Service date.
    pub date: Date,
    /// Lifecycle state.
    pub status: MaintenanceStatus,
    /// Vehicle odometer reading at service time, in kilometers.
    pub odometer_at_service_km: u32,
}

/// A fuel purchase entry. Append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelLog {
    /// Opaque unique identifier.
    pub id: FuelLogId,
    /// The fueled vehicle.
    pub vehicle_id: VehicleId,
    /// Liters purchased.
    pub liters: f64,
    /// Purchase cost.
    pub cost: f64,
    /// Purchase date.
    pub date: Date,
    /// Station name.
    pub station: String,
}

/// A miscellaneous vehicle expense. Append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Opaque unique identifier.
    pub id: ExpenseId,
    /// The vehicle the expense is attributed to.
    pub vehicle_id: VehicleId,
    /// Expense category (tolls, parking, insurance, ...).
    pub expense_type: String,
    /// Expense amount.
    pub amount: f64,
    /// Expense date.
    pub date: Date,
    /// Free-form notes.
    pub notes: String,
}

/// A reported vehicle incident. Soft-closed, never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Incident {
    /// Opaque unique identifier.
    pub id: IncidentId,
    /// The affected vehicle.
    pub vehicle_id: VehicleId,
    /// Incident severity.
    pub severity: IncidentSeverity,
    /// Description of the incident.
    pub description: String,
    /// Estimated cost of damages.
    pub estimated_cost: f64,
    /// Insurance claim status.
    pub insurance_status: String,
    /// Lifecycle state.
    pub status: IncidentStatus,
    /// Report date.
    pub date: Date,
}
