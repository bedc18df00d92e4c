// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleetflow_domain::{
    DriverId, IncidentSeverity, LicenseStatus, MaintenanceId, TripId, VehicleId, VehicleType,
};
use time::Date;

/// A command represents operator or system intent as data only.
///
/// Commands are the only way to request state changes. Payloads arrive
/// already typed; string-to-domain translation happens at the API boundary
/// before a command is constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a vehicle to the fleet. The vehicle starts Available.
    AddVehicle {
        /// Human-readable vehicle name.
        name: String,
        /// Model year or designation.
        model: String,
        /// Raw license plate; normalized to uppercase on acceptance.
        license_plate: String,
        /// The kind of vehicle.
        vehicle_type: VehicleType,
        /// Operating region.
        region: String,
        /// Maximum cargo capacity in kilograms.
        max_capacity_kg: u32,
        /// Initial odometer reading in kilometers.
        odometer_km: u32,
        /// Purchase price.
        acquisition_cost: f64,
        /// Cumulative revenue carried over from prior bookkeeping.
        revenue: f64,
    },
    /// Update a vehicle's descriptive fields.
    ///
    /// Status and odometer are transition-owned state and cannot be set
    /// here: status is derived from trip/maintenance/incident transitions,
    /// and the odometer is written only at trip completion.
    UpdateVehicle {
        /// The vehicle to update.
        vehicle_id: VehicleId,
        /// New vehicle name.
        name: String,
        /// New model designation.
        model: String,
        /// New raw license plate.
        license_plate: String,
        /// New vehicle type.
        vehicle_type: VehicleType,
        /// New operating region.
        region: String,
        /// New maximum cargo capacity in kilograms.
        max_capacity_kg: u32,
        /// New purchase price.
        acquisition_cost: f64,
        /// New cumulative revenue.
        revenue: f64,
    },
    /// Remove a vehicle from the fleet.
    ///
    /// No referential check is performed against trips or records; the
    /// caller is responsible for not deleting a vehicle with an active trip.
    DeleteVehicle {
        /// The vehicle to remove.
        vehicle_id: VehicleId,
    },
    /// Flip a vehicle between Out of Service and Available.
    ToggleVehicleOutOfService {
        /// The vehicle to toggle.
        vehicle_id: VehicleId,
    },
    /// Register a driver. The driver starts Off Duty.
    AddDriver {
        /// The driver's name.
        name: String,
        /// Raw license number; normalized to uppercase on acceptance.
        license_number: String,
        /// License expiry date, if known.
        license_expiry: Option<Date>,
        /// License validity.
        license_status: LicenseStatus,
        /// Vehicle types the driver may operate.
        license_category: Vec<VehicleType>,
        /// Safety score from 0 to 100.
        safety_score: u8,
        /// Contact phone number.
        phone: String,
    },
    /// Update a driver's descriptive fields.
    ///
    /// Duty status is transition-owned state and cannot be set here.
    UpdateDriver {
        /// The driver to update.
        driver_id: DriverId,
        /// New name.
        name: String,
        /// New raw license number.
        license_number: String,
        /// New license expiry date.
        license_expiry: Option<Date>,
        /// New license validity.
        license_status: LicenseStatus,
        /// New license categories.
        license_category: Vec<VehicleType>,
        /// New safety score.
        safety_score: u8,
        /// New phone number.
        phone: String,
    },
    /// Remove a driver from the roster.
    DeleteDriver {
        /// The driver to remove.
        driver_id: DriverId,
    },
    /// Create a trip in Draft status.
    AddTrip {
        /// The assigned vehicle.
        vehicle_id: VehicleId,
        /// The assigned driver.
        driver_id: DriverId,
        /// Cargo weight in kilograms.
        cargo_weight_kg: u32,
        /// Cargo description.
        cargo_description: String,
        /// Origin location.
        origin: String,
        /// Destination location.
        destination: String,
    },
    /// Dispatch a Draft trip.
    ///
    /// One atomic transition: the trip becomes Dispatched, its vehicle
    /// goes On Trip, and its driver goes On Duty.
    DispatchTrip {
        /// The trip to dispatch.
        trip_id: TripId,
    },
    /// Complete a Dispatched trip.
    ///
    /// One atomic transition: the trip becomes Completed, its vehicle goes
    /// Available (taking the final odometer reading, when supplied), and
    /// its driver goes Off Duty.
    CompleteTrip {
        /// The trip to complete.
        trip_id: TripId,
        /// Final vehicle odometer reading in kilometers, if recorded.
        final_odometer_km: Option<u32>,
    },
    /// Cancel a Draft or Dispatched trip.
    ///
    /// Cancelling a Dispatched trip also reverts its vehicle to Available
    /// and its driver to Off Duty; a Draft cancellation has no side
    /// effects since nothing was committed.
    CancelTrip {
        /// The trip to cancel.
        trip_id: TripId,
    },
    /// Open a maintenance record. The vehicle is forced In Shop.
    AddMaintenanceRecord {
        /// The vehicle being serviced.
        vehicle_id: VehicleId,
        /// The kind of service performed.
        service_type: String,
        /// Description of the work.
        description: String,
        /// Cost of the service.
        cost: f64,
        /// Service date.
        date: Date,
        /// Odometer reading at service time, in kilometers.
        odometer_at_service_km: u32,
    },
    /// Complete an In Progress maintenance record. The vehicle is forced
    /// Available.
    CompleteMaintenanceRecord {
        /// The record to complete.
        record_id: MaintenanceId,
    },
    /// Append a fuel log entry. No side effects.
    AddFuelLog {
        /// The fueled vehicle.
        vehicle_id: VehicleId,
        /// Liters purchased.
        liters: f64,
        /// Purchase cost.
        cost: f64,
        /// Purchase date.
        date: Date,
        /// Station name.
        station: String,
    },
    /// Append an expense entry. No side effects.
    AddExpense {
        /// The vehicle the expense is attributed to.
        vehicle_id: VehicleId,
        /// Expense category.
        expense_type: String,
        /// Expense amount.
        amount: f64,
        /// Expense date.
        date: Date,
        /// Free-form notes.
        notes: String,
    },
    /// Report an incident against a vehicle.
    ///
    /// One atomic transition: an Open incident is created, the vehicle's
    /// currently Dispatched trip (if any) is cancelled, that trip's driver
    /// is Suspended, and the vehicle is forced Out of Service.
    ReportIncident {
        /// The affected vehicle.
        vehicle_id: VehicleId,
        /// Incident severity.
        severity: IncidentSeverity,
        /// Description of the incident.
        description: String,
        /// Estimated cost of damages.
        estimated_cost: f64,
        /// Insurance claim status.
        insurance_status: String,
    },
}

impl Command {
    /// Returns the audit action name for this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddVehicle { .. } => "AddVehicle",
            Self::UpdateVehicle { .. } => "UpdateVehicle",
            Self::DeleteVehicle { .. } => "DeleteVehicle",
            Self::ToggleVehicleOutOfService { .. } => "ToggleVehicleOutOfService",
            Self::AddDriver { .. } => "AddDriver",
            Self::UpdateDriver { .. } => "UpdateDriver",
            Self::DeleteDriver { .. } => "DeleteDriver",
            Self::AddTrip { .. } => "AddTrip",
            Self::DispatchTrip { .. } => "DispatchTrip",
            Self::CompleteTrip { .. } => "CompleteTrip",
            Self::CancelTrip { .. } => "CancelTrip",
            Self::AddMaintenanceRecord { .. } => "AddMaintenanceRecord",
            Self::CompleteMaintenanceRecord { .. } => "CompleteMaintenanceRecord",
            Self::AddFuelLog { .. } => "AddFuelLog",
            Self::AddExpense { .. } => "AddExpense",
            Self::ReportIncident { .. } => "ReportIncident",
        }
    }
}
