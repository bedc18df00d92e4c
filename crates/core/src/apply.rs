// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{FleetState, TransitionResult};
use fleetflow_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use fleetflow_domain::{
    DomainError, Driver, DriverId, DutyStatus, Expense, ExpenseId, FuelLog, FuelLogId, Incident,
    IncidentId, IncidentStatus, LicenseNumber, LicensePlate, MaintenanceId, MaintenanceRecord,
    MaintenanceStatus, Severity, Trip, TripId, TripStatus, Vehicle, VehicleId, VehicleStatus,
    VehicleType, validate_amount, validate_driver_fields, validate_license_number_unique,
    validate_license_plate_unique, validate_trip_assignment, validate_vehicle_fields,
};
use time::Date;

/// Builds the transition result for a validated state change.
fn transition(
    state: &FleetState,
    new_state: FleetState,
    actor: Actor,
    cause: Cause,
    name: &str,
    details: String,
    severity: Severity,
    created_id: Option<String>,
) -> TransitionResult {
    let before: StateSnapshot = state.to_snapshot();
    let after: StateSnapshot = new_state.to_snapshot();
    let action: Action = Action::new(name.to_string(), Some(details));
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after, severity);

    TransitionResult {
        new_state,
        audit_event,
        created_id,
    }
}

/// Deduplicates a license category list, preserving declaration order.
fn dedup_categories(categories: Vec<VehicleType>) -> Vec<VehicleType> {
    let mut seen: Vec<VehicleType> = Vec::with_capacity(categories.len());
    for category in categories {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// Applies a command to the current state, producing a new state and audit
/// event.
///
/// Commands are atomic: all validation happens against the current state
/// before the new state is constructed, so a failing command leaves no
/// partial effects. Compound commands (dispatch, complete, cancel, incident)
/// apply their cross-entity effects inside one transition.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `today` - The current civil date, used for created/dispatched/completed
///   timestamps
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if the command violates domain rules: missing or
/// malformed fields, uniqueness conflicts, unknown entity ids, or state
/// transitions the trip/maintenance state machines do not permit.
#[allow(clippy::too_many_lines)]
pub fn apply(
    state: &FleetState,
    command: Command,
    actor: Actor,
    cause: Cause,
    today: Date,
) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();

    match command {
        Command::AddVehicle {
            name: vehicle_name,
            model,
            license_plate,
            vehicle_type,
            region,
            max_capacity_kg,
            odometer_km,
            acquisition_cost,
            revenue,
        } => {
            validate_vehicle_fields(&vehicle_name, &license_plate)?;
            validate_license_plate_unique(&license_plate, &state.vehicles, None)?;
            validate_amount("acquisition_cost", acquisition_cost)?;
            validate_amount("revenue", revenue)?;

            let vehicle: Vehicle = Vehicle {
                id: VehicleId::generate(),
                name: vehicle_name,
                model,
                license_plate: LicensePlate::new(&license_plate),
                vehicle_type,
                region,
                max_capacity_kg,
                odometer_km,
                status: VehicleStatus::Available,
                acquisition_cost,
                revenue,
            };
            let details: String = format!(
                "{} added to fleet. License: {}",
                vehicle.name, vehicle.license_plate
            );
            let created_id: String = vehicle.id.value().to_string();

            let mut new_state: FleetState = state.clone();
            new_state.vehicles.push(vehicle);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Info,
                Some(created_id),
            ))
        }
        Command::UpdateVehicle {
            vehicle_id,
            name: vehicle_name,
            model,
            license_plate,
            vehicle_type,
            region,
            max_capacity_kg,
            acquisition_cost,
            revenue,
        } => {
            if state.vehicle(&vehicle_id).is_none() {
                return Err(CoreError::DomainViolation(
                    DomainError::VehicleNotFound(
                        vehicle_id.value().to_string(),
                    ),
                ));
            }
            validate_vehicle_fields(&vehicle_name, &license_plate)?;
            validate_license_plate_unique(&license_plate, &state.vehicles, Some(&vehicle_id))?;
            validate_amount("acquisition_cost", acquisition_cost)?;
            validate_amount("revenue", revenue)?;

            let details: String = format!("{vehicle_name} updated");
            let mut new_state: FleetState = state.clone();
            if let Some(vehicle) = new_state.vehicle_mut(&vehicle_id) {
                vehicle.name = vehicle_name;
                vehicle.model = model;
                vehicle.license_plate = LicensePlate::new(&license_plate);
                vehicle.vehicle_type = vehicle_type;
                vehicle.region = region;
                vehicle.max_capacity_kg = max_capacity_kg;
                vehicle.acquisition_cost = acquisition_cost;
                vehicle.revenue = revenue;
            }

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Info,
                None,
            ))
        }
        Command::DeleteVehicle { vehicle_id } => {
            let vehicle: &Vehicle = state.vehicle(&vehicle_id).ok_or_else(|| {
                DomainError::VehicleNotFound(vehicle_id.value().to_string())
            })?;
            let details: String = format!("{} removed from fleet", vehicle.name);

            let mut new_state: FleetState = state.clone();
            new_state.vehicles.retain(|v| v.id != vehicle_id);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Warning,
                None,
            ))
        }
        Command::ToggleVehicleOutOfService { vehicle_id } => {
            let vehicle: &Vehicle = state.vehicle(&vehicle_id).ok_or_else(|| {
                DomainError::VehicleNotFound(vehicle_id.value().to_string())
            })?;
            let next_status: VehicleStatus = if vehicle.status == VehicleStatus::OutOfService {
                VehicleStatus::Available
            } else {
                VehicleStatus::OutOfService
            };
            let details: String = format!("{} marked {next_status}", vehicle.name);

            let mut new_state: FleetState = state.clone();
            if let Some(v) = new_state.vehicle_mut(&vehicle_id) {
                v.status = next_status;
            }

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Warning,
                None,
            ))
        }
        Command::AddDriver {
            name: driver_name,
            license_number,
            license_expiry,
            license_status,
            license_category,
            safety_score,
            phone,
        } => {
            validate_driver_fields(&driver_name, &license_number, safety_score)?;
            validate_license_number_unique(&license_number, &state.drivers, None)?;

            let driver: Driver = Driver {
                id: DriverId::generate(),
                name: driver_name,
                license_number: LicenseNumber::new(&license_number),
                license_expiry,
                license_status,
                license_category: dedup_categories(license_category),
                safety_score,
                duty_status: DutyStatus::OffDuty,
                phone,
            };
            let details: String = format!("{} joined the driver roster", driver.name);
            let created_id: String = driver.id.value().to_string();

            let mut new_state: FleetState = state.clone();
            new_state.drivers.push(driver);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Info,
                Some(created_id),
            ))
        }
        Command::UpdateDriver {
            driver_id,
            name: driver_name,
            license_number,
            license_expiry,
            license_status,
            license_category,
            safety_score,
            phone,
        } => {
            if state.driver(&driver_id).is_none() {
                return Err(CoreError::DomainViolation(
                    DomainError::DriverNotFound(driver_id.value().to_string()),
                ));
            }
            validate_driver_fields(&driver_name, &license_number, safety_score)?;
            validate_license_number_unique(&license_number, &state.drivers, Some(&driver_id))?;

            let details: String = format!("{driver_name} updated");
            let mut new_state: FleetState = state.clone();
            if let Some(driver) = new_state.driver_mut(&driver_id) {
                driver.name = driver_name;
                driver.license_number = LicenseNumber::new(&license_number);
                driver.license_expiry = license_expiry;
                driver.license_status = license_status;
                driver.license_category = dedup_categories(license_category);
                driver.safety_score = safety_score;
                driver.phone = phone;
            }

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Info,
                None,
            ))
        }
        Command::DeleteDriver { driver_id } => {
            let driver: &Driver = state.driver(&driver_id).ok_or_else(|| {
                DomainError::DriverNotFound(driver_id.value().to_string())
            })?;
            let details: String = format!("{} removed from the driver roster", driver.name);

            let mut new_state: FleetState = state.clone();
            new_state.drivers.retain(|d| d.id != driver_id);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Warning,
                None,
            ))
        }
        Command::AddTrip {
            vehicle_id,
            driver_id,
            cargo_weight_kg,
            cargo_description,
            origin,
            destination,
        } => {
            let vehicle: &Vehicle = state.vehicle(&vehicle_id).ok_or_else(|| {
                DomainError::VehicleNotFound(vehicle_id.value().to_string())
            })?;
            let driver: &Driver = state.driver(&driver_id).ok_or_else(|| {
                DomainError::DriverNotFound(driver_id.value().to_string())
            })?;
            validate_trip_assignment(vehicle, driver, cargo_weight_kg, &origin, &destination)?;

            let trip: Trip = Trip {
                id: TripId::generate(),
                vehicle_id,
                driver_id,
                cargo_weight_kg,
                cargo_description,
                origin,
                destination,
                status: TripStatus::Draft,
                created_at: today,
                dispatched_at: None,
                completed_at: None,
            };
            let details: String = format!(
                "Trip {} created. {} to {}",
                trip.id, trip.origin, trip.destination
            );
            let created_id: String = trip.id.value().to_string();

            let mut new_state: FleetState = state.clone();
            new_state.trips.push(trip);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Info,
                Some(created_id),
            ))
        }
        Command::DispatchTrip { trip_id } => {
            let trip: &Trip = state.trip(&trip_id).ok_or_else(|| {
                DomainError::TripNotFound(trip_id.value().to_string())
            })?;
            if trip.status != TripStatus::Draft {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidTripTransition {
                        trip_id: trip_id.value().to_string(),
                        from: trip.status,
                        attempted: "dispatch",
                    },
                ));
            }
            let vehicle: &Vehicle = state.vehicle(&trip.vehicle_id).ok_or_else(|| {
                DomainError::VehicleNotFound(trip.vehicle_id.value().to_string())
            })?;
            if state.driver(&trip.driver_id).is_none() {
                return Err(CoreError::DomainViolation(
                    DomainError::DriverNotFound(
                        trip.driver_id.value().to_string(),
                    ),
                ));
            }

            let details: String = format!(
                "Trip {} dispatched. {} en route to {}",
                trip.id, vehicle.name, trip.destination
            );
            let vehicle_id: VehicleId = trip.vehicle_id.clone();
            let driver_id: DriverId = trip.driver_id.clone();

            let mut new_state: FleetState = state.clone();
            if let Some(t) = new_state.trip_mut(&trip_id) {
                t.status = TripStatus::Dispatched;
                t.dispatched_at = Some(today);
            }
            if let Some(v) = new_state.vehicle_mut(&vehicle_id) {
                v.status = VehicleStatus::OnTrip;
            }
            if let Some(d) = new_state.driver_mut(&driver_id) {
                d.duty_status = DutyStatus::OnDuty;
            }

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Info,
                None,
            ))
        }
        Command::CompleteTrip {
            trip_id,
            final_odometer_km,
        } => {
            let trip: &Trip = state.trip(&trip_id).ok_or_else(|| {
                DomainError::TripNotFound(trip_id.value().to_string())
            })?;
            if trip.status != TripStatus::Dispatched {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidTripTransition {
                        trip_id: trip_id.value().to_string(),
                        from: trip.status,
                        attempted: "complete",
                    },
                ));
            }
            let vehicle: &Vehicle = state.vehicle(&trip.vehicle_id).ok_or_else(|| {
                DomainError::VehicleNotFound(trip.vehicle_id.value().to_string())
            })?;
            if state.driver(&trip.driver_id).is_none() {
                return Err(CoreError::DomainViolation(
                    DomainError::DriverNotFound(
                        trip.driver_id.value().to_string(),
                    ),
                ));
            }
            if let Some(final_km) = final_odometer_km
                && final_km < vehicle.odometer_km
            {
                return Err(CoreError::DomainViolation(
                    DomainError::OdometerRegression {
                        current_km: vehicle.odometer_km,
                        proposed_km: final_km,
                    },
                ));
            }

            let details: String = format!(
                "Trip {} completed. {} arrived in {}",
                trip.id, vehicle.name, trip.destination
            );
            let vehicle_id: VehicleId = trip.vehicle_id.clone();
            let driver_id: DriverId = trip.driver_id.clone();

            let mut new_state: FleetState = state.clone();
            if let Some(t) = new_state.trip_mut(&trip_id) {
                t.status = TripStatus::Completed;
                t.completed_at = Some(today);
            }
            if let Some(v) = new_state.vehicle_mut(&vehicle_id) {
                v.status = VehicleStatus::Available;
                if let Some(final_km) = final_odometer_km {
                    v.odometer_km = final_km;
                }
            }
            if let Some(d) = new_state.driver_mut(&driver_id) {
                d.duty_status = DutyStatus::OffDuty;
            }

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Info,
                None,
            ))
        }
        Command::CancelTrip { trip_id } => {
            let trip: &Trip = state.trip(&trip_id).ok_or_else(|| {
                DomainError::TripNotFound(trip_id.value().to_string())
            })?;
            if !trip.status.can_transition_to(TripStatus::Cancelled) {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidTripTransition {
                        trip_id: trip_id.value().to_string(),
                        from: trip.status,
                        attempted: "cancel",
                    },
                ));
            }

            let was_dispatched: bool = trip.status == TripStatus::Dispatched;
            let details: String = format!("Trip {} cancelled", trip.id);
            let vehicle_id: VehicleId = trip.vehicle_id.clone();
            let driver_id: DriverId = trip.driver_id.clone();

            let mut new_state: FleetState = state.clone();
            if let Some(t) = new_state.trip_mut(&trip_id) {
                t.status = TripStatus::Cancelled;
            }
            if was_dispatched {
                // The vehicle or driver may have been orphaned by a delete;
                // cancellation still succeeds so the trip is not stuck.
                if let Some(v) = new_state.vehicle_mut(&vehicle_id) {
                    v.status = VehicleStatus::Available;
                }
                if let Some(d) = new_state.driver_mut(&driver_id) {
                    d.duty_status = DutyStatus::OffDuty;
                }
            }

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Warning,
                None,
            ))
        }
        Command::AddMaintenanceRecord {
            vehicle_id,
            service_type,
            description,
            cost,
            date,
            odometer_at_service_km,
        } => {
            let vehicle: &Vehicle = state.vehicle(&vehicle_id).ok_or_else(|| {
                DomainError::VehicleNotFound(vehicle_id.value().to_string())
            })?;
            if service_type.is_empty() {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidServiceType(String::from(
                        "Service type is required",
                    )),
                ));
            }
            validate_amount("cost", cost)?;

            let record: MaintenanceRecord = MaintenanceRecord {
                id: MaintenanceId::generate(),
                vehicle_id: vehicle_id.clone(),
                service_type,
                description,
                cost,
                date,
                status: MaintenanceStatus::InProgress,
                odometer_at_service_km,
            };
            let details: String = format!(
                "{} checked into maintenance. {}",
                vehicle.name, record.service_type
            );
            let created_id: String = record.id.value().to_string();

            let mut new_state: FleetState = state.clone();
            new_state.maintenance.push(record);
            if let Some(v) = new_state.vehicle_mut(&vehicle_id) {
                v.status = VehicleStatus::InShop;
            }

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Warning,
                Some(created_id),
            ))
        }
        Command::CompleteMaintenanceRecord { record_id } => {
            let record: &MaintenanceRecord =
                state.maintenance_record(&record_id).ok_or_else(|| {
                    DomainError::MaintenanceRecordNotFound(
                        record_id.value().to_string(),
                    )
                })?;
            if record.status != MaintenanceStatus::InProgress {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidMaintenanceTransition {
                        record_id: record_id.value().to_string(),
                        from: record.status,
                    },
                ));
            }

            let vehicle_id: VehicleId = record.vehicle_id.clone();
            let vehicle_name: String = state
                .vehicle(&vehicle_id)
                .map_or_else(|| String::from("Vehicle"), |v| v.name.clone());
            let details: String = format!(
                "{} released from maintenance. {}",
                vehicle_name, record.service_type
            );

            let mut new_state: FleetState = state.clone();
            if let Some(m) = new_state.maintenance_record_mut(&record_id) {
                m.status = MaintenanceStatus::Completed;
            }
            // No check for other open records against the same vehicle; the
            // most recent completion wins, as the dashboard always did.
            if let Some(v) = new_state.vehicle_mut(&vehicle_id) {
                v.status = VehicleStatus::Available;
            }

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Info,
                None,
            ))
        }
        Command::AddFuelLog {
            vehicle_id,
            liters,
            cost,
            date,
            station,
        } => {
            let vehicle: &Vehicle = state.vehicle(&vehicle_id).ok_or_else(|| {
                DomainError::VehicleNotFound(vehicle_id.value().to_string())
            })?;
            validate_amount("liters", liters)?;
            validate_amount("cost", cost)?;

            let entry: FuelLog = FuelLog {
                id: FuelLogId::generate(),
                vehicle_id,
                liters,
                cost,
                date,
                station,
            };
            let details: String = format!(
                "Fuel logged for {}. {:.0} L at {:.0}",
                vehicle.name, entry.liters, entry.cost
            );
            let created_id: String = entry.id.value().to_string();

            let mut new_state: FleetState = state.clone();
            new_state.fuel_logs.push(entry);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Info,
                Some(created_id),
            ))
        }
        Command::AddExpense {
            vehicle_id,
            expense_type,
            amount,
            date,
            notes,
        } => {
            let vehicle: &Vehicle = state.vehicle(&vehicle_id).ok_or_else(|| {
                DomainError::VehicleNotFound(vehicle_id.value().to_string())
            })?;
            validate_amount("amount", amount)?;

            let entry: Expense = Expense {
                id: ExpenseId::generate(),
                vehicle_id,
                expense_type,
                amount,
                date,
                notes,
            };
            let details: String = format!(
                "Expense logged for {}. {} at {:.0}",
                vehicle.name, entry.expense_type, entry.amount
            );
            let created_id: String = entry.id.value().to_string();

            let mut new_state: FleetState = state.clone();
            new_state.expenses.push(entry);

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Info,
                Some(created_id),
            ))
        }
        Command::ReportIncident {
            vehicle_id,
            severity,
            description,
            estimated_cost,
            insurance_status,
        } => {
            let vehicle: &Vehicle = state.vehicle(&vehicle_id).ok_or_else(|| {
                DomainError::VehicleNotFound(vehicle_id.value().to_string())
            })?;
            validate_amount("estimated_cost", estimated_cost)?;

            let incident: Incident = Incident {
                id: IncidentId::generate(),
                vehicle_id: vehicle_id.clone(),
                severity,
                description,
                estimated_cost,
                insurance_status,
                status: IncidentStatus::Open,
                date: today,
            };
            let details: String = format!(
                "Incident reported for {}. {severity} severity",
                vehicle.name
            );
            let created_id: String = incident.id.value().to_string();

            let active_trip: Option<(TripId, DriverId)> = state
                .dispatched_trip_for_vehicle(&vehicle_id)
                .map(|t| (t.id.clone(), t.driver_id.clone()));

            let mut new_state: FleetState = state.clone();
            new_state.incidents.push(incident);
            if let Some(v) = new_state.vehicle_mut(&vehicle_id) {
                v.status = VehicleStatus::OutOfService;
            }
            if let Some((trip_id, driver_id)) = active_trip {
                if let Some(t) = new_state.trip_mut(&trip_id) {
                    t.status = TripStatus::Cancelled;
                }
                if let Some(d) = new_state.driver_mut(&driver_id) {
                    d.duty_status = DutyStatus::Suspended;
                }
            }

            Ok(transition(
                state,
                new_state,
                actor,
                cause,
                name,
                details,
                Severity::Critical,
                Some(created_id),
            ))
        }
    }
}
