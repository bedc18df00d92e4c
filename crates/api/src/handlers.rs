// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every mutation handler follows the same shape: enforce authorization,
//! translate the wire request into a typed core command, apply it to the
//! current state, translate any errors, and return the response together
//! with the audit event and new state for the caller to persist.

use fleetflow::{Command, FleetState, TransitionResult, apply};
use fleetflow_audit::{AuditEvent, Cause};
use fleetflow_domain::{
    DriverId, IncidentSeverity, LicenseStatus, MaintenanceId, TripId, VehicleId, VehicleType,
    assess_financial_risks, collect_system_alerts, driver_trip_stats, forecast_maintenance,
    parse_date, recommend_dispatch,
};
use time::Date;
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AddDriverRequest, AddExpenseRequest, AddFuelLogRequest, AddMaintenanceRequest, AddTripRequest,
    AddVehicleRequest, CompleteTripRequest, DispatchRecommendationInfo, DriverInfo,
    DriverStatsInfo, ExpenseInfo, FinancialRiskInfo, FuelLogInfo, IncidentInfo,
    ListDriversResponse, ListExpensesResponse, ListFuelLogsResponse, ListIncidentsResponse,
    ListMaintenanceResponse, ListTripsResponse, ListVehiclesResponse, MaintenanceForecastInfo,
    MaintenanceInfo, ReportIncidentRequest, SystemAlertInfo, TripInfo, UpdateDriverRequest,
    UpdateVehicleRequest, VehicleInfo,
};

/// The result of an API operation that includes both the response and the
/// audit event.
///
/// This ensures that successful API operations always produce an audit
/// trail, and hands the caller the new state to persist and install.
#[derive(Debug, Clone)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
    /// The new state after the operation.
    pub new_state: FleetState,
}

/// Parses a wire vehicle type.
fn parse_vehicle_type(raw: &str) -> Result<VehicleType, ApiError> {
    VehicleType::parse(raw).map_err(translate_domain_error)
}

/// Parses a wire license category list.
fn parse_categories(raw: &[String]) -> Result<Vec<VehicleType>, ApiError> {
    raw.iter()
        .map(|c| parse_vehicle_type(c))
        .collect::<Result<Vec<VehicleType>, ApiError>>()
}

/// Parses an optional wire date.
fn parse_optional_date(raw: Option<&String>) -> Result<Option<Date>, ApiError> {
    raw.map(|s| parse_date(s).map_err(translate_domain_error))
        .transpose()
}

/// Applies a command and wraps the outcome, extracting the response entity
/// with `pick`.
fn run_command<T>(
    state: &FleetState,
    command: Command,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
    pick: impl FnOnce(&TransitionResult) -> Result<T, ApiError>,
) -> Result<ApiResult<T>, ApiError> {
    let result: TransitionResult = apply(
        state,
        command,
        actor.to_audit_actor(),
        cause,
        today,
    )
    .map_err(translate_core_error)?;

    info!(
        action = %result.audit_event.action.name,
        actor = %result.audit_event.actor.id,
        "Applied command"
    );

    let response: T = pick(&result)?;
    Ok(ApiResult {
        response,
        audit_event: result.audit_event,
        new_state: result.new_state,
    })
}

/// Extracts the entity a creating command added, by its generated id.
fn created_vehicle(result: &TransitionResult) -> Result<VehicleInfo, ApiError> {
    let id: &str = result.created_id.as_deref().unwrap_or_default();
    result
        .new_state
        .vehicle(&VehicleId::new(id))
        .map(VehicleInfo::from)
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Created vehicle missing from new state"),
        })
}

fn created_driver(result: &TransitionResult) -> Result<DriverInfo, ApiError> {
    let id: &str = result.created_id.as_deref().unwrap_or_default();
    result
        .new_state
        .driver(&DriverId::new(id))
        .map(DriverInfo::from)
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Created driver missing from new state"),
        })
}

fn created_trip(result: &TransitionResult) -> Result<TripInfo, ApiError> {
    let id: &str = result.created_id.as_deref().unwrap_or_default();
    result
        .new_state
        .trip(&TripId::new(id))
        .map(TripInfo::from)
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Created trip missing from new state"),
        })
}

/// Adds a vehicle via the API boundary with authorization.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager, a field fails
/// validation, or the license plate is already taken.
pub fn add_vehicle(
    state: &FleetState,
    request: AddVehicleRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<VehicleInfo>, ApiError> {
    AuthorizationService::authorize_fleet_admin(actor, "add_vehicle")?;
    let vehicle_type: VehicleType = parse_vehicle_type(&request.vehicle_type)?;

    let command: Command = Command::AddVehicle {
        name: request.name,
        model: request.model,
        license_plate: request.license_plate,
        vehicle_type,
        region: request.region,
        max_capacity_kg: request.max_capacity_kg,
        odometer_km: request.odometer_km,
        acquisition_cost: request.acquisition_cost,
        revenue: request.revenue,
    };

    run_command(state, command, actor, cause, today, created_vehicle)
}

/// Updates a vehicle's descriptive fields.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager, the vehicle does not
/// exist, or validation fails.
pub fn update_vehicle(
    state: &FleetState,
    vehicle_id: &str,
    request: UpdateVehicleRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<VehicleInfo>, ApiError> {
    AuthorizationService::authorize_fleet_admin(actor, "update_vehicle")?;
    let vehicle_type: VehicleType = parse_vehicle_type(&request.vehicle_type)?;
    let id: VehicleId = VehicleId::new(vehicle_id);

    let command: Command = Command::UpdateVehicle {
        vehicle_id: id.clone(),
        name: request.name,
        model: request.model,
        license_plate: request.license_plate,
        vehicle_type,
        region: request.region,
        max_capacity_kg: request.max_capacity_kg,
        acquisition_cost: request.acquisition_cost,
        revenue: request.revenue,
    };

    run_command(state, command, actor, cause, today, move |result| {
        result
            .new_state
            .vehicle(&id)
            .map(VehicleInfo::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Updated vehicle missing from new state"),
            })
    })
}

/// Deletes a vehicle.
///
/// No cascade check is performed against referencing trips or records.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager or the vehicle does not
/// exist.
pub fn delete_vehicle(
    state: &FleetState,
    vehicle_id: &str,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<()>, ApiError> {
    AuthorizationService::authorize_fleet_admin(actor, "delete_vehicle")?;

    let command: Command = Command::DeleteVehicle {
        vehicle_id: VehicleId::new(vehicle_id),
    };
    run_command(state, command, actor, cause, today, |_| Ok(()))
}

/// Flips a vehicle between Out of Service and Available.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager or the vehicle does not
/// exist.
pub fn toggle_vehicle_out_of_service(
    state: &FleetState,
    vehicle_id: &str,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<VehicleInfo>, ApiError> {
    AuthorizationService::authorize_fleet_admin(actor, "toggle_vehicle_out_of_service")?;
    let id: VehicleId = VehicleId::new(vehicle_id);

    let command: Command = Command::ToggleVehicleOutOfService {
        vehicle_id: id.clone(),
    };
    run_command(state, command, actor, cause, today, move |result| {
        result
            .new_state
            .vehicle(&id)
            .map(VehicleInfo::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Toggled vehicle missing from new state"),
            })
    })
}

/// Registers a driver.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager, a field fails
/// validation, or the license number is already taken.
pub fn add_driver(
    state: &FleetState,
    request: AddDriverRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<DriverInfo>, ApiError> {
    AuthorizationService::authorize_fleet_admin(actor, "add_driver")?;
    let license_status: LicenseStatus =
        LicenseStatus::parse(&request.license_status).map_err(translate_domain_error)?;
    let license_category: Vec<VehicleType> = parse_categories(&request.license_category)?;
    let license_expiry: Option<Date> = parse_optional_date(request.license_expiry.as_ref())?;

    let command: Command = Command::AddDriver {
        name: request.name,
        license_number: request.license_number,
        license_expiry,
        license_status,
        license_category,
        safety_score: request.safety_score,
        phone: request.phone,
    };

    run_command(state, command, actor, cause, today, created_driver)
}

/// Updates a driver's descriptive fields.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager, the driver does not
/// exist, or validation fails.
pub fn update_driver(
    state: &FleetState,
    driver_id: &str,
    request: UpdateDriverRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<DriverInfo>, ApiError> {
    AuthorizationService::authorize_fleet_admin(actor, "update_driver")?;
    let license_status: LicenseStatus =
        LicenseStatus::parse(&request.license_status).map_err(translate_domain_error)?;
    let license_category: Vec<VehicleType> = parse_categories(&request.license_category)?;
    let license_expiry: Option<Date> = parse_optional_date(request.license_expiry.as_ref())?;
    let id: DriverId = DriverId::new(driver_id);

    let command: Command = Command::UpdateDriver {
        driver_id: id.clone(),
        name: request.name,
        license_number: request.license_number,
        license_expiry,
        license_status,
        license_category,
        safety_score: request.safety_score,
        phone: request.phone,
    };

    run_command(state, command, actor, cause, today, move |result| {
        result
            .new_state
            .driver(&id)
            .map(DriverInfo::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Updated driver missing from new state"),
            })
    })
}

/// Deletes a driver.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager or the driver does not
/// exist.
pub fn delete_driver(
    state: &FleetState,
    driver_id: &str,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<()>, ApiError> {
    AuthorizationService::authorize_fleet_admin(actor, "delete_driver")?;

    let command: Command = Command::DeleteDriver {
        driver_id: DriverId::new(driver_id),
    };
    run_command(state, command, actor, cause, today, |_| Ok(()))
}

/// Creates a trip in Draft status.
///
/// # Errors
///
/// Returns an error if the actor may not drive the trip lifecycle, the
/// vehicle or driver is unknown, or the assignment violates capacity or
/// license rules.
pub fn add_trip(
    state: &FleetState,
    request: AddTripRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<TripInfo>, ApiError> {
    AuthorizationService::authorize_trip_lifecycle(actor, "add_trip")?;

    let command: Command = Command::AddTrip {
        vehicle_id: VehicleId::new(&request.vehicle_id),
        driver_id: DriverId::new(&request.driver_id),
        cargo_weight_kg: request.cargo_weight_kg,
        cargo_description: request.cargo_description,
        origin: request.origin,
        destination: request.destination,
    };

    run_command(state, command, actor, cause, today, created_trip)
}

/// Dispatches a Draft trip.
///
/// # Errors
///
/// Returns an error if the actor may not drive the trip lifecycle, the
/// trip is unknown, or it is not in Draft status.
pub fn dispatch_trip(
    state: &FleetState,
    trip_id: &str,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<TripInfo>, ApiError> {
    AuthorizationService::authorize_trip_lifecycle(actor, "dispatch_trip")?;
    let id: TripId = TripId::new(trip_id);

    let command: Command = Command::DispatchTrip { trip_id: id.clone() };
    run_command(state, command, actor, cause, today, move |result| {
        result
            .new_state
            .trip(&id)
            .map(TripInfo::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Dispatched trip missing from new state"),
            })
    })
}

/// Completes a Dispatched trip.
///
/// # Errors
///
/// Returns an error if the actor may not drive the trip lifecycle, the
/// trip is unknown or not Dispatched, or the final odometer reading is
/// below the vehicle's current reading.
pub fn complete_trip(
    state: &FleetState,
    trip_id: &str,
    request: CompleteTripRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<TripInfo>, ApiError> {
    AuthorizationService::authorize_trip_lifecycle(actor, "complete_trip")?;
    let id: TripId = TripId::new(trip_id);

    let command: Command = Command::CompleteTrip {
        trip_id: id.clone(),
        final_odometer_km: request.final_odometer_km,
    };
    run_command(state, command, actor, cause, today, move |result| {
        result
            .new_state
            .trip(&id)
            .map(TripInfo::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Completed trip missing from new state"),
            })
    })
}

/// Cancels a Draft or Dispatched trip.
///
/// # Errors
///
/// Returns an error if the actor may not drive the trip lifecycle, the
/// trip is unknown, or it is already terminal.
pub fn cancel_trip(
    state: &FleetState,
    trip_id: &str,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<TripInfo>, ApiError> {
    AuthorizationService::authorize_trip_lifecycle(actor, "cancel_trip")?;
    let id: TripId = TripId::new(trip_id);

    let command: Command = Command::CancelTrip { trip_id: id.clone() };
    run_command(state, command, actor, cause, today, move |result| {
        result
            .new_state
            .trip(&id)
            .map(TripInfo::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Cancelled trip missing from new state"),
            })
    })
}

/// Opens a maintenance record, forcing the vehicle In Shop.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager, the vehicle is unknown,
/// or the record fields fail validation.
pub fn add_maintenance_record(
    state: &FleetState,
    request: AddMaintenanceRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<MaintenanceInfo>, ApiError> {
    AuthorizationService::authorize_fleet_admin(actor, "add_maintenance_record")?;
    let date: Date = parse_date(&request.date).map_err(translate_domain_error)?;

    let command: Command = Command::AddMaintenanceRecord {
        vehicle_id: VehicleId::new(&request.vehicle_id),
        service_type: request.service_type,
        description: request.description,
        cost: request.cost,
        date,
        odometer_at_service_km: request.odometer_at_service_km,
    };

    run_command(state, command, actor, cause, today, |result| {
        let id: &str = result.created_id.as_deref().unwrap_or_default();
        result
            .new_state
            .maintenance_record(&MaintenanceId::new(id))
            .map(MaintenanceInfo::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Created maintenance record missing from new state"),
            })
    })
}

/// Completes an In Progress maintenance record, releasing the vehicle.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager, the record is unknown,
/// or it is already Completed.
pub fn complete_maintenance_record(
    state: &FleetState,
    record_id: &str,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<MaintenanceInfo>, ApiError> {
    AuthorizationService::authorize_fleet_admin(actor, "complete_maintenance_record")?;
    let id: MaintenanceId = MaintenanceId::new(record_id);

    let command: Command = Command::CompleteMaintenanceRecord {
        record_id: id.clone(),
    };
    run_command(state, command, actor, cause, today, move |result| {
        result
            .new_state
            .maintenance_record(&id)
            .map(MaintenanceInfo::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Completed maintenance record missing from new state"),
            })
    })
}

/// Appends a fuel log entry.
///
/// # Errors
///
/// Returns an error if the actor may not record finance entries, the
/// vehicle is unknown, or an amount is invalid.
pub fn add_fuel_log(
    state: &FleetState,
    request: AddFuelLogRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<FuelLogInfo>, ApiError> {
    AuthorizationService::authorize_finance_entry(actor, "add_fuel_log")?;
    let date: Date = parse_date(&request.date).map_err(translate_domain_error)?;

    let command: Command = Command::AddFuelLog {
        vehicle_id: VehicleId::new(&request.vehicle_id),
        liters: request.liters,
        cost: request.cost,
        date,
        station: request.station,
    };

    run_command(state, command, actor, cause, today, |result| {
        result
            .new_state
            .fuel_logs
            .last()
            .map(FuelLogInfo::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Created fuel log missing from new state"),
            })
    })
}

/// Appends an expense entry.
///
/// # Errors
///
/// Returns an error if the actor may not record finance entries, the
/// vehicle is unknown, or the amount is invalid.
pub fn add_expense(
    state: &FleetState,
    request: AddExpenseRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<ExpenseInfo>, ApiError> {
    AuthorizationService::authorize_finance_entry(actor, "add_expense")?;
    let date: Date = parse_date(&request.date).map_err(translate_domain_error)?;

    let command: Command = Command::AddExpense {
        vehicle_id: VehicleId::new(&request.vehicle_id),
        expense_type: request.expense_type,
        amount: request.amount,
        date,
        notes: request.notes,
    };

    run_command(state, command, actor, cause, today, |result| {
        result
            .new_state
            .expenses
            .last()
            .map(ExpenseInfo::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Created expense missing from new state"),
            })
    })
}

/// Reports an incident against a vehicle.
///
/// One atomic transition: the incident opens, the vehicle's Dispatched
/// trip (if any) is cancelled, that trip's driver is suspended, and the
/// vehicle goes Out of Service.
///
/// # Errors
///
/// Returns an error if the actor may not report incidents, the vehicle is
/// unknown, or the severity string is not recognized.
pub fn report_incident(
    state: &FleetState,
    request: ReportIncidentRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
    today: Date,
) -> Result<ApiResult<IncidentInfo>, ApiError> {
    AuthorizationService::authorize_incident_report(actor)?;
    let severity: IncidentSeverity =
        IncidentSeverity::parse(&request.severity).map_err(translate_domain_error)?;

    let command: Command = Command::ReportIncident {
        vehicle_id: VehicleId::new(&request.vehicle_id),
        severity,
        description: request.description,
        estimated_cost: request.estimated_cost,
        insurance_status: request.insurance_status,
    };

    run_command(state, command, actor, cause, today, |result| {
        result
            .new_state
            .incidents
            .last()
            .map(IncidentInfo::from)
            .ok_or_else(|| ApiError::Internal {
                message: String::from("Created incident missing from new state"),
            })
    })
}

/// Lists all vehicles.
#[must_use]
pub fn list_vehicles(state: &FleetState) -> ListVehiclesResponse {
    ListVehiclesResponse {
        vehicles: state.vehicles.iter().map(VehicleInfo::from).collect(),
    }
}

/// Fetches one vehicle.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the id is unknown.
pub fn get_vehicle(state: &FleetState, vehicle_id: &str) -> Result<VehicleInfo, ApiError> {
    state
        .vehicle(&VehicleId::new(vehicle_id))
        .map(VehicleInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Vehicle"),
            message: format!("Vehicle with id '{vehicle_id}' not found"),
        })
}

/// Lists all drivers.
#[must_use]
pub fn list_drivers(state: &FleetState) -> ListDriversResponse {
    ListDriversResponse {
        drivers: state.drivers.iter().map(DriverInfo::from).collect(),
    }
}

/// Fetches one driver.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the id is unknown.
pub fn get_driver(state: &FleetState, driver_id: &str) -> Result<DriverInfo, ApiError> {
    state
        .driver(&DriverId::new(driver_id))
        .map(DriverInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Driver"),
            message: format!("Driver with id '{driver_id}' not found"),
        })
}

/// Lists all trips.
#[must_use]
pub fn list_trips(state: &FleetState) -> ListTripsResponse {
    ListTripsResponse {
        trips: state.trips.iter().map(TripInfo::from).collect(),
    }
}

/// Fetches one trip.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the id is unknown.
pub fn get_trip(state: &FleetState, trip_id: &str) -> Result<TripInfo, ApiError> {
    state
        .trip(&TripId::new(trip_id))
        .map(TripInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Trip"),
            message: format!("Trip with id '{trip_id}' not found"),
        })
}

/// Lists all maintenance records.
#[must_use]
pub fn list_maintenance(state: &FleetState) -> ListMaintenanceResponse {
    ListMaintenanceResponse {
        maintenance: state.maintenance.iter().map(MaintenanceInfo::from).collect(),
    }
}

/// Lists all fuel log entries.
#[must_use]
pub fn list_fuel_logs(state: &FleetState) -> ListFuelLogsResponse {
    ListFuelLogsResponse {
        fuel_logs: state.fuel_logs.iter().map(FuelLogInfo::from).collect(),
    }
}

/// Lists all expense entries.
#[must_use]
pub fn list_expenses(state: &FleetState) -> ListExpensesResponse {
    ListExpensesResponse {
        expenses: state.expenses.iter().map(ExpenseInfo::from).collect(),
    }
}

/// Lists all incidents.
#[must_use]
pub fn list_incidents(state: &FleetState) -> ListIncidentsResponse {
    ListIncidentsResponse {
        incidents: state.incidents.iter().map(IncidentInfo::from).collect(),
    }
}

/// Recommends the best vehicle and driver for a pending cargo assignment.
///
/// Returns `None` only when neither a vehicle nor a driver is eligible.
///
/// # Errors
///
/// Returns an error if the vehicle type hint is not recognized.
pub fn smart_dispatch(
    state: &FleetState,
    cargo_weight_kg: u32,
    vehicle_type: Option<&str>,
) -> Result<Option<DispatchRecommendationInfo>, ApiError> {
    let type_hint: Option<VehicleType> = vehicle_type.map(parse_vehicle_type).transpose()?;

    Ok(
        recommend_dispatch(&state.vehicles, &state.drivers, cargo_weight_kg, type_hint).map(
            |rec| DispatchRecommendationInfo {
                vehicle: rec.vehicle.as_ref().map(VehicleInfo::from),
                driver: rec.driver.as_ref().map(DriverInfo::from),
            },
        ),
    )
}

/// Flags vehicles overdue for service.
#[must_use]
pub fn predictive_alerts(state: &FleetState, today: Date) -> Vec<MaintenanceForecastInfo> {
    forecast_maintenance(&state.vehicles, &state.maintenance, today)
        .iter()
        .map(MaintenanceForecastInfo::from)
        .collect()
}

/// Identifies financially underperforming vehicles.
#[must_use]
pub fn financial_risks(state: &FleetState) -> Vec<FinancialRiskInfo> {
    assess_financial_risks(&state.vehicles, &state.fuel_logs, &state.maintenance)
        .iter()
        .map(FinancialRiskInfo::from)
        .collect()
}

/// Builds the unified, prioritized alert feed.
#[must_use]
pub fn system_alerts(state: &FleetState, today: Date) -> Vec<SystemAlertInfo> {
    collect_system_alerts(
        &state.vehicles,
        &state.drivers,
        &state.trips,
        &state.maintenance,
        &state.incidents,
        today,
    )
    .iter()
    .map(SystemAlertInfo::from)
    .collect()
}

/// Computes trip statistics for a driver.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the driver id is unknown.
pub fn driver_stats(state: &FleetState, driver_id: &str) -> Result<DriverStatsInfo, ApiError> {
    let id: DriverId = DriverId::new(driver_id);
    if state.driver(&id).is_none() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Driver"),
            message: format!("Driver with id '{driver_id}' not found"),
        });
    }

    Ok(DriverStatsInfo::from_stats(
        driver_id,
        driver_trip_stats(&id, &state.trips),
    ))
}
