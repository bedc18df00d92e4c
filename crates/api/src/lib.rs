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
    clippy::all
)]

//! API boundary layer for FleetFlow.
//!
//! This crate translates between the wire representation (string-typed
//! request/response structs) and the core rules engine (typed commands over
//! [`fleetflow::FleetState`]). It enforces authentication and role-based
//! authorization before any command reaches the engine, and translates
//! domain and core errors into the API error contract so internal error
//! types are never leaked.

mod auth;
mod error;
mod handlers;
mod report;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Operator, Role};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, add_driver, add_expense, add_fuel_log, add_maintenance_record, add_trip,
    add_vehicle, cancel_trip, complete_maintenance_record, complete_trip, delete_driver,
    delete_vehicle, dispatch_trip, driver_stats, financial_risks, get_driver, get_trip,
    get_vehicle, list_drivers, list_expenses, list_fuel_logs, list_incidents, list_maintenance,
    list_trips, list_vehicles, predictive_alerts, report_incident, smart_dispatch, system_alerts,
    toggle_vehicle_out_of_service, update_driver, update_vehicle,
};
pub use report::{ReportError, fleet_summary_csv};
pub use request_response::{
    ActivityInfo, AddDriverRequest, AddExpenseRequest, AddFuelLogRequest, AddMaintenanceRequest,
    AddTripRequest, AddVehicleRequest, CompleteTripRequest, DispatchRecommendationInfo,
    DriverInfo, DriverStatsInfo, ExpenseInfo, FinancialRiskInfo, FuelLogInfo, IncidentInfo,
    ListDriversResponse, ListExpensesResponse, ListFuelLogsResponse, ListIncidentsResponse,
    ListMaintenanceResponse, ListTripsResponse, ListVehiclesResponse, LoginRequest,
    LoginResponse, MaintenanceAlertInfo, MaintenanceForecastInfo, MaintenanceInfo,
    ReportIncidentRequest, SystemAlertInfo, TripInfo, UpdateDriverRequest, UpdateVehicleRequest,
    VehicleInfo,
};
