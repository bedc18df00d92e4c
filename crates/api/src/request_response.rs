// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! All wire types are string-typed: enums travel as their display strings
//! and dates as ISO 8601 (`yyyy-mm-dd`). Translation into domain types
//! happens in the handlers, never in the server.

use fleetflow_audit::AuditEvent;
use fleetflow_domain::{
    Driver, DriverTripStats, Expense, FinancialRisk, FuelLog, Incident, MaintenanceAlert,
    MaintenanceRecord, SystemAlert, Trip, Vehicle, VehicleForecast, format_date,
};
use serde::{Deserialize, Serialize};

/// Login request carrying operator credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The operator's login email.
    pub email: String,
    /// The operator's password.
    pub password: String,
}

/// Login response carrying the issued session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The session token to present as `Authorization: Bearer <token>`.
    pub token: String,
    /// The operator's display name.
    pub display_name: String,
    /// The operator's role.
    pub role: String,
}

/// Request to add a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddVehicleRequest {
    /// Human-readable vehicle name.
    pub name: String,
    /// Model year or designation.
    #[serde(default)]
    pub model: String,
    /// License plate.
    pub license_plate: String,
    /// Vehicle type (Truck, Van, Bike).
    pub vehicle_type: String,
    /// Operating region.
    #[serde(default)]
    pub region: String,
    /// Maximum cargo capacity in kilograms.
    #[serde(default)]
    pub max_capacity_kg: u32,
    /// Initial odometer reading in kilometers.
    #[serde(default)]
    pub odometer_km: u32,
    /// Purchase price.
    #[serde(default)]
    pub acquisition_cost: f64,
    /// Cumulative revenue carried over from prior bookkeeping.
    #[serde(default)]
    pub revenue: f64,
}

/// Request to update a vehicle's descriptive fields.
///
/// Status and odometer are transition-owned and absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVehicleRequest {
    /// New vehicle name.
    pub name: String,
    /// New model designation.
    #[serde(default)]
    pub model: String,
    /// New license plate.
    pub license_plate: String,
    /// New vehicle type.
    pub vehicle_type: String,
    /// New operating region.
    #[serde(default)]
    pub region: String,
    /// New maximum cargo capacity in kilograms.
    #[serde(default)]
    pub max_capacity_kg: u32,
    /// New purchase price.
    #[serde(default)]
    pub acquisition_cost: f64,
    /// New cumulative revenue.
    #[serde(default)]
    pub revenue: f64,
}

/// Request to register a driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDriverRequest {
    /// The driver's name.
    pub name: String,
    /// The driver's license number.
    pub license_number: String,
    /// License expiry date (ISO 8601), if known.
    #[serde(default)]
    pub license_expiry: Option<String>,
    /// License validity (Valid, Expiring, Expired).
    #[serde(default = "default_license_status")]
    pub license_status: String,
    /// Vehicle types the driver may operate.
    #[serde(default)]
    pub license_category: Vec<String>,
    /// Safety score from 0 to 100.
    #[serde(default = "default_safety_score")]
    pub safety_score: u8,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
}

fn default_license_status() -> String {
    String::from("Valid")
}

const fn default_safety_score() -> u8 {
    100
}

/// Request to update a driver's descriptive fields.
///
/// Duty status is transition-owned and absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDriverRequest {
    /// New name.
    pub name: String,
    /// New license number.
    pub license_number: String,
    /// New license expiry date (ISO 8601).
    #[serde(default)]
    pub license_expiry: Option<String>,
    /// New license validity.
    pub license_status: String,
    /// New license categories.
    #[serde(default)]
    pub license_category: Vec<String>,
    /// New safety score.
    pub safety_score: u8,
    /// New phone number.
    #[serde(default)]
    pub phone: String,
}

/// Request to create a trip in Draft status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTripRequest {
    /// The assigned vehicle id.
    pub vehicle_id: String,
    /// The assigned driver id.
    pub driver_id: String,
    /// Cargo weight in kilograms.
    #[serde(default)]
    pub cargo_weight_kg: u32,
    /// Cargo description.
    #[serde(default)]
    pub cargo_description: String,
    /// Origin location.
    pub origin: String,
    /// Destination location.
    pub destination: String,
}

/// Request to complete a dispatched trip.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompleteTripRequest {
    /// Final vehicle odometer reading in kilometers, if recorded.
    #[serde(default)]
    pub final_odometer_km: Option<u32>,
}

/// Request to open a maintenance record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMaintenanceRequest {
    /// The vehicle being serviced.
    pub vehicle_id: String,
    /// The kind of service performed.
    pub service_type: String,
    /// Description of the work.
    #[serde(default)]
    pub description: String,
    /// Cost of the service.
    pub cost: f64,
    /// Service date (ISO 8601).
    pub date: String,
    /// Odometer reading at service time, in kilometers.
    #[serde(default)]
    pub odometer_at_service_km: u32,
}

/// Request to append a fuel log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFuelLogRequest {
    /// The fueled vehicle.
    pub vehicle_id: String,
    /// Liters purchased.
    pub liters: f64,
    /// Purchase cost.
    pub cost: f64,
    /// Purchase date (ISO 8601).
    pub date: String,
    /// Station name.
    #[serde(default)]
    pub station: String,
}

/// Request to append an expense entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddExpenseRequest {
    /// The vehicle the expense is attributed to.
    pub vehicle_id: String,
    /// Expense category.
    pub expense_type: String,
    /// Expense amount.
    pub amount: f64,
    /// Expense date (ISO 8601).
    pub date: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

/// Request to report an incident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportIncidentRequest {
    /// The affected vehicle.
    pub vehicle_id: String,
    /// Incident severity (Minor, Major, Critical).
    pub severity: String,
    /// Description of the incident.
    pub description: String,
    /// Estimated cost of damages.
    #[serde(default)]
    pub estimated_cost: f64,
    /// Insurance claim status.
    #[serde(default)]
    pub insurance_status: String,
}

/// Vehicle view returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleInfo {
    /// Opaque unique identifier.
    pub id: String,
    /// Human-readable vehicle name.
    pub name: String,
    /// Model year or designation.
    pub model: String,
    /// License plate, normalized uppercase.
    pub license_plate: String,
    /// Vehicle type.
    pub vehicle_type: String,
    /// Operating region.
    pub region: String,
    /// Maximum cargo capacity in kilograms.
    pub max_capacity_kg: u32,
    /// Current odometer reading in kilometers.
    pub odometer_km: u32,
    /// Operational status.
    pub status: String,
    /// Purchase price.
    pub acquisition_cost: f64,
    /// Cumulative revenue.
    pub revenue: f64,
}

impl From<&Vehicle> for VehicleInfo {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.value().to_string(),
            name: vehicle.name.clone(),
            model: vehicle.model.clone(),
            license_plate: vehicle.license_plate.value().to_string(),
            vehicle_type: vehicle.vehicle_type.to_string(),
            region: vehicle.region.clone(),
            max_capacity_kg: vehicle.max_capacity_kg,
            odometer_km: vehicle.odometer_km,
            status: vehicle.status.to_string(),
            acquisition_cost: vehicle.acquisition_cost,
            revenue: vehicle.revenue,
        }
    }
}

/// Driver view returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverInfo {
    /// Opaque unique identifier.
    pub id: String,
    /// The driver's name.
    pub name: String,
    /// License number, normalized uppercase.
    pub license_number: String,
    /// License expiry date (ISO 8601), if known.
    pub license_expiry: Option<String>,
    /// License validity.
    pub license_status: String,
    /// Vehicle types the driver may operate.
    pub license_category: Vec<String>,
    /// Safety score from 0 to 100.
    pub safety_score: u8,
    /// Work-availability state.
    pub duty_status: String,
    /// Contact phone number.
    pub phone: String,
}

impl From<&Driver> for DriverInfo {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id.value().to_string(),
            name: driver.name.clone(),
            license_number: driver.license_number.value().to_string(),
            license_expiry: driver.license_expiry.map(format_date),
            license_status: driver.license_status.to_string(),
            license_category: driver
                .license_category
                .iter()
                .map(|c| c.to_string())
                .collect(),
            safety_score: driver.safety_score,
            duty_status: driver.duty_status.to_string(),
            phone: driver.phone.clone(),
        }
    }
}

/// Trip view returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripInfo {
    /// Opaque unique identifier.
    pub id: String,
    /// The assigned vehicle id.
    pub vehicle_id: String,
    /// The assigned driver id.
    pub driver_id: String,
    /// Cargo weight in kilograms.
    pub cargo_weight_kg: u32,
    /// Cargo description.
    pub cargo_description: String,
    /// Origin location.
    pub origin: String,
    /// Destination location.
    pub destination: String,
    /// Lifecycle state.
    pub status: String,
    /// Creation date (ISO 8601).
    pub created_at: String,
    /// Dispatch date (ISO 8601), if reached.
    pub dispatched_at: Option<String>,
    /// Completion date (ISO 8601), if reached.
    pub completed_at: Option<String>,
}

impl From<&Trip> for TripInfo {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id.value().to_string(),
            vehicle_id: trip.vehicle_id.value().to_string(),
            driver_id: trip.driver_id.value().to_string(),
            cargo_weight_kg: trip.cargo_weight_kg,
            cargo_description: trip.cargo_description.clone(),
            origin: trip.origin.clone(),
            destination: trip.destination.clone(),
            status: trip.status.to_string(),
            created_at: format_date(trip.created_at),
            dispatched_at: trip.dispatched_at.map(format_date),
            completed_at: trip.completed_at.map(format_date),
        }
    }
}

/// Maintenance record view returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceInfo {
    /// Opaque unique identifier.
    pub id: String,
    /// The serviced vehicle.
    pub vehicle_id: String,
    /// The kind of service performed.
    pub service_type: String,
    /// Description of the work.
    pub description: String,
    /// Cost of the service.
    pub cost: f64,
    /// Service date (ISO 8601).
    pub date: String,
    /// Lifecycle state.
    pub status: String,
    /// Odometer reading at service time, in kilometers.
    pub odometer_at_service_km: u32,
}

impl From<&MaintenanceRecord> for MaintenanceInfo {
    fn from(record: &MaintenanceRecord) -> Self {
        Self {
            id: record.id.value().to_string(),
            vehicle_id: record.vehicle_id.value().to_string(),
            service_type: record.service_type.clone(),
            description: record.description.clone(),
            cost: record.cost,
            date: format_date(record.date),
            status: record.status.to_string(),
            odometer_at_service_km: record.odometer_at_service_km,
        }
    }
}

/// Fuel log view returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelLogInfo {
    /// Opaque unique identifier.
    pub id: String,
    /// The fueled vehicle.
    pub vehicle_id: String,
    /// Liters purchased.
    pub liters: f64,
    /// Purchase cost.
    pub cost: f64,
    /// Purchase date (ISO 8601).
    pub date: String,
    /// Station name.
    pub station: String,
}

impl From<&FuelLog> for FuelLogInfo {
    fn from(entry: &FuelLog) -> Self {
        Self {
            id: entry.id.value().to_string(),
            vehicle_id: entry.vehicle_id.value().to_string(),
            liters: entry.liters,
            cost: entry.cost,
            date: format_date(entry.date),
            station: entry.station.clone(),
        }
    }
}

/// Expense view returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInfo {
    /// Opaque unique identifier.
    pub id: String,
    /// The vehicle the expense is attributed to.
    pub vehicle_id: String,
    /// Expense category.
    pub expense_type: String,
    /// Expense amount.
    pub amount: f64,
    /// Expense date (ISO 8601).
    pub date: String,
    /// Free-form notes.
    pub notes: String,
}

impl From<&Expense> for ExpenseInfo {
    fn from(entry: &Expense) -> Self {
        Self {
            id: entry.id.value().to_string(),
            vehicle_id: entry.vehicle_id.value().to_string(),
            expense_type: entry.expense_type.clone(),
            amount: entry.amount,
            date: format_date(entry.date),
            notes: entry.notes.clone(),
        }
    }
}

/// Incident view returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentInfo {
    /// Opaque unique identifier.
    pub id: String,
    /// The affected vehicle.
    pub vehicle_id: String,
    /// Incident severity.
    pub severity: String,
    /// Description of the incident.
    pub description: String,
    /// Estimated cost of damages.
    pub estimated_cost: f64,
    /// Insurance claim status.
    pub insurance_status: String,
    /// Lifecycle state.
    pub status: String,
    /// Report date (ISO 8601).
    pub date: String,
}

impl From<&Incident> for IncidentInfo {
    fn from(incident: &Incident) -> Self {
        Self {
            id: incident.id.value().to_string(),
            vehicle_id: incident.vehicle_id.value().to_string(),
            severity: incident.severity.to_string(),
            description: incident.description.clone(),
            estimated_cost: incident.estimated_cost,
            insurance_status: incident.insurance_status.clone(),
            status: incident.status.to_string(),
            date: format_date(incident.date),
        }
    }
}

/// Response wrapper for vehicle listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListVehiclesResponse {
    /// All vehicles in collection order.
    pub vehicles: Vec<VehicleInfo>,
}

/// Response wrapper for driver listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDriversResponse {
    /// All drivers in collection order.
    pub drivers: Vec<DriverInfo>,
}

/// Response wrapper for trip listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTripsResponse {
    /// All trips in collection order.
    pub trips: Vec<TripInfo>,
}

/// Response wrapper for maintenance listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMaintenanceResponse {
    /// All maintenance records in collection order.
    pub maintenance: Vec<MaintenanceInfo>,
}

/// Response wrapper for fuel log listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFuelLogsResponse {
    /// All fuel log entries in collection order.
    pub fuel_logs: Vec<FuelLogInfo>,
}

/// Response wrapper for expense listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListExpensesResponse {
    /// All expense entries in collection order.
    pub expenses: Vec<ExpenseInfo>,
}

/// Response wrapper for incident listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListIncidentsResponse {
    /// All incidents in collection order.
    pub incidents: Vec<IncidentInfo>,
}

/// Smart dispatch recommendation view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecommendationInfo {
    /// The tightest-fitting available vehicle, if any.
    pub vehicle: Option<VehicleInfo>,
    /// The highest-scoring available driver, if any.
    pub driver: Option<DriverInfo>,
}

/// A single overdue-service alert view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceAlertInfo {
    /// What triggered this alert: mileage, age, or `no_history`.
    pub trigger: String,
    /// The alert severity.
    pub severity: String,
    /// Human-readable reason.
    pub reason: String,
    /// Kilometers since the last completed service, when known.
    pub km_since_service: Option<u32>,
    /// Days since the last completed service, when known.
    pub days_since_service: Option<i64>,
}

impl From<&MaintenanceAlert> for MaintenanceAlertInfo {
    fn from(alert: &MaintenanceAlert) -> Self {
        let trigger: &str = match alert.trigger {
            fleetflow_domain::ForecastTrigger::Mileage => "mileage",
            fleetflow_domain::ForecastTrigger::Age => "age",
            fleetflow_domain::ForecastTrigger::NoHistory => "no_history",
        };
        Self {
            trigger: trigger.to_string(),
            severity: alert.severity.to_string(),
            reason: alert.reason.clone(),
            km_since_service: alert.km_since_service,
            days_since_service: alert.days_since_service,
        }
    }
}

/// Per-vehicle maintenance forecast view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceForecastInfo {
    /// The flagged vehicle.
    pub vehicle: VehicleInfo,
    /// The alerts raised for it.
    pub alerts: Vec<MaintenanceAlertInfo>,
}

impl From<&VehicleForecast> for MaintenanceForecastInfo {
    fn from(forecast: &VehicleForecast) -> Self {
        Self {
            vehicle: VehicleInfo::from(&forecast.vehicle),
            alerts: forecast.alerts.iter().map(MaintenanceAlertInfo::from).collect(),
        }
    }
}

/// Per-vehicle financial risk view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRiskInfo {
    /// The flagged vehicle.
    pub vehicle: VehicleInfo,
    /// Total fuel spend.
    pub fuel_cost: f64,
    /// Total maintenance spend.
    pub maintenance_cost: f64,
    /// Fuel plus maintenance.
    pub total_cost: f64,
    /// Cumulative revenue.
    pub revenue: f64,
    /// ROI percentage.
    pub roi_pct: f64,
    /// Human-readable risk flags.
    pub risks: Vec<String>,
}

impl From<&FinancialRisk> for FinancialRiskInfo {
    fn from(risk: &FinancialRisk) -> Self {
        Self {
            vehicle: VehicleInfo::from(&risk.vehicle),
            fuel_cost: risk.costs.fuel_cost,
            maintenance_cost: risk.costs.maintenance_cost,
            total_cost: risk.costs.total,
            revenue: risk.revenue,
            roi_pct: risk.roi_pct,
            risks: risk.risks.clone(),
        }
    }
}

/// One entry of the unified alert feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemAlertInfo {
    /// Stable feed identifier.
    pub id: String,
    /// The alert source category.
    pub category: String,
    /// The alert severity.
    pub severity: String,
    /// Short headline.
    pub title: String,
    /// Supporting detail line.
    pub detail: String,
}

impl From<&SystemAlert> for SystemAlertInfo {
    fn from(alert: &SystemAlert) -> Self {
        Self {
            id: alert.id.clone(),
            category: alert.category.to_string(),
            severity: alert.severity.to_string(),
            title: alert.title.clone(),
            detail: alert.detail.clone(),
        }
    }
}

/// Trip statistics for a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverStatsInfo {
    /// The driver id.
    pub driver_id: String,
    /// Trips ever assigned.
    pub total: usize,
    /// Trips completed.
    pub completed: usize,
    /// Completion rate as a rounded percentage.
    pub completion_rate_pct: u32,
}

impl DriverStatsInfo {
    /// Builds the view from domain stats.
    #[must_use]
    pub fn from_stats(driver_id: &str, stats: DriverTripStats) -> Self {
        Self {
            driver_id: driver_id.to_string(),
            total: stats.total,
            completed: stats.completed,
            completion_rate_pct: stats.completion_rate_pct,
        }
    }
}

/// One activity-feed entry, derived from a persisted audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityInfo {
    /// The persisted event id.
    pub event_id: i64,
    /// The action name.
    pub action: String,
    /// The feed line.
    pub message: String,
    /// Feed severity for display.
    pub severity: String,
    /// The operator who performed the action.
    pub actor: String,
}

impl ActivityInfo {
    /// Builds the view from a persisted audit event.
    #[must_use]
    pub fn from_event(event: &AuditEvent) -> Self {
        Self {
            event_id: event.event_id.unwrap_or_default(),
            action: event.action.name.clone(),
            message: event.summary(),
            severity: event.severity.to_string(),
            actor: event.actor.id.clone(),
        }
    }
}
