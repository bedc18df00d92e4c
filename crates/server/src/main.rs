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
#![allow(clippy::multiple_crate_versions)]

mod live;
mod seed;
mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use fleetflow::FleetState;
use fleetflow_api::{
    ActivityInfo, AddDriverRequest, AddExpenseRequest, AddFuelLogRequest, AddMaintenanceRequest,
    AddTripRequest, AddVehicleRequest, ApiError, AuthenticationService, CompleteTripRequest,
    DispatchRecommendationInfo, DriverInfo, DriverStatsInfo, ExpenseInfo, FinancialRiskInfo,
    FuelLogInfo, IncidentInfo, ListDriversResponse, ListExpensesResponse, ListFuelLogsResponse,
    ListIncidentsResponse, ListMaintenanceResponse, ListTripsResponse, ListVehiclesResponse,
    LoginRequest, LoginResponse, MaintenanceForecastInfo, MaintenanceInfo, ReportIncidentRequest,
    SystemAlertInfo, TripInfo, UpdateDriverRequest, UpdateVehicleRequest, VehicleInfo,
    add_driver, add_expense, add_fuel_log, add_maintenance_record, add_trip, add_vehicle,
    cancel_trip, complete_maintenance_record, complete_trip, delete_driver, delete_vehicle,
    dispatch_trip, driver_stats, financial_risks, fleet_summary_csv, get_driver, get_trip,
    get_vehicle, list_drivers, list_expenses, list_fuel_logs, list_incidents, list_maintenance,
    list_trips, list_vehicles, predictive_alerts, report_incident, smart_dispatch, system_alerts,
    toggle_vehicle_out_of_service, update_driver, update_vehicle,
};
use fleetflow_audit::{AuditEvent, Cause};
use fleetflow_persistence::{PersistenceError, SqlitePersistence};
use live::{EVENT_BUFFER_SIZE, LiveEvent, handle_live_ws};
use serde::{Deserialize, Serialize};
use session::SessionOperator;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use time::{Date, OffsetDateTime};
use tokio::sync::{Mutex, broadcast};
use tracing::{error, info};

/// FleetFlow Server - HTTP server for the FleetFlow fleet management system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory
    /// database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 5001)]
    port: u16,

    /// Skip loading the demo fleet into an empty store
    #[arg(long)]
    no_seed: bool,
}

/// Application state shared across handlers.
///
/// The engine owns the authoritative fleet state; persistence stores the
/// snapshot and audit log; the auth service holds operator sessions; the
/// live channel broadcasts informational change events.
#[derive(Clone)]
struct AppState {
    /// The in-memory fleet state.
    engine: Arc<Mutex<FleetState>>,
    /// The persistence layer for snapshots and audit events.
    persistence: Arc<Mutex<SqlitePersistence>>,
    /// The authentication service holding operators and sessions.
    auth: Arc<Mutex<AuthenticationService>>,
    /// Broadcast channel for live state-change events.
    live: broadcast::Sender<LiveEvent>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidState { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Returns the current civil date, used to stamp transitions.
fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Builds the audit cause for a REST request.
fn request_cause(action: &str) -> Cause {
    let nanos: u128 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    Cause::new(format!("req-{nanos}"), format!("{action} via REST API"))
}

/// Persists a successful transition and installs the new state.
///
/// The snapshot and audit event are written first; only then is the
/// in-memory state swapped and the live event broadcast, so the persisted
/// store never lags behind what handlers have acknowledged.
async fn commit(
    app_state: &AppState,
    engine: &mut FleetState,
    new_state: FleetState,
    audit_event: AuditEvent,
) -> Result<(), HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    persistence.save_state(&new_state)?;
    let event_id: i64 = persistence.append_audit_event(&audit_event)?;
    drop(persistence);

    *engine = new_state;
    let _ = app_state
        .live
        .send(LiveEvent::from_audit(&audit_event.with_event_id(event_id)));
    Ok(())
}

/// Handler for POST `/api/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let mut auth = app_state.auth.lock().await;
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    auth.prune_sessions(now);
    let (token, operator) = auth
        .login(&request.email, &request.password, now)
        .map_err(|e| HttpError::from(ApiError::from(e)))?;

    Ok(Json(LoginResponse {
        token,
        display_name: operator.display_name,
        role: operator.role.to_string(),
    }))
}

/// Handler for GET `/api/vehicles`.
async fn handle_list_vehicles(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<ListVehiclesResponse> {
    let engine = app_state.engine.lock().await;
    Json(list_vehicles(&engine))
}

/// Handler for POST `/api/vehicles`.
async fn handle_add_vehicle(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Json(request): Json<AddVehicleRequest>,
) -> Result<(StatusCode, Json<VehicleInfo>), HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = add_vehicle(&engine, request, &actor, request_cause("add_vehicle"), today())?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok((StatusCode::CREATED, Json(result.response)))
}

/// Handler for GET `/api/vehicles/{id}`.
async fn handle_get_vehicle(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
    Path(id): Path<String>,
) -> Result<Json<VehicleInfo>, HttpError> {
    let engine = app_state.engine.lock().await;
    Ok(Json(get_vehicle(&engine, &id)?))
}

/// Handler for PUT `/api/vehicles/{id}`.
async fn handle_update_vehicle(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Path(id): Path<String>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<VehicleInfo>, HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = update_vehicle(
        &engine,
        &id,
        request,
        &actor,
        request_cause("update_vehicle"),
        today(),
    )?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok(Json(result.response))
}

/// Handler for DELETE `/api/vehicles/{id}`.
async fn handle_delete_vehicle(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = delete_vehicle(&engine, &id, &actor, request_cause("delete_vehicle"), today())?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST `/api/vehicles/{id}/toggle_service`.
async fn handle_toggle_vehicle(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Path(id): Path<String>,
) -> Result<Json<VehicleInfo>, HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = toggle_vehicle_out_of_service(
        &engine,
        &id,
        &actor,
        request_cause("toggle_vehicle_out_of_service"),
        today(),
    )?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok(Json(result.response))
}

/// Handler for GET `/api/drivers`.
async fn handle_list_drivers(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<ListDriversResponse> {
    let engine = app_state.engine.lock().await;
    Json(list_drivers(&engine))
}

/// Handler for POST `/api/drivers`.
async fn handle_add_driver(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Json(request): Json<AddDriverRequest>,
) -> Result<(StatusCode, Json<DriverInfo>), HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = add_driver(&engine, request, &actor, request_cause("add_driver"), today())?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok((StatusCode::CREATED, Json(result.response)))
}

/// Handler for GET `/api/drivers/{id}`.
async fn handle_get_driver(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
    Path(id): Path<String>,
) -> Result<Json<DriverInfo>, HttpError> {
    let engine = app_state.engine.lock().await;
    Ok(Json(get_driver(&engine, &id)?))
}

/// Handler for PUT `/api/drivers/{id}`.
async fn handle_update_driver(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Path(id): Path<String>,
    Json(request): Json<UpdateDriverRequest>,
) -> Result<Json<DriverInfo>, HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = update_driver(
        &engine,
        &id,
        request,
        &actor,
        request_cause("update_driver"),
        today(),
    )?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok(Json(result.response))
}

/// Handler for DELETE `/api/drivers/{id}`.
async fn handle_delete_driver(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = delete_driver(&engine, &id, &actor, request_cause("delete_driver"), today())?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET `/api/drivers/{id}/stats`.
async fn handle_driver_stats(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
    Path(id): Path<String>,
) -> Result<Json<DriverStatsInfo>, HttpError> {
    let engine = app_state.engine.lock().await;
    Ok(Json(driver_stats(&engine, &id)?))
}

/// Handler for GET `/api/trips`.
async fn handle_list_trips(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<ListTripsResponse> {
    let engine = app_state.engine.lock().await;
    Json(list_trips(&engine))
}

/// Handler for POST `/api/trips`.
async fn handle_add_trip(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Json(request): Json<AddTripRequest>,
) -> Result<(StatusCode, Json<TripInfo>), HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = add_trip(&engine, request, &actor, request_cause("add_trip"), today())?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok((StatusCode::CREATED, Json(result.response)))
}

/// Handler for GET `/api/trips/{id}`.
async fn handle_get_trip(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
    Path(id): Path<String>,
) -> Result<Json<TripInfo>, HttpError> {
    let engine = app_state.engine.lock().await;
    Ok(Json(get_trip(&engine, &id)?))
}

/// Handler for POST `/api/trips/{id}/dispatch`.
async fn handle_dispatch_trip(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Path(id): Path<String>,
) -> Result<Json<TripInfo>, HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = dispatch_trip(&engine, &id, &actor, request_cause("dispatch_trip"), today())?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok(Json(result.response))
}

/// Handler for POST `/api/trips/{id}/complete`.
async fn handle_complete_trip(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Path(id): Path<String>,
    Json(request): Json<CompleteTripRequest>,
) -> Result<Json<TripInfo>, HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = complete_trip(
        &engine,
        &id,
        request,
        &actor,
        request_cause("complete_trip"),
        today(),
    )?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok(Json(result.response))
}

/// Handler for POST `/api/trips/{id}/cancel`.
async fn handle_cancel_trip(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Path(id): Path<String>,
) -> Result<Json<TripInfo>, HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = cancel_trip(&engine, &id, &actor, request_cause("cancel_trip"), today())?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok(Json(result.response))
}

/// Handler for GET `/api/maintenance`.
async fn handle_list_maintenance(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<ListMaintenanceResponse> {
    let engine = app_state.engine.lock().await;
    Json(list_maintenance(&engine))
}

/// Handler for POST `/api/maintenance`.
async fn handle_add_maintenance(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Json(request): Json<AddMaintenanceRequest>,
) -> Result<(StatusCode, Json<MaintenanceInfo>), HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = add_maintenance_record(
        &engine,
        request,
        &actor,
        request_cause("add_maintenance_record"),
        today(),
    )?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok((StatusCode::CREATED, Json(result.response)))
}

/// Handler for POST `/api/maintenance/{id}/complete`.
async fn handle_complete_maintenance(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Path(id): Path<String>,
) -> Result<Json<MaintenanceInfo>, HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = complete_maintenance_record(
        &engine,
        &id,
        &actor,
        request_cause("complete_maintenance_record"),
        today(),
    )?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok(Json(result.response))
}

/// Handler for GET `/api/fuel_logs`.
async fn handle_list_fuel_logs(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<ListFuelLogsResponse> {
    let engine = app_state.engine.lock().await;
    Json(list_fuel_logs(&engine))
}

/// Handler for POST `/api/fuel_logs`.
async fn handle_add_fuel_log(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Json(request): Json<AddFuelLogRequest>,
) -> Result<(StatusCode, Json<FuelLogInfo>), HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = add_fuel_log(&engine, request, &actor, request_cause("add_fuel_log"), today())?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok((StatusCode::CREATED, Json(result.response)))
}

/// Handler for GET `/api/expenses`.
async fn handle_list_expenses(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<ListExpensesResponse> {
    let engine = app_state.engine.lock().await;
    Json(list_expenses(&engine))
}

/// Handler for POST `/api/expenses`.
async fn handle_add_expense(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Json(request): Json<AddExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseInfo>), HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = add_expense(&engine, request, &actor, request_cause("add_expense"), today())?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok((StatusCode::CREATED, Json(result.response)))
}

/// Handler for GET `/api/incidents`.
async fn handle_list_incidents(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<ListIncidentsResponse> {
    let engine = app_state.engine.lock().await;
    Json(list_incidents(&engine))
}

/// Handler for POST `/api/incidents`.
async fn handle_report_incident(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(actor, _): SessionOperator,
    Json(request): Json<ReportIncidentRequest>,
) -> Result<(StatusCode, Json<IncidentInfo>), HttpError> {
    let mut engine = app_state.engine.lock().await;
    let result = report_incident(
        &engine,
        request,
        &actor,
        request_cause("report_incident"),
        today(),
    )?;
    commit(&app_state, &mut engine, result.new_state, result.audit_event).await?;
    Ok((StatusCode::CREATED, Json(result.response)))
}

/// Query parameters for the smart dispatch endpoint.
#[derive(Debug, Deserialize)]
struct DispatchQuery {
    /// The pending cargo weight in kilograms.
    cargo_weight_kg: u32,
    /// Optional explicit vehicle type requirement.
    vehicle_type: Option<String>,
}

/// Handler for GET `/api/insights/dispatch`.
async fn handle_smart_dispatch(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
    Query(query): Query<DispatchQuery>,
) -> Result<Json<Option<DispatchRecommendationInfo>>, HttpError> {
    let engine = app_state.engine.lock().await;
    let recommendation = smart_dispatch(
        &engine,
        query.cargo_weight_kg,
        query.vehicle_type.as_deref(),
    )?;
    Ok(Json(recommendation))
}

/// Handler for GET `/api/insights/maintenance`.
async fn handle_predictive_alerts(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<Vec<MaintenanceForecastInfo>> {
    let engine = app_state.engine.lock().await;
    Json(predictive_alerts(&engine, today()))
}

/// Handler for GET `/api/insights/financial`.
async fn handle_financial_risks(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<Vec<FinancialRiskInfo>> {
    let engine = app_state.engine.lock().await;
    Json(financial_risks(&engine))
}

/// Handler for GET `/api/insights/alerts`.
async fn handle_system_alerts(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Json<Vec<SystemAlertInfo>> {
    let engine = app_state.engine.lock().await;
    Json(system_alerts(&engine, today()))
}

/// Handler for GET `/api/reports/fleet.csv`.
async fn handle_fleet_report(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
) -> Result<Response, HttpError> {
    let engine = app_state.engine.lock().await;
    let csv: String = fleet_summary_csv(&engine).map_err(|e| HttpError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: format!("Report generation failed: {e}"),
    })?;
    drop(engine);

    Ok(([(header::CONTENT_TYPE, "text/csv")], csv).into_response())
}

/// Query parameters for the activity feed.
#[derive(Debug, Deserialize)]
struct ActivityQuery {
    /// Maximum number of entries to return.
    limit: Option<usize>,
}

/// Handler for GET `/api/activity`.
async fn handle_activity(
    AxumState(app_state): AxumState<AppState>,
    SessionOperator(..): SessionOperator,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<Vec<ActivityInfo>>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let events = persistence.recent_audit_events(query.limit.unwrap_or(20))?;
    drop(persistence);

    Ok(Json(events.iter().map(ActivityInfo::from_event).collect()))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(handle_login))
        .route("/api/vehicles", get(handle_list_vehicles).post(handle_add_vehicle))
        .route(
            "/api/vehicles/{id}",
            get(handle_get_vehicle)
                .put(handle_update_vehicle)
                .delete(handle_delete_vehicle),
        )
        .route("/api/vehicles/{id}/toggle_service", post(handle_toggle_vehicle))
        .route("/api/drivers", get(handle_list_drivers).post(handle_add_driver))
        .route(
            "/api/drivers/{id}",
            get(handle_get_driver)
                .put(handle_update_driver)
                .delete(handle_delete_driver),
        )
        .route("/api/drivers/{id}/stats", get(handle_driver_stats))
        .route("/api/trips", get(handle_list_trips).post(handle_add_trip))
        .route("/api/trips/{id}", get(handle_get_trip))
        .route("/api/trips/{id}/dispatch", post(handle_dispatch_trip))
        .route("/api/trips/{id}/complete", post(handle_complete_trip))
        .route("/api/trips/{id}/cancel", post(handle_cancel_trip))
        .route(
            "/api/maintenance",
            get(handle_list_maintenance).post(handle_add_maintenance),
        )
        .route("/api/maintenance/{id}/complete", post(handle_complete_maintenance))
        .route("/api/fuel_logs", get(handle_list_fuel_logs).post(handle_add_fuel_log))
        .route("/api/expenses", get(handle_list_expenses).post(handle_add_expense))
        .route(
            "/api/incidents",
            get(handle_list_incidents).post(handle_report_incident),
        )
        .route("/api/insights/dispatch", get(handle_smart_dispatch))
        .route("/api/insights/maintenance", get(handle_predictive_alerts))
        .route("/api/insights/financial", get(handle_financial_risks))
        .route("/api/insights/alerts", get(handle_system_alerts))
        .route("/api/reports/fleet.csv", get(handle_fleet_report))
        .route("/api/activity", get(handle_activity))
        .route("/api/live", get(handle_live_ws))
        .with_state(app_state)
}

/// Opens persistence, seeds an empty store, and assembles shared state.
fn build_app_state(
    database: Option<&str>,
    seed_empty_store: bool,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let mut persistence: SqlitePersistence = match database {
        Some(path) => {
            info!("Using file-based database at: {}", path);
            SqlitePersistence::new_with_file(path)?
        }
        None => {
            info!("Using in-memory database");
            SqlitePersistence::new_in_memory()?
        }
    };

    if seed_empty_store && persistence.is_empty()? {
        info!("Empty store detected, loading demo fleet");
        persistence.save_state(&seed::seed_state())?;
    }

    let state: FleetState = persistence.load_state()?;
    info!(
        vehicles = state.vehicles.len(),
        drivers = state.drivers.len(),
        trips = state.trips.len(),
        "Loaded fleet state"
    );

    let auth: AuthenticationService = AuthenticationService::with_builtin_operators()?;
    let (live, _) = broadcast::channel(EVENT_BUFFER_SIZE);

    Ok(AppState {
        engine: Arc::new(Mutex::new(state)),
        persistence: Arc::new(Mutex::new(persistence)),
        auth: Arc::new(Mutex::new(auth)),
        live,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing FleetFlow Server");

    let app_state: AppState = build_app_state(args.database.as_deref(), !args.no_seed)?;

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
