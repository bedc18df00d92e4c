// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers::{
    add_expense, add_fuel_log, add_maintenance_record, add_trip, add_vehicle, financial_risks,
    get_vehicle, list_vehicles, predictive_alerts, report_incident, smart_dispatch,
    system_alerts,
};
use crate::request_response::{
    AddExpenseRequest, AddFuelLogRequest, AddMaintenanceRequest, AddTripRequest,
    ReportIncidentRequest,
};
use crate::tests::helpers::{
    TODAY, analyst, cause, dispatcher, manager, safety_officer, seeded_state, vehicle_request,
};
use fleetflow::FleetState;

#[test]
fn test_add_vehicle_response_round_trips() {
    let state: FleetState = FleetState::new();

    let result = add_vehicle(
        &state,
        vehicle_request("Volvo FH16", "ka-01-ab-1234"),
        &manager(),
        cause(),
        TODAY,
    )
    .expect("add vehicle");

    assert_eq!(result.response.name, "Volvo FH16");
    assert_eq!(result.response.license_plate, "KA-01-AB-1234");
    assert_eq!(result.response.status, "Available");

    let fetched = get_vehicle(&result.new_state, &result.response.id).expect("get vehicle");
    assert_eq!(fetched, result.response);
    assert_eq!(list_vehicles(&result.new_state).vehicles.len(), 1);
}

#[test]
fn test_add_vehicle_translates_validation_error() {
    let state: FleetState = FleetState::new();

    let result = add_vehicle(
        &state,
        vehicle_request("V1", "KA-01-AB-1234"),
        &manager(),
        cause(),
        TODAY,
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "name"
    ));
}

#[test]
fn test_duplicate_plate_translates_to_conflict() {
    let state: FleetState = FleetState::new();
    let state = add_vehicle(
        &state,
        vehicle_request("Volvo FH16", "KA-01-AB-1234"),
        &manager(),
        cause(),
        TODAY,
    )
    .expect("first add")
    .new_state;

    let result = add_vehicle(
        &state,
        vehicle_request("Tata Prima", "KA-01-AB-1234"),
        &manager(),
        cause(),
        TODAY,
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::Conflict { resource_type, .. } if resource_type == "Vehicle"
    ));
}

#[test]
fn test_unknown_vehicle_type_rejected_at_boundary() {
    let state: FleetState = FleetState::new();
    let mut request = vehicle_request("Volvo FH16", "KA-01-AB-1234");
    request.vehicle_type = String::from("Lorry");

    let result = add_vehicle(&state, request, &manager(), cause(), TODAY);

    assert!(matches!(
        result.unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "vehicle_type"
    ));
}

#[test]
fn test_capacity_violation_mentions_capacity() {
    // Scenario: 25_000 kg capacity vs 30_000 kg cargo.
    let (state, vehicle_id, driver_id) = seeded_state();

    let result = add_trip(
        &state,
        AddTripRequest {
            vehicle_id,
            driver_id,
            cargo_weight_kg: 30_000,
            cargo_description: String::from("Cement Bags"),
            origin: String::from("Chennai"),
            destination: String::from("Hyderabad"),
        },
        &dispatcher(),
        cause(),
        TODAY,
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("capacity"));
    assert!(matches!(err, ApiError::InvalidInput { .. }));
}

#[test]
fn test_maintenance_and_fuel_feed_financial_risks() {
    let (state, vehicle_id, _) = seeded_state();

    let state = add_fuel_log(
        &state,
        AddFuelLogRequest {
            vehicle_id: vehicle_id.clone(),
            liters: 100.0,
            cost: 800_000.0,
            date: String::from("2026-02-18"),
            station: String::from("HP Petrol Pump"),
        },
        &analyst(),
        cause(),
        TODAY,
    )
    .expect("fuel")
    .new_state;

    let state = add_maintenance_record(
        &state,
        AddMaintenanceRequest {
            vehicle_id: vehicle_id.clone(),
            service_type: String::from("Engine Overhaul"),
            description: String::new(),
            cost: 300_000.0,
            date: String::from("2026-02-19"),
            odometer_at_service_km: 45_230,
        },
        &manager(),
        cause(),
        TODAY,
    )
    .expect("maintenance")
    .new_state;

    // Revenue 1_200_000 vs cost 1_100_000: no loss, but maintenance
    // consumes 25% of revenue.
    let risks = financial_risks(&state);
    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].vehicle.id, vehicle_id);
    assert!((risks[0].total_cost - 1_100_000.0).abs() < f64::EPSILON);
    assert!(risks[0].risks.iter().any(|r| r.contains("High maintenance")));
}

#[test]
fn test_smart_dispatch_prefers_tightest_fit() {
    // Scenario: 18_000 and 25_000 capacity, 15_000 cargo.
    let (state, _, _) = seeded_state();
    let mut request = vehicle_request("Tata Prima", "MH-02-CD-5678");
    request.max_capacity_kg = 18_000;
    let state = add_vehicle(&state, request, &manager(), cause(), TODAY)
        .expect("second vehicle")
        .new_state;

    let rec = smart_dispatch(&state, 15_000, None)
        .expect("no parse error")
        .expect("recommendation");

    assert_eq!(rec.vehicle.expect("vehicle").name, "Tata Prima");
    assert_eq!(rec.driver.expect("driver").name, "Rajesh Kumar");
}

#[test]
fn test_smart_dispatch_rejects_unknown_type_hint() {
    let (state, _, _) = seeded_state();

    let result = smart_dispatch(&state, 1_000, Some("Lorry"));

    assert!(matches!(
        result.unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "vehicle_type"
    ));
}

#[test]
fn test_predictive_alerts_surface_no_history_vehicle() {
    let (state, vehicle_id, _) = seeded_state();

    let forecasts = predictive_alerts(&state, TODAY);

    assert_eq!(forecasts.len(), 1);
    assert_eq!(forecasts[0].vehicle.id, vehicle_id);
    assert_eq!(forecasts[0].alerts[0].trigger, "no_history");
    assert_eq!(forecasts[0].alerts[0].severity, "warning");
}

#[test]
fn test_incident_report_returns_open_incident() {
    let (state, vehicle_id, _) = seeded_state();

    let result = report_incident(
        &state,
        ReportIncidentRequest {
            vehicle_id: vehicle_id.clone(),
            severity: String::from("Major"),
            description: String::from("Brake failure on highway"),
            estimated_cost: 75_000.0,
            insurance_status: String::from("Pending"),
        },
        &safety_officer(),
        cause(),
        TODAY,
    )
    .expect("report incident");

    assert_eq!(result.response.status, "Open");
    assert_eq!(result.response.severity, "Major");
    let vehicle = get_vehicle(&result.new_state, &vehicle_id).expect("vehicle");
    assert_eq!(vehicle.status, "Out of Service");

    // The open incident now leads the unified alert feed.
    let alerts = system_alerts(&result.new_state, TODAY);
    assert_eq!(alerts[0].category, "incident");
    assert_eq!(alerts[0].severity, "critical");
}

#[test]
fn test_expense_entry_with_bad_date_rejected() {
    let (state, vehicle_id, _) = seeded_state();

    let result = add_expense(
        &state,
        AddExpenseRequest {
            vehicle_id,
            expense_type: String::from("Toll Charges"),
            amount: 4_500.0,
            date: String::from("18-02-2026"),
            notes: String::new(),
        },
        &analyst(),
        cause(),
        TODAY,
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "date"
    ));
}
