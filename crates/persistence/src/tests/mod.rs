// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::SqlitePersistence;
use fleetflow::FleetState;
use fleetflow_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use fleetflow_domain::{
    Driver, DriverId, DutyStatus, FuelLog, FuelLogId, LicenseNumber, LicensePlate, LicenseStatus,
    Severity, Trip, TripId, TripStatus, Vehicle, VehicleId, VehicleStatus, VehicleType,
};
use time::macros::date;

fn sample_state() -> FleetState {
    let mut state: FleetState = FleetState::new();
    state.vehicles.push(Vehicle {
        id: VehicleId::new("v1"),
        name: String::from("Volvo FH16"),
        model: String::from("2023"),
        license_plate: LicensePlate::new("KA-01-AB-1234"),
        vehicle_type: VehicleType::Truck,
        region: String::from("South"),
        max_capacity_kg: 25_000,
        odometer_km: 45_230,
        status: VehicleStatus::Available,
        acquisition_cost: 4_500_000.0,
        revenue: 1_200_000.0,
    });
    state.drivers.push(Driver {
        id: DriverId::new("d1"),
        name: String::from("Rajesh Kumar"),
        license_number: LicenseNumber::new("DL-2023-001"),
        license_expiry: Some(date!(2027 - 06 - 15)),
        license_status: LicenseStatus::Valid,
        license_category: vec![VehicleType::Truck, VehicleType::Van],
        safety_score: 92,
        duty_status: DutyStatus::OffDuty,
        phone: String::from("+91 98765 43210"),
    });
    state.trips.push(Trip {
        id: TripId::new("t1"),
        vehicle_id: VehicleId::new("v1"),
        driver_id: DriverId::new("d1"),
        cargo_weight_kg: 15_000,
        cargo_description: String::from("Steel Coils"),
        origin: String::from("Mumbai"),
        destination: String::from("Delhi"),
        status: TripStatus::Dispatched,
        created_at: date!(2026 - 02 - 18),
        dispatched_at: Some(date!(2026 - 02 - 18)),
        completed_at: None,
    });
    state.fuel_logs.push(FuelLog {
        id: FuelLogId::new("f1"),
        vehicle_id: VehicleId::new("v1"),
        liters: 180.0,
        cost: 18_000.0,
        date: date!(2026 - 02 - 18),
        station: String::from("HP Petrol Pump, NH48"),
    });
    state
}

#[test]
fn test_fresh_store_is_empty() {
    let persistence = SqlitePersistence::new_in_memory().expect("open");

    assert!(persistence.is_empty().expect("is_empty"));
    assert!(persistence.load_state().expect("load").is_empty());
}

#[test]
fn test_state_round_trips_through_sqlite() {
    let mut persistence = SqlitePersistence::new_in_memory().expect("open");
    let state: FleetState = sample_state();

    persistence.save_state(&state).expect("save");
    let loaded: FleetState = persistence.load_state().expect("load");

    assert_eq!(loaded, state);
    assert!(!persistence.is_empty().expect("is_empty"));
}

#[test]
fn test_save_replaces_previous_snapshot() {
    let mut persistence = SqlitePersistence::new_in_memory().expect("open");
    let mut state: FleetState = sample_state();
    persistence.save_state(&state).expect("first save");

    state.vehicles[0].odometer_km = 46_500;
    state.trips[0].status = TripStatus::Completed;
    state.trips[0].completed_at = Some(date!(2026 - 02 - 20));
    persistence.save_state(&state).expect("second save");

    let loaded: FleetState = persistence.load_state().expect("load");
    assert_eq!(loaded.vehicles[0].odometer_km, 46_500);
    assert_eq!(loaded.trips[0].status, TripStatus::Completed);
    assert_eq!(loaded.trips.len(), 1);
}

#[test]
fn test_collection_order_preserved() {
    let mut persistence = SqlitePersistence::new_in_memory().expect("open");
    let mut state: FleetState = sample_state();
    let mut second = state.vehicles[0].clone();
    second.id = VehicleId::new("v2");
    second.license_plate = LicensePlate::new("MH-02-CD-5678");
    state.vehicles.push(second);

    persistence.save_state(&state).expect("save");
    let loaded: FleetState = persistence.load_state().expect("load");

    assert_eq!(loaded.vehicles[0].id, VehicleId::new("v1"));
    assert_eq!(loaded.vehicles[1].id, VehicleId::new("v2"));
}

#[test]
fn test_audit_log_appends_and_lists_newest_first() {
    let persistence = SqlitePersistence::new_in_memory().expect("open");

    let event = |name: &str| {
        AuditEvent::new(
            Actor::new(String::from("op-manager"), String::from("manager")),
            Cause::new(String::from("req-1"), String::from("Operator request")),
            Action::new(name.to_string(), Some(format!("{name} happened"))),
            StateSnapshot::new(String::from("vehicles=0")),
            StateSnapshot::new(String::from("vehicles=1")),
            Severity::Info,
        )
    };

    let first: i64 = persistence.append_audit_event(&event("AddVehicle")).expect("append");
    let second: i64 = persistence.append_audit_event(&event("AddDriver")).expect("append");
    assert!(second > first);

    let events = persistence.recent_audit_events(10).expect("list");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action.name, "AddDriver");
    assert_eq!(events[0].event_id, Some(second));
    assert_eq!(events[1].action.name, "AddVehicle");

    let limited = persistence.recent_audit_events(1).expect("list limited");
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].action.name, "AddDriver");
}
