// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    TODAY, add_vehicle_command, apply_ok, create_test_actor, create_test_cause,
};
use crate::{Command, CoreError, FleetState, apply};
use fleetflow_domain::{DomainError, VehicleId, VehicleStatus, VehicleType};

#[test]
fn test_add_vehicle_round_trips_with_normalized_plate() {
    let state: FleetState = FleetState::new();

    let result = apply_ok(&state, add_vehicle_command("Volvo FH16", "ka-01-ab-1234", 25_000));

    let id: VehicleId = VehicleId::new(&result.created_id.unwrap());
    let vehicle = result.new_state.vehicle(&id).expect("vehicle stored");
    assert_eq!(vehicle.name, "Volvo FH16");
    assert_eq!(vehicle.license_plate.value(), "KA-01-AB-1234");
    assert_eq!(vehicle.status, VehicleStatus::Available);
    assert_eq!(vehicle.max_capacity_kg, 25_000);
    assert!(id.value().starts_with('v'));
}

#[test]
fn test_add_vehicle_emits_audit_event() {
    let state: FleetState = FleetState::new();

    let result = apply_ok(&state, add_vehicle_command("Volvo FH16", "KA-01-AB-1234", 25_000));

    assert_eq!(result.audit_event.action.name, "AddVehicle");
    assert_eq!(result.audit_event.actor.id, "op-manager");
    assert!(result.audit_event.before.data.contains("vehicles=0"));
    assert!(result.audit_event.after.data.contains("vehicles=1"));
}

#[test]
fn test_add_vehicle_rejects_short_name() {
    let state: FleetState = FleetState::new();

    let result = apply(
        &state,
        add_vehicle_command("V1", "KA-01-AB-1234", 25_000),
        create_test_actor(),
        create_test_cause(),
        TODAY,
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidVehicleName(_))
    ));
}

#[test]
fn test_add_vehicle_rejects_duplicate_plate() {
    let state: FleetState = FleetState::new();
    let state = apply_ok(&state, add_vehicle_command("Volvo FH16", "KA-01-AB-1234", 25_000))
        .new_state;

    let result = apply(
        &state,
        add_vehicle_command("Tata Prima", "ka-01-ab-1234", 18_000),
        create_test_actor(),
        create_test_cause(),
        TODAY,
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::DuplicateLicensePlate(_))
    ));
    // The failing command left the store unchanged.
    assert_eq!(state.vehicles.len(), 1);
}

#[test]
fn test_update_vehicle_keeps_status_and_odometer() {
    let state: FleetState = FleetState::new();
    let result = apply_ok(&state, add_vehicle_command("Volvo FH16", "KA-01-AB-1234", 25_000));
    let id: VehicleId = VehicleId::new(&result.created_id.unwrap());

    let updated = apply_ok(
        &result.new_state,
        Command::UpdateVehicle {
            vehicle_id: id.clone(),
            name: String::from("Volvo FH16 Mk2"),
            model: String::from("2024"),
            license_plate: String::from("KA-01-AB-1234"),
            vehicle_type: VehicleType::Van,
            region: String::from("North"),
            max_capacity_kg: 22_000,
            acquisition_cost: 4_600_000.0,
            revenue: 1_300_000.0,
        },
    );

    let vehicle = updated.new_state.vehicle(&id).expect("vehicle");
    assert_eq!(vehicle.name, "Volvo FH16 Mk2");
    assert_eq!(vehicle.vehicle_type, VehicleType::Van);
    assert_eq!(vehicle.status, VehicleStatus::Available);
    assert_eq!(vehicle.odometer_km, 45_230);
}

#[test]
fn test_update_vehicle_allows_own_plate() {
    let state: FleetState = FleetState::new();
    let result = apply_ok(&state, add_vehicle_command("Volvo FH16", "KA-01-AB-1234", 25_000));
    let id: VehicleId = VehicleId::new(&result.created_id.unwrap());

    let updated = apply(
        &result.new_state,
        Command::UpdateVehicle {
            vehicle_id: id,
            name: String::from("Volvo FH16"),
            model: String::from("2023"),
            license_plate: String::from("KA-01-AB-1234"),
            vehicle_type: VehicleType::Truck,
            region: String::from("South"),
            max_capacity_kg: 25_000,
            acquisition_cost: 4_500_000.0,
            revenue: 1_200_000.0,
        },
        create_test_actor(),
        create_test_cause(),
        TODAY,
    );

    assert!(updated.is_ok());
}

#[test]
fn test_update_unknown_vehicle_fails() {
    let state: FleetState = FleetState::new();

    let result = apply(
        &state,
        Command::UpdateVehicle {
            vehicle_id: VehicleId::new("v-missing"),
            name: String::from("Volvo FH16"),
            model: String::from("2023"),
            license_plate: String::from("KA-01-AB-1234"),
            vehicle_type: VehicleType::Truck,
            region: String::from("South"),
            max_capacity_kg: 25_000,
            acquisition_cost: 4_500_000.0,
            revenue: 1_200_000.0,
        },
        create_test_actor(),
        create_test_cause(),
        TODAY,
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::VehicleNotFound(_))
    ));
}

#[test]
fn test_delete_vehicle_removes_it() {
    let state: FleetState = FleetState::new();
    let result = apply_ok(&state, add_vehicle_command("Volvo FH16", "KA-01-AB-1234", 25_000));
    let id: VehicleId = VehicleId::new(&result.created_id.unwrap());

    let deleted = apply_ok(&result.new_state, Command::DeleteVehicle { vehicle_id: id.clone() });

    assert!(deleted.new_state.vehicle(&id).is_none());
    assert!(deleted.new_state.vehicles.is_empty());
}

#[test]
fn test_delete_unknown_vehicle_fails() {
    let state: FleetState = FleetState::new();

    let result = apply(
        &state,
        Command::DeleteVehicle {
            vehicle_id: VehicleId::new("v-missing"),
        },
        create_test_actor(),
        create_test_cause(),
        TODAY,
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::VehicleNotFound(_))
    ));
}

#[test]
fn test_toggle_out_of_service_round_trips() {
    let state: FleetState = FleetState::new();
    let result = apply_ok(&state, add_vehicle_command("Volvo FH16", "KA-01-AB-1234", 25_000));
    let id: VehicleId = VehicleId::new(&result.created_id.unwrap());

    let toggled = apply_ok(
        &result.new_state,
        Command::ToggleVehicleOutOfService { vehicle_id: id.clone() },
    );
    assert_eq!(
        toggled.new_state.vehicle(&id).unwrap().status,
        VehicleStatus::OutOfService
    );

    let restored = apply_ok(
        &toggled.new_state,
        Command::ToggleVehicleOutOfService { vehicle_id: id.clone() },
    );
    assert_eq!(
        restored.new_state.vehicle(&id).unwrap().status,
        VehicleStatus::Available
    );
}
