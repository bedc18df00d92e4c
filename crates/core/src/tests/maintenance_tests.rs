// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    TODAY, apply_ok, create_test_actor, create_test_cause, fleet_with_vehicle_and_driver,
};
use crate::{Command, CoreError, FleetState, apply};
use fleetflow_domain::{
    DomainError, MaintenanceId, MaintenanceStatus, VehicleId, VehicleStatus,
};
use time::macros::date;

fn add_record_command(vehicle_id: &str) -> Command {
    Command::AddMaintenanceRecord {
        vehicle_id: VehicleId::new(vehicle_id),
        service_type: String::from("Engine Overhaul"),
        description: String::from("Complete engine rebuild and tune-up"),
        cost: 85_000.0,
        date: date!(2026 - 02 - 19),
        odometer_at_service_km: 45_230,
    }
}

#[test]
fn test_add_record_forces_vehicle_in_shop() {
    let (state, vehicle_id, _) = fleet_with_vehicle_and_driver();

    let result = apply_ok(&state, add_record_command(&vehicle_id));

    let record_id: MaintenanceId = MaintenanceId::new(&result.created_id.unwrap());
    let record = result
        .new_state
        .maintenance_record(&record_id)
        .expect("record stored");
    assert_eq!(record.status, MaintenanceStatus::InProgress);
    assert_eq!(
        result
            .new_state
            .vehicle(&VehicleId::new(&vehicle_id))
            .unwrap()
            .status,
        VehicleStatus::InShop
    );
}

#[test]
fn test_add_record_requires_known_vehicle() {
    let state: FleetState = FleetState::new();

    let result = apply(
        &state,
        add_record_command("v-missing"),
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
fn test_add_record_requires_service_type() {
    let (state, vehicle_id, _) = fleet_with_vehicle_and_driver();

    let result = apply(
        &state,
        Command::AddMaintenanceRecord {
            vehicle_id: VehicleId::new(&vehicle_id),
            service_type: String::new(),
            description: String::new(),
            cost: 5_000.0,
            date: TODAY,
            odometer_at_service_km: 45_230,
        },
        create_test_actor(),
        create_test_cause(),
        TODAY,
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidServiceType(_))
    ));
}

#[test]
fn test_add_record_rejects_negative_cost() {
    let (state, vehicle_id, _) = fleet_with_vehicle_and_driver();

    let result = apply(
        &state,
        Command::AddMaintenanceRecord {
            vehicle_id: VehicleId::new(&vehicle_id),
            service_type: String::from("Oil Change"),
            description: String::new(),
            cost: -1.0,
            date: TODAY,
            odometer_at_service_km: 45_230,
        },
        create_test_actor(),
        create_test_cause(),
        TODAY,
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidAmount { field: "cost", .. })
    ));
}

#[test]
fn test_complete_record_releases_vehicle() {
    let (state, vehicle_id, _) = fleet_with_vehicle_and_driver();
    let result = apply_ok(&state, add_record_command(&vehicle_id));
    let record_id: MaintenanceId = MaintenanceId::new(&result.created_id.unwrap());

    let completed = apply_ok(
        &result.new_state,
        Command::CompleteMaintenanceRecord {
            record_id: record_id.clone(),
        },
    );

    assert_eq!(
        completed
            .new_state
            .maintenance_record(&record_id)
            .unwrap()
            .status,
        MaintenanceStatus::Completed
    );
    assert_eq!(
        completed
            .new_state
            .vehicle(&VehicleId::new(&vehicle_id))
            .unwrap()
            .status,
        VehicleStatus::Available
    );
}

#[test]
fn test_complete_is_terminal() {
    let (state, vehicle_id, _) = fleet_with_vehicle_and_driver();
    let result = apply_ok(&state, add_record_command(&vehicle_id));
    let record_id: MaintenanceId = MaintenanceId::new(&result.created_id.unwrap());
    let completed = apply_ok(
        &result.new_state,
        Command::CompleteMaintenanceRecord {
            record_id: record_id.clone(),
        },
    )
    .new_state;

    let again = apply(
        &completed,
        Command::CompleteMaintenanceRecord { record_id },
        create_test_actor(),
        create_test_cause(),
        TODAY,
    );

    assert!(matches!(
        again.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidMaintenanceTransition {
            from: MaintenanceStatus::Completed,
            ..
        })
    ));
}

#[test]
fn test_fuel_log_appends_without_side_effects() {
    let (state, vehicle_id, _) = fleet_with_vehicle_and_driver();

    let result = apply_ok(
        &state,
        Command::AddFuelLog {
            vehicle_id: VehicleId::new(&vehicle_id),
            liters: 180.0,
            cost: 18_000.0,
            date: date!(2026 - 02 - 18),
            station: String::from("HP Petrol Pump, NH48"),
        },
    );

    assert_eq!(result.new_state.fuel_logs.len(), 1);
    assert_eq!(
        result
            .new_state
            .vehicle(&VehicleId::new(&vehicle_id))
            .unwrap()
            .status,
        VehicleStatus::Available
    );
}

#[test]
fn test_expense_appends_without_side_effects() {
    let (state, vehicle_id, _) = fleet_with_vehicle_and_driver();

    let result = apply_ok(
        &state,
        Command::AddExpense {
            vehicle_id: VehicleId::new(&vehicle_id),
            expense_type: String::from("Toll Charges"),
            amount: 4_500.0,
            date: date!(2026 - 02 - 18),
            notes: String::from("NH48 toll gates"),
        },
    );

    assert_eq!(result.new_state.expenses.len(), 1);
}

#[test]
fn test_fuel_log_requires_known_vehicle() {
    let state: FleetState = FleetState::new();

    let result = apply(
        &state,
        Command::AddFuelLog {
            vehicle_id: VehicleId::new("v-missing"),
            liters: 100.0,
            cost: 10_000.0,
            date: TODAY,
            station: String::new(),
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
