// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, FleetState, TransitionResult, apply};
use fleetflow_audit::{Actor, Cause};
use fleetflow_domain::{LicenseStatus, TripId, VehicleType};
use time::Date;
use time::macros::date;

/// The fixed evaluation date used across core tests.
pub const TODAY: Date = date!(2026 - 02 - 20);

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("op-manager"), String::from("manager"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Operator request"))
}

/// Applies a command to a state, panicking on rejection.
pub fn apply_ok(state: &FleetState, command: Command) -> TransitionResult {
    apply(state, command, create_test_actor(), create_test_cause(), TODAY)
        .expect("command should apply")
}

pub fn add_vehicle_command(name: &str, plate: &str, max_capacity_kg: u32) -> Command {
    Command::AddVehicle {
        name: name.to_string(),
        model: String::from("2023"),
        license_plate: plate.to_string(),
        vehicle_type: VehicleType::Truck,
        region: String::from("South"),
        max_capacity_kg,
        odometer_km: 45_230,
        acquisition_cost: 4_500_000.0,
        revenue: 1_200_000.0,
    }
}

pub fn add_driver_command(name: &str, license_number: &str) -> Command {
    Command::AddDriver {
        name: name.to_string(),
        license_number: license_number.to_string(),
        license_expiry: Some(date!(2027 - 06 - 15)),
        license_status: LicenseStatus::Valid,
        license_category: vec![VehicleType::Truck, VehicleType::Van],
        safety_score: 92,
        phone: String::from("+91 98765 43210"),
    }
}

/// Builds a state with one vehicle and one driver, returning the state and
/// their generated ids.
pub fn fleet_with_vehicle_and_driver() -> (FleetState, String, String) {
    let state: FleetState = FleetState::new();
    let result = apply_ok(&state, add_vehicle_command("Volvo FH16", "KA-01-AB-1234", 25_000));
    let vehicle_id: String = result.created_id.expect("vehicle id");
    let result2 = apply_ok(
        &result.new_state,
        add_driver_command("Rajesh Kumar", "DL-2023-001"),
    );
    let driver_id: String = result2.created_id.expect("driver id");
    (result2.new_state, vehicle_id, driver_id)
}

/// Builds a state with a Draft trip on the standard vehicle/driver pair.
pub fn fleet_with_draft_trip() -> (FleetState, String, String, TripId) {
    let (state, vehicle_id, driver_id) = fleet_with_vehicle_and_driver();
    let result = apply_ok(
        &state,
        Command::AddTrip {
            vehicle_id: fleetflow_domain::VehicleId::new(&vehicle_id),
            driver_id: fleetflow_domain::DriverId::new(&driver_id),
            cargo_weight_kg: 15_000,
            cargo_description: String::from("Steel Coils"),
            origin: String::from("Mumbai"),
            destination: String::from("Delhi"),
        },
    );
    let trip_id: TripId = TripId::new(&result.created_id.expect("trip id"));
    (result.new_state, vehicle_id, driver_id, trip_id)
}
