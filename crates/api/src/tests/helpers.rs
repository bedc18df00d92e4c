// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::{AuthenticatedActor, Role};
use crate::handlers::{add_driver, add_trip, add_vehicle};
use crate::request_response::{AddDriverRequest, AddTripRequest, AddVehicleRequest};
use fleetflow::FleetState;
use fleetflow_audit::Cause;
use time::Date;
use time::macros::date;

/// The fixed evaluation date used across API tests.
pub const TODAY: Date = date!(2026 - 02 - 20);

pub fn manager() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("manager@fleetflow.com"), Role::Manager)
}

pub fn dispatcher() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("dispatch@fleetflow.com"), Role::Dispatcher)
}

pub fn safety_officer() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("safety@fleetflow.com"), Role::SafetyOfficer)
}

pub fn analyst() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("finance@fleetflow.com"), Role::Analyst)
}

pub fn cause() -> Cause {
    Cause::new(String::from("req-test"), String::from("Test request"))
}

pub fn vehicle_request(name: &str, plate: &str) -> AddVehicleRequest {
    AddVehicleRequest {
        name: name.to_string(),
        model: String::from("2023"),
        license_plate: plate.to_string(),
        vehicle_type: String::from("Truck"),
        region: String::from("South"),
        max_capacity_kg: 25_000,
        odometer_km: 45_230,
        acquisition_cost: 4_500_000.0,
        revenue: 1_200_000.0,
    }
}

pub fn driver_request(name: &str, license_number: &str) -> AddDriverRequest {
    AddDriverRequest {
        name: name.to_string(),
        license_number: license_number.to_string(),
        license_expiry: Some(String::from("2027-06-15")),
        license_status: String::from("Valid"),
        license_category: vec![String::from("Truck"), String::from("Van")],
        safety_score: 92,
        phone: String::from("+91 98765 43210"),
    }
}

/// Builds a state with one vehicle and one driver via the API boundary,
/// returning the state and their ids.
pub fn seeded_state() -> (FleetState, String, String) {
    let state: FleetState = FleetState::new();
    let vehicle = add_vehicle(
        &state,
        vehicle_request("Volvo FH16", "KA-01-AB-1234"),
        &manager(),
        cause(),
        TODAY,
    )
    .expect("add vehicle");
    let driver = add_driver(
        &vehicle.new_state,
        driver_request("Rajesh Kumar", "DL-2023-001"),
        &manager(),
        cause(),
        TODAY,
    )
    .expect("add driver");

    (
        driver.new_state,
        vehicle.response.id,
        driver.response.id,
    )
}

/// Extends a seeded state with a Draft trip, returning its id.
pub fn seeded_state_with_trip() -> (FleetState, String, String, String) {
    let (state, vehicle_id, driver_id) = seeded_state();
    let trip = add_trip(
        &state,
        AddTripRequest {
            vehicle_id: vehicle_id.clone(),
            driver_id: driver_id.clone(),
            cargo_weight_kg: 15_000,
            cargo_description: String::from("Steel Coils"),
            origin: String::from("Mumbai"),
            destination: String::from("Delhi"),
        },
        &dispatcher(),
        cause(),
        TODAY,
    )
    .expect("add trip");

    (trip.new_state, vehicle_id, driver_id, trip.response.id)
}
