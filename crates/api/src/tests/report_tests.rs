// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::handlers::add_fuel_log;
use crate::report::fleet_summary_csv;
use crate::request_response::AddFuelLogRequest;
use crate::tests::helpers::{TODAY, analyst, cause, seeded_state};
use fleetflow::FleetState;

#[test]
fn test_empty_fleet_renders_header_only() {
    let state: FleetState = FleetState::new();

    let csv = fleet_summary_csv(&state).expect("csv");

    assert!(csv.is_empty());
}

#[test]
fn test_summary_contains_vehicle_row_with_costs() {
    let (state, vehicle_id, _) = seeded_state();
    let state = add_fuel_log(
        &state,
        AddFuelLogRequest {
            vehicle_id,
            liters: 180.0,
            cost: 18_000.0,
            date: String::from("2026-02-18"),
            station: String::from("HP Petrol Pump, NH48"),
        },
        &analyst(),
        cause(),
        TODAY,
    )
    .expect("fuel")
    .new_state;

    let csv = fleet_summary_csv(&state).expect("csv");

    let mut lines = csv.lines();
    let header = lines.next().expect("header line");
    assert!(header.contains("license_plate"));
    assert!(header.contains("roi_pct"));
    let row = lines.next().expect("data line");
    assert!(row.contains("Volvo FH16"));
    assert!(row.contains("KA-01-AB-1234"));
    assert!(row.contains("18000"));
}
