// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers::{
    cancel_trip, complete_trip, dispatch_trip, get_driver, get_vehicle,
};
use crate::request_response::CompleteTripRequest;
use crate::tests::helpers::{TODAY, cause, dispatcher, seeded_state_with_trip};

#[test]
fn test_dispatch_complete_lifecycle_through_api() {
    let (state, vehicle_id, driver_id, trip_id) = seeded_state_with_trip();

    let dispatched = dispatch_trip(&state, &trip_id, &dispatcher(), cause(), TODAY)
        .expect("dispatch");
    assert_eq!(dispatched.response.status, "Dispatched");
    assert_eq!(
        get_vehicle(&dispatched.new_state, &vehicle_id).unwrap().status,
        "On Trip"
    );
    assert_eq!(
        get_driver(&dispatched.new_state, &driver_id).unwrap().duty_status,
        "On Duty"
    );

    let completed = complete_trip(
        &dispatched.new_state,
        &trip_id,
        CompleteTripRequest {
            final_odometer_km: Some(46_500),
        },
        &dispatcher(),
        cause(),
        TODAY,
    )
    .expect("complete");
    assert_eq!(completed.response.status, "Completed");
    let vehicle = get_vehicle(&completed.new_state, &vehicle_id).unwrap();
    assert_eq!(vehicle.status, "Available");
    assert_eq!(vehicle.odometer_km, 46_500);
    assert_eq!(
        get_driver(&completed.new_state, &driver_id).unwrap().duty_status,
        "Off Duty"
    );
}

#[test]
fn test_double_dispatch_surfaces_invalid_state() {
    let (state, _, _, trip_id) = seeded_state_with_trip();
    let dispatched = dispatch_trip(&state, &trip_id, &dispatcher(), cause(), TODAY)
        .expect("dispatch")
        .new_state;

    let second = dispatch_trip(&dispatched, &trip_id, &dispatcher(), cause(), TODAY);

    let err = second.unwrap_err();
    assert!(matches!(err, ApiError::InvalidState { .. }));
    assert!(err.to_string().contains("dispatch"));
}

#[test]
fn test_complete_draft_surfaces_invalid_state() {
    let (state, _, _, trip_id) = seeded_state_with_trip();

    let result = complete_trip(
        &state,
        &trip_id,
        CompleteTripRequest::default(),
        &dispatcher(),
        cause(),
        TODAY,
    );

    assert!(matches!(result.unwrap_err(), ApiError::InvalidState { .. }));
}

#[test]
fn test_cancel_after_cancel_surfaces_invalid_state() {
    let (state, _, _, trip_id) = seeded_state_with_trip();
    let cancelled = cancel_trip(&state, &trip_id, &dispatcher(), cause(), TODAY)
        .expect("cancel")
        .new_state;

    let again = cancel_trip(&cancelled, &trip_id, &dispatcher(), cause(), TODAY);

    assert!(matches!(again.unwrap_err(), ApiError::InvalidState { .. }));
}

#[test]
fn test_unknown_trip_surfaces_not_found() {
    let (state, _, _, _) = seeded_state_with_trip();

    let result = dispatch_trip(&state, "t-missing", &dispatcher(), cause(), TODAY);

    assert!(matches!(
        result.unwrap_err(),
        ApiError::ResourceNotFound { resource_type, .. } if resource_type == "Trip"
    ));
}

#[test]
fn test_odometer_regression_surfaces_invalid_input() {
    let (state, _, _, trip_id) = seeded_state_with_trip();
    let dispatched = dispatch_trip(&state, &trip_id, &dispatcher(), cause(), TODAY)
        .expect("dispatch")
        .new_state;

    let result = complete_trip(
        &dispatched,
        &trip_id,
        CompleteTripRequest {
            final_odometer_km: Some(40_000),
        },
        &dispatcher(),
        cause(),
        TODAY,
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "final_odometer_km"
    ));
}
