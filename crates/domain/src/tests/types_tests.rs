// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{
    DutyStatus, IncidentSeverity, LicenseNumber, LicensePlate, LicenseStatus, MaintenanceStatus,
    TripStatus, VehicleId, VehicleStatus, VehicleType,
};

#[test]
fn test_license_plate_normalized_to_uppercase() {
    let plate = LicensePlate::new("ka-01-ab-1234");
    assert_eq!(plate.value(), "KA-01-AB-1234");
}

#[test]
fn test_license_number_normalized_to_uppercase() {
    let number = LicenseNumber::new("dl-2023-001");
    assert_eq!(number.value(), "DL-2023-001");
}

#[test]
fn test_generated_ids_carry_kind_prefix() {
    let id = VehicleId::generate();
    assert!(id.value().starts_with('v'));
    assert_eq!(id.value().len(), 10);
}

#[test]
fn test_generated_ids_are_unique() {
    let a = VehicleId::generate();
    let b = VehicleId::generate();
    assert_ne!(a, b);
}

#[test]
fn test_vehicle_type_round_trips() {
    for t in [VehicleType::Truck, VehicleType::Van, VehicleType::Bike] {
        assert_eq!(VehicleType::parse(t.as_str()).unwrap(), t);
    }
    assert!(VehicleType::parse("Lorry").is_err());
}

#[test]
fn test_vehicle_status_round_trips() {
    for s in [
        VehicleStatus::Available,
        VehicleStatus::OnTrip,
        VehicleStatus::InShop,
        VehicleStatus::OutOfService,
    ] {
        assert_eq!(VehicleStatus::parse(s.as_str()).unwrap(), s);
    }
}

#[test]
fn test_duty_and_license_status_round_trip() {
    for s in [DutyStatus::OffDuty, DutyStatus::OnDuty, DutyStatus::Suspended] {
        assert_eq!(DutyStatus::parse(s.as_str()).unwrap(), s);
    }
    for s in [
        LicenseStatus::Valid,
        LicenseStatus::Expiring,
        LicenseStatus::Expired,
    ] {
        assert_eq!(LicenseStatus::parse(s.as_str()).unwrap(), s);
    }
}

#[test]
fn test_incident_severity_round_trips() {
    for s in [
        IncidentSeverity::Minor,
        IncidentSeverity::Major,
        IncidentSeverity::Critical,
    ] {
        assert_eq!(IncidentSeverity::parse(s.as_str()).unwrap(), s);
    }
}

#[test]
fn test_trip_transitions_follow_state_machine() {
    assert!(TripStatus::Draft.can_transition_to(TripStatus::Dispatched));
    assert!(TripStatus::Draft.can_transition_to(TripStatus::Cancelled));
    assert!(TripStatus::Dispatched.can_transition_to(TripStatus::Completed));
    assert!(TripStatus::Dispatched.can_transition_to(TripStatus::Cancelled));

    assert!(!TripStatus::Draft.can_transition_to(TripStatus::Completed));
    assert!(!TripStatus::Completed.can_transition_to(TripStatus::Dispatched));
    assert!(!TripStatus::Cancelled.can_transition_to(TripStatus::Dispatched));
    assert!(!TripStatus::Completed.can_transition_to(TripStatus::Cancelled));
}

#[test]
fn test_trip_terminal_and_active_states() {
    assert!(TripStatus::Completed.is_terminal());
    assert!(TripStatus::Cancelled.is_terminal());
    assert!(TripStatus::Draft.is_active());
    assert!(TripStatus::Dispatched.is_active());
    assert!(!TripStatus::Completed.is_active());
}

#[test]
fn test_maintenance_status_round_trips() {
    for s in [MaintenanceStatus::InProgress, MaintenanceStatus::Completed] {
        assert_eq!(MaintenanceStatus::parse(s.as_str()).unwrap(), s);
    }
}

#[test]
fn test_status_display_matches_wire_strings() {
    assert_eq!(VehicleStatus::OnTrip.to_string(), "On Trip");
    assert_eq!(VehicleStatus::OutOfService.to_string(), "Out of Service");
    assert_eq!(DutyStatus::OffDuty.to_string(), "Off Duty");
    assert_eq!(MaintenanceStatus::InProgress.to_string(), "In Progress");
}
