// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Smart dispatch recommendation.
//!
//! Given a pending cargo assignment, suggests the best currently available
//! vehicle and driver. This is a greedy two-stage heuristic, not a joint
//! optimization: the vehicle is fixed first, and driver eligibility is then
//! evaluated against the chosen vehicle's type.

use crate::types::{Driver, DutyStatus, Vehicle, VehicleStatus, VehicleType};
use std::cmp::Reverse;

/// The recommendation produced for a pending cargo assignment.
///
/// Either side may be absent, signaling "no eligible vehicle" or "no
/// eligible driver" to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRecommendation {
    /// The tightest-fitting available vehicle, if any accommodates the load.
    pub vehicle: Option<Vehicle>,
    /// The highest-scoring available driver for the effective vehicle type.
    pub driver: Option<Driver>,
}

/// Returns all vehicles currently available for dispatch.
#[must_use]
pub fn available_vehicles(vehicles: &[Vehicle]) -> Vec<&Vehicle> {
    vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Available)
        .collect()
}

/// Returns all drivers currently available for dispatch, optionally filtered
/// by the vehicle type they must be licensed for.
///
/// A driver is available when not On Duty, not Suspended, and their license
/// is not Expired.
#[must_use]
pub fn available_drivers(drivers: &[Driver], vehicle_type: Option<VehicleType>) -> Vec<&Driver> {
    drivers
        .iter()
        .filter(|d| d.is_available())
        .filter(|d| vehicle_type.is_none_or(|t| d.is_licensed_for(t)))
        .collect()
}

/// Recommends the best vehicle and driver for a cargo assignment.
///
/// The vehicle choice minimizes surplus capacity among available vehicles
/// that still accommodate the load; ties keep collection order. The driver
/// choice maximizes safety score among available drivers licensed for the
/// effective vehicle type (the explicit hint, else the chosen vehicle's
/// type, else no type filter); ties keep collection order.
///
/// # Arguments
///
/// * `vehicles` - The vehicle collection
/// * `drivers` - The driver collection
/// * `cargo_weight_kg` - The pending cargo weight in kilograms
/// * `type_hint` - Optional explicit vehicle type requirement
///
/// # Returns
///
/// `None` only when neither a vehicle nor a driver could be found.
#[must_use]
pub fn recommend_dispatch(
    vehicles: &[Vehicle],
    drivers: &[Driver],
    cargo_weight_kg: u32,
    type_hint: Option<VehicleType>,
) -> Option<DispatchRecommendation> {
    let best_vehicle: Option<&Vehicle> = available_vehicles(vehicles)
        .into_iter()
        .filter(|v| v.max_capacity_kg >= cargo_weight_kg)
        .min_by_key(|v| v.max_capacity_kg - cargo_weight_kg);

    let effective_type: Option<VehicleType> =
        type_hint.or_else(|| best_vehicle.map(|v| v.vehicle_type));

    // Reverse keeps the first driver among equal scores, matching stable
    // highest-first ordering.
    let best_driver: Option<&Driver> = available_drivers(drivers, effective_type)
        .into_iter()
        .min_by_key(|d| Reverse(d.safety_score));

    if best_vehicle.is_none() && best_driver.is_none() {
        return None;
    }

    Some(DispatchRecommendation {
        vehicle: best_vehicle.cloned(),
        driver: best_driver.cloned(),
    })
}
