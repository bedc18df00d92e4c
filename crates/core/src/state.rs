// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleetflow_audit::{AuditEvent, StateSnapshot};
use fleetflow_domain::{
    Driver, DriverId, Expense, FuelLog, Incident, MaintenanceId, MaintenanceRecord, Trip, TripId,
    TripStatus, Vehicle, VehicleId,
};

/// The complete fleet state.
///
/// The state is exclusively owned by the engine: external collaborators
/// never mutate entity collections directly, they issue commands and
/// receive the resulting views. Multiple independent instances can be
/// created for testing; there is no hidden static state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FleetState {
    /// All vehicles in the fleet.
    pub vehicles: Vec<Vehicle>,
    /// All registered drivers.
    pub drivers: Vec<Driver>,
    /// All trips, including terminal ones. Append-only.
    pub trips: Vec<Trip>,
    /// All maintenance records. Append-only.
    pub maintenance: Vec<MaintenanceRecord>,
    /// All fuel log entries. Append-only.
    pub fuel_logs: Vec<FuelLog>,
    /// All expense entries. Append-only.
    pub expenses: Vec<Expense>,
    /// All reported incidents. Soft-closed, never deleted.
    pub incidents: Vec<Incident>,
}

impl FleetState {
    /// Creates a new empty fleet state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vehicles: Vec::new(),
            drivers: Vec::new(),
            trips: Vec::new(),
            maintenance: Vec::new(),
            fuel_logs: Vec::new(),
            expenses: Vec::new(),
            incidents: Vec::new(),
        }
    }

    /// Looks up a vehicle by id.
    #[must_use]
    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| &v.id == id)
    }

    /// Looks up a driver by id.
    #[must_use]
    pub fn driver(&self, id: &DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|d| &d.id == id)
    }

    /// Looks up a trip by id.
    #[must_use]
    pub fn trip(&self, id: &TripId) -> Option<&Trip> {
        self.trips.iter().find(|t| &t.id == id)
    }

    /// Looks up a maintenance record by id.
    #[must_use]
    pub fn maintenance_record(&self, id: &MaintenanceId) -> Option<&MaintenanceRecord> {
        self.maintenance.iter().find(|m| &m.id == id)
    }

    /// Finds the vehicle's currently Dispatched trip, if any.
    ///
    /// Relies on the one-active-trip-per-vehicle convention: the first
    /// match in insertion order is returned.
    #[must_use]
    pub fn dispatched_trip_for_vehicle(&self, vehicle_id: &VehicleId) -> Option<&Trip> {
        self.trips
            .iter()
            .find(|t| &t.vehicle_id == vehicle_id && t.status == TripStatus::Dispatched)
    }

    /// Returns whether the store holds no entities at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
            && self.drivers.is_empty()
            && self.trips.is_empty()
            && self.maintenance.is_empty()
            && self.fuel_logs.is_empty()
            && self.expenses.is_empty()
            && self.incidents.is_empty()
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "vehicles={},drivers={},trips={},maintenance={},fuel_logs={},expenses={},incidents={}",
            self.vehicles.len(),
            self.drivers.len(),
            self.trips.len(),
            self.maintenance.len(),
            self.fuel_logs.len(),
            self.expenses.len(),
            self.incidents.len()
        ))
    }

    pub(crate) fn vehicle_mut(&mut self, id: &VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| &v.id == id)
    }

    pub(crate) fn driver_mut(&mut self, id: &DriverId) -> Option<&mut Driver> {
        self.drivers.iter_mut().find(|d| &d.id == id)
    }

    pub(crate) fn trip_mut(&mut self, id: &TripId) -> Option<&mut Trip> {
        self.trips.iter_mut().find(|t| &t.id == id)
    }

    pub(crate) fn maintenance_record_mut(
        &mut self,
        id: &MaintenanceId,
    ) -> Option<&mut MaintenanceRecord> {
        self.maintenance.iter_mut().find(|m| &m.id == id)
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: FleetState,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// The generated id of the entity this command created, if any.
    pub created_id: Option<String>,
}
