// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::schema::initialize_schema;
use fleetflow::FleetState;
use fleetflow_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use fleetflow_domain::{
    Driver, DriverId, DutyStatus, Expense, ExpenseId, FuelLog, FuelLogId, Incident, IncidentId,
    IncidentSeverity, IncidentStatus, LicenseNumber, LicensePlate, LicenseStatus, MaintenanceId,
    MaintenanceRecord, MaintenanceStatus, Severity, Trip, TripId, TripStatus, Vehicle, VehicleId,
    VehicleStatus, VehicleType, format_date, parse_date,
};
use rusqlite::{Connection, params};
use time::Date;
use tracing::{debug, info};

/// `SQLite`-backed snapshot store for the fleet state and audit log.
///
/// The whole store is replaced on every save, inside one transaction, so
/// the persisted snapshot always reflects a complete state transition.
#[derive(Debug)]
pub struct SqlitePersistence {
    conn: Connection,
}

impl SqlitePersistence {
    /// Opens an in-memory database and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be created.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Opens (or creates) a file-backed database and initializes the
    /// schema.
    ///
    /// # Arguments
    ///
    /// * `path` - The database file path
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be created.
    pub fn new_with_file(path: &str) -> Result<Self, PersistenceError> {
        info!(path = %path, "Opening database file");
        let conn: Connection = Connection::open(path)?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Returns whether the store holds no entities at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails.
    pub fn is_empty(&self) -> Result<bool, PersistenceError> {
        let total: i64 = self.conn.query_row(
            "SELECT (SELECT COUNT(*) FROM vehicles)
                  + (SELECT COUNT(*) FROM drivers)
                  + (SELECT COUNT(*) FROM trips)
                  + (SELECT COUNT(*) FROM maintenance_records)
                  + (SELECT COUNT(*) FROM fuel_logs)
                  + (SELECT COUNT(*) FROM expenses)
                  + (SELECT COUNT(*) FROM incidents)",
            [],
            |row| row.get(0),
        )?;
        Ok(total == 0)
    }

    /// Loads the complete fleet state from the database.
    ///
    /// Collections come back in insertion (rowid) order, preserving the
    /// stable-ordering semantics the analytics rely on.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails or a stored row cannot be
    /// rehydrated.
    pub fn load_state(&self) -> Result<FleetState, PersistenceError> {
        Ok(FleetState {
            vehicles: self.load_vehicles()?,
            drivers: self.load_drivers()?,
            trips: self.load_trips()?,
            maintenance: self.load_maintenance()?,
            fuel_logs: self.load_fuel_logs()?,
            expenses: self.load_expenses()?,
            incidents: self.load_incidents()?,
        })
    }

    /// Replaces the persisted snapshot with the given state, inside one
    /// transaction.
    ///
    /// # Arguments
    ///
    /// * `state` - The state to persist
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails; the transaction rolls back and
    /// the previous snapshot stays intact.
    #[allow(clippy::too_many_lines)]
    pub fn save_state(&mut self, state: &FleetState) -> Result<(), PersistenceError> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM vehicles", [])?;
        for v in &state.vehicles {
            tx.execute(
                "INSERT INTO vehicles (id, name, model, license_plate, vehicle_type, region,
                     max_capacity_kg, odometer_km, status, acquisition_cost, revenue)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    v.id.value(),
                    v.name,
                    v.model,
                    v.license_plate.value(),
                    v.vehicle_type.as_str(),
                    v.region,
                    v.max_capacity_kg,
                    v.odometer_km,
                    v.status.as_str(),
                    v.acquisition_cost,
                    v.revenue,
                ],
            )?;
        }

        tx.execute("DELETE FROM drivers", [])?;
        for d in &state.drivers {
            let categories: Vec<&str> =
                d.license_category.iter().map(VehicleType::as_str).collect();
            let categories_json: String = serde_json::to_string(&categories).map_err(|e| {
                PersistenceError::Corrupt {
                    table: "drivers",
                    message: format!("Failed to encode license categories: {e}"),
                }
            })?;
            tx.execute(
                "INSERT INTO drivers (id, name, license_number, license_expiry, license_status,
                     license_category, safety_score, duty_status, phone)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    d.id.value(),
                    d.name,
                    d.license_number.value(),
                    d.license_expiry.map(format_date),
                    d.license_status.as_str(),
                    categories_json,
                    d.safety_score,
                    d.duty_status.as_str(),
                    d.phone,
                ],
            )?;
        }

        tx.execute("DELETE FROM trips", [])?;
        for t in &state.trips {
            tx.execute(
                "INSERT INTO trips (id, vehicle_id, driver_id, cargo_weight_kg,
                     cargo_description, origin, destination, status, created_at,
                     dispatched_at, completed_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    t.id.value(),
                    t.vehicle_id.value(),
                    t.driver_id.value(),
                    t.cargo_weight_kg,
                    t.cargo_description,
                    t.origin,
                    t.destination,
                    t.status.as_str(),
                    format_date(t.created_at),
                    t.dispatched_at.map(format_date),
                    t.completed_at.map(format_date),
                ],
            )?;
        }

        tx.execute("DELETE FROM maintenance_records", [])?;
        for m in &state.maintenance {
            tx.execute(
                "INSERT INTO maintenance_records (id, vehicle_id, service_type, description,
                     cost, date, status, odometer_at_service_km)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    m.id.value(),
                    m.vehicle_id.value(),
                    m.service_type,
                    m.description,
                    m.cost,
                    format_date(m.date),
                    m.status.as_str(),
                    m.odometer_at_service_km,
                ],
            )?;
        }

        tx.execute("DELETE FROM fuel_logs", [])?;
        for f in &state.fuel_logs {
            tx.execute(
                "INSERT INTO fuel_logs (id, vehicle_id, liters, cost, date, station)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    f.id.value(),
                    f.vehicle_id.value(),
                    f.liters,
                    f.cost,
                    format_date(f.date),
                    f.station,
                ],
            )?;
        }

        tx.execute("DELETE FROM expenses", [])?;
        for e in &state.expenses {
            tx.execute(
                "INSERT INTO expenses (id, vehicle_id, expense_type, amount, date, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    e.id.value(),
                    e.vehicle_id.value(),
                    e.expense_type,
                    e.amount,
                    format_date(e.date),
                    e.notes,
                ],
            )?;
        }

        tx.execute("DELETE FROM incidents", [])?;
        for i in &state.incidents {
            tx.execute(
                "INSERT INTO incidents (id, vehicle_id, severity, description, estimated_cost,
                     insurance_status, status, date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    i.id.value(),
                    i.vehicle_id.value(),
                    i.severity.as_str(),
                    i.description,
                    i.estimated_cost,
                    i.insurance_status,
                    i.status.as_str(),
                    format_date(i.date),
                ],
            )?;
        }

        tx.commit()?;
        debug!("Persisted fleet snapshot");
        Ok(())
    }

    /// Appends an audit event to the log.
    ///
    /// # Arguments
    ///
    /// * `event` - The event to persist
    ///
    /// # Returns
    ///
    /// The assigned event id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn append_audit_event(&self, event: &AuditEvent) -> Result<i64, PersistenceError> {
        self.conn.execute(
            "INSERT INTO audit_events (actor_id, actor_type, cause_id, cause_description,
                 action_name, action_details, before_snapshot, after_snapshot, severity)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                event.actor.id,
                event.actor.actor_type,
                event.cause.id,
                event.cause.description,
                event.action.name,
                event.action.details,
                event.before.data,
                event.after.data,
                event.severity.as_str(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns the most recent audit events, newest first.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of events to return
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be
    /// rehydrated.
    pub fn recent_audit_events(&self, limit: usize) -> Result<Vec<AuditEvent>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT event_id, actor_id, actor_type, cause_id, cause_description, action_name,
                    action_details, before_snapshot, after_snapshot, severity
             FROM audit_events ORDER BY event_id DESC LIMIT ?1",
        )?;
        let limit: i64 = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![limit], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, Option<String>>(6)?,
                row.get::<_, String>(7)?,
                row.get::<_, String>(8)?,
                row.get::<_, String>(9)?,
            ))
        })?;

        let mut events: Vec<AuditEvent> = Vec::new();
        for row in rows {
            let (
                event_id,
                actor_id,
                actor_type,
                cause_id,
                cause_description,
                action_name,
                action_details,
                before,
                after,
                severity,
            ) = row?;
            let severity: Severity = Severity::parse(&severity)
                .map_err(|e| PersistenceError::corrupt("audit_events", &e))?;
            events.push(
                AuditEvent::new(
                    Actor::new(actor_id, actor_type),
                    Cause::new(cause_id, cause_description),
                    Action::new(action_name, action_details),
                    StateSnapshot::new(before),
                    StateSnapshot::new(after),
                    severity,
                )
                .with_event_id(event_id),
            );
        }
        Ok(events)
    }

    fn load_vehicles(&self) -> Result<Vec<Vehicle>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, model, license_plate, vehicle_type, region, max_capacity_kg,
                    odometer_km, status, acquisition_cost, revenue
             FROM vehicles ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, u32>(6)?,
                row.get::<_, u32>(7)?,
                row.get::<_, String>(8)?,
                row.get::<_, f64>(9)?,
                row.get::<_, f64>(10)?,
            ))
        })?;

        let mut vehicles: Vec<Vehicle> = Vec::new();
        for row in rows {
            let (id, name, model, plate, vehicle_type, region, cap, odo, status, acq, rev) = row?;
            vehicles.push(Vehicle {
                id: VehicleId::new(&id),
                name,
                model,
                license_plate: LicensePlate::new(&plate),
                vehicle_type: VehicleType::parse(&vehicle_type)
                    .map_err(|e| PersistenceError::corrupt("vehicles", &e))?,
                region,
                max_capacity_kg: cap,
                odometer_km: odo,
                status: VehicleStatus::parse(&status)
                    .map_err(|e| PersistenceError::corrupt("vehicles", &e))?,
                acquisition_cost: acq,
                revenue: rev,
            });
        }
        Ok(vehicles)
    }

    fn load_drivers(&self) -> Result<Vec<Driver>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, license_number, license_expiry, license_status, license_category,
                    safety_score, duty_status, phone
             FROM drivers ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, u8>(6)?,
                row.get::<_, String>(7)?,
                row.get::<_, String>(8)?,
            ))
        })?;

        let mut drivers: Vec<Driver> = Vec::new();
        for row in rows {
            let (id, name, number, expiry, status, categories, score, duty, phone) = row?;
            let category_names: Vec<String> =
                serde_json::from_str(&categories).map_err(|e| PersistenceError::Corrupt {
                    table: "drivers",
                    message: format!("Failed to decode license categories: {e}"),
                })?;
            let license_category: Vec<VehicleType> = category_names
                .iter()
                .map(|c| VehicleType::parse(c))
                .collect::<Result<Vec<VehicleType>, _>>()
                .map_err(|e| PersistenceError::corrupt("drivers", &e))?;

            drivers.push(Driver {
                id: DriverId::new(&id),
                name,
                license_number: LicenseNumber::new(&number),
                license_expiry: parse_stored_date(expiry.as_deref(), "drivers")?,
                license_status: LicenseStatus::parse(&status)
                    .map_err(|e| PersistenceError::corrupt("drivers", &e))?,
                license_category,
                safety_score: score,
                duty_status: DutyStatus::parse(&duty)
                    .map_err(|e| PersistenceError::corrupt("drivers", &e))?,
                phone,
            });
        }
        Ok(drivers)
    }

    fn load_trips(&self) -> Result<Vec<Trip>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, vehicle_id, driver_id, cargo_weight_kg, cargo_description, origin,
                    destination, status, created_at, dispatched_at, completed_at
             FROM trips ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, u32>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, String>(7)?,
                row.get::<_, String>(8)?,
                row.get::<_, Option<String>>(9)?,
                row.get::<_, Option<String>>(10)?,
            ))
        })?;

        let mut trips: Vec<Trip> = Vec::new();
        for row in rows {
            let (
                id,
                vehicle_id,
                driver_id,
                cargo,
                description,
                origin,
                destination,
                status,
                created_at,
                dispatched_at,
                completed_at,
            ) = row?;
            trips.push(Trip {
                id: TripId::new(&id),
                vehicle_id: VehicleId::new(&vehicle_id),
                driver_id: DriverId::new(&driver_id),
                cargo_weight_kg: cargo,
                cargo_description: description,
                origin,
                destination,
                status: TripStatus::parse(&status)
                    .map_err(|e| PersistenceError::corrupt("trips", &e))?,
                created_at: required_stored_date(&created_at, "trips")?,
                dispatched_at: parse_stored_date(dispatched_at.as_deref(), "trips")?,
                completed_at: parse_stored_date(completed_at.as_deref(), "trips")?,
            });
        }
        Ok(trips)
    }

    fn load_maintenance(&self) -> Result<Vec<MaintenanceRecord>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, vehicle_id, service_type, description, cost, date, status,
                    odometer_at_service_km
             FROM maintenance_records ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, u32>(7)?,
            ))
        })?;

        let mut records: Vec<MaintenanceRecord> = Vec::new();
        for row in rows {
            let (id, vehicle_id, service_type, description, cost, date, status, odo) = row?;
            records.push(MaintenanceRecord {
                id: MaintenanceId::new(&id),
                vehicle_id: VehicleId::new(&vehicle_id),
                service_type,
                description,
                cost,
                date: required_stored_date(&date, "maintenance_records")?,
                status: MaintenanceStatus::parse(&status)
                    .map_err(|e| PersistenceError::corrupt("maintenance_records", &e))?,
                odometer_at_service_km: odo,
            });
        }
        Ok(records)
    }

    fn load_fuel_logs(&self) -> Result<Vec<FuelLog>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, vehicle_id, liters, cost, date, station FROM fuel_logs ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut entries: Vec<FuelLog> = Vec::new();
        for row in rows {
            let (id, vehicle_id, liters, cost, date, station) = row?;
            entries.push(FuelLog {
                id: FuelLogId::new(&id),
                vehicle_id: VehicleId::new(&vehicle_id),
                liters,
                cost,
                date: required_stored_date(&date, "fuel_logs")?,
                station,
            });
        }
        Ok(entries)
    }

    fn load_expenses(&self) -> Result<Vec<Expense>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, vehicle_id, expense_type, amount, date, notes
             FROM expenses ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut entries: Vec<Expense> = Vec::new();
        for row in rows {
            let (id, vehicle_id, expense_type, amount, date, notes) = row?;
            entries.push(Expense {
                id: ExpenseId::new(&id),
                vehicle_id: VehicleId::new(&vehicle_id),
                expense_type,
                amount,
                date: required_stored_date(&date, "expenses")?,
                notes,
            });
        }
        Ok(entries)
    }

    fn load_incidents(&self) -> Result<Vec<Incident>, PersistenceError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, vehicle_id, severity, description, estimated_cost, insurance_status,
                    status, date
             FROM incidents ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, String>(7)?,
            ))
        })?;

        let mut incidents: Vec<Incident> = Vec::new();
        for row in rows {
            let (id, vehicle_id, severity, description, cost, insurance, status, date) = row?;
            incidents.push(Incident {
                id: IncidentId::new(&id),
                vehicle_id: VehicleId::new(&vehicle_id),
                severity: IncidentSeverity::parse(&severity)
                    .map_err(|e| PersistenceError::corrupt("incidents", &e))?,
                description,
                estimated_cost: cost,
                insurance_status: insurance,
                status: IncidentStatus::parse(&status)
                    .map_err(|e| PersistenceError::corrupt("incidents", &e))?,
                date: required_stored_date(&date, "incidents")?,
            });
        }
        Ok(incidents)
    }
}

/// Parses an optional stored date column.
fn parse_stored_date(
    raw: Option<&str>,
    table: &'static str,
) -> Result<Option<Date>, PersistenceError> {
    raw.map(|s| parse_date(s).map_err(|e| PersistenceError::corrupt(table, &e)))
        .transpose()
}

/// Parses a required stored date column.
fn required_stored_date(raw: &str, table: &'static str) -> Result<Date, PersistenceError> {
    parse_date(raw).map_err(|e| PersistenceError::corrupt(table, &e))
}
