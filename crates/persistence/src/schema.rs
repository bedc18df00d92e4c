// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use rusqlite::Connection;
use tracing::info;

/// Initializes the database schema.
///
/// # Arguments
///
/// * `conn` - The database connection to initialize
///
/// # Errors
///
/// Returns an error if schema creation fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), PersistenceError> {
    info!("Initializing database schema");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS vehicles (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            model TEXT NOT NULL,
            license_plate TEXT NOT NULL UNIQUE,
            vehicle_type TEXT NOT NULL,
            region TEXT NOT NULL,
            max_capacity_kg INTEGER NOT NULL,
            odometer_km INTEGER NOT NULL,
            status TEXT NOT NULL,
            acquisition_cost REAL NOT NULL,
            revenue REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS drivers (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            license_number TEXT NOT NULL UNIQUE,
            license_expiry TEXT,
            license_status TEXT NOT NULL,
            license_category TEXT NOT NULL,
            safety_score INTEGER NOT NULL,
            duty_status TEXT NOT NULL,
            phone TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS trips (
            id TEXT PRIMARY KEY,
            vehicle_id TEXT NOT NULL,
            driver_id TEXT NOT NULL,
            cargo_weight_kg INTEGER NOT NULL,
            cargo_description TEXT NOT NULL,
            origin TEXT NOT NULL,
            destination TEXT NOT NULL,
            status TEXT NOT NULL,
            created_at TEXT NOT NULL,
            dispatched_at TEXT,
            completed_at TEXT
        );

        CREATE TABLE IF NOT EXISTS maintenance_records (
            id TEXT PRIMARY KEY,
            vehicle_id TEXT NOT NULL,
            service_type TEXT NOT NULL,
            description TEXT NOT NULL,
            cost REAL NOT NULL,
            date TEXT NOT NULL,
            status TEXT NOT NULL,
            odometer_at_service_km INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS fuel_logs (
            id TEXT PRIMARY KEY,
            vehicle_id TEXT NOT NULL,
            liters REAL NOT NULL,
            cost REAL NOT NULL,
            date TEXT NOT NULL,
            station TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS expenses (
            id TEXT PRIMARY KEY,
            vehicle_id TEXT NOT NULL,
            expense_type TEXT NOT NULL,
            amount REAL NOT NULL,
            date TEXT NOT NULL,
            notes TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS incidents (
            id TEXT PRIMARY KEY,
            vehicle_id TEXT NOT NULL,
            severity TEXT NOT NULL,
            description TEXT NOT NULL,
            estimated_cost REAL NOT NULL,
            insurance_status TEXT NOT NULL,
            status TEXT NOT NULL,
            date TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS audit_events (
            event_id INTEGER PRIMARY KEY AUTOINCREMENT,
            actor_id TEXT NOT NULL,
            actor_type TEXT NOT NULL,
            cause_id TEXT NOT NULL,
            cause_description TEXT NOT NULL,
            action_name TEXT NOT NULL,
            action_details TEXT,
            before_snapshot TEXT NOT NULL,
            after_snapshot TEXT NOT NULL,
            severity TEXT NOT NULL
        );
        ",
    )?;

    Ok(())
}
