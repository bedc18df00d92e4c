// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV report generation.
//!
//! Reports consume read-interface snapshots only; they never touch
//! mutation commands.

use fleetflow::FleetState;
use fleetflow_domain::{VehicleCosts, cost_per_km, vehicle_costs, vehicle_roi};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV serialization failed.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
    /// The CSV buffer could not be recovered.
    #[error("CSV buffer error: {0}")]
    Buffer(String),
    /// The rendered report was not valid UTF-8.
    #[error("Report encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// One row of the fleet summary report.
#[derive(Debug, Serialize)]
struct FleetSummaryRow {
    vehicle: String,
    license_plate: String,
    #[serde(rename = "type")]
    vehicle_type: String,
    status: String,
    odometer_km: u32,
    fuel_cost: f64,
    maintenance_cost: f64,
    total_cost: f64,
    revenue: f64,
    roi_pct: f64,
    cost_per_km: f64,
}

/// Renders the per-vehicle fleet summary as CSV.
///
/// Columns: vehicle, license plate, type, status, odometer, fuel cost,
/// maintenance cost, total cost, revenue, ROI, and cost per kilometer.
///
/// # Errors
///
/// Returns an error if CSV serialization fails.
pub fn fleet_summary_csv(state: &FleetState) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for vehicle in &state.vehicles {
        let costs: VehicleCosts = vehicle_costs(&vehicle.id, &state.fuel_logs, &state.maintenance);
        let row: FleetSummaryRow = FleetSummaryRow {
            vehicle: vehicle.name.clone(),
            license_plate: vehicle.license_plate.value().to_string(),
            vehicle_type: vehicle.vehicle_type.to_string(),
            status: vehicle.status.to_string(),
            odometer_km: vehicle.odometer_km,
            fuel_cost: costs.fuel_cost,
            maintenance_cost: costs.maintenance_cost,
            total_cost: costs.total,
            revenue: vehicle.revenue,
            roi_pct: vehicle_roi(vehicle, costs.total),
            cost_per_km: cost_per_km(vehicle, costs.total),
        };
        writer.serialize(row)?;
    }

    let buffer: Vec<u8> = writer
        .into_inner()
        .map_err(|e| ReportError::Buffer(e.to_string()))?;
    Ok(String::from_utf8(buffer)?)
}
