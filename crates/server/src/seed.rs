// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo fleet loaded into an empty store on first start.
//!
//! Seeding bypasses commands: persistence supplies the initial collections,
//! so seeded entities may legitimately carry mid-lifecycle statuses.

use fleetflow::FleetState;
use fleetflow_domain::{
    Driver, DriverId, DutyStatus, Expense, ExpenseId, FuelLog, FuelLogId, LicenseNumber,
    LicensePlate, LicenseStatus, MaintenanceId, MaintenanceRecord, MaintenanceStatus, Trip,
    TripId, TripStatus, Vehicle, VehicleId, VehicleStatus, VehicleType,
};
use time::Date;
use time::macros::date;

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    name: &str,
    model: &str,
    plate: &str,
    vehicle_type: VehicleType,
    region: &str,
    max_capacity_kg: u32,
    odometer_km: u32,
    status: VehicleStatus,
    acquisition_cost: f64,
    revenue: f64,
) -> Vehicle {
    Vehicle {
        id: VehicleId::new(id),
        name: name.to_string(),
        model: model.to_string(),
        license_plate: LicensePlate::new(plate),
        vehicle_type,
        region: region.to_string(),
        max_capacity_kg,
        odometer_km,
        status,
        acquisition_cost,
        revenue,
    }
}

#[allow(clippy::too_many_arguments)]
fn driver(
    id: &str,
    name: &str,
    license_number: &str,
    license_expiry: Date,
    license_status: LicenseStatus,
    license_category: &[VehicleType],
    safety_score: u8,
    duty_status: DutyStatus,
    phone: &str,
) -> Driver {
    Driver {
        id: DriverId::new(id),
        name: name.to_string(),
        license_number: LicenseNumber::new(license_number),
        license_expiry: Some(license_expiry),
        license_status,
        license_category: license_category.to_vec(),
        safety_score,
        duty_status,
        phone: phone.to_string(),
    }
}

/// Builds the demo fleet.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn seed_state() -> FleetState {
    use VehicleStatus::{Available, InShop, OnTrip, OutOfService};
    use VehicleType::{Truck, Van};

    let vehicles: Vec<Vehicle> = vec![
        vehicle(
            "v1",
            "Volvo FH16",
            "2023",
            "KA-01-AB-1234",
            Truck,
            "South",
            25_000,
            45_230,
            Available,
            4_500_000.0,
            1_200_000.0,
        ),
        vehicle(
            "v2",
            "Tata Prima",
            "2022",
            "MH-02-CD-5678",
            Truck,
            "West",
            18_000,
            67_890,
            OnTrip,
            2_800_000.0,
            850_000.0,
        ),
        vehicle(
            "v3",
            "Ashok Leyland 4923",
            "2023",
            "TN-03-EF-9012",
            Truck,
            "South",
            30_000,
            32_100,
            InShop,
            3_200_000.0,
            950_000.0,
        ),
        vehicle(
            "v4",
            "BharatBenz 3723R",
            "2021",
            "DL-04-GH-3456",
            Van,
            "North",
            22_000,
            89_450,
            Available,
            3_000_000.0,
            1_100_000.0,
        ),
        vehicle(
            "v5",
            "Eicher Pro 6049",
            "2022",
            "GJ-05-IJ-7890",
            Van,
            "West",
            16_000,
            54_320,
            OutOfService,
            2_200_000.0,
            620_000.0,
        ),
        vehicle(
            "v6",
            "MAN CLA EVO",
            "2024",
            "RJ-06-KL-2345",
            Truck,
            "North",
            28_000,
            12_400,
            Available,
            5_200_000.0,
            400_000.0,
        ),
        vehicle(
            "v7",
            "Scania P410",
            "2023",
            "UP-07-MN-6789",
            Truck,
            "East",
            35_000,
            28_900,
            OnTrip,
            6_000_000.0,
            1_500_000.0,
        ),
        vehicle(
            "v8",
            "Mercedes Actros",
            "2024",
            "AP-08-OP-0123",
            Truck,
            "South",
            32_000,
            8_750,
            Available,
            7_500_000.0,
            300_000.0,
        ),
    ];

    let drivers: Vec<Driver> = vec![
        driver(
            "d1",
            "Rajesh Kumar",
            "DL-2023-001",
            date!(2027 - 06 - 15),
            LicenseStatus::Valid,
            &[Truck, Van],
            92,
            DutyStatus::OnDuty,
            "+91 98765 43210",
        ),
        driver(
            "d2",
            "Amit Sharma",
            "DL-2022-045",
            date!(2026 - 03 - 20),
            LicenseStatus::Valid,
            &[Truck, Van, VehicleType::Bike],
            88,
            DutyStatus::OnDuty,
            "+91 87654 32109",
        ),
        driver(
            "d3",
            "Suresh Patel",
            "DL-2021-089",
            date!(2025 - 01 - 10),
            LicenseStatus::Expired,
            &[Van],
            75,
            DutyStatus::OffDuty,
            "+91 76543 21098",
        ),
        driver(
            "d4",
            "Manoj Singh",
            "DL-2023-112",
            date!(2027 - 09 - 25),
            LicenseStatus::Valid,
            &[Truck, Van],
            95,
            DutyStatus::OffDuty,
            "+91 65432 10987",
        ),
        driver(
            "d5",
            "Vikram Reddy",
            "DL-2022-067",
            date!(2026 - 07 - 30),
            LicenseStatus::Valid,
            &[Truck],
            82,
            DutyStatus::OnDuty,
            "+91 54321 09876",
        ),
        driver(
            "d6",
            "Deepak Verma",
            "DL-2020-034",
            date!(2025 - 11 - 05),
            LicenseStatus::Expiring,
            &[Van, VehicleType::Bike],
            68,
            DutyStatus::Suspended,
            "+91 43210 98765",
        ),
    ];

    let trips: Vec<Trip> = vec![
        Trip {
            id: TripId::new("t1"),
            vehicle_id: VehicleId::new("v2"),
            driver_id: DriverId::new("d1"),
            cargo_weight_kg: 15_000,
            cargo_description: String::from("Steel Coils"),
            origin: String::from("Mumbai"),
            destination: String::from("Delhi"),
            status: TripStatus::Dispatched,
            created_at: date!(2026 - 02 - 18),
            dispatched_at: Some(date!(2026 - 02 - 18)),
            completed_at: None,
        },
        Trip {
            id: TripId::new("t2"),
            vehicle_id: VehicleId::new("v7"),
            driver_id: DriverId::new("d5"),
            cargo_weight_kg: 28_000,
            cargo_description: String::from("Cement Bags"),
            origin: String::from("Chennai"),
            destination: String::from("Hyderabad"),
            status: TripStatus::Dispatched,
            created_at: date!(2026 - 02 - 19),
            dispatched_at: Some(date!(2026 - 02 - 19)),
            completed_at: None,
        },
        Trip {
            id: TripId::new("t3"),
            vehicle_id: VehicleId::new("v1"),
            driver_id: DriverId::new("d2"),
            cargo_weight_kg: 20_000,
            cargo_description: String::from("Electronics"),
            origin: String::from("Bangalore"),
            destination: String::from("Pune"),
            status: TripStatus::Completed,
            created_at: date!(2026 - 02 - 15),
            dispatched_at: Some(date!(2026 - 02 - 15)),
            completed_at: Some(date!(2026 - 02 - 17)),
        },
        Trip {
            id: TripId::new("t4"),
            vehicle_id: VehicleId::new("v4"),
            driver_id: DriverId::new("d4"),
            cargo_weight_kg: 12_000,
            cargo_description: String::from("Textiles"),
            origin: String::from("Ahmedabad"),
            destination: String::from("Jaipur"),
            status: TripStatus::Draft,
            created_at: date!(2026 - 02 - 20),
            dispatched_at: None,
            completed_at: None,
        },
        Trip {
            id: TripId::new("t5"),
            vehicle_id: VehicleId::new("v6"),
            driver_id: DriverId::new("d2"),
            cargo_weight_kg: 8_000,
            cargo_description: String::from("Pharmaceuticals"),
            origin: String::from("Hyderabad"),
            destination: String::from("Kolkata"),
            status: TripStatus::Cancelled,
            created_at: date!(2026 - 02 - 10),
            dispatched_at: None,
            completed_at: None,
        },
    ];

    let maintenance: Vec<MaintenanceRecord> = vec![
        MaintenanceRecord {
            id: MaintenanceId::new("m1"),
            vehicle_id: VehicleId::new("v3"),
            service_type: String::from("Engine Overhaul"),
            description: String::from("Complete engine rebuild and tune-up"),
            cost: 85_000.0,
            date: date!(2026 - 02 - 19),
            status: MaintenanceStatus::InProgress,
            odometer_at_service_km: 32_100,
        },
        MaintenanceRecord {
            id: MaintenanceId::new("m2"),
            vehicle_id: VehicleId::new("v1"),
            service_type: String::from("Oil Change"),
            description: String::from("Synthetic oil change and filter replacement"),
            cost: 5_500.0,
            date: date!(2026 - 02 - 14),
            status: MaintenanceStatus::Completed,
            odometer_at_service_km: 44_800,
        },
        MaintenanceRecord {
            id: MaintenanceId::new("m3"),
            vehicle_id: VehicleId::new("v2"),
            service_type: String::from("Brake Inspection"),
            description: String::from("Front and rear brake pad inspection"),
            cost: 12_000.0,
            date: date!(2026 - 02 - 10),
            status: MaintenanceStatus::Completed,
            odometer_at_service_km: 67_200,
        },
        MaintenanceRecord {
            id: MaintenanceId::new("m4"),
            vehicle_id: VehicleId::new("v4"),
            service_type: String::from("Tire Rotation"),
            description: String::from("Full tire rotation and alignment check"),
            cost: 8_000.0,
            date: date!(2026 - 02 - 05),
            status: MaintenanceStatus::Completed,
            odometer_at_service_km: 89_000,
        },
        MaintenanceRecord {
            id: MaintenanceId::new("m5"),
            vehicle_id: VehicleId::new("v5"),
            service_type: String::from("Transmission Repair"),
            description: String::from("Gearbox rebuild, vehicle out of service"),
            cost: 120_000.0,
            date: date!(2026 - 01 - 28),
            status: MaintenanceStatus::Completed,
            odometer_at_service_km: 54_000,
        },
    ];

    let fuel_logs: Vec<FuelLog> = vec![
        fuel("f1", "v1", 180.0, 18_000.0, date!(2026 - 02 - 18), "HP Petrol Pump, NH48"),
        fuel("f2", "v2", 150.0, 15_000.0, date!(2026 - 02 - 17), "IOC Fuel Station, Mumbai"),
        fuel("f3", "v4", 120.0, 12_000.0, date!(2026 - 02 - 16), "BP Fuel, Delhi"),
        fuel("f4", "v7", 200.0, 20_000.0, date!(2026 - 02 - 19), "Shell, Chennai"),
        fuel("f5", "v1", 160.0, 16_000.0, date!(2026 - 02 - 12), "Reliance Fuel, Pune"),
        fuel("f6", "v6", 90.0, 9_000.0, date!(2026 - 02 - 15), "HP Petrol, Jaipur"),
    ];

    let expenses: Vec<Expense> = vec![
        expense("e1", "v1", "Toll Charges", 4_500.0, date!(2026 - 02 - 18), "NH48 toll gates"),
        expense("e2", "v2", "Parking", 800.0, date!(2026 - 02 - 17), "Overnight parking, Mumbai"),
        expense(
            "e3",
            "v4",
            "Insurance Premium",
            45_000.0,
            date!(2026 - 02 - 01),
            "Annual comprehensive",
        ),
        expense(
            "e4",
            "v7",
            "Toll Charges",
            6_200.0,
            date!(2026 - 02 - 19),
            "Chennai-Hyderabad toll",
        ),
        expense("e5", "v1", "Cleaning", 1_200.0, date!(2026 - 02 - 10), "Full vehicle wash"),
    ];

    FleetState {
        vehicles,
        drivers,
        trips,
        maintenance,
        fuel_logs,
        expenses,
        incidents: Vec::new(),
    }
}

fn fuel(id: &str, vehicle_id: &str, liters: f64, cost: f64, date: Date, station: &str) -> FuelLog {
    FuelLog {
        id: FuelLogId::new(id),
        vehicle_id: VehicleId::new(vehicle_id),
        liters,
        cost,
        date,
        station: station.to_string(),
    }
}

fn expense(
    id: &str,
    vehicle_id: &str,
    expense_type: &str,
    amount: f64,
    date: Date,
    notes: &str,
) -> Expense {
    Expense {
        id: ExpenseId::new(id),
        vehicle_id: VehicleId::new(vehicle_id),
        expense_type: expense_type.to_string(),
        amount,
        date,
        notes: notes.to_string(),
    }
}
