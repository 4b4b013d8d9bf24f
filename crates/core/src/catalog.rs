//! Static catalogs consumed by the selection inputs and collaborator
//! surfaces. The session treats every selected value as an opaque
//! string key; these lists exist for display and input validation only.

use serde::Serialize;

/// Equipment models offered by the model dropdown
pub const MODEL_CATALOG: &[&str] = &["X9 1000", "X9 1100"];

/// Telemetry signals offered by the visualization dropdown
pub const SIGNAL_CATALOG: &[&str] = &[
    "Engine Temperature",
    "Oil Pressure",
    "Engine Vibration",
    "Hydraulic Pressure",
    "Battery Voltage",
];

pub fn is_known_model(key: &str) -> bool {
    MODEL_CATALOG.contains(&key)
}

pub fn is_known_signal(key: &str) -> bool {
    SIGNAL_CATALOG.contains(&key)
}

/// A past maintenance record rendered by the history table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaintenanceRecord {
    pub date: &'static str,
    pub component: &'static str,
    pub notes: &'static str,
}

/// Past maintenance history shown alongside a completed analysis
pub const MAINTENANCE_HISTORY: &[MaintenanceRecord] = &[
    MaintenanceRecord {
        date: "2024-06-01",
        component: "Engine",
        notes: "Oil changed, filter replaced",
    },
    MaintenanceRecord {
        date: "2024-05-20",
        component: "Hydraulics",
        notes: "Hydraulic fluid topped up",
    },
    MaintenanceRecord {
        date: "2024-05-10",
        component: "Transmission",
        notes: "Transmission belt adjusted",
    },
    MaintenanceRecord {
        date: "2024-04-28",
        component: "Brakes",
        notes: "Brake pads replaced",
    },
    MaintenanceRecord {
        date: "2024-04-15",
        component: "Tires",
        notes: "Front tires rotated",
    },
    MaintenanceRecord {
        date: "2024-03-30",
        component: "Electrical",
        notes: "Battery terminals cleaned",
    },
    MaintenanceRecord {
        date: "2024-03-10",
        component: "Cabin",
        notes: "Air filter replaced",
    },
];
