// Aggregated report row: one per device

use serde::{Deserialize, Serialize};

/// Report header, in output order. Matches the serde names on `DeviceReport`.
pub const REPORT_COLUMNS: [&str; 12] = [
    "hostname",
    "sn",
    "siteName",
    "total",
    "l1&l2 up",
    "l1&l2 down",
    "l1 up & l2 down",
    "l1&l2 unknown",
    "admin-down",
    "err-disabled",
    "port utilisation (%)",
    "port availability (%)",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceReport {
    pub hostname: String,
    #[serde(rename = "sn")]
    pub serial: String,
    #[serde(rename = "siteName")]
    pub site_name: String,
    pub total: u64,
    #[serde(rename = "l1&l2 up")]
    pub up_up: u64,
    #[serde(rename = "l1&l2 down")]
    pub down_down: u64,
    #[serde(rename = "l1 up & l2 down")]
    pub up_down: u64,
    #[serde(rename = "l1&l2 unknown")]
    pub unknown: u64,
    #[serde(rename = "admin-down")]
    pub admin_down: u64,
    #[serde(rename = "err-disabled")]
    pub err_disabled: u64,
    /// Interfaces in use (up/up, up/down, unknown) as a share of total.
    #[serde(rename = "port utilisation (%)")]
    pub utilisation_pct: f64,
    /// Interfaces down/down as a share of total.
    #[serde(rename = "port availability (%)")]
    pub availability_pct: f64,
}

impl DeviceReport {
    /// Sum of the four link-state buckets; always equals `total`.
    pub fn link_state_sum(&self) -> u64 {
        self.up_up + self.down_down + self.up_down + self.unknown
    }
}
