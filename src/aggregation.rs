// Grouping and per-device counting. Pure functions, no I/O.

use std::collections::HashMap;

use crate::models::{DeviceReport, InterfaceRecord};

/// Reasons reported for an interface that was shut down administratively.
pub const ADMIN_DOWN_REASONS: [&str; 5] = [
    "admin",
    "admin-down",
    "parent-admin-down",
    "disable",
    "disabled",
];

/// Link-state bucket for one interface. Every `(l1, l2)` pair maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkBucket {
    UpUp,
    DownDown,
    UpDown,
    Unknown,
}

impl LinkBucket {
    pub fn classify(l1: Option<&str>, l2: Option<&str>) -> Self {
        match (l1, l2) {
            (Some("up"), Some("up")) => LinkBucket::UpUp,
            (Some("down"), Some("down")) => LinkBucket::DownDown,
            (Some("up"), Some("down")) => LinkBucket::UpDown,
            // down/up, any non up/down value, and missing states
            _ => LinkBucket::Unknown,
        }
    }

    pub fn of(record: &InterfaceRecord) -> Self {
        Self::classify(record.l1.as_deref(), record.l2.as_deref())
    }
}

pub fn is_admin_down(reason: Option<&str>) -> bool {
    reason.is_some_and(|r| ADMIN_DOWN_REASONS.contains(&r))
}

pub fn is_err_disabled(reason: Option<&str>) -> bool {
    reason.is_some_and(|r| r.contains("err"))
}

/// All interfaces seen for one hostname, in encounter order.
#[derive(Debug, Clone)]
pub struct DeviceGroup<'a> {
    pub hostname: &'a str,
    pub interfaces: Vec<&'a InterfaceRecord>,
}

/// Groups records by hostname. Groups come out in first-seen hostname order.
pub fn group_by_hostname(records: &[InterfaceRecord]) -> Vec<DeviceGroup<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<DeviceGroup<'_>> = Vec::new();

    for record in records {
        let hostname = record.hostname.as_str();
        match index.get(hostname) {
            Some(&i) => groups[i].interfaces.push(record),
            None => {
                index.insert(hostname, groups.len());
                groups.push(DeviceGroup {
                    hostname,
                    interfaces: vec![record],
                });
            }
        }
    }
    groups
}

/// Reduces one device's interfaces to a report row.
/// Serial and site name are taken from the first interface of the group.
pub fn summarize_device(group: &DeviceGroup<'_>) -> DeviceReport {
    let mut up_up = 0u64;
    let mut down_down = 0u64;
    let mut up_down = 0u64;
    let mut unknown = 0u64;
    let mut admin_down = 0u64;
    let mut err_disabled = 0u64;

    for intf in &group.interfaces {
        match LinkBucket::of(intf) {
            LinkBucket::UpUp => up_up += 1,
            LinkBucket::DownDown => down_down += 1,
            LinkBucket::UpDown => up_down += 1,
            LinkBucket::Unknown => unknown += 1,
        }
        let reason = intf.reason.as_deref();
        if is_admin_down(reason) {
            admin_down += 1;
        }
        if is_err_disabled(reason) {
            err_disabled += 1;
        }
    }

    let total = group.interfaces.len() as u64;
    let first = group.interfaces.first();

    // admin-down and err-disabled overlap the link buckets; they are not subtracted
    let in_use = up_up + up_down + unknown;
    let not_used = down_down;

    DeviceReport {
        hostname: group.hostname.to_string(),
        serial: first.and_then(|i| i.sn.clone()).unwrap_or_default(),
        site_name: first.and_then(|i| i.site_name.clone()).unwrap_or_default(),
        total,
        up_up,
        down_down,
        up_down,
        unknown,
        admin_down,
        err_disabled,
        utilisation_pct: percent(in_use, total),
        availability_pct: percent(not_used, total),
    }
}

/// Builds the report: one row per device, in grouping order.
pub fn build_interface_report(records: &[InterfaceRecord]) -> Vec<DeviceReport> {
    group_by_hostname(records)
        .iter()
        .map(summarize_device)
        .collect()
}

/// `part / total * 100`, rounded to 2 decimals (half away from zero). Zero total gives 0.
pub fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
