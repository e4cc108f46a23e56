// Shared test helpers
#![allow(dead_code)]

use intf_report::models::InterfaceRecord;

pub fn intf(host: &str, l1: &str, l2: &str) -> InterfaceRecord {
    InterfaceRecord::new(host, l1, l2)
}

pub fn with_reason(mut r: InterfaceRecord, reason: &str) -> InterfaceRecord {
    r.reason = Some(reason.to_string());
    r
}

pub fn with_device(mut r: InterfaceRecord, sn: &str, site: &str) -> InterfaceRecord {
    r.sn = Some(sn.to_string());
    r.site_name = Some(site.to_string());
    r
}
