// Aggregation tests: grouping, link-state buckets, overlays, percentages

use intf_report::aggregation::{build_interface_report, group_by_hostname, summarize_device};
use intf_report::models::InterfaceRecord;

mod common;
use common::{intf, with_device, with_reason};

#[test]
fn one_up_one_down_is_fifty_fifty() {
    let records = vec![intf("A", "up", "up"), intf("A", "down", "down")];
    let report = build_interface_report(&records);
    assert_eq!(report.len(), 1);
    let a = &report[0];
    assert_eq!(a.hostname, "A");
    assert_eq!(a.total, 2);
    assert_eq!(a.up_up, 1);
    assert_eq!(a.down_down, 1);
    assert_eq!(a.up_down, 0);
    assert_eq!(a.unknown, 0);
    assert_eq!(a.utilisation_pct, 50.0);
    assert_eq!(a.availability_pct, 50.0);
}

#[test]
fn link_buckets_partition_total() {
    let records = vec![
        intf("A", "up", "up"),
        intf("A", "down", "down"),
        intf("A", "up", "down"),
        intf("A", "down", "up"),
        intf("A", "unknown", "up"),
        intf("A", "up", "n/a"),
        intf("A", "", ""),
        InterfaceRecord {
            l1: None,
            l2: None,
            ..intf("A", "", "")
        },
    ];
    let report = build_interface_report(&records);
    let a = &report[0];
    assert_eq!(a.total, 8);
    assert_eq!(a.link_state_sum(), a.total);
    assert_eq!(a.up_up, 1);
    assert_eq!(a.down_down, 1);
    assert_eq!(a.up_down, 1);
    assert_eq!(a.unknown, 5);
}

#[test]
fn down_up_counts_as_unknown_and_in_use() {
    let records = vec![intf("A", "down", "up"), intf("A", "down", "down")];
    let a = &build_interface_report(&records)[0];
    assert_eq!(a.unknown, 1);
    assert_eq!(a.utilisation_pct, 50.0);
    assert_eq!(a.availability_pct, 50.0);
}

#[test]
fn admin_down_reason_counts_regardless_of_link_state() {
    let records = vec![
        with_reason(intf("A", "up", "up"), "disabled"),
        with_reason(intf("A", "down", "down"), "admin"),
        with_reason(intf("A", "down", "down"), "parent-admin-down"),
        with_reason(intf("A", "down", "down"), "Disabled"),
        with_reason(intf("A", "down", "down"), "admin-down-ish"),
    ];
    let a = &build_interface_report(&records)[0];
    assert_eq!(a.admin_down, 3);
    // overlays never change the link buckets
    assert_eq!(a.link_state_sum(), 5);
    assert_eq!(a.availability_pct, 80.0);
}

#[test]
fn err_reason_counts_as_err_disabled() {
    let records = vec![
        with_reason(intf("A", "down", "down"), "err-disabled-foo"),
        with_reason(intf("A", "down", "down"), "bpduguard err"),
        with_reason(intf("A", "down", "down"), "ERR-disabled"),
    ];
    let a = &build_interface_report(&records)[0];
    assert_eq!(a.err_disabled, 2);
    assert_eq!(a.admin_down, 0);
}

#[test]
fn missing_reason_counts_toward_neither_overlay() {
    let records = vec![intf("A", "down", "down"), intf("A", "up", "up")];
    let a = &build_interface_report(&records)[0];
    assert_eq!(a.admin_down, 0);
    assert_eq!(a.err_disabled, 0);
}

#[test]
fn first_seen_serial_and_site_win() {
    let records = vec![
        with_device(intf("A", "up", "up"), "SN-1", "site-1"),
        with_device(intf("A", "up", "up"), "SN-2", "site-2"),
    ];
    let a = &build_interface_report(&records)[0];
    assert_eq!(a.serial, "SN-1");
    assert_eq!(a.site_name, "site-1");
}

#[test]
fn missing_serial_and_site_are_empty() {
    let a = &build_interface_report(&[intf("A", "up", "up")])[0];
    assert_eq!(a.serial, "");
    assert_eq!(a.site_name, "");
}

#[test]
fn rows_follow_first_seen_hostname_order() {
    let records = vec![
        intf("zeta", "up", "up"),
        intf("alpha", "up", "up"),
        intf("zeta", "down", "down"),
        intf("mid", "up", "up"),
    ];
    let hosts: Vec<String> = build_interface_report(&records)
        .into_iter()
        .map(|r| r.hostname)
        .collect();
    assert_eq!(hosts, ["zeta", "alpha", "mid"]);
}

#[test]
fn grouping_keeps_every_record_once() {
    let records = vec![
        intf("A", "up", "up"),
        intf("B", "up", "up"),
        intf("A", "down", "down"),
        intf("B", "up", "down"),
        intf("C", "up", "up"),
    ];
    let groups = group_by_hostname(&records);
    assert_eq!(groups.len(), 3);
    let grouped: usize = groups.iter().map(|g| g.interfaces.len()).sum();
    assert_eq!(grouped, records.len());
    for g in &groups {
        assert!(g.interfaces.iter().all(|i| i.hostname == g.hostname));
    }
    // encounter order inside a group
    assert_eq!(groups[0].interfaces[1].l1.as_deref(), Some("down"));
}

#[test]
fn empty_group_gives_zero_percentages() {
    let records: Vec<InterfaceRecord> = vec![];
    assert!(build_interface_report(&records).is_empty());

    let group = intf_report::aggregation::DeviceGroup {
        hostname: "empty",
        interfaces: vec![],
    };
    let r = summarize_device(&group);
    assert_eq!(r.total, 0);
    assert_eq!(r.utilisation_pct, 0.0);
    assert_eq!(r.availability_pct, 0.0);
}

#[test]
fn percentages_round_to_two_decimals() {
    let records = vec![
        intf("A", "up", "up"),
        intf("A", "down", "down"),
        intf("A", "down", "down"),
    ];
    let a = &build_interface_report(&records)[0];
    assert_eq!(a.utilisation_pct, 33.33);
    assert_eq!(a.availability_pct, 66.67);
}

#[test]
fn null_hostnames_share_one_device_row() {
    let records: Vec<InterfaceRecord> = vec![
        serde_json::from_value(serde_json::json!({"hostname": null, "l1": "up", "l2": "up"}))
            .unwrap(),
        intf("A", "up", "up"),
        serde_json::from_value(serde_json::json!({"l1": "down", "l2": "down"})).unwrap(),
    ];
    let report = build_interface_report(&records);
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].hostname, "");
    assert_eq!(report[0].total, 2);
    assert_eq!(report[0].link_state_sum(), 2);
}
