// Model serialization tests (API rows in, report rows out)

use intf_report::models::*;
use serde_json::json;

fn api_row() -> serde_json::Value {
    json!({
        "id": "1234",
        "hostname": "core-sw-01",
        "sn": "FOC1234X0AB",
        "intName": "Gi1/0/1",
        "siteName": "LON-DC1",
        "l1": "up",
        "l2": "up",
        "reason": null,
        "dscr": "uplink to dist-01",
        "mac": "0011.2233.4455",
        "speedValue": 1000000000,
        "mtu": 1500,
        "hasTransceiver": true,
        "transceiverType": null
    })
}

#[test]
fn test_interface_record_from_api_row() {
    let r: InterfaceRecord = serde_json::from_value(api_row()).unwrap();
    assert_eq!(r.hostname, "core-sw-01");
    assert_eq!(r.sn.as_deref(), Some("FOC1234X0AB"));
    assert_eq!(r.site_name.as_deref(), Some("LON-DC1"));
    assert_eq!(r.int_name.as_deref(), Some("Gi1/0/1"));
    assert_eq!(r.l1.as_deref(), Some("up"));
    assert!(r.reason.is_none());
    // opaque columns are kept as-is
    assert_eq!(r.extra["dscr"], "uplink to dist-01");
    assert_eq!(r.extra["speedValue"], 1_000_000_000u64);
    assert_eq!(r.extra["hasTransceiver"], true);
}

#[test]
fn test_interface_record_missing_optional_columns() {
    let r: InterfaceRecord = serde_json::from_value(json!({"hostname": "edge-1"})).unwrap();
    assert!(r.sn.is_none());
    assert!(r.l1.is_none());
    assert!(r.l2.is_none());
    assert!(r.extra.is_empty());
}

#[test]
fn test_interface_record_null_hostname_is_empty() {
    let r: InterfaceRecord =
        serde_json::from_value(json!({"hostname": null, "l1": "up", "l2": "up"})).unwrap();
    assert_eq!(r.hostname, "");
    let r: InterfaceRecord = serde_json::from_value(json!({"l1": "down"})).unwrap();
    assert_eq!(r.hostname, "");
}

#[test]
fn test_interface_record_column_lookup() {
    let r: InterfaceRecord = serde_json::from_value(api_row()).unwrap();
    assert_eq!(r.column("hostname"), json!("core-sw-01"));
    assert_eq!(r.column("siteName"), json!("LON-DC1"));
    assert_eq!(r.column("reason"), serde_json::Value::Null);
    assert_eq!(r.column("mtu"), json!(1500));
    assert_eq!(r.column("transceiverType"), serde_json::Value::Null);
    assert_eq!(r.column("notAColumn"), serde_json::Value::Null);
}

#[test]
fn test_interface_record_passes_metadata_through() {
    let r: InterfaceRecord = serde_json::from_value(api_row()).unwrap();
    let back = serde_json::to_value(&r).unwrap();
    assert_eq!(back["dscr"], api_row()["dscr"]);
    assert_eq!(back["siteName"], "LON-DC1");
    assert_eq!(back["intName"], "Gi1/0/1");
}

#[test]
fn test_device_report_uses_report_column_names() {
    let row = DeviceReport {
        hostname: "A".into(),
        serial: "SN".into(),
        site_name: "S".into(),
        total: 4,
        up_up: 1,
        down_down: 1,
        up_down: 1,
        unknown: 1,
        admin_down: 0,
        err_disabled: 0,
        utilisation_pct: 75.0,
        availability_pct: 25.0,
    };
    let value = serde_json::to_value(&row).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), REPORT_COLUMNS.len());
    for col in REPORT_COLUMNS {
        assert!(obj.contains_key(col), "missing {col}");
    }
    assert_eq!(obj["port utilisation (%)"], 75.0);
    assert_eq!(row.link_state_sum(), row.total);
}
