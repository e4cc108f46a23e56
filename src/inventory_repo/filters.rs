// Table filters and the column allow-list for the interfaces table

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Logical or virtual interface names left out of the report
/// (aggregates, loopbacks, tunnels, VLAN interfaces, sub-interfaces, ...).
pub const EXCLUDE_INTF_NAME: &str = r"^(ae|bond|dock|ifb|lo|lxc|mgm|npu\d+_vl|oob|po|ssl|tep|tu|ucse|unb|veth|virtu|vl|vxl|wan|\/Common\/)|\.\d+";

/// Columns requested from the interfaces table, in raw-sheet order.
pub const INTERFACE_COLUMNS: [&str; 20] = [
    "hostname",
    "sn",
    "intName",
    "siteName",
    "l1",
    "l2",
    "reason",
    "dscr",
    "mac",
    "duplex",
    "speed",
    "bandwidth",
    "speedValue",
    "speedType",
    "media",
    "errDisabled",
    "mtu",
    "primaryIp",
    "hasTransceiver",
    "transceiverType",
];

/// Column condition. Serializes as the API's `[operator, value]` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Case-insensitive regex match.
    RegexInsensitive(String),
    /// Case-insensitive regex non-match.
    NotRegexInsensitive(String),
}

impl Condition {
    fn parts(&self) -> (&'static str, &str) {
        match self {
            Condition::RegexInsensitive(v) => ("ireg", v),
            Condition::NotRegexInsensitive(v) => ("nireg", v),
        }
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.parts().serialize(serializer)
    }
}

/// Column name to condition; all conditions must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Filters(BTreeMap<String, Condition>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, condition: Condition) -> Self {
        self.0.insert(column.into(), condition);
        self
    }

    /// Physical interfaces only, optionally restricted to hostnames matching `hostname_regex`.
    pub fn physical_interfaces(hostname_regex: Option<&str>) -> Self {
        let filters = Self::new().with(
            "intName",
            Condition::NotRegexInsensitive(EXCLUDE_INTF_NAME.to_string()),
        );
        match hostname_regex {
            Some(re) => filters.with("hostname", Condition::RegexInsensitive(re.to_string())),
            None => filters,
        }
    }
}
