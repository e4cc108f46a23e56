// Build-time version from Cargo.toml

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml). Sent as the HTTP user agent together with `VERSION`.
pub const NAME: &str = env!("CARGO_PKG_NAME");
