// Domain models: raw inventory rows and per-device report rows

mod interface;
mod report;

pub use interface::InterfaceRecord;
pub use report::{DeviceReport, REPORT_COLUMNS};
