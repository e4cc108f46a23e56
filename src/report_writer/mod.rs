// Report output: flat CSV, or a two-sheet workbook with the raw rows

mod csv;
mod xlsx;

pub use self::csv::{read_report_csv, write_report_csv};
pub use self::xlsx::{RAW_SHEET, REPORT_SHEET, write_report_xlsx};

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::models::{DeviceReport, InterfaceRecord};

/// Timestamp prefix of every report file name.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("creating {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("writing CSV report: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("writing XLSX report: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Report rows only.
    Csv,
    /// Report sheet plus raw interface rows.
    #[default]
    Xlsx,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Xlsx => "xlsx",
        }
    }
}

/// `<dir>/<timestamp>-<base_name>`, without extension.
pub fn report_base_path<Tz>(dir: &Path, base_name: &str, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    dir.join(format!("{}-{}", now.format(TIMESTAMP_FORMAT), base_name))
}

/// Writes the report in `format` next to `base_path` and returns the file written.
/// `columns` selects and orders the raw sheet; CSV ignores the raw rows.
pub fn create_report_file(
    rows: &[DeviceReport],
    raw: &[InterfaceRecord],
    columns: &[&str],
    format: ReportFormat,
    base_path: &Path,
) -> Result<PathBuf, ReportError> {
    // appended rather than replaced: base names may contain dots
    let mut name = base_path.as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    let path = PathBuf::from(name);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    match format {
        ReportFormat::Csv => {
            let file = std::fs::File::create(&path).map_err(|source| ReportError::Io {
                path: path.clone(),
                source,
            })?;
            write_report_csv(file, rows)?;
        }
        ReportFormat::Xlsx => write_report_xlsx(&path, rows, raw, columns)?,
    }
    Ok(path)
}
