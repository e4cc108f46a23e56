// Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::report_writer::ReportFormat;

/// Builds a per-device interface utilisation report from the inventory
#[derive(Parser, Debug)]
#[command(name = "intf-report")]
#[command(version)]
pub struct Args {
    /// Write a CSV file containing only the interfaces report
    #[arg(short = 'c', long, conflicts_with = "xlsx")]
    pub csv: bool,

    /// Write an Excel file with the report and the raw interface data (default)
    #[arg(short = 'x', long)]
    pub xlsx: bool,

    /// Directory the report is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// TOML config file (overrides CONFIG_FILE)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only include devices whose hostname matches this case-insensitive regex
    #[arg(long)]
    pub hostname: Option<String>,
}

impl Args {
    pub fn format(&self) -> ReportFormat {
        if self.csv {
            ReportFormat::Csv
        } else {
            ReportFormat::Xlsx
        }
    }
}
