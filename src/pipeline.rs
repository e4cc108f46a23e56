// One report run: fetch, aggregate, write

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, TimeZone};
use tracing::{info, warn};

use crate::aggregation::build_interface_report;
use crate::config::AppConfig;
use crate::inventory_repo::{Filters, INTERFACE_COLUMNS, InventorySource};
use crate::report_writer::{ReportFormat, create_report_file, report_base_path};

/// Per-run choices that come from the command line rather than the config.
#[derive(Debug, Clone)]
pub struct RunOptions<'a> {
    pub format: ReportFormat,
    pub output_dir: &'a Path,
    pub hostname_filter: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub interfaces: usize,
    pub devices: usize,
}

/// Runs the whole report. Any fetch or write failure aborts the run; nothing is retried.
pub async fn run<S, Tz>(
    config: &AppConfig,
    source: &S,
    options: &RunOptions<'_>,
    now: &DateTime<Tz>,
) -> anyhow::Result<RunSummary>
where
    S: InventorySource,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let filters = Filters::physical_interfaces(options.hostname_filter);

    match source
        .count(&filters)
        .await
        .context("counting inventory interfaces")?
    {
        Some(expected) => info!(interfaces = expected, "fetching interface data"),
        None => warn!("inventory did not report an interface count, fetching anyway"),
    }

    let records = source
        .all(&INTERFACE_COLUMNS, &filters)
        .await
        .context("fetching inventory interfaces")?;
    info!(interfaces = records.len(), "fetched interface data");

    let report = build_interface_report(&records);
    info!(devices = report.len(), "built interfaces report");

    let base = report_base_path(options.output_dir, &config.report.output_base_name, now);
    let path = create_report_file(&report, &records, &INTERFACE_COLUMNS, options.format, &base)
        .context("writing report file")?;
    info!(path = %path.display(), "report saved");

    Ok(RunSummary {
        path,
        interfaces: records.len(),
        devices: report.len(),
    })
}
