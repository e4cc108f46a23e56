// CSV report: header row plus one row per device

use std::io::{Read, Write};

use crate::models::{DeviceReport, REPORT_COLUMNS};

/// The header is always written, so an empty report is still a valid CSV.
pub fn write_report_csv<W: Write>(writer: W, rows: &[DeviceReport]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(REPORT_COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn read_report_csv<R: Read>(reader: R) -> Result<Vec<DeviceReport>, csv::Error> {
    csv::Reader::from_reader(reader).deserialize().collect()
}
