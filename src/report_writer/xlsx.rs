// XLSX report: "report" sheet plus the raw interface rows

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use serde_json::Value;

use crate::models::{DeviceReport, InterfaceRecord, REPORT_COLUMNS};

pub const REPORT_SHEET: &str = "report";
pub const RAW_SHEET: &str = "intf_raw_data";

pub fn write_report_xlsx(
    path: &Path,
    rows: &[DeviceReport],
    raw: &[InterfaceRecord],
    columns: &[&str],
) -> Result<(), XlsxError> {
    let header = Format::new().set_bold();

    let mut workbook = Workbook::new();
    workbook.push_worksheet(report_sheet(rows, &header)?);
    workbook.push_worksheet(raw_sheet(raw, columns, &header)?);
    workbook.save(path)
}

fn report_sheet(rows: &[DeviceReport], header: &Format) -> Result<Worksheet, XlsxError> {
    let mut ws = Worksheet::new();
    ws.set_name(REPORT_SHEET)?;

    for (col, name) in REPORT_COLUMNS.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *name, header)?;
    }
    for (i, r) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        ws.write_string(row, 0, &r.hostname)?;
        ws.write_string(row, 1, &r.serial)?;
        ws.write_string(row, 2, &r.site_name)?;
        let numbers = [
            r.total as f64,
            r.up_up as f64,
            r.down_down as f64,
            r.up_down as f64,
            r.unknown as f64,
            r.admin_down as f64,
            r.err_disabled as f64,
            r.utilisation_pct,
            r.availability_pct,
        ];
        for (offset, n) in numbers.into_iter().enumerate() {
            ws.write_number(row, 3 + offset as u16, n)?;
        }
    }
    ws.autofit();
    Ok(ws)
}

fn raw_sheet(
    raw: &[InterfaceRecord],
    columns: &[&str],
    header: &Format,
) -> Result<Worksheet, XlsxError> {
    let mut ws = Worksheet::new();
    ws.set_name(RAW_SHEET)?;

    for (col, name) in columns.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *name, header)?;
    }
    for (i, record) in raw.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, name) in columns.iter().enumerate() {
            write_value(&mut ws, row, col as u16, &record.column(name))?;
        }
    }
    Ok(ws)
}

fn write_value(ws: &mut Worksheet, row: u32, col: u16, value: &Value) -> Result<(), XlsxError> {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            ws.write_boolean(row, col, *b)?;
        }
        Value::Number(n) => match n.as_f64() {
            Some(f) => {
                ws.write_number(row, col, f)?;
            }
            None => {
                ws.write_string(row, col, n.to_string())?;
            }
        },
        Value::String(s) => {
            ws.write_string(row, col, s)?;
        }
        nested => {
            ws.write_string(row, col, nested.to_string())?;
        }
    }
    Ok(())
}
