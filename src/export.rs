use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::ExportError;

pub const DEFAULT_CSV_FILE: &str = "expression_history.csv";
pub const DEFAULT_XLSX_FILE: &str = "expression_history.xlsx";

/// Column headers of an exported history table.
pub const HISTORY_HEADERS: [&str; 2] = ["Expression", "Result"];

/// Writes a header row followed by data rows to a file. Implementations
/// only read the rows they are given.
pub trait TabularWriter {
    fn write_table(
        &self,
        path: &Path,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), ExportError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter;

impl TabularWriter for CsvWriter {
    fn write_table(
        &self,
        path: &Path,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(headers)?;
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Single-sheet `.xlsx` workbook with a bold header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWriter;

impl TabularWriter for XlsxWriter {
    fn write_table(
        &self,
        path: &Path,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();

        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }
        for (row_idx, row) in rows.iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                worksheet.write_string(row_idx as u32 + 1, col as u16, cell)?;
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}
