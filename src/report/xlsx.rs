// file: src/report/xlsx.rs
// description: two-sheet spreadsheet export of classified duplicates
// reference: https://docs.rs/rust_xlsxwriter

use crate::error::Result;
use crate::models::{DuplicateReport, HashedRecord};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tracing::info;

const COLUMNS: [&str; 6] = ["id", "company", "title", "url", "file_path", "hash"];

pub struct XlsxReporter {
    output_path: PathBuf,
}

impl XlsxReporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Serializes the report as one workbook with a "Multiples" and a
    /// "Singles" sheet, one row per record, header first, no index column.
    /// Any write failure propagates; this is the one failure the pipeline
    /// never absorbs.
    pub fn write(&self, report: &DuplicateReport) -> Result<PathBuf> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let multiples = workbook.add_worksheet();
        multiples.set_name("Multiples")?;
        Self::write_sheet(multiples, &report.multiples, &header_format)?;

        let singles = workbook.add_worksheet();
        singles.set_name("Singles")?;
        Self::write_sheet(singles, &report.singles, &header_format)?;

        workbook.save(&self.output_path)?;

        info!(
            "Wrote {} multiple and {} single rows to {}",
            report.multiples.len(),
            report.singles.len(),
            self.output_path.display()
        );

        Ok(self.output_path.clone())
    }

    fn write_sheet(
        sheet: &mut Worksheet,
        rows: &[HashedRecord],
        header_format: &Format,
    ) -> Result<()> {
        for (col, name) in COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *name, header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write_string(r, 0, &row.record.id)?;
            sheet.write_string(r, 1, &row.record.company)?;
            sheet.write_string(r, 2, &row.record.title)?;
            sheet.write_string(r, 3, &row.record.url)?;
            sheet.write_string(r, 4, &row.record.file_path)?;
            sheet.write_string(r, 5, &row.digest)?;
        }

        Ok(())
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
