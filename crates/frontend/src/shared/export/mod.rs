//! Client-side export of the rows a table has loaded.
//!
//! Every format goes through [`ExportTable`]: one header per column definition
//! (hidden columns included) and one line per row, each cell rendered by the
//! column's formatter. Nothing here fetches; what is exported is what is in
//! memory.

mod browser;
mod csv;
mod excel;
mod pdf;
mod print;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::shared::config::ExportFormats;
use crate::shared::table::{ColumnDef, TableRow};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Nothing to export")]
    NoRows,
    #[error("Export format {0} is disabled")]
    Disabled(&'static str),
    #[error("Browser refused the export: {0}")]
    Browser(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
    Print,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [Self::Csv, Self::Excel, Self::Pdf, Self::Print];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Excel => "Excel",
            Self::Pdf => "PDF",
            Self::Print => "Print",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Excel => "xls",
            Self::Pdf => "pdf",
            Self::Print => "html",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv;charset=utf-8;",
            Self::Excel => "application/vnd.ms-excel;charset=utf-8;",
            Self::Pdf => "application/pdf",
            Self::Print => "text/html;charset=utf-8;",
        }
    }

    pub fn is_enabled(&self, formats: &ExportFormats) -> bool {
        match self {
            Self::Csv => formats.csv,
            Self::Excel => formats.excel,
            Self::Pdf => formats.pdf,
            Self::Print => formats.print,
        }
    }
}

/// Rows resolved to display strings, ready for any serializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn build<T: TableRow>(title: &str, columns: &[ColumnDef], rows: &[T]) -> Self {
        Self {
            title: title.to_string(),
            headers: columns.iter().map(|c| c.header.clone()).collect(),
            rows: rows
                .iter()
                .map(|row| columns.iter().map(|c| c.cell_text(row)).collect())
                .collect(),
        }
    }

    pub fn render(&self, format: ExportFormat) -> String {
        match format {
            ExportFormat::Csv => csv::render(self),
            ExportFormat::Excel => excel::render(self),
            ExportFormat::Pdf => pdf::render(self),
            ExportFormat::Print => print::render(self),
        }
    }
}

/// `brokers_20250102_093000.csv`
pub fn export_filename(base: &str, at: NaiveDateTime, format: ExportFormat) -> String {
    format!("{}_{}.{}", base, at.format("%Y%m%d_%H%M%S"), format.extension())
}

/// Serialize `rows` and hand the result to the browser
pub fn export_rows<T: TableRow>(
    format: ExportFormat,
    formats: &ExportFormats,
    base_name: &str,
    title: &str,
    columns: &[ColumnDef],
    rows: &[T],
) -> Result<(), ExportError> {
    if !format.is_enabled(formats) {
        return Err(ExportError::Disabled(format.label()));
    }
    if rows.is_empty() {
        return Err(ExportError::NoRows);
    }

    let table = ExportTable::build(title, columns, rows);
    let content = table.render(format);
    log::info!("Exporting {} rows of {} as {}", table.rows.len(), base_name, format.label());

    match format {
        ExportFormat::Print => browser::open_for_print(&content, format.mime()),
        _ => {
            let filename = export_filename(base_name, chrono::Local::now().naive_local(), format);
            browser::download(&content, format.mime(), &filename)
        }
    }
}
