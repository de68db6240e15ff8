//! Export module for Fintrix
//!
//! Writes reports out in three formats:
//! - CSV: tabular reports (spreadsheet-compatible)
//! - JSON: any report, machine-readable
//! - YAML: any report, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::error::{FintrixError, FintrixResult};

pub use self::csv::export_csv;
pub use json::{export_json, ReportBody, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

/// Output format for exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Guess a format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Write a report to `path` in the given format
pub fn export_to_file(export: &ReportExport, format: ExportFormat, path: &Path) -> FintrixResult<()> {
    let file = File::create(path).map_err(|e| {
        FintrixError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_csv(&export.report, &mut writer)?,
        ExportFormat::Json => export_json(export, &mut writer)?,
        ExportFormat::Yaml => export_yaml(export, &mut writer)?,
    }
    writer.flush().map_err(|e| {
        FintrixError::Export(format!("Failed to write file {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), kind = export.report.kind(), ?format, "report exported");
    Ok(())
}
