//! JSON export and the shared export envelope

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{FintrixError, FintrixResult};
use crate::models::money::{serialize_dollars, Money};
use crate::reports::{
    CategoryReport, DashboardReport, MonthlyReport, SpendingSummary, TransactionReport,
};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// The report carried by an export
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBody {
    Total {
        #[serde(serialize_with = "serialize_dollars")]
        total: Money,
    },
    Categories(CategoryReport),
    Monthly(MonthlyReport),
    Transactions(TransactionReport),
    Summary(SpendingSummary),
    Dashboard(DashboardReport),
}

impl ReportBody {
    /// Short name used in headers and messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Total { .. } => "total",
            Self::Categories(_) => "categories",
            Self::Monthly(_) => "monthly",
            Self::Transactions(_) => "transactions",
            Self::Summary(_) => "summary",
            Self::Dashboard(_) => "dashboard",
        }
    }
}

/// Export envelope with versioning metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of records the report was computed from
    pub record_count: usize,

    pub report: ReportBody,
}

impl ReportExport {
    /// Wrap a report for export
    pub fn new(report: ReportBody, record_count: usize) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            record_count,
            report,
        }
    }
}

/// Write an export as pretty-printed JSON
pub fn export_json<W: Write>(export: &ReportExport, writer: &mut W) -> FintrixResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| FintrixError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FintrixError::Export(e.to_string()))?;
    Ok(())
}
