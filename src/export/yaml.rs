//! YAML export for human-readable report snapshots

use std::io::Write;

use crate::error::{FintrixError, FintrixResult};
use crate::export::json::ReportExport;

/// Write an export as YAML with a short comment header
pub fn export_yaml<W: Write>(export: &ReportExport, writer: &mut W) -> FintrixResult<()> {
    let io_err = |e: std::io::Error| FintrixError::Export(e.to_string());

    writeln!(writer, "# Fintrix {} report", export.report.kind()).map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| FintrixError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::json::ReportBody;
    use crate::reports::MonthlyReport;
    use crate::store::ExpenseStore;

    #[test]
    fn test_export_monthly_yaml() {
        let store = ExpenseStore::seed();
        let export = ReportExport::new(ReportBody::Monthly(MonthlyReport::generate(&store)), store.len());

        let mut buffer = Vec::new();
        export_yaml(&export, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Fintrix monthly report"));
        assert!(text.contains("kind: monthly"));
        assert!(text.contains("label: Oct 2024"));
    }
}
