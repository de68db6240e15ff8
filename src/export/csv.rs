//! CSV export for the tabular reports
//!
//! Category, monthly, transaction and total reports flatten to rows. The
//! summary and dashboard are nested documents and are only exported as JSON
//! or YAML.

use std::io::Write;

use serde::Serialize;

use crate::error::{FintrixError, FintrixResult};
use crate::export::json::ReportBody;

#[derive(Serialize)]
struct CategoryCsvRow<'a> {
    category: &'a str,
    amount: String,
    count: usize,
    percentage: i64,
}

#[derive(Serialize)]
struct MonthlyCsvRow<'a> {
    month: String,
    label: &'a str,
    total: String,
}

#[derive(Serialize)]
struct TransactionCsvRow<'a> {
    date: String,
    category: &'a str,
    amount: String,
    time_of_day: &'a str,
    currency: &'a str,
}

#[derive(Serialize)]
struct TotalCsvRow {
    total: String,
}

fn decimal(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, (cents / 100).abs(), (cents % 100).abs())
}

/// Write a tabular report as CSV with a header row
pub fn export_csv<W: Write>(report: &ReportBody, writer: W) -> FintrixResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    match report {
        ReportBody::Total { total } => {
            csv_writer.serialize(TotalCsvRow {
                total: decimal(total.cents()),
            })?;
        }
        ReportBody::Categories(categories) => {
            for c in &categories.categories {
                csv_writer.serialize(CategoryCsvRow {
                    category: &c.category,
                    amount: decimal(c.total.cents()),
                    count: c.count,
                    percentage: c.percentage,
                })?;
            }
        }
        ReportBody::Monthly(monthly) => {
            for m in &monthly.months {
                csv_writer.serialize(MonthlyCsvRow {
                    month: m.month.to_string(),
                    label: &m.label,
                    total: decimal(m.total.cents()),
                })?;
            }
        }
        ReportBody::Transactions(listing) => {
            for r in &listing.transactions {
                csv_writer.serialize(TransactionCsvRow {
                    date: r.date.format("%Y-%m-%d").to_string(),
                    category: &r.category,
                    amount: decimal(r.amount.cents()),
                    time_of_day: &r.time_of_day,
                    currency: &r.currency,
                })?;
            }
        }
        ReportBody::Summary(_) | ReportBody::Dashboard(_) => {
            return Err(FintrixError::Export(format!(
                "The {} report is not tabular; export it as json or yaml",
                report.kind()
            )));
        }
    }

    csv_writer
        .flush()
        .map_err(|e| FintrixError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::{CategoryReport, SpendingSummary, TransactionFilter, TransactionReport};
    use crate::store::{read_records, DataFormat, ExpenseStore};
    use chrono::NaiveDate;

    fn to_string(report: &ReportBody) -> String {
        let mut buffer = Vec::new();
        export_csv(report, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_categories_csv() {
        let report = ReportBody::Categories(CategoryReport::generate(&ExpenseStore::seed()));
        let text = to_string(&report);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("category,amount,count,percentage"));
        assert_eq!(lines.next(), Some("groceries,445.00,4,35"));
    }

    #[test]
    fn test_total_csv() {
        let report = ReportBody::Total {
            total: Money::from_cents(1005),
        };
        assert_eq!(to_string(&report), "total\n10.05\n");
    }

    #[test]
    fn test_transactions_csv_reads_back() {
        let listing = TransactionReport::generate(&ExpenseStore::seed(), &TransactionFilter::default());
        let text = to_string(&ReportBody::Transactions(listing));

        let records = read_records(text.as_bytes(), DataFormat::Csv).unwrap();
        assert_eq!(records.len(), 25);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2025, 3, 28).unwrap());
    }

    #[test]
    fn test_summary_not_tabular() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        let report = ReportBody::Summary(SpendingSummary::generate(&ExpenseStore::seed(), today));
        let err = export_csv(&report, Vec::new()).unwrap_err();
        assert!(matches!(err, FintrixError::Export(_)));
    }
}
