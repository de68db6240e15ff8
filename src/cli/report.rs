//! CLI commands for expense reports
//!
//! Every report is printed to the terminal by default. With `--format` it is
//! written in that format instead, to `--output` when given, else to stdout.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::config::{FintrixPaths, Settings};
use crate::display::parse_date;
use crate::error::{FintrixError, FintrixResult};
use crate::export::{
    export_csv, export_json, export_to_file, export_yaml, ExportFormat, ReportBody, ReportExport,
};
use crate::models::MonthKey;
use crate::reports::{
    total_spend, CategoryReport, DashboardReport, MonthlyReport, SpendingSummary,
    TransactionFilter, TransactionReport,
};
use crate::store::ExpenseStore;

/// Output options shared by every report
#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Write the report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (inferred from the file extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,
}

impl OutputArgs {
    /// The format to export in, or `None` for terminal output
    fn resolve(&self) -> FintrixResult<Option<ExportFormat>> {
        match (&self.output, self.format) {
            (_, Some(format)) => Ok(Some(format)),
            (None, None) => Ok(None),
            (Some(path), None) => ExportFormat::from_path(path).map(Some).ok_or_else(|| {
                FintrixError::Validation(format!(
                    "Cannot infer a format from {}. Use --format csv|json|yaml",
                    path.display()
                ))
            }),
        }
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total spending across all records
    Total {
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Spending by category, largest first
    #[command(alias = "spending")]
    Categories {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Spending per calendar month, oldest first
    Monthly {
        #[command(flatten)]
        out: OutputArgs,
    },

    /// One-line spending summary
    Summary {
        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Transactions, newest first
    #[command(alias = "txn")]
    Transactions {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Only this category
        #[arg(short, long)]
        category: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &ExpenseStore,
    settings: &Settings,
    paths: &FintrixPaths,
    cmd: ReportCommands,
) -> FintrixResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Total { out } => {
            let total = total_spend(store);
            emit(store, paths, ReportBody::Total { total }, &out, || {
                format!("Total Spending: {}\n", total.format_short(symbol))
            })
        }
        ReportCommands::Categories { top, out } => {
            let mut report = CategoryReport::generate(store);
            if let Some(limit) = top {
                report.categories.truncate(limit);
            }
            let text = report.format_terminal(symbol);
            emit(store, paths, ReportBody::Categories(report), &out, || text)
        }
        ReportCommands::Monthly { out } => {
            let report = MonthlyReport::generate(store);
            let text = report.format_terminal(symbol);
            emit(store, paths, ReportBody::Monthly(report), &out, || text)
        }
        ReportCommands::Summary { today, out } => {
            let summary = SpendingSummary::generate(store, resolve_today(today.as_deref())?);
            let text = format!("{}\n", summary.message(symbol));
            emit(store, paths, ReportBody::Summary(summary), &out, || text)
        }
        ReportCommands::Transactions {
            limit,
            month,
            category,
            out,
        } => {
            let month = month
                .as_deref()
                .map(|m| {
                    MonthKey::parse(m).ok_or_else(|| {
                        FintrixError::Validation(format!(
                            "Invalid month format: {}. Use YYYY-MM (e.g., 2025-01)",
                            m
                        ))
                    })
                })
                .transpose()?;
            let filter = TransactionFilter {
                month,
                category,
                limit,
            };
            let report = TransactionReport::generate(store, &filter);
            let text = report.format_terminal();
            emit(store, paths, ReportBody::Transactions(report), &out, || text)
        }
    }
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    store: &ExpenseStore,
    settings: &Settings,
    paths: &FintrixPaths,
    limit: Option<usize>,
    today: Option<String>,
    out: OutputArgs,
) -> FintrixResult<()> {
    let report = DashboardReport::generate(store, resolve_today(today.as_deref())?, limit);
    let text = report.format_terminal(&settings.currency_symbol);
    emit(store, paths, ReportBody::Dashboard(report), &out, || text)
}

/// The given date, or the local calendar date
fn resolve_today(today: Option<&str>) -> FintrixResult<NaiveDate> {
    match today {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Print a report to the terminal or export it
fn emit(
    store: &ExpenseStore,
    paths: &FintrixPaths,
    report: ReportBody,
    out: &OutputArgs,
    terminal: impl FnOnce() -> String,
) -> FintrixResult<()> {
    let Some(format) = out.resolve()? else {
        print!("{}", terminal());
        return Ok(());
    };

    let export = ReportExport::new(report, store.len());
    match &out.output {
        Some(path) => {
            let target = paths.resolve_export_path(path);
            if target.starts_with(paths.export_dir()) {
                paths.ensure_directories()?;
            }
            export_to_file(&export, format, &target)?;
            println!("Report exported to: {}", target.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            match format {
                ExportFormat::Csv => export_csv(&export.report, &mut handle)?,
                ExportFormat::Json => export_json(&export, &mut handle)?,
                ExportFormat::Yaml => export_yaml(&export, &mut handle)?,
            }
        }
    }
    Ok(())
}
