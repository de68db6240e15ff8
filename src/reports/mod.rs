//! Reports module for Fintrix
//!
//! The aggregation engine. Every function here takes the store by shared
//! reference and recomputes its result from scratch; nothing is cached and
//! nothing is written back.

pub mod category;
pub mod dashboard;
pub mod monthly;
pub mod summary;
pub mod totals;
pub mod transactions;

pub use category::{category_totals, CategoryAggregate, CategoryReport};
pub use dashboard::DashboardReport;
pub use monthly::{chart_ceiling, monthly_totals, MonthlyAggregate, MonthlyReport};
pub use summary::SpendingSummary;
pub use totals::{percentage_of, total_spend};
pub use transactions::{recent_transactions, TransactionFilter, TransactionReport};
