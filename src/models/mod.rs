//! Core data models for Fintrix
//!
//! Expense records, calendar months, money amounts and crypto holdings.

pub mod expense;
pub mod holding;
pub mod money;
pub mod month;

pub use expense::ExpenseRecord;
pub use holding::Holding;
pub use money::Money;
pub use month::MonthKey;
