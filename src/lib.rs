//! Fintrix - Terminal personal-finance dashboard
//!
//! This library provides the core functionality for the Fintrix dashboard:
//! an immutable store of expense records, a pure aggregation engine over it,
//! and best-effort webhook widgets for the finance assistant and the crypto
//! wallet summary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, expense records, months and holdings
//! - `store`: The expense store and its data file loader
//! - `reports`: Totals, category and monthly breakdowns, summaries
//! - `display`: Icons, date formatting and tables
//! - `export`: CSV, JSON and YAML report export
//! - `portfolio`: Crypto holdings view
//! - `webhook`: Assistant and wallet webhook clients
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust
//! use fintrix::reports::CategoryReport;
//! use fintrix::store::ExpenseStore;
//!
//! let store = ExpenseStore::seed();
//! let report = CategoryReport::generate(&store);
//! assert_eq!(report.categories[0].category, "groceries");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod portfolio;
pub mod reports;
pub mod store;
pub mod webhook;

pub use error::FintrixError;
