//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reports and widgets.

pub mod assistant;
pub mod lookup;
pub mod portfolio;
pub mod report;
pub mod wallet;

pub use assistant::{handle_ask_command, handle_chat_command};
pub use lookup::{handle_date_command, handle_icon_command};
pub use portfolio::{handle_portfolio_command, PortfolioArgs};
pub use report::{handle_dashboard_command, handle_report_command, OutputArgs, ReportCommands};
pub use wallet::handle_wallet_command;
