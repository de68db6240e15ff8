//! Configuration module for Fintrix
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FintrixPaths;
pub use settings::Settings;
