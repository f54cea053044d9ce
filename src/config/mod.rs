//! Configuration module for the SimpleBudget client
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (API base URL, display preferences)

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;
