//! Configuration module for PennyWise
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PennywisePaths;
pub use settings::Settings;
