//! PennyWise - command-line income and expenditure tracker
//!
//! This library provides the core functionality for the PennyWise
//! application. Users record income and expenditure entries, tag them from
//! a fixed vocabulary per entry type, and ask for summaries over all entries
//! or a single day.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `parser`: Tokenizing and validating command lines into commands
//! - `commands`: Command objects and their execution
//! - `models`: Core data models (entries, tags, dates, amounts)
//! - `storage`: JSON file storage layer
//! - `reports`: Summary totals
//! - `display`: Terminal formatting
//! - `audit`: Audit logging system
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use pennywise::config::{PennywisePaths, Settings};
//! use pennywise::parser::PennyParser;
//! use pennywise::storage::Storage;
//!
//! let paths = PennywisePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! let command = PennyParser::parse_command("add t/e n/Lunch a/12.50 d/10-10-2023 c/Food")?;
//! println!("{}", command.execute(&mut storage, &settings)?.feedback);
//! ```

pub mod audit;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod parser;
pub mod reports;
pub mod storage;

pub use error::PennyError;
