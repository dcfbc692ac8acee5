//! Core data models for PennyWise
//!
//! This module contains the value objects that make up the finance domain:
//! entry types, tags, dates, amounts, descriptions and the entries built
//! from them. Every type here is validated on construction and immutable
//! afterwards.

pub mod date;
pub mod description;
pub mod entry;
pub mod entry_type;
pub mod ids;
pub mod money;
pub mod tag;

pub use date::Date;
pub use description::Description;
pub use entry::{Entry, EntryChanges, EntryValidationError};
pub use entry_type::EntryType;
pub use ids::EntryId;
pub use money::Money;
pub use tag::{Tag, TagError};
