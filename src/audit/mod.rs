//! Audit logging for PennyWise
//!
//! Every change to the entry book (create, update, delete, clear) is
//! appended to a line-delimited JSON log with the entry state before and
//! after the change.

mod entry;
mod logger;

pub use entry::{AuditRecord, Operation};
pub use logger::AuditLogger;
