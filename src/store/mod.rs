/// Storage module for ptable
///
/// Holds the data model and the in-memory record container.
/// Everything lives in process memory; nothing survives a restart.

pub mod models;
pub mod table;

pub use models::{Element, ElementInput};
pub use table::PeriodicTable;
