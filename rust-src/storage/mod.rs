//! Storage layer for the daily usage log.

mod entry_store;

pub use entry_store::{sum_in_range, EntryStore};
