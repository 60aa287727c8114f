//! Core data structures for tabular numeric data.

mod table;

pub use table::{Table, TableBuilder, ValueLayout};
