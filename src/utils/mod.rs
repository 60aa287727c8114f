//! Utility functions for parameter estimation.

pub mod optimization;

pub use optimization::{bracket_minimum, brent_minimize, Bracket, BrentConfig, BrentResult};
