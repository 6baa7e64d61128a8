//! Reporting utilities: formatted terminal output for the fit.

pub mod format;

pub use format::*;
