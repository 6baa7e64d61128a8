//! `quadfit` library crate.
//!
//! The binary (`quadfit`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the chart sinks can be swapped (terminal view vs. plain text)

pub mod app;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod tui;
