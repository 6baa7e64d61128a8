//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the observed sample set (`SampleSet`)
//! - run configuration (`FitConfig`, `DisplayMode`, `ChartTarget`)
//! - the render-only chart description (`Chart`) and its labels

pub mod types;

pub use types::*;
