//! Input data for the fit.

pub mod sample;

pub use sample::*;
