//! Curve fitting.
//!
//! Responsibilities:
//!
//! - solve the least-squares polynomial fit
//! - sample the fitted polynomial densely for plotting

pub mod fitter;
pub mod sampler;

pub use fitter::*;
pub use sampler::*;
