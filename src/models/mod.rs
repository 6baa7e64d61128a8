//! Polynomial model implementation.
//!
//! The model is a small value type with pure functions so that the fitting and
//! sampling code can stay generic over the degree.

pub mod polynomial;

pub use polynomial::*;
