//! The fixed observation set the program fits.

use crate::domain::SampleSet;
use crate::error::AppError;

/// Independent variable samples.
pub const DATA_X: [f64; 4] = [16.0, 32.0, 64.0, 128.0];

/// Observed values, paired with `DATA_X` by index.
pub const DATA_Y: [f64; 4] = [38.6, 77.42, 149.93, 297.0];

/// Build the sample set from the embedded constants.
pub fn literal_samples() -> Result<SampleSet, AppError> {
    SampleSet::new(DATA_X.to_vec(), DATA_Y.to_vec())
}
