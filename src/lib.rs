//! Parcelsort - Package dispatch classifier
//!
//! Classifies a package into one of three handling categories based on its
//! dimensions and mass, for use by a downstream automated sorting line.
//!
//! # Architecture
//!
//! Classification is a pure function over four measurements:
//! 1. Coerce each input to a float (numbers pass through, text is parsed)
//! 2. Reject negative values
//! 3. Derive two predicates (bulky, heavy) against fixed limits
//! 4. Dispatch through a fixed truth table
//!
//! # Example
//!
//! ```
//! use parcelsort::{classify, Classification};
//!
//! let result = classify(100, 100, 100, 10).unwrap();
//! assert_eq!(result, Classification::Special);
//!
//! // Textual inputs are coerced the same way
//! let result = classify("150", "50", "50", "20").unwrap();
//! assert_eq!(result, Classification::Rejected);
//! ```

pub use error::Error;

// Handling categories and the dispatch truth table
pub mod classification;

// Raw scalar values and unvalidated package records
pub mod input;

// Validated measurements and the bulky/heavy predicates
pub mod package;


pub use classification::Classification;
pub use input::{PackageInput, Value};
pub use package::PackageMeasurement;

mod error {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Error {
        /// An input could not be interpreted as a number.
        TypeConversion(String),
        /// An input was numeric but negative.
        InvalidValue(String),
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Error::TypeConversion(e) => write!(f, "type conversion error: {}", e),
                Error::InvalidValue(e) => write!(f, "invalid value error: {}", e),
            }
        }
    }

    impl std::error::Error for Error {}
}

/// Classify a package from its dimensions and mass.
///
/// Width, height and length are in centimeters, mass is in kilograms. Each
/// argument may be a native number or text parseable as one, and must be
/// non-negative after coercion.
///
/// Coercion failures take precedence over negativity: if any input is not
/// interpretable as a number, the result is [`Error::TypeConversion`]
/// regardless of the other inputs.
pub fn classify<W, H, L, M>(
    width: W,
    height: H,
    length: L,
    mass: M,
) -> Result<Classification, Error>
where
    W: Into<Value>,
    H: Into<Value>,
    L: Into<Value>,
    M: Into<Value>,
{
    let measurement = PackageMeasurement::from_values(
        &width.into(),
        &height.into(),
        &length.into(),
        &mass.into(),
    )?;
    Ok(measurement.classify())
}
