//! Validated package measurements and the bulky/heavy predicates.

use crate::input::Value;
use crate::{Classification, Error};

/// A package is bulky when its volume reaches this many cubic centimeters.
pub const BULKY_VOLUME: f64 = 1_000_000.0;

/// A package is bulky when any single dimension reaches this many centimeters.
pub const BULKY_DIMENSION: f64 = 150.0;

/// A package is heavy when its mass reaches this many kilograms.
pub const HEAVY_MASS: f64 = 20.0;

/// Validated package measurements.
///
/// All four values are non-negative; construction goes through [`new`] or
/// [`from_values`], so a value of this type is always classifiable.
///
/// [`new`]: PackageMeasurement::new
/// [`from_values`]: PackageMeasurement::from_values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackageMeasurement {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

impl PackageMeasurement {
    /// Validate already-numeric measurements.
    ///
    /// Width, height and length are in centimeters, mass in kilograms.
    /// Returns [`Error::InvalidValue`] when any value is negative.
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self, Error> {
        for (name, value) in [
            ("width", width),
            ("height", height),
            ("length", length),
            ("mass", mass),
        ] {
            if value < 0.0 {
                return Err(Error::InvalidValue(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(Self {
            width,
            height,
            length,
            mass,
        })
    }

    /// Coerce raw values to floats, then validate.
    ///
    /// Coercion runs over all four values before any negativity check, so a
    /// non-numeric input always surfaces as [`Error::TypeConversion`] even
    /// when another input is negative.
    pub fn from_values(
        width: &Value,
        height: &Value,
        length: &Value,
        mass: &Value,
    ) -> Result<Self, Error> {
        let width = width.to_f64()?;
        let height = height.to_f64()?;
        let length = length.to_f64()?;
        let mass = mass.to_f64()?;

        Self::new(width, height, length, mass)
    }

    /// Width in centimeters.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in centimeters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Length in centimeters.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Mass in kilograms.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Volume in cubic centimeters.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    /// Whether the package is too large for the standard line.
    ///
    /// Both limits are inclusive: a volume of exactly [`BULKY_VOLUME`] or a
    /// single dimension of exactly [`BULKY_DIMENSION`] counts as bulky.
    pub fn is_bulky(&self) -> bool {
        self.volume() >= BULKY_VOLUME
            || self.width >= BULKY_DIMENSION
            || self.height >= BULKY_DIMENSION
            || self.length >= BULKY_DIMENSION
    }

    /// Whether the package is too heavy for the standard line. Inclusive limit.
    pub fn is_heavy(&self) -> bool {
        self.mass >= HEAVY_MASS
    }

    /// Classify the package through the dispatch truth table.
    pub fn classify(&self) -> Classification {
        Classification::from_flags(self.is_bulky(), self.is_heavy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(width: f64, height: f64, length: f64, mass: f64) -> PackageMeasurement {
        PackageMeasurement::new(width, height, length, mass).unwrap()
    }

    #[test]
    fn test_volume() {
        assert_eq!(measurement(10.0, 10.0, 10.0, 0.0).volume(), 1000.0);
        assert_eq!(measurement(0.0, 10.0, 10.0, 0.0).volume(), 0.0);
    }

    #[test]
    fn test_bulky_volume_limit_is_inclusive() {
        // 100 x 100 x 100 sits exactly on the volume limit
        assert!(measurement(100.0, 100.0, 100.0, 0.0).is_bulky());
        assert!(!measurement(100.0, 100.0, 99.99, 0.0).is_bulky());
    }

    #[test]
    fn test_bulky_dimension_limit_is_inclusive() {
        assert!(measurement(150.0, 1.0, 1.0, 0.0).is_bulky());
        assert!(!measurement(149.99, 1.0, 1.0, 0.0).is_bulky());
    }

    #[test]
    fn test_bulky_triggers_on_any_dimension() {
        assert!(measurement(150.0, 50.0, 50.0, 0.0).is_bulky());
        assert!(measurement(50.0, 150.0, 50.0, 0.0).is_bulky());
        assert!(measurement(50.0, 50.0, 150.0, 0.0).is_bulky());
    }

    #[test]
    fn test_not_bulky() {
        assert!(!measurement(50.0, 50.0, 50.0, 0.0).is_bulky());
        assert!(!measurement(0.0, 0.0, 0.0, 0.0).is_bulky());
    }

    #[test]
    fn test_heavy_limit_is_inclusive() {
        assert!(measurement(1.0, 1.0, 1.0, 20.0).is_heavy());
        assert!(!measurement(1.0, 1.0, 1.0, 19.99).is_heavy());
        assert!(!measurement(1.0, 1.0, 1.0, 0.0).is_heavy());
    }

    #[test]
    fn test_new_rejects_each_negative_field() {
        assert!(PackageMeasurement::new(-1.0, 1.0, 1.0, 1.0).is_err());
        assert!(PackageMeasurement::new(1.0, -1.0, 1.0, 1.0).is_err());
        assert!(PackageMeasurement::new(1.0, 1.0, -1.0, 1.0).is_err());
        assert!(PackageMeasurement::new(1.0, 1.0, 1.0, -1.0).is_err());
    }

    #[test]
    fn test_new_accepts_zero() {
        assert!(PackageMeasurement::new(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_negative_error_names_the_field() {
        let err = PackageMeasurement::new(1.0, 1.0, 1.0, -5.0).unwrap_err();
        match err {
            Error::InvalidValue(msg) => assert!(msg.contains("mass")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_values_coerces_text() {
        let m = PackageMeasurement::from_values(
            &Value::from("100"),
            &Value::from(100.0),
            &Value::from("100"),
            &Value::from("10"),
        )
        .unwrap();
        assert_eq!(m.volume(), 1_000_000.0);
        assert!(!m.is_heavy());
    }

    #[test]
    fn test_from_values_conversion_precedes_negativity() {
        // Width is negative but mass is unparseable; conversion wins
        let err = PackageMeasurement::from_values(
            &Value::from(-10.0),
            &Value::from(50.0),
            &Value::from(50.0),
            &Value::from("abc"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::TypeConversion(_)));
    }

    #[test]
    fn test_from_values_negative_after_coercion() {
        let err = PackageMeasurement::from_values(
            &Value::from("-10"),
            &Value::from(50.0),
            &Value::from(50.0),
            &Value::from(10.0),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
    }

    #[test]
    fn test_classify_dispatch() {
        assert_eq!(
            measurement(10.0, 10.0, 10.0, 5.0).classify(),
            Classification::Standard
        );
        assert_eq!(
            measurement(150.0, 50.0, 50.0, 10.0).classify(),
            Classification::Special
        );
        assert_eq!(
            measurement(10.0, 10.0, 10.0, 20.0).classify(),
            Classification::Special
        );
        assert_eq!(
            measurement(150.0, 50.0, 50.0, 20.0).classify(),
            Classification::Rejected
        );
    }
}
