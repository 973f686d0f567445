//! Typed magnitudes expressed in their base unit

use serde::{Serialize, Deserialize};
use crate::Unit;

/// One degree, in radians
pub const DEGREE: f64 = std::f64::consts::PI / 180.;

/// One meter, in millimeters
pub const METER: f64 = 1000.;

/// One inch, in millimeters
pub const INCH: f64 = 25.4;

macro_rules! base_quantity {
    ($(#[$doc:meta])* $name:ident, $unit:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        pub struct $name(pub f64);

        impl $name {
            pub const UNIT: Unit = $unit;

            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                $name(value)
            }
        }
    };
}

base_quantity!(
    /// Length in millimeters
    Length, Unit::Length
);
base_quantity!(
    /// Angle in radians
    Angle, Unit::Angle
);
base_quantity!(
    /// Volume in cubic millimeters
    Volume, Unit::Volume
);
base_quantity!(
    /// Velocity in millimeters per second
    Velocity, Unit::Velocity
);
base_quantity!(
    /// Duration in seconds
    Time, Unit::Time
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constants() {
        assert_relative_eq!(180. * DEGREE, std::f64::consts::PI);
        assert_eq!(METER, 1000.);
    }

    #[test]
    fn test_unit_tags() {
        assert_eq!(Length::UNIT, Unit::Length);
        assert_eq!(Angle::UNIT, Unit::Angle);
        assert_eq!(Volume::UNIT, Unit::Volume);
        assert_eq!(Velocity::UNIT, Unit::Velocity);
        assert_eq!(Time::UNIT, Unit::Time);
    }
}
