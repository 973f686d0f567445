//! Physical dimensions handled by the unit system

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// Physical dimension of a quantity
///
/// Magnitudes are always held in the base unit of their dimension:
/// millimeter for `Length`, radian for `Angle`, cubic millimeter for
/// `Volume`, millimeter per second for `Velocity`, second for `Time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    None,
    // Base
    Length,
    Mass,
    Time,
    ElectricCurrent,
    ThermodynamicTemperature,
    AmountOfSubstance,
    LuminousIntensity,
    Angle,
    // Derived
    Area,
    Volume,
    Velocity,
    Acceleration,
    Density,
    Pressure,
}

impl Unit {
    pub const ALL: [Unit; 15] = [
        Unit::None,
        Unit::Length,
        Unit::Mass,
        Unit::Time,
        Unit::ElectricCurrent,
        Unit::ThermodynamicTemperature,
        Unit::AmountOfSubstance,
        Unit::LuminousIntensity,
        Unit::Angle,
        Unit::Area,
        Unit::Volume,
        Unit::Velocity,
        Unit::Acceleration,
        Unit::Density,
        Unit::Pressure,
    ];

    /// Canonical symbol, used when a schema has no display rule for the unit
    pub fn base_symbol(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Length => "m",
            Unit::Mass => "kg",
            Unit::Time => "s",
            Unit::ElectricCurrent => "A",
            Unit::ThermodynamicTemperature => "K",
            Unit::AmountOfSubstance => "mol",
            Unit::LuminousIntensity => "cd",
            Unit::Angle => "rad",
            Unit::Area => "m²",
            Unit::Volume => "m³",
            Unit::Velocity => "m/s",
            Unit::Acceleration => "m/s²",
            Unit::Density => "kg/m³",
            Unit::Pressure => "kg/m.s²",
        }
    }

    /// Identifier used on the function/JSON surface
    pub fn name(self) -> &'static str {
        match self {
            Unit::None => "none",
            Unit::Length => "length",
            Unit::Mass => "mass",
            Unit::Time => "time",
            Unit::ElectricCurrent => "electric_current",
            Unit::ThermodynamicTemperature => "thermodynamic_temperature",
            Unit::AmountOfSubstance => "amount_of_substance",
            Unit::LuminousIntensity => "luminous_intensity",
            Unit::Angle => "angle",
            Unit::Area => "area",
            Unit::Volume => "volume",
            Unit::Velocity => "velocity",
            Unit::Acceleration => "acceleration",
            Unit::Density => "density",
            Unit::Pressure => "pressure",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unknown unit name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit: {0}")]
pub struct UnknownUnitName(pub String);

impl FromStr for Unit {
    type Err = UnknownUnitName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Unit::ALL.iter()
            .copied()
            .find(|u| u.name() == wanted)
            .ok_or_else(|| UnknownUnitName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_unit_has_base_symbol() {
        for unit in Unit::ALL {
            if unit != Unit::None {
                assert!(!unit.base_symbol().is_empty(), "{} has no symbol", unit);
            }
        }
        assert_eq!(Unit::None.base_symbol(), "");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("length".parse::<Unit>(), Ok(Unit::Length));
        assert_eq!("Electric Current".parse::<Unit>(), Ok(Unit::ElectricCurrent));
        assert_eq!("amount-of-substance".parse::<Unit>(), Ok(Unit::AmountOfSubstance));
        assert!("furlong".parse::<Unit>().is_err());
    }

    #[test]
    fn test_name_round_trips() {
        for unit in Unit::ALL {
            assert_eq!(unit.name().parse::<Unit>(), Ok(unit));
        }
    }
}
