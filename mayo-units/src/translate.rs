//! Schema translation: base-unit magnitude to display value and symbol

use std::fmt;
use serde::Serialize;
use crate::{Schema, Unit};
use crate::quantity::INCH;
use crate::tables::{CUBIC_INCH, INCH_PER_MINUTE, SQUARE_INCH};

/// Displayable magnitude with the symbol and factor that produced it
///
/// `value * factor` gives back the magnitude in the base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TranslateResult {
    pub value: f64,
    pub symbol: Option<&'static str>,
    pub factor: f64,
}

impl TranslateResult {
    pub const EMPTY: TranslateResult = TranslateResult { value: 0., symbol: None, factor: 0. };

    pub const fn new(value: f64, symbol: &'static str, factor: f64) -> Self {
        TranslateResult { value, symbol: Some(symbol), factor }
    }

    pub const fn unitless(value: f64) -> Self {
        TranslateResult { value, symbol: None, factor: 1. }
    }

    /// Magnitude expressed in the base unit
    pub fn base_value(&self) -> f64 {
        self.value * self.factor
    }

    pub fn symbol_or_empty(&self) -> &'static str {
        self.symbol.unwrap_or("")
    }

    /// Text with a fixed number of decimals, e.g. `"1.000in"`
    pub fn format(&self, decimals: usize) -> String {
        format!("{:.*}{}", decimals, self.value, self.symbol_or_empty())
    }
}

impl Default for TranslateResult {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for TranslateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol {
            Some(symbol) if !symbol.is_empty() => write!(f, "{} {}", self.value, symbol),
            _ => write!(f, "{}", self.value),
        }
    }
}

/// Translate `value`, expressed in the base unit of `unit`, for display under `schema`
pub fn translate(schema: Schema, value: f64, unit: Unit) -> TranslateResult {
    match schema {
        Schema::SI => translate_si(value, unit),
        Schema::ImperialUK => translate_imperial_uk(value, unit),
    }
}

fn fallback(value: f64, unit: Unit) -> TranslateResult {
    TranslateResult::new(value, unit.base_symbol(), 1.)
}

// Internal magnitudes already use the SI display units
fn translate_si(value: f64, unit: Unit) -> TranslateResult {
    match unit {
        Unit::Length => TranslateResult::new(value, "mm", 1.),
        Unit::Area => TranslateResult::new(value, "mm²", 1.),
        Unit::Volume => TranslateResult::new(value, "mm³", 1.),
        Unit::Velocity => TranslateResult::new(value, "mm/s", 1.),
        Unit::Density => TranslateResult::new(value, "kg/m³", 1.),
        Unit::Pressure => TranslateResult::new(value, "kPa", 1.),
        _ => fallback(value, unit),
    }
}

fn translate_imperial_uk(value: f64, unit: Unit) -> TranslateResult {
    match unit {
        Unit::Length => TranslateResult::new(value / INCH, "in", INCH),
        Unit::Area => TranslateResult::new(value / SQUARE_INCH, "in²", SQUARE_INCH),
        Unit::Volume => TranslateResult::new(value / CUBIC_INCH, "in³", CUBIC_INCH),
        Unit::Velocity => TranslateResult::new(value / INCH_PER_MINUTE, "in/min", INCH_PER_MINUTE),
        _ => fallback(value, unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_si_is_relabeling() {
        let cases = [
            (Unit::Length, "mm"),
            (Unit::Area, "mm²"),
            (Unit::Volume, "mm³"),
            (Unit::Velocity, "mm/s"),
            (Unit::Density, "kg/m³"),
            (Unit::Pressure, "kPa"),
        ];
        for (unit, symbol) in cases {
            let res = translate(Schema::SI, 123.456, unit);
            assert_eq!(res, TranslateResult::new(123.456, symbol, 1.), "{}", unit);
        }
    }

    #[test]
    fn test_si_fallback_uses_base_symbol() {
        assert_eq!(translate(Schema::SI, 3., Unit::Angle), TranslateResult::new(3., "rad", 1.));
        assert_eq!(translate(Schema::SI, 3., Unit::Mass), TranslateResult::new(3., "kg", 1.));
        assert_eq!(translate(Schema::SI, 3., Unit::None), TranslateResult::new(3., "", 1.));
    }

    #[test]
    fn test_imperial_length() {
        let res = translate(Schema::ImperialUK, 50.8, Unit::Length);
        assert_relative_eq!(res.value, 2.);
        assert_eq!(res.symbol, Some("in"));
        assert_eq!(res.factor, 25.4);
    }

    #[test]
    fn test_imperial_velocity() {
        let res = translate(Schema::ImperialUK, 1., Unit::Velocity);
        assert_relative_eq!(res.value, 1. / (25.4 / 60.));
        assert_eq!(res.symbol, Some("in/min"));
        assert_relative_eq!(res.factor, 25.4 / 60.);
    }

    #[test]
    fn test_imperial_area_and_volume() {
        let area = translate(Schema::ImperialUK, 645.16, Unit::Area);
        assert_relative_eq!(area.value, 1., epsilon = 1e-12);
        assert_eq!(area.symbol, Some("in²"));
        assert_relative_eq!(area.base_value(), 645.16, epsilon = 1e-9);

        let volume = translate(Schema::ImperialUK, 16387.064 * 3., Unit::Volume);
        assert_relative_eq!(volume.value, 3.);
        assert_eq!(volume.symbol, Some("in³"));
    }

    #[test]
    fn test_imperial_fallback() {
        let res = translate(Schema::ImperialUK, 1.5, Unit::Pressure);
        assert_eq!(res, TranslateResult::new(1.5, "kg/m.s²", 1.));
        let res = translate(Schema::ImperialUK, 1.5, Unit::Angle);
        assert_eq!(res, TranslateResult::new(1.5, "rad", 1.));
    }

    #[test]
    fn test_factor_inverts_translation() {
        for schema in Schema::ALL {
            for unit in Unit::ALL {
                let res = translate(schema, 42., unit);
                assert_relative_eq!(res.base_value(), 42., epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_translate_is_idempotent() {
        let first = translate(Schema::ImperialUK, 10., Unit::Volume);
        let second = translate(Schema::ImperialUK, 10., Unit::Volume);
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_and_format() {
        assert_eq!(TranslateResult::new(2., "in", 25.4).to_string(), "2 in");
        assert_eq!(TranslateResult::unitless(42.).to_string(), "42");
        assert_eq!(TranslateResult::new(1., "in", 25.4).format(3), "1.000in");
    }
}
