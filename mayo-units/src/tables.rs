//! Symbol tables: which text symbols denote which unit, and at what scale
//!
//! Lookups scan in table order and stop at the first match. Some symbols
//! appear more than once (`mm`, `m`, `kPa` in the SI table); only the first
//! occurrence is ever reachable.

use serde::Serialize;
use crate::{Schema, Unit};
use crate::quantity::{DEGREE, INCH, METER};

/// A display symbol and its scale relative to the base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitInfo {
    pub unit: Unit,
    pub symbol: &'static str,
    /// `base_value = displayed_value * factor`
    pub factor: f64,
}

const fn info(unit: Unit, symbol: &'static str, factor: f64) -> UnitInfo {
    UnitInfo { unit, symbol, factor }
}

/// Square inch, in square millimeters
pub const SQUARE_INCH: f64 = INCH * INCH;

/// Cubic inch, in cubic millimeters
pub const CUBIC_INCH: f64 = 16387.064;

/// Inch per minute, in millimeters per second
pub const INCH_PER_MINUTE: f64 = INCH / 60.;

pub static SI_UNITS: [UnitInfo; 26] = [
    // Length
    info(Unit::Length, "mm", 1.),
    info(Unit::Length, "m", METER),
    info(Unit::Length, "nm", 1e-6),
    info(Unit::Length, "µm", 0.001),
    info(Unit::Length, "mm", 1.),
    info(Unit::Length, "m", METER),
    info(Unit::Length, "km", 1e6),
    // Angle
    info(Unit::Angle, "rad", 1.),
    info(Unit::Angle, "deg", DEGREE),
    info(Unit::Angle, "°", DEGREE),
    // Area
    info(Unit::Area, "mm²", 1.),
    info(Unit::Area, "m²", 1e6),
    info(Unit::Area, "km²", 1e12),
    // Volume
    info(Unit::Volume, "mm³", 1.),
    info(Unit::Volume, "m³", 1e9),
    info(Unit::Volume, "km³", 1e18),
    // Velocity
    info(Unit::Velocity, "mm/s", 1.),
    // Density
    info(Unit::Density, "kg/m³", 1.),
    info(Unit::Density, "g/m³", 1000.),
    info(Unit::Density, "g/cm³", 0.001),
    info(Unit::Density, "g/mm³", 1e-6),
    // Pressure
    info(Unit::Pressure, "kPa", 1.),
    info(Unit::Pressure, "Pa", 0.001),
    info(Unit::Pressure, "kPa", 1.),
    info(Unit::Pressure, "MPa", 1000.),
    info(Unit::Pressure, "GPa", 1e6),
];

pub static IMPERIAL_UK_UNITS: [UnitInfo; 9] = [
    // Length
    info(Unit::Length, "in", INCH),
    info(Unit::Length, "thou", 0.0254),
    info(Unit::Length, "\"", INCH),
    info(Unit::Length, "'", 304.8),
    info(Unit::Length, "yd", 914.4),
    info(Unit::Length, "mi", 1609344.),
    // Others
    info(Unit::Area, "in²", SQUARE_INCH),
    info(Unit::Volume, "in³", CUBIC_INCH),
    info(Unit::Velocity, "in/min", INCH_PER_MINUTE),
];

/// Symbol table of a schema, in lookup order
pub fn table(schema: Schema) -> &'static [UnitInfo] {
    match schema {
        Schema::SI => &SI_UNITS,
        Schema::ImperialUK => &IMPERIAL_UK_UNITS,
    }
}

/// All table entries: SI first, then Imperial UK
pub fn all_entries() -> impl Iterator<Item = &'static UnitInfo> {
    Schema::ALL.into_iter().flat_map(|schema| table(schema).iter())
}

/// First table entry whose symbol is exactly `symbol`
pub fn find_symbol(symbol: &str) -> Option<&'static UnitInfo> {
    all_entries().find(|entry| entry.symbol == symbol)
}

/// Distinct symbols denoting `unit`, in lookup order
pub fn symbols_for(unit: Unit) -> Vec<&'static str> {
    let mut symbols: Vec<&'static str> = Vec::new();
    for entry in all_entries().filter(|e| e.unit == unit) {
        if !symbols.contains(&entry.symbol) {
            symbols.push(entry.symbol);
        }
    }
    symbols
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_duplicates_are_kept() {
        let mm = SI_UNITS.iter().filter(|e| e.symbol == "mm").count();
        let kpa = SI_UNITS.iter().filter(|e| e.symbol == "kPa").count();
        assert_eq!(mm, 2);
        assert_eq!(kpa, 2);
    }

    #[test]
    fn test_first_match_wins() {
        let m = find_symbol("m").unwrap();
        assert_eq!(m.unit, Unit::Length);
        assert_eq!(m.factor, 1000.);
        assert!(std::ptr::eq(m, &SI_UNITS[1]));

        let kpa = find_symbol("kPa").unwrap();
        assert!(std::ptr::eq(kpa, &SI_UNITS[21]));
    }

    #[test]
    fn test_si_scanned_before_imperial() {
        assert!(std::ptr::eq(find_symbol("in").unwrap(), &IMPERIAL_UK_UNITS[0]));
        assert_eq!(find_symbol("rad").unwrap().unit, Unit::Angle);
    }

    #[test]
    fn test_find_symbol_is_exact() {
        assert!(find_symbol("MM").is_none());
        assert!(find_symbol(" mm").is_none());
        assert!(find_symbol("").is_none());
    }

    #[test]
    fn test_imperial_factors() {
        assert_relative_eq!(find_symbol("in²").unwrap().factor, 645.16, epsilon = 1e-9);
        assert_eq!(find_symbol("\"").unwrap().factor, 25.4);
        assert_eq!(find_symbol("'").unwrap().factor, 304.8);
        assert_relative_eq!(find_symbol("in/min").unwrap().factor, 25.4 / 60.);
    }

    #[test]
    fn test_symbols_for() {
        assert_eq!(symbols_for(Unit::Length),
            vec!["mm", "m", "nm", "µm", "km", "in", "thou", "\"", "'", "yd", "mi"]);
        assert_eq!(symbols_for(Unit::Angle), vec!["rad", "deg", "°"]);
        assert!(symbols_for(Unit::Mass).is_empty());
    }

    #[test]
    fn test_table_dispatch() {
        assert_eq!(table(Schema::SI).len(), 26);
        assert_eq!(table(Schema::ImperialUK).len(), 9);
        assert_eq!(all_entries().count(), 35);
    }
}
