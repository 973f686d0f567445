//! Mayo Units - Display units and quantity parsing
//!
//! Magnitudes are stored in base units (mm, rad, mm³, mm/s, s). This crate
//! turns them into display values for a measurement schema and reads
//! user-typed quantity strings back.
//!
//! - `translate`: base magnitude to `{value, symbol, factor}` for SI or Imperial UK
//! - `parse_quantity`: "25.4mm" to `{value, symbol, factor}` plus its `Unit`
//! - `named`: fixed-unit helpers (`degrees`, `meters`, ...) that skip the schema
//! - `UnitSystem`: the above bound to one schema

mod unit;
mod schema;
mod translate;
mod parse;
mod system;
mod helpers;
pub mod quantity;
pub mod tables;
pub mod named;
pub mod functions;

pub use unit::{Unit, UnknownUnitName};
pub use schema::{Schema, UnknownSchema};
pub use translate::{translate, TranslateResult};
pub use parse::{parse_quantity, split_number, ParsedQuantity, QuantityParseError};
pub use system::UnitSystem;
pub use tables::UnitInfo;

use mayo_plugin::PluginRegistry;

/// Load unit functions into registry
pub fn load_units_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Conversion
        .with_function(functions::Translate)
        .with_function(functions::DisplayAs)
        .with_function(functions::ToBase)

        // Parsing
        .with_function(functions::ParseQuantity)
        .with_function(functions::UnitSymbols)
}

/// Registry holding every unit function
pub fn units_registry() -> PluginRegistry {
    load_units_library(PluginRegistry::new())
}
