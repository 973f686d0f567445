//! Unit system bound to a display schema

use serde::{Serialize, Deserialize};
use crate::{Schema, TranslateResult, Unit};
use crate::parse::{parse_quantity, ParsedQuantity, QuantityParseError};
use crate::translate::translate;

/// Translates and parses quantities under one schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitSystem {
    schema: Schema,
}

impl UnitSystem {
    pub fn new(schema: Schema) -> Self {
        UnitSystem { schema }
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn set_schema(&mut self, schema: Schema) {
        self.schema = schema;
    }

    pub fn translate(&self, value: f64, unit: Unit) -> TranslateResult {
        translate(self.schema, value, unit)
    }

    /// Display text of a base-unit magnitude, e.g. `"2.000in"`
    pub fn format(&self, value: f64, unit: Unit, decimals: usize) -> String {
        self.translate(value, unit).format(decimals)
    }

    /// Parse user input; symbols of every schema are accepted
    pub fn parse(&self, text: &str) -> Result<ParsedQuantity, QuantityParseError> {
        parse_quantity(text)
    }

    /// Parse user input and convert it to the base unit
    pub fn to_base(&self, text: &str) -> Result<(f64, Unit), QuantityParseError> {
        let parsed = self.parse(text)?;
        Ok((parsed.base_value(), parsed.unit))
    }
}
