//! Quantity string parsing - "25.4mm", "90°", "1e3in"

use serde::Serialize;
use thiserror::Error;
use tracing::trace;
use mayo_core::MayoError;
use crate::{TranslateResult, Unit};
use crate::tables::find_symbol;

/// Successfully parsed quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedQuantity {
    /// Number as written, with the matched symbol and its factor
    pub result: TranslateResult,
    /// Unit of the matched symbol, `Unit::None` for a bare number
    pub unit: Unit,
}

impl ParsedQuantity {
    /// Magnitude converted to the base unit
    pub fn base_value(&self) -> f64 {
        self.result.base_value()
    }

    /// Unit of a parse outcome, `Unit::None` on failure
    pub fn unit_or_none(parsed: &Result<ParsedQuantity, QuantityParseError>) -> Unit {
        parsed.as_ref().map_or(Unit::None, |p| p.unit)
    }
}

/// Why a quantity string could not be parsed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityParseError {
    #[error("no leading number in '{0}'")]
    InvalidNumber(String),

    #[error("unknown unit symbol '{symbol}' after {value}")]
    UnknownUnit { value: f64, symbol: String },
}

impl From<QuantityParseError> for MayoError {
    fn from(err: QuantityParseError) -> Self {
        match err {
            QuantityParseError::InvalidNumber(input) => {
                MayoError::parse_error(format!("no leading number in '{}'", input))
                    .with_input(input)
            }
            QuantityParseError::UnknownUnit { symbol, .. } => MayoError::unknown_unit(&symbol),
        }
    }
}

/// Split a leading floating-point literal off `text`
///
/// Leading whitespace is not skipped and neither is a leading `+`, only `-`
/// may sign the literal. Decimal and exponent forms are accepted; an
/// exponent marker without digits is left in the suffix.
pub fn split_number(text: &str) -> Option<(f64, &str)> {
    if text.starts_with('+') {
        return None;
    }
    match fast_float2::parse_partial::<f64, _>(text) {
        // A literal is ASCII so `consumed` always lands on a char boundary
        Ok((value, consumed)) if consumed > 0 => Some((value, &text[consumed..])),
        _ => None,
    }
}

/// Parse a quantity string into its value, symbol and factor
///
/// The suffix after the number must exactly match a symbol of the SI table
/// or, failing that, of the Imperial UK table. A bare number parses with no
/// symbol, factor 1 and `Unit::None`.
pub fn parse_quantity(text: &str) -> Result<ParsedQuantity, QuantityParseError> {
    let (value, suffix) = split_number(text).ok_or_else(|| {
        trace!(input = text, "no leading number");
        QuantityParseError::InvalidNumber(text.to_string())
    })?;

    if suffix.is_empty() {
        return Ok(ParsedQuantity { result: TranslateResult::unitless(value), unit: Unit::None });
    }

    match find_symbol(suffix) {
        Some(entry) => Ok(ParsedQuantity {
            result: TranslateResult::new(value, entry.symbol, entry.factor),
            unit: entry.unit,
        }),
        None => {
            trace!(input = text, symbol = suffix, "unknown unit symbol");
            Err(QuantityParseError::UnknownUnit { value, symbol: suffix.to_string() })
        }
    }
}
