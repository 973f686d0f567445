//! Unit functions exposed through the plugin registry

use mayo_plugin::prelude::*;
use crate::helpers::{extract_number, extract_text, extract_unit, parsed_to_value, resolve_schema, result_to_value};
use crate::named;
use crate::parse::parse_quantity;
use crate::quantity::{Angle, Length, Time, Velocity, Volume};
use crate::tables::symbols_for;
use crate::translate::translate;

// ============ translate ============

pub struct Translate;

static TRANSLATE_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Magnitude in the base unit (mm, rad, mm³, ...)"),
    ArgMeta::required("unit", "Text", "Dimension name, e.g. \"length\""),
    ArgMeta::optional("schema", "Text", "\"si\" or \"imperial_uk\"", "active schema"),
];

static TRANSLATE_EXAMPLES: [&str; 3] = [
    "translate(50.8, \"length\", \"imperial_uk\") → {value: 2, symbol: in, factor: 25.4}",
    "translate(1000, \"volume\") → {value: 1000, symbol: mm³, factor: 1}",
    "translate(1.5, \"angle\") → {value: 1.5, symbol: rad, factor: 1}",
];

static TRANSLATE_RELATED: [&str; 2] = ["parse_quantity", "display"];

impl FunctionPlugin for Translate {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "translate",
            description: "Translate a base-unit magnitude into the display unit of a schema",
            usage: "translate(value, unit, [schema])",
            args: &TRANSLATE_ARGS,
            returns: "Object {value, symbol, factor}",
            examples: &TRANSLATE_EXAMPLES,
            category: "units",
            related: &TRANSLATE_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(MayoError::arg_count("translate", 2, args.len()));
        }

        let value = match extract_number(&args[0], "translate", "value") {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };

        let unit = match extract_unit(&args[1], "translate") {
            Ok(u) => u,
            Err(e) => return Value::Error(e),
        };

        let schema = match resolve_schema(args.get(2), ctx, "translate") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        result_to_value(&translate(schema, value, unit))
    }
}

// ============ parse_quantity ============

pub struct ParseQuantity;

static PARSE_QUANTITY_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("text", "Text", "Quantity string like \"25.4mm\""),
];

static PARSE_QUANTITY_EXAMPLES: [&str; 3] = [
    "parse_quantity(\"25.4mm\") → {value: 25.4, symbol: mm, factor: 1, unit: length}",
    "parse_quantity(\"90°\") → {value: 90, symbol: °, factor: 0.01745.., unit: angle}",
    "parse_quantity(\"42\") → {value: 42, symbol: null, factor: 1, unit: none}",
];

static PARSE_QUANTITY_RELATED: [&str; 2] = ["to_base", "unit_symbols"];

impl FunctionPlugin for ParseQuantity {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "parse_quantity",
            description: "Parse a number followed by a unit symbol",
            usage: "parse_quantity(text)",
            args: &PARSE_QUANTITY_ARGS,
            returns: "Object {value, symbol, factor, unit, base_value}",
            examples: &PARSE_QUANTITY_EXAMPLES,
            category: "units",
            related: &PARSE_QUANTITY_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(MayoError::arg_count("parse_quantity", 1, 0));
        }

        let text = match extract_text(&args[0], "parse_quantity", "text") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match parse_quantity(text) {
            Ok(parsed) => parsed_to_value(&parsed),
            Err(e) => Value::Error(MayoError::from(e).in_function("parse_quantity")),
        }
    }
}

// ============ to_base ============

pub struct ToBase;

static TO_BASE_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("text", "Text", "Quantity string like \"2in\""),
];

static TO_BASE_EXAMPLES: [&str; 2] = [
    "to_base(\"2in\") → 50.8",
    "to_base(\"1.5m\") → 1500",
];

static TO_BASE_RELATED: [&str; 2] = ["parse_quantity", "translate"];

impl FunctionPlugin for ToBase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_base",
            description: "Parse a quantity string and convert it to the base unit",
            usage: "to_base(text)",
            args: &TO_BASE_ARGS,
            returns: "Number",
            examples: &TO_BASE_EXAMPLES,
            category: "units",
            related: &TO_BASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(MayoError::arg_count("to_base", 1, 0));
        }

        let text = match extract_text(&args[0], "to_base", "text") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match parse_quantity(text) {
            Ok(parsed) => Value::Number(parsed.base_value()),
            Err(e) => Value::Error(MayoError::from(e).in_function("to_base")),
        }
    }
}

// ============ display ============

pub struct DisplayAs;

static DISPLAY_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Magnitude in the base unit"),
    ArgMeta::required("as", "Text",
        "\"radians\", \"degrees\", \"meters\", \"millimeters\", \"cubic_millimeters\", \"millimeters_per_second\" or \"seconds\""),
];

static DISPLAY_EXAMPLES: [&str; 3] = [
    "display(3.14159, \"degrees\") → {value: 180, symbol: °, factor: 0.01745..}",
    "display(2500, \"meters\") → {value: 2.5, symbol: m, factor: 1000}",
    "display(60, \"seconds\") → {value: 60, symbol: s, factor: 1}",
];

static DISPLAY_RELATED: [&str; 1] = ["translate"];

/// Accepted values of the `as` argument
pub const DISPLAY_UNITS: [&str; 7] = [
    "radians", "degrees", "meters", "millimeters",
    "cubic_millimeters", "millimeters_per_second", "seconds",
];

impl FunctionPlugin for DisplayAs {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "display",
            description: "Show a base-unit magnitude in a fixed unit, ignoring the schema",
            usage: "display(value, as)",
            args: &DISPLAY_ARGS,
            returns: "Object {value, symbol, factor}",
            examples: &DISPLAY_EXAMPLES,
            category: "units",
            related: &DISPLAY_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(MayoError::arg_count("display", 2, args.len()));
        }

        let value = match extract_number(&args[0], "display", "value") {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };

        let target = match extract_text(&args[1], "display", "as") {
            Ok(s) => s.trim().to_lowercase(),
            Err(e) => return Value::Error(e),
        };

        let result = match target.as_str() {
            "radians" => named::radians(Angle(value)),
            "degrees" => named::degrees(Angle(value)),
            "meters" => named::meters(Length(value)),
            "millimeters" => named::millimeters(Length(value)),
            "cubic_millimeters" => named::cubic_millimeters(Volume(value)),
            "millimeters_per_second" => named::millimeters_per_second(Velocity(value)),
            "seconds" => named::seconds(Time(value)),
            _ => {
                return Value::Error(MayoError::not_found(format!("display(): unknown target '{}'", target))
                    .with_suggestion(format!("Use one of: {}", DISPLAY_UNITS.join(", "))));
            }
        };

        result_to_value(&result)
    }
}

// ============ unit_symbols ============

pub struct UnitSymbols;

static UNIT_SYMBOLS_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("unit", "Text", "Dimension name, e.g. \"length\""),
];

static UNIT_SYMBOLS_EXAMPLES: [&str; 2] = [
    "unit_symbols(\"angle\") → [rad, deg, °]",
    "unit_symbols(\"velocity\") → [mm/s, in/min]",
];

static UNIT_SYMBOLS_RELATED: [&str; 1] = ["parse_quantity"];

impl FunctionPlugin for UnitSymbols {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "unit_symbols",
            description: "List the symbols accepted by parse_quantity for a dimension",
            usage: "unit_symbols(unit)",
            args: &UNIT_SYMBOLS_ARGS,
            returns: "List",
            examples: &UNIT_SYMBOLS_EXAMPLES,
            category: "units",
            related: &UNIT_SYMBOLS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(MayoError::arg_count("unit_symbols", 1, 0));
        }

        match extract_unit(&args[0], "unit_symbols") {
            Ok(unit) => Value::List(
                symbols_for(unit).into_iter().map(|s| Value::Text(s.to_string())).collect()
            ),
            Err(e) => Value::Error(e),
        }
    }
}
