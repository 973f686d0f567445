//! Argument extraction and result conversion for unit functions

use mayo_core::{MayoError, Value};
use mayo_plugin::{EvalContext, UNIT_SCHEMA};
use crate::{ParsedQuantity, Schema, TranslateResult, Unit};

/// An error value passed in as an argument, noting where it went
fn propagated(err: &MayoError, func: &str, arg: &str) -> MayoError {
    err.clone().with_note(format!("passed to {}() as '{}'", func, arg))
}

/// Extract a Number from a Value, returning error context
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, MayoError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Error(e) => Err(propagated(e, func, arg)),
        other => Err(MayoError::arg_type(func, arg, "Number", other.type_name())),
    }
}

/// Extract a Text string from a Value
pub fn extract_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<&'a str, MayoError> {
    match value {
        Value::Text(s) => Ok(s),
        Value::Error(e) => Err(propagated(e, func, arg)),
        other => Err(MayoError::arg_type(func, arg, "Text", other.type_name())),
    }
}

pub fn extract_unit(value: &Value, func: &str) -> Result<Unit, MayoError> {
    let name = extract_text(value, func, "unit")?;
    name.parse::<Unit>().map_err(|_| {
        MayoError::new(mayo_core::codes::ARG_TYPE, format!("{}(): unknown unit '{}'", func, name))
            .with_suggestion("Use a dimension name such as \"length\", \"angle\" or \"volume\"")
    })
}

/// Schema from an optional argument, else from the context setting, else SI
pub fn resolve_schema(arg: Option<&Value>, ctx: &EvalContext, func: &str) -> Result<Schema, MayoError> {
    let name = match arg {
        Some(Value::Null) | None => ctx.setting_text(UNIT_SCHEMA),
        Some(value) => Some(extract_text(value, func, "schema")?),
    };

    match name {
        Some(n) => n.parse::<Schema>().map_err(|_| MayoError::unknown_schema(n)),
        None => Ok(Schema::default()),
    }
}

pub fn result_to_value(result: &TranslateResult) -> Value {
    Value::object([
        ("value", Value::Number(result.value)),
        ("symbol", Value::text_or_null(result.symbol)),
        ("factor", Value::Number(result.factor)),
    ])
}

/// Parse outcome with its unit name and base-unit magnitude
pub fn parsed_to_value(parsed: &ParsedQuantity) -> Value {
    let result = &parsed.result;
    Value::object([
        ("value", Value::Number(result.value)),
        ("symbol", Value::text_or_null(result.symbol)),
        ("factor", Value::Number(result.factor)),
        ("unit", Value::from(parsed.unit.name())),
        ("base_value", Value::Number(parsed.base_value())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use mayo_plugin::PluginRegistry;
    use std::sync::Arc;

    fn ctx() -> EvalContext {
        EvalContext::new(Arc::new(PluginRegistry::new()))
    }

    #[test]
    fn test_extract_number() {
        assert_eq!(extract_number(&Value::Number(2.), "f", "x"), Ok(2.));
        let err = extract_number(&Value::from("2"), "f", "x").unwrap_err();
        assert_eq!(err.code, mayo_core::codes::ARG_TYPE);

        let upstream = Value::Error(MayoError::unknown_unit("furlong"));
        let err = extract_number(&upstream, "translate", "value").unwrap_err();
        assert_eq!(err.code, mayo_core::codes::UNKNOWN_UNIT);
        assert_eq!(err.context.unwrap().notes, vec!["passed to translate() as 'value'".to_string()]);
    }

    #[test]
    fn test_resolve_schema_precedence() {
        let plain = ctx();
        assert_eq!(resolve_schema(None, &plain, "f"), Ok(Schema::SI));

        let imperial = ctx().with_setting(UNIT_SCHEMA, "imperial_uk");
        assert_eq!(resolve_schema(None, &imperial, "f"), Ok(Schema::ImperialUK));
        assert_eq!(resolve_schema(Some(&Value::from("si")), &imperial, "f"), Ok(Schema::SI));

        let err = resolve_schema(Some(&Value::from("martian")), &plain, "f").unwrap_err();
        assert_eq!(err.code, mayo_core::codes::UNKNOWN_SCHEMA);
    }

    #[test]
    fn test_result_to_value() {
        let value = result_to_value(&TranslateResult::unitless(4.));
        assert_eq!(value.get("symbol"), Value::Null);
        assert_eq!(value.get("factor"), Value::Number(1.));
    }
}
