//! Mayo Core - Fundamental types
//!
//! Shared by the unit system crates:
//! - `Value`: what unit functions take and return
//! - `MayoError`: structured errors, carried as values

mod value;
mod error;

pub use value::Value;
pub use error::{MayoError, ErrorContext, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, MayoError};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;

        fn quantity() -> Value {
            Value::object([
                ("value", Value::Number(2.)),
                ("symbol", Value::from("in")),
                ("factor", Value::Number(25.4)),
            ])
        }

        #[test]
        fn test_conversions() {
            assert_eq!(Value::from(25.4).as_number(), Some(25.4));
            assert_eq!(Value::from("mm").as_text(), Some("mm"));
            assert_eq!(Value::from(String::from("kPa")).type_name(), "Text");
            assert_eq!(Value::default(), Value::Null);
        }

        #[test]
        fn test_text_or_null() {
            assert_eq!(Value::text_or_null(Some("°")), Value::from("°"));
            assert_eq!(Value::text_or_null(None), Value::Null);
        }

        #[test]
        fn test_get_field() {
            let q = quantity();
            assert_eq!(q.get("symbol").as_text(), Some("in"));
            assert_eq!(q.get("unit").as_error().map(|e| e.code.as_str()), Some(codes::UNDEFINED_FIELD));
            assert_eq!(Value::Number(1.).get("symbol").as_error().map(|e| e.code.as_str()), Some(codes::TYPE_ERROR));
        }

        #[test]
        fn test_get_on_error_propagates() {
            let err = Value::from(MayoError::unknown_unit("furlong"));
            assert_eq!(err.get("value"), err);
        }

        #[test]
        fn test_display() {
            assert_eq!(quantity().to_string(), "{factor: 25.4, symbol: in, value: 2}");

            let symbols = Value::List(["mm", "m", "cm", "dm", "km", "in", "ft"].map(Value::from).to_vec());
            assert_eq!(symbols.to_string(), "[mm, m, cm, dm, km, in, ft]");

            assert_eq!(Value::from(MayoError::unknown_unit("x")).to_string(), "#UNKNOWN_UNIT");
        }

        #[test]
        fn test_serde_tagging() {
            let json = serde_json::to_string(&Value::Number(1.5)).unwrap();
            assert_eq!(json, r#"{"type":"Number","value":1.5}"#);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_unknown_schema_has_hint() {
            let err = MayoError::unknown_schema("metricish");
            assert_eq!(err.code, codes::UNKNOWN_SCHEMA);
            assert!(err.suggestion.is_some());
        }

        #[test]
        fn test_context_builders() {
            let err = MayoError::parse_error("no leading number in 'abc'")
                .in_function("parse_quantity")
                .with_input("abc")
                .with_note("first")
                .with_note("second");
            let ctx = err.context.unwrap();
            assert_eq!(ctx.function.as_deref(), Some("parse_quantity"));
            assert_eq!(ctx.input.as_deref(), Some("abc"));
            assert_eq!(ctx.notes, vec!["first".to_string(), "second".to_string()]);
        }

        #[test]
        fn test_arg_errors_name_function() {
            let err = MayoError::arg_count("translate", 2, 1);
            assert_eq!(err.context.and_then(|c| c.function).as_deref(), Some("translate"));
        }

        #[test]
        fn test_display() {
            let err = MayoError::unknown_unit("furlong").in_function("to_base");
            let text = err.to_string();
            assert!(text.starts_with("UNKNOWN_UNIT: 'furlong'"));
            assert!(text.contains("in to_base()"));
            assert!(text.contains("Hint:"));
        }

        #[test]
        fn test_serialize_skips_empty_fields() {
            let json = serde_json::to_value(MayoError::not_found("nothing")).unwrap();
            assert_eq!(json["code"], "NOT_FOUND");
            assert!(json.get("severity").is_none());
            assert!(json.get("suggestion").is_none());
            assert!(json.get("context").is_none());
        }
    }
}
