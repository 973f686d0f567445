//! Server configuration read from the environment

use std::env;
use mayo_units::Schema;
use tracing::warn;

pub const SCHEMA_VAR: &str = "MAYO_UNIT_SCHEMA";
pub const TRACE_VAR: &str = "MAYO_TRACE_CALLS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerConfig {
    /// Schema used when a tool call does not name one
    pub schema: Schema,
    /// Record every function call and log it at debug level
    pub trace_calls: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(SCHEMA_VAR).ok().as_deref(), env::var(TRACE_VAR).ok().as_deref())
    }

    pub fn from_vars(schema: Option<&str>, trace: Option<&str>) -> Self {
        let schema = match schema.map(str::trim).filter(|s| !s.is_empty()) {
            Some(name) => name.parse::<Schema>().unwrap_or_else(|e| {
                warn!("{}: {}, falling back to {}", SCHEMA_VAR, e, Schema::default());
                Schema::default()
            }),
            None => Schema::default(),
        };

        let trace_calls = matches!(
            trace.map(|t| t.trim().to_ascii_lowercase()).as_deref(),
            Some("1") | Some("true") | Some("yes")
        );

        ServerConfig { schema, trace_calls }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ServerConfig::from_vars(None, None), ServerConfig::default());
        assert_eq!(ServerConfig::default().schema, Schema::SI);
    }

    #[test]
    fn test_schema_var() {
        assert_eq!(ServerConfig::from_vars(Some("imperial_uk"), None).schema, Schema::ImperialUK);
        assert_eq!(ServerConfig::from_vars(Some(" si "), None).schema, Schema::SI);
        assert_eq!(ServerConfig::from_vars(Some("cubits"), None).schema, Schema::SI);
    }

    #[test]
    fn test_trace_var() {
        assert!(ServerConfig::from_vars(None, Some("1")).trace_calls);
        assert!(ServerConfig::from_vars(None, Some("TRUE")).trace_calls);
        assert!(!ServerConfig::from_vars(None, Some("0")).trace_calls);
        assert!(!ServerConfig::from_vars(None, Some("")).trace_calls);
    }
}
