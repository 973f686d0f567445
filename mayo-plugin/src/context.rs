//! Evaluation Context

use mayo_core::{MayoError, Value};
use crate::PluginRegistry;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Setting key holding the active unit schema name
pub const UNIT_SCHEMA: &str = "unit_schema";

/// Evaluation context passed to plugins
pub struct EvalContext {
    pub settings: BTreeMap<String, Value>,
    pub registry: Arc<PluginRegistry>,
    pub tracing: bool,
    pub trace: Vec<TraceStep>,
}

/// Single recorded function call
#[derive(Debug, Clone)]
pub struct TraceStep {
    pub function: String,
    pub args: Vec<Value>,
    pub result: Value,
}

impl EvalContext {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            settings: BTreeMap::new(),
            registry,
            tracing: false,
            trace: Vec::new(),
        }
    }

    pub fn with_setting(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.settings.insert(name.to_string(), value.into());
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    pub fn setting(&self, name: &str) -> Value {
        self.settings.get(name)
            .cloned()
            .unwrap_or_else(|| Value::Error(MayoError::undefined_field(name)))
    }

    /// Text setting, or None when missing or not text
    pub fn setting_text(&self, name: &str) -> Option<&str> {
        self.settings.get(name).and_then(|v| v.as_text())
    }

    /// Call a registered function, recording the call when tracing is on
    pub fn call(&mut self, name: &str, args: &[Value]) -> Value {
        let registry = Arc::clone(&self.registry);
        let result = registry.call_function(name, args, self);
        self.record_trace(name.to_string(), args.to_vec(), result.clone());
        result
    }

    pub fn record_trace(&mut self, function: String, args: Vec<Value>, result: Value) {
        if self.tracing {
            self.trace.push(TraceStep { function, args, result });
        }
    }
}
