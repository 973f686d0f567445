//! Plugin traits

use mayo_core::Value;
use crate::EvalContext;
use serde::Serialize;

/// One declared argument of a unit function
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    /// `Value` variant name: "Number", "Text" or "Bool"
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
    /// What an omitted optional argument falls back to, for help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl ArgMeta {
    pub const fn required(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        ArgMeta { name, typ, description, optional: false, default: None }
    }

    pub const fn optional(name: &'static str, typ: &'static str, description: &'static str, default: &'static str) -> Self {
        ArgMeta { name, typ, description, optional: true, default: Some(default) }
    }

    /// JSON Schema type accepted for this argument
    pub fn json_type(&self) -> &'static str {
        match self.typ {
            "Number" => "number",
            "Bool" => "boolean",
            _ => "string",
        }
    }
}

/// Static description of a unit function, used for help and tool listings
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    /// Declared in call order
    pub args: &'static [ArgMeta],
    pub returns: &'static str,
    pub examples: &'static [&'static str],
    pub category: &'static str,
    pub related: &'static [&'static str],
}

impl FunctionMeta {
    pub fn required_args(&self) -> usize {
        self.args.iter().filter(|a| !a.optional).count()
    }
}

/// Unit function callable by name
///
/// Implementations are pure: the same arguments under the same context
/// settings give the same value. Failures are returned as `Value::Error`.
pub trait FunctionPlugin: Send + Sync {
    fn meta(&self) -> FunctionMeta;
    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value;
}
