//! Plugin Registry

use crate::{FunctionPlugin, FunctionMeta};
use crate::EvalContext;
use mayo_core::{MayoError, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Central plugin registry
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        let name = f.meta().name.to_lowercase();
        self.functions.insert(name, Arc::new(f));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        self.functions.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        match self.get_function(name) {
            Some(f) => {
                let meta = f.meta();
                let required = meta.required_args();
                if args.len() < required {
                    debug!(function = name, args = args.len(), required, "too few arguments");
                    return Value::Error(MayoError::arg_count(meta.name, required, args.len()));
                }
                debug!(function = name, args = args.len(), "calling function");
                f.call(args, ctx)
            }
            None => {
                // Find similar function names for better error message
                let similar = self.find_similar_functions(name);
                let mut err = MayoError::undefined_func(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use list_functions() for full list.",
                        suggestions.join(", ")
                    ));
                }
                Value::Error(err)
            }
        }
    }

    /// Registered names that look like `name`, best match first
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let query = name.to_lowercase();
        let mut matches: Vec<(usize, &String)> = self.functions.keys()
            .map(|candidate| (Self::similarity_score(&query, candidate), candidate))
            .filter(|(score, _)| *score > 0)
            .collect();

        matches.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        matches.into_iter().map(|(_, name)| name.clone()).collect()
    }

    /// Zero when the names have nothing useful in common
    fn similarity_score(query: &str, candidate: &str) -> usize {
        if candidate.starts_with(query) || query.starts_with(candidate) {
            return 100;
        }
        if candidate.contains(query) || query.contains(candidate) {
            return 50;
        }

        // "symbols" finds unit_symbols, "base_value" finds to_base
        let shared_words = query.split('_')
            .filter(|w| w.len() > 2 && candidate.split('_').any(|c| c == *w))
            .count();
        let common_prefix = query.chars()
            .zip(candidate.chars())
            .take_while(|(a, b)| a == b)
            .count();

        shared_words * 20 + if common_prefix >= 3 { common_prefix } else { 0 }
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => self.help_for(n),
            None => self.general_help(),
        }
    }

    fn help_for(&self, name: &str) -> Value {
        match self.functions.get(&name.to_lowercase()) {
            Some(f) => Value::Object(Self::function_to_help(f.meta())),
            None => Value::Error(MayoError::not_found(format!("No function named '{}'", name))),
        }
    }

    fn general_help(&self) -> Value {
        let mut help = BTreeMap::new();

        let mut funcs_by_cat: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, f) in &self.functions {
            let cat = f.meta().category.to_string();
            funcs_by_cat.entry(cat).or_default().push(name.clone());
        }
        help.insert("functions".to_string(),
            Value::Object(funcs_by_cat.into_iter()
                .map(|(k, mut v)| {
                    v.sort();
                    (k, Value::List(v.into_iter().map(Value::Text).collect()))
                })
                .collect()));

        help.insert("usage".to_string(),
            Value::Text("Call help('function_name') for detailed help.".to_string()));

        Value::Object(help)
    }

    fn function_to_help(meta: FunctionMeta) -> BTreeMap<String, Value> {
        let mut help = BTreeMap::new();
        help.insert("name".to_string(), Value::Text(meta.name.to_string()));
        help.insert("description".to_string(), Value::Text(meta.description.to_string()));
        help.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
        help.insert("returns".to_string(), Value::Text(meta.returns.to_string()));
        help.insert("category".to_string(), Value::Text(meta.category.to_string()));
        help.insert("args".to_string(), Value::List(
            meta.args.iter().map(|a| {
                let mut arg = BTreeMap::new();
                arg.insert("name".to_string(), Value::Text(a.name.to_string()));
                arg.insert("type".to_string(), Value::Text(a.typ.to_string()));
                arg.insert("description".to_string(), Value::Text(a.description.to_string()));
                arg.insert("optional".to_string(), Value::Bool(a.optional));
                if let Some(default) = a.default {
                    arg.insert("default".to_string(), Value::Text(default.to_string()));
                }
                Value::Object(arg)
            }).collect()
        ));
        help.insert("examples".to_string(), Value::List(
            meta.examples.iter().map(|e| Value::Text(e.to_string())).collect()
        ));
        help.insert("related".to_string(), Value::List(
            meta.related.iter().map(|r| Value::Text(r.to_string())).collect()
        ));
        help
    }

    /// Metadata of every registered function, sorted by name
    pub fn metas(&self) -> Vec<FunctionMeta> {
        let mut metas: Vec<FunctionMeta> = self.functions.values().map(|f| f.meta()).collect();
        metas.sort_by(|a, b| a.name.cmp(b.name));
        metas
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let funcs: Vec<Value> = self.metas().into_iter()
            .filter(|meta| category.map_or(true, |c| meta.category == c))
            .map(|meta| {
                let mut obj = BTreeMap::new();
                obj.insert("name".to_string(), Value::Text(meta.name.to_string()));
                obj.insert("description".to_string(), Value::Text(meta.description.to_string()));
                obj.insert("usage".to_string(), Value::Text(meta.usage.to_string()));
                obj.insert("category".to_string(), Value::Text(meta.category.to_string()));
                Value::Object(obj)
            })
            .collect();
        Value::List(funcs)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgMeta;

    struct Echo;

    static ECHO_ARGS: [ArgMeta; 1] = [
        ArgMeta::required("value", "Any", "Value to return"),
    ];

    impl FunctionPlugin for Echo {
        fn meta(&self) -> FunctionMeta {
            FunctionMeta {
                name: "echo",
                description: "Return the first argument",
                usage: "echo(value)",
                args: &ECHO_ARGS,
                returns: "Any",
                examples: &[],
                category: "test",
                related: &[],
            }
        }

        fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
            args.first().cloned().unwrap_or(Value::Null)
        }
    }

    fn registry() -> Arc<PluginRegistry> {
        Arc::new(PluginRegistry::new().with_function(Echo))
    }

    #[test]
    fn test_call_is_case_insensitive() {
        let reg = registry();
        let ctx = EvalContext::new(reg.clone());
        let result = reg.call_function("ECHO", &[Value::Number(1.5)], &ctx);
        assert_eq!(result, Value::Number(1.5));
    }

    #[test]
    fn test_missing_required_argument() {
        let reg = registry();
        let ctx = EvalContext::new(reg.clone());
        let result = reg.call_function("echo", &[], &ctx);
        assert_eq!(result.as_error().map(|e| e.code.as_str()), Some(mayo_core::codes::ARG_COUNT));
    }

    #[test]
    fn test_unknown_function_suggests_similar() {
        let reg = registry();
        let ctx = EvalContext::new(reg.clone());
        let result = reg.call_function("ech", &[], &ctx);
        let err = result.as_error().unwrap();
        assert_eq!(err.code, mayo_core::codes::UNDEFINED_FUNC);
        assert!(err.suggestion.as_deref().unwrap_or("").contains("echo"));

        let result = reg.call_function("parse", &[], &ctx);
        assert_eq!(result.as_error().and_then(|e| e.suggestion.clone()), None);
    }

    #[test]
    fn test_similarity_score() {
        assert_eq!(PluginRegistry::similarity_score("ech", "echo"), 100);
        assert_eq!(PluginRegistry::similarity_score("symbols", "unit_symbols"), 50);
        assert_eq!(PluginRegistry::similarity_score("base_value", "to_base"), 20);
        assert_eq!(PluginRegistry::similarity_score("furlong", "translate"), 0);
    }

    #[test]
    fn test_help_for_function() {
        let reg = registry();
        let help = reg.help(Some("echo"));
        assert_eq!(help.get("usage").as_text(), Some("echo(value)"));
        assert!(reg.help(Some("missing")).is_error());
    }

    #[test]
    fn test_general_help_groups_by_category() {
        let help = registry().help(None);
        let names = help.get("functions").get("test");
        assert_eq!(names.as_list().map(|l| l.len()), Some(1));
    }

    #[test]
    fn test_list_functions_filters_category() {
        let reg = registry();
        assert_eq!(reg.list_functions(Some("test")).as_list().map(|l| l.len()), Some(1));
        assert_eq!(reg.list_functions(Some("units")).as_list().map(|l| l.len()), Some(0));
    }

    #[test]
    fn test_context_records_trace() {
        let mut ctx = EvalContext::new(registry()).with_tracing(true);
        ctx.call("echo", &[Value::from("mm")]);
        assert_eq!(ctx.trace.len(), 1);
        assert_eq!(ctx.trace[0].function, "echo");
        assert_eq!(ctx.trace[0].result, Value::from("mm"));
    }

    #[test]
    fn test_context_settings() {
        let ctx = EvalContext::new(registry())
            .with_setting(crate::context::UNIT_SCHEMA, "imperial_uk");
        assert_eq!(ctx.setting_text(crate::context::UNIT_SCHEMA), Some("imperial_uk"));
        assert!(ctx.setting("missing").is_error());
    }
}
