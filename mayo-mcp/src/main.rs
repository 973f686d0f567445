//! Mayo MCP Server
//!
//! Line-delimited JSON-RPC 2.0 over stdio. Logs go to stderr.
//!
//! Tools:
//! - translate: Base-unit magnitude to display value for a schema
//! - parse_quantity: Read a quantity string like "25.4mm"
//! - to_base: Read a quantity string and return its base-unit magnitude
//! - display: Show a magnitude in a fixed unit (degrees, meters, ...)
//! - unit_symbols: Symbols accepted for a dimension
//! - help: Documentation for a function
//! - list_functions: List available functions

mod config;

use config::ServerConfig;
use mayo_core::Value;
use mayo_plugin::{EvalContext, FunctionMeta, PluginRegistry, UNIT_SCHEMA};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "mayo";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

/// Reply to a request; `id` is `null` when the request id could not be read
#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    id: JsonValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpResponse {
    fn success(id: JsonValue, result: JsonValue) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    fn failure(id: JsonValue, error: McpError) -> Self {
        McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: -32602, message: message.into(), data: None }
    }
}

/// Function registry plus the configuration every call runs under
struct Mayo {
    registry: Arc<PluginRegistry>,
    config: ServerConfig,
}

impl Mayo {
    fn new(config: ServerConfig) -> Self {
        Mayo {
            registry: Arc::new(mayo_units::units_registry()),
            config,
        }
    }

    fn context(&self) -> EvalContext {
        EvalContext::new(Arc::clone(&self.registry))
            .with_setting(UNIT_SCHEMA, self.config.schema.name())
            .with_tracing(self.config.trace_calls)
    }

    fn call(&self, name: &str, args: &[Value]) -> Value {
        let mut ctx = self.context();
        let result = ctx.call(name, args);
        for step in &ctx.trace {
            debug!(function = %step.function, args = ?step.args, result = %step.result, "call");
        }
        result
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    init_logging();

    let mayo = Mayo::new(ServerConfig::from_env());

    info!("Mayo MCP Server v{} started", SERVER_VERSION);
    info!("Protocol: {}", PROTOCOL_VERSION);
    info!("Unit schema: {}, call tracing: {}", mayo.config.schema, mayo.config.trace_calls);
    info!("Functions loaded: {}", mayo.registry.len());

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                if let Some(response) = process_line(&mayo, &line) {
                    if let Err(e) = write_response(&response) {
                        error!("Error writing response: {}", e);
                        break;
                    }
                }
            }
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        }
    }

    info!("Server shutting down");
}

/// Reply for one input line; `None` for blank lines and notifications
fn process_line(mayo: &Mayo, line: &str) -> Option<McpResponse> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    debug!("Received: {} bytes", line.len());

    let request: McpRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!("Error parsing request: {}", e);
            return Some(McpResponse::failure(JsonValue::Null, McpError {
                code: -32700,
                message: format!("Parse error: {}", e),
                data: None,
            }));
        }
    };

    debug!("Processing: {}", request.method);
    let response = handle_request(mayo, &request);

    // Notifications (no id) get no response
    if request.id.is_none() {
        debug!("Notification processed (no response): {}", request.method);
        return None;
    }
    Some(response)
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let response_json = serde_json::to_string(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response_json)?;
    stdout.flush()
}

fn handle_request(mayo: &Mayo, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(mayo),
        "tools/call" => handle_tool_call(mayo, &request.params),

        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    let id = request.id.clone().unwrap_or(JsonValue::Null);
    match result {
        Ok(r) => McpResponse::success(id, r),
        Err(e) => McpResponse::failure(id, e),
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Echo the client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!("Client connected: {} (protocol: {})", client_info, client_protocol);

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit translation and quantity parsing for CAD property display"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Magnitudes are in base units: mm, rad, mm², mm³, mm/s, s. Use 'translate' to get the display value for a schema (si or imperial_uk) and 'parse_quantity' or 'to_base' to read user input such as \"25.4mm\" or \"90°\"."
    }))
}

fn function_tool(meta: &FunctionMeta) -> JsonValue {
    let properties: serde_json::Map<String, JsonValue> = meta.args.iter()
        .map(|arg| {
            let mut prop = json!({ "type": arg.json_type(), "description": arg.description });
            if let Some(default) = arg.default {
                prop["default"] = json!(default);
            }
            (arg.name.to_string(), prop)
        })
        .collect();
    let required: Vec<&str> = meta.args.iter()
        .filter(|arg| !arg.optional)
        .map(|arg| arg.name)
        .collect();

    json!({
        "name": meta.name,
        "description": format!("{}. Usage: {}", meta.description, meta.usage),
        "inputSchema": {
            "type": "object",
            "properties": properties,
            "required": required
        }
    })
}

fn handle_tools_list(mayo: &Mayo) -> Result<JsonValue, McpError> {
    let mut tools: Vec<JsonValue> = mayo.registry.metas().iter().map(function_tool).collect();

    tools.push(json!({
        "name": "help",
        "description": "Get documentation for a function, or an overview of all functions when no name is given.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "Function name" }
            }
        }
    }));
    tools.push(json!({
        "name": "list_functions",
        "description": "List available functions, optionally filtered by category.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "category": { "type": "string", "description": "Category filter, e.g. \"units\"" }
            }
        }
    }));

    Ok(json!({ "tools": tools }))
}

fn handle_tool_call(mayo: &Mayo, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "help" => tool_help(mayo, &args),
        "list_functions" => tool_list_functions(mayo, &args),
        _ => match mayo.registry.get_function(name) {
            Some(function) => {
                let meta = function.meta();
                let values = positional_args(&meta, &args)?;
                Ok(tool_result(&mayo.call(name, &values)))
            }
            None => Err(McpError {
                code: -32602,
                message: format!("Unknown tool: {}", name),
                data: None,
            }),
        },
    }
}

/// Order named tool arguments by the function's declared arguments
fn positional_args(meta: &FunctionMeta, args: &JsonValue) -> Result<Vec<Value>, McpError> {
    let mut values = Vec::with_capacity(meta.args.len());
    for arg in meta.args {
        match args.get(arg.name) {
            Some(v) if !v.is_null() => values.push(json_to_value(v)),
            _ if !arg.optional => {
                return Err(McpError::invalid_params(format!("Missing {} argument", arg.name)));
            }
            _ => values.push(Value::Null),
        }
    }
    while matches!(values.last(), Some(Value::Null)) {
        values.pop();
    }
    Ok(values)
}

fn tool_result(value: &Value) -> JsonValue {
    let text = match value {
        Value::Error(e) => format!("Error: {}", e),
        other => other.to_string(),
    };
    json!({
        "content": [{ "type": "text", "text": text }],
        "data": value_to_json(value),
        "isError": value.is_error()
    })
}

fn tool_help(mayo: &Mayo, args: &JsonValue) -> Result<JsonValue, McpError> {
    let name = args.get("name").and_then(|v| v.as_str());
    let help = mayo.registry.help(name);

    Ok(json!({
        "content": [{ "type": "text", "text": format_help(&help) }],
        "data": value_to_json(&help),
        "isError": help.is_error()
    }))
}

fn format_help(help: &Value) -> String {
    match help {
        Value::Object(map) => {
            let mut out = String::new();
            if let Some(Value::Text(n)) = map.get("name") { out.push_str(&format!("# {}\n\n", n)); }
            if let Some(Value::Text(d)) = map.get("description") { out.push_str(&format!("{}\n\n", d)); }
            if let Some(Value::Text(u)) = map.get("usage") { out.push_str(&format!("**Usage:** `{}`\n\n", u)); }
            if let Some(Value::List(examples)) = map.get("examples") {
                for example in examples {
                    out.push_str(&format!("- `{}`\n", example));
                }
            }
            if let Some(Value::Object(categories)) = map.get("functions") {
                for (category, functions) in categories {
                    out.push_str(&format!("**{}:** {}\n", category, functions));
                }
            }
            out
        }
        Value::Error(e) => format!("Error: {}", e),
        other => other.to_string(),
    }
}

fn tool_list_functions(mayo: &Mayo, args: &JsonValue) -> Result<JsonValue, McpError> {
    let category = args.get("category").and_then(|v| v.as_str());
    let functions = mayo.registry.list_functions(category);
    let count = functions.as_list().map_or(0, |l| l.len());
    Ok(json!({
        "content": [{ "type": "text", "text": format!("{} functions listed", count) }],
        "data": value_to_json(&functions)
    }))
}

fn json_to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Array(arr) => Value::List(arr.iter().map(json_to_value).collect()),
        JsonValue::Object(obj) => Value::Object(obj.iter().map(|(k, v)| (k.clone(), json_to_value(v))).collect()),
    }
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n).map_or(JsonValue::Null, JsonValue::Number),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::List(l) => JsonValue::Array(l.iter().map(value_to_json).collect()),
        Value::Object(o) => JsonValue::Object(o.iter().map(|(k, v)| (k.clone(), value_to_json(v))).collect()),
        Value::Error(e) => json!({ "_error": e }),
    }
}
