//! Mayo Plugin System
//!
//! Provides the `FunctionPlugin` trait used to expose unit system
//! operations by name, plus the registry and evaluation context.

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::{EvalContext, TraceStep, UNIT_SCHEMA};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        FunctionPlugin, FunctionMeta, ArgMeta,
        PluginRegistry, EvalContext, TraceStep,
    };
    pub use mayo_core::prelude::*;
}
