//! # tpk_integrations
//!
//! Curated pack of third-party integration definitions for [`tpk_engine`],
//! plus a filesystem loader for user-supplied definition files.
//!
//! Built-in definitions are embedded at compile time and exposed through the
//! [`catalog`] module. Each constructor returns a fresh [`Integration`]; the
//! wrapped definition is immutable, so callers can format it repeatedly with
//! different inputs.
//!
//! ```rust
//! use serde_json::json;
//! use tpk_engine::Inputs;
//!
//! let integration = tpk_integrations::catalog::google_maps_embed().unwrap();
//! let mut inputs = Inputs::new();
//! inputs.insert("q".into(), json!("Brussels"));
//! inputs.insert("key".into(), json!("123"));
//!
//! let output = integration.format(&inputs).unwrap();
//! assert!(output.html.unwrap().contains("q=Brussels"));
//! ```

pub mod catalog;
pub mod error;
pub mod loader;

use tpk_engine::{EngineResult, Inputs, ThirdPartyDefinition, ThirdPartyOutput};

pub use error::{IntegrationError, IntegrationResult};
pub use loader::{DefinitionLoader, DefinitionRegistry};

/// A third-party integration ready to be formatted.
///
/// Thin wrapper around a parsed [`ThirdPartyDefinition`]. Holds no per-call
/// state: formatting the same integration with different inputs yields
/// independent outputs.
#[derive(Debug, Clone)]
pub struct Integration {
    definition: ThirdPartyDefinition,
}

impl Integration {
    /// Wrap a parsed definition.
    pub fn new(definition: ThirdPartyDefinition) -> Self {
        Self { definition }
    }

    /// The definition's identifier.
    pub fn id(&self) -> &str {
        &self.definition.id
    }

    /// Human-readable description of the integration.
    pub fn description(&self) -> &str {
        &self.definition.description
    }

    /// The underlying definition.
    pub fn definition(&self) -> &ThirdPartyDefinition {
        &self.definition
    }

    /// Resolve the definition against the given inputs.
    pub fn format(&self, inputs: &Inputs) -> EngineResult<ThirdPartyOutput> {
        tpk_engine::format(&self.definition, inputs)
    }
}
