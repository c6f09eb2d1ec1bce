//! Formatted output data model.
//!
//! The consumer-facing result of a formatting call: a fully rendered HTML
//! string, pass-through stylesheets, and resolved scripts with template-only
//! metadata (`params`/`optionalParams`) stripped. Serializes directly to the
//! JSON shape host frameworks consume.

use serde::{Deserialize, Serialize};

use crate::definition::{ScriptAction, ScriptLocation, ScriptSource, ScriptStrategy};

/// A single resolved script, external URL or inline code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedScript {
    pub strategy: ScriptStrategy,
    pub location: ScriptLocation,
    pub action: ScriptAction,
    #[serde(flatten)]
    pub source: ScriptSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl RenderedScript {
    /// Resolved URL, if an external script.
    pub fn url(&self) -> Option<&str> {
        match &self.source {
            ScriptSource::External { url } => Some(url),
            ScriptSource::Inline { .. } => None,
        }
    }

    /// Resolved code, if an inline script.
    pub fn code(&self) -> Option<&str> {
        match &self.source {
            ScriptSource::Inline { code } => Some(code),
            ScriptSource::External { .. } => None,
        }
    }
}

/// Renderable artifacts for a third party, parameterized by one set of
/// inputs. Recompute whenever the inputs change; nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThirdPartyOutput {
    pub id: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Fully rendered HTML element, if the definition has an HTML template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stylesheets: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<RenderedScript>,
}
