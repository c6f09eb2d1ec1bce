//! Third-party definition data model.
//!
//! This module defines the argument-agnostic description of a third-party
//! integration: an optional HTML template, stylesheets and script templates.
//! Definitions deserialize from the integration pack JSON wire format
//! (`id`, `description`, `website`, `html.element`, `html.attributes`,
//! `stylesheets`, `scripts[].{strategy,location,action,url|code,key,params,
//! optionalParams}`) and are immutable once constructed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, EngineResult};

/// Flat caller-supplied argument map, scalar JSON values keyed by name.
pub type Inputs = IndexMap<String, Value>;

/// How strictly a definition is validated at construction time.
///
/// Strict validation requires an HTML template to declare a `src` attribute.
/// Some integration packs (e.g. lite embeds driven purely by custom element
/// attributes) have no src; those need [`ValidationStrength::Lenient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationStrength {
    #[default]
    Strict,
    Lenient,
}

/// Strategy for loading a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStrategy {
    Server,
    Client,
    Idle,
    Worker,
}

/// Document location where a script is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLocation {
    Head,
    Body,
}

/// How a script is inserted at its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptAction {
    Append,
    Prepend,
}

/// Source definition for an HTML `src` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrcSpec {
    /// Base URL for the attribute value.
    pub url: String,
    /// Name of the input argument that replaces the URL's last path segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug_param: Option<String>,
    /// Names of input arguments appended as query parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

/// Value of a single HTML template attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Parameterized source URL, resolved through the URL composer.
    Src(SrcSpec),
    /// Plain string value.
    Literal(String),
    /// Boolean attribute; `true` renders the bare name, `false` is skipped.
    Boolean(bool),
    /// Placeholder with no default; skipped unless overridden by an input.
    Null,
}

impl AttributeValue {
    /// Returns the src spec if this attribute is a parameterized source.
    pub fn as_src(&self) -> Option<&SrcSpec> {
        match self {
            AttributeValue::Src(spec) => Some(spec),
            _ => None,
        }
    }
}

/// Insertion-ordered, read-only collection of HTML template attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlAttributes(IndexMap<String, AttributeValue>);

impl HtmlAttributes {
    pub fn new(attributes: IndexMap<String, AttributeValue>) -> Self {
        Self(attributes)
    }

    /// Checks whether the given attribute is set.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Gets the value for the given attribute.
    ///
    /// Returns [`EngineError::AttributeNotFound`] if the attribute is not
    /// set; callers that tolerate absence should check [`contains`] first.
    ///
    /// [`contains`]: HtmlAttributes::contains
    pub fn get(&self, name: &str) -> EngineResult<&AttributeValue> {
        self.0
            .get(name)
            .ok_or_else(|| EngineError::AttributeNotFound(name.to_string()))
    }

    /// Iterates over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the src spec of the conventional `src` attribute, if any.
    pub fn src(&self) -> Option<&SrcSpec> {
        self.0.get("src").and_then(AttributeValue::as_src)
    }
}

/// HTML element template for a third party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlTemplate {
    /// Element tag name.
    pub element: String,
    /// Attribute map; insertion order determines output order.
    pub attributes: HtmlAttributes,
}

/// External or inline source of a script template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptSource {
    /// Script loaded from an external URL.
    External { url: String },
    /// Inline script code, possibly containing placeholders.
    Inline { code: String },
}

/// Script template for a third party.
///
/// Exactly one of `url`/`code` must be present in the wire format; violating
/// input is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawScriptTemplate")]
pub struct ScriptTemplate {
    pub strategy: ScriptStrategy,
    pub location: ScriptLocation,
    pub action: ScriptAction,
    #[serde(flatten)]
    pub source: ScriptSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Required parameter names, template-only metadata.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
    /// Optional parameter names with their default values.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub optional_params: IndexMap<String, Value>,
}

impl ScriptTemplate {
    /// Iterates over all parameter names this script declares, required
    /// before optional.
    pub fn declared_params(&self) -> impl Iterator<Item = &String> {
        self.params.iter().chain(self.optional_params.keys())
    }
}

/// Wire representation of a script template, prior to url/code exclusivity
/// checks.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScriptTemplate {
    strategy: ScriptStrategy,
    location: ScriptLocation,
    action: ScriptAction,
    url: Option<String>,
    code: Option<String>,
    key: Option<String>,
    #[serde(default)]
    params: Vec<String>,
    #[serde(default)]
    optional_params: IndexMap<String, Value>,
}

impl TryFrom<RawScriptTemplate> for ScriptTemplate {
    type Error = EngineError;

    fn try_from(raw: RawScriptTemplate) -> Result<Self, Self::Error> {
        let source = match (raw.url, raw.code) {
            (Some(url), None) => ScriptSource::External { url },
            (None, Some(code)) => ScriptSource::Inline { code },
            (Some(_), Some(_)) => {
                return Err(EngineError::InvalidDefinition(
                    "only one of script url or code must be provided".to_string(),
                ))
            }
            (None, None) => {
                return Err(EngineError::InvalidDefinition(
                    "missing both script url and code, one of which must be provided".to_string(),
                ))
            }
        };

        Ok(ScriptTemplate {
            strategy: raw.strategy,
            location: raw.location,
            action: raw.action,
            source,
            key: raw.key,
            params: raw.params,
            optional_params: raw.optional_params,
        })
    }
}

/// Static, argument-agnostic description of a third-party integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThirdPartyDefinition {
    pub id: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<HtmlTemplate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stylesheets: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<ScriptTemplate>,
}

impl ThirdPartyDefinition {
    /// Parses and validates a definition from its JSON wire format with
    /// strict validation.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Self::from_json_with(json, ValidationStrength::Strict)
    }

    /// Parses and validates a definition with the given validation strength.
    pub fn from_json_with(json: &str, strength: ValidationStrength) -> EngineResult<Self> {
        let definition: Self = serde_json::from_str(json)?;
        definition.validate(strength)?;
        Ok(definition)
    }

    /// Converts and validates a definition from an in-memory JSON value with
    /// strict validation.
    pub fn from_value(value: Value) -> EngineResult<Self> {
        Self::from_value_with(value, ValidationStrength::Strict)
    }

    /// Converts and validates a definition with the given validation
    /// strength.
    pub fn from_value_with(value: Value, strength: ValidationStrength) -> EngineResult<Self> {
        let definition: Self = serde_json::from_value(value)?;
        definition.validate(strength)?;
        Ok(definition)
    }

    fn validate(&self, strength: ValidationStrength) -> EngineResult<()> {
        if self.id.is_empty() {
            return Err(EngineError::InvalidDefinition("missing id".to_string()));
        }
        if self.description.is_empty() {
            return Err(EngineError::InvalidDefinition(
                "missing description".to_string(),
            ));
        }
        if let Some(html) = &self.html {
            if html.element.is_empty() {
                return Err(EngineError::InvalidDefinition(
                    "missing HTML element".to_string(),
                ));
            }
            if strength == ValidationStrength::Strict && !html.attributes.contains("src") {
                return Err(EngineError::InvalidDefinition(
                    "missing HTML src attribute".to_string(),
                ));
            }
        }
        Ok(())
    }
}
