//! # tpk_engine
//!
//! Template resolution engine for third-party web integrations.
//!
//! Turns a declarative [`ThirdPartyDefinition`] (analytics tags, embeds, tag
//! managers) plus a flat map of caller inputs into renderable artifacts: an
//! HTML element string, stylesheet URLs and resolved script directives.
//!
//! The pipeline is single-pass, synchronous and side-effect-free: inputs are
//! classified into disjoint subsets, the URL composer and code renderer
//! resolve parameterized sources, and the formatter assembles the
//! [`ThirdPartyOutput`]. Definitions are immutable and argument-agnostic;
//! outputs are call-scoped and never cached.
//!
//! ## Example
//!
//! ```rust
//! use tpk_engine::{format, Inputs, ThirdPartyDefinition};
//!
//! let definition = ThirdPartyDefinition::from_json(r#"{
//!     "id": "maps-embed",
//!     "description": "Embed a map on your webpage",
//!     "html": {
//!         "element": "iframe",
//!         "attributes": {
//!             "src": {
//!                 "url": "https://www.google.com/maps/embed/v1/place",
//!                 "slugParam": "mode",
//!                 "params": ["key"]
//!             },
//!             "loading": "lazy"
//!         }
//!     }
//! }"#).unwrap();
//!
//! let mut inputs = Inputs::new();
//! inputs.insert("mode".into(), "view".into());
//! inputs.insert("key".into(), "123".into());
//!
//! let output = format(&definition, &inputs).unwrap();
//! assert_eq!(
//!     output.html.as_deref(),
//!     Some(r#"<iframe src="https://www.google.com/maps/embed/v1/view?key=123" loading="lazy"></iframe>"#)
//! );
//! ```

pub mod args;
pub mod composer;
pub mod definition;
pub mod error;
pub mod formatter;
pub mod html;
pub mod output;
pub mod renderer;
mod value;

pub use args::{classify, ClassifiedArgs};
pub use composer::compose_url;
pub use definition::{
    AttributeValue, HtmlAttributes, HtmlTemplate, Inputs, ScriptAction, ScriptLocation,
    ScriptSource, ScriptStrategy, ScriptTemplate, SrcSpec, ThirdPartyDefinition,
    ValidationStrength,
};
pub use error::{EngineError, EngineResult};
pub use formatter::format;
pub use html::{render_element, serialize_attributes};
pub use output::{RenderedScript, ThirdPartyOutput};
pub use renderer::CodeRenderer;
