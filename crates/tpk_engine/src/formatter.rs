//! Output formatting orchestration.
//!
//! Sequences the argument classifier, URL composer, code renderer and
//! attribute serializer to turn an immutable [`ThirdPartyDefinition`] plus
//! caller inputs into a [`ThirdPartyOutput`]. Pure and synchronous; any
//! component error fails the whole call with no partial output.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::args::{classify, ClassifiedArgs};
use crate::composer::compose_url;
use crate::definition::{
    AttributeValue, HtmlTemplate, Inputs, ScriptSource, ScriptTemplate, ThirdPartyDefinition,
};
use crate::error::EngineResult;
use crate::html::render_element;
use crate::output::{RenderedScript, ThirdPartyOutput};
use crate::renderer::CodeRenderer;

/// Formats a third-party definition for one set of input arguments.
///
/// Identical inputs always produce identical output; the caller owns
/// recomputation when inputs change.
pub fn format(definition: &ThirdPartyDefinition, inputs: &Inputs) -> EngineResult<ThirdPartyOutput> {
    debug!(id = %definition.id, args = inputs.len(), "formatting third-party definition");

    let classified = classify(inputs, definition);

    let html = definition
        .html
        .as_ref()
        .map(|template| render_html(template, &classified))
        .transpose()?;

    let renderer = CodeRenderer::new();
    let scripts = definition
        .scripts
        .iter()
        .map(|script| render_script(script, inputs, &renderer))
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(ThirdPartyOutput {
        id: definition.id.clone(),
        description: definition.description.clone(),
        website: definition.website.clone(),
        html,
        stylesheets: definition.stylesheets.clone(),
        scripts,
    })
}

/// Resolves the template's attributes and renders the element tag. Explicit
/// input values override template defaults by attribute name; unmatched
/// inputs are appended as extra attributes.
fn render_html(template: &HtmlTemplate, classified: &ClassifiedArgs) -> EngineResult<String> {
    let mut resolved: IndexMap<String, Value> = IndexMap::with_capacity(
        template.attributes.len() + classified.html_attr_args.len(),
    );

    for (name, value) in template.attributes.iter() {
        let value = match value {
            // Only the conventional src attribute receives classified args.
            AttributeValue::Src(spec) if name == "src" => Value::String(compose_url(
                &spec.url,
                classified.html_slug_param.values().next(),
                &spec.params,
                &classified.html_url_params,
                &IndexMap::new(),
            )?),
            AttributeValue::Src(spec) => Value::String(spec.url.clone()),
            AttributeValue::Literal(literal) => Value::String(literal.clone()),
            AttributeValue::Boolean(boolean) => Value::Bool(*boolean),
            AttributeValue::Null => Value::Null,
        };
        resolved.insert(name.clone(), value);
    }

    for (name, value) in &classified.html_attr_args {
        resolved.insert(name.clone(), value.clone());
    }

    Ok(render_element(&template.element, &resolved))
}

/// Resolves one script template against the subset of inputs matching its
/// own declared parameters.
fn render_script(
    script: &ScriptTemplate,
    inputs: &Inputs,
    renderer: &CodeRenderer,
) -> EngineResult<RenderedScript> {
    let args: Inputs = script
        .declared_params()
        .filter_map(|name| inputs.get(name).map(|value| (name.clone(), value.clone())))
        .collect();

    let source = match &script.source {
        ScriptSource::External { url } => ScriptSource::External {
            url: compose_url(url, None, &script.params, &args, &script.optional_params)?,
        },
        ScriptSource::Inline { code } => ScriptSource::Inline {
            code: renderer.render(code, &args, &script.optional_params),
        },
    };

    Ok(RenderedScript {
        strategy: script.strategy,
        location: script.location,
        action: script.action,
        source,
        key: script.key.clone(),
    })
}
