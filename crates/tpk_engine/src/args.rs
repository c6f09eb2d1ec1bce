//! Argument classification.
//!
//! Partitions the caller's flat argument map into the disjoint subsets the
//! formatter needs: script parameters, HTML src query parameters, the HTML
//! src slug parameter, and everything else (forwarded as HTML attributes).

use std::collections::HashSet;

use crate::definition::{Inputs, ThirdPartyDefinition};

/// Disjoint argument subsets for one formatting call.
///
/// Subsets only contain names actually present in the inputs; absent names
/// are simply missing, never null entries. Classification produces no
/// errors: unknown names always land in `html_attr_args`.
#[derive(Debug, Default, PartialEq)]
pub struct ClassifiedArgs {
    /// Arguments matching any script's required or optional parameters.
    pub script_params: Inputs,
    /// Arguments matching the HTML src attribute's query parameters.
    pub html_url_params: Inputs,
    /// The argument matching the HTML src slug parameter (at most one).
    pub html_slug_param: Inputs,
    /// All remaining arguments, forwarded as extra HTML attributes.
    pub html_attr_args: Inputs,
}

/// Partitions `inputs` against the definition's declared parameters.
///
/// Groups are computed in fixed precedence order; a name claimed by an
/// earlier group is excluded from later ones.
pub fn classify(inputs: &Inputs, definition: &ThirdPartyDefinition) -> ClassifiedArgs {
    let script_param_names: HashSet<&String> = definition
        .scripts
        .iter()
        .flat_map(|script| script.declared_params())
        .collect();

    let src = definition.html.as_ref().and_then(|html| html.attributes.src());
    let url_param_names: HashSet<&String> =
        src.map(|spec| spec.params.iter().collect()).unwrap_or_default();
    let slug_param_name = src.and_then(|spec| spec.slug_param.as_ref());

    let mut classified = ClassifiedArgs::default();
    for (name, value) in inputs {
        let subset = if script_param_names.contains(name) {
            &mut classified.script_params
        } else if url_param_names.contains(name) {
            &mut classified.html_url_params
        } else if Some(name) == slug_param_name {
            &mut classified.html_slug_param
        } else {
            &mut classified.html_attr_args
        };
        subset.insert(name.clone(), value.clone());
    }

    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ThirdPartyDefinition;
    use serde_json::json;

    fn definition() -> ThirdPartyDefinition {
        ThirdPartyDefinition::from_value(json!({
            "id": "svc",
            "description": "A service.",
            "html": {
                "element": "iframe",
                "attributes": {
                    "src": {
                        "url": "https://example.com/embed/static",
                        "slugParam": "mode",
                        "params": ["key"]
                    }
                }
            },
            "scripts": [
                {
                    "strategy": "worker",
                    "location": "head",
                    "action": "append",
                    "url": "https://example.com/a.js",
                    "params": ["id"],
                    "optionalParams": { "lang": "en" }
                }
            ]
        }))
        .unwrap()
    }

    fn inputs(pairs: &[(&str, serde_json::Value)]) -> Inputs {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_routes_to_disjoint_groups() {
        let args = inputs(&[
            ("id", json!("987")),
            ("lang", json!("de")),
            ("key", json!("123")),
            ("mode", json!("view")),
            ("loading", json!("lazy")),
        ]);
        let classified = classify(&args, &definition());

        assert_eq!(
            classified.script_params,
            inputs(&[("id", json!("987")), ("lang", json!("de"))])
        );
        assert_eq!(classified.html_url_params, inputs(&[("key", json!("123"))]));
        assert_eq!(classified.html_slug_param, inputs(&[("mode", json!("view"))]));
        assert_eq!(classified.html_attr_args, inputs(&[("loading", json!("lazy"))]));
    }

    #[test]
    fn test_script_params_take_precedence() {
        // A name declared by both a script and the src spec belongs to the
        // script group only.
        let mut definition = definition();
        definition.scripts[0].params.push("key".to_string());

        let classified = classify(&inputs(&[("key", json!("123"))]), &definition);
        assert_eq!(classified.script_params.len(), 1);
        assert!(classified.html_url_params.is_empty());
    }

    #[test]
    fn test_absent_names_stay_absent() {
        let classified = classify(&Inputs::new(), &definition());
        assert!(classified.script_params.is_empty());
        assert!(classified.html_url_params.is_empty());
        assert!(classified.html_slug_param.is_empty());
        assert!(classified.html_attr_args.is_empty());
    }

    #[test]
    fn test_unknown_names_forwarded_as_attributes() {
        let classified = classify(&inputs(&[("data-theme", json!("dark"))]), &definition());
        assert_eq!(
            classified.html_attr_args,
            inputs(&[("data-theme", json!("dark"))])
        );
    }
}
