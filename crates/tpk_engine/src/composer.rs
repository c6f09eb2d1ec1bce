//! URL composition.
//!
//! Builds a final URL from a base URL, an optional slug substitution and the
//! declared query parameters. Pre-existing query parameters are preserved
//! and re-encoded; newly added parameters override same-named existing ones;
//! fragments are reattached after the query.

use indexmap::IndexMap;
use serde_json::Value;
use url::Url;

use crate::definition::Inputs;
use crate::error::{EngineError, EngineResult};
use crate::value::{coerce_to_string, is_truthy};

/// Composes the final URL for a src attribute or an external script.
///
/// `params` are required parameter names resolved against `args`; an
/// explicitly supplied falsy value is dropped. `optional_params` map names
/// to defaults: a truthy explicit value wins, otherwise a truthy default is
/// used, otherwise the parameter is omitted.
pub fn compose_url(
    base_url: &str,
    slug: Option<&Value>,
    params: &[String],
    args: &Inputs,
    optional_params: &IndexMap<String, Value>,
) -> EngineResult<String> {
    let mut url = Url::parse(base_url).map_err(|source| EngineError::MalformedUrl {
        url: base_url.to_string(),
        source,
    })?;

    if let Some(slug) = slug {
        replace_last_segment(&mut url, &coerce_to_string(slug));
    }

    let mut added: Vec<(String, String)> = Vec::new();
    for name in params {
        if let Some(value) = args.get(name) {
            if is_truthy(value) {
                added.push((name.clone(), coerce_to_string(value)));
            }
        }
    }
    for (name, default) in optional_params {
        match args.get(name) {
            Some(value) if is_truthy(value) => {
                added.push((name.clone(), coerce_to_string(value)));
            }
            _ => {
                if is_truthy(default) {
                    added.push((name.clone(), coerce_to_string(default)));
                }
            }
        }
    }

    if !added.is_empty() {
        let mut merged: Vec<(String, String)> = url
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        for (name, value) in added {
            merged.retain(|(existing, _)| existing != &name);
            merged.push((name, value));
        }

        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (name, value) in &merged {
            pairs.append_pair(name, value);
        }
    } else if url.query() == Some("") {
        // Never leave a trailing bare '?'.
        url.set_query(None);
    }

    Ok(url.to_string())
}

/// Replaces the last path segment with `slug`, preserving a trailing slash.
/// A base without a path gets `slug` as its sole segment.
fn replace_last_segment(url: &mut Url, slug: &str) {
    let path = url.path().to_string();
    if path.is_empty() || path == "/" {
        url.set_path(slug);
        return;
    }

    let trailing_slash = path.ends_with('/');
    let trimmed = path.trim_end_matches('/');
    let parent_end = trimmed.rfind('/').map(|index| index + 1).unwrap_or(0);
    let mut new_path = format!("{}{}", &trimmed[..parent_end], slug);
    if trailing_slash {
        new_path.push('/');
    }
    url.set_path(&new_path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NO_PARAMS: &[String] = &[];

    fn args(pairs: &[(&str, Value)]) -> Inputs {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    fn params(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_no_params_returns_base_unchanged() {
        let url = compose_url(
            "https://example.com/embed/",
            None,
            &params(&["id", "lang"]),
            &Inputs::new(),
            &IndexMap::new(),
        )
        .unwrap();
        assert_eq!(url, "https://example.com/embed/");
    }

    #[test]
    fn test_sets_declared_params_from_args() {
        let url = compose_url(
            "https://example.com/embed/",
            None,
            &params(&["id", "direction", "lang", "style"]),
            &args(&[("id", json!("8642")), ("lang", json!("es"))]),
            &IndexMap::new(),
        )
        .unwrap();
        assert_eq!(url, "https://example.com/embed/?id=8642&lang=es");
    }

    #[test]
    fn test_slug_replaces_last_segment() {
        let url = compose_url(
            "https://example.com/embed/static",
            Some(&json!("interactive")),
            NO_PARAMS,
            &Inputs::new(),
            &IndexMap::new(),
        )
        .unwrap();
        assert_eq!(url, "https://example.com/embed/interactive");
    }

    #[test]
    fn test_slug_preserves_trailing_slash() {
        let url = compose_url(
            "https://example.com/embed/static/",
            Some(&json!("interactive")),
            NO_PARAMS,
            &Inputs::new(),
            &IndexMap::new(),
        )
        .unwrap();
        assert_eq!(url, "https://example.com/embed/interactive/");
    }

    #[test]
    fn test_slug_on_base_without_path() {
        let url = compose_url(
            "https://example.com",
            Some(&json!("interactive")),
            NO_PARAMS,
            &Inputs::new(),
            &IndexMap::new(),
        )
        .unwrap();
        assert_eq!(url, "https://example.com/interactive");
    }

    #[test]
    fn test_existing_query_preserved_and_merged() {
        let url = compose_url(
            "https://example.com/embed/static?forcedParam=value",
            Some(&json!("interactive")),
            &params(&["id"]),
            &args(&[("id", json!("12345"))]),
            &IndexMap::new(),
        )
        .unwrap();
        assert_eq!(
            url,
            "https://example.com/embed/interactive?forcedParam=value&id=12345"
        );
    }

    #[test]
    fn test_existing_encoded_and_array_query_reencoded() {
        let url = compose_url(
            "https://example.com/p?q=a%26b&arr[]=1&arr[]=2",
            None,
            &params(&["id"]),
            &args(&[("id", json!(9))]),
            &IndexMap::new(),
        )
        .unwrap();
        // Existing values survive decode/re-encode, repeated names included.
        assert_eq!(
            url,
            "https://example.com/p?q=a%26b&arr%5B%5D=1&arr%5B%5D=2&id=9"
        );
    }

    #[test]
    fn test_added_param_overrides_existing() {
        let url = compose_url(
            "https://example.com/?a=1&id=old",
            None,
            &params(&["id"]),
            &args(&[("id", json!("new"))]),
            &IndexMap::new(),
        )
        .unwrap();
        assert_eq!(url, "https://example.com/?a=1&id=new");
    }

    #[test]
    fn test_fragment_reattached_after_query() {
        let url = compose_url(
            "https://example.com/page#section",
            None,
            &params(&["x"]),
            &args(&[("x", json!(1))]),
            &IndexMap::new(),
        )
        .unwrap();
        assert_eq!(url, "https://example.com/page?x=1#section");
    }

    #[test]
    fn test_values_are_encoded() {
        let url = compose_url(
            "https://example.com/search",
            None,
            &params(&["q"]),
            &args(&[("q", json!("a&b c"))]),
            &IndexMap::new(),
        )
        .unwrap();
        assert_eq!(url, "https://example.com/search?q=a%26b+c");
    }

    #[test]
    fn test_explicit_falsy_value_dropped() {
        let url = compose_url(
            "https://example.com/embed/",
            None,
            &params(&["id"]),
            &args(&[("id", json!(""))]),
            &IndexMap::new(),
        )
        .unwrap();
        assert_eq!(url, "https://example.com/embed/");
    }

    #[test]
    fn test_optional_param_default_applies() {
        let mut optional = IndexMap::new();
        optional.insert("l".to_string(), json!("dataLayer"));
        let url = compose_url(
            "https://example.com/gtm.js",
            None,
            NO_PARAMS,
            &Inputs::new(),
            &optional,
        )
        .unwrap();
        assert_eq!(url, "https://example.com/gtm.js?l=dataLayer");
    }

    #[test]
    fn test_optional_param_explicit_value_wins() {
        let mut optional = IndexMap::new();
        optional.insert("l".to_string(), json!("dataLayer"));
        let url = compose_url(
            "https://example.com/gtm.js",
            None,
            NO_PARAMS,
            &args(&[("l", json!("customLayer"))]),
            &optional,
        )
        .unwrap();
        assert_eq!(url, "https://example.com/gtm.js?l=customLayer");
    }

    #[test]
    fn test_optional_param_falsy_explicit_falls_back_to_default() {
        let mut optional = IndexMap::new();
        optional.insert("l".to_string(), json!("dataLayer"));
        let url = compose_url(
            "https://example.com/gtm.js",
            None,
            NO_PARAMS,
            &args(&[("l", json!(""))]),
            &optional,
        )
        .unwrap();
        assert_eq!(url, "https://example.com/gtm.js?l=dataLayer");
    }

    #[test]
    fn test_optional_param_falsy_default_omitted() {
        let mut optional = IndexMap::new();
        optional.insert("l".to_string(), json!(""));
        let url = compose_url(
            "https://example.com/gtm.js",
            None,
            NO_PARAMS,
            &Inputs::new(),
            &optional,
        )
        .unwrap();
        assert_eq!(url, "https://example.com/gtm.js");
    }

    #[test]
    fn test_malformed_base_url() {
        let err = compose_url("not a url", None, NO_PARAMS, &Inputs::new(), &IndexMap::new())
            .unwrap_err();
        assert!(matches!(err, EngineError::MalformedUrl { .. }));
    }
}
