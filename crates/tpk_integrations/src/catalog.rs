//! Built-in integration definitions.
//!
//! Each integration embeds its JSON definition at compile time and parses it
//! on demand; definitions are argument-agnostic, so callers typically parse
//! once and format many times.

use tpk_engine::{ThirdPartyDefinition, ValidationStrength};

use crate::error::{IntegrationError, IntegrationResult};
use crate::Integration;

const GOOGLE_ANALYTICS: &str = include_str!("../data/google-analytics.json");
const GOOGLE_TAG_MANAGER: &str = include_str!("../data/google-tag-manager.json");
const GOOGLE_MAPS_EMBED: &str = include_str!("../data/google-maps-embed.json");
const YOUTUBE_EMBED: &str = include_str!("../data/youtube-embed.json");

/// Identifiers of all built-in integrations.
pub const BUILTIN_IDS: [&str; 4] = [
    "google-analytics",
    "google-tag-manager",
    "google-maps-embed",
    "youtube-embed",
];

/// Google Analytics: external gtag.js script plus inline bootstrap code.
pub fn google_analytics() -> IntegrationResult<Integration> {
    parse(GOOGLE_ANALYTICS, ValidationStrength::Strict)
}

/// Google Tag Manager: external gtm.js script plus inline dataLayer setup.
pub fn google_tag_manager() -> IntegrationResult<Integration> {
    parse(GOOGLE_TAG_MANAGER, ValidationStrength::Strict)
}

/// Google Maps Embed: parameterized iframe with a mode slug.
pub fn google_maps_embed() -> IntegrationResult<Integration> {
    parse(GOOGLE_MAPS_EMBED, ValidationStrength::Strict)
}

/// YouTube Embed via lite-youtube: custom element with no src attribute,
/// so the definition needs lenient validation.
pub fn youtube_embed() -> IntegrationResult<Integration> {
    parse(YOUTUBE_EMBED, ValidationStrength::Lenient)
}

/// Convenience accessor over [`BUILTIN_IDS`].
pub fn ids() -> &'static [&'static str] {
    &BUILTIN_IDS
}

/// Looks up a built-in integration by its identifier.
pub fn by_id(id: &str) -> IntegrationResult<Integration> {
    match id {
        "google-analytics" => google_analytics(),
        "google-tag-manager" => google_tag_manager(),
        "google-maps-embed" => google_maps_embed(),
        "youtube-embed" => youtube_embed(),
        other => Err(IntegrationError::Unknown(other.to_string())),
    }
}

fn parse(json: &str, strength: ValidationStrength) -> IntegrationResult<Integration> {
    let definition = ThirdPartyDefinition::from_json_with(json, strength)?;
    Ok(Integration::new(definition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tpk_engine::Inputs;

    fn inputs(pairs: &[(&str, serde_json::Value)]) -> Inputs {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_all_builtins_parse() {
        for id in BUILTIN_IDS {
            let integration = by_id(id).unwrap();
            assert_eq!(integration.id(), id);
        }
    }

    #[test]
    fn test_unknown_id() {
        assert!(matches!(
            by_id("acme-pixel"),
            Err(IntegrationError::Unknown(id)) if id == "acme-pixel"
        ));
    }

    #[test]
    fn test_google_analytics_format() {
        let output = google_analytics()
            .unwrap()
            .format(&inputs(&[("id", json!("G-12345"))]))
            .unwrap();

        assert_eq!(
            output.scripts[0].url(),
            Some("https://www.googletagmanager.com/gtag/js?id=G-12345")
        );
        assert_eq!(
            output.scripts[1].code(),
            Some(
                "window.dataLayer=window.dataLayer||[];window.gtag=function gtag()\
                 {window.dataLayer.push(arguments);};gtag('js',new Date());\
                 gtag('config',\"G-12345\")"
            )
        );
    }

    #[test]
    fn test_google_analytics_debug_mode() {
        let output = google_analytics()
            .unwrap()
            .format(&inputs(&[("id", json!("G-12345")), ("debug", json!(true))]))
            .unwrap();

        assert_eq!(
            output.scripts[1].code(),
            Some(
                "window.dataLayer=window.dataLayer||[];window.gtag=function gtag()\
                 {window.dataLayer.push(arguments);};gtag('js',new Date());\
                 gtag('config',\"G-12345\",{'debug_mode':true})"
            )
        );
    }

    #[test]
    fn test_google_tag_manager_format() {
        let output = google_tag_manager()
            .unwrap()
            .format(&inputs(&[("id", json!("GTM-XYZ"))]))
            .unwrap();

        // The falsy default for "l" stays out of the URL.
        assert_eq!(
            output.scripts[0].url(),
            Some("https://www.googletagmanager.com/gtm.js?id=GTM-XYZ")
        );
        assert_eq!(
            output.scripts[1].code(),
            Some(
                "window[\"dataLayer\"]=window[\"dataLayer\"]||[];window[\"dataLayer\"]\
                 .push({'gtm.start':new Date().getTime(),event:'gtm.js'})"
            )
        );
    }

    #[test]
    fn test_google_maps_embed_format() {
        let output = google_maps_embed()
            .unwrap()
            .format(&inputs(&[("mode", json!("view")), ("key", json!("123"))]))
            .unwrap();

        assert_eq!(
            output.html.as_deref(),
            Some(
                "<iframe loading=\"lazy\" src=\"https://www.google.com/maps/embed/v1/view?key=123\" \
                 referrerpolicy=\"no-referrer-when-downgrade\" frameborder=\"0\" style=\"border:0\" \
                 allowfullscreen></iframe>"
            )
        );
    }

    #[test]
    fn test_youtube_embed_format() {
        let output = youtube_embed()
            .unwrap()
            .format(&inputs(&[("videoid", json!("ogfYd705cRs"))]))
            .unwrap();

        assert_eq!(
            output.html.as_deref(),
            Some("<lite-youtube videoid=\"ogfYd705cRs\"></lite-youtube>")
        );
        assert_eq!(output.stylesheets.len(), 1);
        assert_eq!(
            output.scripts[0].url(),
            Some("https://cdn.jsdelivr.net/gh/paulirish/lite-youtube-embed@master/src/lite-yt-embed.js")
        );
    }
}
