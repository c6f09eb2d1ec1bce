//! Render command - Resolve an integration against arguments.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::Value;
use tracing::info;

use tpk_engine::{Inputs, ThirdPartyDefinition, ValidationStrength};
use tpk_integrations::{catalog, Integration};

#[derive(Args)]
pub struct RenderArgs {
    /// Id of a built-in integration to render
    #[arg(short, long, conflicts_with = "file")]
    integration: Option<String>,

    /// Path to a definition JSON file to render
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Arguments as key=value pairs; values parse as JSON when possible
    #[arg(short, long = "arg", value_name = "KEY=VALUE")]
    args: Vec<String>,

    /// Skip the html src attribute requirement when validating
    #[arg(long)]
    lenient: bool,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let integration = resolve_integration(&args)?;
    info!("Rendering integration: {}", integration.id());

    let inputs = parse_inputs(&args.args)?;
    let output = integration.format(&inputs)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn resolve_integration(args: &RenderArgs) -> Result<Integration> {
    match (&args.integration, &args.file) {
        (Some(id), None) => Ok(catalog::by_id(id)?),
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read definition file {:?}", path))?;
            let strength = if args.lenient {
                ValidationStrength::Lenient
            } else {
                ValidationStrength::Strict
            };
            let definition = ThirdPartyDefinition::from_json_with(&content, strength)?;
            Ok(Integration::new(definition))
        }
        _ => bail!("Provide exactly one of --integration or --file"),
    }
}

/// Parse repeated `key=value` arguments into an input map.
///
/// Values that parse as JSON are kept as typed values, everything else is
/// treated as a plain string.
fn parse_inputs(pairs: &[String]) -> Result<Inputs> {
    let mut inputs = Inputs::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("Invalid argument '{}', expected key=value", pair))?;
        let value = serde_json::from_str(value)
            .unwrap_or_else(|_| Value::String(value.to_string()));
        inputs.insert(key.to_string(), value);
    }
    Ok(inputs)
}
