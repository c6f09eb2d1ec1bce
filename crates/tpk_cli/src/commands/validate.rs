//! Validate command - Validate a definition file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use tpk_engine::{ThirdPartyDefinition, ValidationStrength};

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the definition JSON file
    #[arg(short, long)]
    file: PathBuf,

    /// Skip the html src attribute requirement
    #[arg(long)]
    lenient: bool,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating definition file: {:?}", args.file);

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read definition file {:?}", args.file))?;
    let strength = if args.lenient {
        ValidationStrength::Lenient
    } else {
        ValidationStrength::Strict
    };
    let definition = ThirdPartyDefinition::from_json_with(&content, strength)?;

    println!("Definition is valid: {} ({})", definition.id, definition.description);
    Ok(())
}
