//! CLI command definitions.
//!
//! This module defines the command structure for the ThirdPartyKit CLI.
//! Each subcommand maps to one step of the definition workflow.

use clap::{Parser, Subcommand};

pub mod list;
pub mod render;
pub mod validate;

/// ThirdPartyKit - third-party integration formatter
#[derive(Parser)]
#[command(name = "tpk")]
#[command(version, about = "ThirdPartyKit - third-party integration formatter")]
#[command(long_about = r#"
ThirdPartyKit resolves declarative third-party integration definitions
(analytics tags, embeds, tag managers) against caller arguments and emits
ready-to-insert HTML, stylesheet URLs and script directives.

WORKFLOWS:
  render    → Resolve an integration against arguments, print output JSON
  validate  → Parse and validate a definition file
  list      → List the built-in integrations

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Definition or validation error
  4 - Render error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an integration to output JSON
    Render(render::RenderArgs),

    /// Validate a definition file
    Validate(validate::ValidateArgs),

    /// List built-in integrations
    List(list::ListArgs),
}
