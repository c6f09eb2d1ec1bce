//! ThirdPartyKit CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Definition or validation error
//! - 4: Render error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const DEFINITION_ERROR: u8 = 3;
    pub const RENDER_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    // Initialize logging
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("tpk=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::List(args) => commands::list::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    use tpk_engine::EngineError;
    use tpk_integrations::IntegrationError;

    fn categorize_engine(e: &EngineError) -> u8 {
        match e {
            EngineError::InvalidDefinition(_) | EngineError::Json(_) => {
                ExitCodes::DEFINITION_ERROR
            }
            EngineError::MalformedUrl { .. } | EngineError::AttributeNotFound(_) => {
                ExitCodes::RENDER_ERROR
            }
        }
    }

    for cause in e.chain() {
        if let Some(engine) = cause.downcast_ref::<EngineError>() {
            return categorize_engine(engine);
        }
        if let Some(integration) = cause.downcast_ref::<IntegrationError>() {
            return match integration {
                IntegrationError::Unknown(_) => ExitCodes::INVALID_ARGS,
                IntegrationError::Engine(engine) => categorize_engine(engine),
                IntegrationError::Io(_) => ExitCodes::GENERAL_ERROR,
            };
        }
    }

    ExitCodes::GENERAL_ERROR
}
