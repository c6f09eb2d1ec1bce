//! List command - List built-in integrations.

use anyhow::Result;
use clap::Args;

use tpk_integrations::catalog;

#[derive(Args)]
pub struct ListArgs {}

pub fn execute(_args: ListArgs) -> Result<()> {
    for id in catalog::ids() {
        let integration = catalog::by_id(id)?;
        println!("{:<20} {}", integration.id(), integration.description());
    }
    Ok(())
}
