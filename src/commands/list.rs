//! List command

use netpath_core::error::Result;
use netpath_core::store::NetworkStore;

use crate::cli::{Cli, OutputFormat};

/// Print the names of all saved networks, sorted
pub fn execute(cli: &Cli, store: &dyn NetworkStore) -> Result<()> {
    let names = store.list()?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "networks": names }));
        }
        OutputFormat::Human => {
            if names.is_empty() {
                if !cli.quiet {
                    println!("No saved networks");
                }
                return Ok(());
            }
            for name in &names {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
