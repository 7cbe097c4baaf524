//! Load command

use netpath_core::error::Result;
use netpath_core::format::network_human;
use netpath_core::store::NetworkStore;

use crate::cli::{Cli, OutputFormat};

/// Print the stored network `name`
pub fn execute(cli: &Cli, store: &dyn NetworkStore, name: &str) -> Result<()> {
    let network = store.get(name)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&network)?),
        OutputFormat::Human => println!("{}", network_human(name, &network)),
    }

    Ok(())
}
