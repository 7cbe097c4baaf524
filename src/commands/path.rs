//! Shortest path command

use netpath_core::error::Result;
use netpath_core::format::path_human;
use netpath_core::query::PathQuery;
use netpath_core::store::NetworkStore;

use super::input::read_network;
use crate::cli::{Cli, OutputFormat, PathArgs};

/// Execute the path command against a saved or file-supplied network
pub fn execute(cli: &Cli, store: &dyn NetworkStore, args: &PathArgs) -> Result<()> {
    let query = match &args.network {
        Some(name) => PathQuery::named(name.as_str(), args.source.as_str(), args.destination.as_str()),
        None => PathQuery::inline(
            read_network(args.file.as_deref())?,
            args.source.as_str(),
            args.destination.as_str(),
        ),
    };

    let result = query.execute(store)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.to_json())?),
        OutputFormat::Human => println!("{}", path_human(&result)),
    }

    Ok(())
}
