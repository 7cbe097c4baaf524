//! Save command

use netpath_core::error::Result;
use netpath_core::graph::Network;
use netpath_core::store::NetworkStore;

use super::input::read_network;
use crate::cli::{Cli, OutputFormat, SaveArgs};

/// Validate the network input and store it under `args.name`
pub fn execute(cli: &Cli, store: &dyn NetworkStore, args: &SaveArgs) -> Result<()> {
    let raw = read_network(args.file.as_deref())?;
    let network = Network::from_raw(&raw)?;
    store.put(&args.name, &network)?;

    tracing::info!(
        network = %args.name,
        nodes = network.nodes.len(),
        edges = network.edges.len(),
        "network saved"
    );

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "message": "Network saved successfully.",
                    "name": args.name,
                    "nodes": network.nodes.len(),
                    "edges": network.edges.len(),
                })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Saved network '{}' ({} nodes, {} edges)",
                    args.name,
                    network.nodes.len(),
                    network.edges.len()
                );
            }
        }
    }

    Ok(())
}
