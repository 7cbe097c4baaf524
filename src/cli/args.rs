use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Network name
    pub name: String,

    /// JSON file with `nodes` and `edges` (reads stdin when omitted or `-`)
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PathArgs {
    /// Source node
    pub source: String,

    /// Destination node
    pub destination: String,

    /// Saved network to search
    #[arg(long, short, conflicts_with = "file", required_unless_present = "file")]
    pub network: Option<String>,

    /// Search a network read from a JSON file instead (`-` for stdin)
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind (default from config, else 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (default from config, else 5000)
    #[arg(long, short)]
    pub port: Option<u16>,
}
