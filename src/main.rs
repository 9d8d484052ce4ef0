//! Subnetron CLI entry point

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use subnetron::server::{self, ServerState, DEFAULT_PORT};
use subnetron::viewer;

#[derive(Parser)]
#[command(name = "subnetron")]
#[command(about = "Serve ONNX subgraph extraction for a model file", long_about = None)]
struct Cli {
    /// Model file to serve
    #[arg(short, long)]
    model: PathBuf,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Launch a viewer process on the model (e.g. "netron")
    #[arg(long)]
    viewer: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> subnetron::ExtractResult<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "subnetron={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Subnetron v{}", subnetron::VERSION);

    // Fail fast on an unreadable model; each request re-loads it afterwards.
    let model = subnetron::io::load_model(&cli.model)?;
    tracing::info!(
        nodes = model.graph.as_ref().map(|g| g.node.len()).unwrap_or(0),
        "serving model {}",
        cli.model.display()
    );

    // Held for the lifetime of the server; killed on drop.
    let _viewer = match &cli.viewer {
        Some(command) => Some(viewer::launch(command, &cli.model)?),
        None => None,
    };

    let state = Arc::new(ServerState::new(cli.model));
    server::serve(state, &cli.host, cli.port).await
}
