use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bedrock_chatbot::bedrock::Responder;
use bedrock_chatbot::config::Config;
use bedrock_chatbot::server::{self, AppState};

/// Environment variable holding the Bedrock API key.
const BEARER_TOKEN_VAR: &str = "AWS_BEARER_TOKEN_BEDROCK";

#[derive(Parser, Debug)]
#[command(
    name = "bedrock-chatbot",
    version,
    about = "Chatbot backend answering through Amazon Bedrock"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Override the configured listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the configured listen port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config).await?;
    info!(path = %cli.config.display(), "configuration loaded");

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // Boot proceeds without credentials; calls fail per request until the
    // token is provided.
    let bearer_token = std::env::var(BEARER_TOKEN_VAR).ok();
    if bearer_token.is_none() {
        warn!("{BEARER_TOKEN_VAR} is not set, model calls will fail");
    }

    let responder = Responder::from_config(&config.bedrock, bearer_token)?;
    let state = AppState {
        responder: Arc::new(responder),
    };

    let app = server::build_app(state, config.server.request_timeout_seconds);
    server::serve(app, &config.server.host, config.server.port).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
