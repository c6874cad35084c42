//! Study Buddy - student helper chat service
//!
//! `serve` runs the HTTP API and web page, `chat` opens a terminal client
//! against a running server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use study_buddy::api::http_router;
use study_buddy::client::HelperClient;
use study_buddy::config::HelperConfig;
use study_buddy::http::create_shared_client;
use study_buddy::repl::Repl;
use study_buddy::state::create_app_state;

#[derive(Parser)]
#[command(name = "study-buddy")]
#[command(about = "Math steps, quizzes and answers for students")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Bind host
        #[arg(long, env = "STUDY_HOST")]
        host: Option<String>,

        /// Bind port
        #[arg(long, env = "STUDY_PORT")]
        port: Option<u16>,

        /// Gemini API base URL
        #[arg(long, env = "GEMINI_BASE_URL")]
        gemini_base_url: Option<String>,
    },
    /// Chat from the terminal with a running server
    Chat {
        /// Server base URL
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let mut config = HelperConfig::from_env();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    match args.command.unwrap_or(Command::Serve { host: None, port: None, gemini_base_url: None }) {
        Command::Serve { host, port, gemini_base_url } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(url) = gemini_base_url {
                config.gemini_base_url = url;
            }
            serve(config).await
        }
        Command::Chat { url } => {
            let client = HelperClient::new(create_shared_client(config.llm_timeout()), url);
            Repl::new(client)?.run().await
        }
    }
}

async fn serve(config: HelperConfig) -> Result<()> {
    config.validate()?;

    info!("Starting Study Buddy {}", env!("CARGO_PKG_VERSION"));
    info!("General model: {} (temperature {})", config.general_model, config.general_temperature);
    info!("Tool model: {} (temperature {})", config.tool_model, config.tool_temperature);

    let app_state = create_app_state(&config, create_shared_client(config.llm_timeout()));
    let app = http_router(app_state, &config.cors_origin);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
