use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use transparencia::{backend::BackendClient, config, server};

#[derive(Parser)]
#[command(name = "transparencia", version, about = "Public government document portal")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, env = "TRANSPARENCIA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the portal web server.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on.
        #[arg(long, default_value_t = 3000, env = "PORT")]
        port: u16,
    },
    /// Fetch the document list from the backend and print it as JSON.
    Fetch,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("transparencia=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let settings = config::load_settings(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { host, port } => {
            server::serve(&settings, &host, port).await?;
        }
        Command::Fetch => {
            let client = BackendClient::new(&settings);
            let documents = client.fetch_documents().await?;
            println!("{}", serde_json::to_string_pretty(&documents)?);
        }
    }

    Ok(())
}
