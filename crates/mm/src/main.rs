use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mm")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the feedback service.
    Serve,
    /// Print the OpenAPI document.
    Openapi,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve => {
            let db_path = std::env::var("MOCKMATE_DB_PATH")
                .unwrap_or_else(|_| ".mockmate/mockmate.db".to_string());
            if let Some(parent) = Path::new(&db_path).parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let port = std::env::var("MOCKMATE_PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(4860);
            let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port);
            let state = mm_serve::AppState { db_path };
            tracing::info!(%addr, "mockmate listening");
            if let Err(err) = mm_serve::serve(state, addr).await {
                tracing::error!(error = %err, "serve error");
            }
        }
        Command::Openapi => {
            println!("{}", mm_serve::openapi::generate_spec());
        }
    }
}
