use std::net::SocketAddr;

use clap::Parser;
use nestegg::api::{AppState, Cli, Command, run_http_server, run_project_command};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Project(args) => {
            let state = AppState::default();
            match run_project_command(args, &state.currencies) {
                Ok(output) => print!("{output}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Serve(args) => {
            let addr = SocketAddr::new(args.host, args.port);
            if let Err(e) = run_http_server(addr, AppState::default()).await {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
    }
}
