//! FancyTalk Server Binary
//!
//! Starts the UDP server for FancyTalk.

use clap::Parser;
use fancytalk::network::Server;
use fancytalk::{Config, Dispatcher, MatchRule, MessageStore};
use tracing_subscriber::{fmt, EnvFilter};

/// FancyTalk Server
#[derive(Parser, Debug)]
#[command(name = "fancytalk-server")]
#[command(about = "Answers styled text queries over UDP")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:65432")]
    listen: String,

    /// Require queries to equal a key instead of prefixing it
    #[arg(short, long)]
    exact_match: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fancytalk=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    let match_rule = if args.exact_match {
        MatchRule::Exact
    } else {
        MatchRule::Prefix
    };

    tracing::info!("FancyTalk Server v{}", fancytalk::VERSION);
    tracing::info!("Listen address: {}", args.listen);
    tracing::info!("Match rule: {:?}", match_rule);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .match_rule(match_rule)
        .build();

    let store = MessageStore::build();
    tracing::info!("Message store loaded with {} entries", store.len());

    let mut server = match Server::bind(&config, Dispatcher::new(store)) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
