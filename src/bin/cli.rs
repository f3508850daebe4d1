//! FancyTalk CLI Client
//!
//! Sends one query and prints the styled response.

use std::time::Duration;

use clap::Parser;
use fancytalk::network::Client;
use fancytalk::render::{render, render_plain};
use fancytalk::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// FancyTalk CLI
#[derive(Parser, Debug)]
#[command(name = "fancytalk-cli")]
#[command(about = "Query a FancyTalk server")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:65432")]
    server: String,

    /// Reply timeout in milliseconds (0 waits forever)
    #[arg(short, long, default_value = "2000")]
    timeout_ms: u64,

    /// Print the payload without ANSI styling
    #[arg(short, long)]
    plain: bool,

    /// Query text, e.g. "greeting", "hamlet" or "exit"
    query: String,
}

fn main() {
    // Logs go to stderr so stdout only carries the response
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .server_addr(&args.server)
        .client_timeout_ms(args.timeout_ms)
        .build();

    let timeout = Some(Duration::from_millis(config.client_timeout_ms));

    let result = Client::connect(config.server_addr.as_str(), timeout)
        .and_then(|mut client| client.query(args.query));

    match result {
        Ok(response) => {
            if args.plain {
                println!("{}", render_plain(&response));
            } else {
                println!("{}", render(&response));
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
