//! Recofeed CLI
//!
//! Terminal feed client:
//! - List the catalog
//! - Ask for one product's recommendations
//! - Watch the channel interactively
//! - Print a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use recofeed::api::dto::ProductListResponse;
use recofeed::client::{FeedClient, FeedEvent};
use recofeed::config::{generate_default_config, Config};
use recofeed::feed::SendDecision;
use recofeed::logging::init_logging;

#[derive(Parser)]
#[command(name = "recofeed")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Product recommendation feed client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Recommendation channel URL (default from config: ws://localhost:5000/ws)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// HTTP base URL for catalog lookups (default from config: http://localhost:5000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the products the server knows
    Products,

    /// Send one selection and print the recommendations
    Recommend {
        /// Product identifier, sent verbatim
        product: String,
    },

    /// Keep the channel open; every stdin line is sent as a selection
    Watch,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_default();
    init_logging(&config.logging);

    let url = cli.url.unwrap_or(config.client.url);
    let api_url = cli.api_url.unwrap_or(config.client.api_url);
    let reply_timeout = Duration::from_secs(config.client.reply_timeout_secs);

    match cli.command {
        Commands::Products => {
            let endpoint = format!("{}/api/v1/products", api_url.trim_end_matches('/'));
            let response: ProductListResponse = reqwest::get(&endpoint)
                .await
                .with_context(|| format!("Request to {} failed", endpoint))?
                .error_for_status()?
                .json()
                .await
                .context("Unexpected product list format")?;

            for product in response.products {
                println!("{}", product);
            }
        }

        Commands::Recommend { product } => {
            let mut client = FeedClient::connect(&url).await?;

            match client.send_selection(&product).await? {
                SendDecision::Transmit(_) => {
                    let list = client.next_reply_within(reply_timeout).await?;
                    print!("{}", list);
                }
                SendDecision::Prompt(prompt) => {
                    client.close().await;
                    anyhow::bail!("{}", prompt);
                }
            }

            client.close().await;
        }

        Commands::Watch => watch(&url).await?,

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Interactive loop: stdin lines go out, rendered lists come back
async fn watch(url: &str) -> anyhow::Result<()> {
    let mut client = FeedClient::connect(url).await?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => {
                        if let SendDecision::Prompt(prompt) = client.send_selection(&line).await? {
                            eprintln!("{}", prompt);
                        }
                    }
                    None => {
                        // EOF: close and drain until the server confirms
                        stdin_open = false;
                        client.close().await;
                    }
                }
            }
            event = client.next_event() => {
                match event {
                    Some(FeedEvent::Opened) => {
                        eprintln!("Connected to {}. Type a product and press Enter.", client.url());
                    }
                    Some(FeedEvent::Rendered(list)) => print!("{}", list),
                    Some(FeedEvent::Malformed(reason)) => eprintln!("Ignored reply: {}", reason),
                    Some(FeedEvent::Closed { .. }) | None => break,
                }
            }
        }
    }

    Ok(())
}
