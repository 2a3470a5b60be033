//! worksbot CLI: push a text message to a LINE WORKS recipient list.
//! Settings from worksbot.toml, input file via -f, log level via RUST_LOG.

use anyhow::{Context, Result};
use clap::Parser;
use worksbot_cli::{load_settings, summarize, Cli, Commands};
use worksbot_core::init_tracing;
use worksbot_sender::{build_http_client, read_input, MessageDispatcher, TextMessageBot};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let log_file =
        std::env::var("LOG_FILE").unwrap_or_else(|_| "logs/worksbot.log".to_string());
    init_tracing(&log_file).context("Initialize tracing")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Send { file, settings } => {
            let settings = load_settings(settings);
            let input = read_input(&file)
                .with_context(|| format!("Read message input file {}", file.display()))?;

            let bot = TextMessageBot::new(settings.bot_no.clone());
            let client = build_http_client().context("Build HTTP client")?;
            let dispatcher = MessageDispatcher::new(settings, client, bot);

            let records = dispatcher.run(&input).await;
            println!("{}", summarize(&records));
            Ok(())
        }
    }
}
