//! Binary for the OTC desk bot: env config, tracing, component assembly,
//! long polling.

use anyhow::Result;
use clap::Parser;

mod components;
mod config;

use config::BotConfig;

/// OTC desk Telegram bot.
#[derive(Parser)]
struct Cli {
    /// Bot token override; falls back to TELEGRAM_BOT_TOKEN.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BotConfig::from_env(cli.token)?;
    desk_core::init_tracing(&config.log_file)?;

    components::run(config).await
}
