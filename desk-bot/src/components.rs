//! Component assembly: auth, adapters, middleware stack, command registry
//! and the dispatch chain, wired in startup order.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use desk_core::{ChatLogger, CommandVisibility};
use desk_telegram::{run_repl, TelegramBotAdapter};
use drive_store::GoogleDriveStore;
use google_auth::{ServiceAccountAuth, SCOPE_DRIVE_READONLY, SCOPE_SPREADSHEETS};
use handler_chain::{CommandRegistry, DispatchChain};
use handlers::{KeyedLookupHandler, LookupDomain, StartHandler};
use middleware::{AccessMiddleware, ActivityLogMiddleware, CommandScopeMiddleware};
use sheets_lookup::GoogleSheetsSource;
use tracing::info;

use crate::config::BotConfig;

/// Commands usable only in private chats.
const PRIVATE_ONLY_COMMANDS: &[&str] = &["start"];
/// Commands usable only in group chats.
const GROUP_ONLY_COMMANDS: &[&str] = &["bdetails", "atme_address"];

/// Builds every component and runs the REPL until the process stops.
pub async fn run(config: BotConfig) -> Result<()> {
    let teloxide_bot = teloxide::Bot::new(config.bot_token.clone());
    let bot: Arc<dyn desk_core::Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let auth = Arc::new(
        ServiceAccountAuth::from_key_file(
            Path::new(&config.service_account_key_path),
            &[SCOPE_SPREADSHEETS, SCOPE_DRIVE_READONLY],
        )
        .await
        .context("failed to load the Google service account key")?,
    );
    let source = Arc::new(GoogleSheetsSource::new(
        auth.clone(),
        config.spreadsheet_id.clone(),
    ));
    let files = Arc::new(
        GoogleDriveStore::new(auth, PathBuf::from(&config.tmp_files_dir))
            .await
            .context("failed to create the temp files directory")?,
    );

    let chat_log = Arc::new(
        ChatLogger::open(Path::new(&config.chat_log_file))
            .context("failed to open the chat activity log")?,
    );

    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(StartHandler::new(bot.clone())))?;
    registry.register(Arc::new(KeyedLookupHandler::new(
        LookupDomain::BankDetails,
        source.clone(),
        files.clone(),
        bot.clone(),
    )))?;
    registry.register(Arc::new(KeyedLookupHandler::new(
        LookupDomain::CryptoAddress,
        source,
        files,
        bot.clone(),
    )))?;
    let registry = Arc::new(registry);

    info!(
        commands = ?registry.registered_commands(),
        "Command handlers registered"
    );

    let visibility = CommandVisibility::new(PRIVATE_ONLY_COMMANDS, GROUP_ONLY_COMMANDS);
    let chain = DispatchChain::new(registry, bot.clone())
        .add_middleware(Arc::new(ActivityLogMiddleware::new(chat_log)))
        .add_middleware(Arc::new(CommandScopeMiddleware::new(visibility)))
        .add_middleware(Arc::new(AccessMiddleware::new(
            config.access_list.clone(),
            bot,
        )));

    info!("Bot started successfully");

    run_repl(teloxide_bot, chain).await
}
