//! REPL runner: converts teloxide messages to core updates and hands them
//! to the dispatch chain, one spawned task per message.

use anyhow::Result;
use handler_chain::DispatchChain;
use teloxide::prelude::*;
use tracing::{info, instrument};

use crate::adapters::TelegramUpdateWrapper;

/// Starts long polling with the given teloxide Bot and dispatch chain. Each
/// message is converted to a core Update and processed in a spawned task so
/// the polling loop is never blocked by adapter I/O.
#[instrument(skip(bot, chain))]
pub async fn run_repl(bot: teloxide::Bot, chain: DispatchChain) -> Result<()> {
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let update = TelegramUpdateWrapper(&msg).to_update();

            match update.text.as_deref() {
                Some(text) => {
                    info!(
                        user_id = ?update.user_id(),
                        chat_id = update.chat.id,
                        message_content = %text,
                        "Received message"
                    );
                }
                None => {
                    info!(
                        user_id = ?update.user_id(),
                        chat_id = update.chat.id,
                        "Received non-text message"
                    );
                }
            }

            // Process in a spawned task so the REPL returns immediately.
            tokio::spawn(async move {
                chain.process(&update).await;
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
