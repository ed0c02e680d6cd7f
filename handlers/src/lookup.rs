use std::sync::Arc;

use async_trait::async_trait;
use desk_core::{command_argument, Bot, CommandHandler, Result, Update};
use drive_store::FileStore;
use sheets_lookup::LookupSource;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::LookupDomain;

/// Fixed reply when the lookup source itself is unavailable.
const SOURCE_FAILURE_TEXT: &str =
    "❌ Internal error: Failed to retrieve current bank details from the source.";
/// Fixed reply when a referenced confirmation file cannot be resolved.
const FILE_UNAVAILABLE_TEXT: &str = "⚠️ Confirmation file not found or not downloaded.";
/// Fixed reply when the resolved file could not be sent.
const FILE_SEND_FAILED_TEXT: &str = "❌ Error sending confirmation file.";

/// Runs the lookup-and-respond protocol for one [`LookupDomain`]: parse the
/// key, query the lookup source, reply, optionally attach the confirmation
/// file, clean up. Source and file failures are recovered here with fixed
/// replies; they never count as handler failures.
pub struct KeyedLookupHandler {
    domain: LookupDomain,
    commands: [&'static str; 1],
    source: Arc<dyn LookupSource>,
    files: Arc<dyn FileStore>,
    bot: Arc<dyn Bot>,
}

impl KeyedLookupHandler {
    pub fn new(
        domain: LookupDomain,
        source: Arc<dyn LookupSource>,
        files: Arc<dyn FileStore>,
        bot: Arc<dyn Bot>,
    ) -> Self {
        Self {
            domain,
            commands: [domain.command()],
            source,
            files,
            bot,
        }
    }

    async fn lookup_and_respond(&self, update: &Update, key: &str) -> Result<()> {
        let record = match self.source.get_record(self.domain.table(), key).await {
            Ok(record) => record,
            Err(e) => {
                error!(
                    table = %self.domain.table(),
                    key = %key,
                    error = %e,
                    "Lookup source unavailable"
                );
                return self.bot.send_message(&update.chat, SOURCE_FAILURE_TEXT).await;
            }
        };

        let Some(record) = record else {
            error!(key = %key, user_id = ?update.user_id(), "Lookup key not found");
            return self
                .bot
                .send_message(&update.chat, self.domain.not_found_text())
                .await;
        };

        info!(table = %self.domain.table(), key = %key, "Lookup succeeded");
        self.bot
            .send_message(&update.chat, &self.domain.format(&record))
            .await?;

        if self.domain.attaches_file() {
            if let Some(reference) = record.file_reference() {
                debug!(key = %key, reference = %reference, "Record carries a file reference");
                self.send_confirmation(update, key, reference).await?;
            }
        }

        Ok(())
    }

    async fn send_confirmation(&self, update: &Update, key: &str, reference: &str) -> Result<()> {
        match self.files.resolve_to_local_path(reference).await {
            Some(download) => {
                let caption = self.domain.attachment_caption(key);
                let sent = self
                    .bot
                    .send_document(&update.chat, download.path(), &caption)
                    .await;
                // The temp file goes away after the send attempt, whatever
                // the attempt's outcome.
                drop(download);

                match sent {
                    Ok(()) => {
                        info!(key = %key, "Confirmation file sent");
                    }
                    Err(e) => {
                        error!(key = %key, error = %e, "Confirmation file send failed");
                        self.bot
                            .send_message(&update.chat, FILE_SEND_FAILED_TEXT)
                            .await?;
                    }
                }
            }
            None => {
                error!(key = %key, "Confirmation file not resolved");
                self.bot
                    .send_message(&update.chat, FILE_UNAVAILABLE_TEXT)
                    .await?;
            }
        }

        Ok(())
    }
}

#[async_trait]
impl CommandHandler for KeyedLookupHandler {
    fn commands(&self) -> &[&'static str] {
        &self.commands
    }

    #[instrument(skip(self, update))]
    async fn handle(&self, update: &Update) -> Result<()> {
        let text = update.text.as_deref().unwrap_or("");
        let Some(key) = command_argument(text) else {
            warn!(
                command = %self.domain.command(),
                user_id = ?update.user_id(),
                "Command called without a key"
            );
            return self
                .bot
                .send_message(&update.chat, self.domain.usage_hint())
                .await;
        };

        self.lookup_and_respond(update, &key).await
    }
}
