use std::sync::Arc;

use async_trait::async_trait;
use desk_core::{Bot, CommandHandler, Result, Update};
use tracing::instrument;

/// Replies to /start with the fixed liveness greeting echoing the sender's
/// resolved id. No lookup, no file step.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CommandHandler for StartHandler {
    fn commands(&self) -> &[&'static str] {
        &["start"]
    }

    #[instrument(skip(self, update))]
    async fn handle(&self, update: &Update) -> Result<()> {
        let id = update
            .user_id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let greeting = format!("Я живой! Твой id - {}.", id);
        self.bot.send_message(&update.chat, &greeting).await
    }
}
