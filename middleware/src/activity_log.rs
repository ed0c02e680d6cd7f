use std::sync::Arc;

use async_trait::async_trait;
use desk_core::{ChatLogger, Middleware, Result, StageFlow, Update};
use tracing::{info, instrument, warn};

/// First stage: appends one audit line per text-bearing update. Always
/// continues; an audit write failure must never block an update.
pub struct ActivityLogMiddleware {
    chat_log: Arc<ChatLogger>,
}

impl ActivityLogMiddleware {
    pub fn new(chat_log: Arc<ChatLogger>) -> Self {
        Self { chat_log }
    }
}

#[async_trait]
impl Middleware for ActivityLogMiddleware {
    #[instrument(skip(self, update))]
    async fn before(&self, update: &Update) -> Result<StageFlow> {
        info!(
            user_id = ?update.user_id(),
            chat_id = update.chat.id,
            update_type = %update.update_type,
            "Received update"
        );

        if let Some(text) = update.text.as_deref() {
            let who = update
                .user
                .as_ref()
                .map(|u| u.username_or_id())
                .unwrap_or_else(|| "unknown".to_string());
            if let Err(e) = self.chat_log.record(update.chat.id, &who, text) {
                warn!(chat_id = update.chat.id, error = %e, "Chat activity write failed");
            }
        }

        Ok(StageFlow::Continue)
    }
}
