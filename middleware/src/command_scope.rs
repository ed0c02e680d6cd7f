use async_trait::async_trait;
use desk_core::{parse_command, CommandVisibility, Middleware, Result, StageFlow, Update};
use tracing::{debug, instrument};

/// Second stage: drops private-only commands arriving from group chats and
/// group-only commands arriving from private chats, both silently.
/// Non-command text passes through untouched.
pub struct CommandScopeMiddleware {
    visibility: CommandVisibility,
}

impl CommandScopeMiddleware {
    pub fn new(visibility: CommandVisibility) -> Self {
        Self { visibility }
    }
}

#[async_trait]
impl Middleware for CommandScopeMiddleware {
    #[instrument(skip(self, update))]
    async fn before(&self, update: &Update) -> Result<StageFlow> {
        let Some(command) = update.text.as_deref().and_then(parse_command) else {
            return Ok(StageFlow::Continue);
        };

        if self.visibility.allowed_in(&command, update.chat.kind) {
            Ok(StageFlow::Continue)
        } else {
            debug!(
                command = %command,
                chat_id = update.chat.id,
                chat_kind = ?update.chat.kind,
                "Command not available in this chat kind, update dropped"
            );
            Ok(StageFlow::Stop)
        }
    }
}
