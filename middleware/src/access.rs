use std::sync::Arc;

use async_trait::async_trait;
use desk_core::{Bot, ChatKind, Middleware, Result, StageFlow, Update};
use tracing::{debug, instrument};

/// Reply sent to unauthorized senders in private chats. Other chat kinds are
/// denied silently.
const ACCESS_DENIED_TEXT: &str = "This bot was developed by the ATME team to make licensed p2p \
transactions with cryptocurrency.\n\nIf you are interested in cooperating or making a deal to \
buy or sell cryptocurrencies, please contact the official representative of the ATME team - \
@yak_maxim.";

/// Third stage: stops every update whose sender is missing or not in the
/// access list. Denial is expected traffic and is logged at debug, never as
/// an error.
pub struct AccessMiddleware {
    access_list: Vec<i64>,
    bot: Arc<dyn Bot>,
}

impl AccessMiddleware {
    /// Creates a stage that lets only the given sender ids through.
    pub fn new(access_list: Vec<i64>, bot: Arc<dyn Bot>) -> Self {
        Self { access_list, bot }
    }
}

#[async_trait]
impl Middleware for AccessMiddleware {
    #[instrument(skip(self, update))]
    async fn before(&self, update: &Update) -> Result<StageFlow> {
        match update.user_id() {
            Some(user_id) if self.access_list.contains(&user_id) => {
                debug!(user_id = user_id, "User authorized");
                Ok(StageFlow::Continue)
            }
            user_id => {
                debug!(user_id = ?user_id, chat_id = update.chat.id, "Sender not in access list");
                if update.chat.kind == ChatKind::Private {
                    self.bot
                        .send_message(&update.chat, ACCESS_DENIED_TEXT)
                        .await?;
                }
                Ok(StageFlow::Stop)
            }
        }
    }
}
