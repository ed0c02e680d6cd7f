//! # handler-chain
//!
//! Runs the ordered middleware stages for each update, then routes the
//! update's command through the [`CommandRegistry`]. The first stage that
//! returns Stop drops the update; handler errors are caught at the chain
//! boundary and answered with a fixed generic failure reply.

mod registry;

pub use registry::CommandRegistry;

use std::sync::Arc;

use desk_core::{parse_command, Bot, Middleware, StageFlow, Update};
use tracing::{debug, error, info, instrument};

/// Reply sent when a handler fails unexpectedly. Matches the desk's original
/// wording, typo included.
const GENERIC_FAILURE_TEXT: &str = "Unhanlded error during operation. Please try again later.";

/// Dispatch pipeline: middleware stages run in the fixed order they were
/// added, then the update's command is resolved in the registry and its
/// handler invoked. Cloned into one task per inbound update.
#[derive(Clone)]
pub struct DispatchChain {
    middleware: Vec<Arc<dyn Middleware>>,
    registry: Arc<CommandRegistry>,
    bot: Arc<dyn Bot>,
}

impl DispatchChain {
    /// Creates a chain over a finished registry. Stages are appended with
    /// [`DispatchChain::add_middleware`]; order of addition is run order.
    pub fn new(registry: Arc<CommandRegistry>, bot: Arc<dyn Bot>) -> Self {
        Self {
            middleware: Vec::new(),
            registry,
            bot,
        }
    }

    /// Appends a pipeline stage.
    pub fn add_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Processes one update. Never fails outward: every failure below this
    /// point becomes a user-facing reply or a logged drop.
    #[instrument(skip(self, update))]
    pub async fn process(&self, update: &Update) {
        info!(
            user_id = ?update.user_id(),
            chat_id = update.chat.id,
            update_id = %update.id,
            "step: dispatch started"
        );

        for mw in &self.middleware {
            let mw_name = std::any::type_name_of_val(mw.as_ref());
            match mw.before(update).await {
                Ok(StageFlow::Continue) => {}
                Ok(StageFlow::Stop) => {
                    debug!(
                        update_id = %update.id,
                        middleware = %mw_name,
                        "step: stage stopped the chain"
                    );
                    return;
                }
                Err(e) => {
                    error!(
                        update_id = %update.id,
                        middleware = %mw_name,
                        error = %e,
                        "Stage failed; update dropped"
                    );
                    return;
                }
            }
        }

        let Some(command) = update.text.as_deref().and_then(parse_command) else {
            debug!(update_id = %update.id, "step: no command, nothing to route");
            return;
        };

        let Some(handler) = self.registry.resolve(&command) else {
            debug!(
                update_id = %update.id,
                command = %command,
                "step: no handler registered, update dropped"
            );
            return;
        };

        info!(
            update_id = %update.id,
            command = %command,
            "step: handler processing"
        );

        if let Err(e) = handler.handle(update).await {
            error!(
                update_id = %update.id,
                command = %command,
                error = %e,
                "Handler failed"
            );
            if let Err(send_err) = self
                .bot
                .send_message(&update.chat, GENERIC_FAILURE_TEXT)
                .await
            {
                error!(
                    update_id = %update.id,
                    error = %send_err,
                    "Failed to send generic failure reply"
                );
            }
        }

        info!(update_id = %update.id, "step: dispatch finished");
    }
}

// Integration tests live in tests/dispatch_chain_test.rs
