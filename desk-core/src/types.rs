//! Core types: user, chat, update, pipeline stage and handler traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Username when set, otherwise the numeric id. Used for audit lines.
    pub fn username_or_id(&self) -> String {
        self.username
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// Kind of chat an update arrived from. Telegram distinguishes private
/// chats, basic groups and supergroups; everything else (channels) is Other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Other,
}

impl ChatKind {
    /// True for group and supergroup chats.
    pub fn is_group_like(&self) -> bool {
        matches!(self, ChatKind::Group | ChatKind::Supergroup)
    }
}

/// Chat identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
}

/// One inbound event from the transport. Immutable once built; owned by the
/// pipeline invocation processing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    /// Transport message id, used to correlate error logs.
    pub id: String,
    /// Sender. Absent for event kinds that carry no user (e.g. channel posts).
    pub user: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
    /// Event-type tag as reported by the transport ("message", ...).
    pub update_type: String,
}

impl Update {
    /// Sender id if the update carries one.
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// Outcome of a pipeline stage: pass the update to the next stage or drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageFlow {
    Continue,
    Stop,
}

/// One stage of the dispatch pipeline. Stages run in the fixed order they
/// were added to the chain; the first Stop ends processing for the update.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn before(&self, update: &Update) -> crate::error::Result<StageFlow>;
}

/// Handler for one or more commands, invoked by the chain after every stage
/// continued and the update's command resolved in the registry.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command names this handler owns (lowercase, no leading slash).
    fn commands(&self) -> &[&'static str];

    /// Processes the update. Errors are caught at the chain boundary and
    /// answered with a generic failure reply; they never cross the pipeline.
    async fn handle(&self, update: &Update) -> crate::error::Result<()>;
}
