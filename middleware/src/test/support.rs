//! Shared fakes and builders for the middleware unit tests.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use desk_core::{Bot, Chat, ChatKind, Result, Update, User};

pub fn sample_update(user_id: Option<i64>, kind: ChatKind, text: &str) -> Update {
    Update {
        id: "msg-1".to_string(),
        user: user_id.map(|id| User {
            id,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        }),
        chat: Chat { id: 123, kind },
        text: Some(text.to_string()),
        update_type: "message".to_string(),
    }
}

/// Bot fake recording every text send.
pub struct RecordingBot {
    pub sent: Mutex<Vec<(i64, String)>>,
}

impl RecordingBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, _path: &Path, caption: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((chat.id, format!("document:{}", caption)));
        Ok(())
    }
}
