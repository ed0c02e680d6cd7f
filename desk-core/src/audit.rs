//! Append-only chat activity log: one line per text-bearing update.
//!
//! Separate from the tracing log; written by the first pipeline stage and
//! never read back by the bot.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::error::Result;

/// Appends `timestamp: chat id | username-or-id | text` lines to a file.
/// Concurrent pipeline tasks share one instance behind an Arc.
pub struct ChatLogger {
    file: Mutex<File>,
}

impl ChatLogger {
    /// Opens (creating parents and the file as needed) the activity log in
    /// append mode.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one activity line.
    pub fn record(&self, chat_id: i64, who: &str, text: &str) -> Result<()> {
        let line = format!(
            "{}: {} | {} | {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            chat_id,
            who,
            text
        );
        let mut file = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_lines_with_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("chat_activity.log");

        let logger = ChatLogger::open(&path).unwrap();
        logger.record(-100123, "testuser", "/bdetails bhd-bbk").unwrap();
        logger.record(456, "789", "hello").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("-100123 | testuser | /bdetails bhd-bbk"));
        assert!(lines[1].contains("456 | 789 | hello"));
    }
}
