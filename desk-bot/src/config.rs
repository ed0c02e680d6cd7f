//! Bot configuration from environment variables. Every required key is
//! fatal at startup when absent or unparsable.

use anyhow::{anyhow, Result};
use std::env;

pub struct BotConfig {
    pub bot_token: String,
    pub access_list: Vec<i64>,
    pub service_account_key_path: String,
    pub spreadsheet_id: String,
    pub log_file: String,
    pub chat_log_file: String,
    pub tmp_files_dir: String,
}

impl BotConfig {
    /// Loads the configuration. A token passed on the command line overrides
    /// TELEGRAM_BOT_TOKEN.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("TELEGRAM_BOT_TOKEN")
                .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN is not set"))?,
        };
        let access_list = parse_access_list(
            &env::var("ACCESS_LIST").map_err(|_| anyhow!("ACCESS_LIST is not set"))?,
        )?;
        let service_account_key_path = env::var("GOOGLE_SERVICE_ACCOUNT_KEY_PATH")
            .map_err(|_| anyhow!("GOOGLE_SERVICE_ACCOUNT_KEY_PATH is not set"))?;
        let spreadsheet_id = env::var("GOOGLE_SHEETS_SPREADSHEET_ID")
            .map_err(|_| anyhow!("GOOGLE_SHEETS_SPREADSHEET_ID is not set"))?;

        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/desk-bot.log".to_string());
        let chat_log_file =
            env::var("CHAT_LOG_FILE").unwrap_or_else(|_| "logs/chat_activity.log".to_string());
        let tmp_files_dir = env::var("TMP_FILES_DIR").unwrap_or_else(|_| "tmp_files".to_string());

        Ok(Self {
            bot_token,
            access_list,
            service_account_key_path,
            spreadsheet_id,
            log_file,
            chat_log_file,
            tmp_files_dir,
        })
    }
}

/// Comma-separated numeric sender ids. An unparsable entry is a
/// configuration error, not a silently dropped one.
fn parse_access_list(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| anyhow!("ACCESS_LIST entry is not a numeric id: {:?}", part))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required_env() {
        env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
        env::set_var("ACCESS_LIST", "111,222, 333");
        env::set_var("GOOGLE_SERVICE_ACCOUNT_KEY_PATH", "/tmp/key.json");
        env::set_var("GOOGLE_SHEETS_SPREADSHEET_ID", "sheet-id");
        env::remove_var("LOG_FILE");
        env::remove_var("CHAT_LOG_FILE");
        env::remove_var("TMP_FILES_DIR");
    }

    #[test]
    fn test_parse_access_list() {
        assert_eq!(parse_access_list("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_access_list(" 42 , 7 ").unwrap(), vec![42, 7]);
        assert_eq!(parse_access_list("5,").unwrap(), vec![5]);
        assert!(parse_access_list("1,abc").is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_with_defaults() {
        set_required_env();

        let config = BotConfig::from_env(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.access_list, vec![111, 222, 333]);
        assert_eq!(config.service_account_key_path, "/tmp/key.json");
        assert_eq!(config.spreadsheet_id, "sheet-id");
        assert_eq!(config.log_file, "logs/desk-bot.log");
        assert_eq!(config.chat_log_file, "logs/chat_activity.log");
        assert_eq!(config.tmp_files_dir, "tmp_files");
    }

    #[test]
    #[serial]
    fn test_from_env_missing_required_key_fails() {
        set_required_env();
        env::remove_var("ACCESS_LIST");

        assert!(BotConfig::from_env(None).is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_token_override() {
        set_required_env();

        let config = BotConfig::from_env(Some("override".to_string())).unwrap();
        assert_eq!(config.bot_token, "override");
    }
}
