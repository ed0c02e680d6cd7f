//! Command token extraction and the static chat-kind visibility partition.

use std::collections::HashSet;

use crate::types::ChatKind;

/// Extracts the normalized command token from update text: first whitespace
/// token, leading `/` stripped, optional `@botname` suffix stripped,
/// ASCII-lowercased. Returns None for non-command text.
pub fn parse_command(text: &str) -> Option<String> {
    let first = text.split_whitespace().next()?;
    let name = first.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name);
    if name.is_empty() {
        return None;
    }
    Some(name.to_ascii_lowercase())
}

/// First whitespace token after the command, lowercased. This is the lookup
/// key for keyed commands; None when the command was sent bare.
pub fn command_argument(text: &str) -> Option<String> {
    text.split_whitespace()
        .nth(1)
        .map(|arg| arg.to_ascii_lowercase())
}

/// Static partition of commands into private-only and group-only sets.
/// Commands in neither set are unrestricted by chat kind. Built once at
/// startup; read-only afterwards.
#[derive(Debug, Clone)]
pub struct CommandVisibility {
    private_only: HashSet<&'static str>,
    group_only: HashSet<&'static str>,
}

impl CommandVisibility {
    pub fn new(private_only: &[&'static str], group_only: &[&'static str]) -> Self {
        Self {
            private_only: private_only.iter().copied().collect(),
            group_only: group_only.iter().copied().collect(),
        }
    }

    /// Whether `command` may run in a chat of the given kind.
    pub fn allowed_in(&self, command: &str, kind: ChatKind) -> bool {
        match kind {
            ChatKind::Group | ChatKind::Supergroup => !self.private_only.contains(command),
            ChatKind::Private => !self.group_only.contains(command),
            ChatKind::Other => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_basic() {
        assert_eq!(parse_command("/start"), Some("start".to_string()));
        assert_eq!(parse_command("/bdetails bhd-bbk"), Some("bdetails".to_string()));
    }

    #[test]
    fn test_parse_command_strips_bot_suffix_and_lowercases() {
        assert_eq!(parse_command("/BDetails@desk_bot xx"), Some("bdetails".to_string()));
        assert_eq!(parse_command("/start@DeskBot"), Some("start".to_string()));
    }

    #[test]
    fn test_parse_command_non_command_text() {
        assert_eq!(parse_command("hello"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  /start"), Some("start".to_string()));
        assert_eq!(parse_command("/"), None);
    }

    #[test]
    fn test_command_argument() {
        assert_eq!(command_argument("/bdetails BHD-BBK"), Some("bhd-bbk".to_string()));
        assert_eq!(command_argument("/bdetails   key extra"), Some("key".to_string()));
        assert_eq!(command_argument("/bdetails"), None);
    }

    #[test]
    fn test_visibility_private_only_blocked_in_groups() {
        let vis = CommandVisibility::new(&["start"], &["bdetails"]);
        assert!(!vis.allowed_in("start", ChatKind::Group));
        assert!(!vis.allowed_in("start", ChatKind::Supergroup));
        assert!(vis.allowed_in("start", ChatKind::Private));
    }

    #[test]
    fn test_visibility_group_only_blocked_in_private() {
        let vis = CommandVisibility::new(&["start"], &["bdetails"]);
        assert!(!vis.allowed_in("bdetails", ChatKind::Private));
        assert!(vis.allowed_in("bdetails", ChatKind::Group));
        assert!(vis.allowed_in("bdetails", ChatKind::Supergroup));
    }

    #[test]
    fn test_visibility_unlisted_command_unrestricted() {
        let vis = CommandVisibility::new(&["start"], &["bdetails"]);
        assert!(vis.allowed_in("help", ChatKind::Private));
        assert!(vis.allowed_in("help", ChatKind::Group));
        assert!(vis.allowed_in("start", ChatKind::Other));
        assert!(vis.allowed_in("bdetails", ChatKind::Other));
    }
}
