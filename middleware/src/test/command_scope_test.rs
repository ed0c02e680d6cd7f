//! Unit tests for CommandScopeMiddleware.

use desk_core::{ChatKind, CommandVisibility, Middleware, StageFlow};

use super::support::sample_update;
use crate::CommandScopeMiddleware;

fn scope() -> CommandScopeMiddleware {
    CommandScopeMiddleware::new(CommandVisibility::new(
        &["start"],
        &["bdetails", "atme_address"],
    ))
}

#[tokio::test]
async fn test_private_only_command_dropped_in_groups() {
    let mw = scope();
    for kind in [ChatKind::Group, ChatKind::Supergroup] {
        let update = sample_update(Some(1), kind, "/start");
        assert_eq!(mw.before(&update).await.unwrap(), StageFlow::Stop);
    }
}

#[tokio::test]
async fn test_group_only_command_dropped_in_private() {
    let mw = scope();
    let update = sample_update(Some(1), ChatKind::Private, "/bdetails bhd-bbk");
    assert_eq!(mw.before(&update).await.unwrap(), StageFlow::Stop);

    let update = sample_update(Some(1), ChatKind::Private, "/atme_address usdt");
    assert_eq!(mw.before(&update).await.unwrap(), StageFlow::Stop);
}

#[tokio::test]
async fn test_commands_pass_in_their_allowed_chat_kind() {
    let mw = scope();
    let update = sample_update(Some(1), ChatKind::Private, "/start");
    assert_eq!(mw.before(&update).await.unwrap(), StageFlow::Continue);

    let update = sample_update(Some(1), ChatKind::Supergroup, "/bdetails bhd-bbk");
    assert_eq!(mw.before(&update).await.unwrap(), StageFlow::Continue);
}

#[tokio::test]
async fn test_non_command_text_passes_through() {
    let mw = scope();
    let update = sample_update(Some(1), ChatKind::Private, "just chatting");
    assert_eq!(mw.before(&update).await.unwrap(), StageFlow::Continue);

    let mut no_text = sample_update(Some(1), ChatKind::Group, "");
    no_text.text = None;
    assert_eq!(mw.before(&no_text).await.unwrap(), StageFlow::Continue);
}
