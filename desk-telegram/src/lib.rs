//! # desk-telegram
//!
//! Telegram boundary layer: adapters from teloxide types to core types, the
//! [`desk_core::Bot`] implementation, and the REPL runner. Handles only
//! Telegram connectivity and chain execution; no lookup or file logic.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::TelegramUpdateWrapper;
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
