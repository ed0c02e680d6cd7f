//! # desk-core
//!
//! Core types and traits for the desk bot: [`Bot`], [`Middleware`],
//! [`CommandHandler`], update and user types, command parsing, error
//! taxonomy, tracing initialization and the chat activity logger.
//! Transport-agnostic; used by handler-chain, middleware and desk-telegram.

pub mod audit;
pub mod bot;
pub mod command;
pub mod error;
pub mod logger;
pub mod types;

pub use audit::ChatLogger;
pub use bot::Bot;
pub use command::{command_argument, parse_command, CommandVisibility};
pub use error::{DeskError, Result};
pub use logger::init_tracing;
pub use types::{Chat, ChatKind, CommandHandler, Middleware, StageFlow, Update, User};
