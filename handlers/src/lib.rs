//! # handlers
//!
//! The bot's command handlers: [`StartHandler`] (liveness greeting) and
//! [`KeyedLookupHandler`], which runs the shared lookup-and-respond protocol
//! for each [`LookupDomain`] variant.

mod domain;
mod greeting;
mod lookup;

pub use domain::LookupDomain;
pub use greeting::StartHandler;
pub use lookup::KeyedLookupHandler;
