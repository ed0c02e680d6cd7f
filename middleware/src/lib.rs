//! # middleware
//!
//! The three pipeline stages, in their fixed run order: activity logging,
//! chat-type command gating, access-list authorization. Each stage returns
//! Continue or Stop; the chain driver in handler-chain composes them.

mod access;
mod activity_log;
mod command_scope;

#[cfg(test)]
mod test;

pub use access::AccessMiddleware;
pub use activity_log::ActivityLogMiddleware;
pub use command_scope::CommandScopeMiddleware;
