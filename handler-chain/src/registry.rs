//! Command registry: the composition point where independently-built
//! handlers become one dispatch surface.

use std::collections::HashMap;
use std::sync::Arc;

use desk_core::{CommandHandler, DeskError, Result};
use tracing::debug;

/// Write-once map from command name to handler. Populated at startup before
/// the pipeline runs; read-only afterwards, shared via Arc without locking.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers every command the handler declares. Two handlers claiming
    /// the same command is a configuration error, fatal at boot.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) -> Result<()> {
        for command in handler.commands() {
            if self.handlers.contains_key(*command) {
                return Err(DeskError::Config(format!(
                    "command /{} registered twice",
                    command
                )));
            }
            debug!(command = %command, "Registered command handler");
            self.handlers.insert((*command).to_string(), handler.clone());
        }
        Ok(())
    }

    /// Handler for the given normalized command, if one is registered.
    pub fn resolve(&self, command: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(command).cloned()
    }

    /// Sorted command names, for the startup log.
    pub fn registered_commands(&self) -> Vec<String> {
        let mut commands: Vec<String> = self.handlers.keys().cloned().collect();
        commands.sort();
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use desk_core::Update;

    struct FixedHandler(&'static [&'static str]);

    #[async_trait]
    impl CommandHandler for FixedHandler {
        fn commands(&self) -> &[&'static str] {
            self.0
        }

        async fn handle(&self, _update: &Update) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = CommandRegistry::new();
        registry
            .register(Arc::new(FixedHandler(&["start"])))
            .unwrap();
        registry
            .register(Arc::new(FixedHandler(&["bdetails", "atme_address"])))
            .unwrap();

        assert!(registry.resolve("start").is_some());
        assert!(registry.resolve("bdetails").is_some());
        assert!(registry.resolve("atme_address").is_some());
        assert!(registry.resolve("unknown").is_none());
        assert_eq!(
            registry.registered_commands(),
            vec!["atme_address", "bdetails", "start"]
        );
    }

    #[test]
    fn test_duplicate_command_is_config_error() {
        let mut registry = CommandRegistry::new();
        registry
            .register(Arc::new(FixedHandler(&["bdetails"])))
            .unwrap();

        let err = registry
            .register(Arc::new(FixedHandler(&["bdetails"])))
            .unwrap_err();
        assert!(matches!(err, DeskError::Config(_)));
    }
}
