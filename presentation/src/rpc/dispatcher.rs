//! Command registry and dispatch
//!
//! Maps an RPC method name to its command and invokes it. Registration
//! happens once at process start; dispatch is read-only thereafter.

use crate::rpc::command::{CommandError, RpcCommand};
use crate::rpc::gate;
use crate::rpc::params::RpcParams;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors from dispatching a method name to a command.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Registry of RPC commands keyed by method name.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Arc<dyn RpcCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its own name. Later registrations win.
    pub fn register(mut self, command: Arc<dyn RpcCommand>) -> Self {
        self.commands.insert(command.name(), command);
        self
    }

    /// Look up the command for a method name.
    pub fn get(&self, method: &str) -> Option<&Arc<dyn RpcCommand>> {
        self.commands.get(method)
    }

    /// Registered commands, sorted by method name for stable help output.
    pub fn commands(&self) -> Vec<&Arc<dyn RpcCommand>> {
        let mut commands: Vec<_> = self.commands.values().collect();
        commands.sort_by_key(|c| c.name());
        commands
    }

    /// Run the gate, then the command, for one invocation.
    pub async fn dispatch(
        &self,
        method: &str,
        params: RpcParams,
    ) -> Result<serde_json::Value, DispatchError> {
        let command = self
            .commands
            .get(method)
            .ok_or_else(|| DispatchError::UnknownMethod(method.to_string()))?;

        debug!("Dispatching {} with {} params", method, params.len());
        gate::enforce(&command.spec(), &params).map_err(DispatchError::Command)?;
        Ok(command.execute(params).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::gate::ParamSpec;
    use async_trait::async_trait;
    use serde_json::json;

    struct EchoCommand;

    #[async_trait]
    impl RpcCommand for EchoCommand {
        fn name(&self) -> &'static str {
            "test.echo"
        }

        fn spec(&self) -> ParamSpec {
            ParamSpec::new(1, "<value>")
        }

        async fn execute(&self, mut params: RpcParams) -> Result<serde_json::Value, CommandError> {
            gate::enforce(&self.spec(), &params)?;
            let value = params.take_string(self.spec().usage)?;
            Ok(json!(value))
        }

        fn description(&self) -> String {
            "Echo a value.".to_string()
        }

        fn example(&self) -> String {
            "test.echo hello".to_string()
        }
    }

    #[tokio::test]
    async fn test_dispatch_known_method() {
        let registry = CommandRegistry::new().register(Arc::new(EchoCommand));
        let result = registry
            .dispatch("test.echo", RpcParams::new([json!("hello")]))
            .await
            .unwrap();
        assert_eq!(result, json!("hello"));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_method() {
        let registry = CommandRegistry::new();
        let err = registry
            .dispatch("no.such", RpcParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::UnknownMethod(m) if m == "no.such"));
    }

    #[tokio::test]
    async fn test_dispatch_runs_the_gate() {
        let registry = CommandRegistry::new().register(Arc::new(EchoCommand));
        let err = registry
            .dispatch("test.echo", RpcParams::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Command(CommandError::MalformedRequest { .. })
        ));
    }

    #[test]
    fn test_commands_listing_is_sorted() {
        let registry = CommandRegistry::new().register(Arc::new(EchoCommand));
        let names: Vec<_> = registry.commands().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["test.echo"]);
    }
}
