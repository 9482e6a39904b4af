//! Ordered raw RPC parameters
//!
//! Parameters arrive as untyped JSON values in a fixed positional order and
//! are consumed strictly left-to-right. Typed accessors convert one value at
//! a time; a value that cannot convert is a malformed request naming the
//! command's expected shape.

use crate::rpc::command::CommandError;
use serde_json::Value;
use std::collections::VecDeque;

/// The ordered parameter list of one RPC invocation.
#[derive(Debug, Clone, Default)]
pub struct RpcParams {
    values: VecDeque<Value>,
}

impl RpcParams {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pop the next parameter as an unsigned integer.
    ///
    /// Accepts a JSON number or a numeric string; transports differ on
    /// which they deliver.
    pub fn take_u64(&mut self, usage: &'static str) -> Result<u64, CommandError> {
        match self.values.pop_front() {
            Some(Value::Number(n)) => n
                .as_u64()
                .ok_or(CommandError::MalformedRequest { usage }),
            Some(Value::String(s)) => s
                .parse::<u64>()
                .map_err(|_| CommandError::MalformedRequest { usage }),
            _ => Err(CommandError::MalformedRequest { usage }),
        }
    }

    /// Pop the next parameter as a non-empty string.
    ///
    /// A bare number is coerced to its decimal form: transports that decode
    /// params as JSON turn `42` into a number even where the command wants
    /// text.
    pub fn take_string(&mut self, usage: &'static str) -> Result<String, CommandError> {
        match self.values.pop_front() {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
            Some(Value::Number(n)) => Ok(n.to_string()),
            _ => Err(CommandError::MalformedRequest { usage }),
        }
    }
}

impl From<Vec<Value>> for RpcParams {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}
