//! Pre-condition gate
//!
//! The request-shape check that must pass before any resolution logic runs.
//! Kept as a named, independently testable step rather than an implicit
//! annotation: every command calls [`enforce`] first in `execute`, and the
//! dispatcher can run the same check at the transport boundary.

use crate::rpc::command::CommandError;
use crate::rpc::params::RpcParams;

/// Expected static shape of a command's parameter list.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Minimum number of positional parameters.
    pub min_params: usize,
    /// Human-readable parameter shape, e.g. `"<profileId> <proposalHash>"`.
    pub usage: &'static str,
}

impl ParamSpec {
    pub const fn new(min_params: usize, usage: &'static str) -> Self {
        Self { min_params, usage }
    }
}

/// Reject a request whose parameter list is shorter than the expected shape.
pub fn enforce(spec: &ParamSpec, params: &RpcParams) -> Result<(), CommandError> {
    if params.len() < spec.min_params {
        return Err(CommandError::MalformedRequest { usage: spec.usage });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SPEC: ParamSpec = ParamSpec::new(2, "<profileId> <proposalHash>");

    #[test]
    fn test_too_few_params_is_malformed() {
        for count in 0..2 {
            let params = RpcParams::new(vec![json!("1"); count]);
            let err = enforce(&SPEC, &params).unwrap_err();
            assert!(matches!(err, CommandError::MalformedRequest { usage }
                if usage == "<profileId> <proposalHash>"));
        }
    }

    #[test]
    fn test_enough_params_passes() {
        let params = RpcParams::new([json!("1"), json!("0xHash")]);
        assert!(enforce(&SPEC, &params).is_ok());
    }

    #[test]
    fn test_extra_params_pass_the_gate() {
        // Trailing params are the command's business, not the gate's
        let params = RpcParams::new([json!("1"), json!("0xHash"), json!("extra")]);
        assert!(enforce(&SPEC, &params).is_ok());
    }
}
