//! Presentation layer for souk
//!
//! This crate contains the RPC command surface: the command trait, the
//! positional-parameter handling, the pre-condition gate, the dispatcher,
//! and the concrete commands. The transport that carries requests in and
//! responses out is an external collaborator; this layer starts at "an
//! ordered list of raw values arrived for a method name".

pub mod rpc;

// Re-export commonly used types
pub use rpc::command::{CommandError, NotFoundKind, RpcCommand};
pub use rpc::commands::{
    setting_get::SettingGetCommand, setting_list::SettingListCommand,
    setting_remove::SettingRemoveCommand, setting_set::SettingSetCommand,
    vote_get::VoteGetCommand,
};
pub use rpc::dispatcher::{CommandRegistry, DispatchError};
pub use rpc::gate::ParamSpec;
pub use rpc::params::RpcParams;
