//! The injected host capability.
//!
//! The shim never talks to a concrete host. It depends on a single trait,
//! [`HostBridge`], satisfied by an adapter the embedder supplies before any
//! guest code runs. One guest method call becomes exactly one `invoke` call.

use crate::bridge::command::HostCommand;
use crate::env::value::GuestValue;

/// The single ambient capability the shim consumes.
///
/// Implementors interpret the command, perform the host-side effect
/// (logging, history mutation, document traversal) and return whatever value
/// should surface to the guest caller. Failures are host policy; the shim
/// propagates them unchanged.
pub trait HostBridge {
    /// Execute one command on behalf of guest code.
    ///
    /// `argument` is `Some` only for unary commands; the value is forwarded
    /// exactly as the guest passed it, with no transformation.
    fn invoke(
        &mut self,
        command: HostCommand,
        argument: Option<GuestValue>,
    ) -> Result<GuestValue, HostError>;

    /// Human-readable name for this host adapter (for debugging/logging).
    fn name(&self) -> &str;
}

/// Failure raised by a host adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// The host cannot service bridge calls at all (torn down, detached).
    Unavailable(String),
    /// The host attempted the command and it failed.
    CommandFailed(HostCommand, String),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::Unavailable(msg) => write!(f, "Host unavailable: {}", msg),
            HostError::CommandFailed(command, msg) => {
                write!(f, "Host command '{}' failed: {}", command, msg)
            }
        }
    }
}

impl std::error::Error for HostError {}
