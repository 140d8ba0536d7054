//! Typed method wrappers.
//!
//! Each guest-visible method is an [`EnvMethod`]: a fixed binding from a
//! method name to one [`HostCommand`], established at construction time.
//! Calling the method performs exactly one bridge invocation.

use crate::bridge::command::{CommandArity, HostCommand};
use crate::bridge::host::HostBridge;
use crate::env::error::EnvError;
use crate::env::value::GuestValue;

/// What to do with surplus arguments on a nullary method.
///
/// The host owns argument policy; the shim supports both readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArityPolicy {
    /// Ignore surplus arguments (default; matches the original environment,
    /// which raised no arity errors of its own).
    Lenient,
    /// Reject surplus arguments with a TypeError before reaching the host.
    Strict,
}

/// One guest-visible method, bound to one host command.
#[derive(Debug)]
pub struct EnvMethod {
    name: String,
    command: HostCommand,
}

impl EnvMethod {
    pub fn new(name: impl Into<String>, command: HostCommand) -> Self {
        EnvMethod {
            name: name.into(),
            command,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> HostCommand {
        self.command
    }

    /// Invoke the bound command through the bridge.
    ///
    /// Unary commands forward the first argument, `Undefined` when absent.
    /// Nullary commands forward nothing; surplus arguments are handled per
    /// `policy`. The bridge is called exactly once, synchronously, and its
    /// result (success or failure) passes through unchanged.
    pub fn call(
        &self,
        host: &mut dyn HostBridge,
        args: Vec<GuestValue>,
        policy: ArityPolicy,
    ) -> Result<GuestValue, EnvError> {
        let declared = match self.command.arity() {
            CommandArity::Nullary => 0,
            CommandArity::Unary => 1,
        };
        if policy == ArityPolicy::Strict && args.len() > declared {
            return Err(EnvError::TypeError(format!(
                "{} takes {} argument(s) but {} were given",
                self.name,
                declared,
                args.len()
            )));
        }
        let argument = match self.command.arity() {
            CommandArity::Nullary => None,
            CommandArity::Unary => {
                Some(args.into_iter().next().unwrap_or(GuestValue::Undefined))
            }
        };
        host.invoke(self.command, argument).map_err(EnvError::Host)
    }
}
