//! The host side of the bridging contract.
//!
//! Guest method calls funnel into one primitive: `invoke(command, argument)`.
//! This module defines the closed command set ([`command::HostCommand`]) and
//! the capability trait hosts implement ([`host::HostBridge`]).
//!
//! ```text
//! guest script → env::Namespace method → HostBridge::invoke(command, arg)
//!                                              ↓
//!                                  host executes, returns a value
//! ```

pub mod command;
pub mod host;

pub use command::{CommandArity, HostCommand};
pub use host::{HostBridge, HostError};
