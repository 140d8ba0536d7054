//! # webenv - Browser-like Global Environment Shim
//!
//! A minimal emulated global environment (`window`, `console`, `history`,
//! `document`) for a script interpreter embedded inside a host application.
//! Guest scripts written against a familiar browser-like vocabulary
//! (`console.log`, `history.next`, ...) drive host-side behavior without any
//! direct access to host internals: every method call forwards one named
//! command (and optional argument) through a single bridging capability.
//!
//! ## Quick Start
//!
//! Implement [`bridge::HostBridge`] for your host, hand it to a
//! [`env::GuestContext`], and route guest calls through the context:
//!
//! ```
//! use webenv::bridge::{HostBridge, HostCommand, HostError};
//! use webenv::env::{GuestContext, GuestValue};
//!
//! struct PrintingHost;
//!
//! impl HostBridge for PrintingHost {
//!     fn invoke(
//!         &mut self,
//!         command: HostCommand,
//!         argument: Option<GuestValue>,
//!     ) -> Result<GuestValue, HostError> {
//!         match command {
//!             HostCommand::Log => {
//!                 if let Some(value) = argument {
//!                     println!("{}", value);
//!                 }
//!                 Ok(GuestValue::Undefined)
//!             }
//!             // A real host would mutate history, walk the document, etc.
//!             _ => Ok(GuestValue::Undefined),
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "printing_host"
//!     }
//! }
//!
//! let mut ctx = GuestContext::new(Box::new(PrintingHost));
//!
//! // console.log("hi")  →  invoke(Log, Some("hi"))
//! ctx.call("console", "log", vec![GuestValue::String("hi".to_string())])
//!     .unwrap();
//!
//! // window.history.clear()  →  invoke(ClearHistory, None)
//! ctx.call_qualified("history", "clear", vec![]).unwrap();
//! ```
//!
//! ## Capability Gating
//!
//! Namespace presence is configuration, not hard-coded: a restricted context
//! can drop `document` (root member and alias together), making document
//! introspection unreachable from guest code:
//!
//! ```
//! use webenv::env::{EnvConfig, GuestContext, GuestValue};
//! # use webenv::bridge::{HostBridge, HostCommand, HostError};
//! # struct NullHost;
//! # impl HostBridge for NullHost {
//! #     fn invoke(
//! #         &mut self,
//! #         _command: HostCommand,
//! #         _argument: Option<GuestValue>,
//! #     ) -> Result<GuestValue, HostError> {
//! #         Ok(GuestValue::Undefined)
//! #     }
//! #     fn name(&self) -> &str { "null_host" }
//! # }
//!
//! let config = EnvConfig::parse("document = false").unwrap();
//! let ctx = GuestContext::with_config(config, Box::new(NullHost));
//!
//! // Guest name lookup for "document" now fails: document is not defined.
//! assert!(ctx.resolve("document").is_err());
//! assert!(ctx.resolve("history").is_ok());
//! ```
//!
//! ## Design
//!
//! - **One primitive**: the shim consumes exactly one capability,
//!   `HostBridge::invoke(command, argument)`. One guest method call is one
//!   synchronous `invoke` call; results and failures pass through unchanged.
//! - **Closed command set**: commands are an enum ([`bridge::HostCommand`]),
//!   bound to typed method wrappers at construction time. Guest code cannot
//!   reach commands outside the table.
//! - **Immutable graph**: the environment is built once per context from an
//!   [`env::EnvConfig`] and never mutated. Aliases (`console`, `history`,
//!   `document`) are references to the root object's members, so qualified
//!   and unqualified access dispatch identically.
//!
//! ## Architecture
//!
//! - **[`bridge`]** - Host side: the command set and the `HostBridge` trait
//! - **[`env`]** - Guest side: values, namespaces, the global scope,
//!   configuration, and the per-context container

#[macro_use]
extern crate lazy_static;

pub mod bridge;
pub mod env;
