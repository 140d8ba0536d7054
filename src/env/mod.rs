//! The guest-visible environment.
//!
//! This module builds the fixed object graph guest scripts see:
//!
//! ```text
//! window ─┬─ console ── log(x)
//!         ├─ history ── print() / clear() / next() / prev()
//!         └─ document ── tree()          (capability-gated)
//!
//! console  → window.console   (alias, same instance)
//! history  → window.history   (alias, same instance)
//! document → window.document  (alias, same instance, when enabled)
//! ```
//!
//! The graph is built once per [`context::GuestContext`] from an
//! [`config::EnvConfig`] and is immutable afterwards. Every method is a thin
//! typed wrapper calling the injected [`crate::bridge::HostBridge`] with a
//! fixed command; the shim holds no state of its own, performs no argument
//! validation beyond the configured arity policy, and never translates host
//! failures.

pub mod config;
pub mod context;
pub mod error;
pub mod globals;
pub mod method;
pub mod namespace;
pub mod registry;
pub mod scope;
pub mod value;

pub use config::{CapabilitySet, ConfigError, EnvConfig};
pub use context::GuestContext;
pub use error::EnvError;
pub use method::{ArityPolicy, EnvMethod};
pub use namespace::Namespace;
pub use registry::NamespaceRegistry;
pub use scope::{Binding, GlobalScope, ROOT_NAME};
pub use value::{GuestNumber, GuestValue};
