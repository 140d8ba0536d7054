//! The fixed global namespaces.
//!
//! Definitions for `console`, `history` and `document`, matching the
//! command table in [`crate::bridge::command`].

use crate::bridge::command::HostCommand;
use crate::env::config::CapabilitySet;
use crate::env::namespace::Namespace;
use crate::env::registry::NamespaceRegistry;

/// Build the `console` namespace.
pub fn console() -> Namespace {
    Namespace::new("console").add_method("log", HostCommand::Log)
}

/// Build the `history` namespace.
pub fn history() -> Namespace {
    Namespace::new("history")
        .add_method("print", HostCommand::PrintHistory)
        .add_method("clear", HostCommand::ClearHistory)
        .add_method("next", HostCommand::GetNextHistoryUrl)
        .add_method("prev", HostCommand::GetPrevHistoryUrl)
}

/// Build the `document` namespace.
pub fn document() -> Namespace {
    Namespace::new("document").add_method("tree", HostCommand::PrintDocumentTree)
}

/// Register every namespace the capability set enables.
pub fn register_globals(registry: &mut NamespaceRegistry, capabilities: &CapabilitySet) {
    if capabilities.console {
        registry.register_namespace(console());
    }
    if capabilities.history {
        registry.register_namespace(history());
    }
    if capabilities.document {
        registry.register_namespace(document());
    }
}
