//! Per-guest-context container.

use std::fmt;
use std::fmt::{Display, Formatter};

use uuid::Uuid;

use crate::bridge::host::HostBridge;
use crate::env::config::EnvConfig;
use crate::env::error::EnvError;
use crate::env::method::ArityPolicy;
use crate::env::registry::NamespaceRegistry;
use crate::env::scope::{Binding, GlobalScope};
use crate::env::value::GuestValue;

/// One guest execution context.
///
/// Owns the injected [`HostBridge`] and the immutable environment graph
/// built from the configured capability set. The graph is constructed once
/// here and never reassigned; tearing the context down tears the
/// environment down with it.
pub struct GuestContext {
    id: String,
    scope: GlobalScope,
    host: Box<dyn HostBridge>,
    arity_policy: ArityPolicy,
}

impl GuestContext {
    /// Build a context with the default configuration (all namespaces,
    /// lenient arity).
    pub fn new(host: Box<dyn HostBridge>) -> Self {
        Self::with_config(EnvConfig::default(), host)
    }

    /// Build a context from an explicit configuration.
    pub fn with_config(config: EnvConfig, host: Box<dyn HostBridge>) -> Self {
        GuestContext {
            id: Uuid::new_v4().to_hyphenated().to_string(),
            scope: GlobalScope::new(NamespaceRegistry::with_capabilities(&config.capabilities)),
            host,
            arity_policy: config.arity_policy,
        }
    }

    /// Debug identity of this context.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn scope(&self) -> &GlobalScope {
        &self.scope
    }

    pub fn arity_policy(&self) -> ArityPolicy {
        self.arity_policy
    }

    /// Resolve a top-level name, as guest name lookup would.
    pub fn resolve(&self, name: &str) -> Result<Binding<'_>, EnvError> {
        self.scope.resolve_binding(name)
    }

    /// Guest entry point: `<object>.<method>(args)` via the alias binding.
    pub fn call(
        &mut self,
        object: &str,
        method: &str,
        args: Vec<GuestValue>,
    ) -> Result<GuestValue, EnvError> {
        self.scope
            .call_method(object, method, self.host.as_mut(), args, self.arity_policy)
    }

    /// Guest entry point: `window.<object>.<method>(args)`.
    pub fn call_qualified(
        &mut self,
        object: &str,
        method: &str,
        args: Vec<GuestValue>,
    ) -> Result<GuestValue, EnvError> {
        let namespace = self.scope.window_member(object)?;
        namespace.call(method, self.host.as_mut(), args, self.arity_policy)
    }
}

impl Display for GuestContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "GuestContext({}, host: {})", self.id, self.host.name())
    }
}
