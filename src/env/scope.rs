//! The guest-visible global scope.
//!
//! Name resolution order, seen from guest code:
//!
//! ```text
//! console.log("hi")            window.console.log("hi")
//!      ↓                            ↓
//! alias lookup: "console"      root lookup: "window", member "console"
//!      ↓                            ↓
//!         the SAME Namespace instance
//!      ↓
//! dispatch: HostBridge::invoke(Log, Some("hi"))
//! ```
//!
//! Aliases are read-only references into the root object, not copies: every
//! enabled namespace is reachable both as `window.<name>` and as the bare
//! `<name>`, and both routes dispatch identically. A name outside the
//! enabled set resolves to a reference error, which is how the restricted
//! capability set makes `document` vanish entirely.

use crate::bridge::host::HostBridge;
use crate::env::error::EnvError;
use crate::env::method::ArityPolicy;
use crate::env::namespace::Namespace;
use crate::env::registry::NamespaceRegistry;
use crate::env::value::GuestValue;

/// Name of the root environment object.
pub const ROOT_NAME: &str = "window";

/// What a top-level name resolves to.
#[derive(Debug)]
pub enum Binding<'a> {
    /// The root environment object (`window`).
    Root,
    /// An aliased namespace (`console`, `history`, `document`).
    Namespace(&'a Namespace),
}

/// The root environment object plus its top-level aliases.
pub struct GlobalScope {
    registry: NamespaceRegistry,
}

impl GlobalScope {
    pub fn new(registry: NamespaceRegistry) -> Self {
        GlobalScope { registry }
    }

    /// Check whether a top-level name is bound.
    pub fn has_name(&self, name: &str) -> bool {
        name == ROOT_NAME || self.registry.has_object(name)
    }

    /// Resolve a top-level name.
    ///
    /// Unbound names fail with the guest-facing "X is not defined" shape.
    pub fn resolve_binding(&self, name: &str) -> Result<Binding<'_>, EnvError> {
        if name == ROOT_NAME {
            return Ok(Binding::Root);
        }
        match self.registry.get_object(name) {
            Some(namespace) => Ok(Binding::Namespace(namespace)),
            None => Err(EnvError::ReferenceError(format!("{} is not defined", name))),
        }
    }

    /// Look up a member of the root object (`window.<name>`).
    ///
    /// A disabled namespace is absent from the root object too, so the
    /// qualified route fails exactly where the alias route does.
    pub fn window_member(&self, name: &str) -> Result<&Namespace, EnvError> {
        self.registry.get_object(name).ok_or_else(|| {
            EnvError::TypeError(format!("{}.{} is undefined", ROOT_NAME, name))
        })
    }

    /// Dispatch `<object>.<method>(args)` through the bridge.
    pub fn call_method(
        &self,
        object_name: &str,
        method_name: &str,
        host: &mut dyn HostBridge,
        args: Vec<GuestValue>,
        policy: ArityPolicy,
    ) -> Result<GuestValue, EnvError> {
        match self.resolve_binding(object_name)? {
            Binding::Root => Err(EnvError::TypeError(format!(
                "{}.{} is not a function",
                ROOT_NAME, method_name
            ))),
            Binding::Namespace(namespace) => namespace.call(method_name, host, args, policy),
        }
    }

    /// Names of every enabled alias (for inspection/testing).
    pub fn alias_names(&self) -> Vec<&String> {
        self.registry.object_names()
    }

    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }
}
