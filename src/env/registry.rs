//! Registry of global namespaces for one guest execution context.

use std::collections::HashMap;

use crate::env::config::CapabilitySet;
use crate::env::globals::register_globals;
use crate::env::method::EnvMethod;
use crate::env::namespace::Namespace;

/// Holds every namespace visible to one guest context.
///
/// Populated once at construction from a [`CapabilitySet`]; read-only
/// afterwards. The same `Namespace` instances back both alias lookups and
/// `window`-qualified lookups, so the two routes cannot drift apart.
pub struct NamespaceRegistry {
    objects: HashMap<String, Namespace>,
}

impl NamespaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        NamespaceRegistry {
            objects: HashMap::new(),
        }
    }

    /// Create a registry holding every namespace the capability set enables.
    pub fn with_capabilities(capabilities: &CapabilitySet) -> Self {
        let mut registry = Self::new();
        register_globals(&mut registry, capabilities);
        registry
    }

    /// Register a namespace (programmatic API).
    pub fn register_namespace(&mut self, namespace: Namespace) {
        self.objects.insert(namespace.name().to_string(), namespace);
    }

    /// Get a registered namespace by name.
    pub fn get_object(&self, name: &str) -> Option<&Namespace> {
        self.objects.get(name)
    }

    /// Get a method for dispatch.
    pub fn get_method(&self, object: &str, method: &str) -> Option<&EnvMethod> {
        self.objects.get(object).and_then(|ns| ns.get_method(method))
    }

    /// Check if a namespace exists in the registry.
    pub fn has_object(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Check if a method exists on a namespace.
    pub fn has_method(&self, object: &str, method: &str) -> bool {
        self.objects
            .get(object)
            .map(|ns| ns.has_method(method))
            .unwrap_or(false)
    }

    /// Get list of all registered namespace names.
    pub fn object_names(&self) -> Vec<&String> {
        self.objects.keys().collect()
    }
}

impl Default for NamespaceRegistry {
    fn default() -> Self {
        Self::with_capabilities(&CapabilitySet::default())
    }
}
