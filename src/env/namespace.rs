//! Namespace objects.
//!
//! A [`Namespace`] is a named grouping of methods (`console`, `history`,
//! `document`). Namespaces are built once at environment construction and
//! never mutated afterwards; there is one level of nesting only.

use std::collections::HashMap;

use crate::bridge::command::HostCommand;
use crate::bridge::host::HostBridge;
use crate::env::error::EnvError;
use crate::env::method::{ArityPolicy, EnvMethod};
use crate::env::value::GuestValue;

/// A named grouping of guest-visible methods.
#[derive(Debug)]
pub struct Namespace {
    name: String,
    methods: HashMap<String, EnvMethod>,
}

impl Namespace {
    /// Create an empty namespace with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Namespace {
            name: name.into(),
            methods: HashMap::new(),
        }
    }

    /// Bind a method name to a host command.
    pub fn add_method(mut self, name: impl Into<String>, command: HostCommand) -> Self {
        let name = name.into();
        self.methods.insert(name.clone(), EnvMethod::new(name, command));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn get_method(&self, name: &str) -> Option<&EnvMethod> {
        self.methods.get(name)
    }

    pub fn method_names(&self) -> Vec<&String> {
        self.methods.keys().collect()
    }

    /// Dispatch one method call through the bridge.
    pub fn call(
        &self,
        method: &str,
        host: &mut dyn HostBridge,
        args: Vec<GuestValue>,
        policy: ArityPolicy,
    ) -> Result<GuestValue, EnvError> {
        let method = self.methods.get(method).ok_or_else(|| {
            EnvError::TypeError(format!("{}.{} is not a function", self.name, method))
        })?;
        method.call(host, args, policy)
    }
}
