//! The extern function registry
//!
//! Compiled programs and the host application register native functions by
//! name during startup; emitted code then resolves them with [`lookup`].
//! The registry is built once, installed, and read-only afterwards.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::builtins;
use crate::value::NativeFn;

static INSTALLED: OnceLock<ExternRegistry> = OnceLock::new();

/// A name-to-function table, preserving registration order.
#[derive(Debug, Default)]
pub struct ExternRegistry {
    entries: IndexMap<String, NativeFn>,
}

impl ExternRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the runtime builtins.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("echo", builtins::echo::echo);
        registry
    }

    /// Registers a function under a name.
    ///
    /// # Panics
    ///
    /// Panics when the name is already taken; duplicate registration is a
    /// build-time mistake in the embedding program.
    pub fn register(&mut self, name: &str, function: NativeFn) {
        let previous = self.entries.insert(name.to_string(), function);
        assert!(
            previous.is_none(),
            "extern function already defined: {name}"
        );
    }

    /// Installs the registry as the process-wide table.
    ///
    /// # Panics
    ///
    /// Panics when a registry has already been installed.
    pub fn install(self) {
        assert!(
            INSTALLED.set(self).is_ok(),
            "extern registry is already installed"
        );
    }
}

/// Looks up a registered extern function by name.
#[must_use]
pub fn lookup(name: &str) -> Option<NativeFn> {
    INSTALLED.get().and_then(|r| r.entries.get(name).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn noop(_args: &[Value]) -> Value {
        Value::None
    }

    #[test]
    #[should_panic(expected = "already defined")]
    fn duplicate_names_are_rejected() {
        let mut registry = ExternRegistry::new();
        registry.register("twice", noop);
        registry.register("twice", noop);
    }

    #[test]
    fn installed_registry_serves_lookups() {
        let mut registry = ExternRegistry::with_builtins();
        registry.register("noop", noop);
        registry.install();

        assert!(lookup("echo").is_some());
        assert!(lookup("noop").is_some());
        assert!(lookup("missing").is_none());
    }
}
