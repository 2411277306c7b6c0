//! # Numerobis Runtime
//!
//! The runtime library compiled Numerobis programs link against. It
//! provides the dynamically-typed boxed [`value::Value`] union, numbers
//! carrying unit trees with the full arithmetic/comparison/conversion
//! semantics, the polymorphic dispatch surface emitted call sites go
//! through, the extern-function and source-module registries, the `echo`
//! builtin, and diagnostic reporting.
//!
//! Process-wide state (the unit evaluator tables, the extern registry, the
//! module registry) is installed once during program startup and read-only
//! afterwards; everything else is pure functions over immutable values.

pub mod builtins;
pub mod diagnostics;
pub mod dispatch;
pub mod externs;
pub mod value;

#[cfg(test)]
mod test_tables;

pub use externs::ExternRegistry;
pub use value::{Number, Value};
