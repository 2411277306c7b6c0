//! Compiler-generated evaluator tables
//!
//! Every unit identifier in a compiled program is assigned a `u16` id, and
//! the compiler emits four lookup functions keyed by that id: the base
//! projection, the inverted (value-to-base) evaluation, the normal
//! (forward) evaluation, and the logarithmicity predicate. The runtime
//! treats all four as opaque pure functions.
//!
//! The tables are installed once at process startup by the compiled
//! program and never change afterwards. Identifiers evaluated before (or
//! without) installation fall back to the same defaults the generated
//! tables use for unknown ids: `1.0` and `false`.

use std::sync::OnceLock;

/// The four per-identifier evaluator functions a compiled program provides.
#[derive(Debug, Clone, Copy)]
pub struct UnitTables {
    /// Base projection of an identifier, used by [`crate::EvalMode::Base`].
    pub base: fn(u16, f64) -> f64,
    /// Value-to-base evaluation, used by [`crate::EvalMode::Inverted`].
    pub inverted: fn(u16, f64) -> f64,
    /// Forward evaluation, used by [`crate::EvalMode::Normal`].
    pub normal: fn(u16, f64) -> f64,
    /// True for identifiers whose evaluation is not linear in the scalar.
    pub logarithmic: fn(u16) -> bool,
}

static INSTALLED: OnceLock<UnitTables> = OnceLock::new();

fn fallback_eval(_id: u16, _x: f64) -> f64 {
    1.0
}

fn fallback_logarithmic(_id: u16) -> bool {
    false
}

static FALLBACK: UnitTables = UnitTables {
    base: fallback_eval,
    inverted: fallback_eval,
    normal: fallback_eval,
    logarithmic: fallback_logarithmic,
};

/// Installs the process-wide evaluator tables.
///
/// # Panics
///
/// Panics if tables have already been installed; the emitted program
/// installs them exactly once during startup.
pub fn install(tables: UnitTables) {
    assert!(
        INSTALLED.set(tables).is_ok(),
        "unit evaluator tables are already installed"
    );
}

/// Returns the installed tables, or the defaults when none are installed.
#[must_use]
pub fn active() -> &'static UnitTables {
    INSTALLED.get().unwrap_or(&FALLBACK)
}
