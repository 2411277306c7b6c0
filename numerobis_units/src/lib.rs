//! # Numerobis Units
//!
//! The unit algebra of the Numerobis runtime: an immutable expression tree
//! for physical units, a normal-form simplifier, a numeric evaluator driven
//! by compiler-generated per-identifier tables, and a pretty-printer that
//! reconstructs fractional notation.
//!
//! Unit trees are built by compiled programs through the constructors on
//! [`UnitNode`], attached to numeric values, combined algebraically by
//! arithmetic, and only ever read afterwards. Sharing subtrees between a
//! node and its simplified form is safe because simplification never
//! mutates its input.

mod display;
mod eval;
mod node;
mod simplify;
pub mod tables;

#[cfg(test)]
mod test_tables;

pub use display::display_unit;
pub use eval::{eval_unit, is_unit_logarithmic, resolve_scalar, EvalMode};
pub use node::{UnitNode, UnitRef};
pub use simplify::simplify;
pub use tables::UnitTables;
