//! Boxed values and their operations

pub mod error;
pub mod list;
mod number;
mod range;
pub mod string;
mod type_;
pub mod util;
mod value_impl;

pub use self::error::RuntimeError;
pub use self::number::{Number, NumberValue};
pub use self::range::Range;
pub use self::type_::ValueType;
pub use self::value_impl::{Closure, ListRef, NativeFn, Value};
