//! The polymorphic operation surface consumed by compiled programs
//!
//! The compiler emits uniform call sites against these functions and is
//! responsible for operand types; an operand shape no checked path accepts
//! is a compiler bug and aborts. User-facing failures (bad indices, parse
//! failures, division by zero) leave through the diagnostic throw path.

use numerobis_shared::span::SourceSpan;
use numerobis_units::{UnitNode, UnitRef};

use crate::builtins::echo;
use crate::diagnostics;
use crate::value::error::{codes, RuntimeError};
use crate::value::{list, string, Number, Value};

fn invalid_operands(op: &str, lhs: &Value, rhs: &Value) -> ! {
    panic!(
        "operator `{op}` is not defined for {} and {}",
        lhs.type_(),
        rhs.type_()
    );
}

fn invalid_operand(op: &str, value: &Value) -> ! {
    panic!("operator `{op}` is not defined for {}", value.type_());
}

fn number_pair<'a>(op: &str, lhs: &'a Value, rhs: &'a Value) -> (&'a Number, &'a Number) {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => (a, b),
        _ => invalid_operands(op, lhs, rhs),
    }
}

/// Two lists, or two strings, order by element count rather than
/// lexicographically.
fn length_pair(lhs: &Value, rhs: &Value) -> Option<(usize, usize)> {
    match (lhs, rhs) {
        (Value::List(_), Value::List(_)) | (Value::Str(_), Value::Str(_)) => {
            Some((lhs.len()?, rhs.len()?))
        }
        _ => None,
    }
}

/// `a + b`
#[must_use]
pub fn add(lhs: &Value, rhs: &Value) -> Value {
    let (a, b) = number_pair("+", lhs, rhs);
    Value::Number(a.add(b))
}

/// `a - b`
#[must_use]
pub fn sub(lhs: &Value, rhs: &Value) -> Value {
    let (a, b) = number_pair("-", lhs, rhs);
    Value::Number(a.sub(b))
}

/// `a * b`
#[must_use]
pub fn mul(lhs: &Value, rhs: &Value) -> Value {
    let (a, b) = number_pair("*", lhs, rhs);
    Value::Number(a.mul(b))
}

/// `a / b`. Integer division by zero throws.
#[must_use]
pub fn div(lhs: &Value, rhs: &Value) -> Value {
    let (a, b) = number_pair("/", lhs, rhs);
    match a.checked_div(b) {
        Ok(result) => Value::Number(result),
        Err(error) => diagnostics::fail(&error),
    }
}

/// `a ^ b`
#[must_use]
pub fn pow(lhs: &Value, rhs: &Value) -> Value {
    let (a, b) = number_pair("^", lhs, rhs);
    Value::Number(a.pow(b))
}

/// `a % b`
#[must_use]
pub fn rem(lhs: &Value, rhs: &Value) -> Value {
    let (a, b) = number_pair("%", lhs, rhs);
    Value::Number(a.rem(b))
}

/// `a |+| b`: delta addition in the left unit's coordinate system.
#[must_use]
pub fn delta_add(lhs: &Value, rhs: &Value) -> Value {
    let (a, b) = number_pair("|+|", lhs, rhs);
    Value::Number(a.delta_add(b))
}

/// `a |-| b`: delta subtraction in the left unit's coordinate system.
#[must_use]
pub fn delta_sub(lhs: &Value, rhs: &Value) -> Value {
    let (a, b) = number_pair("|-|", lhs, rhs);
    Value::Number(a.delta_sub(b))
}

/// `a < b`. Numbers compare by magnitude, like-typed lists and strings by
/// length.
#[must_use]
pub fn lt(lhs: &Value, rhs: &Value) -> Value {
    if let Some((a, b)) = length_pair(lhs, rhs) {
        return Value::Bool(a < b);
    }
    let (a, b) = number_pair("<", lhs, rhs);
    Value::Bool(a.magnitude_cmp(b).is_lt())
}

/// `a <= b`. Numbers compare by magnitude, like-typed lists and strings by
/// length.
#[must_use]
pub fn le(lhs: &Value, rhs: &Value) -> Value {
    if let Some((a, b)) = length_pair(lhs, rhs) {
        return Value::Bool(a <= b);
    }
    let (a, b) = number_pair("<=", lhs, rhs);
    Value::Bool(a.magnitude_cmp(b).is_le())
}

/// `a > b`. Numbers compare by magnitude, like-typed lists and strings by
/// length.
#[must_use]
pub fn gt(lhs: &Value, rhs: &Value) -> Value {
    if let Some((a, b)) = length_pair(lhs, rhs) {
        return Value::Bool(a > b);
    }
    let (a, b) = number_pair(">", lhs, rhs);
    Value::Bool(a.magnitude_cmp(b).is_gt())
}

/// `a >= b`. Numbers compare by magnitude, like-typed lists and strings by
/// length.
#[must_use]
pub fn ge(lhs: &Value, rhs: &Value) -> Value {
    if let Some((a, b)) = length_pair(lhs, rhs) {
        return Value::Bool(a >= b);
    }
    let (a, b) = number_pair(">=", lhs, rhs);
    Value::Bool(a.magnitude_cmp(b).is_ge())
}

/// `a == b`, defined across all variants.
#[must_use]
pub fn eq(lhs: &Value, rhs: &Value) -> Value {
    Value::Bool(lhs.eq_value(rhs))
}

/// Unary `-a`.
#[must_use]
pub fn neg(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(n.neg()),
        _ => invalid_operand("-", value),
    }
}

/// Truthiness, used by conditionals and `not`.
#[must_use]
pub fn truthy(value: &Value) -> bool {
    value.is_truthy()
}

/// Element count of strings and lists.
#[must_use]
pub fn len(value: &Value) -> Value {
    match value.len() {
        Some(n) => Value::Number(Number::int(n as i64, UnitNode::one())),
        None => invalid_operand("len", value),
    }
}

/// String rendering of any value.
#[must_use]
pub fn str_of(value: &Value) -> Value {
    Value::str(&echo::render(value))
}

/// Conversion to the integer representation.
///
/// Numbers truncate in place, booleans become 0/1, strings parse; anything
/// else is a conversion failure and throws with code 301.
#[must_use]
pub fn to_int(value: &Value, span: SourceSpan) -> Value {
    match checked_to_int(value) {
        Ok(result) => result,
        Err(error) => diagnostics::fail(&error.with_span(span)),
    }
}

/// The fallible half of [`to_int`].
///
/// # Errors
///
/// Returns an error with code 301 when the value cannot be converted.
pub fn checked_to_int(value: &Value) -> Result<Value, RuntimeError> {
    match value {
        Value::Number(n) => Ok(Value::Number(n.to_int())),
        Value::Bool(b) => Ok(Value::Number(Number::int(i64::from(*b), UnitNode::one()))),
        Value::Str(s) => {
            let parsed = string::checked_parse_int(s)?;
            Ok(Value::Number(Number::int(parsed, UnitNode::one())))
        }
        _ => Err(RuntimeError::new(codes::INT_PARSE)),
    }
}

/// Conversion to the double representation. Defined for numbers only.
#[must_use]
pub fn to_float(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(n.to_float()),
        _ => invalid_operand("float", value),
    }
}

/// Unit conversion of a number to the target unit.
#[must_use]
pub fn convert(value: &Value, target: UnitRef) -> Value {
    match value {
        Value::Number(n) => Value::Number(n.convert(target)),
        _ => invalid_operand("->", value),
    }
}

/// `v[i]` with the source span of the index expression.
///
/// Out-of-range indices throw: code 901 for lists, 902 for strings.
#[must_use]
pub fn getitem(value: &Value, index: &Value, span: SourceSpan) -> Value {
    match checked_getitem(value, index) {
        Ok(result) => result,
        Err(error) => diagnostics::fail(&error.with_span(span)),
    }
}

/// The fallible half of [`getitem`].
///
/// # Errors
///
/// Returns an error with code 901 (list) or 902 (string) when the index is
/// out of range.
pub fn checked_getitem(value: &Value, index: &Value) -> Result<Value, RuntimeError> {
    let index = match index.as_number() {
        Some(n) => n.as_i64(),
        None => invalid_operand("[]", index),
    };

    match value {
        Value::List(items) => list::checked_get(items, index),
        Value::Str(s) => string::checked_char_at(s, index),
        _ => invalid_operand("[]", value),
    }
}

/// `v[i] = x` with the source span of the index expression.
///
/// Defined for lists; out-of-range indices throw with code 901.
pub fn setitem(value: &Value, index: &Value, element: Value, span: SourceSpan) {
    let index = match index.as_number() {
        Some(n) => n.as_i64(),
        None => invalid_operand("[]=", index),
    };

    let result = match value {
        Value::List(items) => list::checked_set(items, index, element),
        _ => invalid_operand("[]=", value),
    };

    if let Err(error) = result {
        diagnostics::fail(&error.with_span(span));
    }
}

/// `v[start:stop:step]`; `None` arguments are defaulted components.
#[must_use]
pub fn getslice(value: &Value, start: &Value, stop: &Value, step: &Value) -> Value {
    let start = slice_component(start);
    let stop = slice_component(stop);
    let step = slice_component(step);

    match value {
        Value::List(items) => list::slice(items, start, stop, step),
        Value::Str(s) => string::slice(s, start, stop, step),
        _ => invalid_operand("[:]", value),
    }
}

/// A slice component is either the `None` sentinel or an integer number.
fn slice_component(value: &Value) -> Option<i64> {
    match value {
        Value::None => None,
        Value::Number(n) => Some(n.as_i64()),
        _ => invalid_operand("[:]", value),
    }
}
