//! Numbers with units

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use numerobis_shared::fmt::format_compact;
use numerobis_units::{display_unit, eval_unit, resolve_scalar, EvalMode, UnitNode, UnitRef};

use crate::value::error::{codes, RuntimeError};

/// A boxed numeric value: a 64-bit integer or IEEE double, plus the unit
/// tree it carries. The unit is [`UnitNode::One`] for dimensionless
/// numbers, never absent.
///
/// Numbers are immutable; every operation returns a fresh number. Values
/// with a non-trivial unit are stored in base-linear form (the compiler
/// rewrites literals such as `60 dBm` into their base magnitude before
/// emitting the constructor call), so arithmetic works on raw magnitudes
/// and the unit tree only comes into play for delta operations, conversion,
/// and display.
#[derive(Debug, Clone)]
pub struct Number {
    value: NumberValue,
    unit: UnitRef,
}

/// The representation of a number: integer or double.
#[derive(Debug, Clone, Copy)]
pub enum NumberValue {
    /// 64-bit signed integer representation.
    Int(i64),
    /// IEEE-754 double representation.
    Float(f64),
}

impl Number {
    /// Creates an integer number carrying the given unit.
    #[must_use]
    pub fn int(value: i64, unit: UnitRef) -> Self {
        Self {
            value: NumberValue::Int(value),
            unit,
        }
    }

    /// Creates a floating point number carrying the given unit.
    #[must_use]
    pub fn float(value: f64, unit: UnitRef) -> Self {
        Self {
            value: NumberValue::Float(value),
            unit,
        }
    }

    /// Returns the representation.
    #[must_use]
    pub const fn value(&self) -> NumberValue {
        self.value
    }

    /// Returns the unit tree.
    #[must_use]
    pub const fn unit(&self) -> &UnitRef {
        &self.unit
    }

    /// Returns the raw magnitude as a double.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self.value {
            NumberValue::Int(v) => v as f64,
            NumberValue::Float(v) => v,
        }
    }

    /// Returns the raw magnitude as an integer, truncating doubles.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        match self.value {
            NumberValue::Int(v) => v,
            NumberValue::Float(v) => v as i64,
        }
    }

    /// True when the representation is a double.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self.value, NumberValue::Float(_))
    }

    /// Reduces the value to its target representation via the unit tree.
    #[must_use]
    pub fn resolved(&self) -> f64 {
        resolve_scalar(self.as_f64(), &self.unit)
    }

    /// Reduces the value against a different unit tree. Used by the delta
    /// operators, which interpret both operands in the left unit.
    #[must_use]
    pub fn resolved_in(&self, unit: &UnitNode) -> f64 {
        resolve_scalar(self.as_f64(), unit)
    }

    /// True when the magnitude is non-zero.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self.value {
            NumberValue::Int(v) => v != 0,
            NumberValue::Float(v) => v != 0.0,
        }
    }

    /// Addition. The result keeps the left unit.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        self.binop(rhs, i64::wrapping_add, |a, b| a + b, Rc::clone(&self.unit))
    }

    /// Subtraction. The result keeps the left unit.
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        self.binop(rhs, i64::wrapping_sub, |a, b| a - b, Rc::clone(&self.unit))
    }

    /// Multiplication. The result unit is the product of both units, or
    /// `One` when both sides are dimensionless.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        let unit = if self.unit.is_one() && rhs.unit.is_one() {
            UnitNode::one()
        } else {
            UnitNode::product(vec![Rc::clone(&self.unit), Rc::clone(&rhs.unit)])
        };
        self.binop(rhs, i64::wrapping_mul, |a, b| a * b, unit)
    }

    /// Division. The result unit multiplies the left unit by the inverse of
    /// the right one. Integer division truncates.
    ///
    /// # Errors
    ///
    /// Returns an error with code 302 when both operands are integers and
    /// the divisor is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RuntimeError> {
        let unit = if self.unit.is_one() && rhs.unit.is_one() {
            UnitNode::one()
        } else {
            UnitNode::product(vec![
                Rc::clone(&self.unit),
                UnitNode::power(Rc::clone(&rhs.unit), UnitNode::scalar(-1.0)),
            ])
        };

        match (self.value, rhs.value) {
            (NumberValue::Int(a), NumberValue::Int(b)) => {
                if b == 0 {
                    return Err(RuntimeError::new(codes::INT_DIVISION_BY_ZERO));
                }
                Ok(Self {
                    value: NumberValue::Int(a.wrapping_div(b)),
                    unit,
                })
            }
            _ => Ok(Self {
                value: NumberValue::Float(self.as_f64() / rhs.as_f64()),
                unit,
            }),
        }
    }

    /// Exponentiation. A dimensionless exponent raises the left unit to the
    /// exponent's value; an exponent that itself carries a unit ends up in
    /// the exponent position of the unit tree. Integer operands go through
    /// the floating `powf` and are cast back.
    #[must_use]
    pub fn pow(&self, rhs: &Self) -> Self {
        let unit = if self.unit.is_one() && rhs.unit.is_one() {
            UnitNode::one()
        } else if rhs.unit.is_one() {
            UnitNode::power(Rc::clone(&self.unit), UnitNode::scalar(rhs.as_f64()))
        } else {
            UnitNode::power(Rc::clone(&self.unit), Rc::clone(&rhs.unit))
        };

        self.binop(
            rhs,
            |a, b| (a as f64).powf(b as f64) as i64,
            f64::powf,
            unit,
        )
    }

    /// Remainder through `fmod`, cast back for integer operands. The result
    /// keeps the left unit.
    #[must_use]
    pub fn rem(&self, rhs: &Self) -> Self {
        self.binop(
            rhs,
            |a, b| ((a as f64) % (b as f64)) as i64,
            |a, b| a % b,
            Rc::clone(&self.unit),
        )
    }

    /// Delta addition: unit-preserving scalar arithmetic for affine units
    /// where plain `+` is meaningless.
    #[must_use]
    pub fn delta_add(&self, rhs: &Self) -> Self {
        self.delta(rhs, |a, b| a + b)
    }

    /// Delta subtraction; see [`Number::delta_add`].
    #[must_use]
    pub fn delta_sub(&self, rhs: &Self) -> Self {
        self.delta(rhs, |a, b| a - b)
    }

    /// Reduces both operands to the left unit's scalar, applies the raw
    /// operation, and re-applies the left unit's forward evaluation.
    fn delta(&self, rhs: &Self, op: fn(f64, f64) -> f64) -> Self {
        let x = self.resolved();
        let y = rhs.resolved_in(&self.unit);
        let result = eval_unit(&self.unit, op(x, y), EvalMode::Normal);

        let value = match (self.value, rhs.value) {
            (NumberValue::Int(_), NumberValue::Int(_)) => NumberValue::Int(result as i64),
            _ => NumberValue::Float(result),
        };

        Self {
            value,
            unit: Rc::clone(&self.unit),
        }
    }

    /// Compares raw magnitudes. Mixed representations compare as doubles.
    /// Comparisons involving NaN yield `Equal`. Units are not consulted;
    /// the compiler stores values in base form, so magnitudes of
    /// like-dimensioned numbers are directly comparable.
    #[must_use]
    pub fn magnitude_cmp(&self, rhs: &Self) -> Ordering {
        match (self.value, rhs.value) {
            (NumberValue::Int(a), NumberValue::Int(b)) => a.cmp(&b),
            _ => {
                let a = self.as_f64();
                let b = rhs.as_f64();
                if a.is_nan() || b.is_nan() {
                    return Ordering::Equal;
                }
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
        }
    }

    /// Negation, preserving representation and unit.
    #[must_use]
    pub fn neg(&self) -> Self {
        let value = match self.value {
            NumberValue::Int(v) => NumberValue::Int(v.wrapping_neg()),
            NumberValue::Float(v) => NumberValue::Float(-v),
        };
        Self {
            value,
            unit: Rc::clone(&self.unit),
        }
    }

    /// Converts the number to the target unit.
    ///
    /// Values are stored in base-linear form, so conversion to a concrete
    /// unit relabels the number without touching the magnitude. Conversion
    /// to the dimensionless identity reduces the value to its display
    /// scalar through the source unit.
    #[must_use]
    pub fn convert(&self, target: UnitRef) -> Self {
        let mut value = self.as_f64();

        if target.is_one() {
            value = resolve_scalar(value, &self.unit);
        }

        match self.value {
            NumberValue::Int(_) => Self::int(value as i64, target),
            NumberValue::Float(_) => Self::float(value, target),
        }
    }

    /// Casts to the integer representation, truncating. Keeps the unit.
    #[must_use]
    pub fn to_int(&self) -> Self {
        match self.value {
            NumberValue::Int(_) => self.clone(),
            NumberValue::Float(v) => Self::int(v as i64, Rc::clone(&self.unit)),
        }
    }

    /// Casts to the double representation. Keeps the unit.
    #[must_use]
    pub fn to_float(&self) -> Self {
        match self.value {
            NumberValue::Float(_) => self.clone(),
            NumberValue::Int(v) => Self::float(v as f64, Rc::clone(&self.unit)),
        }
    }

    /// Applies an operator pair with the usual representation promotion:
    /// the result is a double when either operand is.
    fn binop(
        &self,
        rhs: &Self,
        int_op: fn(i64, i64) -> i64,
        float_op: fn(f64, f64) -> f64,
        unit: UnitRef,
    ) -> Self {
        let value = match (self.value, rhs.value) {
            (NumberValue::Int(a), NumberValue::Int(b)) => NumberValue::Int(int_op(a, b)),
            _ => NumberValue::Float(float_op(self.as_f64(), rhs.as_f64())),
        };
        Self { value, unit }
    }
}

impl fmt::Display for Number {
    /// Renders the reduced scalar compactly, followed by the unit when it
    /// prints non-empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_compact(self.resolved()))?;

        let unit = display_unit(&self.unit);
        if !unit.is_empty() {
            write!(f, " {unit}")?;
        }
        Ok(())
    }
}
