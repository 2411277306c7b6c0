//! The unit expression tree

use std::rc::Rc;

/// A shared handle to a unit tree node.
///
/// Unit trees are immutable after construction and freely share subtrees,
/// so nodes are handed around by reference count. The runtime is
/// single-threaded, which makes `Rc` the right fit.
pub type UnitRef = Rc<UnitNode>;

/// One node of a unit expression.
///
/// A unit is an algebraic expression over named unit identifiers: products
/// and sums of subexpressions, powers, negation, plain numeric factors, and
/// the dimensionless identity [`UnitNode::One`]. Identifiers carry the id
/// the compiler assigned them, which keys the generated evaluator tables
/// (see [`crate::tables`]).
#[derive(Debug, Clone)]
pub enum UnitNode {
    /// The dimensionless identity; evaluates to the input scalar.
    One,
    /// A pure numeric factor.
    Scalar(f64),
    /// A named unit, evaluated through the compiler-generated tables.
    Identifier {
        /// The display name, e.g. `"m"` or `"dBm"`.
        name: Rc<str>,
        /// Index into the generated evaluator tables.
        id: u16,
    },
    /// A multiplicative group. May be empty (equivalent to `Scalar(1)`).
    Product(Vec<UnitRef>),
    /// An additive group. May be empty; used for affine pieces such as
    /// `K + 273.15`.
    Sum(Vec<UnitRef>),
    /// `base ^ exponent` with arbitrary subexpressions on both sides.
    Power {
        /// The base expression.
        base: UnitRef,
        /// The exponent expression.
        exponent: UnitRef,
    },
    /// Unary negation.
    Neg(UnitRef),
    /// Pure grouping; simplifies away.
    Expression(UnitRef),
}

impl UnitNode {
    /// The dimensionless identity.
    #[must_use]
    pub fn one() -> UnitRef {
        Rc::new(Self::One)
    }

    /// A numeric factor.
    #[must_use]
    pub fn scalar(value: f64) -> UnitRef {
        Rc::new(Self::Scalar(value))
    }

    /// A named unit identifier.
    #[must_use]
    pub fn identifier(name: &str, id: u16) -> UnitRef {
        Rc::new(Self::Identifier {
            name: Rc::from(name),
            id,
        })
    }

    /// A multiplicative group of the given factors.
    #[must_use]
    pub fn product(values: Vec<UnitRef>) -> UnitRef {
        Rc::new(Self::Product(values))
    }

    /// An additive group of the given terms.
    #[must_use]
    pub fn sum(values: Vec<UnitRef>) -> UnitRef {
        Rc::new(Self::Sum(values))
    }

    /// `base ^ exponent`.
    #[must_use]
    pub fn power(base: UnitRef, exponent: UnitRef) -> UnitRef {
        Rc::new(Self::Power { base, exponent })
    }

    /// Unary negation of a subexpression.
    #[must_use]
    pub fn neg(value: UnitRef) -> UnitRef {
        Rc::new(Self::Neg(value))
    }

    /// A grouping wrapper around a subexpression.
    #[must_use]
    pub fn expression(value: UnitRef) -> UnitRef {
        Rc::new(Self::Expression(value))
    }

    /// Returns true for the dimensionless identity.
    #[must_use]
    pub fn is_one(&self) -> bool {
        matches!(self, Self::One)
    }
}

impl PartialEq for UnitNode {
    /// Structural equality, used by the simplifier to group like factors.
    ///
    /// `Product` and `Sum` children compare order-insensitively through
    /// one-for-one matching (group widths are tiny, so the quadratic match
    /// is fine). Identifiers compare by id only; the name is display
    /// metadata.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::One, Self::One) => true,
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Identifier { id: a, .. }, Self::Identifier { id: b, .. }) => a == b,
            (Self::Neg(a), Self::Neg(b)) | (Self::Expression(a), Self::Expression(b)) => a == b,
            (
                Self::Power {
                    base: ab,
                    exponent: ae,
                },
                Self::Power {
                    base: bb,
                    exponent: be,
                },
            ) => ab == bb && ae == be,
            (Self::Product(a), Self::Product(b)) | (Self::Sum(a), Self::Sum(b)) => {
                unordered_eq(a, b)
            }
            _ => false,
        }
    }
}

/// One-for-one matching of two child lists, ignoring order.
fn unordered_eq(a: &[UnitRef], b: &[UnitRef]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut matched = vec![false; b.len()];
    for item in a {
        let found = b
            .iter()
            .enumerate()
            .find(|(j, candidate)| !matched[*j] && item.as_ref() == candidate.as_ref());
        match found {
            Some((j, _)) => matched[j] = true,
            None => return false,
        }
    }
    true
}
