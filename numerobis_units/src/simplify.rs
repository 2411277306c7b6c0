//! Normal-form rewriting of unit trees
//!
//! `simplify` reduces a unit expression to a canonical shape: groupings
//! unwrapped, nested groups flattened, numeric factors folded, like bases
//! merged by summing exponents, like sum terms merged by adding
//! coefficients, and powers distributed over products. The result is
//! semantically equivalent to the input under every evaluation mode, and a
//! second pass is a no-op.

use std::rc::Rc;

use crate::node::{UnitNode, UnitRef};

/// Simplifies a unit tree. The input is never mutated; untouched subtrees
/// are shared with the result.
#[must_use]
pub fn simplify(node: &UnitRef) -> UnitRef {
    match node.as_ref() {
        UnitNode::Expression(inner) => simplify(inner),
        UnitNode::Neg(inner) => simplify_neg(inner),
        UnitNode::Power { base, exponent } => simplify_power(base, exponent),
        UnitNode::Product(values) => simplify_product(values),
        UnitNode::Sum(values) => simplify_sum(values),
        _ => Rc::clone(node),
    }
}

fn simplify_neg(inner: &UnitRef) -> UnitRef {
    let value = simplify(inner);

    match value.as_ref() {
        UnitNode::One => UnitNode::scalar(-1.0),
        UnitNode::Scalar(v) => UnitNode::scalar(-v),
        _ => UnitNode::neg(value),
    }
}

fn simplify_power(raw_base: &UnitRef, raw_exponent: &UnitRef) -> UnitRef {
    let base = simplify(raw_base);
    let exponent = simplify(raw_exponent);

    if let UnitNode::Scalar(e) = *exponent {
        if e == 0.0 {
            return UnitNode::scalar(1.0);
        }
        if e == 1.0 {
            return base;
        }
    }

    if exponent.is_one() {
        return base;
    }

    if base.is_one() {
        return UnitNode::scalar(1.0);
    }

    if let (UnitNode::Scalar(b), UnitNode::Scalar(e)) = (base.as_ref(), exponent.as_ref()) {
        return UnitNode::scalar(b.powf(*e));
    }

    // (x^a)^b  ->  x^(a*b), re-simplified to allow further reductions
    if let UnitNode::Power {
        base: inner_base,
        exponent: inner_exponent,
    } = base.as_ref()
    {
        let combined = simplify_product(&[Rc::clone(inner_exponent), Rc::clone(&exponent)]);
        return simplify_power(inner_base, &combined);
    }

    // (a * b * ...)^n  ->  a^n * b^n * ...
    if let UnitNode::Product(factors) = base.as_ref() {
        let distributed: Vec<UnitRef> = factors
            .iter()
            .map(|factor| UnitNode::power(Rc::clone(factor), Rc::clone(&exponent)))
            .collect();
        return simplify_product(&distributed);
    }

    UnitNode::power(base, exponent)
}

fn simplify_product(values: &[UnitRef]) -> UnitRef {
    let terms = flatten(values, true);

    let mut scalar_acc = 1.0;
    let mut bases: Vec<UnitRef> = Vec::new();
    let mut exponents: Vec<Vec<UnitRef>> = Vec::new();

    for term in terms {
        if let UnitNode::Scalar(v) = *term {
            scalar_acc *= v;
            continue;
        }

        let (base, exponent) = match term.as_ref() {
            UnitNode::Power { base, exponent } => (Rc::clone(base), Rc::clone(exponent)),
            _ => (Rc::clone(&term), UnitNode::scalar(1.0)),
        };

        match bases.iter().position(|b| **b == *base) {
            Some(i) => exponents[i].push(exponent),
            None => {
                bases.push(base);
                exponents.push(vec![exponent]);
            }
        }
    }

    let mut result: Vec<UnitRef> = Vec::new();

    if scalar_acc != 1.0 {
        result.push(UnitNode::scalar(scalar_acc));
    }

    for (base, exps) in bases.into_iter().zip(exponents) {
        let total = if exps.len() == 1 {
            exps.into_iter().next().expect("group has one exponent")
        } else {
            simplify_sum(&exps)
        };

        if let UnitNode::Scalar(v) = *total {
            if v == 0.0 {
                continue;
            }
            if v == 1.0 {
                result.push(base);
                continue;
            }
        }

        result.push(UnitNode::power(base, total));
    }

    finalize(result, true)
}

fn simplify_sum(values: &[UnitRef]) -> UnitRef {
    let terms = flatten(values, false);

    let mut scalar_acc = 0.0;
    let mut bases: Vec<UnitRef> = Vec::new();
    let mut coefficients: Vec<f64> = Vec::new();

    for term in terms {
        if let UnitNode::Scalar(v) = *term {
            scalar_acc += v;
            continue;
        }

        let (coefficient, base) = decompose(&term);

        if base.is_one() {
            scalar_acc += coefficient;
            continue;
        }

        match bases.iter().position(|b| **b == *base) {
            Some(i) => coefficients[i] += coefficient,
            None => {
                bases.push(base);
                coefficients.push(coefficient);
            }
        }
    }

    let mut result: Vec<UnitRef> = Vec::new();

    if scalar_acc != 0.0 {
        result.push(UnitNode::scalar(scalar_acc));
    }

    for (base, coefficient) in bases.into_iter().zip(coefficients) {
        if coefficient == 0.0 {
            continue;
        }
        if coefficient == 1.0 {
            result.push(base);
            continue;
        }

        let mut factors = vec![UnitNode::scalar(coefficient)];
        if let UnitNode::Product(base_values) = base.as_ref() {
            factors.extend(base_values.iter().map(Rc::clone));
        } else {
            factors.push(Rc::clone(&base));
        }
        result.push(UnitNode::product(factors));
    }

    finalize(result, false)
}

/// Simplifies each child, splices children of nested same-kind groups, and
/// drops `One` children. `One` is a placeholder for "no unit" rather than a
/// numeric one, so it is discarded from sums as well as products.
fn flatten(values: &[UnitRef], is_product: bool) -> Vec<UnitRef> {
    let mut flat = Vec::new();

    for child in values {
        let child = simplify(child);
        match child.as_ref() {
            UnitNode::Product(inner) if is_product => flat.extend(inner.iter().map(Rc::clone)),
            UnitNode::Sum(inner) if !is_product => flat.extend(inner.iter().map(Rc::clone)),
            UnitNode::One => {}
            _ => flat.push(child),
        }
    }

    flat
}

/// Splits a term into `(coefficient, base)` for like-term grouping: scalar
/// factors of a product are folded into the coefficient, everything else
/// becomes the base. Terms without a scalar factor pass through whole.
fn decompose(term: &UnitRef) -> (f64, UnitRef) {
    let UnitNode::Product(values) = term.as_ref() else {
        return (1.0, Rc::clone(term));
    };

    let mut coefficient = 1.0;
    let mut had_scalar = false;
    let mut others: Vec<UnitRef> = Vec::new();

    for value in values {
        if let UnitNode::Scalar(v) = **value {
            coefficient *= v;
            had_scalar = true;
        } else {
            others.push(Rc::clone(value));
        }
    }

    if !had_scalar {
        return (1.0, Rc::clone(term));
    }

    let base = match others.len() {
        0 => UnitNode::one(),
        1 => others.into_iter().next().expect("checked length"),
        _ => UnitNode::product(others),
    };

    (coefficient, base)
}

fn finalize(mut values: Vec<UnitRef>, is_product: bool) -> UnitRef {
    match values.len() {
        0 => UnitNode::scalar(if is_product { 1.0 } else { 0.0 }),
        1 => values.remove(0),
        _ if is_product => UnitNode::product(values),
        _ => UnitNode::sum(values),
    }
}
