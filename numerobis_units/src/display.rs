//! Human-readable rendering of unit trees
//!
//! The printer reconstructs conventional fractional notation from the
//! normal form: negative powers inside a product move to a `/`-separated
//! denominator, exponents of one disappear, and the dimensionless identity
//! renders as the empty string.

use numerobis_shared::fmt::format_compact;

use crate::node::{UnitNode, UnitRef};
use crate::simplify::simplify;

/// Renders a unit tree as text, simplifying first.
#[must_use]
pub fn display_unit(node: &UnitRef) -> String {
    let simplified = simplify(node);
    let mut out = String::new();
    write_node(&simplified, &mut out);
    out
}

fn is_compound(node: &UnitNode) -> bool {
    matches!(
        node,
        UnitNode::Sum(_) | UnitNode::Product(_) | UnitNode::Neg(_) | UnitNode::Power { .. }
    )
}

/// Integral scalars print without a fraction, everything else compactly.
fn write_scalar(value: f64, out: &mut String) {
    if value == value as i64 as f64 {
        out.push_str(&(value as i64).to_string());
    } else {
        out.push_str(&format_compact(value));
    }
}

fn write_parenthesized(node: &UnitNode, parens: bool, out: &mut String) {
    if parens {
        out.push('(');
    }
    write_node(node, out);
    if parens {
        out.push(')');
    }
}

fn write_node(node: &UnitNode, out: &mut String) {
    match node {
        UnitNode::One => {}

        UnitNode::Scalar(value) => write_scalar(*value, out),

        UnitNode::Identifier { name, .. } => out.push_str(name),

        UnitNode::Product(values) => write_product(values, out),

        UnitNode::Sum(values) => {
            for (i, child) in values.iter().enumerate() {
                if i > 0 {
                    out.push('+');
                }
                write_node(child, out);
            }
        }

        UnitNode::Expression(inner) => {
            out.push('[');
            write_node(inner, out);
            out.push(']');
        }

        UnitNode::Neg(inner) => {
            out.push('-');
            write_parenthesized(inner, is_compound(inner), out);
        }

        UnitNode::Power { base, exponent } => write_power(base, exponent, out),
    }
}

fn write_product(values: &[UnitRef], out: &mut String) {
    let mut numerator: Vec<&UnitRef> = Vec::new();
    let mut denominator: Vec<&UnitRef> = Vec::new();

    for child in values {
        let is_denominator = match child.as_ref() {
            UnitNode::Power { exponent, .. } => match exponent.as_ref() {
                UnitNode::Scalar(v) => *v < 0.0,
                UnitNode::Neg(_) => true,
                _ => false,
            },
            UnitNode::One => continue,
            _ => false,
        };

        if is_denominator {
            denominator.push(child);
        } else {
            numerator.push(child);
        }
    }

    if numerator.is_empty() {
        // everything sits in the denominator (e.g. s^-1)
        out.push('1');
    } else {
        for (i, child) in numerator.iter().enumerate() {
            if i > 0 {
                out.push('*');
            }
            write_parenthesized(child, matches!(child.as_ref(), UnitNode::Sum(_)), out);
        }
    }

    if denominator.is_empty() {
        return;
    }

    out.push('/');
    let grouped = denominator.len() > 1;
    if grouped {
        out.push('(');
    }

    for (i, child) in denominator.iter().enumerate() {
        if i > 0 {
            out.push('*');
        }

        let UnitNode::Power { base, exponent } = child.as_ref() else {
            unreachable!("only powers are partitioned into the denominator");
        };

        write_parenthesized(base, is_compound(base), out);

        match exponent.as_ref() {
            UnitNode::Scalar(v) => {
                let flipped = -v;
                if flipped != 1.0 {
                    out.push('^');
                    write_scalar(flipped, out);
                }
            }
            UnitNode::Neg(inner) => {
                out.push('^');
                write_parenthesized(inner, is_compound(inner), out);
            }
            _ => unreachable!("denominator powers have scalar or negated exponents"),
        }
    }

    if grouped {
        out.push(')');
    }
}

fn write_power(base: &UnitRef, exponent: &UnitRef, out: &mut String) {
    // an exponent of one is not rendered at all
    let exponent_is_unity = match exponent.as_ref() {
        UnitNode::Scalar(v) => *v == 1.0,
        UnitNode::One => true,
        _ => false,
    };

    if exponent_is_unity {
        write_parenthesized(base, is_compound(base), out);
        return;
    }

    write_parenthesized(base, is_compound(base), out);
    out.push('^');

    let exponent_parens = !matches!(
        exponent.as_ref(),
        UnitNode::Scalar(_) | UnitNode::Identifier { .. }
    );
    write_parenthesized(exponent, exponent_parens, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::UnitNode;
    use crate::test_tables::{KILOGRAM, METER, SECOND};

    fn meter() -> UnitRef {
        UnitNode::identifier("m", METER)
    }

    fn second() -> UnitRef {
        UnitNode::identifier("s", SECOND)
    }

    fn kilogram() -> UnitRef {
        UnitNode::identifier("kg", KILOGRAM)
    }

    #[test]
    fn dimensionless_prints_empty() {
        assert_eq!(display_unit(&UnitNode::one()), "");
    }

    #[test]
    fn scalars_print_integrally_when_possible() {
        assert_eq!(display_unit(&UnitNode::scalar(3.0)), "3");
        assert_eq!(display_unit(&UnitNode::scalar(2.5)), "2.5");
        assert_eq!(display_unit(&UnitNode::scalar(-4.0)), "-4");
    }

    #[test]
    fn single_negative_power_moves_below_the_bar() {
        let velocity = UnitNode::product(vec![
            meter(),
            UnitNode::power(second(), UnitNode::scalar(-1.0)),
        ]);
        assert_eq!(display_unit(&velocity), "m/s");
    }

    #[test]
    fn denominator_exponents_print_positively() {
        let acceleration = UnitNode::product(vec![
            meter(),
            UnitNode::power(second(), UnitNode::scalar(-2.0)),
        ]);
        assert_eq!(display_unit(&acceleration), "m/s^2");
    }

    #[test]
    fn multiple_denominator_factors_are_grouped() {
        let pressure = UnitNode::product(vec![
            kilogram(),
            UnitNode::power(meter(), UnitNode::scalar(-1.0)),
            UnitNode::power(second(), UnitNode::scalar(-2.0)),
        ]);
        assert_eq!(display_unit(&pressure), "kg/(m*s^2)");
    }

    #[test]
    fn empty_numerator_prints_one() {
        // Product([s^-1, s^-1]) collapses to s^-2 under simplification, so
        // build a two-base denominator instead.
        let inverse = UnitNode::product(vec![
            UnitNode::power(meter(), UnitNode::scalar(-1.0)),
            UnitNode::power(second(), UnitNode::scalar(-1.0)),
        ]);
        assert_eq!(display_unit(&inverse), "1/(m*s)");
    }

    #[test]
    fn positive_powers_stay_in_the_numerator() {
        let area = UnitNode::power(meter(), UnitNode::scalar(2.0));
        assert_eq!(display_unit(&area), "m^2");
    }

    #[test]
    fn exponent_of_one_is_elided() {
        let plain = UnitNode::power(meter(), UnitNode::scalar(1.0));
        assert_eq!(display_unit(&plain), "m");

        let one_exponent = UnitNode::power(meter(), UnitNode::one());
        assert_eq!(display_unit(&one_exponent), "m");
    }

    #[test]
    fn sums_join_with_plus() {
        let affine = UnitNode::sum(vec![
            UnitNode::identifier("K", 4),
            UnitNode::scalar(273.15),
        ]);
        assert_eq!(display_unit(&affine), "273.15+K");
    }

    #[test]
    fn sums_inside_products_are_parenthesized() {
        let product = UnitNode::product(vec![
            meter(),
            UnitNode::sum(vec![UnitNode::identifier("K", 4), UnitNode::scalar(5.0)]),
        ]);
        assert_eq!(display_unit(&product), "m*(5+K)");
    }

    #[test]
    fn negation_parenthesizes_compound_children() {
        let negated = UnitNode::neg(UnitNode::product(vec![meter(), second()]));
        assert_eq!(display_unit(&negated), "-(m*s)");
    }

    #[test]
    fn negation_of_a_plain_identifier_has_no_parens() {
        let tree = UnitNode::neg(meter());
        assert_eq!(display_unit(&tree), "-m");
    }

    #[test]
    fn scaled_units_keep_their_factor() {
        let scaled = UnitNode::product(vec![UnitNode::scalar(1000.0), meter()]);
        assert_eq!(display_unit(&scaled), "1000*m");
    }

    #[test]
    fn product_identity_vanishes() {
        let with_one = UnitNode::product(vec![UnitNode::one(), UnitNode::identifier("dBm", 7)]);
        assert_eq!(display_unit(&with_one), "dBm");
    }
}
