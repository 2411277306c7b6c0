//! Numeric evaluation of unit trees

use crate::node::UnitNode;
use crate::tables;

/// How identifier nodes are interpreted against the generated tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    /// Forward evaluation of the identifier's defining expression.
    Normal,
    /// Projection onto the identifier's base units.
    Base,
    /// Inverse of the defining expression (value-to-base).
    Inverted,
}

/// Evaluates a unit tree at the scalar `number`.
///
/// `One` passes the scalar through, scalars evaluate to themselves,
/// products and sums fold their children multiplicatively and additively
/// (empty groups give their identities), and identifiers defer to the
/// installed [`tables`] in the requested mode.
#[must_use]
pub fn eval_unit(node: &UnitNode, number: f64, mode: EvalMode) -> f64 {
    match node {
        UnitNode::One => number,
        UnitNode::Scalar(v) => *v,
        UnitNode::Product(values) => values
            .iter()
            .map(|child| eval_unit(child, number, mode))
            .product(),
        UnitNode::Sum(values) => values
            .iter()
            .map(|child| eval_unit(child, number, mode))
            .sum(),
        UnitNode::Expression(inner) => eval_unit(inner, number, mode),
        UnitNode::Neg(inner) => -eval_unit(inner, number, mode),
        UnitNode::Power { base, exponent } => {
            eval_unit(base, number, mode).powf(eval_unit(exponent, number, mode))
        }
        UnitNode::Identifier { id, .. } => {
            let tables = tables::active();
            match mode {
                EvalMode::Base => (tables.base)(*id, number),
                EvalMode::Inverted => (tables.inverted)(*id, number),
                EvalMode::Normal => (tables.normal)(*id, number),
            }
        }
    }
}

/// True iff any identifier in the tree is logarithmic.
#[must_use]
pub fn is_unit_logarithmic(node: &UnitNode) -> bool {
    match node {
        UnitNode::One | UnitNode::Scalar(_) => false,
        UnitNode::Product(values) | UnitNode::Sum(values) => {
            values.iter().any(|child| is_unit_logarithmic(child))
        }
        UnitNode::Neg(inner) | UnitNode::Expression(inner) => is_unit_logarithmic(inner),
        UnitNode::Power { base, exponent } => {
            is_unit_logarithmic(base) || is_unit_logarithmic(exponent)
        }
        UnitNode::Identifier { id, .. } => (tables::active().logarithmic)(*id),
    }
}

/// Reduces a numeric value carried by `unit` to its target representation.
///
/// Dimensionless values pass through. Otherwise the tree is evaluated in
/// base and inverted modes and their ratio applied: directly for
/// logarithmic (and affine) units, multiplicatively for everything else.
#[must_use]
pub fn resolve_scalar(value: f64, unit: &UnitNode) -> f64 {
    if unit.is_one() {
        return value;
    }

    let base = eval_unit(unit, value, EvalMode::Base);
    let inverted = eval_unit(unit, value, EvalMode::Inverted);
    let ratio = inverted / base;

    if is_unit_logarithmic(unit) {
        ratio
    } else {
        value * ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::UnitNode;
    use crate::test_tables::{self, CELSIUS, DBM, KELVIN, METER, SECOND};

    #[test]
    fn structural_nodes_evaluate_mode_independently() {
        test_tables::install();

        for mode in [EvalMode::Normal, EvalMode::Base, EvalMode::Inverted] {
            assert_eq!(eval_unit(&UnitNode::One, 7.0, mode), 7.0);
            assert_eq!(eval_unit(&UnitNode::Scalar(2.5), 7.0, mode), 2.5);
            assert_eq!(eval_unit(&UnitNode::product(vec![]), 7.0, mode), 1.0);
            assert_eq!(eval_unit(&UnitNode::sum(vec![]), 7.0, mode), 0.0);
            assert_eq!(
                eval_unit(&UnitNode::neg(UnitNode::scalar(3.0)), 7.0, mode),
                -3.0
            );
            assert_eq!(
                eval_unit(
                    &UnitNode::power(UnitNode::scalar(2.0), UnitNode::scalar(3.0)),
                    7.0,
                    mode,
                ),
                8.0
            );
            assert_eq!(
                eval_unit(&UnitNode::expression(UnitNode::scalar(4.0)), 7.0, mode),
                4.0
            );
        }
    }

    #[test]
    fn identifiers_follow_the_mode() {
        test_tables::install();
        let celsius = UnitNode::identifier("degC", CELSIUS);

        assert_eq!(eval_unit(&celsius, 300.0, EvalMode::Inverted), 300.0 - 273.15);
        assert_eq!(eval_unit(&celsius, 0.0, EvalMode::Normal), 273.15);
        assert_eq!(eval_unit(&celsius, 300.0, EvalMode::Base), 1.0);
    }

    #[test]
    fn groups_fold_their_children() {
        test_tables::install();
        let tree = UnitNode::product(vec![
            UnitNode::identifier("m", METER),
            UnitNode::power(UnitNode::identifier("s", SECOND), UnitNode::scalar(-1.0)),
        ]);

        // m and s both evaluate to x in every identifier mode
        assert_eq!(eval_unit(&tree, 4.0, EvalMode::Inverted), 4.0 * 4.0f64.powf(-1.0));

        let sum = UnitNode::sum(vec![
            UnitNode::identifier("K", KELVIN),
            UnitNode::scalar(273.15),
        ]);
        assert_eq!(eval_unit(&sum, 10.0, EvalMode::Inverted), 10.0 + 273.15);
    }

    #[test]
    fn logarithmicity_propagates_structurally() {
        test_tables::install();
        let dbm = UnitNode::identifier("dBm", DBM);
        let meter = UnitNode::identifier("m", METER);

        assert!(is_unit_logarithmic(&dbm));
        assert!(!is_unit_logarithmic(&meter));
        assert!(!is_unit_logarithmic(&UnitNode::One));
        assert!(!is_unit_logarithmic(&UnitNode::Scalar(3.0)));

        let product = UnitNode::product(vec![meter.clone(), dbm.clone()]);
        assert!(is_unit_logarithmic(&product));

        let sum = UnitNode::sum(vec![meter.clone(), dbm.clone()]);
        assert!(is_unit_logarithmic(&sum));

        let power = UnitNode::power(meter.clone(), dbm.clone());
        assert!(is_unit_logarithmic(&power));

        let neg = UnitNode::neg(UnitNode::expression(dbm));
        assert!(is_unit_logarithmic(&neg));

        let multiplicative = UnitNode::product(vec![meter, UnitNode::scalar(1000.0)]);
        assert!(!is_unit_logarithmic(&multiplicative));
    }

    #[test]
    fn dimensionless_values_resolve_to_themselves() {
        test_tables::install();
        assert_eq!(resolve_scalar(42.0, &UnitNode::One), 42.0);
    }

    #[test]
    fn multiplicative_units_scale_the_value() {
        test_tables::install();
        let meter = UnitNode::identifier("m", METER);
        assert_eq!(resolve_scalar(3.0, &meter), 3.0);
    }

    #[test]
    fn logarithmic_units_use_the_ratio_directly() {
        test_tables::install();

        // 10^6 in the linear domain reads as 60 on the decibel scale
        let dbm = UnitNode::identifier("dBm", DBM);
        assert_eq!(resolve_scalar(1e6, &dbm), 60.0);

        // an affine temperature resolves to its display value
        let celsius = UnitNode::identifier("degC", CELSIUS);
        assert!((resolve_scalar(273.15, &celsius)).abs() < 1e-12);
    }

    #[test]
    fn scaled_logarithmic_values_keep_the_scale_in_the_ratio() {
        test_tables::install();

        // a dimensionless factor multiplies into both evaluation modes and
        // cancels out of the ratio
        let tree = UnitNode::product(vec![
            UnitNode::one(),
            UnitNode::identifier("dBm", DBM),
        ]);
        let resolved = resolve_scalar(2e6, &tree);
        assert!((resolved - (10.0 * 2e6f64.log10())).abs() < 1e-9);
    }
}
