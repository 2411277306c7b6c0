//! Evaluator tables standing in for compiler output in tests.
//!
//! Base units evaluate to the scalar itself in every mode. `degC` and
//! `degF` are affine over Kelvin, `dBm` is a decibel scale over milliwatts;
//! all three are logarithmic for conversion purposes and project to the
//! constant `1.0` in base mode, like the generated tables do for such
//! identifiers.

use std::sync::Once;

use numerobis_units::tables::{self, UnitTables};

pub const METER: u16 = 1;
pub const SECOND: u16 = 2;
pub const KELVIN: u16 = 4;
pub const CELSIUS: u16 = 5;
pub const FAHRENHEIT: u16 = 6;
pub const DBM: u16 = 7;

fn base(id: u16, x: f64) -> f64 {
    match id {
        METER | SECOND | KELVIN => x,
        _ => 1.0,
    }
}

fn inverted(id: u16, x: f64) -> f64 {
    match id {
        CELSIUS => x - 273.15,
        FAHRENHEIT => (x - 273.15) * 9.0 / 5.0 + 32.0,
        DBM => 10.0 * x.log10(),
        METER | SECOND | KELVIN => x,
        _ => 1.0,
    }
}

fn normal(id: u16, x: f64) -> f64 {
    match id {
        CELSIUS => x + 273.15,
        FAHRENHEIT => (x - 32.0) * 5.0 / 9.0 + 273.15,
        DBM => 10f64.powf(x / 10.0),
        METER | SECOND | KELVIN => x,
        _ => 1.0,
    }
}

fn logarithmic(id: u16) -> bool {
    matches!(id, CELSIUS | FAHRENHEIT | DBM)
}

/// Installs the test tables, once per test process.
pub fn install() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        tables::install(UnitTables {
            base,
            inverted,
            normal,
            logarithmic,
        });
    });
}
