//! A small set of evaluator tables standing in for compiler output.
//!
//! Base units (`m`, `s`, `kg`, `K`) evaluate to the scalar itself in every
//! mode. `degC` is affine over Kelvin and `dBm` is a decibel scale over
//! milliwatts; both are logarithmic for conversion purposes, and their base
//! projection is the constant `1.0` the generated tables use for such
//! identifiers.

use std::sync::Once;

use crate::tables::{self, UnitTables};

pub const METER: u16 = 1;
pub const SECOND: u16 = 2;
pub const KILOGRAM: u16 = 3;
pub const KELVIN: u16 = 4;
pub const CELSIUS: u16 = 5;
pub const DBM: u16 = 7;

fn base(id: u16, x: f64) -> f64 {
    match id {
        CELSIUS | DBM => 1.0,
        METER | SECOND | KILOGRAM | KELVIN => x,
        _ => 1.0,
    }
}

fn inverted(id: u16, x: f64) -> f64 {
    match id {
        CELSIUS => x - 273.15,
        DBM => 10.0 * x.log10(),
        METER | SECOND | KILOGRAM | KELVIN => x,
        _ => 1.0,
    }
}

fn normal(id: u16, x: f64) -> f64 {
    match id {
        CELSIUS => x + 273.15,
        DBM => 10f64.powf(x / 10.0),
        METER | SECOND | KILOGRAM | KELVIN => x,
        _ => 1.0,
    }
}

fn logarithmic(id: u16) -> bool {
    matches!(id, CELSIUS | DBM)
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
