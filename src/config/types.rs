//! Value types shared by the tariff tables, the calculator and the API payloads.

use serde::{Deserialize, Serialize};
use std::ops::Add;

use crate::ui::format_ru;

/// A daily return expressed in percentage points (1.5 means 1.5% per day).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DailyPct(f64);

impl DailyPct {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// The same rate as a plain fraction (1.5% -> 0.015).
    #[inline]
    pub fn as_fraction(self) -> f64 {
        self.0 / 100.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl Add for DailyPct {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::fmt::Display for DailyPct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", format_ru(self.0))
    }
}

/// An amount of roubles. Balances and profits carry fractions; entry amounts are whole.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Rub(f64);

impl Rub {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// Whole-rouble rounding used only when an amount is shown to the user.
    pub fn rounded(self) -> Self {
        Self(self.0.round())
    }
}

impl From<u64> for Rub {
    fn from(amount: u64) -> Self {
        Self(amount as f64)
    }
}

impl std::fmt::Display for Rub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ₽", format_ru(self.0))
    }
}
