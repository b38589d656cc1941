use crate::config::{DailyPct, Rub};

/// Inclusive bounds on the advertised daily return of a tariff. `min <= max` in every table row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRateRange {
    pub min: DailyPct,
    pub max: DailyPct,
}

impl DailyRateRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min: DailyPct::new(min),
            max: DailyPct::new(max),
        }
    }

    /// Shift both bounds by the same number of percentage points.
    pub fn shifted(self, bonus: DailyPct) -> Self {
        Self {
            min: self.min + bonus,
            max: self.max + bonus,
        }
    }
}

impl std::fmt::Display for DailyRateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {}", self.min, self.max)
    }
}

/// A named investment package: the principal it takes and the daily return it advertises.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TariffTier {
    pub name: &'static str,
    pub entry_amount: u64,
    pub daily_rate: DailyRateRange,
}

impl TariffTier {
    pub fn entry(&self) -> Rub {
        Rub::from(self.entry_amount)
    }
}

/// A selectable investment duration and the bonus it adds to the daily rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentPeriod {
    pub days: u32,
    pub bonus: DailyPct,
    /// Flat weekend uplift quoted in the landing copy. Not part of the profit projection.
    pub weekend_bonus: DailyPct,
    pub label: &'static str,
}

impl InvestmentPeriod {
    pub fn has_bonus(&self) -> bool {
        self.bonus.is_positive()
    }
}
