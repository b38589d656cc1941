use serde::Serialize;

use crate::{
    config::Rub,
    domain::{DailyRateRange, InvestmentPeriod, TariffTier},
    ui::format_ru,
};

/// Projected absolute return over a whole period. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedProfit {
    pub min_profit: f64,
    pub max_profit: f64,
}

impl ProjectedProfit {
    /// Whole-rouble values for display. The unrounded fields stay untouched.
    pub fn rounded(&self) -> (Rub, Rub) {
        (
            Rub::new(self.min_profit).rounded(),
            Rub::new(self.max_profit).rounded(),
        )
    }

    /// e.g. `2800 — 4200 ₽`
    pub fn describe(&self) -> String {
        let (min, max) = self.rounded();
        format!("{} — {} ₽", format_ru(min.value()), format_ru(max.value()))
    }
}

/// Daily rate range once the period bonus is stacked on the tariff's own range.
pub fn effective_daily_range(tariff: &TariffTier, period: &InvestmentPeriod) -> DailyRateRange {
    tariff.daily_rate.shifted(period.bonus)
}

/// Profit range for holding `tariff` for the whole of `period`.
///
/// `(rate + bonus) / 100 * entry_amount * days` at both ends of the range. Only the period's
/// flat bonus is stacked; the advertised weekend uplift is not counted. Pure and total over the
/// static tables.
pub fn project_profit(tariff: &TariffTier, period: &InvestmentPeriod) -> ProjectedProfit {
    let rate = effective_daily_range(tariff, period);
    let principal = tariff.entry_amount as f64;
    let days = period.days as f64;

    ProjectedProfit {
        min_profit: rate.min.as_fraction() * principal * days,
        max_profit: rate.max.as_fraction() * principal * days,
    }
}
