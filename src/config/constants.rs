// Top Level Constants

/// Weekend uplift advertised on the landing page, in percentage points per day.
pub const WEEKEND_BONUS_PCT: f64 = 0.5;

pub const MS_IN_DAY: i64 = 86_400_000;

pub mod tariffs {
    use crate::domain::{DailyRateRange, TariffTier};

    pub const TARIFFS: &[TariffTier] = &[
        TariffTier {
            name: "Старт",
            entry_amount: 2000,
            daily_rate: DailyRateRange::new(0.5, 1.5),
        },
        TariffTier {
            name: "Стандарт",
            entry_amount: 5000,
            daily_rate: DailyRateRange::new(1.0, 2.0),
        },
        TariffTier {
            name: "Премиум",
            entry_amount: 10000,
            daily_rate: DailyRateRange::new(1.5, 2.5),
        },
    ];

    /// Index into `TARIFFS` pre-selected when the calculator opens.
    pub const RECOMMENDED: usize = 0;
}

pub mod periods {
    use super::WEEKEND_BONUS_PCT;
    use crate::config::DailyPct;
    use crate::domain::InvestmentPeriod;

    const WEEKEND: DailyPct = DailyPct::new(WEEKEND_BONUS_PCT);

    pub const PERIODS: &[InvestmentPeriod] = &[
        InvestmentPeriod {
            days: 14,
            bonus: DailyPct::new(0.0),
            weekend_bonus: WEEKEND,
            label: "14 дней",
        },
        InvestmentPeriod {
            days: 28,
            bonus: DailyPct::new(1.0),
            weekend_bonus: WEEKEND,
            label: "28 дней (+1%)",
        },
        InvestmentPeriod {
            days: 42,
            bonus: DailyPct::new(2.0),
            weekend_bonus: WEEKEND,
            label: "42 дня (+2%)",
        },
    ];

    /// Index into `PERIODS` pre-selected when the calculator opens.
    pub const RECOMMENDED: usize = 0;
}
