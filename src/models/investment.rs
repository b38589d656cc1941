use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    config::{DailyPct, Rub},
    domain::{DailyRateRange, InvestmentPeriod, TariffTier},
    utils::{days_left, parse_api_timestamp},
};

pub const STATUS_ACTIVE: &str = "active";

/// An investment as recorded by the ledger service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: i64,
    pub tariff_name: String,
    pub amount: Rub,
    pub min_daily: DailyPct,
    pub max_daily: DailyPct,
    pub bonus_percent: DailyPct,
    pub period_days: u32,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
    pub status: String,
    #[serde(default)]
    pub accrued: Rub,
}

impl Investment {
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    /// Daily rate with the period bonus already stacked, as shown on the overview card.
    pub fn effective_range(&self) -> DailyRateRange {
        DailyRateRange {
            min: self.min_daily,
            max: self.max_daily,
        }
        .shifted(self.bonus_percent)
    }

    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.ends_at.as_deref().and_then(parse_api_timestamp)
    }

    /// Whole days until the term ends, never negative. `None` when the ledger sent no end date.
    pub fn days_left(&self, now: NaiveDateTime) -> Option<i64> {
        self.ends_at().map(|ends| days_left(ends, now))
    }
}

/// Body of `POST /create`: everything the ledger needs to open an investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvestment {
    pub tariff_name: String,
    pub amount: Rub,
    pub min_daily: DailyPct,
    pub max_daily: DailyPct,
    pub bonus_percent: DailyPct,
    pub period_days: u32,
}

impl NewInvestment {
    pub fn from_selection(tariff: &TariffTier, period: &InvestmentPeriod) -> Self {
        Self {
            tariff_name: tariff.name.to_string(),
            amount: tariff.entry(),
            min_daily: tariff.daily_rate.min,
            max_daily: tariff.daily_rate.max,
            bonus_percent: period.bonus,
            period_days: period.days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PERIODS, TARIFFS};
    use chrono::NaiveDate;

    fn sample() -> Investment {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "tariff_name": "Премиум",
            "amount": 10000.0,
            "min_daily": 1.5,
            "max_daily": 2.5,
            "bonus_percent": 2.0,
            "period_days": 42,
            "started_at": "2025-03-01T10:00:00.123456",
            "ends_at": "2025-04-12T10:00:00.123456",
            "status": "active",
            "accrued": 0.0
        }))
        .unwrap()
    }

    #[test]
    fn decodes_ledger_record() {
        let inv = sample();
        assert!(inv.is_active());
        assert_eq!(inv.amount, Rub::new(10000.0));
        assert_eq!(inv.effective_range().min.value(), 3.5);
        assert_eq!(inv.effective_range().max.value(), 4.5);
    }

    #[test]
    fn days_left_rounds_up_and_floors_at_zero() {
        let inv = sample();
        let now = NaiveDate::from_ymd_opt(2025, 4, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(inv.days_left(now), Some(2));

        let later = NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(inv.days_left(later), Some(0));
    }

    #[test]
    fn missing_end_date_has_no_countdown() {
        let mut inv = sample();
        inv.ends_at = None;
        assert_eq!(inv.days_left(NaiveDateTime::default()), None);
    }

    #[test]
    fn create_request_mirrors_the_selection() {
        let req = NewInvestment::from_selection(&TARIFFS[1], &PERIODS[1]);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "tariff_name": "Стандарт",
                "amount": 5000.0,
                "min_daily": 1.0,
                "max_daily": 2.0,
                "bonus_percent": 1.0,
                "period_days": 28
            })
        );
    }
}
