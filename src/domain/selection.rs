use anyhow::{Result, bail};

use crate::{
    config::{PERIODS, TARIFFS, constants},
    domain::{InvestmentPeriod, TariffTier},
    models::{ProjectedProfit, project_profit},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// The tariff/period pair currently picked in the calculator.
/// Both indices always point into the static tables, so exactly one of each is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    tariff_idx: usize,
    period_idx: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            tariff_idx: constants::tariffs::RECOMMENDED,
            period_idx: constants::periods::RECOMMENDED,
        }
    }
}

impl Selection {
    pub fn new(tariff_idx: usize, period_idx: usize) -> Result<Self> {
        let mut selection = Self::default();
        selection.select_tariff(tariff_idx)?;
        selection.select_period(period_idx)?;
        Ok(selection)
    }

    pub fn select_tariff(&mut self, idx: usize) -> Result<()> {
        if idx >= TARIFFS.len() {
            bail!("no tariff #{} (choose 0..{})", idx, TARIFFS.len() - 1);
        }
        self.tariff_idx = idx;

        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Selected tariff {} ({})", idx, TARIFFS[idx].name);
        }
        Ok(())
    }

    pub fn select_period(&mut self, idx: usize) -> Result<()> {
        if idx >= PERIODS.len() {
            bail!("no period #{} (choose 0..{})", idx, PERIODS.len() - 1);
        }
        self.period_idx = idx;

        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Selected period {} ({} days)", idx, PERIODS[idx].days);
        }
        Ok(())
    }

    pub fn tariff_idx(&self) -> usize {
        self.tariff_idx
    }

    pub fn period_idx(&self) -> usize {
        self.period_idx
    }

    pub fn tariff(&self) -> &'static TariffTier {
        &TARIFFS[self.tariff_idx]
    }

    pub fn period(&self) -> &'static InvestmentPeriod {
        &PERIODS[self.period_idx]
    }

    /// Recomputed from scratch on every call: never stale relative to the selection.
    pub fn projected(&self) -> ProjectedProfit {
        project_profit(self.tariff(), self.period())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_the_recommended_pair() {
        let selection = Selection::default();
        assert_eq!(selection.tariff().name, "Старт");
        assert_eq!(selection.period().days, 14);
    }

    #[test]
    fn out_of_range_index_is_rejected_and_keeps_previous_choice() {
        let mut selection = Selection::new(1, 1).unwrap();
        assert!(selection.select_tariff(TARIFFS.len()).is_err());
        assert!(selection.select_period(99).is_err());
        assert_eq!(selection.tariff_idx(), 1);
        assert_eq!(selection.period_idx(), 1);
    }

    #[test]
    fn projection_follows_the_latest_selection_only() {
        let mut selection = Selection::new(2, 2).unwrap();
        let premium = selection.projected();
        selection.select_tariff(1).unwrap();
        selection.select_period(1).unwrap();
        let standard = selection.projected();

        assert_eq!(premium.min_profit.round(), 14700.0);
        assert_eq!(standard.min_profit.round(), 2800.0);
        assert_eq!(standard.max_profit.round(), 4200.0);
    }
}
