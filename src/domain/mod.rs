// Domain types and value objects
mod selection;
mod tariff;

// Re-export commonly used types to the world
pub use selection::Selection;
pub use tariff::{DailyRateRange, InvestmentPeriod, TariffTier};
