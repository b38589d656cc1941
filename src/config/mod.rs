//! Configuration module for the client.

// Can all be private now because we have a public re-export.
mod api;
mod debug;
mod persistence;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use api::{API, AUTH_TOKEN_HEADER, ApiConfig, Endpoints};
pub use constants::{MS_IN_DAY, WEEKEND_BONUS_PCT, periods::PERIODS, tariffs::TARIFFS};
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use types::{DailyPct, Rub};
