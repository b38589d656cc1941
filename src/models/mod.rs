mod investment;
mod profit;
mod transaction;
mod user;

pub use {
    investment::{Investment, NewInvestment, STATUS_ACTIVE},
    profit::{ProjectedProfit, effective_daily_range, project_profit},
    transaction::{Transaction, TxKind, TxStatus},
    user::User,
};
