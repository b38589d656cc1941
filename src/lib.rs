// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::run;
pub use config::{API, PERSISTENCE};
pub use domain::Selection;
pub use models::{ProjectedProfit, project_profit};

// CLI argument parsing
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the auth service
    #[arg(long, env = "ZK_AUTH_URL", default_value = API.endpoints.auth_url)]
    pub auth_url: String,

    /// Base URL of the investment ledger service
    #[arg(long, env = "ZK_INV_URL", default_value = API.endpoints.inv_url)]
    pub inv_url: String,

    /// Where the session token and cached profile are kept between runs
    #[arg(long, env = "ZK_SESSION_FILE", default_value = PERSISTENCE.session.path)]
    pub session_file: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    #[command(flatten)]
    Public(PublicCommand),
    #[command(flatten)]
    Account(AccountCommand),
    #[command(flatten)]
    Cabinet(CabinetCommand),
}

/// Screens that need no network access.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum PublicCommand {
    /// Landing page with the profit calculator
    Landing,
    /// Request an invitation
    Invite { email: String },
    /// Tariff and period tables
    Tariffs,
    /// Project the profit of a tariff/period pair
    Calc(CalcArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CalcArgs {
    /// Tariff index (see `tariffs`)
    #[arg(long)]
    pub tariff: Option<usize>,
    /// Period index (see `tariffs`)
    #[arg(long)]
    pub period: Option<usize>,
    /// Every tariff/period pair
    #[arg(long, default_value_t = false, conflicts_with_all = ["tariff", "period"])]
    pub all: bool,
    /// Print JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum AccountCommand {
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ZK_PASSWORD")]
        password: String,
        #[arg(long)]
        full_name: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ZK_PASSWORD")]
        password: String,
    },
    Logout,
    /// Current profile
    Me,
}

/// Personal cabinet actions. All require a signed-in session.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CabinetCommand {
    /// Balance and active investments
    Overview,
    /// Open an investment
    Invest {
        #[arg(long)]
        tariff: Option<usize>,
        #[arg(long)]
        period: Option<usize>,
    },
    /// Request a top-up
    Deposit { amount: String },
    /// Request a payout
    Withdraw {
        amount: String,
        /// Card or account number for the payout
        #[arg(long, default_value = "")]
        details: String,
    },
    /// Transaction history
    History,
}
