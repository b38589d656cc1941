//! Request and reply bodies of the remote services.

use serde::{Deserialize, Serialize};

use crate::{
    config::Rub,
    models::{Investment, Transaction, User},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositRequest {
    pub amount: Rub,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawRequest {
    pub amount: Rub,
    pub details: String,
}

/// `/register` and `/login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// `/me`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// `/list`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InvestmentList {
    #[serde(default)]
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub balance: Option<Rub>,
}

/// `/transactions`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionList {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// `/create`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Created {
    #[serde(default)]
    pub ok: bool,
    pub investment_id: Option<i64>,
}

/// `/logout`, `/deposit`, `/withdraw`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}
