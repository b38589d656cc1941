use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumString},
};

use crate::{config::Rub, utils::parse_api_timestamp};

/// Ledger operation kinds. The wire carries the lowercase code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TxKind {
    Deposit,
    Withdraw,
    Invest,
}

impl TxKind {
    pub fn label(&self) -> &'static str {
        match self {
            TxKind::Deposit => "Пополнение",
            TxKind::Withdraw => "Вывод",
            TxKind::Invest => "Инвестиция",
        }
    }

    /// Deposits add to the balance; everything else is shown as an outflow.
    pub fn sign(&self) -> char {
        match self {
            TxKind::Deposit => '+',
            _ => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Completed,
    Rejected,
}

impl TxStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TxStatus::Pending => "В обработке",
            TxStatus::Completed => "Выполнено",
            TxStatus::Rejected => "Отклонено",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Rub,
    pub status: String,
    #[serde(default)]
    pub comment: String,
    pub created_at: String,
}

impl Transaction {
    pub fn kind(&self) -> Option<TxKind> {
        self.kind.parse().ok()
    }

    pub fn status(&self) -> Option<TxStatus> {
        self.status.parse().ok()
    }

    /// Human label, or the raw code when the ledger sends something new.
    pub fn kind_label(&self) -> &str {
        self.kind().map_or(self.kind.as_str(), |k| k.label())
    }

    pub fn status_label(&self) -> &str {
        self.status().map_or(self.status.as_str(), |s| s.label())
    }

    /// Unknown kinds render as outflows, matching everything that is not a deposit.
    pub fn sign(&self) -> char {
        self.kind().map_or('-', |k| k.sign())
    }

    pub fn created_at(&self) -> Option<chrono::NaiveDateTime> {
        parse_api_timestamp(&self.created_at)
    }
}
