use serde::{Deserialize, Serialize};

use crate::config::Rub;

/// Profile returned by the auth service and cached in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub balance: Rub,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Full name when known, otherwise the email.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}
