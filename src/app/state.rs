use strum_macros::{Display, EnumIter};

/// Sections of the personal cabinet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Default)]
pub enum Tab {
    #[default]
    #[strum(to_string = "Обзор")]
    Overview,
    #[strum(to_string = "Инвестировать")]
    Invest,
    #[strum(to_string = "Пополнить")]
    Deposit,
    #[strum(to_string = "Вывести")]
    Withdraw,
    #[strum(to_string = "История")]
    History,
}

/// Feedback line shown under a form after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Failure(text) => text,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
