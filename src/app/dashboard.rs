use {
    crate::{
        app::state::Notice,
        config::Rub,
        data::{ApiClient, ApiReply, Transport},
        domain::Selection,
        models::{Investment, NewInvestment, Transaction},
        ui::{UI_TEXT, format_ru},
    },
    anyhow::{Result, bail},
};

/// State behind the personal cabinet: cached ledger data plus the calculator selection.
pub struct Dashboard<T: Transport> {
    client: ApiClient<T>,
    pub balance: Rub,
    pub investments: Vec<Investment>,
    pub transactions: Vec<Transaction>,
    pub selection: Selection,
}

impl<T: Transport> Dashboard<T> {
    /// Refuses to open without a signed-in session.
    pub fn open(client: ApiClient<T>) -> Result<Self> {
        let Some(user) = client.session().user.as_ref().filter(|_| client.session().is_authenticated())
        else {
            bail!("{}", UI_TEXT.msg_not_signed_in);
        };
        let balance = user.balance;

        Ok(Self {
            client,
            balance,
            investments: Vec::new(),
            transactions: Vec::new(),
            selection: Selection::default(),
        })
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn into_client(self) -> ApiClient<T> {
        self.client
    }

    /// Fetch investments and history together. Remote errors leave the cached lists as they were.
    pub async fn load_data(&mut self) -> Result<()> {
        let (investments, transactions) =
            tokio::join!(self.client.investments(), self.client.transactions());

        match investments? {
            ApiReply::Ok(list) => {
                self.investments = list.investments;
                if let Some(balance) = list.balance {
                    self.balance = balance;
                    self.client.session_mut().update_balance(balance);
                }
            }
            ApiReply::Error(msg) => log::warn!("Investments not loaded: {}", msg),
        }

        match transactions? {
            ApiReply::Ok(list) => self.transactions = list,
            ApiReply::Error(msg) => log::warn!("Transactions not loaded: {}", msg),
        }

        Ok(())
    }

    /// The ledger already accepted the change, so a failed refresh only leaves stale lists.
    async fn reload_after_change(&mut self) {
        if let Err(e) = self.load_data().await {
            log::warn!("Reload after ledger change failed: {:#}", e);
        }
    }

    pub fn active_investments(&self) -> impl Iterator<Item = &Investment> {
        self.investments.iter().filter(|inv| inv.is_active())
    }

    pub fn can_afford_selection(&self) -> bool {
        self.balance >= self.selection.tariff().entry()
    }

    fn insufficient_funds(&self) -> Notice {
        Notice::Failure(format!(
            "{} {} ₽.",
            UI_TEXT.msg_insufficient_prefix,
            format_ru(self.balance.value())
        ))
    }

    /// Open an investment for the selected tariff and period.
    pub async fn invest(&mut self) -> Result<Notice> {
        if !self.can_afford_selection() {
            return Ok(self.insufficient_funds());
        }

        let request = NewInvestment::from_selection(self.selection.tariff(), self.selection.period());
        match self.client.create_investment(&request).await? {
            ApiReply::Ok(created) => {
                log::info!("Investment #{:?} created", created.investment_id);
                self.reload_after_change().await;
                Ok(Notice::Success(UI_TEXT.msg_invest_success.clone()))
            }
            ApiReply::Error(msg) => Ok(Notice::Failure(msg)),
        }
    }

    /// File a top-up request. `amount` is the raw form input.
    pub async fn deposit(&mut self, amount: &str) -> Result<Notice> {
        let Some(amount) = parse_amount(amount) else {
            return Ok(Notice::Failure(UI_TEXT.msg_enter_amount.clone()));
        };

        Ok(match self.client.deposit(amount).await? {
            ApiReply::Ok(ack) => Notice::Success(ack.message.unwrap_or_default()),
            ApiReply::Error(msg) => Notice::Failure(msg),
        })
    }

    /// File a payout request. Reloads the ledger data when the request is accepted.
    pub async fn withdraw(&mut self, amount: &str, details: &str) -> Result<Notice> {
        if !self.balance.is_positive() {
            return Ok(self.insufficient_funds());
        }
        let Some(amount) = parse_amount(amount) else {
            return Ok(Notice::Failure(UI_TEXT.msg_enter_amount.clone()));
        };

        match self.client.withdraw(amount, details).await? {
            ApiReply::Ok(ack) => {
                self.reload_after_change().await;
                Ok(Notice::Success(ack.message.unwrap_or_default()))
            }
            ApiReply::Error(msg) => Ok(Notice::Failure(msg)),
        }
    }
}

/// Positive amount from form input; accepts a comma as decimal separator.
pub fn parse_amount(input: &str) -> Option<Rub> {
    let amount: f64 = input.trim().replace(',', ".").parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(Rub::new(amount))
}
