use {
    anyhow::{Result, anyhow},
    itertools::iproduct,
    serde::Serialize,
    std::fmt::Write,
};

use crate::{
    AccountCommand, CabinetCommand, CalcArgs, Cli, Command, PublicCommand,
    app::{Dashboard, InviteForm, LANDING, Notice, Tab},
    config::{DailyPct, PERIODS, TARIFFS},
    data::{
        ApiClient, ApiReply, HttpTransport, Session, SessionStore, Transport,
        dto::{Credentials, Registration},
    },
    domain::{InvestmentPeriod, Selection, TariffTier},
    models::{ProjectedProfit, User, effective_daily_range, project_profit},
    ui::{self, UI_TEXT},
    utils::local_now,
};

/// Entry point behind the binary: public screens run offline, everything else goes through the
/// API client with the session file loaded before and saved after.
pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        auth_url,
        inv_url,
        session_file,
        command,
    } = cli;

    if let Command::Public(public) = command {
        println!("{}", render_public(&public)?);
        return Ok(());
    }

    let store = SessionStore::new(session_file);
    let transport = HttpTransport::new(&auth_url, &inv_url)?;
    let client = ApiClient::new(transport, store.load()?);

    let (session, output) = execute(client, command).await;
    settle(output, store.save(&session), |text| println!("{}", text))
}

/// Shows the command's output before reporting a failed session save. When the command itself
/// failed, its error wins and the save failure is only logged.
fn settle(output: Result<String>, saved: Result<()>, show: impl FnOnce(&str)) -> Result<()> {
    match output {
        Ok(text) => {
            show(&text);
            saved
        }
        Err(e) => {
            if let Err(save_err) = saved {
                log::error!("Session not saved: {:#}", save_err);
            }
            Err(e)
        }
    }
}

/// Runs a networked command. The session is handed back even when the command fails so the
/// caller can persist whatever state the client ended up in.
pub async fn execute<T: Transport>(
    mut client: ApiClient<T>,
    command: Command,
) -> (Session, Result<String>) {
    match command {
        Command::Public(public) => (client.into_session(), render_public(&public)),
        Command::Account(account) => {
            let output = run_account(&mut client, account).await;
            (client.into_session(), output)
        }
        Command::Cabinet(cabinet) => {
            let mut dash = match Dashboard::open(client) {
                Ok(dash) => dash,
                Err(e) => return (Session::default(), Err(e)),
            };
            let output = run_cabinet(&mut dash, cabinet).await;
            (dash.into_client().into_session(), output)
        }
    }
}

#[derive(Serialize)]
struct Projection {
    tariff: &'static str,
    entry_amount: u64,
    period_days: u32,
    bonus_percent: DailyPct,
    min_daily: DailyPct,
    max_daily: DailyPct,
    #[serde(flatten)]
    profit: ProjectedProfit,
}

impl Projection {
    fn of(tariff: &'static TariffTier, period: &'static InvestmentPeriod) -> Self {
        let range = effective_daily_range(tariff, period);
        Self {
            tariff: tariff.name,
            entry_amount: tariff.entry_amount,
            period_days: period.days,
            bonus_percent: period.bonus,
            min_daily: range.min,
            max_daily: range.max,
            profit: project_profit(tariff, period),
        }
    }
}

fn selection_from(tariff: Option<usize>, period: Option<usize>) -> Result<Selection> {
    let mut selection = Selection::default();
    if let Some(idx) = tariff {
        selection.select_tariff(idx)?;
    }
    if let Some(idx) = period {
        selection.select_period(idx)?;
    }
    Ok(selection)
}

pub fn render_public(command: &PublicCommand) -> Result<String> {
    match command {
        PublicCommand::Landing => Ok(ui::landing(&LANDING, &Selection::default())),
        PublicCommand::Invite { email } => notice_result(InviteForm::default().submit(email)),
        PublicCommand::Tariffs => {
            let selection = Selection::default();
            Ok(format!(
                "{}\n{}\n{}\n{}",
                UI_TEXT.calc_pick_tariff,
                ui::tariffs_table(&selection),
                UI_TEXT.calc_pick_period,
                ui::periods_table(&selection)
            ))
        }
        PublicCommand::Calc(args) => render_calc(args),
    }
}

fn render_calc(args: &CalcArgs) -> Result<String> {
    if args.all {
        if args.json {
            let grid: Vec<Projection> = iproduct!(TARIFFS.iter(), PERIODS.iter())
                .map(|(tariff, period)| Projection::of(tariff, period))
                .collect();
            return Ok(serde_json::to_string_pretty(&grid)?);
        }
        return Ok(ui::projection_grid());
    }

    let selection = selection_from(args.tariff, args.period)?;
    if args.json {
        let projection = Projection::of(selection.tariff(), selection.period());
        return Ok(serde_json::to_string_pretty(&projection)?);
    }
    Ok(ui::calculator(&selection))
}

fn notice_result(notice: Notice) -> Result<String> {
    match notice {
        Notice::Success(text) => Ok(text),
        Notice::Failure(text) => Err(anyhow!(text)),
    }
}

fn signed_in_line(user: &User) -> String {
    let mut line = format!("{} {}", UI_TEXT.msg_signed_in, user.display_name());
    if user.is_admin {
        let _ = write!(line, " ({})", UI_TEXT.label_admin);
    }
    line
}

async fn run_account<T: Transport>(
    client: &mut ApiClient<T>,
    command: AccountCommand,
) -> Result<String> {
    match command {
        AccountCommand::Register {
            email,
            password,
            full_name,
            phone,
        } => {
            let form = Registration {
                email,
                password,
                full_name,
                phone,
            };
            let user = client.register(&form).await?.into_result()?;
            Ok(signed_in_line(&user))
        }
        AccountCommand::Login { email, password } => {
            let user = client
                .login(&Credentials { email, password })
                .await?
                .into_result()?;
            Ok(signed_in_line(&user))
        }
        AccountCommand::Logout => {
            if let Err(e) = client.logout().await {
                log::warn!("Logout request failed: {:#}", e);
            }
            Ok(UI_TEXT.msg_signed_out.clone())
        }
        AccountCommand::Me => {
            if !client.session().is_authenticated() {
                return Err(anyhow!(UI_TEXT.msg_not_signed_in.clone()));
            }
            let user = match client.me().await? {
                ApiReply::Ok(user) => user,
                ApiReply::Error(msg) => return Err(anyhow!(msg)),
            };
            client.session_mut().user = Some(user.clone());

            let mut out = ui::balance_card(&user, user.balance);
            let _ = write!(out, "\n{}: {}", UI_TEXT.label_email, user.email);
            if let Some(phone) = user.phone.as_deref() {
                let _ = write!(out, "\n{}: {}", UI_TEXT.label_phone, phone);
            }
            Ok(out)
        }
    }
}

async fn run_cabinet<T: Transport>(
    dash: &mut Dashboard<T>,
    command: CabinetCommand,
) -> Result<String> {
    dash.load_data().await?;
    let user = dash
        .client()
        .session()
        .user
        .clone()
        .ok_or_else(|| anyhow!(UI_TEXT.msg_not_signed_in.clone()))?;

    let (tab, body) = match command {
        CabinetCommand::Overview => (Tab::Overview, ui::overview(&dash.investments, local_now())),
        CabinetCommand::Invest { tariff, period } => {
            dash.selection = selection_from(tariff, period)?;
            let notice = notice_result(dash.invest().await?)?;
            (Tab::Invest, format!("{}\n{}", ui::calculator(&dash.selection), notice))
        }
        CabinetCommand::Deposit { amount } => {
            let notice = notice_result(dash.deposit(&amount).await?)?;
            (Tab::Deposit, format!("{}\n{}", UI_TEXT.deposit_hint, notice))
        }
        CabinetCommand::Withdraw { amount, details } => {
            let notice = notice_result(dash.withdraw(&amount, &details).await?)?;
            (
                Tab::Withdraw,
                format!(
                    "{}\n{}: {}\n{}",
                    UI_TEXT.withdraw_hint, UI_TEXT.withdraw_available, dash.balance, notice
                ),
            )
        }
        CabinetCommand::History => (Tab::History, ui::history(&dash.transactions)),
    };

    Ok(format!(
        "{}\n{}\n\n{}",
        ui::balance_card(&user, dash.balance),
        ui::tab_bar(tab),
        body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Rub, data::FakeTransport};
    use serde_json::json;

    fn user_json(balance: f64) -> serde_json::Value {
        json!({"id": 3, "email": "oleg@mail.ru", "full_name": "Олег", "balance": balance, "is_admin": false})
    }

    fn signed_in(transport: FakeTransport, balance: f64) -> ApiClient<FakeTransport> {
        let user = serde_json::from_value(user_json(balance)).unwrap();
        ApiClient::new(transport, Session::new("tok".into(), user))
    }

    fn calc(tariff: Option<usize>, period: Option<usize>, all: bool, json: bool) -> Result<String> {
        render_public(&PublicCommand::Calc(CalcArgs {
            tariff,
            period,
            all,
            json,
        }))
    }

    #[test]
    fn calc_defaults_to_recommended_pair() {
        let text = calc(None, None, false, false).unwrap();
        assert!(text.contains("Старт"));
        assert!(text.contains("140 — 420 ₽"));
    }

    #[test]
    fn calc_json_carries_unrounded_profit() {
        let text = calc(Some(1), Some(1), false, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["tariff"], "Стандарт");
        assert_eq!(value["period_days"], 28);
        assert!((value["min_profit"].as_f64().unwrap() - 2800.0).abs() < 1e-6);
        assert!((value["max_profit"].as_f64().unwrap() - 4200.0).abs() < 1e-6);
    }

    #[test]
    fn calc_all_json_lists_nine_pairs() {
        let text = calc(None, None, true, true).unwrap();
        let value: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(value.len(), TARIFFS.len() * PERIODS.len());
    }

    #[test]
    fn calc_rejects_unknown_index() {
        assert!(calc(Some(7), None, false, false).is_err());
    }

    #[test]
    fn invite_without_email_is_an_error() {
        let err = render_public(&PublicCommand::Invite { email: "".into() }).unwrap_err();
        assert_eq!(err.to_string(), "Введите ваш email");
    }

    #[test]
    fn command_error_is_not_hidden_by_failed_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("missing").join("session.json"));
        let user = serde_json::from_value(user_json(0.0)).unwrap();
        let saved = store.save(&Session::new("tok".into(), user));
        assert!(saved.is_err());

        let err = settle(Err(anyhow!("Введите сумму")), saved, |_| {}).unwrap_err();
        assert_eq!(err.to_string(), "Введите сумму");
    }

    #[test]
    fn output_is_shown_before_save_failure_is_reported() {
        let mut shown = String::new();
        let result = settle(Ok("Вход выполнен: Олег".into()), Err(anyhow!("disk full")), |text| {
            shown = text.to_string()
        });
        assert_eq!(shown, "Вход выполнен: Олег");
        assert_eq!(result.unwrap_err().to_string(), "disk full");
    }

    #[tokio::test]
    async fn login_returns_session_to_persist() {
        let transport = FakeTransport::default()
            .reply("/login", json!({"token": "t1", "user": user_json(0.0)}));
        let client = ApiClient::new(transport, Session::default());

        let (session, output) = execute(
            client,
            Command::Account(AccountCommand::Login {
                email: "oleg@mail.ru".into(),
                password: "pw".into(),
            }),
        )
        .await;

        assert_eq!(output.unwrap(), "Вход выполнен: Олег");
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn logout_clears_even_when_service_is_down() {
        let transport = FakeTransport::default().reply_raw("/logout", "502 Bad Gateway");
        let (session, output) =
            execute(signed_in(transport, 0.0), Command::Account(AccountCommand::Logout)).await;

        assert!(output.is_ok());
        assert_eq!(session, Session::default());
    }

    #[tokio::test]
    async fn cabinet_requires_session() {
        let client = ApiClient::new(FakeTransport::default(), Session::default());
        let (session, output) = execute(client, Command::Cabinet(CabinetCommand::History)).await;
        assert!(output.is_err());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn overview_shows_balance_from_ledger() {
        let transport = FakeTransport::default()
            .reply("/list", json!({"investments": [], "balance": 12500}))
            .reply("/transactions", json!({"transactions": []}));

        let (session, output) =
            execute(signed_in(transport, 0.0), Command::Cabinet(CabinetCommand::Overview)).await;

        let text = output.unwrap();
        assert!(text.contains("12\u{a0}500 ₽"));
        assert!(text.contains("[Обзор]"));
        assert!(text.contains("У вас пока нет активных инвестиций"));
        assert_eq!(session.user.unwrap().balance, Rub::new(12500.0));
    }

    #[tokio::test]
    async fn deposit_failure_keeps_session() {
        let transport = FakeTransport::default()
            .reply("/list", json!({"investments": []}))
            .reply("/transactions", json!({"transactions": []}));

        let (session, output) = execute(
            signed_in(transport, 100.0),
            Command::Cabinet(CabinetCommand::Deposit { amount: "abc".into() }),
        )
        .await;

        assert_eq!(output.unwrap_err().to_string(), "Введите сумму");
        assert!(session.is_authenticated());
    }
}
