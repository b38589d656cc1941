//! Plain-text rendering of the calculator, cabinet and landing screens.

use {
    crate::{
        app::{LandingContent, Tab},
        config::{PERIODS, Rub, TARIFFS, WEEKEND_BONUS_PCT},
        domain::Selection,
        models::{Investment, Transaction, User, effective_daily_range, project_profit},
        ui::{
            format::format_ru,
            ui_text::{ICON_ARROW_RIGHT, ICON_DIAMOND, UI_TEXT},
        },
        utils::{format_ru_date, format_ru_datetime, local_now},
    },
    chrono::{Datelike, NaiveDateTime},
    itertools::iproduct,
    std::fmt::Write,
    strum::IntoEnumIterator,
    tabled::{builder::Builder, settings::Style},
};

const NO_DATE: &str = "—";

fn table(header: Vec<String>, rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header);
    for row in rows {
        builder.push_record(row);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn marker(selected: bool) -> String {
    if selected { ICON_ARROW_RIGHT.to_string() } else { String::new() }
}

/// Tariff packages with the current pick marked.
pub fn tariffs_table(selection: &Selection) -> String {
    let rows = TARIFFS
        .iter()
        .enumerate()
        .map(|(idx, tariff)| {
            vec![
                marker(idx == selection.tariff_idx()),
                idx.to_string(),
                tariff.name.to_string(),
                tariff.entry().to_string(),
                tariff.daily_rate.to_string(),
            ]
        })
        .collect();

    table(
        vec![
            String::new(),
            "#".to_string(),
            UI_TEXT.col_tariff.clone(),
            UI_TEXT.col_entry.clone(),
            UI_TEXT.col_rate.clone(),
        ],
        rows,
    )
}

pub fn periods_table(selection: &Selection) -> String {
    let rows = PERIODS
        .iter()
        .enumerate()
        .map(|(idx, period)| {
            let bonus = if period.has_bonus() {
                format!("+{}", period.bonus)
            } else {
                String::new()
            };
            vec![
                marker(idx == selection.period_idx()),
                idx.to_string(),
                period.label.to_string(),
                period.days.to_string(),
                bonus,
            ]
        })
        .collect();

    table(
        vec![
            String::new(),
            "#".to_string(),
            UI_TEXT.col_term.clone(),
            UI_TEXT.col_days.clone(),
            UI_TEXT.col_bonus.clone(),
        ],
        rows,
    )
}

/// The projection block: profit range, term and the effective daily rate.
pub fn calculator(selection: &Selection) -> String {
    let tariff = selection.tariff();
    let period = selection.period();
    let profit = selection.projected();

    let mut out = String::new();
    let _ = writeln!(out, "{} {}", ICON_DIAMOND, UI_TEXT.calc_heading);
    let _ = writeln!(out, "{} · {} · {}", tariff.name, tariff.entry(), period.label);
    let _ = writeln!(out, "{}", profit.describe());
    let _ = writeln!(
        out,
        "{} {} {}",
        UI_TEXT.calc_for_days_prefix, period.days, UI_TEXT.calc_for_days_suffix
    );
    let _ = writeln!(
        out,
        "{}: {}",
        UI_TEXT.col_rate,
        effective_daily_range(tariff, period)
    );
    let _ = write!(
        out,
        "{} {}%",
        UI_TEXT.calc_weekend_note,
        format_ru(WEEKEND_BONUS_PCT)
    );
    out
}

/// Every tariff/period pair with its projected range.
pub fn projection_grid() -> String {
    let rows = iproduct!(TARIFFS.iter(), PERIODS.iter())
        .map(|(tariff, period)| {
            vec![
                tariff.name.to_string(),
                period.label.to_string(),
                effective_daily_range(tariff, period).to_string(),
                project_profit(tariff, period).describe(),
            ]
        })
        .collect();

    table(
        vec![
            UI_TEXT.col_tariff.clone(),
            UI_TEXT.col_term.clone(),
            UI_TEXT.col_rate.clone(),
            UI_TEXT.col_yield.clone(),
        ],
        rows,
    )
}

/// Cabinet section headers with the open one bracketed.
pub fn tab_bar(active: Tab) -> String {
    Tab::iter()
        .map(|tab| {
            if tab == active {
                format!("[{}]", tab)
            } else {
                tab.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn balance_card(user: &User, balance: Rub) -> String {
    format!(
        "{} {} · {} · {}\n{}: {}",
        ICON_DIAMOND,
        UI_TEXT.brand,
        UI_TEXT.cabinet,
        user.display_name(),
        UI_TEXT.balance_label,
        balance
    )
}

/// Active investments only; falls back to the empty-state line.
pub fn overview<'a>(investments: impl IntoIterator<Item = &'a Investment>, now: NaiveDateTime) -> String {
    let rows: Vec<Vec<String>> = investments
        .into_iter()
        .filter(|inv| inv.is_active())
        .map(|inv| {
            let left = inv
                .days_left(now)
                .map(|days| format!("{} {}", days, UI_TEXT.unit_days_short))
                .unwrap_or_else(|| NO_DATE.to_string());
            let ends = inv
                .ends_at()
                .map(format_ru_date)
                .unwrap_or_else(|| NO_DATE.to_string());
            vec![
                inv.tariff_name.clone(),
                inv.amount.to_string(),
                inv.effective_range().to_string(),
                format!("{} {}", inv.period_days, UI_TEXT.unit_days),
                left,
                ends,
                UI_TEXT.label_active.clone(),
            ]
        })
        .collect();

    if rows.is_empty() {
        return format!("{}\n{}", UI_TEXT.overview_empty, UI_TEXT.overview_start);
    }

    let body = table(
        vec![
            UI_TEXT.col_tariff.clone(),
            UI_TEXT.col_amount.clone(),
            UI_TEXT.col_yield.clone(),
            UI_TEXT.col_term.clone(),
            UI_TEXT.col_left.clone(),
            UI_TEXT.col_ends.clone(),
            UI_TEXT.col_status.clone(),
        ],
        rows,
    );
    format!("{}\n{}", UI_TEXT.overview_heading, body)
}

pub fn history(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return UI_TEXT.history_empty.clone();
    }

    let rows = transactions
        .iter()
        .map(|tx| {
            vec![
                tx.kind_label().to_string(),
                tx.comment.clone(),
                format!("{}{}", tx.sign(), tx.amount),
                tx.status_label().to_string(),
                tx.created_at()
                    .map(format_ru_datetime)
                    .unwrap_or_else(|| tx.created_at.clone()),
            ]
        })
        .collect();

    let body = table(
        vec![
            UI_TEXT.col_operation.clone(),
            UI_TEXT.col_comment.clone(),
            UI_TEXT.col_amount.clone(),
            UI_TEXT.col_status.clone(),
            UI_TEXT.col_date.clone(),
        ],
        rows,
    );
    format!("{}\n{}", UI_TEXT.history_heading, body)
}

/// Landing page. The calculator sits between the service cards and the testimonial.
pub fn landing(content: &LandingContent, selection: &Selection) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", UI_TEXT.brand_tagline);
    let _ = writeln!(out, "{} {}", ICON_DIAMOND, UI_TEXT.brand);
    let _ = writeln!(out, "{}\n", content.hero_body);

    let _ = writeln!(out, "{}\n{}", content.philosophy.kicker, content.philosophy.title);
    for paragraph in content.philosophy_paragraphs {
        let _ = writeln!(out, "  {}", paragraph);
    }

    let _ = writeln!(out, "\n{}\n{}", content.services.kicker, content.services.title);
    for card in content.service_cards {
        let _ = writeln!(out, "  {} {}: {}", ICON_DIAMOND, card.title, card.body);
    }

    let _ = writeln!(out, "\n{}\n{}", UI_TEXT.calc_pick_tariff, tariffs_table(selection));
    let _ = writeln!(out, "{}\n{}", UI_TEXT.calc_pick_period, periods_table(selection));
    let _ = writeln!(out, "{}\n", calculator(selection));

    let t = &content.testimonial;
    let _ = writeln!(out, "«{}»\n  — {}, {}\n", t.quote, t.author, t.city);
    let _ = writeln!(out, "{}\n{}\n{}\n", content.cta.kicker, content.cta.title, content.cta_body);
    let _ = write!(
        out,
        "© {} {}. {}",
        local_now().year(),
        UI_TEXT.brand,
        content.footer
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::LANDING, config::DailyPct};
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn investment(status: &str) -> Investment {
        Investment {
            id: 1,
            tariff_name: "Стандарт".into(),
            amount: Rub::new(5000.0),
            min_daily: DailyPct::new(1.0),
            max_daily: DailyPct::new(2.0),
            bonus_percent: DailyPct::new(1.0),
            period_days: 28,
            started_at: Some("2025-03-01T12:00:00".into()),
            ends_at: Some("2025-03-29T12:00:00".into()),
            status: status.into(),
            accrued: Rub::ZERO,
        }
    }

    #[test]
    fn calculator_block_for_standard_28() {
        let text = calculator(&Selection::new(1, 1).unwrap());
        assert!(text.contains("2800 — 4200 ₽"));
        assert!(text.contains("за 28 дней"));
        assert!(text.contains("2% — 3%"));
        assert!(text.contains("0,5%"));
    }

    #[test]
    fn tables_mark_the_selection() {
        let selection = Selection::new(2, 0).unwrap();
        let tariffs = tariffs_table(&selection);
        let line = tariffs.lines().find(|l| l.contains("Премиум")).unwrap();
        assert!(line.contains(ICON_ARROW_RIGHT));
        assert!(!tariffs.lines().find(|l| l.contains("Старт")).unwrap().contains(ICON_ARROW_RIGHT));
        assert!(periods_table(&selection).contains("+2%"));
    }

    #[test]
    fn tab_bar_brackets_the_open_tab() {
        assert_eq!(
            tab_bar(Tab::History),
            "Обзор  Инвестировать  Пополнить  Вывести  [История]"
        );
    }

    #[test]
    fn grid_covers_every_pair() {
        let grid = projection_grid();
        assert!(grid.contains("14\u{a0}700 — 18\u{a0}900 ₽"));
        assert!(grid.contains("140 — 420 ₽"));
    }

    #[test]
    fn overview_lists_only_active_investments() {
        let investments = [investment("active"), investment("completed")];
        let text = overview(&investments, noon(2025, 3, 20));
        assert!(text.starts_with("Активные инвестиции"));
        assert_eq!(text.matches("Стандарт").count(), 1);
        assert!(text.contains("9 дн."));
        assert!(text.contains("29.03.2025"));
    }

    #[test]
    fn overview_empty_state() {
        let text = overview(&[investment("completed")], noon(2025, 3, 20));
        assert!(text.starts_with("У вас пока нет активных инвестиций"));
    }

    #[test]
    fn history_shows_sign_and_labels() {
        let txs: Vec<Transaction> = serde_json::from_value(serde_json::json!([
            {"id": 1, "type": "deposit", "amount": 10000, "status": "completed",
             "comment": "", "created_at": "2025-03-01T09:05:00"},
            {"id": 2, "type": "withdraw", "amount": 500, "status": "pending",
             "comment": "", "created_at": "2025-03-02T10:00:00"}
        ]))
        .unwrap();
        let text = history(&txs);
        assert!(text.contains("+10\u{a0}000 ₽"));
        assert!(text.contains("-500 ₽"));
        assert!(text.contains("Пополнение") && text.contains("Вывод"));
        assert!(text.contains("В обработке"));
        assert!(text.contains("01.03.2025, 09:05:00"));
        assert_eq!(history(&[]), "Операций пока нет");
    }

    #[test]
    fn landing_includes_calculator_and_cta() {
        let text = landing(&LANDING, &Selection::default());
        assert!(text.contains("ЗолотойКапитал"));
        assert!(text.contains("140 — 420 ₽"));
        assert!(text.contains("Запросить приглашение"));
        assert!(text.contains("Кураторское совершенство"));
        assert!(text.contains("— Уважаемый член клуба, Москва"));
        assert!(text.ends_with("ЗолотойКапитал. Все права защищены. Членство только по приглашению."));
    }
}
