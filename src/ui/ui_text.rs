use std::sync::LazyLock;

pub const ICON_DIAMOND: &str = "◆";
pub const ICON_ARROW_RIGHT: &str = "→";

pub struct UiText {
    pub brand: String,
    pub brand_tagline: String,
    pub cabinet: String,

    // --- Balance card ---
    pub balance_label: String,

    // --- Calculator ---
    pub calc_pick_tariff: String,
    pub calc_pick_period: String,
    pub calc_heading: String,
    pub calc_for_days_prefix: String,
    pub calc_for_days_suffix: String,
    pub calc_weekend_note: String,

    // --- Overview ---
    pub overview_heading: String,
    pub overview_empty: String,
    pub overview_start: String,
    pub label_active: String,
    pub col_tariff: String,
    pub col_amount: String,
    pub col_yield: String,
    pub col_term: String,
    pub col_left: String,
    pub col_ends: String,
    pub col_entry: String,
    pub col_rate: String,
    pub col_days: String,
    pub col_bonus: String,

    // --- History ---
    pub history_heading: String,
    pub history_empty: String,
    pub col_operation: String,
    pub col_comment: String,
    pub col_date: String,
    pub col_status: String,

    // --- Deposit / Withdraw ---
    pub deposit_hint: String,
    pub withdraw_hint: String,
    pub withdraw_available: String,

    // --- Messages ---
    pub msg_enter_amount: String,
    pub msg_invest_success: String,
    pub msg_insufficient_prefix: String,
    pub msg_not_signed_in: String,
    pub msg_signed_out: String,
    pub msg_signed_in: String,
    pub label_admin: String,
    pub label_email: String,
    pub label_phone: String,
    pub msg_invite_email_required: String,
    pub invite_thanks_title: String,
    pub invite_thanks_body: String,

    pub unit_days: String,
    pub unit_days_short: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    brand: "ЗолотойКапитал".to_string(),
    brand_tagline: "С 2024 года".to_string(),
    cabinet: "Личный кабинет".to_string(),

    balance_label: "Баланс счёта".to_string(),

    calc_pick_tariff: "Выберите пакет".to_string(),
    calc_pick_period: "Выберите срок".to_string(),
    calc_heading: "Расчёт прибыли".to_string(),
    calc_for_days_prefix: "за".to_string(),
    calc_for_days_suffix: "дней".to_string(),
    calc_weekend_note: "В выходные дни доходность выше на".to_string(),

    overview_heading: "Активные инвестиции".to_string(),
    overview_empty: "У вас пока нет активных инвестиций".to_string(),
    overview_start: "Начать инвестировать".to_string(),
    label_active: "Активна".to_string(),
    col_tariff: "Пакет".to_string(),
    col_amount: "Сумма".to_string(),
    col_yield: "Доходность".to_string(),
    col_term: "Срок".to_string(),
    col_left: "Осталось".to_string(),
    col_ends: "Завершается".to_string(),
    col_entry: "Вход".to_string(),
    col_rate: "%/день".to_string(),
    col_days: "Дней".to_string(),
    col_bonus: "Бонус".to_string(),

    history_heading: "История операций".to_string(),
    history_empty: "Операций пока нет".to_string(),
    col_operation: "Операция".to_string(),
    col_comment: "Комментарий".to_string(),
    col_date: "Дата".to_string(),
    col_status: "Статус".to_string(),

    deposit_hint: "Введите сумму — мы свяжемся с вами для подтверждения платежа.".to_string(),
    withdraw_hint: "Вывод доступен по завершении инвестиционного периода.".to_string(),
    withdraw_available: "Доступно к выводу".to_string(),

    msg_enter_amount: "Введите сумму".to_string(),
    msg_invest_success: "Инвестиция успешно создана!".to_string(),
    msg_insufficient_prefix: "Недостаточно средств. Ваш баланс:".to_string(),
    msg_not_signed_in: "Не авторизован. Выполните вход: zolotoy-kapital login".to_string(),
    msg_signed_out: "Вы вышли из личного кабинета".to_string(),
    msg_signed_in: "Вход выполнен:".to_string(),
    label_admin: "администратор".to_string(),
    label_email: "Email".to_string(),
    label_phone: "Телефон".to_string(),
    msg_invite_email_required: "Введите ваш email".to_string(),
    invite_thanks_title: "Благодарим вас".to_string(),
    invite_thanks_body: "Ваша заявка получена. Мы свяжемся с вами в ближайшее время.".to_string(),

    unit_days: "дней".to_string(),
    unit_days_short: "дн.".to_string(),
});
