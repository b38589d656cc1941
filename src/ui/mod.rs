mod format;
mod render;
mod ui_text;

pub use format::{RU_DECIMAL_SEPARATOR, RU_GROUP_SEPARATOR, format_ru};
pub use render::{
    balance_card, calculator, history, landing, overview, periods_table, projection_grid,
    tab_bar, tariffs_table,
};
pub use ui_text::{ICON_ARROW_RIGHT, ICON_DIAMOND, UI_TEXT, UiText};
