mod time_utils;

pub use time_utils::{
    TimeUtils, days_left, format_ru_date, format_ru_datetime, local_now, parse_api_timestamp,
};
