//! Короткие подписи дней для списка акций и оси графика
//!
//! Подписи вида "Jan 2"; месяцы нумеруются с нуля.

use crate::domain::a001_promotion::PromotionError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month as usize).copied().unwrap_or("")
}

pub fn short_month_name(month: u32) -> &'static str {
    SHORT_MONTH_NAMES.get(month as usize).copied().unwrap_or("")
}

/// Пример: (0, 2) -> "Jan 2"
pub fn day_label(month: u32, day: u32) -> String {
    format!("{} {}", short_month_name(month), day)
}

/// Компактная подпись диапазона, для одного дня — только день
/// Пример: (0, 2, 3) -> "Jan 2-3", (0, 1, 1) -> "Jan 1"
pub fn range_label(month: u32, start: u32, end: u32) -> String {
    if start == end {
        day_label(month, start)
    } else {
        span_label(month, start, end)
    }
}

/// Подпись диапазона всегда с обеими границами
/// Пример: (0, 1, 1) -> "Jan 1-1"
pub fn span_label(month: u32, start: u32, end: u32) -> String {
    format!("{} {}-{}", short_month_name(month), start, end)
}

/// Разобрать "Jan 2" обратно в (месяц, день)
pub fn parse_day_label(label: &str) -> Result<(u32, u32), PromotionError> {
    let invalid = || PromotionError::InvalidAxisLabel(label.to_string());
    let (month_part, day_part) = label.trim().split_once(' ').ok_or_else(invalid)?;
    let month = SHORT_MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(month_part))
        .ok_or_else(invalid)? as u32;
    let day: u32 = day_part.trim().parse().map_err(|_| invalid())?;
    if day == 0 || day > 31 {
        return Err(invalid());
    }
    Ok((month, day))
}
