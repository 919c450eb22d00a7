use super::errors::PromotionError;
use serde::{Deserialize, Serialize};

/// Диапазон дней внутри одного месяца, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: u32,
    pub end: u32,
}

impl DateRange {
    pub fn contains(&self, day: u32) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Проверка и нормализация выбранных в форме дней
///
/// Порядок выбора дней в форме не несёт смысла: если начало позже конца,
/// границы меняются местами, а не отклоняются.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeValidator;

impl DateRangeValidator {
    pub fn validate(
        start: Option<u32>,
        end: Option<u32>,
        days_in_month: u32,
    ) -> Result<DateRange, PromotionError> {
        let (start, end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            (None, None) => {
                return Err(PromotionError::InvalidRange(
                    "start and end days are not set".into(),
                ))
            }
            (None, Some(_)) => {
                return Err(PromotionError::InvalidRange("start day is not set".into()))
            }
            (Some(_), None) => {
                return Err(PromotionError::InvalidRange("end day is not set".into()))
            }
        };

        for day in [start, end] {
            if day < 1 || day > days_in_month {
                return Err(PromotionError::InvalidRange(format!(
                    "day {} is outside 1..={}",
                    day, days_in_month
                )));
            }
        }

        if start > end {
            Ok(DateRange { start: end, end: start })
        } else {
            Ok(DateRange { start, end })
        }
    }

    /// Название обязательно; сохраняется без крайних пробелов
    pub fn validate_title(title: &str) -> Result<String, PromotionError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(PromotionError::InvalidTitle);
        }
        Ok(trimmed.to_string())
    }
}
