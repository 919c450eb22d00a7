use super::aggregate::PromotionId;
use thiserror::Error;

/// Ошибки работы с акциями
///
/// Все ошибки восстановимые: форма редактирования остаётся открытой,
/// хранилище не изменяется.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromotionError {
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Promotion title must not be empty")]
    InvalidTitle,

    #[error("Invalid color token: {0}")]
    InvalidColor(String),

    #[error("Invalid axis label: {0}")]
    InvalidAxisLabel(String),

    #[error("Promotion not found: {0}")]
    NotFound(PromotionId),
}
