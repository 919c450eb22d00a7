use contracts::domain::a001_promotion::PromotionError;
use thiserror::Error;

/// Ошибки подтверждения формы акции
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Editor is closed")]
    NotDrafting,

    #[error("Start day, end day and title are required")]
    Incomplete,

    #[error(transparent)]
    Rejected(#[from] PromotionError),
}
