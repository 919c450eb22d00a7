pub mod delete_confirm;
pub mod draft;
pub mod editor;
pub mod errors;

pub use delete_confirm::DeleteConfirm;
pub use draft::{DraftForm, PickerDayState, PickerKind, PromotionDraft};
pub use editor::{EditorState, PointerTarget, PromotionEditor};
pub use errors::EditorError;
