pub mod aggregate;
pub mod color;
pub mod date_range;
pub mod errors;

pub use aggregate::{Promotion, PromotionFields, PromotionId, PromotionScope, ValidPromotionFields};
pub use color::{PresetColor, PromotionColor, PRESET_COLORS};
pub use date_range::{DateRange, DateRangeValidator};
pub use errors::PromotionError;
