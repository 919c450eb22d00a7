pub mod repository;
pub mod service;

pub use repository::{PromotionRepository, PromotionStore};
pub use service::PromotionService;
