use crate::domain::a001_promotion::{PromotionRepository, PromotionService};
use anyhow::Context;
use contracts::domain::a001_promotion::PromotionFields;

/// Демонстрационные акции дашборда (январь 2026)
const DEMO_PROMOTIONS_JSON: &str = r##"[
    {
        "year": 2026,
        "month": 0,
        "startDate": 1,
        "endDate": 1,
        "title": "New Year Sale",
        "product": "Water Sleeping Mask",
        "color": "#FF6B6B"
    },
    {
        "year": 2026,
        "month": 0,
        "startDate": 2,
        "endDate": 3,
        "title": "Flash Deal",
        "product": "Lip Sleeping Mask",
        "color": "#4ECDC4"
    }
]"##;

pub fn demo_promotions() -> anyhow::Result<Vec<PromotionFields>> {
    serde_json::from_str(DEMO_PROMOTIONS_JSON).context("Invalid demo promotions JSON")
}

/// Загрузить демонстрационные акции через обычный путь создания
pub fn seed_demo_data<R: PromotionRepository>(
    service: &mut PromotionService<R>,
) -> anyhow::Result<usize> {
    let promotions = demo_promotions()?;
    let count = promotions.len();
    for fields in promotions {
        service.add_promotion(fields)?;
    }
    tracing::info!("Seeded {} demo promotions", count);
    Ok(count)
}
