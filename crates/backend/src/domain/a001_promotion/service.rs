use super::repository::{PromotionRepository, PromotionStore};
use contracts::domain::a001_promotion::{Promotion, PromotionError, PromotionFields, PromotionId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::calendar::{
    CalendarMonth, CalendarRenderModel, ChartAxis, ClampedOverlap, OverlapIndex,
};
use chrono::NaiveDate;

/// Единая точка доступа к акциям
///
/// Все изменения проходят проверку до обращения к хранилищу, поэтому
/// частичных записей не бывает. Представления читают актуальное
/// состояние через методы `query_*`.
#[derive(Debug, Default)]
pub struct PromotionService<R = PromotionStore> {
    repository: R,
}

impl<R: PromotionRepository> PromotionService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Добавить акцию
    pub fn add_promotion(&mut self, fields: PromotionFields) -> Result<Promotion, PromotionError> {
        let valid = fields.validate().inspect_err(|e| {
            tracing::warn!("Rejected new {}: {}", Promotion::element_name(), e);
        })?;
        let promotion = self.repository.create(valid);
        tracing::info!(
            "Created {} {} '{}' ({}-{:02} days {}..={})",
            Promotion::full_name(),
            promotion.id,
            promotion.title,
            promotion.year,
            promotion.month + 1,
            promotion.start_date,
            promotion.end_date
        );
        Ok(promotion)
    }

    /// Изменить акцию; ID сохраняется
    pub fn update_promotion(
        &mut self,
        id: PromotionId,
        fields: PromotionFields,
    ) -> Result<Promotion, PromotionError> {
        let valid = fields.validate().inspect_err(|e| {
            tracing::warn!("Rejected update of {}: {}", id, e);
        })?;
        let promotion = self.repository.update(id, valid).inspect_err(|e| {
            tracing::warn!("Update failed: {}", e);
        })?;
        tracing::info!(
            "Updated {} {} '{}' (version {})",
            Promotion::full_name(),
            promotion.id,
            promotion.title,
            promotion.metadata.version
        );
        Ok(promotion)
    }

    /// Удалить акцию; отсутствующий ID — не ошибка
    pub fn delete_promotion(&mut self, id: PromotionId) -> bool {
        let removed = self.repository.delete(id);
        if removed {
            tracing::info!("Deleted {} {}", Promotion::full_name(), id);
        } else {
            tracing::debug!("Delete of unknown promotion {} ignored", id);
        }
        removed
    }

    pub fn get(&self, id: PromotionId) -> Option<&Promotion> {
        self.repository.get(id)
    }

    pub fn list(&self) -> &[Promotion] {
        self.repository.list()
    }

    pub fn overlaps(&self) -> OverlapIndex<'_> {
        OverlapIndex::new(self.repository.list())
    }

    pub fn query_day(&self, year: i32, month: u32, day: u32) -> Vec<&Promotion> {
        let found = self.overlaps().for_day(year, month, day);
        tracing::debug!("query_day {}-{}-{}: {} promotions", year, month, day, found.len());
        found
    }

    pub fn query_month(&self, year: i32, month: u32) -> Vec<&Promotion> {
        let found = self.overlaps().for_month(year, month);
        tracing::debug!("query_month {}-{}: {} promotions", year, month, found.len());
        found
    }

    pub fn query_window(&self, axis: &ChartAxis) -> Vec<ClampedOverlap> {
        self.overlaps().for_window(axis)
    }

    pub fn query_upcoming(&self, today: NaiveDate, radius_days: u64) -> Vec<&Promotion> {
        self.overlaps().upcoming(today, radius_days)
    }

    pub fn render_grid(&self, year: i32, month: u32) -> Result<Vec<Option<u32>>, PromotionError> {
        Ok(self.render_model().grid(CalendarMonth::new(year, month)?))
    }

    pub fn render_model(&self) -> CalendarRenderModel<'_> {
        CalendarRenderModel::new(self.repository.list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_promotion::PromotionColor;

    fn fields(start: u32, end: u32, title: &str) -> PromotionFields {
        PromotionFields {
            year: 2026,
            month: 0,
            start_date: Some(start),
            end_date: Some(end),
            title: title.to_string(),
            product: String::new(),
            color: PromotionColor::default(),
        }
    }

    fn ids(found: Vec<&Promotion>) -> Vec<PromotionId> {
        found.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_flash_deal_scenario() {
        let mut service = PromotionService::new(PromotionStore::new());
        let deal = service.add_promotion(fields(2, 3, "Flash Deal")).unwrap();

        assert_eq!(ids(service.query_day(2026, 0, 2)), vec![deal.id]);
        assert_eq!(ids(service.query_day(2026, 0, 3)), vec![deal.id]);
        assert!(service.query_day(2026, 0, 1).is_empty());
        assert!(service.query_day(2026, 0, 4).is_empty());

        let mut moved = deal.to_fields();
        moved.start_date = Some(5);
        moved.end_date = Some(5);
        service.update_promotion(deal.id, moved).unwrap();

        assert!(service.query_day(2026, 0, 3).is_empty());
        assert_eq!(ids(service.query_day(2026, 0, 5)), vec![deal.id]);
    }

    #[test]
    fn test_reversed_days_are_committed_ordered() {
        let mut service = PromotionService::<PromotionStore>::default();
        let created = service.add_promotion(fields(9, 4, "Reversed")).unwrap();
        assert!(created.start_date <= created.end_date);
        assert_eq!((created.start_date, created.end_date), (4, 9));
    }

    #[test]
    fn test_invalid_input_never_mutates() {
        let mut service = PromotionService::new(PromotionStore::new());
        let existing = service.add_promotion(fields(2, 3, "Flash Deal")).unwrap();

        assert_eq!(
            service.add_promotion(fields(2, 3, "  ")),
            Err(PromotionError::InvalidTitle)
        );
        assert!(matches!(
            service.add_promotion(fields(0, 3, "Bad")),
            Err(PromotionError::InvalidRange(_))
        ));
        assert!(matches!(
            service.update_promotion(existing.id, fields(2, 40, "Bad")),
            Err(PromotionError::InvalidRange(_))
        ));
        assert_eq!(service.list(), std::slice::from_ref(&existing));
    }

    #[test]
    fn test_update_unknown_id() {
        let mut service = PromotionService::new(PromotionStore::new());
        let missing = PromotionId::new_v4();
        assert_eq!(
            service.update_promotion(missing, fields(1, 2, "Ghost")),
            Err(PromotionError::NotFound(missing))
        );
    }

    #[test]
    fn test_deleted_promotion_disappears_from_queries() {
        let mut service = PromotionService::new(PromotionStore::new());
        let deal = service.add_promotion(fields(2, 3, "Flash Deal")).unwrap();
        let sale = service.add_promotion(fields(1, 1, "New Year Sale")).unwrap();

        assert!(service.delete_promotion(deal.id));
        assert!(!service.delete_promotion(deal.id));

        for day in 1..=31 {
            assert!(service.query_day(2026, 0, day).iter().all(|p| p.id != deal.id));
        }
        assert_eq!(ids(service.query_month(2026, 0)), vec![sale.id]);
        assert!(service.get(deal.id).is_none());
    }

    #[test]
    fn test_render_grid_and_window() {
        let mut service = PromotionService::new(PromotionStore::new());
        service.add_promotion(fields(1, 1, "New Year Sale")).unwrap();

        let grid = service.render_grid(2026, 0).unwrap();
        assert_eq!(grid.len(), 35);
        assert!(service.render_grid(2026, 12).is_err());

        let axis = ChartAxis::from_labels(&["Jan 2", "Jan 3", "Jan 4"], 2026).unwrap();
        let areas = service.query_window(&axis);
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].x1, "Jan 2");
        assert_eq!(areas[0].x2, "Jan 3");
    }
}
