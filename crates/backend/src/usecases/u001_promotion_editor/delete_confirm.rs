use crate::domain::a001_promotion::{PromotionRepository, PromotionService};
use contracts::domain::a001_promotion::PromotionId;

/// Подтверждение удаления акции
///
/// Всплывающее подтверждение показывается только для одной записи.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteConfirm {
    #[default]
    Idle,
    ConfirmPending(PromotionId),
}

impl DeleteConfirm {
    /// Показать подтверждение; предыдущее закрывается
    pub fn request(&mut self, id: PromotionId) {
        *self = DeleteConfirm::ConfirmPending(id);
    }

    pub fn pending(&self) -> Option<PromotionId> {
        match self {
            DeleteConfirm::ConfirmPending(id) => Some(*id),
            DeleteConfirm::Idle => None,
        }
    }

    pub fn is_pending_for(&self, id: PromotionId) -> bool {
        self.pending() == Some(id)
    }

    /// Удалить запись; `false`, если подтверждать было нечего
    /// или запись уже удалена
    pub fn confirm<R: PromotionRepository>(&mut self, service: &mut PromotionService<R>) -> bool {
        match std::mem::take(self) {
            DeleteConfirm::ConfirmPending(id) => service.delete_promotion(id),
            DeleteConfirm::Idle => false,
        }
    }

    pub fn cancel(&mut self) {
        *self = DeleteConfirm::Idle;
    }

    /// Клик мимо всплывающего подтверждения
    pub fn click_away(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_promotion::PromotionStore;
    use contracts::domain::a001_promotion::{PromotionColor, PromotionFields};

    fn service_with_one() -> (PromotionService<PromotionStore>, PromotionId) {
        let mut service = PromotionService::new(PromotionStore::new());
        let promotion = service
            .add_promotion(PromotionFields {
                year: 2026,
                month: 0,
                start_date: Some(2),
                end_date: Some(3),
                title: "Flash Deal".into(),
                product: String::new(),
                color: PromotionColor::default(),
            })
            .unwrap();
        (service, promotion.id)
    }

    #[test]
    fn test_confirm_deletes() {
        let (mut service, id) = service_with_one();
        let mut confirm = DeleteConfirm::default();
        confirm.request(id);
        assert!(confirm.is_pending_for(id));
        assert!(confirm.confirm(&mut service));
        assert_eq!(confirm, DeleteConfirm::Idle);
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_cancel_and_click_away_do_not_mutate() {
        let (mut service, id) = service_with_one();
        let mut confirm = DeleteConfirm::default();

        confirm.request(id);
        confirm.cancel();
        assert_eq!(confirm.pending(), None);

        confirm.request(id);
        confirm.click_away();
        assert!(!confirm.confirm(&mut service));
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_only_one_record_pending() {
        let (_, id) = service_with_one();
        let other = PromotionId::new_v4();
        let mut confirm = DeleteConfirm::default();
        confirm.request(id);
        confirm.request(other);
        assert!(!confirm.is_pending_for(id));
        assert!(confirm.is_pending_for(other));
    }

    #[test]
    fn test_double_confirm_is_harmless() {
        let (mut service, id) = service_with_one();
        let mut first = DeleteConfirm::default();
        let mut stale = DeleteConfirm::default();
        first.request(id);
        stale.request(id);
        assert!(first.confirm(&mut service));
        assert!(!stale.confirm(&mut service));
        assert!(service.list().is_empty());
    }
}
