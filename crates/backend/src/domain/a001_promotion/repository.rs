use contracts::domain::a001_promotion::{
    Promotion, PromotionError, PromotionId, ValidPromotionFields,
};
use contracts::domain::common::AggregateId;
use std::collections::HashSet;

/// Хранилище акций
///
/// Принимает только проверенные поля, поэтому `create` не может завершиться
/// ошибкой.
pub trait PromotionRepository {
    /// Добавить акцию с новым уникальным ID
    fn create(&mut self, fields: ValidPromotionFields) -> Promotion;

    /// Заменить все поля акции, кроме ID
    fn update(
        &mut self,
        id: PromotionId,
        fields: ValidPromotionFields,
    ) -> Result<Promotion, PromotionError>;

    /// Удалить акцию; повторное удаление ничего не делает.
    /// Возвращает `true`, если запись была удалена.
    fn delete(&mut self, id: PromotionId) -> bool;

    fn get(&self, id: PromotionId) -> Option<&Promotion>;

    /// Все акции в порядке добавления
    fn list(&self) -> &[Promotion];
}

type IdSource = Box<dyn FnMut() -> PromotionId + Send>;

/// Хранилище в памяти
///
/// Помнит все когда-либо выданные ID: после удаления ID не переиспользуется.
pub struct PromotionStore {
    promotions: Vec<Promotion>,
    issued: HashSet<PromotionId>,
    id_source: IdSource,
}

impl PromotionStore {
    pub fn new() -> Self {
        Self::with_id_source(Box::new(PromotionId::generate))
    }

    /// Хранилище с собственным генератором ID
    pub fn with_id_source(id_source: IdSource) -> Self {
        Self {
            promotions: Vec::new(),
            issued: HashSet::new(),
            id_source,
        }
    }

    pub fn len(&self) -> usize {
        self.promotions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.promotions.is_empty()
    }

    fn next_id(&mut self) -> PromotionId {
        loop {
            let id = (self.id_source)();
            if self.issued.insert(id) {
                return id;
            }
            tracing::debug!("Generated promotion id {} was already issued, retrying", id);
        }
    }
}

impl Default for PromotionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PromotionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromotionStore")
            .field("promotions", &self.promotions)
            .field("issued", &self.issued.len())
            .finish_non_exhaustive()
    }
}

impl PromotionRepository for PromotionStore {
    fn create(&mut self, fields: ValidPromotionFields) -> Promotion {
        let promotion = Promotion::new(self.next_id(), fields);
        self.promotions.push(promotion.clone());
        promotion
    }

    fn update(
        &mut self,
        id: PromotionId,
        fields: ValidPromotionFields,
    ) -> Result<Promotion, PromotionError> {
        let promotion = self
            .promotions
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PromotionError::NotFound(id))?;
        promotion.apply(fields);
        Ok(promotion.clone())
    }

    fn delete(&mut self, id: PromotionId) -> bool {
        let before = self.promotions.len();
        self.promotions.retain(|p| p.id != id);
        self.promotions.len() != before
    }

    fn get(&self, id: PromotionId) -> Option<&Promotion> {
        self.promotions.iter().find(|p| p.id == id)
    }

    fn list(&self) -> &[Promotion] {
        &self.promotions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_promotion::{PromotionColor, PromotionFields};
    use uuid::Uuid;

    fn valid(start: u32, end: u32, title: &str) -> ValidPromotionFields {
        PromotionFields {
            year: 2026,
            month: 0,
            start_date: Some(start),
            end_date: Some(end),
            title: title.to_string(),
            product: String::new(),
            color: PromotionColor::default(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_create_appends_in_order() {
        let mut store = PromotionStore::new();
        let a = store.create(valid(1, 1, "New Year Sale"));
        let b = store.create(valid(2, 3, "Flash Deal"));
        assert_ne!(a.id, b.id);
        let ids: Vec<_> = store.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
        assert_eq!(store.get(b.id).unwrap().title, "Flash Deal");
    }

    #[test]
    fn test_ids_are_never_reused_after_delete() {
        // Генератор повторяет уже выданные значения
        let sequence = [1u128, 1, 2, 1, 2, 3];
        let mut position = 0;
        let mut store = PromotionStore::with_id_source(Box::new(move || {
            let value = sequence[position % sequence.len()];
            position += 1;
            PromotionId(Uuid::from_u128(value))
        }));

        let first = store.create(valid(1, 1, "A"));
        assert!(store.delete(first.id));
        let second = store.create(valid(1, 1, "B"));
        let third = store.create(valid(1, 1, "C"));

        assert_eq!(first.id, PromotionId(Uuid::from_u128(1)));
        assert_eq!(second.id, PromotionId(Uuid::from_u128(2)));
        assert_eq!(third.id, PromotionId(Uuid::from_u128(3)));
    }

    #[test]
    fn test_update_replaces_fields_but_not_id() {
        let mut store = PromotionStore::new();
        let created = store.create(valid(2, 3, "Flash Deal"));
        let updated = store.update(created.id, valid(5, 5, "Flash Deal II")).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!((updated.start_date, updated.end_date), (5, 5));
        assert_eq!(store.get(created.id).unwrap().title, "Flash Deal II");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = PromotionStore::new();
        let missing = PromotionId::new_v4();
        assert_eq!(
            store.update(missing, valid(1, 2, "X")),
            Err(PromotionError::NotFound(missing))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = PromotionStore::new();
        let keep = store.create(valid(1, 1, "Keep"));
        let gone = store.create(valid(2, 3, "Gone"));

        assert!(store.delete(gone.id));
        let after_once = store.list().to_vec();
        assert!(!store.delete(gone.id));
        assert_eq!(store.list(), after_once.as_slice());
        assert_eq!(store.list()[0].id, keep.id);
    }
}
