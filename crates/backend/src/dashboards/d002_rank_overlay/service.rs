use crate::domain::a001_promotion::{PromotionRepository, PromotionService};
use chrono::NaiveDate;
use contracts::domain::a001_promotion::{Promotion, PromotionColor, PromotionId};
use contracts::shared::calendar::{range_label, ChartAxis, ClampedOverlap, OverlapIndex};

/// Акция в списке выбора над графиком позиции
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayCandidate {
    pub id: PromotionId,
    pub name: String,
    /// "Jan 2-3" или "Jan 1"
    pub date_range: String,
    pub color: PromotionColor,
    pub selected: bool,
}

/// Подсветка акций на графике позиции товара
///
/// Список кандидатов — акции в окне `today ± radius_days`. Пользователь
/// включает нужные, и они закрашиваются на видимой оси графика.
#[derive(Debug, Clone)]
pub struct RankOverlay {
    today: NaiveDate,
    radius_days: u64,
    selected: Vec<PromotionId>,
}

impl RankOverlay {
    pub fn new(today: NaiveDate, radius_days: u64) -> Self {
        Self {
            today,
            radius_days,
            selected: Vec::new(),
        }
    }

    pub fn toggle(&mut self, id: PromotionId) {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    pub fn is_selected(&self, id: PromotionId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> &[PromotionId] {
        &self.selected
    }

    /// Кандидаты для выбора; выбор исчезнувших из окна акций сбрасывается
    pub fn candidates<R: PromotionRepository>(
        &mut self,
        service: &PromotionService<R>,
    ) -> Vec<OverlayCandidate> {
        let upcoming = service.query_upcoming(self.today, self.radius_days);
        self.retain_visible(&upcoming);
        upcoming
            .into_iter()
            .map(|p| OverlayCandidate {
                id: p.id,
                name: p.title.clone(),
                date_range: range_label(p.month, p.start_date, p.end_date),
                color: p.color.clone(),
                selected: self.is_selected(p.id),
            })
            .collect()
    }

    /// Области подсветки для выбранных акций
    ///
    /// Выбор удалённых акций при этом сбрасывается.
    pub fn areas<R: PromotionRepository>(
        &mut self,
        service: &PromotionService<R>,
        axis: &ChartAxis,
    ) -> Vec<ClampedOverlap> {
        let upcoming = service.query_upcoming(self.today, self.radius_days);
        self.retain_visible(&upcoming);
        let active: Vec<Promotion> = upcoming
            .into_iter()
            .filter(|p| self.is_selected(p.id))
            .cloned()
            .collect();
        OverlapIndex::new(&active).for_window(axis)
    }

    fn retain_visible(&mut self, upcoming: &[&Promotion]) {
        self.selected.retain(|id| upcoming.iter().any(|p| p.id == *id));
    }
}
