use super::window::{ChartAxis, ClampedOverlap};
use crate::domain::a001_promotion::Promotion;
use chrono::{Days, NaiveDate};

/// Поиск активных акций по дню, месяцу или окну графика
///
/// Индекс не хранит копий: он читает текущий срез акций из хранилища,
/// поэтому после любой мутации результат пересчитывается при следующем
/// обращении.
#[derive(Debug, Clone, Copy)]
pub struct OverlapIndex<'a> {
    promotions: &'a [Promotion],
}

impl<'a> OverlapIndex<'a> {
    pub fn new(promotions: &'a [Promotion]) -> Self {
        Self { promotions }
    }

    /// Акции, активные в день; порядок хранилища (для точек в ячейке)
    pub fn for_day(&self, year: i32, month: u32, day: u32) -> Vec<&'a Promotion> {
        self.promotions
            .iter()
            .filter(|p| p.covers_day(year, month, day))
            .collect()
    }

    /// То же, но по возрастанию дня начала (для списков)
    pub fn for_day_sorted(&self, year: i32, month: u32, day: u32) -> Vec<&'a Promotion> {
        let mut found = self.for_day(year, month, day);
        found.sort_by_key(|p| p.start_date);
        found
    }

    /// Акции, привязанные ровно к этому месяцу, по возрастанию дня начала
    ///
    /// Акции соседних месяцев сюда не попадают, даже если визуально
    /// могли бы заходить в этот месяц.
    pub fn for_month(&self, year: i32, month: u32) -> Vec<&'a Promotion> {
        let mut found: Vec<&'a Promotion> = self
            .promotions
            .iter()
            .filter(|p| p.is_anchored_to(year, month))
            .collect();
        found.sort_by_key(|p| p.start_date);
        found
    }

    /// Акции, пересекающиеся с окном `today ± radius_days`
    pub fn upcoming(&self, today: NaiveDate, radius_days: u64) -> Vec<&'a Promotion> {
        let window_start = today
            .checked_sub_days(Days::new(radius_days))
            .unwrap_or(NaiveDate::MIN);
        let window_end = today
            .checked_add_days(Days::new(radius_days))
            .unwrap_or(NaiveDate::MAX);

        self.promotions
            .iter()
            .filter(|p| match (p.start_naive(), p.end_naive()) {
                (Some(start), Some(end)) => start <= window_end && end >= window_start,
                _ => false,
            })
            .collect()
    }

    /// Области подсветки на графике для всех акций, видимых на оси
    pub fn for_window(&self, axis: &ChartAxis) -> Vec<ClampedOverlap> {
        self.promotions
            .iter()
            .filter_map(|p| axis.overlay(p))
            .collect()
    }
}
