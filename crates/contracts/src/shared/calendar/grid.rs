use super::month::CalendarMonth;
use super::overlap::OverlapIndex;
use crate::domain::a001_promotion::{Promotion, PromotionColor, PromotionId};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Сколько точек акций показывать в ячейке по умолчанию
pub const DEFAULT_MAX_DAY_MARKERS: usize = 4;

/// Точка-индикатор акции в ячейке дня
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarker {
    pub id: PromotionId,
    pub color: PromotionColor,
    pub title: String,
}

/// Ячейка сетки месяца
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// `None` — пустая ячейка перед первым числом
    pub day: Option<u32>,
    pub is_today: bool,
    pub markers: Vec<DayMarker>,
    /// Сколько акций не поместилось в ячейку
    pub overflow: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub month: CalendarMonth,
    pub cells: Vec<DayCell>,
}

impl MonthView {
    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.day == Some(day))
    }

    /// Ячейки, разбитые на недели по 7 (последняя неделя может быть короче)
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}

/// Модель отрисовки месяца: сетка дней, отметка "сегодня", точки акций
#[derive(Debug, Clone, Copy)]
pub struct CalendarRenderModel<'a> {
    index: OverlapIndex<'a>,
    today: Option<NaiveDate>,
    max_markers: Option<usize>,
}

impl<'a> CalendarRenderModel<'a> {
    pub fn new(promotions: &'a [Promotion]) -> Self {
        Self {
            index: OverlapIndex::new(promotions),
            today: None,
            max_markers: Some(DEFAULT_MAX_DAY_MARKERS),
        }
    }

    /// "Сегодня" задаётся снаружи, без пересчёта часовых поясов
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// `None` — показывать все точки
    pub fn with_max_markers(mut self, max_markers: Option<usize>) -> Self {
        self.max_markers = max_markers;
        self
    }

    pub fn grid(&self, month: CalendarMonth) -> Vec<Option<u32>> {
        month.grid()
    }

    pub fn month_view(&self, month: CalendarMonth) -> MonthView {
        let today = self
            .today
            .filter(|today| month.contains(*today))
            .map(|today| today.day());

        let cells = month
            .grid()
            .into_iter()
            .map(|day| match day {
                None => DayCell {
                    day: None,
                    is_today: false,
                    markers: Vec::new(),
                    overflow: 0,
                },
                Some(day) => self.day_cell(month, day, today == Some(day)),
            })
            .collect();

        MonthView { month, cells }
    }

    fn day_cell(&self, month: CalendarMonth, day: u32, is_today: bool) -> DayCell {
        let active = self.index.for_day(month.year(), month.month(), day);
        let shown = self.max_markers.unwrap_or(active.len()).min(active.len());
        let markers = active
            .iter()
            .take(shown)
            .map(|p| DayMarker {
                id: p.id,
                color: p.color.clone(),
                title: p.title.clone(),
            })
            .collect();
        DayCell {
            day: Some(day),
            is_today,
            markers,
            overflow: active.len() - shown,
        }
    }
}
