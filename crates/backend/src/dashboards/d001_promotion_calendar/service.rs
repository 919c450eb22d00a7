use crate::domain::a001_promotion::{PromotionRepository, PromotionService};
use crate::shared::config::CalendarSettings;
use crate::usecases::u001_promotion_editor::PromotionEditor;
use chrono::NaiveDate;
use contracts::domain::a001_promotion::{PromotionColor, PromotionId};
use contracts::shared::calendar::{span_label, CalendarMonth, MonthView};

/// Строка списка "Upcoming Events" под календарём
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingEntry {
    pub id: PromotionId,
    pub title: String,
    pub color: PromotionColor,
    /// "Jan 2-3"
    pub label: String,
}

/// Всё, что нужно для отрисовки календаря за видимый месяц
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSnapshot {
    /// "January 2026"
    pub title: String,
    pub view: MonthView,
    pub upcoming: Vec<UpcomingEntry>,
}

/// Календарь акций на главной странице
#[derive(Debug, Clone)]
pub struct CalendarWidget {
    visible: CalendarMonth,
    today: NaiveDate,
    max_day_markers: Option<usize>,
}

impl CalendarWidget {
    /// Открывается на месяце, в котором находится "сегодня"
    pub fn new(settings: &CalendarSettings) -> Self {
        Self {
            visible: CalendarMonth::containing(settings.today),
            today: settings.today,
            max_day_markers: settings.max_day_markers,
        }
    }

    pub fn visible_month(&self) -> CalendarMonth {
        self.visible
    }

    pub fn show_month(&mut self, month: CalendarMonth) {
        self.visible = month;
    }

    pub fn prev_month(&mut self) {
        self.visible = self.visible.prev();
    }

    pub fn next_month(&mut self) {
        self.visible = self.visible.next();
    }

    pub fn snapshot<R: PromotionRepository>(&self, service: &PromotionService<R>) -> CalendarSnapshot {
        let view = service
            .render_model()
            .with_today(self.today)
            .with_max_markers(self.max_day_markers)
            .month_view(self.visible);

        let upcoming = service
            .query_month(self.visible.year(), self.visible.month())
            .into_iter()
            .map(|p| UpcomingEntry {
                id: p.id,
                title: p.title.clone(),
                color: p.color.clone(),
                label: span_label(p.month, p.start_date, p.end_date),
            })
            .collect();

        CalendarSnapshot {
            title: self.visible.name(),
            view,
            upcoming,
        }
    }

    /// Клик по ячейке сетки; пустые ячейки игнорируются
    pub fn day_clicked(&self, day: Option<u32>, editor: &mut PromotionEditor) {
        if let Some(day) = day {
            editor.open_create_on(self.visible, day);
        }
    }
}
