use contracts::domain::a001_promotion::{
    Promotion, PromotionColor, PromotionFields, PromotionId,
};
use contracts::shared::calendar::{day_label, CalendarMonth};

/// Что делает форма: создаёт новую акцию или редактирует существующую
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionDraft {
    Creating,
    Editing(PromotionId),
}

/// Мини-календарь выбора дня
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Start,
    End,
}

/// Подсветка дня в мини-календаре
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerDayState {
    /// Выбранное начало или конец
    Endpoint,
    /// Строго между началом и концом
    InRange,
    Plain,
}

/// Черновик формы добавления/редактирования
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftForm {
    pub target: PromotionDraft,
    /// Месяц мини-календарей; к нему привязывается акция
    pub picker_month: CalendarMonth,
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub title: String,
    pub product: String,
    pub color: PromotionColor,
    pub open_picker: Option<PickerKind>,
}

impl DraftForm {
    pub fn creating(picker_month: CalendarMonth, color: PromotionColor) -> Self {
        Self {
            target: PromotionDraft::Creating,
            picker_month,
            start: None,
            end: None,
            title: String::new(),
            product: String::new(),
            color,
            open_picker: None,
        }
    }

    /// Предзаполнить форму из существующей записи
    pub fn editing(promotion: &Promotion) -> Option<Self> {
        Some(Self {
            target: PromotionDraft::Editing(promotion.id),
            picker_month: promotion.anchor_month()?,
            start: Some(promotion.start_date),
            end: Some(promotion.end_date),
            title: promotion.title.clone(),
            product: promotion.product.clone(),
            color: promotion.color.clone(),
            open_picker: None,
        })
    }

    /// Можно ли нажать "Add Event" / "Update Event"
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some() && !self.title.trim().is_empty()
    }

    pub fn to_fields(&self) -> PromotionFields {
        PromotionFields {
            year: self.picker_month.year(),
            month: self.picker_month.month(),
            start_date: self.start,
            end_date: self.end,
            title: self.title.clone(),
            product: self.product.clone(),
            color: self.color.clone(),
        }
    }

    pub fn picker_day_state(&self, day: u32) -> PickerDayState {
        if self.start == Some(day) || self.end == Some(day) {
            return PickerDayState::Endpoint;
        }
        match (self.start, self.end) {
            (Some(start), Some(end)) if start < day && day < end => PickerDayState::InRange,
            _ => PickerDayState::Plain,
        }
    }

    /// Подпись поля даты, например "Jan 2"; пусто, если день не выбран
    pub fn display_day(&self, day: Option<u32>) -> String {
        day.map(|d| day_label(self.picker_month.month(), d))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn january() -> CalendarMonth {
        CalendarMonth::new(2026, 0).unwrap()
    }

    #[test]
    fn test_completeness_requires_all_parts() {
        let mut form = DraftForm::creating(january(), PromotionColor::default());
        assert!(!form.is_complete());
        form.start = Some(2);
        form.end = Some(3);
        form.title = "   ".into();
        assert!(!form.is_complete());
        form.title = "Flash Deal".into();
        assert!(form.is_complete());
    }

    #[test]
    fn test_picker_day_highlight() {
        let mut form = DraftForm::creating(january(), PromotionColor::default());
        form.start = Some(3);
        assert_eq!(form.picker_day_state(3), PickerDayState::Endpoint);
        assert_eq!(form.picker_day_state(4), PickerDayState::Plain);

        form.end = Some(6);
        assert_eq!(form.picker_day_state(2), PickerDayState::Plain);
        assert_eq!(form.picker_day_state(4), PickerDayState::InRange);
        assert_eq!(form.picker_day_state(6), PickerDayState::Endpoint);
        assert_eq!(form.picker_day_state(7), PickerDayState::Plain);
    }

    #[test]
    fn test_display_day() {
        let mut form = DraftForm::creating(january(), PromotionColor::default());
        assert_eq!(form.display_day(form.start), "");
        form.start = Some(2);
        assert_eq!(form.display_day(form.start), "Jan 2");
    }
}
