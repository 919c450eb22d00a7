use super::draft::{DraftForm, PickerKind, PromotionDraft};
use super::errors::EditorError;
use crate::domain::a001_promotion::{PromotionRepository, PromotionService};
use contracts::domain::a001_promotion::{Promotion, PromotionColor, PromotionError};
use contracts::shared::calendar::CalendarMonth;

/// Состояние формы добавления/редактирования
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Drafting(DraftForm),
}

/// Куда пришёлся клик мыши, пока форма открыта
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Modal,
    Picker(PickerKind),
    Outside,
}

/// Форма акции в календаре
///
/// Открытие сбрасывает черновик, закрытие отбрасывает его без изменений
/// хранилища. Записать можно только полный черновик.
#[derive(Debug, Clone)]
pub struct PromotionEditor {
    state: EditorState,
    default_color: PromotionColor,
}

impl PromotionEditor {
    pub fn new(default_color: PromotionColor) -> Self {
        Self {
            state: EditorState::Closed,
            default_color,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn form(&self) -> Option<&DraftForm> {
        match &self.state {
            EditorState::Drafting(form) => Some(form),
            EditorState::Closed => None,
        }
    }

    fn form_mut(&mut self) -> Option<&mut DraftForm> {
        match &mut self.state {
            EditorState::Drafting(form) => Some(form),
            EditorState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Drafting(_))
    }

    /// Новая акция в месяце мини-календаря
    pub fn open_create(&mut self, month: CalendarMonth) {
        self.state = EditorState::Drafting(DraftForm::creating(month, self.default_color.clone()));
    }

    /// Клик по дню в сетке: новая акция с заданным началом
    pub fn open_create_on(&mut self, month: CalendarMonth, day: u32) {
        let mut form = DraftForm::creating(month, self.default_color.clone());
        form.start = Some(day);
        self.state = EditorState::Drafting(form);
    }

    /// Редактирование: форма предзаполняется из записи, мини-календарь
    /// переходит на её месяц
    pub fn open_edit(&mut self, promotion: &Promotion) {
        match DraftForm::editing(promotion) {
            Some(form) => self.state = EditorState::Drafting(form),
            None => tracing::warn!("Promotion {} has invalid anchor month", promotion.id),
        }
    }

    /// Открыть один мини-календарь (второй закрывается) или закрыть открытый
    pub fn toggle_picker(&mut self, kind: PickerKind) {
        if let Some(form) = self.form_mut() {
            form.open_picker = if form.open_picker == Some(kind) {
                None
            } else {
                Some(kind)
            };
        }
    }

    /// День начала выбирается независимо от конца
    pub fn select_start(&mut self, day: u32) {
        if let Some(form) = self.form_mut() {
            form.start = Some(day);
            form.open_picker = None;
        }
    }

    pub fn select_end(&mut self, day: u32) {
        if let Some(form) = self.form_mut() {
            form.end = Some(day);
            form.open_picker = None;
        }
    }

    pub fn picker_prev_month(&mut self) {
        if let Some(form) = self.form_mut() {
            form.picker_month = form.picker_month.prev();
        }
    }

    pub fn picker_next_month(&mut self) {
        if let Some(form) = self.form_mut() {
            form.picker_month = form.picker_month.next();
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(form) = self.form_mut() {
            form.title = title.into();
        }
    }

    pub fn set_product(&mut self, product: impl Into<String>) {
        if let Some(form) = self.form_mut() {
            form.product = product.into();
        }
    }

    pub fn set_color(&mut self, color: PromotionColor) {
        if let Some(form) = self.form_mut() {
            form.color = color;
        }
    }

    pub fn can_commit(&self) -> bool {
        self.form().is_some_and(DraftForm::is_complete)
    }

    /// Записать черновик
    ///
    /// При ошибке форма остаётся открытой, хранилище не меняется.
    pub fn commit<R: PromotionRepository>(
        &mut self,
        service: &mut PromotionService<R>,
    ) -> Result<Promotion, EditorError> {
        let form = self.form().ok_or(EditorError::NotDrafting)?;
        if !form.is_complete() {
            return Err(EditorError::Incomplete);
        }

        let fields = form.to_fields();
        let result: Result<Promotion, PromotionError> = match form.target {
            PromotionDraft::Creating => service.add_promotion(fields),
            PromotionDraft::Editing(id) => service.update_promotion(id, fields),
        };

        let promotion = result?;
        self.state = EditorState::Closed;
        Ok(promotion)
    }

    /// Закрыть форму без сохранения
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("Promotion draft discarded");
        }
        self.state = EditorState::Closed;
    }

    /// Клик вне формы и вне мини-календарей закрывает форму
    pub fn pointer_down(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            self.close();
        }
    }
}

impl Default for PromotionEditor {
    fn default() -> Self {
        Self::new(PromotionColor::default())
    }
}
