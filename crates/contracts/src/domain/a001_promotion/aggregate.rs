use super::color::PromotionColor;
use super::date_range::{DateRange, DateRangeValidator};
use super::errors::PromotionError;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::shared::calendar::CalendarMonth;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для акции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PromotionId(pub Uuid);

impl PromotionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for PromotionId {
    fn generate() -> Self {
        Self::new_v4()
    }
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PromotionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for PromotionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// К чему относится акция
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionScope {
    /// Общая акция бренда
    Brand,
    /// Акция конкретного товара
    Product(String),
}

/// Редактируемые поля акции (всё, кроме ID)
///
/// Дни могут быть не выбраны, пока форма заполняется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionFields {
    pub year: i32,
    /// Месяц, 0..=11
    pub month: u32,
    pub start_date: Option<u32>,
    pub end_date: Option<u32>,
    pub title: String,
    /// Пустая строка — акция всего бренда
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub color: PromotionColor,
}

impl PromotionFields {
    /// Проверить поля перед записью в хранилище
    pub fn validate(self) -> Result<ValidPromotionFields, PromotionError> {
        let anchor = CalendarMonth::new(self.year, self.month)?;
        let range =
            DateRangeValidator::validate(self.start_date, self.end_date, anchor.days_in_month())?;
        let title = DateRangeValidator::validate_title(&self.title)?;
        Ok(ValidPromotionFields {
            anchor,
            range,
            title,
            product: self.product.trim().to_string(),
            color: self.color,
        })
    }
}

/// Проверенные поля акции
///
/// Создаются только через [`PromotionFields::validate`], поэтому хранилище
/// никогда не получает неполную или некорректную запись.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPromotionFields {
    anchor: CalendarMonth,
    range: DateRange,
    title: String,
    product: String,
    color: PromotionColor,
}

impl ValidPromotionFields {
    pub fn anchor(&self) -> CalendarMonth {
        self.anchor
    }
    pub fn range(&self) -> DateRange {
        self.range
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn product(&self) -> &str {
        &self.product
    }
    pub fn color(&self) -> &PromotionColor {
        &self.color
    }
}

/// Акция (агрегат)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: PromotionId,
    pub year: i32,
    /// Месяц привязки, 0..=11
    pub month: u32,
    pub start_date: u32,
    pub end_date: u32,
    pub title: String,
    pub product: String,
    pub color: PromotionColor,
    #[serde(default)]
    pub metadata: EntityMetadata,
}

impl Promotion {
    pub fn new(id: PromotionId, fields: ValidPromotionFields) -> Self {
        Self {
            id,
            year: fields.anchor.year(),
            month: fields.anchor.month(),
            start_date: fields.range.start,
            end_date: fields.range.end,
            title: fields.title,
            product: fields.product,
            color: fields.color,
            metadata: EntityMetadata::new(),
        }
    }

    /// Заменить все поля, кроме ID
    pub fn apply(&mut self, fields: ValidPromotionFields) {
        self.year = fields.anchor.year();
        self.month = fields.anchor.month();
        self.start_date = fields.range.start;
        self.end_date = fields.range.end;
        self.title = fields.title;
        self.product = fields.product;
        self.color = fields.color;
        self.metadata.touch();
        self.metadata.increment_version();
    }

    /// Месяц привязки; для записей из хранилища всегда корректен
    pub fn anchor_month(&self) -> Option<CalendarMonth> {
        CalendarMonth::new(self.year, self.month).ok()
    }

    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    pub fn is_anchored_to(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }

    /// Попадает ли день в акцию (только в пределах месяца привязки)
    pub fn covers_day(&self, year: i32, month: u32, day: u32) -> bool {
        self.is_anchored_to(year, month) && self.range().contains(day)
    }

    pub fn start_naive(&self) -> Option<NaiveDate> {
        self.anchor_month()?.date(self.start_date)
    }

    pub fn end_naive(&self) -> Option<NaiveDate> {
        self.anchor_month()?.date(self.end_date)
    }

    pub fn scope(&self) -> PromotionScope {
        if self.product.is_empty() {
            PromotionScope::Brand
        } else {
            PromotionScope::Product(self.product.clone())
        }
    }

    /// Поля записи для предзаполнения формы редактирования
    pub fn to_fields(&self) -> PromotionFields {
        PromotionFields {
            year: self.year,
            month: self.month,
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            title: self.title.clone(),
            product: self.product.clone(),
            color: self.color.clone(),
        }
    }
}

impl AggregateRoot for Promotion {
    type Id = PromotionId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.title
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "promotion"
    }

    fn element_name() -> &'static str {
        "Promotion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(start: Option<u32>, end: Option<u32>, title: &str) -> PromotionFields {
        PromotionFields {
            year: 2026,
            month: 0,
            start_date: start,
            end_date: end,
            title: title.to_string(),
            product: String::new(),
            color: PromotionColor::default(),
        }
    }

    #[test]
    fn test_validate_swaps_and_trims() {
        let valid = fields(Some(9), Some(4), "  Spring Sale ").validate().unwrap();
        assert_eq!(valid.range(), DateRange { start: 4, end: 9 });
        assert_eq!(valid.title(), "Spring Sale");
    }

    #[test]
    fn test_validate_uses_anchor_month_length() {
        let mut february = fields(Some(1), Some(29), "Leap");
        february.month = 1;
        february.year = 2025;
        assert!(matches!(
            february.clone().validate(),
            Err(PromotionError::InvalidRange(_))
        ));
        february.year = 2028;
        assert!(february.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_month() {
        let mut bad = fields(Some(1), Some(2), "Sale");
        bad.month = 12;
        assert!(matches!(bad.validate(), Err(PromotionError::InvalidRange(_))));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        assert_eq!(
            fields(Some(1), Some(2), " ").validate(),
            Err(PromotionError::InvalidTitle)
        );
    }

    #[test]
    fn test_apply_keeps_id_and_bumps_version() {
        let id = PromotionId::new_v4();
        let mut promotion = Promotion::new(id, fields(Some(2), Some(3), "Flash Deal").validate().unwrap());
        assert_eq!(promotion.metadata.version, 0);

        let mut changed = promotion.to_fields();
        changed.start_date = Some(5);
        changed.end_date = Some(5);
        changed.product = "Lip Sleeping Mask".into();
        promotion.apply(changed.validate().unwrap());

        assert_eq!(promotion.id, id);
        assert_eq!(promotion.range(), DateRange { start: 5, end: 5 });
        assert_eq!(promotion.metadata.version, 1);
        assert_eq!(
            promotion.scope(),
            PromotionScope::Product("Lip Sleeping Mask".into())
        );
    }

    #[test]
    fn test_covers_day_requires_anchor_month() {
        let promotion = Promotion::new(
            PromotionId::new_v4(),
            fields(Some(2), Some(3), "Flash Deal").validate().unwrap(),
        );
        assert!(promotion.covers_day(2026, 0, 2));
        assert!(promotion.covers_day(2026, 0, 3));
        assert!(!promotion.covers_day(2026, 0, 4));
        assert!(!promotion.covers_day(2026, 1, 2));
        assert!(!promotion.covers_day(2025, 0, 2));
        assert_eq!(promotion.scope(), PromotionScope::Brand);
        assert_eq!(
            promotion.end_naive(),
            NaiveDate::from_ymd_opt(2026, 1, 3)
        );
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let promotion = Promotion::new(
            PromotionId::new_v4(),
            fields(Some(2), Some(3), "Flash Deal").validate().unwrap(),
        );
        let json = serde_json::to_value(&promotion).unwrap();
        assert_eq!(json["startDate"], 2);
        assert_eq!(json["endDate"], 3);
        assert_eq!(json["color"], "#FBBF24");
        let back: Promotion = serde_json::from_value(json).unwrap();
        assert_eq!(back, promotion);
    }

    #[test]
    fn test_aggregate_names() {
        assert_eq!(Promotion::full_name(), "a001_promotion");
    }
}
