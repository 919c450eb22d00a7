use super::errors::PromotionError;
use serde::{Deserialize, Serialize};

/// Цвет из палитры редактора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Фиксированная палитра для новых акций
pub const PRESET_COLORS: [PresetColor; 12] = [
    PresetColor { name: "Yellow", hex: "#FBBF24" },
    PresetColor { name: "Green", hex: "#34D399" },
    PresetColor { name: "Purple", hex: "#A78BFA" },
    PresetColor { name: "Orange", hex: "#FB923C" },
    PresetColor { name: "Blue", hex: "#60A5FA" },
    PresetColor { name: "Red", hex: "#F87171" },
    PresetColor { name: "Pink", hex: "#F472B6" },
    PresetColor { name: "Teal", hex: "#2DD4BF" },
    PresetColor { name: "Indigo", hex: "#818CF8" },
    PresetColor { name: "Lime", hex: "#A3E635" },
    PresetColor { name: "Cyan", hex: "#22D3EE" },
    PresetColor { name: "Rose", hex: "#FB7185" },
];

const DEFAULT_COLOR: &str = "#FBBF24";

/// Цвет отображения акции в формате `#RRGGBB`
///
/// Один и тот же цвет используется во всех представлениях записи:
/// точки в календаре, список событий, подсветка на графике.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromotionColor(String);

impl PromotionColor {
    /// Разобрать цвет; hex-цифры приводятся к верхнему регистру
    pub fn parse(value: &str) -> Result<Self, PromotionError> {
        let value = value.trim();
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| PromotionError::InvalidColor(value.to_string()))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PromotionError::InvalidColor(value.to_string()));
        }
        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Название цвета в палитре, если он из неё
    pub fn preset_name(&self) -> Option<&'static str> {
        PRESET_COLORS
            .iter()
            .find(|preset| preset.hex == self.0)
            .map(|preset| preset.name)
    }

    /// Все цвета палитры в порядке отображения
    pub fn presets() -> impl Iterator<Item = PromotionColor> {
        PRESET_COLORS
            .iter()
            .map(|preset| PromotionColor(preset.hex.to_string()))
    }
}

impl Default for PromotionColor {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl TryFrom<String> for PromotionColor {
    type Error = PromotionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PromotionColor> for String {
    fn from(color: PromotionColor) -> Self {
        color.0
    }
}

impl std::fmt::Display for PromotionColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
