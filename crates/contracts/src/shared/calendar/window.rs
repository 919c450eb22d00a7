use super::labels::{day_label, parse_day_label};
use crate::domain::a001_promotion::{Promotion, PromotionColor, PromotionError, PromotionId};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Видимая ось дат графика (по возрастанию, без повторов)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartAxis {
    ticks: Vec<NaiveDate>,
}

/// Акция, обрезанная по видимой оси
///
/// `x1`/`x2` — подписи тиков, между которыми закрашивается область.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClampedOverlap {
    pub id: PromotionId,
    pub title: String,
    pub color: PromotionColor,
    pub x1: String,
    pub x2: String,
    pub start_index: usize,
    pub end_index: usize,
}

impl ChartAxis {
    /// Ось из дат; тики должны строго возрастать
    ///
    /// Индексы в [`ClampedOverlap`] указывают на тики в переданном порядке.
    pub fn new(ticks: Vec<NaiveDate>) -> Result<Self, PromotionError> {
        if let Some(pair) = ticks.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(PromotionError::InvalidAxisLabel(tick_label(pair[1])));
        }
        Ok(Self { ticks })
    }

    /// Построить ось из подписей вида "Jan 2"
    ///
    /// Подписи не содержат года: первая относится к `year`, а при переходе
    /// через декабрь год увеличивается. Повтор или шаг назад внутри месяца
    /// дают `InvalidAxisLabel`.
    pub fn from_labels<L: AsRef<str>>(labels: &[L], year: i32) -> Result<Self, PromotionError> {
        let mut ticks = Vec::with_capacity(labels.len());
        let mut year = year;
        let mut prev_month: Option<u32> = None;
        for label in labels {
            let label = label.as_ref();
            let (month, day) = parse_day_label(label)?;
            if prev_month.is_some_and(|prev| month < prev) {
                year += 1;
            }
            prev_month = Some(month);
            let date = NaiveDate::from_ymd_opt(year, month + 1, day)
                .ok_or_else(|| PromotionError::InvalidAxisLabel(label.to_string()))?;
            ticks.push(date);
        }
        Self::new(ticks)
    }

    pub fn ticks(&self) -> &[NaiveDate] {
        &self.ticks
    }

    pub fn labels(&self) -> Vec<String> {
        self.ticks.iter().map(|d| tick_label(*d)).collect()
    }

    /// Индексы тиков (начало, конец) для диапазона `[start, end]`
    ///
    /// Граница вне оси прижимается к первому или последнему тику. Конец
    /// сдвигается на следующий тик, если он есть, чтобы однодневная акция
    /// была видна полосой. Если ни один тик не попал в диапазон, акция
    /// рисуется только когда следующий за ней день сам является тиком;
    /// иначе она не отображается.
    pub fn clamp(&self, start: NaiveDate, end: NaiveDate) -> Option<(usize, usize)> {
        let last_index = self.ticks.len().checked_sub(1)?;
        let start_index = self.ticks.iter().position(|t| *t >= start)?;

        let end_index = match self.ticks.iter().rposition(|t| *t <= end) {
            Some(index) if index >= start_index => index,
            _ if end.succ_opt() == self.ticks.get(start_index).copied() => start_index,
            _ => return None,
        };

        let end_index = if end_index < last_index {
            end_index + 1
        } else {
            end_index
        };
        Some((start_index, end_index))
    }

    /// Область подсветки акции на графике
    pub fn overlay(&self, promotion: &Promotion) -> Option<ClampedOverlap> {
        let (start_index, end_index) =
            self.clamp(promotion.start_naive()?, promotion.end_naive()?)?;
        Some(ClampedOverlap {
            id: promotion.id,
            title: promotion.title.clone(),
            color: promotion.color.clone(),
            x1: tick_label(*self.ticks.get(start_index)?),
            x2: tick_label(*self.ticks.get(end_index)?),
            start_index,
            end_index,
        })
    }
}

fn tick_label(date: NaiveDate) -> String {
    day_label(date.month0(), date.day())
}
