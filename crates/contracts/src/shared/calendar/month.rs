use super::labels::{month_name, short_month_name};
use crate::domain::a001_promotion::PromotionError;
use chrono::{Datelike, Months, NaiveDate};

/// Календарный месяц; `month` нумеруется с нуля (0 = январь)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, PromotionError> {
        if month > 11 {
            return Err(PromotionError::InvalidRange(format!(
                "month {} is outside 0..=11",
                month
            )));
        }
        NaiveDate::from_ymd_opt(year, month + 1, 1)
            .map(|first| Self { first })
            .ok_or_else(|| {
                PromotionError::InvalidRange(format!("year {} is not representable", year))
            })
    }

    /// Месяц, в который попадает дата
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if is_leap_year(self.year()) => 29,
            _ => 28,
        }
    }

    /// День недели первого числа, 0 = воскресенье
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Дата для дня месяца, `None` если такого дня нет
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.days_in_month() {
            return None;
        }
        self.first.with_day(day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.month()
    }

    pub fn prev(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// "January 2026"
    pub fn name(&self) -> String {
        format!("{} {}", month_name(self.month()), self.year())
    }

    /// "Jan"
    pub fn short_name(&self) -> &'static str {
        short_month_name(self.month())
    }

    /// Сетка месяца: пустые ячейки до первого дня недели, затем `1..=N`
    pub fn grid(&self) -> Vec<Option<u32>> {
        let blanks = self.first_weekday() as usize;
        let mut cells = Vec::with_capacity(blanks + self.days_in_month() as usize);
        cells.extend(std::iter::repeat(None).take(blanks));
        cells.extend((1..=self.days_in_month()).map(Some));
        cells
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Сетка месяца по году и номеру месяца (0..=11)
pub fn grid(year: i32, month: u32) -> Result<Vec<Option<u32>>, PromotionError> {
    Ok(CalendarMonth::new(year, month)?.grid())
}
