//! Календарная математика для виджетов акций
//!
//! - [`month`] — месяц привязки, сетка дней
//! - [`labels`] — подписи дат вида "Jan 2"
//! - [`overlap`] — какие акции активны в день, месяц или окно
//! - [`window`] — обрезка акций по видимой оси графика
//! - [`grid`] — модель отрисовки месяца с метками акций

pub mod grid;
pub mod labels;
pub mod month;
pub mod overlap;
pub mod window;

pub use grid::{CalendarRenderModel, DayCell, DayMarker, MonthView, DEFAULT_MAX_DAY_MARKERS};
pub use labels::{day_label, parse_day_label, range_label, short_month_name, span_label};
pub use month::{grid, CalendarMonth};
pub use overlap::OverlapIndex;
pub use window::{ChartAxis, ClampedOverlap};
