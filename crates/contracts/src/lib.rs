//! Доменные контракты календаря промо-акций
//!
//! Чистые типы и расчёты без ввода-вывода: агрегат акции, валидация
//! диапазона дат, сетка месяца, поиск пересечений и обрезка по оси графика.

pub mod domain;
pub mod shared;
