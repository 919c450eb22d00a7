//! Календарь промо-акций: хранилище, редактор и виджеты
//!
//! Всё работает в одном потоке: каждое действие пользователя синхронно
//! изменяет хранилище, а представления пересчитываются при следующем чтении.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod usecases;
