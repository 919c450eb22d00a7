pub mod render;
pub mod service;

pub use render::render_text;
pub use service::{CalendarSnapshot, CalendarWidget, UpcomingEntry};
