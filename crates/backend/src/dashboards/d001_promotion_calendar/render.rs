use super::service::CalendarSnapshot;
use contracts::shared::calendar::DayCell;
use std::fmt::Write;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Текстовая отрисовка календаря для консоли
///
/// Сегодня выделяется скобками, дни с акциями помечаются `*`.
pub fn render_text(snapshot: &CalendarSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.title);
    let _ = writeln!(out, "{}", WEEKDAYS.map(|d| format!("{:>5}", d)).concat());

    for week in snapshot.view.weeks() {
        let line: String = week.iter().map(render_cell).collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }

    if !snapshot.upcoming.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Upcoming Events");
        for entry in &snapshot.upcoming {
            let _ = writeln!(out, "  {} {} ({})", entry.color, entry.title, entry.label);
        }
    }
    out
}

fn render_cell(cell: &DayCell) -> String {
    let Some(day) = cell.day else {
        return " ".repeat(5);
    };
    let day = if cell.is_today {
        format!("[{}]", day)
    } else {
        day.to_string()
    };
    let marks = if cell.markers.is_empty() { "" } else { "*" };
    format!("{:>5}", format!("{}{}", day, marks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d001_promotion_calendar::CalendarWidget;
    use crate::domain::a001_promotion::{PromotionService, PromotionStore};
    use crate::shared::config::CalendarSettings;
    use crate::shared::data::seed::seed_demo_data;
    use chrono::NaiveDate;
    use contracts::domain::a001_promotion::PromotionColor;

    #[test]
    fn test_render_january() {
        let mut service = PromotionService::new(PromotionStore::new());
        seed_demo_data(&mut service).unwrap();
        let widget = CalendarWidget::new(&CalendarSettings {
            today: NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
            max_day_markers: Some(4),
            upcoming_radius_days: 30,
            default_color: PromotionColor::default(),
            seed_demo_data: true,
        });

        let text = render_text(&widget.snapshot(&service));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "January 2026");
        assert_eq!(lines[1], "   Su   Mo   Tu   We   Th   Fr   Sa");
        assert_eq!(lines[2], format!("{}   1*   2*   3*", " ".repeat(20)));
        assert!(lines[3].starts_with("  [4]"));
        assert!(text.contains("#4ECDC4 Flash Deal (Jan 2-3)"));
    }
}
