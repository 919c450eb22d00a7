use anyhow::Context;
use backend::dashboards::d001_promotion_calendar::{render_text, CalendarWidget};
use backend::dashboards::d002_rank_overlay::RankOverlay;
use backend::domain::a001_promotion::{PromotionService, PromotionStore};
use backend::shared::config::{get_log_dir, load_config};
use backend::shared::data::seed::seed_demo_data;
use backend::shared::logger;
use chrono::Days;
use contracts::shared::calendar::{CalendarMonth, ChartAxis};

/// Разобрать месяц вида "2026-01" из аргументов командной строки
fn parse_month_arg(arg: &str) -> anyhow::Result<CalendarMonth> {
    let (year, month) = arg
        .split_once('-')
        .with_context(|| format!("Expected YYYY-MM, got '{}'", arg))?;
    let year: i32 = year.parse().with_context(|| format!("Invalid year in '{}'", arg))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("Invalid month in '{}'", arg))?;
    let month0 = month
        .checked_sub(1)
        .with_context(|| format!("Invalid month in '{}'", arg))?;
    Ok(CalendarMonth::new(year, month0)?)
}

fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;
    logger::init_tracing(&config.logging, &get_log_dir(&config))?;
    tracing::info!("Loaded config from {}", source);
    let settings = config.calendar.settings()?;

    logger::log("startup", &format!("Calendar today is {}", settings.today));

    let mut service = PromotionService::new(PromotionStore::new());
    if settings.seed_demo_data {
        seed_demo_data(&mut service)?;
    }

    let mut widget = CalendarWidget::new(&settings);
    if let Some(arg) = std::env::args().nth(1) {
        widget.show_month(parse_month_arg(&arg)?);
    }
    println!("{}", render_text(&widget.snapshot(&service)));

    // Неделя графика позиции вокруг "сегодня" со всеми доступными акциями
    let mut overlay = RankOverlay::new(settings.today, settings.upcoming_radius_days);
    for candidate in overlay.candidates(&service) {
        overlay.toggle(candidate.id);
    }
    let first_tick = settings
        .today
        .checked_sub_days(Days::new(3))
        .unwrap_or(settings.today);
    let axis = ChartAxis::new(first_tick.iter_days().take(7).collect())?;
    println!("Rank chart {}", axis.labels().join(" | "));
    for area in overlay.areas(&service, &axis) {
        println!("  {} {}: {} -> {}", area.color, area.title, area.x1, area.x2);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_arg() {
        let month = parse_month_arg("2026-02").unwrap();
        assert_eq!((month.year(), month.month()), (2026, 1));
        assert!(parse_month_arg("2026-00").is_err());
        assert!(parse_month_arg("2026-13").is_err());
        assert!(parse_month_arg("January").is_err());
    }
}
