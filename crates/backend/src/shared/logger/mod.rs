use crate::shared::config::LoggingConfig;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Подключить логирование: консоль + файл `<log_dir>/backend.log`
///
/// Фильтр берётся из `RUST_LOG`, иначе из конфигурации.
pub fn init_tracing(config: &LoggingConfig, log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter.clone());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// Логирование события приложения
///
/// # Примеры
/// ```
/// backend::shared::logger::log("startup", "Календарь запущен");
/// ```
pub fn log(category: &str, message: &str) {
    tracing::info!(target: "app", "[{}] {}", category, message);
}
