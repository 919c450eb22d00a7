use anyhow::Context;
use chrono::NaiveDate;
use contracts::domain::a001_promotion::PromotionColor;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    /// "Сегодня" для виджетов, YYYY-MM-DD (без часовых поясов)
    pub today: String,
    /// 0 — без ограничения
    #[serde(default = "default_max_day_markers")]
    pub max_day_markers: usize,
    #[serde(default = "default_upcoming_radius_days")]
    pub upcoming_radius_days: u64,
    #[serde(default = "default_color")]
    pub default_color: String,
    /// Загружать демонстрационные акции при старте
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            filter: default_log_filter(),
        }
    }
}

fn default_max_day_markers() -> usize {
    contracts::shared::calendar::DEFAULT_MAX_DAY_MARKERS
}

fn default_upcoming_radius_days() -> u64 {
    30
}

fn default_color() -> String {
    PromotionColor::default().to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_dir() -> String {
    "target/logs".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Разобранные настройки календаря
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSettings {
    pub today: NaiveDate,
    pub max_day_markers: Option<usize>,
    pub upcoming_radius_days: u64,
    pub default_color: PromotionColor,
    pub seed_demo_data: bool,
}

impl CalendarConfig {
    pub fn settings(&self) -> anyhow::Result<CalendarSettings> {
        let today = NaiveDate::parse_from_str(self.today.trim(), "%Y-%m-%d")
            .with_context(|| format!("calendar.today must be YYYY-MM-DD, got '{}'", self.today))?;
        let default_color = PromotionColor::parse(&self.default_color)
            .context("calendar.default_color is not a #RRGGBB color")?;
        Ok(CalendarSettings {
            today,
            max_day_markers: (self.max_day_markers > 0).then_some(self.max_day_markers),
            upcoming_radius_days: self.upcoming_radius_days,
            default_color,
            seed_demo_data: self.seed_demo_data,
        })
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r##"
[calendar]
today = "2026-01-04"
max_day_markers = 4
upcoming_radius_days = 30
default_color = "#FBBF24"
seed_demo_data = true

[logging]
dir = "target/logs"
filter = "info"
"##;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Откуда была взята конфигурация
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Embedded => write!(f, "default embedded configuration"),
        }
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Returns the source alongside the config; tracing is not set up yet.
pub fn load_config() -> anyhow::Result<(Config, ConfigSource)> {
    if let Some(config_path) = exe_config_path().filter(|path| path.exists()) {
        let contents = std::fs::read_to_string(&config_path)?;
        let config = parse_config(&contents)
            .with_context(|| format!("Invalid config: {}", config_path.display()))?;
        return Ok((config, ConfigSource::File(config_path)));
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded))
}

fn exe_config_path() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(exe_path.parent()?.join("config.toml"))
}

/// Get the log directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_log_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.logging.dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    PathBuf::from(&config.logging.dir)
}
