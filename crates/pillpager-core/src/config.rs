use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::color::Rgb;

pub use crate::animation::EasingType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub indicator: IndicatorConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here by default)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Explicit log file path
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

/// Rendering constants of a page indicator.
///
/// Widths, height and spacing are in points; the renderer decides how
/// points map onto its own units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Color of the active segment once its settle animation finished
    #[serde(default = "default_selected_color")]
    pub selected_color: Rgb,
    /// Color of every other segment
    #[serde(default = "default_normal_color")]
    pub normal_color: Rgb,
    #[serde(default = "default_min_item_width")]
    pub min_item_width: f32,
    #[serde(default = "default_max_item_width")]
    pub max_item_width: f32,
    #[serde(default = "default_item_height")]
    pub item_height: f32,
    #[serde(default = "default_item_spacing")]
    pub item_spacing: f32,
    /// Duration of the width settle and of the following color fade
    #[serde(default = "default_settle_duration")]
    pub settle_duration_ms: u64,
    /// Easing of the width settle
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            selected_color: default_selected_color(),
            normal_color: default_normal_color(),
            min_item_width: default_min_item_width(),
            max_item_width: default_max_item_width(),
            item_height: default_item_height(),
            item_spacing: default_item_spacing(),
            settle_duration_ms: default_settle_duration(),
            easing: EasingType::default(),
        }
    }
}

impl IndicatorConfig {
    pub fn new(selected_color: Rgb, normal_color: Rgb) -> Self {
        Self {
            selected_color,
            normal_color,
            ..Self::default()
        }
    }

    #[inline]
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    /// Corner radius that turns a segment into a pill
    #[inline]
    pub fn corner_radius(&self) -> f32 {
        self.item_height / 2.0
    }

    /// Reject dimensions the interpolation cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let dims = [
            ("min_item_width", self.min_item_width),
            ("max_item_width", self.max_item_width),
            ("item_height", self.item_height),
        ];
        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(crate::Error::Config(format!(
                    "indicator.{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !self.item_spacing.is_finite() || self.item_spacing < 0.0 {
            return Err(crate::Error::Config(format!(
                "indicator.item_spacing must not be negative, got {}",
                self.item_spacing
            )));
        }
        if self.min_item_width > self.max_item_width {
            return Err(crate::Error::Config(format!(
                "indicator.min_item_width ({}) exceeds max_item_width ({})",
                self.min_item_width, self.max_item_width
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while animations are running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Indicator points per terminal column
    #[serde(default = "default_points_per_cell")]
    pub points_per_cell: f32,
    /// Number of pages shown by the demo carousel
    #[serde(default = "default_pages")]
    pub pages: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            points_per_cell: default_points_per_cell(),
            pages: default_pages(),
        }
    }
}

/// Behaviour of the simulated horizontal scroll container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Width of one page in points
    #[serde(default = "default_page_width")]
    pub page_width: f32,
    /// Duration of the snap after a drag or a page jump
    #[serde(default = "default_snap_duration")]
    pub snap_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Points scrolled per column of mouse drag
    #[serde(default = "default_drag_points_per_column")]
    pub drag_points_per_column: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            page_width: default_page_width(),
            snap_duration_ms: default_snap_duration(),
            easing: EasingType::default(),
            drag_points_per_column: default_drag_points_per_column(),
        }
    }
}

impl ScrollConfig {
    #[inline]
    pub fn snap_duration(&self) -> Duration {
        Duration::from_millis(self.snap_duration_ms)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pillpager")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_selected_color() -> Rgb {
    Rgb::new(0xd8, 0xa6, 0x57)
}

fn default_normal_color() -> Rgb {
    Rgb::new(0x7c, 0x6f, 0x64)
}

fn default_min_item_width() -> f32 {
    8.0
}

fn default_max_item_width() -> f32 {
    32.0
}

fn default_item_height() -> f32 {
    6.0
}

fn default_item_spacing() -> f32 {
    8.0
}

fn default_settle_duration() -> u64 {
    500
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_points_per_cell() -> f32 {
    4.0
}

fn default_pages() -> usize {
    5
}

fn default_page_width() -> f32 {
    320.0
}

fn default_snap_duration() -> u64 {
    300
}

fn default_drag_points_per_column() -> f32 {
    8.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults if it is missing
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.indicator.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pillpager/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pillpager")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used when running the TUI
    pub fn log_path(&self) -> PathBuf {
        match &self.general.log_file {
            Some(path) => expand_tilde(path),
            None => self.data_dir().join("pillpager.log"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_defaults() {
        let config = IndicatorConfig::default();
        assert_eq!(config.min_item_width, 8.0);
        assert_eq!(config.max_item_width, 32.0);
        assert_eq!(config.item_height, 6.0);
        assert_eq!(config.item_spacing, 8.0);
        assert_eq!(config.corner_radius(), 3.0);
        assert_eq!(config.settle_duration(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r##"
            [indicator]
            selected_color = "#ff0000"
            max_item_width = 40.0
            easing = "linear"

            [ui]
            pages = 7
            "##,
        )
        .unwrap();

        assert_eq!(config.indicator.selected_color, Rgb::new(255, 0, 0));
        assert_eq!(config.indicator.max_item_width, 40.0);
        assert_eq!(config.indicator.min_item_width, 8.0);
        assert_eq!(config.indicator.easing, EasingType::Linear);
        assert_eq!(config.ui.pages, 7);
        assert_eq!(config.scroll.page_width, 320.0);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let result = AppConfig::from_toml(
            r#"
            [indicator]
            normal_color = "blue"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_widths() {
        let config = IndicatorConfig {
            min_item_width: 40.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_non_positive_and_nan() {
        for config in [
            IndicatorConfig { min_item_width: 0.0, ..Default::default() },
            IndicatorConfig { max_item_width: f32::NAN, ..Default::default() },
            IndicatorConfig { item_spacing: -1.0, ..Default::default() },
        ] {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }

    #[test]
    fn test_serialized_config_parses_back() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.indicator, config.indicator);
    }

    #[test]
    fn test_load_from_missing_path_gives_defaults() {
        let path = std::env::temp_dir().join("pillpager-missing-config-test.toml");
        let _ = std::fs::remove_file(&path);
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ui.pages, 5);
    }
}
