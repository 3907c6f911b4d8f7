use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::color::Rgb;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Number of nodes in the row
    #[serde(default = "default_node_count")]
    pub node_count: usize,
    /// Sub-segments of each zig-zag line
    #[serde(default = "default_segment_count")]
    pub segment_count: u32,
    /// Scale advanced per frame
    #[serde(default = "default_step_gap")]
    pub step_gap: f64,
    /// Pause between forced redraws while animating
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            node_count: default_node_count(),
            segment_count: default_segment_count(),
            step_gap: default_step_gap(),
            frame_interval_ms: default_frame_interval(),
        }
    }
}

impl AnimationConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Stroke width is the surface width divided by this
    #[serde(default = "default_stroke_divisor")]
    pub stroke_divisor: f64,
    /// Ball radius is the node gap divided by this
    #[serde(default = "default_ball_size_divisor")]
    pub ball_size_divisor: f64,
    #[serde(default = "default_foreground")]
    pub foreground: Rgb,
    #[serde(default = "default_background")]
    pub background: Rgb,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_divisor: default_stroke_divisor(),
            ball_size_divisor: default_ball_size_divisor(),
            foreground: default_foreground(),
            background: default_background(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval in milliseconds while nothing animates
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show a one-line status bar below the stage
    #[serde(default)]
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_status_bar: false,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ballup")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_node_count() -> usize {
    5
}

fn default_segment_count() -> u32 {
    2
}

fn default_step_gap() -> f64 {
    0.02
}

fn default_frame_interval() -> u64 {
    30
}

fn default_stroke_divisor() -> f64 {
    90.0
}

fn default_ball_size_divisor() -> f64 {
    4.3
}

fn default_foreground() -> Rgb {
    Rgb::new(0x4c, 0xaf, 0x50)
}

fn default_background() -> Rgb {
    Rgb::new(0xbd, 0xbd, 0xbd)
}

fn default_tick_rate() -> u64 {
    100
}

pub const MAX_NODE_COUNT: usize = 64;
pub const MAX_SEGMENT_COUNT: u32 = 64;

/// Divisors below 1 would make strokes wider than the surface or the ball
/// larger than its slot
fn check_divisor(key: &str, value: f64) -> crate::Result<()> {
    if value.is_finite() && value >= 1.0 {
        Ok(())
    } else {
        Err(crate::Error::Config(format!(
            "{} must be a finite number of at least 1, got {}",
            key, value
        )))
    }
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
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
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Reject values the animation cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        let anim = &self.animation;
        if anim.node_count == 0 || anim.node_count > MAX_NODE_COUNT {
            return Err(crate::Error::Config(format!(
                "animation.node_count must be in 1..={}, got {}",
                MAX_NODE_COUNT, anim.node_count
            )));
        }
        if anim.segment_count == 0 || anim.segment_count > MAX_SEGMENT_COUNT {
            return Err(crate::Error::Config(format!(
                "animation.segment_count must be in 1..={}, got {}",
                MAX_SEGMENT_COUNT, anim.segment_count
            )));
        }
        if anim.step_gap.is_nan() || anim.step_gap <= 0.0 || anim.step_gap > 1.0 {
            return Err(crate::Error::Config(format!(
                "animation.step_gap must be in (0, 1], got {}",
                anim.step_gap
            )));
        }
        check_divisor("style.stroke_divisor", self.style.stroke_divisor)?;
        check_divisor("style.ball_size_divisor", self.style.ball_size_divisor)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/ballup/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("ballup")
            .join("config.toml")
    }

    /// Get the log file path used while the terminal UI is active
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("ballup.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
