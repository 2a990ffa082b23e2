use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
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

/// Easing curve used by the terminal viewport's smooth scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the animation
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Smooth scrolling animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate non-instant scrolls
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of a smooth scroll in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Rows moved per manual scroll step
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

/// Tunables of the auto-scroll policy engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Auto-scroll stays suppressed this long after manual scroll input
    #[serde(default = "default_user_scroll_cooldown")]
    pub user_scroll_cooldown_ms: u64,
    /// Position delta (ms) between two ticks treated as a seek
    #[serde(default = "default_drastic_jump_threshold")]
    pub drastic_jump_threshold_ms: f64,
    /// Delay before scrolling to a line that follows a dot line
    #[serde(default = "default_dot_line_delay")]
    pub dot_line_delay_ms: u64,
    /// Initial value of the force-scrolling policy
    #[serde(default = "default_true")]
    pub allow_force_scrolling: bool,
    /// Offset applied to center-aligned scrolls
    #[serde(default = "default_center_offset")]
    pub center_offset: i32,
    /// Offset applied to top-aligned scrolls
    #[serde(default = "default_top_offset")]
    pub top_offset: i32,
    /// Offset applied to top-aligned scrolls in picture-in-picture mode
    #[serde(default = "default_pip_top_offset")]
    pub pip_top_offset: i32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            user_scroll_cooldown_ms: default_user_scroll_cooldown(),
            drastic_jump_threshold_ms: default_drastic_jump_threshold(),
            dot_line_delay_ms: default_dot_line_delay(),
            allow_force_scrolling: default_true(),
            center_offset: default_center_offset(),
            top_offset: default_top_offset(),
            pip_top_offset: default_pip_top_offset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Start in compact layout (top-aligned scrolling)
    #[serde(default)]
    pub compact_mode: bool,
    /// Start in picture-in-picture layout
    #[serde(default)]
    pub pip_mode: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            compact_mode: false,
            pip_mode: false,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lyricscroll")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    150
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_user_scroll_cooldown() -> u64 {
    750
}

fn default_drastic_jump_threshold() -> f64 {
    1000.0
}

fn default_dot_line_delay() -> u64 {
    240
}

// Offsets are in terminal rows
fn default_center_offset() -> i32 {
    -1
}

fn default_top_offset() -> i32 {
    2
}

fn default_pip_top_offset() -> i32 {
    1
}

fn default_tick_rate() -> u64 {
    50
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
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/lyricscroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("lyricscroll")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("lyricscroll.log")
    }
}
