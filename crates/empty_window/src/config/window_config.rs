//! Window creation parameters

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};

/// Default client-area width in pixels
pub const DEFAULT_WIDTH: u32 = 800;
/// Default client-area height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default window title
pub const DEFAULT_TITLE: &str = "Window with Icon";
/// Default icon, resolved against the working directory
pub const DEFAULT_ICON_PATH: &str = "icon.png";

/// Parameters for creating the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Client-area width in pixels
    pub width: u32,
    /// Client-area height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
    /// PNG to use as the window icon; `None` keeps the platform default
    pub icon_path: Option<PathBuf>,
    /// Wait for vertical sync when presenting
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a config with the given size and title and default everything else
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Replace the icon path
    #[must_use]
    pub fn with_icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon_path = Some(path.into());
        self
    }

    /// Keep the platform default icon
    #[must_use]
    pub fn without_icon(mut self) -> Self {
        self.icon_path = None;
        self
    }

    /// Check the values can be handed to GLFW
    ///
    /// GLFW takes dimensions as C `int`s and the title as a C string, so
    /// both dimensions must be in `1..=i32::MAX` and the title must not
    /// contain a NUL byte.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = i32::MAX.unsigned_abs();
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > max || self.height > max {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} exceeds {max}",
                self.width, self.height
            )));
        }
        if self.title.contains('\0') {
            return Err(ConfigError::Invalid(
                "window title contains a NUL byte".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from `path`, falling back to the defaults
    ///
    /// A missing file is the normal case and is not reported. A file that
    /// cannot be read or parsed is logged as a warning.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from_file(&path.to_string_lossy()) {
            Ok(config) => {
                log::info!("Loaded window config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            icon_path: Some(PathBuf::from(DEFAULT_ICON_PATH)),
            vsync: true,
        }
    }
}

impl Config for WindowConfig {}
