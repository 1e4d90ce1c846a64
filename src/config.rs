//! Page configuration.
//!
//! The page can override the built-in defaults with a JSON document, either
//! embedded in the page (`<script type="application/json" id="folio-config">`)
//! or, for the native checker, read from a file.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, default_catalog};
use crate::constants::{self, reveal};
use crate::keybindings::KeyBindings;

/// Log level setting for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Scroll-to-section settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Id of the section the call-to-action button scrolls to
    #[serde(default = "default_scroll_target")]
    pub target_section: String,
}

fn default_scroll_target() -> String {
    constants::DEFAULT_SCROLL_TARGET.to_string()
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            target_section: default_scroll_target(),
        }
    }
}

/// Fade-in tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Visible fraction that counts as "in view" (0.0 - 1.0)
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Bottom root margin in pixels
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin_px: i32,
    /// Downward offset of hidden cards in pixels
    #[serde(default = "default_offset")]
    pub offset_px: f32,
    /// Transition duration in seconds
    #[serde(default = "default_transition")]
    pub transition_secs: f32,
}

fn default_threshold() -> f64 {
    reveal::THRESHOLD
}

fn default_bottom_margin() -> i32 {
    reveal::BOTTOM_MARGIN_PX
}

fn default_offset() -> f32 {
    reveal::OFFSET_PX
}

fn default_transition() -> f32 {
    reveal::TRANSITION_SECS
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            bottom_margin_px: default_bottom_margin(),
            offset_px: default_offset(),
            transition_secs: default_transition(),
        }
    }
}

impl RevealConfig {
    /// Root margin string for the intersection observer.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }

    /// Inline `transform` of a hidden card.
    pub fn hidden_transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }

    /// Inline `transition` of every card.
    pub fn transition(&self) -> String {
        format!(
            "opacity {secs}s ease, transform {secs}s ease",
            secs = self.transition_secs
        )
    }
}

/// Page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Log verbosity
    #[serde(default)]
    pub log_level: LogLevel,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub keybindings: KeyBindings,

    /// Gallery images per project key
    #[serde(default = "default_catalog")]
    pub galleries: Catalog,
}

impl PageConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            keybindings: KeyBindings::default(),
            galleries: default_catalog(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and gallery entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reveal = &self.reveal;
        if !(0.0..=1.0).contains(&reveal.threshold) {
            return Err(ConfigError::Invalid(format!(
                "reveal.threshold must be between 0 and 1, got {}",
                reveal.threshold
            )));
        }
        if reveal.offset_px < 0.0 || reveal.transition_secs < 0.0 {
            return Err(ConfigError::Invalid(
                "reveal.offset_px and reveal.transition_secs must not be negative".to_string(),
            ));
        }
        if self.scroll.target_section.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "scroll.target_section must not be empty".to_string(),
            ));
        }
        for (id, images) in self.galleries.iter() {
            if let Some(position) = images.iter().position(|image| image.src.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "gallery '{}' image {} has an empty src",
                    id, position
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from a file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load configuration from the page's embedded JSON block.
    /// Returns `Ok(None)` if the page has no such block.
    #[cfg(target_arch = "wasm32")]
    pub fn from_document(document: &web_sys::Document) -> Result<Option<Self>, ConfigError> {
        let Some(element) = document.get_element_by_id(constants::gallery_ids::CONFIG) else {
            return Ok(None);
        };

        let json = element.text_content().unwrap_or_default();
        Self::from_json(&json).map(Some)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Value out of range or otherwise unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectId;

    #[test]
    fn test_defaults() {
        let config = PageConfig::new();
        assert_eq!(config.reveal.root_margin(), "0px 0px -50px 0px");
        assert_eq!(config.reveal.hidden_transform(), "translateY(20px)");
        assert_eq!(
            config.reveal.transition(),
            "opacity 0.6s ease, transform 0.6s ease"
        );
        assert_eq!(config.scroll.target_section, "projects");
        assert_eq!(config.galleries.len(), 2);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let config = PageConfig::from_json(r#"{"version": 1}"#).unwrap();
        assert_eq!(config, PageConfig::new());
    }

    #[test]
    fn test_roundtrip() {
        let config = PageConfig::new();
        let parsed = PageConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_custom_galleries_replace_defaults() {
        let json = r#"{
            "version": 1,
            "log_level": "debug",
            "galleries": {
                "project3": [
                    {"src": "images/p3-a.png", "alt": "First"},
                    {"src": "images/p3-b.png"}
                ]
            }
        }"#;
        let config = PageConfig::from_json(json).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.galleries.len(), 1);

        let images = config.galleries.configured(&ProjectId::new("project3"));
        assert_eq!(images.len(), 2);
        assert_eq!(images[1].alt, "");
    }

    #[test]
    fn test_version_too_new() {
        let err = PageConfig::from_json(r#"{"version": 2}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 2,
                supported_version: 1
            }
        ));
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let err = PageConfig::from_json(r#"{"version": 1, "reveal": {"threshold": 1.5}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_empty_src() {
        let json = r#"{"version": 1, "galleries": {"p": [{"src": " ", "alt": "x"}]}}"#;
        assert!(matches!(
            PageConfig::from_json(json),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            PageConfig::from_json("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
