//! Gallery configuration module.
//!
//! Handles loading, validating, and merging the gallery's TOML config file.
//! Stock defaults are serialized to a TOML table and the user's file is
//! merged on top, so a config file only needs the keys it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [page]
//! title = "Gallery"
//! site_title = "My Site"
//! path = "/gallery/"         # Canonical path, also the output subdirectory
//! description = ""
//! # meta_image = "/images/social.jpg"
//! intro = ""                 # Markdown shown above the grid
//!
//! [reveal]
//! initial_count = 20         # Items shown on first visit
//! step = 20                  # Items added per growth
//! threshold = 100.0          # Distance to bottom (px) that triggers growth
//!
//! [source]
//! # category = "tiny-paintings"
//!
//! [theme]
//! columns = 3                # Masonry column count
//! gap = "1rem"               # Gap between grid items
//! max_width = "1100px"       # Content width
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! placeholder = "#f0f0f0"    # Shown behind images while they load
//! link = "#333333"
//! link_hover = "#000000"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! placeholder = "#1c1c1c"
//! link = "#cccccc"
//! link_hover = "#ffffff"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from a TOML file.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Page identity and head metadata.
    pub page: PageConfig,
    /// Incremental reveal tuning.
    pub reveal: RevealConfig,
    /// Post selection from the manifest.
    pub source: SourceConfig,
    /// Grid layout settings.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reveal.initial_count == 0 {
            return Err(ConfigError::Validation(
                "reveal.initial_count must be non-zero".into(),
            ));
        }
        if self.reveal.step == 0 {
            return Err(ConfigError::Validation(
                "reveal.step must be non-zero".into(),
            ));
        }
        if !self.reveal.threshold.is_finite() || self.reveal.threshold < 0.0 {
            return Err(ConfigError::Validation(
                "reveal.threshold must be a non-negative number".into(),
            ));
        }
        if !self.page.path.starts_with('/') || !self.page.path.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "page.path must start and end with '/': {}",
                self.page.path
            )));
        }
        if self.page.path.split('/').any(|segment| segment == "..") {
            return Err(ConfigError::Validation(format!(
                "page.path must not contain '..' segments: {}",
                self.page.path
            )));
        }
        if self.theme.columns == 0 {
            return Err(ConfigError::Validation(
                "theme.columns must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Full `<title>` text: page title followed by the site title.
    pub fn document_title(&self) -> String {
        if self.page.site_title.is_empty() {
            self.page.title.clone()
        } else {
            format!("{} - {}", self.page.title, self.page.site_title)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub title: String,
    pub site_title: String,
    /// Canonical path; the page is written to `<output>/<path>/index.html`.
    pub path: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_image: Option<String>,
    /// Markdown rendered between the cover image and the grid.
    pub intro: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Gallery".to_string(),
            site_title: String::new(),
            path: "/gallery/".to_string(),
            description: String::new(),
            meta_image: None,
            intro: String::new(),
        }
    }
}

/// Incremental reveal tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Number of items shown before any growth.
    pub initial_count: usize,
    /// Number of items added per growth.
    pub step: usize,
    /// Growth triggers when the distance to the bottom of the document is
    /// strictly below this, in layout pixels.
    pub threshold: f64,
}

pub const DEFAULT_REVEAL_COUNT: usize = 20;
pub const DEFAULT_REVEAL_STEP: usize = 20;
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 100.0;

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            initial_count: DEFAULT_REVEAL_COUNT,
            step: DEFAULT_REVEAL_STEP,
            threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

/// Post selection from the manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Only posts carrying this category are shown. All posts when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub columns: u32,
    pub gap: String,
    pub max_width: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            gap: "1rem".to_string(),
            max_width: "1100px".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    pub text_muted: String,
    /// Background behind images that haven't loaded yet.
    pub placeholder: String,
    pub link: String,
    pub link_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            placeholder: "#f0f0f0".to_string(),
            link: "#333333".to_string(),
            link_hover: "#000000".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            placeholder: "#1c1c1c".to_string(),
            link: "#cccccc".to_string(),
            link_hover: "#ffffff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and
/// validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML file.
///
/// A missing file yields the stock defaults. A file that exists but fails to
/// parse or validate is an error.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using stock defaults");
        return resolve_config(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Masonry Gallery Configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Page identity
# ---------------------------------------------------------------------------
[page]
title = "Gallery"
# Appended to the title in <title>: "Gallery - My Site"
site_title = ""
# Canonical path. The page is written to <output>/<path>/index.html.
path = "/gallery/"
description = ""
# Social preview image (og:image).
# meta_image = "/images/social.jpg"
# Markdown shown between the cover image and the grid.
intro = ""

# ---------------------------------------------------------------------------
# Incremental reveal
# ---------------------------------------------------------------------------
[reveal]
# Items shown on a fresh visit. The static page always renders this many.
initial_count = 20
# Items added by "Load more" and by each scroll-triggered growth.
step = 20
# Scroll growth triggers when the distance to the bottom of the page drops
# below this many pixels. Only active after "Load more" was used once.
threshold = 100.0

# ---------------------------------------------------------------------------
# Post selection
# ---------------------------------------------------------------------------
[source]
# Only posts listing this category are shown. Omit to show all posts.
# category = "tiny-paintings"

# ---------------------------------------------------------------------------
# Grid layout
# ---------------------------------------------------------------------------
[theme]
columns = 3
gap = "1rem"
max_width = "1100px"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"
placeholder = "#f0f0f0"
link = "#333333"
link_hover = "#000000"

[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
placeholder = "#1c1c1c"
link = "#cccccc"
link_hover = "#ffffff"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-placeholder: {light_placeholder};
    --color-link: {light_link};
    --color-link-hover: {light_link_hover};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-placeholder: {dark_placeholder};
        --color-link: {dark_link};
        --color-link-hover: {dark_link_hover};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_placeholder = colors.light.placeholder,
        light_link = colors.light.link,
        light_link_hover = colors.light.link_hover,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_placeholder = colors.dark.placeholder,
        dark_link = colors.dark.link,
        dark_link_hover = colors.dark.link_hover,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --grid-columns: {columns};
    --grid-gap: {gap};
    --content-max-width: {max_width};
}}"#,
        columns = theme.columns,
        gap = theme.gap,
        max_width = theme.max_width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_reveal_settings() {
        let config = GalleryConfig::default();
        assert_eq!(config.reveal.initial_count, 20);
        assert_eq!(config.reveal.step, 20);
        assert_eq!(config.reveal.threshold, 100.0);
    }

    #[test]
    fn default_colors_use_dark_scheme_for_dark() {
        let colors = ColorConfig::default();
        assert_eq!(colors.light.background, "#ffffff");
        assert_eq!(colors.dark.background, "#0a0a0a");
        assert_eq!(colors.dark.placeholder, "#1c1c1c");
    }

    #[test]
    fn default_config_validates() {
        GalleryConfig::default().validate().unwrap();
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[page]
title = "Tiny paintings"
path = "/tiny-paintings/"
"##;
        let config: GalleryConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.page.title, "Tiny paintings");
        assert_eq!(config.page.path, "/tiny-paintings/");
        // Defaults preserved
        assert_eq!(config.reveal.initial_count, 20);
        assert_eq!(config.colors.light.background, "#ffffff");
    }

    #[test]
    fn integer_threshold_is_accepted() {
        let overlay: toml::Value = toml::from_str("[reveal]\nthreshold = 250").unwrap();
        let config = resolve_config(Some(overlay)).unwrap();
        assert_eq!(config.reveal.threshold, 250.0);
    }

    #[test]
    fn unknown_keys_rejected() {
        let overlay: toml::Value = toml::from_str("[reveal]\nbatch = 5").unwrap();
        assert!(matches!(
            resolve_config(Some(overlay)),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_step() {
        let mut config = GalleryConfig::default();
        config.reveal.step = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_zero_initial_count() {
        let mut config = GalleryConfig::default();
        config.reveal.initial_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_threshold() {
        let mut config = GalleryConfig::default();
        config.reveal.threshold = -1.0;
        assert!(config.validate().is_err());
        config.reveal.threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unslashed_path() {
        let mut config = GalleryConfig::default();
        config.page.path = "gallery".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page.path"));
    }

    #[test]
    fn validate_rejects_parent_segments_in_path() {
        let mut config = GalleryConfig::default();
        config.page.path = "/../../x/".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'..'"));

        config.page.path = "/paintings/../x/".into();
        assert!(config.validate().is_err());

        // Dots inside a segment are fine.
        config.page.path = "/tiny..paintings/".into();
        config.validate().unwrap();
    }

    #[test]
    fn document_title_appends_site_title() {
        let mut config = GalleryConfig::default();
        config.page.title = "Tiny paintings".into();
        assert_eq!(config.document_title(), "Tiny paintings");
        config.page.site_title = "Made Mistakes".into();
        assert_eq!(config.document_title(), "Tiny paintings - Made Mistakes");
    }

    #[test]
    fn merge_toml_keeps_unrelated_keys() {
        let base: toml::Value = toml::from_str("[a]\nx = 1\ny = 2").unwrap();
        let overlay: toml::Value = toml::from_str("[a]\ny = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"]["x"].as_integer(), Some(1));
        assert_eq!(merged["a"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("gallery.toml")).unwrap();
        assert_eq!(config.page.path, "/gallery/");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gallery.toml");
        fs::write(
            &path,
            r##"
[reveal]
initial_count = 12

[colors.dark]
background = "#000000"
"##,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.reveal.initial_count, 12);
        assert_eq!(config.reveal.step, 20);
        assert_eq!(config.colors.dark.background, "#000000");
        assert_eq!(config.colors.dark.text, "#eeeeee");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gallery.toml");
        fs::write(&path, "[reveal\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: GalleryConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = GalleryConfig::default();
        assert_eq!(config.reveal, defaults.reveal);
        assert_eq!(config.page.path, defaults.page.path);
        assert_eq!(config.theme.columns, defaults.theme.columns);
        assert_eq!(config.colors.dark.placeholder, defaults.colors.dark.placeholder);
    }

    #[test]
    fn generate_css_uses_config_values() {
        let mut colors = ColorConfig::default();
        colors.light.placeholder = "#eeeeee".to_string();
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-placeholder: #eeeeee"));

        let mut theme = ThemeConfig::default();
        theme.columns = 4;
        assert!(generate_theme_css(&theme).contains("--grid-columns: 4"));
    }
}
