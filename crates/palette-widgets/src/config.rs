#![forbid(unsafe_code)]

//! Declarative widget configuration.
//!
//! These are the fields a layout file sets on a palette, tab strip, or
//! sidebar. Every field has a default, so an empty JSON object is a valid
//! configuration.
//!
//! # Example
//!
//! ```
//! use palette_widgets::config::PaletteConfig;
//!
//! let cfg = PaletteConfig::from_json(r#"{ "columns": 4, "hotkey_prefix": "Sel", "hotkey_count": 8 }"#)
//!     .expect("valid config");
//! assert_eq!(cfg.columns, 4);
//! assert!(cfg.lint("SELECTION_PALETTE").is_empty());
//! ```

use crate::error::{ConfigError, LintIssue};
use palette_core::geometry::{Point, Size};
use palette_core::keybinding::lint_hotkey_names;
use palette_layout::{IconGrid, Origin};
use palette_runtime::ClickSounds;
use serde::{Deserialize, Serialize};

/// Settings for a selection or production palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub columns: usize,
    pub minimum_rows: usize,
    /// `None` means unbounded.
    pub maximum_rows: Option<usize>,
    /// Rows shown per page. `None` means unbounded.
    pub max_icon_row_offset: Option<usize>,
    pub icon_size: Size,
    pub icon_margin: Size,
    pub icon_sprite_offset: Point,
    pub icon_scale: f32,
    pub count_offset: Point,
    pub origin: Origin,
    pub hotkey_prefix: Option<String>,
    pub hotkey_count: usize,
    pub click_sound: String,
    pub click_disabled_sound: String,
    pub tooltip_container: Option<String>,
    pub tooltip_template: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            minimum_rows: 4,
            maximum_rows: None,
            max_icon_row_offset: None,
            icon_size: Size::new(62, 48),
            icon_margin: Size::ZERO,
            icon_sprite_offset: Point::ZERO,
            icon_scale: 1.0,
            count_offset: Point::new(4, 2),
            origin: Origin::TopLeft,
            hotkey_prefix: None,
            hotkey_count: 0,
            click_sound: "ClickSound".to_string(),
            click_disabled_sound: "ClickDisabledSound".to_string(),
            tooltip_container: None,
            tooltip_template: "SELECTION_PALETTE_TOOLTIP".to_string(),
        }
    }
}

impl PaletteConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no palette can be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.icon_size.is_empty() {
            return Err(ConfigError::EmptyIconSize(self.icon_size));
        }
        Ok(())
    }

    /// Static checks run when layouts are loaded. `location` names the
    /// widget in messages.
    #[must_use]
    pub fn lint(&self, location: &str) -> Vec<LintIssue> {
        let hotkeys = lint_hotkey_names(location, self.hotkey_prefix.as_deref(), self.hotkey_count);
        let mut issues: Vec<LintIssue> = hotkeys.problems.into_iter().map(LintIssue::error).collect();
        if self.minimum_rows > self.maximum_rows() {
            issues.push(LintIssue::warning(format!(
                "{location} has MinimumRows {} above MaximumRows {}; MaximumRows wins.",
                self.minimum_rows,
                self.maximum_rows()
            )));
        }
        issues
    }

    #[must_use]
    pub fn maximum_rows(&self) -> usize {
        self.maximum_rows.unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn max_icon_row_offset(&self) -> usize {
        self.max_icon_row_offset.unwrap_or(usize::MAX)
    }

    /// Grid placement policy described by this configuration.
    #[must_use]
    pub fn grid(&self) -> IconGrid {
        IconGrid::new(self.columns)
            .icon_size(self.icon_size)
            .margin(self.icon_margin)
            .origin(self.origin)
            .rows(self.minimum_rows, self.maximum_rows())
    }

    #[must_use]
    pub fn sounds(&self) -> ClickSounds {
        ClickSounds {
            enabled: self.click_sound.clone(),
            disabled: self.click_disabled_sound.clone(),
        }
    }
}

/// Settings for a production tab strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabStripConfig {
    pub tab_width: i32,
    pub arrow_width: i32,
    /// Pixels per scroll step. Falls back to the UI context's speed.
    pub scroll_speed: Option<f32>,
    pub click_sound: String,
    pub click_disabled_sound: String,
}

impl Default for TabStripConfig {
    fn default() -> Self {
        Self {
            tab_width: 30,
            arrow_width: 20,
            scroll_speed: None,
            click_sound: "ClickSound".to_string(),
            click_disabled_sound: "ClickDisabledSound".to_string(),
        }
    }
}

impl TabStripConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        if config.tab_width < 2 {
            return Err(ConfigError::TabTooNarrow(config.tab_width));
        }
        Ok(config)
    }

    #[must_use]
    pub fn sounds(&self) -> ClickSounds {
        ClickSounds {
            enabled: self.click_sound.clone(),
            disabled: self.click_disabled_sound.clone(),
        }
    }
}

/// Settings for the sidebar that hosts both palettes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Top edge of the production container. Without it the page height is
    /// left as configured on each palette.
    pub container_y: Option<i32>,
}

impl SidebarConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Rows that fit between the container top and the bottom of the
    /// screen, keeping one row spare, capped at `maximum_rows`.
    #[must_use]
    pub fn max_row_offset(
        &self,
        screen_height: i32,
        icon_height: i32,
        maximum_rows: usize,
    ) -> Option<usize> {
        let top = self.container_y?;
        if icon_height <= 0 {
            return None;
        }
        let fit = (screen_height - top) / icon_height - 1;
        let fit = usize::try_from(fit).unwrap_or(0);
        Some(fit.min(maximum_rows))
    }
}
