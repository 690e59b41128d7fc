#![forbid(unsafe_code)]

//! Icon palettes for a real-time strategy sidebar.
//!
//! # Role in the workspace
//! `palette-widgets` sits on top of `palette-core` (geometry, events,
//! hotkeys), `palette-layout` (grid placement and paging), and
//! `palette-runtime` (notifiers and the [`palette_runtime::UiContext`]).
//! The game itself is reached only through the traits in [`domain`].
//!
//! # Widgets
//! - [`SelectionPalette`]: one icon per class of selected unit.
//! - [`ProductionPalette`]: one icon per item the current queue can build.
//! - [`ControlGroupTabs`]: queue tabs of one production group.
//! - [`SidebarTabs`]: switches the sidebar between the two palettes.
//! - [`SelectionBin`] and [`MirrorRows`]: decorations that follow a
//!   palette's row count.
//! - [`SelectionTooltip`]: name and hotkey of the hovered icon.
//!
//! [`cycle_subgroups`] is the selection hotkey that steps the foreground
//! selection through its classes.
//!
//! # Frame order
//! Each frame the host calls `tick` with the current domain state, then
//! routes input. A tick compares the domain fingerprint with the last one
//! and only rebuilds on change, so input always hits the icons of the most
//! recent rebuild.

pub mod change_detector;
pub mod config;
pub mod control_group_tabs;
pub mod domain;
pub mod error;
pub mod group;
pub mod hotkeys;
pub mod icon;
pub mod mirror_rows;
pub mod mouse;
pub mod palette;
pub mod production_palette;
pub mod selection_bin;
pub mod selection_palette;
pub mod sidebar;
pub mod subgroups;
pub mod tooltip;

#[cfg(test)]
mod testing;

pub use change_detector::ChangeDetector;
pub use config::{PaletteConfig, SidebarConfig, TabStripConfig};
pub use control_group_tabs::{ControlGroupTabs, QueueTab, TabGroup, TabStripLayout};
pub use domain::{
    BuildableItem, Classifier, Fingerprint, IconArt, PlayerId, ProductionQueue, QueueId,
    QueueProvider, QueuedItem, SelectionDomain, SelectionItem, TextMeasure,
};
pub use error::{ConfigError, LintIssue, Severity, TemplateError};
pub use group::{ClassGroup, ClassGroups};
pub use hotkeys::HotkeyBinder;
pub use icon::{Icon, IconMap};
pub use mirror_rows::{MirrorRows, MirrorStrip, RowTemplate, TemplateSet};
pub use mouse::MouseResult;
pub use palette::{IconCountChanged, PaletteCore, PaletteEntry};
pub use production_palette::ProductionPalette;
pub use selection_bin::SelectionBin;
pub use selection_palette::SelectionPalette;
pub use sidebar::{ActivePalette, ButtonState, ScrollButtons, SidebarTabs};
pub use subgroups::cycle_subgroups;
pub use tooltip::{SelectionTooltip, TooltipLayout};
