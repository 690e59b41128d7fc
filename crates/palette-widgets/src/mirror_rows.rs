#![forbid(unsafe_code)]

//! Decorative row strips that follow a palette's row count.
//!
//! A strip is stamped out from an immutable [`RowTemplate`]: `rows` copies
//! stacked at `y = i * row_height`, then an optional bottom cap at
//! `y = rows * row_height`. Strips are rebuilt from scratch on every
//! icon-count notification.

use crate::error::TemplateError;
use crate::palette::PaletteCore;
use palette_core::geometry::Rect;
use palette_layout::IconGrid;
use palette_runtime::Subscription;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Template name of the repeated row inside a strip.
pub const ROW_TEMPLATE: &str = "ROW_TEMPLATE";
/// Template name of the optional cap below the background rows.
pub const BOTTOM_CAP: &str = "BOTTOM_CAP";

/// Immutable description of a decoration to instantiate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowTemplate {
    pub name: String,
    pub bounds: Rect,
}

impl RowTemplate {
    #[must_use]
    pub fn new(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    #[inline]
    #[must_use]
    pub fn row_height(&self) -> i32 {
        self.bounds.height
    }

    /// A fresh copy placed at `(x, y)` in the parent's coordinates.
    #[must_use]
    pub fn instantiate(&self, x: i32, y: i32) -> RowInstance {
        RowInstance {
            template: self.name.clone(),
            bounds: Rect::new(x, y, self.bounds.width, self.bounds.height),
        }
    }
}

/// A placed copy of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowInstance {
    pub template: String,
    pub bounds: Rect,
}

/// Templates of one container, looked up by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    templates: FxHashMap<String, RowTemplate>,
}

impl TemplateSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, template: RowTemplate) -> Self {
        self.insert(template);
        self
    }

    pub fn insert(&mut self, template: RowTemplate) {
        self.templates.insert(template.name.clone(), template);
    }

    /// Parse a JSON array of templates.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let list: Vec<RowTemplate> = serde_json::from_str(json)?;
        Ok(list.into_iter().fold(Self::new(), Self::with))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RowTemplate> {
        self.templates.get(name)
    }

    /// Like [`get`](Self::get), but a missing template is an error.
    pub fn require(&self, name: &str) -> Result<&RowTemplate, TemplateError> {
        self.get(name)
            .ok_or_else(|| TemplateError::Missing(name.to_string()))
    }
}

/// One mirrored container and its current children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorStrip {
    row: RowTemplate,
    bottom_cap: Option<RowTemplate>,
    children: Vec<RowInstance>,
}

impl MirrorStrip {
    #[must_use]
    pub fn new(row: RowTemplate, bottom_cap: Option<RowTemplate>) -> Self {
        Self {
            row,
            bottom_cap,
            children: Vec::new(),
        }
    }

    /// Strip from a container's templates: [`ROW_TEMPLATE`] is required,
    /// [`BOTTOM_CAP`] is used when present.
    pub fn from_templates(set: &TemplateSet) -> Result<Self, TemplateError> {
        let row = set.require(ROW_TEMPLATE)?.clone();
        Ok(Self::new(row, set.get(BOTTOM_CAP).cloned()))
    }

    /// Like [`from_templates`](Self::from_templates) but never adds a cap.
    pub fn rows_only(set: &TemplateSet) -> Result<Self, TemplateError> {
        Ok(Self::new(set.require(ROW_TEMPLATE)?.clone(), None))
    }

    /// Replace every child with `rows` fresh rows plus the cap.
    pub fn sync(&mut self, rows: usize) {
        self.children.clear();
        let height = self.row.row_height();
        let mut y = 0;
        for _ in 0..rows {
            self.children.push(self.row.instantiate(self.row.bounds.x, y));
            y = y.saturating_add(height);
        }
        if let Some(cap) = &self.bottom_cap {
            self.children.push(cap.instantiate(cap.bounds.x, y));
        }
    }

    #[must_use]
    pub fn children(&self) -> &[RowInstance] {
        &self.children
    }

    /// Number of repeated rows currently placed, excluding the cap.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.children.len() - usize::from(self.bottom_cap.is_some() && !self.children.is_empty())
    }
}

/// Background and foreground strips behind a palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorRows {
    background: Option<MirrorStrip>,
    foreground: Option<MirrorStrip>,
    rows: usize,
}

impl MirrorRows {
    #[must_use]
    pub fn new(background: Option<MirrorStrip>, foreground: Option<MirrorStrip>) -> Self {
        Self {
            background,
            foreground,
            rows: 0,
        }
    }

    /// Build both strips from their containers' templates. A container that
    /// is absent gets no strip; a container without a row template is an
    /// error. Only the background carries a bottom cap.
    pub fn from_templates(
        background: Option<&TemplateSet>,
        foreground: Option<&TemplateSet>,
    ) -> Result<Self, TemplateError> {
        let background = background.map(MirrorStrip::from_templates).transpose()?;
        let foreground = foreground.map(MirrorStrip::rows_only).transpose()?;
        Ok(Self::new(background, foreground))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.foreground.is_none()
    }

    pub fn sync(&mut self, rows: usize) {
        tracing::trace!(rows, "mirror rows synced");
        self.rows = rows;
        if let Some(strip) = &mut self.background {
            strip.sync(rows);
        }
        if let Some(strip) = &mut self.foreground {
            strip.sync(rows);
        }
    }

    /// Row count of the last sync.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn background(&self) -> Option<&MirrorStrip> {
        self.background.as_ref()
    }

    #[must_use]
    pub fn foreground(&self) -> Option<&MirrorStrip> {
        self.foreground.as_ref()
    }

    /// Keep `rows` in step with `palette`. The strips are only touched
    /// while `visible()` holds, so two palettes can share one set of rows.
    pub fn attach<T: Clone>(
        rows: &Rc<RefCell<Self>>,
        palette: &PaletteCore<T>,
        visible: impl Fn() -> bool + 'static,
    ) -> Subscription {
        let rows = Rc::clone(rows);
        let grid: IconGrid = palette.grid().clone();
        palette.on_icon_count_changed(move |change| {
            if visible() {
                rows.borrow_mut().sync(grid.rows_for(change.new));
            }
        })
    }
}
