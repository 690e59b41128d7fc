#![forbid(unsafe_code)]

//! Icon grid placement for palette widgets.
//!
//! An [`IconGrid`] maps a linear display index to a pixel rectangle:
//! - a fixed column count, row-major order
//! - uniform icon size plus a per-axis margin (the cell stride)
//! - one of two corner anchors ([`Origin`])
//! - a `[minimum_rows, maximum_rows]` clamp used to size the container
//!
//! # Example
//!
//! ```
//! use palette_core::geometry::{Point, Rect, Size};
//! use palette_layout::grid::{IconGrid, Origin};
//!
//! let grid = IconGrid::new(3)
//!     .icon_size(Size::new(62, 48))
//!     .origin(Origin::TopLeft);
//!
//! // Index 4 is row 1, column 1.
//! assert_eq!(grid.rect_for(4, Point::new(100, 0)), Rect::new(162, 48, 62, 48));
//! ```
//!
//! # Bottom-right anchoring
//!
//! With [`Origin::BottomRight`] the anchor is the container's bottom-right
//! corner and cells grow leftward and upward. When the row count changes the
//! container's top edge moves by the height delta so the anchor stays put on
//! screen; see [`IconGrid::resize_bounds`].

use palette_core::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Corner from which grid rectangles are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// Cells grow right and down from the anchor.
    #[default]
    TopLeft,
    /// Cells grow left and up from the anchor.
    BottomRight,
}

impl Origin {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown origin keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOriginError(pub String);

impl fmt::Display for ParseOriginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown origin {:?} (expected \"top-left\" or \"bottom-right\")",
            self.0
        )
    }
}

impl std::error::Error for ParseOriginError {}

impl FromStr for Origin {
    type Err = ParseOriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(Self::TopLeft),
            "bottom-right" => Ok(Self::BottomRight),
            other => Err(ParseOriginError(other.to_string())),
        }
    }
}

#[inline]
fn px(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Placement policy for a palette's icon cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconGrid {
    columns: usize,
    icon_size: Size,
    margin: Size,
    origin: Origin,
    minimum_rows: usize,
    maximum_rows: usize,
}

impl Default for IconGrid {
    fn default() -> Self {
        Self::new(3)
    }
}

impl IconGrid {
    /// Create a grid with `columns` columns (at least one), 62×48 icons, no
    /// margin, top-left origin, and an unclamped row count.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            icon_size: Size::new(62, 48),
            margin: Size::ZERO,
            origin: Origin::TopLeft,
            minimum_rows: 0,
            maximum_rows: usize::MAX,
        }
    }

    /// Set the icon size.
    #[must_use]
    pub fn icon_size(mut self, size: Size) -> Self {
        self.icon_size = size;
        self
    }

    /// Set the gap added after each icon on both axes.
    #[must_use]
    pub fn margin(mut self, margin: Size) -> Self {
        self.margin = margin;
        self
    }

    /// Set the anchor corner.
    #[must_use]
    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Set the row clamp used for container sizing.
    #[must_use]
    pub fn rows(mut self, minimum: usize, maximum: usize) -> Self {
        self.minimum_rows = minimum;
        self.maximum_rows = maximum;
        self
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    #[must_use]
    pub fn icon(&self) -> Size {
        self.icon_size
    }

    #[inline]
    #[must_use]
    pub fn cell_margin(&self) -> Size {
        self.margin
    }

    #[inline]
    #[must_use]
    pub fn anchor_corner(&self) -> Origin {
        self.origin
    }

    #[inline]
    #[must_use]
    pub fn minimum_rows(&self) -> usize {
        self.minimum_rows
    }

    #[inline]
    #[must_use]
    pub fn maximum_rows(&self) -> usize {
        self.maximum_rows
    }

    /// Icon size plus margin.
    #[inline]
    #[must_use]
    pub fn stride(&self) -> Size {
        self.icon_size + self.margin
    }

    /// Rectangle of the cell at `index` relative to `anchor`.
    #[must_use]
    pub fn rect_for(&self, index: usize, anchor: Point) -> Rect {
        let stride = self.stride();
        let col = px(index % self.columns);
        let row = px(index / self.columns);
        let dx = col.saturating_mul(stride.width);
        let dy = row.saturating_mul(stride.height);

        let (x, y) = match self.origin {
            Origin::TopLeft => (anchor.x.saturating_add(dx), anchor.y.saturating_add(dy)),
            Origin::BottomRight => (
                anchor.x.saturating_sub(stride.width).saturating_sub(dx),
                anchor.y.saturating_sub(stride.height).saturating_sub(dy),
            ),
        };
        Rect::from_parts(Point::new(x, y), self.icon_size)
    }

    /// Number of rows used to size the container when `displayed` icons are
    /// shown: `ceil(displayed / columns)` clamped to the row bounds, with the
    /// maximum taking precedence.
    #[must_use]
    pub fn rows_for(&self, displayed: usize) -> usize {
        let needed = displayed.div_ceil(self.columns);
        needed.max(self.minimum_rows).min(self.maximum_rows)
    }

    /// Container width: every column including its trailing margin.
    #[must_use]
    pub fn width(&self) -> i32 {
        px(self.columns).saturating_mul(self.stride().width)
    }

    /// Container height for `rows` rows.
    #[must_use]
    pub fn height_for_rows(&self, rows: usize) -> i32 {
        px(rows).saturating_mul(self.stride().height)
    }

    /// The anchor point implied by a container rectangle.
    #[must_use]
    pub fn anchor_of(&self, bounds: Rect) -> Point {
        match self.origin {
            Origin::TopLeft => bounds.location(),
            Origin::BottomRight => Point::new(bounds.right(), bounds.bottom()),
        }
    }

    /// Resize `bounds` to hold `rows` rows.
    ///
    /// The width is left alone. For a bottom-right origin the top edge
    /// moves by the height delta so the bottom edge stays fixed.
    #[must_use]
    pub fn resize_bounds(&self, bounds: Rect, rows: usize) -> Rect {
        let new_height = self.height_for_rows(rows);
        let mut out = Rect::new(bounds.x, bounds.y, bounds.width, new_height);
        if self.origin == Origin::BottomRight {
            out.y = bounds.y + (bounds.height - new_height);
        }
        out
    }

    /// Offset of cell `index` inside a container of size `container`, for
    /// decorations laid out in the container's own coordinate space.
    #[must_use]
    pub fn cell_offset_in(&self, index: usize, container: Size) -> Point {
        let stride = self.stride();
        let dx = px(index % self.columns).saturating_mul(stride.width);
        let dy = px(index / self.columns).saturating_mul(stride.height);
        match self.origin {
            Origin::TopLeft => Point::new(dx, dy),
            Origin::BottomRight => Point::new(
                container.width - self.icon_size.width - dx,
                container.height - self.icon_size.height - dy,
            ),
        }
    }
}
