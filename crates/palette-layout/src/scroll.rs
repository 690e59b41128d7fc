#![forbid(unsafe_code)]

//! Scroll state for palettes and tab strips.
//!
//! - [`RowWindow`]: whole-row paging over an ordered item list, used by icon
//!   palettes.
//! - [`PixelScroll`]: a continuous, clamped horizontal offset, used by tab
//!   strips with arrow buttons on both ends.
//!
//! # Invariants
//!
//! 1. `RowWindow::offset() <= RowWindow::max_offset()` after every mutation.
//! 2. `PixelScroll::offset()` stays within `[min_offset(), 0]`.
//! 3. Neither type panics on overflow; page capacity saturates to
//!    `usize::MAX`, which callers treat as "no practical limit".

use std::ops::Range;

/// Row-based paging window.
///
/// `max_visible_rows` is the number of rows shown per page. The offset is
/// the number of full rows already scrolled past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWindow {
    offset: usize,
    max_visible_rows: usize,
    columns: usize,
    total_items: usize,
}

impl RowWindow {
    /// Create a window at offset 0 with no items.
    #[must_use]
    pub fn new(columns: usize, max_visible_rows: usize) -> Self {
        Self {
            offset: 0,
            max_visible_rows,
            columns: columns.max(1),
            total_items: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    #[must_use]
    pub fn max_visible_rows(&self) -> usize {
        self.max_visible_rows
    }

    #[inline]
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Rows needed to show every item.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.total_items.div_ceil(self.columns)
    }

    /// Largest valid offset: `max(0, total_rows - max_visible_rows)`.
    #[must_use]
    pub fn max_offset(&self) -> usize {
        self.total_rows().saturating_sub(self.max_visible_rows)
    }

    /// Items that fit on one page. Saturates to `usize::MAX` on overflow.
    #[must_use]
    pub fn page_capacity(&self) -> usize {
        self.max_visible_rows
            .checked_mul(self.columns)
            .unwrap_or(usize::MAX)
    }

    /// True when there are more items than fit on a page.
    #[must_use]
    pub fn is_paged(&self) -> bool {
        self.total_items > self.page_capacity()
    }

    #[must_use]
    pub fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    #[must_use]
    pub fn can_scroll_down(&self) -> bool {
        self.offset < self.max_offset()
    }

    /// Update the item count, clamping the offset. Returns true if the
    /// offset had to move.
    pub fn set_total_items(&mut self, total: usize) -> bool {
        self.total_items = total;
        self.clamp()
    }

    /// Update the page height, clamping the offset. Returns true if the
    /// offset had to move.
    pub fn set_max_visible_rows(&mut self, rows: usize) -> bool {
        self.max_visible_rows = rows;
        self.clamp()
    }

    /// Move up one row. Returns false (and does nothing) at the top.
    pub fn scroll_up(&mut self) -> bool {
        if !self.can_scroll_up() {
            return false;
        }
        self.offset -= 1;
        true
    }

    /// Move down one row. Returns false (and does nothing) at the bottom.
    pub fn scroll_down(&mut self) -> bool {
        if !self.can_scroll_down() {
            return false;
        }
        self.offset += 1;
        true
    }

    /// Reset to the first row.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Index range of the items on the current page.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let start = self
            .offset
            .saturating_mul(self.columns)
            .min(self.total_items);
        let end = start
            .saturating_add(self.page_capacity())
            .min(self.total_items);
        start..end
    }

    fn clamp(&mut self) -> bool {
        let max = self.max_offset();
        if self.offset > max {
            self.offset = max;
            true
        } else {
            false
        }
    }
}

/// Horizontal pixel scroll for a strip of fixed-width tabs between two arrow
/// buttons.
///
/// The offset is `<= 0`: it is added to the content's x position, so
/// negative values reveal tabs further right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelScroll {
    offset: f32,
    viewport_width: f32,
    content_width: f32,
    arrow_width: f32,
}

impl PixelScroll {
    #[must_use]
    pub fn new(viewport_width: f32, arrow_width: f32) -> Self {
        Self {
            offset: 0.0,
            viewport_width,
            content_width: 0.0,
            arrow_width,
        }
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Lower bound of the offset: `min(0, viewport - 2 * arrow - content)`.
    #[must_use]
    pub fn min_offset(&self) -> f32 {
        (self.viewport_width - 2.0 * self.arrow_width - self.content_width).min(0.0)
    }

    /// True while the start (left) arrow would move the strip.
    #[must_use]
    pub fn can_scroll_start(&self) -> bool {
        self.offset < 0.0
    }

    /// True while the end (right) arrow would move the strip.
    #[must_use]
    pub fn can_scroll_end(&self) -> bool {
        self.offset > self.viewport_width - 2.0 * self.arrow_width - self.content_width
    }

    /// Record the measured content width. The offset is not re-clamped
    /// until the next scroll, so shrinking content never jumps the strip
    /// mid-frame.
    pub fn set_content_width(&mut self, width: f32) {
        self.content_width = width;
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Scroll by `amount` pixels (positive toward the start) and clamp.
    pub fn scroll_by(&mut self, amount: f32) {
        self.offset = (self.offset + amount).max(self.min_offset()).min(0.0);
    }

    /// Reset to the start of the strip.
    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}
