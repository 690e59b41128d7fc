#![forbid(unsafe_code)]

//! Container behind a selection palette with one background cell per icon.
//!
//! The bin's width is fixed to the palette grid width at setup. For a
//! bottom-right palette the bin is shifted left by that width once, and on
//! every icon count change its top edge moves so the bottom edge stays put;
//! the palette anchor then follows the bin's bottom-right corner.

use crate::mirror_rows::{RowInstance, RowTemplate};
use crate::palette::PaletteCore;
use palette_core::geometry::{Point, Rect};
use palette_layout::{IconGrid, Origin};
use palette_runtime::Subscription;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug)]
struct BinState {
    bounds: Rect,
    grid: IconGrid,
    cell: Option<RowTemplate>,
    cells: Vec<RowInstance>,
    anchor: Rc<Cell<Point>>,
}

impl BinState {
    fn update(&mut self, icons: usize) {
        let old_height = self.bounds.height;
        self.bounds.height = self.grid.height_for_rows(self.grid.rows_for(icons));

        if self.grid.anchor_corner() == Origin::BottomRight {
            self.bounds.y += old_height - self.bounds.height;
            self.anchor
                .set(Point::new(self.bounds.right(), self.bounds.bottom()));
        }

        self.cells.clear();
        if let Some(cell) = &self.cell {
            let size = self.bounds.size();
            for i in 0..icons {
                let at = self.grid.cell_offset_in(i, size);
                self.cells.push(cell.instantiate(at.x, at.y));
            }
        }
    }
}

/// Selection bin bound to one palette for as long as it lives.
#[derive(Debug)]
pub struct SelectionBin {
    state: Rc<RefCell<BinState>>,
    _subscription: Subscription,
}

impl SelectionBin {
    /// Size the bin around `palette` and follow its icon count. `cell` is
    /// the per-icon background template, if the layout has one.
    pub fn attach<T: Clone>(
        bounds: Rect,
        palette: &PaletteCore<T>,
        cell: Option<RowTemplate>,
    ) -> Self {
        let grid = palette.grid().clone();
        let mut bounds = Rect::new(bounds.x, bounds.y, grid.width(), bounds.height);
        if grid.anchor_corner() == Origin::BottomRight {
            bounds.x -= bounds.width;
        }

        let mut state = BinState {
            bounds,
            grid,
            cell,
            cells: Vec::new(),
            anchor: palette.anchor_handle(),
        };
        state.update(0);

        let state = Rc::new(RefCell::new(state));
        let listener = Rc::clone(&state);
        let subscription =
            palette.on_icon_count_changed(move |change| listener.borrow_mut().update(change.new));
        Self {
            state,
            _subscription: subscription,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.state.borrow().bounds
    }

    /// Background cells in the bin's own coordinates.
    #[must_use]
    pub fn cells(&self) -> Vec<RowInstance> {
        self.state.borrow().cells.clone()
    }
}
