//! Property-based invariant tests for icon grid placement and row paging.
//!
//! 1. Cells on one page never overlap, under either origin.
//! 2. Every cell has exactly the configured icon size.
//! 3. Row count respects the clamp and covers the displayed icons.
//! 4. Scroll predicates match the offset bounds for every reachable offset.
//! 5. The offset stays in range whatever the item count does.
//! 6. Pixel scroll offset stays within `[min_offset, 0]`.

use palette_core::geometry::{Point, Size};
use palette_layout::{IconGrid, Origin, PixelScroll, RowWindow};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn origin_strategy() -> impl Strategy<Value = Origin> {
    prop_oneof![Just(Origin::TopLeft), Just(Origin::BottomRight)]
}

fn grid_strategy() -> impl Strategy<Value = IconGrid> {
    (
        1usize..=8,
        1i32..=80,
        1i32..=80,
        0i32..=10,
        0i32..=10,
        origin_strategy(),
    )
        .prop_map(|(cols, w, h, mx, my, origin)| {
            IconGrid::new(cols)
                .icon_size(Size::new(w, h))
                .margin(Size::new(mx, my))
                .origin(origin)
        })
}

fn anchor_strategy() -> impl Strategy<Value = Point> {
    (-500i32..=500, -500i32..=500).prop_map(|(x, y)| Point::new(x, y))
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cells_never_overlap(
        grid in grid_strategy(),
        anchor in anchor_strategy(),
        rows in 1usize..=6,
    ) {
        let count = grid.columns() * rows;
        let rects: Vec<_> = (0..count).map(|i| grid.rect_for(i, anchor)).collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                prop_assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn cells_have_icon_size(
        grid in grid_strategy(),
        anchor in anchor_strategy(),
        index in 0usize..64,
    ) {
        let rect = grid.rect_for(index, anchor);
        prop_assert_eq!(rect.size(), grid.icon());
    }

    #[test]
    fn placement_is_deterministic(
        grid in grid_strategy(),
        anchor in anchor_strategy(),
        index in 0usize..64,
    ) {
        prop_assert_eq!(grid.rect_for(index, anchor), grid.rect_for(index, anchor));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Row sizing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rows_respect_clamp(
        cols in 1usize..=8,
        min in 0usize..=6,
        extra in 0usize..=6,
        displayed in 0usize..=100,
    ) {
        let max = min + extra;
        let grid = IconGrid::new(cols).rows(min, max);
        let rows = grid.rows_for(displayed);
        prop_assert!(rows >= min && rows <= max);
        if displayed.div_ceil(cols) <= max {
            prop_assert!(rows * cols >= displayed);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–5. Row paging
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_predicates_match_offset(
        cols in 1usize..=6,
        visible in 1usize..=5,
        total in 0usize..=80,
        downs in 0usize..=20,
    ) {
        let mut w = RowWindow::new(cols, visible);
        w.set_total_items(total);
        for _ in 0..downs {
            w.scroll_down();
        }
        let max = w.total_rows().saturating_sub(visible);
        prop_assert!(w.offset() <= max);
        prop_assert_eq!(w.can_scroll_up(), w.offset() > 0);
        prop_assert_eq!(w.can_scroll_down(), w.offset() < max);
    }

    #[test]
    fn offset_survives_total_changes(
        cols in 1usize..=6,
        visible in 0usize..=5,
        totals in proptest::collection::vec(0usize..=60, 1..10),
    ) {
        let mut w = RowWindow::new(cols, visible);
        for total in totals {
            w.set_total_items(total);
            while w.scroll_down() {}
            prop_assert!(w.offset() <= w.max_offset());
            let range = w.visible_range();
            prop_assert!(range.start <= range.end && range.end <= total);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Pixel scroll
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pixel_offset_stays_clamped(
        viewport in 0.0f32..=400.0,
        arrow in 0.0f32..=40.0,
        content in 0.0f32..=1000.0,
        steps in proptest::collection::vec(-100.0f32..=100.0, 0..20),
    ) {
        let mut s = PixelScroll::new(viewport, arrow);
        s.set_content_width(content);
        for step in steps {
            s.scroll_by(step);
            prop_assert!(s.offset() <= 0.0);
            prop_assert!(s.offset() >= s.min_offset());
        }
    }
}
