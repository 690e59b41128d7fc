//! Property-based invariants of the selection palette.
//!
//! 1. A tick with an unchanged selection never rebuilds or notifies.
//! 2. Display slot `i` carries a hotkey iff `i < min(hotkey_count, displayed)`.
//! 3. After paging, the slots are bound to display positions, never to
//!    stale entries of the previous page.
//! 4. Icons on a page never overlap.

mod common;

use common::{World, actors, class_of};
use palette_core::geometry::{Rect, Size};
use palette_core::keybinding::HotkeyRegistry;
use palette_layout::Origin;
use palette_widgets::{PaletteConfig, SelectionPalette};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

const CLASSES: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

fn selection_strategy() -> impl Strategy<Value = Vec<(&'static str, usize)>> {
    proptest::collection::vec(1usize..=3, 0..=CLASSES.len()).prop_map(|counts| {
        CLASSES
            .iter()
            .copied()
            .zip(counts)
            .collect::<Vec<_>>()
    })
}

fn config_strategy() -> impl Strategy<Value = PaletteConfig> {
    (
        1usize..=4,
        1usize..=3,
        0usize..=6,
        prop_oneof![Just(Origin::TopLeft), Just(Origin::BottomRight)],
    )
        .prop_map(|(columns, page_rows, hotkey_count, origin)| PaletteConfig {
            columns,
            minimum_rows: 1,
            max_icon_row_offset: Some(page_rows),
            icon_size: Size::new(10, 8),
            icon_margin: Size::new(1, 1),
            origin,
            hotkey_prefix: Some("Slot".into()),
            hotkey_count,
            ..PaletteConfig::default()
        })
}

fn palette(config: &PaletteConfig) -> SelectionPalette<common::Actor> {
    SelectionPalette::new(config, &HotkeyRegistry::new(), Rect::new(200, 200, 0, 0), class_of)
}

fn bound_slots(p: &SelectionPalette<common::Actor>) -> Vec<Option<String>> {
    p.core()
        .icons()
        .iter()
        .map(|i| i.hotkey.as_ref().map(|h| h.name().to_string()))
        .collect()
}

fn expected_slots(hotkey_count: usize, displayed: usize) -> Vec<Option<String>> {
    (0..displayed)
        .map(|i| (i < hotkey_count).then(|| format!("Slot{:02}", i + 1)))
        .collect()
}

proptest! {
    #[test]
    fn unchanged_selection_is_stable(config in config_strategy(), groups in selection_strategy()) {
        let mut p = palette(&config);
        let world = World::with_selection(actors(&groups));
        let emitted = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&emitted);
        let _sub = p.core().on_icon_count_changed(move |_| counter.set(counter.get() + 1));

        prop_assert!(p.tick(&world));
        let icons = p.core().icons().clone();
        let after_first = emitted.get();

        prop_assert!(!p.tick(&world));
        prop_assert_eq!(p.core().icons(), &icons);
        prop_assert_eq!(emitted.get(), after_first);
    }

    #[test]
    fn hotkeys_bound_to_leading_slots(config in config_strategy(), groups in selection_strategy()) {
        let mut p = palette(&config);
        p.tick(&World::with_selection(actors(&groups)));
        let displayed = p.core().displayed_icon_count();
        prop_assert_eq!(bound_slots(&p), expected_slots(config.hotkey_count, displayed));
    }

    #[test]
    fn paging_leaves_no_stale_bindings(
        config in config_strategy(),
        groups in selection_strategy(),
        steps in proptest::collection::vec(any::<bool>(), 0..8),
    ) {
        let mut p = palette(&config);
        p.tick(&World::with_selection(actors(&groups)));
        for down in steps {
            if down {
                p.core_mut().scroll_down();
            } else {
                p.core_mut().scroll_up();
            }
            let displayed = p.core().displayed_icon_count();
            prop_assert_eq!(bound_slots(&p), expected_slots(config.hotkey_count, displayed));
        }
    }

    #[test]
    fn page_icons_do_not_overlap(config in config_strategy(), groups in selection_strategy()) {
        let mut p = palette(&config);
        p.tick(&World::with_selection(actors(&groups)));
        let rects: Vec<Rect> = p.core().icons().iter().map(|i| i.rect).collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                prop_assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }
}
