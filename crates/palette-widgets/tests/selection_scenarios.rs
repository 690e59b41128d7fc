#![forbid(unsafe_code)]

//! End-to-end scenarios for the selection palette: grouping, click
//! routing, paging, hotkeys, and the decorations that follow the row count.

mod common;

use common::{World, actors, class_of, init_tracing};
use palette_core::event::{KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent};
use palette_core::geometry::{Point, Rect, Size};
use palette_core::keybinding::{Hotkey, HotkeyRegistry};
use palette_runtime::{FeedbackLog, UiContext};
use palette_widgets::mirror_rows::ROW_TEMPLATE;
use palette_widgets::{
    IconCountChanged, MirrorRows, MouseResult, PaletteConfig, RowTemplate, SelectionPalette,
    TemplateSet, cycle_subgroups,
};
use std::cell::RefCell;
use std::rc::Rc;

fn config(columns: usize) -> PaletteConfig {
    PaletteConfig {
        columns,
        minimum_rows: 1,
        icon_size: Size::new(10, 10),
        ..PaletteConfig::default()
    }
}

fn palette(config: &PaletteConfig, registry: &HotkeyRegistry) -> SelectionPalette<common::Actor> {
    SelectionPalette::new(config, registry, Rect::new(0, 0, 0, 0), class_of)
}

fn left_at(x: i32) -> MouseEvent {
    MouseEvent::down(MouseButton::Left, Point::new(x, 5))
}

#[test]
fn seven_units_three_classes() {
    init_tracing();
    let reg = HotkeyRegistry::new();
    let mut p = palette(&config(3), &reg);
    let world = World::with_selection(actors(&[("A", 3), ("B", 2), ("C", 2)]));

    assert!(p.tick(&world));
    let core = p.core();
    let classes: Vec<_> = core.icons().iter().map(|i| i.class.as_str()).collect();
    assert_eq!(classes, vec!["A", "B", "C"]);
    assert_eq!(core.rows_count(), 1);
    let counts: Vec<_> = core.icons().iter().map(|i| i.count_label()).collect();
    assert_eq!(counts, vec![Some("3".into()), Some("2".into()), Some("2".into())]);
    assert_eq!(core.event_bounds(), Rect::new(0, 0, 30, 10));
}

#[test]
fn click_replaces_then_shift_click_removes() {
    init_tracing();
    let reg = HotkeyRegistry::new();
    let mut p = palette(&config(3), &reg);
    let all = actors(&[("A", 3), ("B", 2), ("C", 2)]);
    let mut world = World::with_selection(all.clone());
    let log = FeedbackLog::new();
    let mut ctx = UiContext::new(Box::new(log.clone()));
    p.tick(&world);

    assert_eq!(p.handle_mouse(&left_at(15), &mut world, &mut ctx), MouseResult::Activated(1));
    assert_eq!(world.selected_ids(), vec![4, 5]);

    world.selected = all;
    p.tick(&world);
    let shift = left_at(15).with_modifiers(Modifiers::SHIFT);
    p.handle_mouse(&shift, &mut world, &mut ctx);
    assert_eq!(world.selected.len(), 5);
    assert!(world.selected.iter().all(|a| a.class != "B"));
    assert_eq!(log.played(), vec!["ClickSound", "ClickSound"]);
}

#[test]
fn miss_plays_disabled_cue_without_mutation() {
    let reg = HotkeyRegistry::new();
    let config = PaletteConfig {
        tooltip_container: Some("TOOLTIP_CONTAINER".into()),
        ..config(3)
    };
    let mut p = palette(&config, &reg);
    let mut world = World::with_selection(actors(&[("A", 1)]));
    let log = FeedbackLog::new();
    let mut ctx = UiContext::new(Box::new(log.clone()));
    p.tick(&world);

    let result = p.handle_mouse(&left_at(25), &mut world, &mut ctx);
    assert_eq!(result, MouseResult::Missed);
    assert!(!result.is_handled());
    assert_eq!(world.selected.len(), 1);
    assert_eq!(log.played(), vec!["ClickDisabledSound"]);

    let hover = MouseEvent::moved(Point::new(3, 3));
    assert_eq!(p.handle_mouse(&hover, &mut world, &mut ctx), MouseResult::Hovered(0));
    assert_eq!(p.core().tooltip_icon().map(|i| i.class.as_str()), Some("A"));
}

#[test]
fn hover_without_tooltip_container_records_nothing() {
    let reg = HotkeyRegistry::new();
    let mut p = palette(&config(3), &reg);
    let mut world = World::with_selection(actors(&[("A", 1)]));
    let mut ctx = UiContext::default();
    p.tick(&world);

    let hover = MouseEvent::moved(Point::new(3, 3));
    assert_eq!(p.handle_mouse(&hover, &mut world, &mut ctx), MouseResult::Hovered(0));
    assert!(p.core().tooltip_icon().is_none());
}

#[test]
fn capped_page_cannot_scroll() {
    let reg = HotkeyRegistry::new();
    let config = PaletteConfig {
        max_icon_row_offset: Some(2),
        ..config(4)
    };
    let mut p = palette(&config, &reg);
    let world = World::with_selection(actors(&[("A", 1), ("B", 1), ("C", 1)]));
    p.tick(&world);

    assert!(!p.core_mut().scroll_down());
    assert_eq!(p.core().icon_row_offset(), 0);
    assert!(!p.core().needs_scroll_buttons());
}

#[test]
fn paging_rebinds_hotkeys_to_display_slots() {
    let reg = HotkeyRegistry::new();
    reg.bind("Slot01", Some(Hotkey::new(KeyCode::Char('q'), Modifiers::empty())));
    reg.bind("Slot02", Some(Hotkey::new(KeyCode::Char('w'), Modifiers::empty())));
    let config = PaletteConfig {
        max_icon_row_offset: Some(1),
        hotkey_prefix: Some("Slot".into()),
        hotkey_count: 2,
        ..config(2)
    };
    let mut p = palette(&config, &reg);
    let mut world = World::with_selection(actors(&[("A", 1), ("B", 1), ("C", 1), ("D", 1)]));
    let mut ctx = UiContext::default();
    p.tick(&world);

    assert!(p.core_mut().scroll_down());
    let page: Vec<_> = p.core().icons().iter().map(|i| i.class.as_str()).collect();
    assert_eq!(page, vec!["C", "D"]);
    let slots: Vec<_> = p
        .core()
        .icons()
        .iter()
        .map(|i| i.hotkey.as_ref().map(|h| h.name().to_string()))
        .collect();
    assert_eq!(slots, vec![Some("Slot01".into()), Some("Slot02".into())]);

    assert!(p.handle_key(&KeyEvent::new(KeyCode::Char('w')), &mut world, &mut ctx));
    assert_eq!(world.selected_ids(), vec![4]);
}

#[test]
fn unchanged_selection_does_not_notify() {
    let reg = HotkeyRegistry::new();
    let mut p = palette(&config(3), &reg);
    let world = World::with_selection(actors(&[("A", 2), ("B", 1)]));
    let seen: Rc<RefCell<Vec<IconCountChanged>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let _sub = p
        .core()
        .on_icon_count_changed(move |e| sink.borrow_mut().push(*e));

    p.tick(&world);
    p.tick(&world);
    assert_eq!(*seen.borrow(), vec![IconCountChanged { old: 0, new: 2 }]);
}

#[test]
fn mirror_rows_track_palette() {
    let reg = HotkeyRegistry::new();
    let mut p = palette(&config(2), &reg);
    let templates = TemplateSet::new().with(RowTemplate::new(ROW_TEMPLATE, Rect::new(0, 0, 40, 12)));
    let rows = Rc::new(RefCell::new(
        MirrorRows::from_templates(Some(&templates), Some(&templates)).expect("row template"),
    ));
    let _sub = MirrorRows::attach(&rows, p.core(), || true);

    p.tick(&World::with_selection(actors(&[("A", 1), ("B", 1), ("C", 1)])));
    let rows = rows.borrow();
    assert_eq!(rows.rows(), 2);
    let ys: Vec<_> = rows
        .foreground()
        .map(|s| s.children().iter().map(|c| c.bounds.y).collect())
        .unwrap_or_default();
    assert_eq!(ys, vec![0, 12]);
}

#[test]
fn subgroup_cycle_then_palette_follows() {
    let reg = HotkeyRegistry::new();
    let mut p = palette(&config(3), &reg);
    let mut world = World::with_selection(actors(&[("A", 2), ("B", 1)]));
    p.tick(&world);
    assert_eq!(p.core().displayed_icon_count(), 2);

    assert!(cycle_subgroups(&mut world, &class_of));
    assert!(p.tick(&world));
    let classes: Vec<_> = p.core().icons().iter().map(|i| i.class.as_str()).collect();
    assert_eq!(classes, vec!["A"]);
    assert_eq!(world.background.len(), 1);
}
