#![forbid(unsafe_code)]

//! Core: geometry, input events, and hotkeys for the icon palette widgets.
//!
//! # Role in the workspace
//! `palette-core` is the leaf crate. Layout (`palette-layout`), the runtime
//! plumbing (`palette-runtime`), and the widgets (`palette-widgets`) all
//! speak in its pixel-space [`geometry`] types and normalized [`event`]
//! values.
//!
//! # Primary responsibilities
//! - **Geometry**: signed pixel [`geometry::Point`], [`geometry::Size`],
//!   [`geometry::Rect`].
//! - **Events**: pointer and keyboard events with a [`event::Modifiers`]
//!   bitset.
//! - **Hotkeys**: a shared [`keybinding::HotkeyRegistry`] and live
//!   [`keybinding::HotkeyRef`] handles, plus slot naming and lint.
//! - **Logging**: `tracing` re-exports and an optional subscriber installer.

pub mod event;
pub mod geometry;
pub mod keybinding;
pub mod logging;

pub use logging::{debug, info, trace, warn};
