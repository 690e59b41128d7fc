#![forbid(unsafe_code)]

//! Layout for icon palettes.
//!
//! - [`grid`]: display index → pixel rectangle, container sizing, and the
//!   two corner [`grid::Origin`] policies.
//! - [`scroll`]: whole-row paging ([`scroll::RowWindow`]) and pixel tab-strip
//!   scrolling ([`scroll::PixelScroll`]).

pub mod grid;
pub mod scroll;

pub use grid::{IconGrid, Origin, ParseOriginError};
pub use scroll::{PixelScroll, RowWindow};
