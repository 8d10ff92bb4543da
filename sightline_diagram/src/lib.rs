// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Diagram: the parametric 2D cross-section layout engine.
//!
//! This crate turns a committed set of screen and room dimensions into a
//! list of drawable [`Primitive`]s: the room cross-section with ceiling and
//! floor bands, the mounted screen, architectural dimension callouts, and a
//! dual-unit diagonal guide. It owns no canvas and performs no drawing;
//! backends (such as `sightline_diagram_svg`) consume the primitives.
//!
//! The engine is pull-based and pure. The host calls [`layout`] with the
//! current dimensions and the measured container size whenever either
//! changes; the returned [`DiagramLayout`] is complete and self-contained,
//! and nothing is retained between calls.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use sightline_diagram::{DiagramLayout, layout};
//! use sightline_model::room::RoomDimensions;
//! use sightline_model::screen::ScreenDimensions;
//!
//! let screen = ScreenDimensions {
//!     width_cm: 121.8,
//!     height_cm: 68.5,
//!     diagonal_cm: 139.7,
//! };
//! let room = RoomDimensions {
//!     width_cm: 400.0,
//!     depth_cm: 500.0,
//!     height_cm: 243.8,
//!     mount_height_cm: 100.0,
//! };
//!
//! let diagram: DiagramLayout = layout(&screen, &room, Some(Size::new(800.0, 600.0)));
//! assert!(diagram.to_scale);
//! assert!(!diagram.primitives.is_empty());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod dimension;
mod layout;
mod primitives;

pub use dimension::{
    ARROW_SIZE, Axis, DIMENSION_FONT_SIZE, DimensionParams, EXTENSION_LINE, TEXT_OFFSET,
    dimension_line,
};
pub use layout::{
    BAND_THICKNESS, DiagramLayout, FIT_FACTOR, GRID_SPACING, MARGIN, PREVIEW_ROOM, PREVIEW_SCREEN,
    PREVIEW_SCREEN_TOP, layout,
};
pub use primitives::{Anchor, LabelStyle, LineStyle, Primitive, PrimitiveKind};
