// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reusable architectural dimension callout.
//!
//! A dimension line in the drafting sense is a fixed little machine: two
//! extension ticks perpendicular to the measured edge, one span line offset
//! from that edge, two arrowheads pointing outward to the span's ends, and a
//! centered label (rotated for vertical callouts so it reads along the
//! line). [`dimension_line`] emits exactly those six primitives for any span,
//! including a degenerate zero-length one.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Vec2};
use peniko::Color;

use crate::primitives::{Anchor, LabelStyle, LineStyle, Primitive};

/// Arrowhead edge length in pixels.
pub const ARROW_SIZE: f64 = 12.0;

/// Full extension-tick length in pixels; tight callouts use a third of it.
pub const EXTENSION_LINE: f64 = 25.0;

/// Distance from a span line to its label anchor, in pixels.
pub const TEXT_OFFSET: f64 = 35.0;

/// Font size of dimension text, in pixels.
pub const DIMENSION_FONT_SIZE: f64 = 14.0;

/// Reference axis a dimension measures along.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Span runs along +x; ticks and offsets run along ±y.
    Horizontal,
    /// Span runs along +y; ticks and offsets run along ±x.
    Vertical,
}

impl Axis {
    /// Unit vector along the measured span.
    #[must_use]
    pub fn direction(self) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(1.0, 0.0),
            Self::Vertical => Vec2::new(0.0, 1.0),
        }
    }

    /// Unit vector perpendicular to the span (positive offset side).
    #[must_use]
    pub fn perpendicular(self) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(0.0, 1.0),
            Self::Vertical => Vec2::new(1.0, 0.0),
        }
    }
}

/// Placement of one dimension callout.
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionParams {
    /// Axis the span runs along.
    pub axis: Axis,
    /// Start of the measured span, on the measured edge.
    pub origin: Point,
    /// Span length in pixels along the axis.
    pub span: f64,
    /// Signed perpendicular distance from the measured edge to the span
    /// line; extension ticks bridge exactly this distance.
    pub offset: f64,
    /// Signed perpendicular distance from the span line to the label anchor.
    pub label_offset: f64,
    /// Label rotation in degrees; vertical callouts use `90.0` or `-90.0`
    /// so the text reads along the line.
    pub rotation_degrees: f64,
}

/// Emits one dimension callout: 2 extension ticks, 1 span line,
/// 2 arrowheads, and 1 label, in that order.
///
/// The primitive counts are independent of the span value; a zero span is
/// degenerate (the ticks and arrowheads coincide) but well defined.
#[must_use]
pub fn dimension_line(params: &DimensionParams, label: impl Into<String>) -> Vec<Primitive> {
    let along = params.axis.direction();
    let perp = params.axis.perpendicular();
    let stroke = LineStyle::solid(Color::BLACK, 1.5);

    let start = params.origin;
    let end = params.origin + along * params.span;
    let line_start = start + perp * params.offset;
    let line_end = end + perp * params.offset;

    let mut out = Vec::with_capacity(6);

    // Extension ticks, from the measured edge out to the span line.
    out.push(Primitive::Line {
        p0: start,
        p1: line_start,
        style: stroke,
    });
    out.push(Primitive::Line {
        p0: end,
        p1: line_end,
        style: stroke,
    });

    // Span line.
    out.push(Primitive::Line {
        p0: line_start,
        p1: line_end,
        style: stroke,
    });

    // Arrowheads at the span ends, tips outward, bodies inward.
    out.push(Primitive::Arrowhead {
        tip: line_start,
        direction: -along,
        size: ARROW_SIZE,
        color: Color::BLACK,
    });
    out.push(Primitive::Arrowhead {
        tip: line_end,
        direction: along,
        size: ARROW_SIZE,
        color: Color::BLACK,
    });

    // Centered label, offset perpendicular from the span line.
    let midpoint = line_start.midpoint(line_end);
    out.push(Primitive::Label {
        text: label.into(),
        position: midpoint + perp * params.label_offset,
        rotation_degrees: params.rotation_degrees,
        anchor: Anchor::Middle,
        style: LabelStyle::plain(DIMENSION_FONT_SIZE),
    });

    out
}
