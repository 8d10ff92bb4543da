// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives emitted by the layout engine.
//!
//! The layout engine speaks a small, plain-old-data vocabulary that any
//! backend (SVG export, canvas, an immediate-mode UI) can consume without
//! understanding the planning domain. Primitives are produced fresh on every
//! layout computation and carry no identity across runs.

use alloc::string::String;
use kurbo::{Point, Rect, Vec2};
use peniko::Color;

/// Stroke styling for a [`Primitive::Line`] or a rectangle outline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
    /// Dash pattern (on, off) in pixels; `None` for a solid stroke.
    pub dash: Option<(f64, f64)>,
    /// Stroke opacity in `0.0..=1.0`.
    pub opacity: f32,
}

impl LineStyle {
    /// A solid stroke of the given color and width, fully opaque.
    #[must_use]
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
            opacity: 1.0,
        }
    }

    /// Returns this style with a dash pattern.
    #[must_use]
    pub const fn dashed(mut self, on: f64, off: f64) -> Self {
        self.dash = Some((on, off));
        self
    }

    /// Returns this style with the given opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Text styling for a [`Primitive::Label`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// Fill color.
    pub color: Color,
    /// Italic captions (band and axis names) versus upright dimension text.
    pub italic: bool,
    /// Text opacity in `0.0..=1.0`.
    pub opacity: f32,
}

impl LabelStyle {
    /// Upright black text of the given size, fully opaque.
    #[must_use]
    pub const fn plain(font_size: f64) -> Self {
        Self {
            font_size,
            color: Color::BLACK,
            italic: false,
            opacity: 1.0,
        }
    }

    /// Returns this style italicized.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Returns this style with the given opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Horizontal anchoring of a label relative to its position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Centered on the position (dimension text).
    #[default]
    Middle,
    /// Position marks the start of the text run.
    Start,
    /// Position marks the end of the text run (right-aligned captions).
    End,
}

/// One drawable element of the diagram.
///
/// Coordinates are absolute canvas pixels, y down.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A straight stroked segment.
    Line {
        /// Segment start.
        p0: Point,
        /// Segment end.
        p1: Point,
        /// Stroke styling.
        style: LineStyle,
    },
    /// A filled triangular arrowhead.
    ///
    /// The triangle's apex sits at `tip`; `direction` is the unit vector the
    /// arrow points along, and the base lies `size` pixels behind the tip.
    Arrowhead {
        /// Apex of the triangle.
        tip: Point,
        /// Unit vector the arrow points along.
        direction: Vec2,
        /// Distance from tip to base, and base width, in pixels.
        size: f64,
        /// Fill color.
        color: Color,
    },
    /// A positioned, optionally rotated text run.
    Label {
        /// Text content.
        text: String,
        /// Anchor position on the canvas.
        position: Point,
        /// Rotation about `position`, in degrees (±90 for vertical callouts).
        rotation_degrees: f64,
        /// Horizontal anchoring relative to `position`.
        anchor: Anchor,
        /// Text styling.
        style: LabelStyle,
    },
    /// An axis-aligned rectangle, filled and/or stroked.
    Rect {
        /// The rectangle in canvas pixels.
        rect: Rect,
        /// Fill color, if filled.
        fill: Option<Color>,
        /// Outline styling, if stroked.
        stroke: Option<LineStyle>,
        /// Uniform corner radius in pixels; `0.0` for sharp corners.
        corner_radius: f64,
    },
}

/// Discriminant of a [`Primitive`], for counting and filtering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// A [`Primitive::Line`].
    Line,
    /// A [`Primitive::Arrowhead`].
    Arrowhead,
    /// A [`Primitive::Label`].
    Label,
    /// A [`Primitive::Rect`].
    Rect,
}

impl Primitive {
    /// This primitive's discriminant.
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Arrowhead { .. } => PrimitiveKind::Arrowhead,
            Self::Label { .. } => PrimitiveKind::Label,
            Self::Rect { .. } => PrimitiveKind::Rect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_builders_compose() {
        let style = LineStyle::solid(Color::BLACK, 1.0)
            .dashed(4.0, 4.0)
            .with_opacity(0.3);
        assert_eq!(style.dash, Some((4.0, 4.0)));
        assert_eq!(style.opacity, 0.3);

        let caption = LabelStyle::plain(16.0).italic().with_opacity(0.5);
        assert!(caption.italic);
        assert_eq!(caption.opacity, 0.5);
    }

    #[test]
    fn kinds_match_variants() {
        let line = Primitive::Line {
            p0: Point::ZERO,
            p1: Point::new(1.0, 0.0),
            style: LineStyle::solid(Color::BLACK, 1.0),
        };
        assert_eq!(line.kind(), PrimitiveKind::Line);

        let arrow = Primitive::Arrowhead {
            tip: Point::ZERO,
            direction: Vec2::new(1.0, 0.0),
            size: 12.0,
            color: Color::BLACK,
        };
        assert_eq!(arrow.kind(), PrimitiveKind::Arrowhead);
    }
}
