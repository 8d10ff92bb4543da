// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cross-section layout engine.
//!
//! [`layout`] is a pure function from a committed dimension snapshot and the
//! host's current container size to a list of drawable primitives: the room
//! cross-section (ceiling and floor bands, dashed walls, a faint reference
//! grid), the mounted screen, and the architectural dimension callouts.
//!
//! The engine is pull-based: the host passes the container size on every
//! invocation instead of the engine observing resizes. When the container is
//! unknown or degenerate the engine falls back to a fixed-pixel preview that
//! is *not* to scale; [`DiagramLayout::to_scale`] tells the two modes apart.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `atan2`
use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;

use alloc::vec::Vec;

use sightline_model::room::RoomDimensions;
use sightline_model::screen::ScreenDimensions;
use sightline_units::{format_diagonal, format_meters, format_whole_centimeters};

use crate::dimension::{
    Axis, DimensionParams, EXTENSION_LINE, TEXT_OFFSET, dimension_line,
};
use crate::primitives::{Anchor, LabelStyle, LineStyle, Primitive};

/// Canvas margin reserved around the room on every side, in pixels.
pub const MARGIN: f64 = 100.0;

/// Thickness of the ceiling and floor bands, in pixels.
pub const BAND_THICKNESS: f64 = 20.0;

/// Spacing of the faint reference grid, in pixels.
pub const GRID_SPACING: f64 = 50.0;

/// Fraction of the container kept for the room; the rest is margin for
/// dimension callouts.
pub const FIT_FACTOR: f64 = 0.85;

/// Fixed room size in the not-to-scale preview mode, in pixels.
pub const PREVIEW_ROOM: Size = Size::new(800.0, 600.0);

/// Fixed screen size in the not-to-scale preview mode, in pixels.
pub const PREVIEW_SCREEN: Size = Size::new(400.0, 200.0);

/// Screen top position in preview mode, as a fraction of the room height.
pub const PREVIEW_SCREEN_TOP: f64 = 0.3;

const CAPTION_FONT_SIZE: f64 = 16.0;
const AXIS_FONT_SIZE: f64 = 12.0;

const BAND_FILL: Color = Color::from_rgba8(240, 240, 240, 255);
const OUTLINE: Color = Color::from_rgba8(204, 204, 204, 255);
const SCREEN_FILL: Color = Color::from_rgba8(33, 150, 243, 255);

/// Result of one layout computation.
#[derive(Clone, Debug)]
pub struct DiagramLayout {
    /// Drawable primitives, in paint order.
    pub primitives: Vec<Primitive>,
    /// Canvas size the primitives were laid out for.
    pub canvas: Size,
    /// Pixels per centimeter (`1.0` in preview mode).
    pub scale: f64,
    /// `false` in the fixed-pixel preview fallback.
    pub to_scale: bool,
    /// Room cross-section rectangle in canvas pixels.
    pub room_rect: Rect,
    /// Screen rectangle in canvas pixels.
    pub screen_rect: Rect,
    /// Warning marker: the mounted screen pokes above the ceiling.
    ///
    /// Computed only when the room height is known; advisory for the
    /// presentation layer, never a geometry change.
    pub screen_exceeds_room_height: bool,
}

/// Pixel-space frame the primitives are laid out in, before the margin
/// offset is applied.
struct Frame {
    room: Size,
    screen: Size,
    screen_origin: Point,
    mount_span: f64,
    scale: f64,
    to_scale: bool,
}

fn fit_scale(container: Size, room: &RoomDimensions) -> Option<f64> {
    if container.width <= 0.0
        || container.height <= 0.0
        || room.width_cm <= 0.0
        || room.height_cm <= 0.0
    {
        return None;
    }
    let sx = container.width / room.width_cm;
    let sy = container.height / room.height_cm;
    Some(sx.min(sy) * FIT_FACTOR)
}

fn frame(screen: &ScreenDimensions, room: &RoomDimensions, container: Option<Size>) -> Frame {
    match container.and_then(|size| fit_scale(size, room)) {
        Some(scale) => {
            let room_px = Size::new(room.width_cm * scale, room.height_cm * scale);
            let screen_px = Size::new(screen.width_cm * scale, screen.height_cm * scale);
            let mount_span = room.mount_height_cm * scale;
            let floor_y = room_px.height - BAND_THICKNESS;
            let screen_origin = Point::new(
                (room_px.width - screen_px.width) / 2.0,
                floor_y - mount_span - screen_px.height,
            );
            Frame {
                room: room_px,
                screen: screen_px,
                screen_origin,
                mount_span,
                scale,
                to_scale: true,
            }
        }
        None => {
            let screen_origin = Point::new(
                (PREVIEW_ROOM.width - PREVIEW_SCREEN.width) / 2.0,
                PREVIEW_ROOM.height * PREVIEW_SCREEN_TOP,
            );
            let mount_span = PREVIEW_ROOM.height
                - screen_origin.y
                - PREVIEW_SCREEN.height
                - BAND_THICKNESS;
            Frame {
                room: PREVIEW_ROOM,
                screen: PREVIEW_SCREEN,
                screen_origin,
                mount_span,
                scale: 1.0,
                to_scale: false,
            }
        }
    }
}

/// Computes the full cross-section diagram.
///
/// Pure: same inputs, same primitives. `container` is the currently measured
/// drawing area; pass `None` (or a degenerate size) to get the fixed-pixel
/// preview.
#[must_use]
pub fn layout(
    screen: &ScreenDimensions,
    room: &RoomDimensions,
    container: Option<Size>,
) -> DiagramLayout {
    let frame = frame(screen, room, container);
    let origin = Point::new(MARGIN, MARGIN);
    let mut out = Vec::new();

    push_grid(&mut out, origin, frame.room);
    push_room(&mut out, origin, frame.room);
    push_screen(&mut out, origin, &frame);
    push_screen_callouts(&mut out, origin, &frame, screen, room);
    push_room_height_callout(&mut out, origin, frame.room, room);

    let room_rect = Rect::from_origin_size(origin, frame.room);
    let screen_rect = Rect::from_origin_size(origin + frame.screen_origin.to_vec2(), frame.screen);

    DiagramLayout {
        primitives: out,
        canvas: Size::new(
            frame.room.width + 2.0 * MARGIN,
            frame.room.height + 2.0 * MARGIN,
        ),
        scale: frame.scale,
        to_scale: frame.to_scale,
        room_rect,
        screen_rect,
        screen_exceeds_room_height: room.height_cm > 0.0
            && room.mount_height_cm + screen.height_cm > room.height_cm,
    }
}

/// Faint reference grid; visual only, never dimensioned.
fn push_grid(out: &mut Vec<Primitive>, origin: Point, room: Size) {
    let style = LineStyle::solid(Color::BLACK, 0.5).with_opacity(0.1);

    let mut x = 0.0;
    while x <= room.width {
        out.push(Primitive::Line {
            p0: origin + Vec2::new(x, 0.0),
            p1: origin + Vec2::new(x, room.height),
            style,
        });
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y <= room.height {
        out.push(Primitive::Line {
            p0: origin + Vec2::new(0.0, y),
            p1: origin + Vec2::new(room.width, y),
            style,
        });
        y += GRID_SPACING;
    }
}

/// Ceiling and floor bands plus the dashed wall outline.
fn push_room(out: &mut Vec<Primitive>, origin: Point, room: Size) {
    let band_stroke = LineStyle::solid(OUTLINE, 1.0);
    let caption = LabelStyle::plain(CAPTION_FONT_SIZE).italic();

    for (top, text) in [(0.0, "CEILING"), (room.height - BAND_THICKNESS, "FLOOR")] {
        out.push(Primitive::Rect {
            rect: Rect::from_origin_size(
                origin + Vec2::new(0.0, top),
                Size::new(room.width, BAND_THICKNESS),
            ),
            fill: Some(BAND_FILL),
            stroke: Some(band_stroke),
            corner_radius: 0.0,
        });
        out.push(Primitive::Label {
            text: text.into(),
            position: origin + Vec2::new(room.width / 2.0, top + BAND_THICKNESS / 2.0),
            rotation_degrees: 0.0,
            anchor: Anchor::Middle,
            style: caption,
        });
    }

    out.push(Primitive::Rect {
        rect: Rect::from_origin_size(origin, room),
        fill: None,
        stroke: Some(LineStyle::solid(OUTLINE, 1.0).dashed(5.0, 5.0)),
        corner_radius: 0.0,
    });
}

/// The mounted screen face.
fn push_screen(out: &mut Vec<Primitive>, origin: Point, frame: &Frame) {
    out.push(Primitive::Rect {
        rect: Rect::from_origin_size(origin + frame.screen_origin.to_vec2(), frame.screen),
        fill: Some(SCREEN_FILL),
        stroke: Some(LineStyle::solid(Color::BLACK, 3.0)),
        corner_radius: 6.0,
    });
}

/// Screen width, screen height, and mount-height callouts, the reference
/// axes, and the diagonal guide.
fn push_screen_callouts(
    out: &mut Vec<Primitive>,
    origin: Point,
    frame: &Frame,
    screen: &ScreenDimensions,
    room: &RoomDimensions,
) {
    let screen_origin = origin + frame.screen_origin.to_vec2();
    let tick = EXTENSION_LINE / 3.0;

    // Width along the top edge, tucked just inside the screen face.
    out.extend(dimension_line(
        &DimensionParams {
            axis: Axis::Horizontal,
            origin: screen_origin + Vec2::new(0.0, 8.0),
            span: frame.screen.width,
            offset: tick,
            label_offset: 15.0,
            rotation_degrees: 0.0,
        },
        format_whole_centimeters(screen.width_cm),
    ));

    // Height along the right edge, label rotated to read top-to-bottom.
    out.extend(dimension_line(
        &DimensionParams {
            axis: Axis::Vertical,
            origin: screen_origin + Vec2::new(frame.screen.width - 8.0, 0.0),
            span: frame.screen.height,
            offset: -tick,
            label_offset: -TEXT_OFFSET,
            rotation_degrees: 90.0,
        },
        format_whole_centimeters(screen.height_cm),
    ));

    // Mount height, from the screen's bottom edge down to the floor band.
    out.extend(dimension_line(
        &DimensionParams {
            axis: Axis::Vertical,
            origin: screen_origin + Vec2::new(frame.screen.width / 2.0, frame.screen.height),
            span: frame.mount_span,
            offset: -tick,
            label_offset: -TEXT_OFFSET,
            rotation_degrees: -90.0,
        },
        format_whole_centimeters(room.mount_height_cm),
    ));

    // Reference axes: screen centerline and the conduit line below it.
    let axis_style = LineStyle::solid(Color::BLACK, 1.0).dashed(4.0, 4.0).with_opacity(0.3);
    let axis_caption = LabelStyle::plain(AXIS_FONT_SIZE).with_opacity(0.5);
    for (y, text) in [
        (frame.screen.height / 2.0, "Screen axis"),
        (frame.screen.height - 30.0, "Conduit axis"),
    ] {
        out.push(Primitive::Line {
            p0: screen_origin + Vec2::new(-100.0, y),
            p1: screen_origin + Vec2::new(frame.screen.width, y),
            style: axis_style,
        });
        out.push(Primitive::Label {
            text: text.into(),
            position: screen_origin + Vec2::new(-105.0, y - 5.0),
            rotation_degrees: 0.0,
            anchor: Anchor::End,
            style: axis_caption,
        });
    }

    // Diagonal guide, corner to corner, with the dual-unit label.
    let bottom_left = screen_origin + Vec2::new(0.0, frame.screen.height);
    let top_right = screen_origin + Vec2::new(frame.screen.width, 0.0);
    out.push(Primitive::Line {
        p0: bottom_left,
        p1: top_right,
        style: LineStyle::solid(Color::BLACK, 1.0).dashed(4.0, 4.0),
    });

    let rotation = -frame.screen.height.atan2(frame.screen.width).to_degrees();
    let center = bottom_left.midpoint(top_right);
    let label = format_diagonal(screen.diagonal_cm);
    let style = LabelStyle::plain(crate::dimension::DIMENSION_FONT_SIZE);
    for (dy, text) in [(-12.0, label.metric), (12.0, label.imperial)] {
        out.push(Primitive::Label {
            text,
            position: center + Vec2::new(0.0, dy),
            rotation_degrees: rotation,
            anchor: Anchor::Middle,
            style,
        });
    }
}

/// Room height callout in the right margin, with its caption.
fn push_room_height_callout(
    out: &mut Vec<Primitive>,
    origin: Point,
    room_px: Size,
    room: &RoomDimensions,
) {
    out.extend(dimension_line(
        &DimensionParams {
            axis: Axis::Vertical,
            origin: origin + Vec2::new(room_px.width + MARGIN / 4.0, BAND_THICKNESS),
            span: room_px.height - 2.0 * BAND_THICKNESS,
            offset: EXTENSION_LINE / 3.0,
            label_offset: -TEXT_OFFSET / 2.0,
            rotation_degrees: -90.0,
        },
        format_meters(room.height_cm),
    ));

    out.push(Primitive::Label {
        text: "Room height".into(),
        position: origin + Vec2::new(room_px.width + MARGIN / 2.0, room_px.height / 2.0),
        rotation_degrees: -90.0,
        anchor: Anchor::Middle,
        style: LabelStyle::plain(CAPTION_FONT_SIZE).italic(),
    });
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::*;
    use crate::primitives::PrimitiveKind;

    fn test_screen() -> ScreenDimensions {
        ScreenDimensions {
            width_cm: 121.8,
            height_cm: 68.5,
            diagonal_cm: 139.7,
        }
    }

    fn test_room() -> RoomDimensions {
        RoomDimensions {
            width_cm: 400.0,
            depth_cm: 500.0,
            height_cm: 243.8,
            mount_height_cm: 100.0,
        }
    }

    fn labels(layout: &DiagramLayout) -> Vec<String> {
        layout
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Label { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn scale_reserves_the_callout_margin() {
        let layout = layout(&test_screen(), &test_room(), Some(Size::new(800.0, 600.0)));
        // min(800 / 400, 600 / 243.8) * 0.85 = 2.0 * 0.85
        assert!((layout.scale - 1.7).abs() < 1e-9);
        assert!(layout.to_scale);
        assert!((layout.room_rect.width() - 400.0 * 1.7).abs() < 1e-9);
    }

    #[test]
    fn unknown_or_degenerate_container_falls_back_to_preview() {
        for container in [None, Some(Size::ZERO), Some(Size::new(0.0, 600.0))] {
            let layout = layout(&test_screen(), &test_room(), container);
            assert!(!layout.to_scale);
            assert_eq!(layout.scale, 1.0);
            assert_eq!(layout.room_rect.size(), PREVIEW_ROOM);
            assert_eq!(layout.screen_rect.size(), PREVIEW_SCREEN);
        }
    }

    #[test]
    fn screen_is_centered_and_sits_at_mount_height() {
        let layout = layout(&test_screen(), &test_room(), Some(Size::new(800.0, 600.0)));

        let room_center = layout.room_rect.center().x;
        let screen_center = layout.screen_rect.center().x;
        assert!((room_center - screen_center).abs() < 1e-9);

        let floor_y = layout.room_rect.max_y() - BAND_THICKNESS;
        let expected_bottom = floor_y - 100.0 * layout.scale;
        assert!((layout.screen_rect.max_y() - expected_bottom).abs() < 1e-9);
    }

    #[test]
    fn four_callouts_mean_eight_arrowheads() {
        let layout = layout(&test_screen(), &test_room(), Some(Size::new(800.0, 600.0)));
        let arrows = layout
            .primitives
            .iter()
            .filter(|p| p.kind() == PrimitiveKind::Arrowhead)
            .count();
        assert_eq!(arrows, 8);
    }

    #[test]
    fn callout_labels_use_the_right_units() {
        let layout = layout(&test_screen(), &test_room(), Some(Size::new(800.0, 600.0)));
        let labels = labels(&layout);

        assert!(labels.iter().any(|l| l == "2.44 m"), "room height in meters");
        assert!(labels.iter().any(|l| l == "100 cm"), "mount height in whole cm");
        assert!(labels.iter().any(|l| l == "122 cm"), "screen width in whole cm");
        assert!(labels.iter().any(|l| l == "139.7 cm"), "diagonal metric line");
        assert!(labels.iter().any(|l| l == "55\""), "diagonal imperial line");
        assert!(labels.iter().any(|l| l == "CEILING"));
        assert!(labels.iter().any(|l| l == "FLOOR"));
    }

    #[test]
    fn over_height_warning_follows_the_committed_numbers() {
        // 100 + 68.5 = 168.5 <= 243.8: fits.
        let fits = layout(&test_screen(), &test_room(), None);
        assert!(!fits.screen_exceeds_room_height);

        // 200 + 68.5 = 268.5 > 243.8: warning, geometry unchanged mode-wise.
        let mut high = test_room();
        high.mount_height_cm = 200.0;
        let warned = layout(&test_screen(), &high, None);
        assert!(warned.screen_exceeds_room_height);

        // Unknown room height: no verdict.
        let mut unknown = test_room();
        unknown.height_cm = 0.0;
        let silent = layout(&test_screen(), &unknown, None);
        assert!(!silent.screen_exceeds_room_height);
    }

    #[test]
    fn grid_density_matches_the_room_size() {
        let layout = layout(&test_screen(), &test_room(), None);
        let grid_lines = layout
            .primitives
            .iter()
            .filter(|p| match p {
                Primitive::Line { style, .. } => style.opacity == 0.1,
                _ => false,
            })
            .count();
        // Preview room is 800 x 600 at 50 px spacing: 17 vertical + 13
        // horizontal lines, fences included.
        assert_eq!(grid_lines, 30);
    }

    #[test]
    fn zero_dimensions_lay_out_without_panicking() {
        let layout = layout(
            &ScreenDimensions::ZERO,
            &RoomDimensions::ZERO,
            Some(Size::new(800.0, 600.0)),
        );
        assert!(!layout.to_scale);
        assert!(!layout.screen_exceeds_room_height);
        assert!(!layout.primitives.is_empty());
    }
}
