// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export backend for the Sightline diagram primitives.
//!
//! This crate turns a [`DiagramLayout`] (or any slice of [`Primitive`]s)
//! into a standalone SVG document. It is intended for installation handoff
//! documents and debugging/inspection, not pixel-perfect rendering:
//! - Text metrics are left to the SVG viewer; labels carry position, anchor,
//!   and rotation only.
//! - The screen face is exported as a flat fill (no gradient).
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;
use kurbo::{Point, Vec2};
use peniko::Color;
use sightline_diagram::{Anchor, DiagramLayout, LabelStyle, LineStyle, Primitive};

/// Renders a complete layout as a standalone SVG document.
///
/// The document's size and `viewBox` come from [`DiagramLayout::canvas`].
#[must_use]
pub fn to_svg(layout: &DiagramLayout) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = fmt_f64(layout.canvas.width),
        h = fmt_f64(layout.canvas.height),
    );
    for primitive in &layout.primitives {
        write_primitive(&mut svg, primitive);
    }
    svg.push_str("</svg>");
    svg
}

fn write_primitive(out: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Line { p0, p1, style } => write_line(out, *p0, *p1, style),
        Primitive::Arrowhead {
            tip,
            direction,
            size,
            color,
        } => write_arrowhead(out, *tip, *direction, *size, *color),
        Primitive::Label {
            text,
            position,
            rotation_degrees,
            anchor,
            style,
        } => write_label(out, text, *position, *rotation_degrees, *anchor, style),
        Primitive::Rect {
            rect,
            fill,
            stroke,
            corner_radius,
        } => write_rect(out, *rect, *fill, stroke.as_ref(), *corner_radius),
    }
}

fn write_line(out: &mut String, p0: Point, p1: Point, style: &LineStyle) {
    let _ = write!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
        fmt_f64(p0.x),
        fmt_f64(p0.y),
        fmt_f64(p1.x),
        fmt_f64(p1.y),
    );
    write_stroke_attrs(out, style);
    out.push_str("/>");
}

fn write_arrowhead(out: &mut String, tip: Point, direction: Vec2, size: f64, color: Color) {
    // Isosceles triangle: apex at the tip, base `size` behind it.
    let base = tip - direction * size;
    let half = Vec2::new(-direction.y, direction.x) * (size / 2.0);
    let (fill, opacity) = color_to_svg(color);
    let _ = write!(
        out,
        "<polygon points=\"{},{} {},{} {},{}\" fill=\"{}\"",
        fmt_f64(tip.x),
        fmt_f64(tip.y),
        fmt_f64(base.x + half.x),
        fmt_f64(base.y + half.y),
        fmt_f64(base.x - half.x),
        fmt_f64(base.y - half.y),
        fill,
    );
    if opacity < 1.0 {
        let _ = write!(out, " fill-opacity=\"{}\"", fmt_f32(opacity));
    }
    out.push_str("/>");
}

fn write_label(
    out: &mut String,
    text: &str,
    position: Point,
    rotation_degrees: f64,
    anchor: Anchor,
    style: &LabelStyle,
) {
    let (fill, alpha) = color_to_svg(style.color);
    let _ = write!(
        out,
        "<text x=\"{x}\" y=\"{y}\" font-size=\"{size}\" text-anchor=\"{anchor}\" fill=\"{fill}\"",
        x = fmt_f64(position.x),
        y = fmt_f64(position.y),
        size = fmt_f64(style.font_size),
        anchor = match anchor {
            Anchor::Middle => "middle",
            Anchor::Start => "start",
            Anchor::End => "end",
        },
    );
    if style.italic {
        out.push_str(" font-style=\"italic\"");
    }
    let opacity = style.opacity * alpha;
    if opacity < 1.0 {
        let _ = write!(out, " opacity=\"{}\"", fmt_f32(opacity));
    }
    if rotation_degrees != 0.0 {
        let _ = write!(
            out,
            " transform=\"rotate({} {} {})\"",
            fmt_f64(rotation_degrees),
            fmt_f64(position.x),
            fmt_f64(position.y),
        );
    }
    out.push('>');
    write_escaped(out, text);
    out.push_str("</text>");
}

fn write_rect(
    out: &mut String,
    rect: kurbo::Rect,
    fill: Option<Color>,
    stroke: Option<&LineStyle>,
    corner_radius: f64,
) {
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
        fmt_f64(rect.x0),
        fmt_f64(rect.y0),
        fmt_f64(rect.width()),
        fmt_f64(rect.height()),
    );
    if corner_radius > 0.0 {
        let _ = write!(out, " rx=\"{}\"", fmt_f64(corner_radius));
    }
    match fill {
        Some(color) => {
            let (fill, opacity) = color_to_svg(color);
            let _ = write!(out, " fill=\"{fill}\"");
            if opacity < 1.0 {
                let _ = write!(out, " fill-opacity=\"{}\"", fmt_f32(opacity));
            }
        }
        None => out.push_str(" fill=\"none\""),
    }
    if let Some(style) = stroke {
        write_stroke_attrs(out, style);
    }
    out.push_str("/>");
}

fn write_stroke_attrs(out: &mut String, style: &LineStyle) {
    let (stroke, alpha) = color_to_svg(style.color);
    let _ = write!(
        out,
        " stroke=\"{}\" stroke-width=\"{}\"",
        stroke,
        fmt_f64(style.width),
    );
    if let Some((on, off)) = style.dash {
        let _ = write!(
            out,
            " stroke-dasharray=\"{} {}\"",
            fmt_f64(on),
            fmt_f64(off),
        );
    }
    let opacity = style.opacity * alpha;
    if opacity < 1.0 {
        let _ = write!(out, " stroke-opacity=\"{}\"", fmt_f32(opacity));
    }
}

fn write_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "SVG uses f32-like scalar formatting"
)]
fn fmt_f64(v: f64) -> String {
    fmt_f32(v as f32)
}

fn fmt_f32(v: f32) -> String {
    // Keep output readable and stable enough for inspection.
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i32;
        let diff = (i as f32) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{:.3}", v);
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
