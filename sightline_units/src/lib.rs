// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Units: unit conversion and display-formatting primitives.
//!
//! Sightline stores every length in centimeters internally. This crate owns
//! the conversions at the edges of that model:
//! - metric/imperial conversion for screen diagonals (inches ↔ centimeters),
//! - meters ↔ centimeters for room-scale inputs,
//! - the display projections used by the dimension callouts (meters with two
//!   decimals, whole centimeters, and the dual cm + inch diagonal label).
//!
//! Formatting functions are pure projections from internal centimeter values
//! to strings; they never own state and rounding is applied for display only.
//!
//! ## Example
//!
//! ```rust
//! use sightline_units::{Unit, inches_to_cm, cm_to_inches, format_meters};
//!
//! let d = inches_to_cm(55.0);
//! assert!((d - 139.7).abs() < 1e-9);
//! assert!((cm_to_inches(d) - 55.0).abs() < 0.1);
//! assert_eq!(format_meters(243.8), "2.44 m");
//! assert_eq!(Unit::Imperial.diagonal_suffix(), "in");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Centimeters per meter.
pub const CM_PER_METER: f64 = 100.0;

/// Measurement system selected for diagonal entry and display.
///
/// Width and height fields are always centimeters; only the diagonal is
/// interpreted in the selected unit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Centimeters.
    #[default]
    Metric,
    /// Inches.
    Imperial,
}

impl Unit {
    /// All selectable units, in presentation order.
    pub const ALL: [Self; 2] = [Self::Metric, Self::Imperial];

    /// Human-readable label for a unit selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Suffix shown next to a diagonal value in this unit.
    #[must_use]
    pub fn diagonal_suffix(self) -> &'static str {
        match self {
            Self::Metric => "cm",
            Self::Imperial => "in",
        }
    }
}

/// Converts inches to centimeters.
#[inline]
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Converts centimeters to inches.
#[inline]
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Converts meters to centimeters.
#[inline]
#[must_use]
pub fn meters_to_cm(meters: f64) -> f64 {
    meters * CM_PER_METER
}

/// Converts centimeters to meters.
#[inline]
#[must_use]
pub fn cm_to_meters(cm: f64) -> f64 {
    cm / CM_PER_METER
}

/// Rounds to one decimal place for display.
///
/// Display precision only; internal model state keeps full precision.
#[inline]
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    libm::round(value * 10.0) / 10.0
}

/// Nearest whole inch for a centimeter value, for diagonal callouts.
#[inline]
#[must_use]
pub fn nearest_whole_inches(cm: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "diagonals are far below i64 range"
    )]
    {
        libm::round(cm / CM_PER_INCH) as i64
    }
}

/// Formats an internal centimeter value as meters with two decimals.
///
/// Used for room-scale dimension callouts ("2.44 m").
#[must_use]
pub fn format_meters(cm: f64) -> String {
    format!("{:.2} m", cm_to_meters(cm))
}

/// Formats an internal centimeter value as whole centimeters.
///
/// Used for mount-height and screen-edge callouts ("100 cm").
#[must_use]
pub fn format_whole_centimeters(cm: f64) -> String {
    format!("{} cm", libm::round(cm))
}

/// Two-line diagonal label: centimeters and the nearest whole inch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagonalLabel {
    /// Metric form, e.g. `"139.7 cm"`.
    pub metric: String,
    /// Imperial form, e.g. `"55\""`.
    pub imperial: String,
}

/// Formats a diagonal for its callout, always showing both unit systems.
#[must_use]
pub fn format_diagonal(cm: f64) -> DiagonalLabel {
    DiagonalLabel {
        metric: format!("{} cm", round_to_tenth(cm)),
        imperial: format!("{}\"", nearest_whole_inches(cm)),
    }
}
