// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen dimensions: three mutually dependent measurements, one
//! reconciliation.
//!
//! A screen is described by width, height, and diagonal, linked by the
//! selected aspect ratio and the Pythagorean identity. The three fields are
//! never independently mutable: every edit names a single *driving* field and
//! [`reconcile`] derives the other two, so `diagonal² = width² + height²` and
//! `width / height = ratio` hold after every recomputation.
//!
//! [`ScreenPanel`] wraps the reconciliation in an edit session: raw field
//! text comes in on every keystroke, the numeric recomputation fires through
//! a one-second trailing debounce, and aspect-ratio changes recompute
//! immediately from the current diagonal. The host owns the clock and polls;
//! see [`crate::debounce`].

use sightline_units::{Unit, cm_to_inches, inches_to_cm, round_to_tenth};

use crate::aspect::AspectRatio;
use crate::debounce::Debounce;
use crate::parse_field;

/// Milliseconds between the last keystroke on a screen field and the
/// reconciliation it commits.
pub const EDIT_DEBOUNCE_MS: u64 = 1_000;

/// Screen measurements, all in centimeters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScreenDimensions {
    /// Width in centimeters.
    pub width_cm: f64,
    /// Height in centimeters.
    pub height_cm: f64,
    /// Diagonal in centimeters.
    pub diagonal_cm: f64,
}

impl ScreenDimensions {
    /// The all-zero initial state.
    pub const ZERO: Self = Self {
        width_cm: 0.0,
        height_cm: 0.0,
        diagonal_cm: 0.0,
    };

    /// Returns `true` once all three measurements are strictly positive.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.width_cm > 0.0 && self.height_cm > 0.0 && self.diagonal_cm > 0.0
    }
}

/// The screen field an edit drives; the other two are derived.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScreenField {
    /// Width, always entered in centimeters.
    Width,
    /// Height, always entered in centimeters.
    Height,
    /// Diagonal, entered in the currently selected unit.
    Diagonal,
}

/// Result of feeding one keystroke into [`ScreenPanel::edit_field`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit parsed and a reconciliation is pending behind the debounce.
    Scheduled,
    /// The edit did not parse; no state changed and nothing was scheduled.
    Rejected,
}

/// Derives a consistent measurement triple from a single driving field.
///
/// `ratio` must be strictly positive, which the [`AspectRatio`] catalog
/// guarantees.
#[must_use]
pub fn reconcile(field: ScreenField, value_cm: f64, ratio: f64) -> ScreenDimensions {
    match field {
        ScreenField::Diagonal => {
            let width_cm = value_cm * libm::cos(libm::atan(1.0 / ratio));
            ScreenDimensions {
                width_cm,
                height_cm: width_cm / ratio,
                diagonal_cm: value_cm,
            }
        }
        ScreenField::Width => {
            let height_cm = value_cm / ratio;
            ScreenDimensions {
                width_cm: value_cm,
                height_cm,
                diagonal_cm: libm::sqrt(value_cm * value_cm + height_cm * height_cm),
            }
        }
        ScreenField::Height => {
            let width_cm = value_cm * ratio;
            ScreenDimensions {
                width_cm,
                height_cm: value_cm,
                diagonal_cm: libm::sqrt(width_cm * width_cm + value_cm * value_cm),
            }
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct PendingEdit {
    field: ScreenField,
    value_cm: f64,
}

/// Stateful edit session over a [`ScreenDimensions`].
///
/// Hosts forward raw text on every keystroke via [`ScreenPanel::edit_field`]
/// and call [`ScreenPanel::poll`] as time passes; a reconciliation is
/// returned once, one second after the last accepted keystroke. The returned
/// value doubles as the change notification the validation gate uses to mark
/// staleness.
#[derive(Clone, Debug, Default)]
pub struct ScreenPanel {
    dims: ScreenDimensions,
    aspect: AspectRatio,
    unit: Unit,
    pending: Debounce<PendingEdit>,
}

impl ScreenPanel {
    /// Creates a panel with all-zero dimensions and catalog defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current (last reconciled) dimensions.
    #[must_use]
    pub fn dimensions(&self) -> ScreenDimensions {
        self.dims
    }

    /// Currently selected aspect ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect
    }

    /// Currently selected diagonal unit.
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Feeds one keystroke on `field`.
    ///
    /// Empty text parses as zero; non-numeric, negative, or non-finite text
    /// is rejected without touching any state. An accepted edit schedules the
    /// reconciliation [`EDIT_DEBOUNCE_MS`] after `now_ms`, replacing any
    /// previously pending edit (classic trailing debounce).
    ///
    /// Diagonal input is interpreted in the selected unit and converted to
    /// centimeters before reconciliation; width and height are always
    /// centimeters.
    pub fn edit_field(&mut self, field: ScreenField, raw: &str, now_ms: u64) -> EditOutcome {
        let Some(value) = parse_field(raw) else {
            return EditOutcome::Rejected;
        };
        let value_cm = match (field, self.unit) {
            (ScreenField::Diagonal, Unit::Imperial) => inches_to_cm(value),
            _ => value,
        };
        self.pending
            .schedule(now_ms, EDIT_DEBOUNCE_MS, PendingEdit { field, value_cm });
        EditOutcome::Scheduled
    }

    /// Fires the pending reconciliation once its deadline has passed.
    ///
    /// Returns the full reconciled dimensions (including partial or zero
    /// states) exactly once per debounce window; `None` while nothing is due.
    pub fn poll(&mut self, now_ms: u64) -> Option<ScreenDimensions> {
        let edit = self.pending.poll(now_ms)?;
        self.dims = reconcile(edit.field, edit.value_cm, self.aspect.ratio());
        Some(self.dims)
    }

    /// Selects a new aspect ratio.
    ///
    /// Recomputes immediately (no debounce) from the current diagonal when
    /// one is known; with a zero diagonal this is a no-op returning `None`.
    /// A pending debounced edit survives and fires later under the new
    /// ratio.
    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) -> Option<ScreenDimensions> {
        self.aspect = aspect;
        if self.dims.diagonal_cm > 0.0 {
            self.dims = reconcile(ScreenField::Diagonal, self.dims.diagonal_cm, aspect.ratio());
            Some(self.dims)
        } else {
            None
        }
    }

    /// Selects the diagonal entry/display unit.
    ///
    /// Display-only: the internal centimeter state is untouched, so width
    /// and height projections are unchanged and the diagonal projection is
    /// simply re-expressed in the new unit.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Display projection for a field, rounded to one decimal.
    ///
    /// The diagonal is expressed in the selected unit; width and height are
    /// centimeters. Pure projection of internal full-precision state.
    #[must_use]
    pub fn display_value(&self, field: ScreenField) -> f64 {
        match field {
            ScreenField::Width => round_to_tenth(self.dims.width_cm),
            ScreenField::Height => round_to_tenth(self.dims.height_cm),
            ScreenField::Diagonal => match self.unit {
                Unit::Metric => round_to_tenth(self.dims.diagonal_cm),
                Unit::Imperial => round_to_tenth(cm_to_inches(self.dims.diagonal_cm)),
            },
        }
    }

    /// Returns `true` while an edit is waiting behind the debounce.
    #[must_use]
    pub fn has_pending_edit(&self) -> bool {
        self.pending.is_pending()
    }

    /// Deadline of the pending edit, if any, in host milliseconds.
    #[must_use]
    pub fn pending_deadline_ms(&self) -> Option<u64> {
        self.pending.deadline_ms()
    }

    /// Discards any pending edit so nothing fires after teardown.
    pub fn cancel_pending(&mut self) {
        self.pending.cancel();
    }
}
