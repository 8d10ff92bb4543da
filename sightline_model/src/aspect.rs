// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed catalog of selectable screen aspect ratios.

/// Named width/height ratio from the fixed catalog.
///
/// Every variant has a strictly positive numeric ratio, so reconciliation
/// never has to guard against a zero or negative aspect ratio.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    /// 16:9, the common television and monitor ratio.
    #[default]
    SixteenNine,
    /// 4:3, legacy displays and many projectors.
    FourThree,
    /// 21:9, ultra-wide.
    TwentyOneNine,
    /// 16:10.
    SixteenTen,
    /// 5:4.
    FiveFour,
}

impl AspectRatio {
    /// All catalog entries, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::SixteenNine,
        Self::FourThree,
        Self::TwentyOneNine,
        Self::SixteenTen,
        Self::FiveFour,
    ];

    /// The numeric width/height ratio.
    #[must_use]
    pub fn ratio(self) -> f64 {
        match self {
            Self::SixteenNine => 16.0 / 9.0,
            Self::FourThree => 4.0 / 3.0,
            Self::TwentyOneNine => 21.0 / 9.0,
            Self::SixteenTen => 16.0 / 10.0,
            Self::FiveFour => 5.0 / 4.0,
        }
    }

    /// Human-readable label for a ratio selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SixteenNine => "16:9",
            Self::FourThree => "4:3",
            Self::TwentyOneNine => "21:9",
            Self::SixteenTen => "16:10",
            Self::FiveFour => "5:4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AspectRatio;

    #[test]
    fn catalog_is_complete_and_positive() {
        assert_eq!(AspectRatio::ALL.len(), 5);
        for ratio in AspectRatio::ALL {
            assert!(ratio.ratio() > 0.0, "ratio {} must be positive", ratio.label());
        }
    }

    #[test]
    fn default_is_sixteen_nine() {
        assert_eq!(AspectRatio::default(), AspectRatio::SixteenNine);
        assert!((AspectRatio::default().ratio() - 16.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn labels_match_variants() {
        assert_eq!(AspectRatio::TwentyOneNine.label(), "21:9");
        assert_eq!(AspectRatio::FiveFour.label(), "5:4");
    }
}
