//! Physical size calculations.
//!
//! Converts a diagonal size and aspect ratio into width/height in inches,
//! and computes the linear scale factor used to draw one monitor inside another.

use super::catalog::{AspectRatio, MonitorSpec};

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Physical width and height of a panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Returns the same dimensions converted from inches to centimeters.
    pub fn to_centimeters(self) -> Self {
        Self {
            width: inch_to_cm(self.width),
            height: inch_to_cm(self.height),
        }
    }

    /// Formats as `27.9" × 15.7" (70.8cm × 39.9cm)`.
    pub fn describe(&self) -> String {
        let cm = self.to_centimeters();
        format!(
            "{:.1}\" × {:.1}\" ({:.1}cm × {:.1}cm)",
            self.width, self.height, cm.width, cm.height
        )
    }

    /// Formats inches only: `27.9" × 15.7"`.
    pub fn describe_inches(&self) -> String {
        format!("{:.1}\" × {:.1}\"", self.width, self.height)
    }
}

/// Computes width and height from a diagonal (inches) and aspect ratio.
///
/// `width / height == W / H` and `width² + height² == diagonal²`.
pub fn calculate_dimensions(diagonal: f64, ratio: AspectRatio) -> Dimensions {
    debug_assert!(diagonal > 0.0, "diagonal must be positive, got {diagonal}");

    let w = f64::from(ratio.width);
    let h = f64::from(ratio.height);
    let unit_diagonal = (w * w + h * h).sqrt();

    Dimensions {
        width: diagonal * w / unit_diagonal,
        height: diagonal * h / unit_diagonal,
    }
}

/// Converts inches to centimeters.
pub fn inch_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Linear scale factor for drawing `target` inside a rendering of `base`.
///
/// Same aspect ratio: ratio of diagonals. Different aspect ratio: ratio of
/// physical widths.
pub fn scale_ratio(target: &MonitorSpec, base: &MonitorSpec) -> f64 {
    if target.ratio == base.ratio {
        return target.diagonal() / base.diagonal();
    }

    let target_dim = target.dimensions();
    let base_dim = base.dimensions();
    target_dim.width / base_dim.width
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: AspectRatio = AspectRatio::new(16, 9);
    const ULTRAWIDE: AspectRatio = AspectRatio::new(21, 9);

    #[test]
    fn test_dimensions_32_inch_16_9() {
        let dim = calculate_dimensions(32.0, WIDE);
        assert!((dim.width - 27.9).abs() < 0.05);
        assert!((dim.height - 15.7).abs() < 0.05);
    }

    #[test]
    fn test_dimensions_satisfy_pythagoras_and_ratio() {
        let ratios = [
            WIDE,
            ULTRAWIDE,
            AspectRatio::new(4, 3),
            AspectRatio::new(16, 10),
            AspectRatio::new(32, 9),
            AspectRatio::new(1, 1),
            AspectRatio::new(9, 16),
        ];
        let diagonals = [0.5, 13.3, 21.5, 27.0, 49.0, 100.0];

        for ratio in ratios {
            for diagonal in diagonals {
                let dim = calculate_dimensions(diagonal, ratio);
                let hyp = dim.width * dim.width + dim.height * dim.height;
                assert!(
                    (hyp - diagonal * diagonal).abs() < 1e-9 * diagonal * diagonal,
                    "pythagoras failed for {diagonal} {ratio}"
                );
                let expected = f64::from(ratio.width) / f64::from(ratio.height);
                assert!(
                    (dim.width / dim.height - expected).abs() < 1e-9,
                    "ratio failed for {diagonal} {ratio}"
                );
            }
        }
    }

    #[test]
    fn test_width_34_inch_ultrawide() {
        let dim = calculate_dimensions(34.0, ULTRAWIDE);
        assert!((dim.width - 31.25).abs() < 0.05);
        assert!((dim.height - 13.4).abs() < 0.05);
    }

    #[test]
    fn test_inch_to_cm() {
        assert!((inch_to_cm(1.0) - 2.54).abs() < 1e-12);
        assert!((inch_to_cm(10.0) - 25.4).abs() < 1e-12);
    }

    #[test]
    fn test_describe() {
        let dim = Dimensions {
            width: 10.0,
            height: 5.0,
        };
        assert_eq!(dim.describe(), "10.0\" × 5.0\" (25.4cm × 12.7cm)");
        assert_eq!(dim.describe_inches(), "10.0\" × 5.0\"");
    }

    #[test]
    fn test_scale_ratio_self_is_one() {
        for spec in crate::monitor::catalog::CATALOG {
            assert!((scale_ratio(spec, spec) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_scale_ratio_same_aspect_is_diagonal_quotient() {
        let base = MonitorSpec::new(320, WIDE, "32인치");
        let target = MonitorSpec::new(240, WIDE, "24인치");
        assert_eq!(scale_ratio(&target, &base), 24.0 / 32.0);
        assert_eq!(scale_ratio(&target, &base), 0.75);

        let odd = MonitorSpec::new(215, WIDE, "21.5인치");
        assert_eq!(scale_ratio(&odd, &base), 21.5 / 32.0);
    }

    #[test]
    fn test_scale_ratio_cross_aspect_uses_width() {
        let base = MonitorSpec::new(320, WIDE, "32인치");
        let target = MonitorSpec::new(340, ULTRAWIDE, "34인치");

        let expected = calculate_dimensions(34.0, ULTRAWIDE).width
            / calculate_dimensions(32.0, WIDE).width;
        assert_eq!(scale_ratio(&target, &base), expected);
        assert!((scale_ratio(&target, &base) - 1.12).abs() < 0.005);

        // Not the diagonal quotient
        assert!((scale_ratio(&target, &base) - 34.0 / 32.0).abs() > 0.05);
    }
}
