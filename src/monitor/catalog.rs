//! Built-in monitor catalog.
//!
//! A static table of the monitor sizes the tool knows about, plus the
//! filter that decides which of them can be overlaid on a given reference.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use super::dimensions::{calculate_dimensions, scale_ratio, Dimensions};

/// Aspect ratio written as `W:H`. Both components are positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const WIDE: AspectRatio = AspectRatio::new(16, 9);
    pub const ULTRAWIDE: AspectRatio = AspectRatio::new(21, 9);

    /// Creates a ratio. Zero components panic (a compile error in const contexts).
    pub const fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "aspect ratio components must be positive");
        Self { width, height }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| anyhow!("Aspect ratio '{}' is not in W:H form", s))?;

        let width: u32 = w
            .trim()
            .parse()
            .with_context(|| format!("Invalid aspect ratio width in '{}'", s))?;
        let height: u32 = h
            .trim()
            .parse()
            .with_context(|| format!("Invalid aspect ratio height in '{}'", s))?;

        if width == 0 || height == 0 {
            return Err(anyhow!("Aspect ratio '{}' must have positive components", s));
        }

        Ok(Self { width, height })
    }
}

/// One catalog entry.
///
/// The diagonal is stored in tenths of an inch so entries can live in a
/// `const` table and compare exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonitorSpec {
    pub diagonal_tenths: u32,
    pub ratio: AspectRatio,
    pub label: &'static str,
}

impl MonitorSpec {
    pub const fn new(diagonal_tenths: u32, ratio: AspectRatio, label: &'static str) -> Self {
        Self {
            diagonal_tenths,
            ratio,
            label,
        }
    }

    /// Diagonal in inches.
    pub fn diagonal(&self) -> f64 {
        f64::from(self.diagonal_tenths) / 10.0
    }

    pub fn key(&self) -> MonitorKey {
        MonitorKey {
            diagonal_tenths: self.diagonal_tenths,
            ratio: self.ratio,
        }
    }

    /// Physical size in inches.
    pub fn dimensions(&self) -> Dimensions {
        calculate_dimensions(self.diagonal(), self.ratio)
    }

    /// Label with the ratio appended when it differs from `reference`'s.
    pub fn label_against(&self, reference: &MonitorSpec) -> String {
        if self.ratio == reference.ratio {
            self.label.to_string()
        } else {
            format!("{} ({})", self.label, self.ratio)
        }
    }

    /// Label with the ratio always appended, e.g. `32인치 (16:9)`.
    pub fn full_label(&self) -> String {
        format!("{} ({})", self.label, self.ratio)
    }
}

/// Identifies a catalog entry by diagonal and aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonitorKey {
    pub diagonal_tenths: u32,
    pub ratio: AspectRatio,
}

impl MonitorKey {
    /// Builds a key from a diagonal in inches, rounded to a tenth.
    pub fn from_inches(diagonal: f64, ratio: AspectRatio) -> Self {
        Self {
            diagonal_tenths: (diagonal * 10.0).round() as u32,
            ratio,
        }
    }
}

impl fmt::Display for MonitorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.diagonal_tenths / 10;
        let frac = self.diagonal_tenths % 10;
        if frac == 0 {
            write!(f, "{}-{}", whole, self.ratio)
        } else {
            write!(f, "{}.{}-{}", whole, frac, self.ratio)
        }
    }
}

/// All known monitors, grouped by aspect ratio, largest first.
pub static CATALOG: &[MonitorSpec] = &[
    MonitorSpec::new(320, AspectRatio::WIDE, "32인치"),
    MonitorSpec::new(270, AspectRatio::WIDE, "27인치"),
    MonitorSpec::new(240, AspectRatio::WIDE, "24인치"),
    MonitorSpec::new(220, AspectRatio::WIDE, "22인치"),
    MonitorSpec::new(215, AspectRatio::WIDE, "21.5인치"),
    MonitorSpec::new(190, AspectRatio::WIDE, "19인치"),
    MonitorSpec::new(340, AspectRatio::ULTRAWIDE, "34인치"),
    MonitorSpec::new(290, AspectRatio::ULTRAWIDE, "29인치"),
];

/// Default reference monitor: 32" 16:9.
pub const DEFAULT_REFERENCE: MonitorKey = MonitorKey {
    diagonal_tenths: 320,
    ratio: AspectRatio::WIDE,
};

/// Looks up a catalog entry by key.
pub fn find(key: MonitorKey) -> Option<&'static MonitorSpec> {
    CATALOG.iter().find(|spec| spec.key() == key)
}

/// Looks up a catalog entry by key, failing if it is not in the catalog.
pub fn lookup(key: MonitorKey) -> Result<&'static MonitorSpec> {
    find(key).ok_or_else(|| anyhow!("Monitor {} is not in the catalog", key))
}

/// Monitors that can be overlaid on `reference`.
///
/// Same-ratio entries with a smaller diagonal come first, followed by
/// entries of other ratios whose scale ratio against the reference is below 1.
pub fn eligible_comparisons(reference: &MonitorSpec) -> Vec<&'static MonitorSpec> {
    let same_ratio = CATALOG
        .iter()
        .filter(|spec| spec.ratio == reference.ratio)
        .filter(|spec| spec.diagonal_tenths < reference.diagonal_tenths);

    let other_ratio = CATALOG
        .iter()
        .filter(|spec| spec.ratio != reference.ratio)
        .filter(|spec| scale_ratio(spec, reference) < 1.0);

    same_ratio.chain(other_ratio).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(tenths: u32, ratio: AspectRatio) -> &'static MonitorSpec {
        find(MonitorKey {
            diagonal_tenths: tenths,
            ratio,
        })
        .expect("catalog entry")
    }

    fn keys(specs: &[&MonitorSpec]) -> Vec<String> {
        specs.iter().map(|s| s.key().to_string()).collect()
    }

    #[test]
    fn test_parse_aspect_ratio() {
        let ratio: AspectRatio = "21:9".parse().unwrap();
        assert_eq!(ratio, AspectRatio::ULTRAWIDE);
        let ratio: AspectRatio = " 16 : 10 ".parse().unwrap();
        assert_eq!(ratio, AspectRatio::new(16, 10));
    }

    #[test]
    fn test_parse_aspect_ratio_rejects_bad_input() {
        assert!("16x9".parse::<AspectRatio>().is_err());
        assert!("16:".parse::<AspectRatio>().is_err());
        assert!("0:9".parse::<AspectRatio>().is_err());
        assert!("16:0".parse::<AspectRatio>().is_err());
        assert!("-16:9".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_ratio_display() {
        assert_eq!(AspectRatio::WIDE.to_string(), "16:9");
    }

    #[test]
    fn test_key_display() {
        assert_eq!(spec(320, AspectRatio::WIDE).key().to_string(), "32-16:9");
        assert_eq!(spec(215, AspectRatio::WIDE).key().to_string(), "21.5-16:9");
    }

    #[test]
    fn test_key_from_inches() {
        let key = MonitorKey::from_inches(21.5, AspectRatio::WIDE);
        assert_eq!(key.diagonal_tenths, 215);
        assert!(find(key).is_some());
    }

    #[test]
    fn test_catalog_keys_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_lookup_missing() {
        let key = MonitorKey::from_inches(40.0, AspectRatio::WIDE);
        assert!(find(key).is_none());
        assert!(lookup(key).is_err());
    }

    #[test]
    fn test_default_reference_in_catalog() {
        assert!(find(DEFAULT_REFERENCE).is_some());
    }

    #[test]
    fn test_label_against() {
        let reference = spec(320, AspectRatio::WIDE);
        assert_eq!(spec(240, AspectRatio::WIDE).label_against(reference), "24인치");
        assert_eq!(
            spec(290, AspectRatio::ULTRAWIDE).label_against(reference),
            "29인치 (21:9)"
        );
    }

    #[test]
    fn test_eligible_for_32_wide() {
        let eligible = eligible_comparisons(spec(320, AspectRatio::WIDE));
        assert_eq!(
            keys(&eligible),
            vec!["27-16:9", "24-16:9", "22-16:9", "21.5-16:9", "19-16:9", "29-21:9"]
        );
    }

    #[test]
    fn test_eligible_for_34_ultrawide() {
        let eligible = eligible_comparisons(spec(340, AspectRatio::ULTRAWIDE));
        assert_eq!(
            keys(&eligible),
            vec![
                "29-21:9",
                "32-16:9",
                "27-16:9",
                "24-16:9",
                "22-16:9",
                "21.5-16:9",
                "19-16:9"
            ]
        );
    }

    #[test]
    fn test_eligible_for_29_ultrawide_excludes_wider_32() {
        let eligible = eligible_comparisons(spec(290, AspectRatio::ULTRAWIDE));
        let keys = keys(&eligible);
        assert!(!keys.contains(&"32-16:9".to_string()));
        assert!(keys.contains(&"27-16:9".to_string()));
    }

    #[test]
    fn test_eligible_for_smallest_is_empty() {
        let eligible = eligible_comparisons(spec(190, AspectRatio::WIDE));
        assert!(eligible.is_empty());
    }

    #[test]
    fn test_eligible_are_all_smaller() {
        for reference in CATALOG {
            for candidate in eligible_comparisons(reference) {
                assert!(scale_ratio(candidate, reference) < 1.0);
                assert_ne!(candidate.key(), reference.key());
            }
        }
    }
}
