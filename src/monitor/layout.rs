//! Overlay sizing and placement inside the reference area.
//!
//! All values are in layout pixels relative to the reference area's
//! top-left corner. Nothing here is cached; callers recompute every frame,
//! so a resize or view-mode change simply produces new defaults.

use super::catalog::MonitorSpec;
use super::dimensions::scale_ratio;
use super::selection::{OverlayPosition, SelectionState};

/// Margin kept around the reference area inside the available space.
pub const AREA_MARGIN: f32 = 24.0;

/// An axis-aligned rectangle in layout pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl OverlayRect {
    pub fn position(&self) -> OverlayPosition {
        OverlayPosition::new(self.left, self.top)
    }
}

/// One overlay ready to draw.
#[derive(Clone, Debug)]
pub struct OverlayLayout {
    pub spec: &'static MonitorSpec,
    pub rect: OverlayRect,
    /// Linear scale factor against the reference (1.0 = same size).
    pub ratio: f64,
}

impl OverlayLayout {
    /// Percentage text, e.g. `75.0%`.
    pub fn percent_text(&self) -> String {
        format!("{:.1}%", self.ratio * 100.0)
    }
}

/// Size of `target` drawn inside a reference area of `area` pixels.
///
/// Same ratio scales both axes by the scale ratio. Different ratios scale
/// each axis by the matching physical dimension quotient.
pub fn overlay_size(target: &MonitorSpec, reference: &MonitorSpec, area: (f32, f32)) -> (f32, f32) {
    let (area_w, area_h) = area;

    if target.ratio == reference.ratio {
        let ratio = scale_ratio(target, reference) as f32;
        return (area_w * ratio, area_h * ratio);
    }

    let target_dim = target.dimensions();
    let ref_dim = reference.dimensions();
    (
        area_w * (target_dim.width / ref_dim.width) as f32,
        area_h * (target_dim.height / ref_dim.height) as f32,
    )
}

/// Position that centers a `size` rectangle in `area`.
pub fn centered_position(size: (f32, f32), area: (f32, f32)) -> OverlayPosition {
    OverlayPosition::new((area.0 - size.0) / 2.0, (area.1 - size.1) / 2.0)
}

/// Lays out every selected comparison in stacking order.
///
/// Saved positions win over the centered default.
pub fn layout_overlays(state: &SelectionState, area: (f32, f32)) -> Vec<OverlayLayout> {
    let reference = state.reference();

    state
        .comparisons()
        .iter()
        .map(|&spec| {
            let (width, height) = overlay_size(spec, reference, area);
            let position = state
                .position(spec.key())
                .unwrap_or_else(|| centered_position((width, height), area));

            OverlayLayout {
                spec,
                rect: OverlayRect {
                    left: position.left,
                    top: position.top,
                    width,
                    height,
                },
                ratio: scale_ratio(spec, reference),
            }
        })
        .collect()
}

/// Largest rectangle with `reference`'s aspect ratio that fits in `available`
/// after removing [`AREA_MARGIN`] on every side, centered.
pub fn fit_reference_area(reference: &MonitorSpec, available: (f32, f32)) -> OverlayRect {
    let max_w = (available.0 - 2.0 * AREA_MARGIN).max(1.0);
    let max_h = (available.1 - 2.0 * AREA_MARGIN).max(1.0);
    let aspect = reference.ratio.width as f32 / reference.ratio.height as f32;

    let (width, height) = if max_w / max_h > aspect {
        (max_h * aspect, max_h)
    } else {
        (max_w, max_w / aspect)
    };

    OverlayRect {
        left: (available.0 - width) / 2.0,
        top: (available.1 - height) / 2.0,
        width,
        height,
    }
}
