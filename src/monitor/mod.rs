//! Monitor geometry and comparison state.
//!
//! This module provides:
//! - Physical dimensions from diagonal size and aspect ratio
//! - Scale ratios between two monitors
//! - The built-in catalog and the eligible-comparison filter
//! - Selection state, drag sessions and overlay layout

pub mod catalog;
pub mod dimensions;
pub mod drag;
pub mod layout;
pub mod selection;

pub use catalog::{
    eligible_comparisons, AspectRatio, MonitorKey, MonitorSpec, CATALOG, DEFAULT_REFERENCE,
};
pub use drag::DragSession;
pub use layout::{fit_reference_area, layout_overlays, OverlayLayout};
pub use selection::{OverlayPosition, SelectionState};
