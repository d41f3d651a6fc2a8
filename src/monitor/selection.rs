//! Selection state: the reference monitor, the overlaid comparisons, and
//! where the user has dragged each overlay.

use std::collections::HashMap;

use anyhow::Result;

use super::catalog::{self, MonitorKey, MonitorSpec};

/// Top-left corner of an overlay, in pixels relative to the reference area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayPosition {
    pub left: f32,
    pub top: f32,
}

impl OverlayPosition {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

/// Mutable comparison state owned by the GUI.
///
/// There is always exactly one reference. Comparisons keep insertion order,
/// which is also the overlay stacking order.
#[derive(Clone, Debug)]
pub struct SelectionState {
    reference: &'static MonitorSpec,
    comparisons: Vec<&'static MonitorSpec>,
    positions: HashMap<MonitorKey, OverlayPosition>,
}

impl SelectionState {
    /// Creates a state with `key` as the reference and nothing selected.
    pub fn new(key: MonitorKey) -> Result<Self> {
        let reference = catalog::lookup(key)?;
        Ok(Self {
            reference,
            comparisons: Vec::new(),
            positions: HashMap::new(),
        })
    }

    pub fn reference(&self) -> &'static MonitorSpec {
        self.reference
    }

    /// Selected comparisons in stacking order.
    pub fn comparisons(&self) -> &[&'static MonitorSpec] {
        &self.comparisons
    }

    pub fn is_selected(&self, key: MonitorKey) -> bool {
        self.comparisons.iter().any(|spec| spec.key() == key)
    }

    /// Saved position for `key`, if the overlay has been dragged.
    pub fn position(&self, key: MonitorKey) -> Option<OverlayPosition> {
        self.positions.get(&key).copied()
    }

    pub fn has_saved_positions(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Replaces the reference monitor and clears every comparison and position.
    ///
    /// Unknown keys leave the state untouched.
    pub fn set_reference(&mut self, key: MonitorKey) -> Result<()> {
        let reference = catalog::lookup(key)?;

        self.reference = reference;
        self.comparisons.clear();
        self.positions.clear();

        crate::log(&format!("Reference monitor set to {}", key));
        Ok(())
    }

    /// Adds (`selected == true`) or removes a comparison monitor.
    ///
    /// Adding is idempotent. Removing also discards the saved position.
    /// Unknown keys leave the state untouched.
    pub fn toggle_comparison(&mut self, key: MonitorKey, selected: bool) -> Result<()> {
        let spec = catalog::lookup(key)?;

        if selected {
            if !self.is_selected(key) {
                self.comparisons.push(spec);
                crate::log(&format!("Comparison added: {}", key));
            }
        } else {
            self.comparisons.retain(|s| s.key() != key);
            self.positions.remove(&key);
            crate::log(&format!("Comparison removed: {}", key));
        }

        Ok(())
    }

    /// Saves the dragged position of a selected overlay.
    ///
    /// Returns false and does nothing if `key` is not currently selected.
    pub fn record_position(&mut self, key: MonitorKey, position: OverlayPosition) -> bool {
        if !self.is_selected(key) {
            return false;
        }
        self.positions.insert(key, position);
        true
    }

    /// Forgets all dragged positions; the selection is kept.
    pub fn reset_positions(&mut self) {
        self.positions.clear();
        crate::log("Overlay positions reset");
    }
}
