//! Pointer drag sessions for overlays.

use super::catalog::MonitorKey;
use super::selection::OverlayPosition;

/// An in-progress drag of one overlay.
///
/// Created on pointer press, queried on every move, consumed on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    key: MonitorKey,
    start_pointer: (f32, f32),
    initial: OverlayPosition,
}

impl DragSession {
    /// Starts a drag of `key` whose overlay currently sits at `initial`.
    pub fn begin(key: MonitorKey, pointer: (f32, f32), initial: OverlayPosition) -> Self {
        Self {
            key,
            start_pointer: pointer,
            initial,
        }
    }

    pub fn key(&self) -> MonitorKey {
        self.key
    }

    /// Where the overlay should be drawn with the pointer at `pointer`.
    pub fn position_at(&self, pointer: (f32, f32)) -> OverlayPosition {
        let dx = pointer.0 - self.start_pointer.0;
        let dy = pointer.1 - self.start_pointer.1;
        OverlayPosition::new(self.initial.left + dx, self.initial.top + dy)
    }

    /// Ends the drag, returning the key and the final position to record.
    pub fn finish(self, pointer: (f32, f32)) -> (MonitorKey, OverlayPosition) {
        (self.key, self.position_at(pointer))
    }
}
