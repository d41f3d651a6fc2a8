//! GUI application state management.
//!
//! Wraps the selection state with view modes, keyboard shortcuts and the
//! drag currently in progress.

use anyhow::Result;
use eframe::egui::Key;

use crate::monitor::{DragSession, MonitorKey, OverlayPosition, SelectionState};

/// Keyboard shortcuts understood by the main window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Leave immersive mode, or fullscreen if not immersive
    Escape,
    ToggleFullscreen,
    ToggleImmersive,
    ResetPositions,
}

impl Shortcut {
    pub const ALL_KEYS: [Key; 4] = [Key::Escape, Key::F, Key::I, Key::R];

    /// Maps a key to a shortcut. Letter keys match regardless of shift.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Escape => Some(Self::Escape),
            Key::F => Some(Self::ToggleFullscreen),
            Key::I => Some(Self::ToggleImmersive),
            Key::R => Some(Self::ResetPositions),
            _ => None,
        }
    }
}

/// Whether shortcuts should be ignored this frame.
///
/// Keys belong to the focused control while a text field, checkbox or
/// combo box has focus, or while a popup is open.
pub fn shortcuts_suppressed(wants_keyboard_input: bool, popup_open: bool, widget_focused: bool) -> bool {
    wants_keyboard_input || popup_open || widget_focused
}

/// Window presentation modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewMode {
    pub fullscreen: bool,
    /// Control panel hidden
    pub immersive: bool,
}

/// Keeps [`ViewMode::fullscreen`] in step with the real window.
///
/// The window manager can leave fullscreen on its own, and the window only
/// reports a requested change a frame or more after the command is sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FullscreenSync {
    /// Last value sent to or observed from the window.
    applied: bool,
    /// A command was sent and the window has not confirmed it yet.
    pending: bool,
}

impl FullscreenSync {
    /// Adopts the window's reported fullscreen state. Call before handling input.
    pub fn observe(&mut self, actual: Option<bool>, view: &mut ViewMode) {
        let Some(actual) = actual else {
            return;
        };

        if self.pending {
            if actual == self.applied {
                self.pending = false;
            }
            return;
        }

        if actual != self.applied {
            self.applied = actual;
            view.fullscreen = actual;
            crate::log(&format!("Fullscreen changed by window: {}", actual));
        }
    }

    /// Value to send to the window if `view` differs from what it has.
    pub fn command(&mut self, view: ViewMode) -> Option<bool> {
        if view.fullscreen == self.applied {
            return None;
        }
        self.applied = view.fullscreen;
        self.pending = true;
        Some(self.applied)
    }
}

/// A drag in progress together with the latest pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveDrag {
    pub session: DragSession,
    pub pointer: (f32, f32),
}

impl ActiveDrag {
    /// Current on-screen position of the dragged overlay.
    pub fn position(&self) -> OverlayPosition {
        self.session.position_at(self.pointer)
    }
}

/// GUI application state.
#[derive(Debug)]
pub struct GuiState {
    /// Reference, comparisons and saved positions.
    pub selection: SelectionState,
    /// Current view modes.
    pub view: ViewMode,
    /// Overlay being dragged, if any.
    pub drag: Option<ActiveDrag>,
}

impl GuiState {
    pub fn new(reference: MonitorKey, view: ViewMode) -> Result<Self> {
        Ok(Self {
            selection: SelectionState::new(reference)?,
            view,
            drag: None,
        })
    }

    /// Replaces the reference monitor, dropping any drag in progress.
    pub fn select_reference(&mut self, key: MonitorKey) -> Result<()> {
        self.selection.set_reference(key)?;
        self.drag = None;
        Ok(())
    }

    /// Selects or deselects a comparison monitor.
    pub fn set_comparison(&mut self, key: MonitorKey, selected: bool) -> Result<()> {
        self.selection.toggle_comparison(key, selected)?;
        if !selected && self.dragging(key) {
            self.drag = None;
        }
        Ok(())
    }

    pub fn reset_positions(&mut self) {
        self.drag = None;
        self.selection.reset_positions();
    }

    pub fn toggle_fullscreen(&mut self) {
        self.view.fullscreen = !self.view.fullscreen;
        crate::log(&format!("Fullscreen: {}", self.view.fullscreen));
    }

    pub fn toggle_immersive(&mut self) {
        self.view.immersive = !self.view.immersive;
        crate::log(&format!("Immersive mode: {}", self.view.immersive));
    }

    /// Applies a keyboard shortcut.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::Escape => {
                if self.view.immersive {
                    self.toggle_immersive();
                } else if self.view.fullscreen {
                    self.toggle_fullscreen();
                }
            }
            Shortcut::ToggleFullscreen => self.toggle_fullscreen(),
            Shortcut::ToggleImmersive => self.toggle_immersive(),
            Shortcut::ResetPositions => self.reset_positions(),
        }
    }

    /// Whether `key` is the overlay being dragged.
    pub fn dragging(&self, key: MonitorKey) -> bool {
        self.drag.is_some_and(|d| d.session.key() == key)
    }

    /// Starts dragging `key` from its current position.
    pub fn begin_drag(&mut self, key: MonitorKey, pointer: (f32, f32), initial: OverlayPosition) {
        self.drag = Some(ActiveDrag {
            session: DragSession::begin(key, pointer, initial),
            pointer,
        });
    }

    /// Moves the active drag to `pointer`.
    pub fn update_drag(&mut self, pointer: (f32, f32)) {
        if let Some(drag) = &mut self.drag {
            drag.pointer = pointer;
        }
    }

    /// Ends the active drag and saves the overlay's final position.
    ///
    /// Returns false if nothing was recorded.
    pub fn end_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        let (key, position) = drag.session.finish(drag.pointer);
        self.selection.record_position(key, position)
    }

    /// Position to draw for `key` while it is being dragged.
    pub fn drag_position(&self, key: MonitorKey) -> Option<OverlayPosition> {
        self.drag
            .filter(|d| d.session.key() == key)
            .map(|d| d.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{AspectRatio, DEFAULT_REFERENCE};

    fn key(inches: f64, ratio: AspectRatio) -> MonitorKey {
        MonitorKey::from_inches(inches, ratio)
    }

    fn state() -> GuiState {
        GuiState::new(DEFAULT_REFERENCE, ViewMode::default()).unwrap()
    }

    #[test]
    fn test_shortcut_keys() {
        assert_eq!(Shortcut::from_key(Key::Escape), Some(Shortcut::Escape));
        assert_eq!(Shortcut::from_key(Key::F), Some(Shortcut::ToggleFullscreen));
        assert_eq!(Shortcut::from_key(Key::I), Some(Shortcut::ToggleImmersive));
        assert_eq!(Shortcut::from_key(Key::R), Some(Shortcut::ResetPositions));
        assert_eq!(Shortcut::from_key(Key::A), None);
        for key in Shortcut::ALL_KEYS {
            assert!(Shortcut::from_key(key).is_some());
        }
    }

    #[test]
    fn test_escape_leaves_immersive_first() {
        let mut state = state();
        state.view = ViewMode {
            fullscreen: true,
            immersive: true,
        };

        state.apply_shortcut(Shortcut::Escape);
        assert!(!state.view.immersive);
        assert!(state.view.fullscreen);

        state.apply_shortcut(Shortcut::Escape);
        assert!(!state.view.fullscreen);

        // Nothing left to exit
        state.apply_shortcut(Shortcut::Escape);
        assert_eq!(state.view, ViewMode::default());
    }

    #[test]
    fn test_toggle_shortcuts() {
        let mut state = state();
        state.apply_shortcut(Shortcut::ToggleFullscreen);
        assert!(state.view.fullscreen);
        state.apply_shortcut(Shortcut::ToggleImmersive);
        assert!(state.view.immersive);
        state.apply_shortcut(Shortcut::ToggleFullscreen);
        assert!(!state.view.fullscreen);
        assert!(state.view.immersive);
    }

    #[test]
    fn test_reset_shortcut_clears_positions_only() {
        let mut state = state();
        let k = key(24.0, AspectRatio::WIDE);
        state.set_comparison(k, true).unwrap();
        state.selection.record_position(k, OverlayPosition::new(1.0, 1.0));

        state.apply_shortcut(Shortcut::ResetPositions);
        assert!(state.selection.is_selected(k));
        assert_eq!(state.selection.position(k), None);
    }

    #[test]
    fn test_shortcuts_suppressed_by_any_focus() {
        assert!(!shortcuts_suppressed(false, false, false));
        assert!(shortcuts_suppressed(true, false, false));
        assert!(shortcuts_suppressed(false, true, false));
        // A focused checkbox or combo box swallows the keys too
        assert!(shortcuts_suppressed(false, false, true));
    }

    #[test]
    fn test_fullscreen_sync_sends_toggle_once() {
        let mut sync = FullscreenSync::default();
        let mut view = ViewMode::default();
        assert_eq!(sync.command(view), None);

        view.fullscreen = true;
        assert_eq!(sync.command(view), Some(true));
        assert_eq!(sync.command(view), None);
    }

    #[test]
    fn test_fullscreen_sync_ignores_stale_report_while_pending() {
        let mut sync = FullscreenSync::default();
        let mut view = ViewMode {
            fullscreen: true,
            immersive: false,
        };
        sync.command(view);

        // Window has not switched yet
        sync.observe(Some(false), &mut view);
        assert!(view.fullscreen);

        sync.observe(Some(true), &mut view);
        assert!(view.fullscreen);
    }

    #[test]
    fn test_fullscreen_left_by_window_manager() {
        let mut sync = FullscreenSync::default();
        let mut state = state();
        state.toggle_fullscreen();
        assert_eq!(sync.command(state.view), Some(true));
        sync.observe(Some(true), &mut state.view);

        // The window manager drops fullscreen behind the app's back
        sync.observe(Some(false), &mut state.view);
        assert!(!state.view.fullscreen);
        assert_eq!(sync.command(state.view), None);

        // The next F press enters fullscreen again instead of doing nothing
        state.apply_shortcut(Shortcut::ToggleFullscreen);
        assert_eq!(sync.command(state.view), Some(true));
    }

    #[test]
    fn test_fullscreen_sync_without_report() {
        let mut sync = FullscreenSync::default();
        let mut view = ViewMode::default();
        sync.observe(None, &mut view);
        assert_eq!(view, ViewMode::default());
    }

    #[test]
    fn test_drag_lifecycle_records_position() {
        let mut state = state();
        let k = key(27.0, AspectRatio::WIDE);
        state.set_comparison(k, true).unwrap();

        state.begin_drag(k, (100.0, 100.0), OverlayPosition::new(10.0, 20.0));
        assert!(state.dragging(k));
        state.update_drag((150.0, 80.0));
        assert_eq!(state.drag_position(k), Some(OverlayPosition::new(60.0, 0.0)));
        // Nothing is saved until release
        assert_eq!(state.selection.position(k), None);

        assert!(state.end_drag());
        assert!(state.drag.is_none());
        assert_eq!(state.selection.position(k), Some(OverlayPosition::new(60.0, 0.0)));
    }

    #[test]
    fn test_end_drag_without_session() {
        let mut state = state();
        assert!(!state.end_drag());
    }

    #[test]
    fn test_deselect_cancels_drag() {
        let mut state = state();
        let k = key(27.0, AspectRatio::WIDE);
        state.set_comparison(k, true).unwrap();
        state.begin_drag(k, (0.0, 0.0), OverlayPosition::new(0.0, 0.0));

        state.set_comparison(k, false).unwrap();
        assert!(state.drag.is_none());
        assert!(!state.end_drag());
    }

    #[test]
    fn test_select_reference_cancels_drag_and_clears() {
        let mut state = state();
        let k = key(27.0, AspectRatio::WIDE);
        state.set_comparison(k, true).unwrap();
        state.begin_drag(k, (0.0, 0.0), OverlayPosition::new(0.0, 0.0));

        state.select_reference(key(34.0, AspectRatio::ULTRAWIDE)).unwrap();
        assert!(state.drag.is_none());
        assert!(state.selection.comparisons().is_empty());
    }
}
