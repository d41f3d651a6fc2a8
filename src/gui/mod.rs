//! GUI module for the application.
//!
//! Provides the comparison window using egui/eframe: a control panel on the
//! left and the reference area with draggable overlays in the center.

pub mod render;
pub mod state;

use eframe::egui::{self, Rect, Sense, Vec2};

use crate::config::AppConfig;
use crate::monitor::{fit_reference_area, layout_overlays, OverlayLayout};

use state::{shortcuts_suppressed, FullscreenSync, GuiState, Shortcut, ViewMode};

/// System fonts with Hangul coverage, tried in order.
const KOREAN_FONT_PATHS: [&str; 6] = [
    "C:\\Windows\\Fonts\\malgun.ttf",
    "C:\\Windows\\Fonts\\gulim.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
];

/// Main GUI application struct.
pub struct GuiApp {
    /// Application state.
    state: GuiState,
    /// Tracks the window's real fullscreen state.
    fullscreen: FullscreenSync,
}

impl GuiApp {
    /// Create a new GUI application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, state: GuiState) -> Self {
        Self::setup_fonts(&cc.egui_ctx);
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            state,
            fullscreen: FullscreenSync::default(),
        }
    }

    /// Setup fonts with Korean support.
    fn setup_fonts(ctx: &egui::Context) {
        let mut fonts = egui::FontDefinitions::default();

        let mut font_loaded = false;
        for font_path in &KOREAN_FONT_PATHS {
            if let Ok(font_data) = std::fs::read(font_path) {
                fonts.font_data.insert(
                    "korean_font".to_owned(),
                    egui::FontData::from_owned(font_data).into(),
                );

                fonts
                    .families
                    .entry(egui::FontFamily::Proportional)
                    .or_default()
                    .insert(0, "korean_font".to_owned());
                fonts
                    .families
                    .entry(egui::FontFamily::Monospace)
                    .or_default()
                    .insert(0, "korean_font".to_owned());

                crate::log(&format!("Loaded Korean font from: {}", font_path));
                font_loaded = true;
                break;
            }
        }

        if !font_loaded {
            crate::log("Warning: Could not load a Korean font. Labels may not display correctly.");
        }

        ctx.set_fonts(fonts);
    }

    /// Collect shortcuts pressed this frame, unless a control or popup has focus.
    fn read_shortcuts(ctx: &egui::Context) -> Vec<Shortcut> {
        let (popup_open, widget_focused) =
            ctx.memory(|m| (m.any_popup_open(), m.focused().is_some()));
        if shortcuts_suppressed(ctx.wants_keyboard_input(), popup_open, widget_focused) {
            return Vec::new();
        }

        ctx.input(|i| {
            Shortcut::ALL_KEYS
                .iter()
                .filter(|key| i.key_pressed(**key))
                .filter_map(|key| Shortcut::from_key(*key))
                .collect()
        })
    }

    /// Apply control panel actions to the state.
    fn handle_panel_actions(&mut self, actions: render::PanelActions) {
        if let Some(key) = actions.reference {
            if let Err(e) = self.state.select_reference(key) {
                crate::log(&format!("GUI: Failed to change reference: {}", e));
            }
        }
        for (key, selected) in actions.toggled {
            if let Err(e) = self.state.set_comparison(key, selected) {
                crate::log(&format!("GUI: Failed to toggle {}: {}", key, e));
            }
        }
        if actions.reset_clicked {
            self.state.reset_positions();
        }
        if actions.fullscreen_clicked {
            self.state.toggle_fullscreen();
        }
        if actions.immersive_clicked {
            self.state.toggle_immersive();
        }
    }

    /// Draw the reference area and overlays, and route pointer drags.
    fn show_comparison_area(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_rect_before_wrap();
        let fitted = fit_reference_area(
            self.state.selection.reference(),
            (available.width(), available.height()),
        );
        let area = Rect::from_min_size(
            available.min + Vec2::new(fitted.left, fitted.top),
            Vec2::new(fitted.width, fitted.height),
        );
        ui.allocate_rect(available, Sense::hover());

        let painter = ui.painter().clone();
        let reference = self.state.selection.reference();
        render::paint_reference(&painter, area, reference);

        let overlays = layout_overlays(&self.state.selection, (area.width(), area.height()));
        for overlay in &overlays {
            let key = overlay.spec.key();
            let position = self
                .state
                .drag_position(key)
                .unwrap_or_else(|| overlay.rect.position());
            let rect = render::overlay_screen_rect(
                area,
                position.left,
                position.top,
                Vec2::new(overlay.rect.width, overlay.rect.height),
            );

            let response = ui.interact(rect, ui.id().with(("overlay", key)), Sense::drag());

            if response.drag_started() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    self.state
                        .begin_drag(key, (pointer.x, pointer.y), overlay.rect.position());
                }
            }
            if response.dragged() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    self.state.update_drag((pointer.x, pointer.y));
                }
            }
            if response.drag_stopped() && self.state.dragging(key) {
                self.state.end_drag();
            }

            let dragging = self.state.dragging(key);
            if dragging {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
            } else if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
            }

            // Repaint with the latest drag offset so the overlay follows the pointer this frame
            let draw_rect = match self.state.drag_position(key) {
                Some(p) => render::overlay_screen_rect(area, p.left, p.top, rect.size()),
                None => rect,
            };
            render::paint_overlay(&painter, draw_rect, overlay, reference, dragging);
        }
    }

    /// Floating button to bring the control panel back in immersive mode.
    fn show_immersive_exit(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("immersive_exit"))
            .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
            .show(ctx, |ui| {
                if ui.button("◳").on_hover_text("패널 보이기 (I키)").clicked() {
                    self.state.toggle_immersive();
                }
            });
    }

    /// Send a viewport command if the requested fullscreen state differs from the window's.
    fn sync_fullscreen(&mut self, ctx: &egui::Context) {
        if let Some(fullscreen) = self.fullscreen.command(self.state.view) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
        }
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actual_fullscreen = ctx.input(|i| i.viewport().fullscreen);
        self.fullscreen.observe(actual_fullscreen, &mut self.state.view);

        for shortcut in Self::read_shortcuts(ctx) {
            self.state.apply_shortcut(shortcut);
        }

        if !self.state.view.immersive {
            // The panel only reads ratios, so any area size will do
            let area_size = ctx.screen_rect().size();
            let overlays: Vec<OverlayLayout> =
                layout_overlays(&self.state.selection, (area_size.x, area_size.y));

            let actions = egui::SidePanel::left("control_panel")
                .resizable(false)
                .exact_width(280.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .show(ui, |ui| {
                            render::render_control_panel(
                                ui,
                                &self.state.selection,
                                &overlays,
                                self.state.view,
                            )
                        })
                        .inner
                })
                .inner;

            self.handle_panel_actions(actions);
        } else {
            self.show_immersive_exit(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_comparison_area(ui);
        });

        self.sync_fullscreen(ctx);
    }
}

/// Run the GUI application.
/// This function blocks until the window is closed.
pub fn run_gui(config: &AppConfig) -> anyhow::Result<()> {
    let view = ViewMode {
        fullscreen: false,
        immersive: config.start_immersive,
    };
    let mut state = GuiState::new(config.reference_key(), view)?;
    if config.start_fullscreen {
        state.toggle_fullscreen();
    }

    crate::log("GUI: Creating native options...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(Vec2::new(config.window_width, config.window_height))
            .with_min_inner_size(Vec2::new(640.0, 400.0))
            .with_title("Monitor Size Compare"),
        ..Default::default()
    };

    crate::log("GUI: Calling eframe::run_native...");

    eframe::run_native(
        "Monitor Size Compare",
        options,
        Box::new(move |cc| {
            crate::log("GUI: Creating GuiApp instance...");
            Ok(Box::new(GuiApp::new(cc, state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}
