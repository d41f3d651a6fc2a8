//! GUI rendering functions.
//!
//! Contains the control panel widgets and the painter code for the
//! reference area and its overlays.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, RichText, Stroke, Vec2};

use crate::monitor::{
    eligible_comparisons, MonitorKey, MonitorSpec, OverlayLayout, SelectionState, CATALOG,
};

use super::state::ViewMode;

const REFERENCE_FILL: Color32 = Color32::from_rgb(30, 34, 42);
const REFERENCE_BORDER: Color32 = Color32::from_rgb(120, 128, 140);
const SECONDARY_TEXT: Color32 = Color32::from_rgb(150, 156, 166);

/// Fixed colour for each catalog size.
pub fn monitor_color(spec: &MonitorSpec) -> Color32 {
    match spec.diagonal_tenths {
        340 => Color32::from_rgb(239, 68, 68),
        320 => Color32::from_rgb(59, 130, 246),
        290 => Color32::from_rgb(234, 179, 8),
        270 => Color32::from_rgb(34, 197, 94),
        240 => Color32::from_rgb(249, 115, 22),
        220 => Color32::from_rgb(168, 85, 247),
        215 => Color32::from_rgb(236, 72, 153),
        190 => Color32::from_rgb(20, 184, 166),
        _ => Color32::LIGHT_GRAY,
    }
}

/// Actions requested from the control panel this frame.
#[derive(Debug, Default)]
pub struct PanelActions {
    pub reference: Option<MonitorKey>,
    pub toggled: Vec<(MonitorKey, bool)>,
    pub reset_clicked: bool,
    pub fullscreen_clicked: bool,
    pub immersive_clicked: bool,
}

/// Small filled circle used as a colour legend.
fn color_dot(ui: &mut egui::Ui, color: Color32) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(12.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 5.0, color);
}

/// Render the reference selector.
fn render_reference_select(
    ui: &mut egui::Ui,
    selection: &SelectionState,
    actions: &mut PanelActions,
) {
    ui.label(RichText::new("내 모니터").strong());
    ui.add_space(4.0);

    let current = selection.reference();
    let mut chosen = current.key();

    egui::ComboBox::from_id_salt("reference_monitor")
        .selected_text(current.full_label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for spec in CATALOG {
                ui.selectable_value(&mut chosen, spec.key(), spec.full_label());
            }
        });

    if chosen != current.key() {
        actions.reference = Some(chosen);
    }
}

/// Render one checkbox per eligible comparison monitor.
fn render_compare_options(
    ui: &mut egui::Ui,
    selection: &SelectionState,
    actions: &mut PanelActions,
) {
    ui.label(RichText::new("비교할 모니터").strong());
    ui.add_space(4.0);

    let reference = selection.reference();
    let candidates = eligible_comparisons(reference);

    if candidates.is_empty() {
        ui.label(RichText::new("더 작은 모니터가 없습니다").color(SECONDARY_TEXT));
        return;
    }

    for spec in candidates {
        let key = spec.key();
        let mut checked = selection.is_selected(key);

        ui.horizontal(|ui| {
            let response = ui.checkbox(&mut checked, "");
            color_dot(ui, monitor_color(spec));
            ui.label(spec.label_against(reference));

            if response.changed() {
                actions.toggled.push((key, checked));
            }
        });
    }
}

/// Render the reset, fullscreen and immersive buttons.
fn render_view_buttons(
    ui: &mut egui::Ui,
    selection: &SelectionState,
    view: ViewMode,
    actions: &mut PanelActions,
) {
    // Reset is only useful once something has been dragged
    ui.add_enabled_ui(selection.has_saved_positions(), |ui| {
        if ui.button("↺ 위치 초기화 (R)").clicked() {
            actions.reset_clicked = true;
        }
    });

    ui.horizontal(|ui| {
        let fullscreen_text = if view.fullscreen {
            "⛶ 창 모드"
        } else {
            "⛶ 전체 화면"
        };
        if ui.button(fullscreen_text).on_hover_text("F키").clicked() {
            actions.fullscreen_clicked = true;
        }

        if ui.button("◱").on_hover_text("패널 숨기기 (I키)").clicked() {
            actions.immersive_clicked = true;
        }
    });
}

/// Info panel row label: the bare catalog label, without a ratio suffix.
fn info_label(spec: &MonitorSpec) -> String {
    format!("{}:", spec.label)
}

/// Render the per-comparison summary.
fn render_info_panel(ui: &mut egui::Ui, overlays: &[OverlayLayout]) {
    ui.label(RichText::new("비교 정보").strong());
    ui.add_space(4.0);

    if overlays.is_empty() {
        ui.label(RichText::new("비교할 모니터를 선택하세요").color(SECONDARY_TEXT));
        return;
    }

    for overlay in overlays {
        let color = monitor_color(overlay.spec);
        ui.horizontal_wrapped(|ui| {
            color_dot(ui, color);
            ui.label(info_label(overlay.spec));
            ui.label(RichText::new(overlay.percent_text()).color(color).strong());
            ui.label(
                RichText::new(format!("({})", overlay.spec.dimensions().describe_inches()))
                    .color(SECONDARY_TEXT),
            );
        });
    }
}

/// Render the whole control panel. Returns what the user asked for.
pub fn render_control_panel(
    ui: &mut egui::Ui,
    selection: &SelectionState,
    overlays: &[OverlayLayout],
    view: ViewMode,
) -> PanelActions {
    let mut actions = PanelActions::default();

    ui.heading("모니터 크기 비교");
    ui.add_space(12.0);

    render_reference_select(ui, selection, &mut actions);

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    render_compare_options(ui, selection, &mut actions);

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    render_view_buttons(ui, selection, view, &mut actions);

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    render_info_panel(ui, overlays);

    actions
}

/// Paint the reference monitor area with its label.
pub fn paint_reference(painter: &egui::Painter, area: Rect, reference: &MonitorSpec) {
    painter.rect_filled(area, 6.0, REFERENCE_FILL);
    painter.rect_stroke(area, 6.0, Stroke::new(2.0, REFERENCE_BORDER));

    let origin = area.left_top() + Vec2::new(12.0, 10.0);
    painter.text(
        origin,
        Align2::LEFT_TOP,
        reference.full_label(),
        FontId::proportional(18.0),
        Color32::WHITE,
    );
    painter.text(
        origin + Vec2::new(0.0, 24.0),
        Align2::LEFT_TOP,
        reference.dimensions().describe(),
        FontId::proportional(13.0),
        SECONDARY_TEXT,
    );
}

/// Screen rectangle of an overlay whose top-left is `position` relative to `area`.
pub fn overlay_screen_rect(area: Rect, left: f32, top: f32, size: Vec2) -> Rect {
    Rect::from_min_size(Pos2::new(area.left() + left, area.top() + top), size)
}

/// Paint one overlay: translucent fill, coloured border, label, percentage and size.
pub fn paint_overlay(
    painter: &egui::Painter,
    rect: Rect,
    overlay: &OverlayLayout,
    reference: &MonitorSpec,
    dragging: bool,
) {
    let color = monitor_color(overlay.spec);
    let fill_alpha = if dragging { 60 } else { 30 };
    let fill = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), fill_alpha);
    let stroke_width = if dragging { 3.0 } else { 2.0 };

    painter.rect_filled(rect, 4.0, fill);
    painter.rect_stroke(rect, 4.0, Stroke::new(stroke_width, color));

    painter.text(
        rect.left_top() + Vec2::new(8.0, 6.0),
        Align2::LEFT_TOP,
        overlay.spec.label_against(reference),
        FontId::proportional(15.0),
        color,
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        overlay.percent_text(),
        FontId::proportional(22.0),
        color,
    );
    painter.text(
        rect.left_bottom() + Vec2::new(8.0, -6.0),
        Align2::LEFT_BOTTOM,
        overlay.spec.dimensions().describe(),
        FontId::proportional(12.0),
        Color32::from_gray(220),
    );
}
