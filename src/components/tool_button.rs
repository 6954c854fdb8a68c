use eframe::egui;

use crate::tools::ToolKind;

pub struct ToolButton {
    pub tool: ToolKind,
    pub selected: bool,
}

impl ToolButton {
    pub const SIZE: egui::Vec2 = egui::vec2(118.0, 30.0);

    pub fn new(tool: ToolKind, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(Self::SIZE, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_rgb(74, 88, 99)
            } else {
                egui::Color32::from_rgb(56, 69, 79)
            };
            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let icon_pos = rect.left_center() + egui::vec2(16.0, 0.0);
            ui.painter().text(
                icon_pos,
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(18.0),
                text_color,
            );
            ui.painter().text(
                icon_pos + egui::vec2(16.0, 0.0),
                egui::Align2::LEFT_CENTER,
                self.tool.label(),
                egui::FontId::proportional(14.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.tool.label())
    }
}
