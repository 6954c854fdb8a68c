use eframe::egui;

use crate::config::NamedColor;

/// Square palette button filled with its color.
pub struct ColorSwatch {
    pub entry: NamedColor,
    pub selected: bool,
}

impl ColorSwatch {
    const SIZE: egui::Vec2 = egui::vec2(24.0, 24.0);

    pub fn new(entry: NamedColor, selected: bool) -> Self {
        Self { entry, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(Self::SIZE, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let border = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.5, egui::Color32::WHITE)
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(30))
            };
            ui.painter().rect(rect, 2.0, self.entry.color, border);
        }

        response.on_hover_text(self.entry.name)
    }
}
