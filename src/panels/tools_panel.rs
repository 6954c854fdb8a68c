use eframe::egui;

use crate::components::{ColorSwatch, ToolButton};
use crate::config::PALETTE;
use crate::coordinator::Coordinator;
use crate::tools::ToolKind;

/// Tool buttons, width slider and color palette across the top of the window.
pub fn tools_panel(coordinator: &mut Coordinator, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel")
        .exact_height(92.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                tool_grid(coordinator, ui);
                ui.separator();
                width_selector(coordinator, ui);
                ui.separator();
                palette(coordinator, ui);
            });
        });
}

fn tool_grid(coordinator: &mut Coordinator, ui: &mut egui::Ui) {
    let active = coordinator.tools().kind();
    egui::Grid::new("tool_grid")
        .num_columns(5)
        .spacing([6.0, 6.0])
        .show(ui, |ui| {
            // Two rows, filled column by column
            for row in 0..2 {
                for kind in ToolKind::ALL.iter().skip(row).step_by(2) {
                    if ToolButton::new(*kind, *kind == active).show(ui).clicked() {
                        coordinator.select_tool(*kind);
                    }
                }
                ui.end_row();
            }
        });
}

fn width_selector(coordinator: &mut Coordinator, ui: &mut egui::Ui) {
    let config = coordinator.config();
    let range = config.min_width..=config.max_width;
    let mut width = coordinator.width() as u8;
    ui.vertical(|ui| {
        ui.label("Width");
        ui.spacing_mut().slider_width = 56.0;
        let response = ui.add(
            egui::Slider::new(&mut width, range)
                .vertical()
                .show_value(true),
        );
        if response.changed() {
            coordinator.set_width(width as f32);
        }
    });
}

fn palette(coordinator: &mut Coordinator, ui: &mut egui::Ui) {
    let current = coordinator.state().stroke_color();
    ui.vertical(|ui| {
        ui.label("Colors");
        egui::Grid::new("palette_grid")
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for row in 0..2 {
                    for entry in PALETTE.iter().skip(row).step_by(2) {
                        if ColorSwatch::new(*entry, entry.color == current).show(ui).clicked() {
                            coordinator.set_color(entry.color);
                        }
                    }
                    if row == 1 {
                        custom_color(coordinator, ui, current);
                    }
                    ui.end_row();
                }
            });
    });
}

fn custom_color(coordinator: &mut Coordinator, ui: &mut egui::Ui, current: egui::Color32) {
    let mut picked = current;
    let response = egui::color_picker::color_edit_button_srgba(
        ui,
        &mut picked,
        egui::color_picker::Alpha::Opaque,
    );
    if response.changed() && picked != current {
        coordinator.set_color(picked);
    }
    response.on_hover_text("Other color…");
}
