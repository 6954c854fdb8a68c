use eframe::egui;

use crate::config::FONT_FAMILIES;
use crate::coordinator::Coordinator;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Choice {
    Pending,
    Apply,
    Cancel,
}

/// Modal collecting text, font and size for the text tool. Blocks the rest of the UI while open.
pub fn text_dialog(coordinator: &mut Coordinator, ctx: &egui::Context) {
    let Some(entry) = coordinator.text_entry_mut() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("text_dialog")).show(ctx, |ui| {
        ui.heading("Enter text");
        ui.add_space(4.0);
        egui::Grid::new("text_dialog_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Text:");
                ui.add(egui::TextEdit::singleline(&mut entry.content).desired_width(180.0));
                ui.end_row();

                ui.label("Font:");
                egui::ComboBox::from_id_salt("text_font")
                    .selected_text(entry.family.as_str())
                    .width(160.0)
                    .show_ui(ui, |ui| {
                        for family in FONT_FAMILIES {
                            ui.selectable_value(&mut entry.family, family.to_owned(), family);
                        }
                    });
                ui.end_row();

                ui.label("Size:");
                ui.add(egui::TextEdit::singleline(&mut entry.size).desired_width(30.0));
                ui.end_row();
            });

        let valid = entry.parsed_size().is_some();
        if !valid {
            ui.colored_label(egui::Color32::LIGHT_RED, "Size must be a whole number");
        }

        let mut choice = Choice::Pending;
        ui.horizontal(|ui| {
            if ui.add_enabled(valid, egui::Button::new("Apply")).clicked() {
                choice = Choice::Apply;
            }
            if ui.button("Cancel").clicked() {
                choice = Choice::Cancel;
            }
        });
        choice
    });

    // Escape or a click on the backdrop dismisses it like Cancel
    match modal.inner {
        Choice::Apply => {
            coordinator.apply_text();
        }
        Choice::Cancel => coordinator.cancel_text(),
        Choice::Pending if modal.should_close() => coordinator.cancel_text(),
        Choice::Pending => {}
    }
}
