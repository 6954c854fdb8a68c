use eframe::egui;

/// Entries of the File menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Save,
    Clear,
    Exit,
}

pub fn menu_bar(ctx: &egui::Context) -> Option<MenuAction> {
    let mut action = None;
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open…").clicked() {
                    action = Some(MenuAction::Open);
                }
                if ui.button("Save…").clicked() {
                    action = Some(MenuAction::Save);
                }
                ui.separator();
                if ui.button("Clear").clicked() {
                    action = Some(MenuAction::Clear);
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    action = Some(MenuAction::Exit);
                }
                if action.is_some() {
                    ui.close_menu();
                }
            });
        });
    });
    action
}
