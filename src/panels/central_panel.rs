use eframe::egui;

use crate::coordinator::Coordinator;
use crate::input::{InputEvent, InputHandler, PointerSnapshot};
use crate::tools::Tool;

/// Paint the canvas, feed it pointer input, and return its screen rect.
pub fn central_panel(
    coordinator: &mut Coordinator,
    input: &mut InputHandler,
    ctx: &egui::Context,
) -> egui::Rect {
    let mut canvas_rect = egui::Rect::NOTHING;
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::from_rgb(56, 69, 79)).inner_margin(7.0))
        .show(ctx, |ui| {
            let size = coordinator.canvas().size();
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            canvas_rect = response.rect;

            let cursor = coordinator.tools().active_tool().cursor();
            let response = response.on_hover_cursor(cursor);

            let snapshot = PointerSnapshot::read(ctx, response.hovered());
            for event in input.process(snapshot, canvas_rect) {
                match event {
                    InputEvent::PointerDown(pos) => coordinator.pointer_down(pos),
                    InputEvent::PointerMove(pos) => coordinator.pointer_move(pos),
                    InputEvent::PointerUp(pos) => coordinator.pointer_up(pos),
                }
            }

            coordinator.canvas().paint(&painter, canvas_rect);
        });
    canvas_rect
}
