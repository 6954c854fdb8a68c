use eframe::egui;
use log::{debug, info};

use crate::config::EditorConfig;
use crate::coordinator::Coordinator;
use crate::dialogs::{Dialogs, NativeDialogs};
use crate::event::RepaintObserver;
use crate::file_handler;
use crate::input::InputHandler;
use crate::panels::{self, MenuAction};

/// The eframe shell. Owns the presenter and forwards egui input to it.
pub struct PaintApp {
    coordinator: Coordinator,
    dialogs: Box<dyn Dialogs>,
    input: InputHandler,
    /// Screen rect of the canvas from the last frame, used to crop captures.
    canvas_rect: egui::Rect,
    allowed_to_close: bool,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut coordinator = Coordinator::new(EditorConfig::default());
        coordinator.subscribe(Box::new(RepaintObserver::new(cc.egui_ctx.clone())));
        Self {
            coordinator,
            dialogs: Box::new(NativeDialogs),
            input: InputHandler::new(),
            canvas_rect: egui::Rect::NOTHING,
            allowed_to_close: false,
        }
    }

    fn handle_screenshots(&mut self, ctx: &egui::Context) {
        let captures: Vec<_> = ctx.input(|input| {
            input
                .raw
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Screenshot { image, .. } => Some(image.clone()),
                    _ => None,
                })
                .collect()
        });
        for image in captures {
            if !self.coordinator.is_save_pending() {
                debug!("Ignoring screenshot with no pending save");
                continue;
            }
            let cropped =
                file_handler::crop_capture(&image, self.canvas_rect, ctx.pixels_per_point());
            self.coordinator.finish_save(&cropped, self.dialogs.as_ref());
        }
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        let close_requested = ctx.input(|input| input.viewport().close_requested());
        if close_requested && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.coordinator.exit_application(self.dialogs.as_ref());
        }
    }

    fn dispatch(&mut self, action: MenuAction) {
        info!("Menu action {:?}", action);
        let dialogs = self.dialogs.as_ref();
        match action {
            MenuAction::Open => self.coordinator.open_image(dialogs),
            MenuAction::Save => self.coordinator.save_image(dialogs),
            MenuAction::Clear => self.coordinator.clear_screen(),
            MenuAction::Exit => self.coordinator.exit_application(dialogs),
        }
    }
}

impl eframe::App for PaintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshots(ctx);
        self.handle_close_request(ctx);

        if let Some(action) = panels::menu_bar(ctx) {
            self.dispatch(action);
        }
        panels::tools_panel(&mut self.coordinator, ctx);
        self.canvas_rect = panels::central_panel(&mut self.coordinator, &mut self.input, ctx);
        panels::text_dialog(&mut self.coordinator, ctx);

        if self.coordinator.take_capture_request() {
            // The capture arrives as an input event on a later frame.
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            ctx.request_repaint();
        }

        if self.coordinator.should_exit() {
            self.allowed_to_close = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
