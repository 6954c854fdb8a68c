use std::path::{Path, PathBuf};

use egui::{Color32, ColorImage, Pos2, vec2};
use log::{error, info, warn};

use crate::canvas::{Canvas, ItemId};
use crate::config::EditorConfig;
use crate::dialogs::{Dialogs, ExitChoice};
use crate::element::factory;
use crate::error::FileError;
use crate::event::{Observer, SubscriptionId};
use crate::file_handler;
use crate::id_generator::next_item_id;
use crate::state::DrawingState;
use crate::tools::{TextEntry, ToolContext, ToolDispatcher, ToolKind, ToolRequest};

/// A save that is waiting for the next screen capture.
#[derive(Debug, Clone, PartialEq)]
struct PendingSave {
    path: PathBuf,
}

/// Presenter between the drawing state, the canvas and the dialogs.
///
/// The egui shell forwards menu actions and pointer events here. Nothing in this type
/// touches egui's frame state, so it can be driven directly from tests.
#[derive(Debug)]
pub struct Coordinator {
    config: EditorConfig,
    canvas: Canvas,
    state: DrawingState,
    tools: ToolDispatcher,
    width: f32,
    text_entry: Option<TextEntry>,
    pending_save: Option<PendingSave>,
    capture_requested: bool,
    exit_after_save: bool,
    exit_requested: bool,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Coordinator {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            canvas: Canvas::new(config.canvas_size, config.canvas_background),
            state: DrawingState::new(config.stroke_color, config.erase_color),
            tools: ToolDispatcher::default(),
            width: config.default_width as f32,
            text_entry: None,
            pending_save: None,
            capture_requested: false,
            exit_after_save: false,
            exit_requested: false,
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn tools(&self) -> &ToolDispatcher {
        &self.tools
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) -> SubscriptionId {
        self.state.subscribe(observer)
    }

    pub fn set_color(&mut self, color: Color32) {
        self.state.set_color(color);
    }

    pub fn select_tool(&mut self, kind: ToolKind) {
        self.tools.select(kind);
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = self.config.clamp_width(width);
    }

    fn tool_context(&mut self) -> ToolContext<'_> {
        ToolContext {
            canvas: &mut self.canvas,
            state: &mut self.state,
            width: self.width,
            config: &self.config,
        }
    }

    // Pointer events, in canvas coordinates. Ignored while the text dialog is up.

    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.text_entry.is_some() {
            return;
        }
        let mut ctx = ToolContext {
            canvas: &mut self.canvas,
            state: &mut self.state,
            width: self.width,
            config: &self.config,
        };
        let request = self.tools.pointer_down(pos, &mut ctx);
        if let Some(ToolRequest::OpenTextDialog(at)) = request {
            self.text_entry = Some(TextEntry::new(at, &self.config));
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if self.text_entry.is_some() {
            return;
        }
        let mut ctx = ToolContext {
            canvas: &mut self.canvas,
            state: &mut self.state,
            width: self.width,
            config: &self.config,
        };
        self.tools.pointer_move(pos, &mut ctx);
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        if self.text_entry.is_some() {
            return;
        }
        let mut ctx = ToolContext {
            canvas: &mut self.canvas,
            state: &mut self.state,
            width: self.width,
            config: &self.config,
        };
        self.tools.pointer_up(pos, &mut ctx);
        self.state.notify();
    }

    pub fn text_entry(&self) -> Option<&TextEntry> {
        self.text_entry.as_ref()
    }

    pub fn text_entry_mut(&mut self) -> Option<&mut TextEntry> {
        self.text_entry.as_mut()
    }

    /// Commit the text dialog. Keeps the dialog open if the size does not parse.
    pub fn apply_text(&mut self) -> Option<ItemId> {
        let entry = self.text_entry.take()?;
        match entry.apply(&mut self.tool_context()) {
            Some(id) => {
                self.state.notify();
                Some(id)
            }
            None => {
                warn!("Ignoring text with invalid size {:?}", entry.size);
                self.text_entry = Some(entry);
                None
            }
        }
    }

    pub fn cancel_text(&mut self) {
        self.text_entry = None;
    }

    pub fn open_image(&mut self, dialogs: &dyn Dialogs) {
        let Some(path) = dialogs.pick_image_to_open() else {
            return;
        };
        if let Err(err) = self.open_image_from(&path) {
            error!("Failed to open image: {}", err);
            dialogs.show_error("Error", &format!("Could not open the image: {err}"));
        }
    }

    /// Replace the canvas content with the image at `path`, centered.
    pub fn open_image_from(&mut self, path: &Path) -> Result<ItemId, FileError> {
        let image = file_handler::load_image(path)?;
        let image_size = vec2(image.size[0] as f32, image.size[1] as f32);
        let position = file_handler::centered_position(self.canvas.size(), image_size);

        self.canvas.clear();
        let id = self.canvas.add(factory::create_bitmap(next_item_id(), image, position));
        info!("Opened {} at {:?}", path.display(), position);
        self.state.notify();
        Ok(id)
    }

    /// Ask for a destination and queue a screen capture of the canvas.
    pub fn save_image(&mut self, dialogs: &dyn Dialogs) {
        let Some(path) = dialogs.pick_save_destination() else {
            self.finish_exit_if_pending();
            return;
        };
        if let Err(err) = file_handler::export_format(&path) {
            error!("Refusing to save {}: {}", path.display(), err);
            dialogs.show_error("Error", "Unsupported file format.");
            self.finish_exit_if_pending();
            return;
        }
        self.pending_save = Some(PendingSave { path });
        self.capture_requested = true;
    }

    /// True once per queued save; the shell answers with a viewport screenshot.
    pub fn take_capture_request(&mut self) -> bool {
        std::mem::take(&mut self.capture_requested)
    }

    pub fn is_save_pending(&self) -> bool {
        self.pending_save.is_some()
    }

    /// Write the captured canvas pixels to the queued destination.
    pub fn finish_save(&mut self, capture: &ColorImage, dialogs: &dyn Dialogs) {
        let Some(PendingSave { path }) = self.pending_save.take() else {
            warn!("Received a canvas capture with no save pending");
            return;
        };
        match file_handler::save_image(&path, capture) {
            Ok(()) => dialogs.show_info("Save Image", "Image saved successfully."),
            Err(err) => {
                error!("Failed to save image: {}", err);
                dialogs.show_error("Error", &format!("Could not save the image: {err}"));
            }
        }
        self.finish_exit_if_pending();
    }

    /// Erase everything drawn and forget the anchor.
    pub fn clear_screen(&mut self) {
        self.canvas.clear();
        self.state.clear();
    }

    pub fn exit_application(&mut self, dialogs: &dyn Dialogs) {
        match dialogs.confirm_exit() {
            ExitChoice::Cancel => info!("Exit cancelled"),
            ExitChoice::Discard => self.exit_requested = true,
            ExitChoice::Save => {
                self.exit_after_save = true;
                self.save_image(dialogs);
            }
        }
    }

    fn finish_exit_if_pending(&mut self) {
        if std::mem::take(&mut self.exit_after_save) {
            self.exit_requested = true;
        }
    }

    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }
}
