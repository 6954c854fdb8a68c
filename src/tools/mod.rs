use egui::{CursorIcon, Pos2};
use log::info;

use crate::canvas::Canvas;
use crate::config::EditorConfig;
use crate::state::DrawingState;

/// Everything a tool may touch while handling a pointer event.
pub struct ToolContext<'a> {
    pub canvas: &'a mut Canvas,
    pub state: &'a mut DrawingState,
    /// Width selector value at the moment of the event.
    pub width: f32,
    pub config: &'a EditorConfig,
}

/// Something a tool needs from the application shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolRequest {
    OpenTextDialog(Pos2),
}

/// Tool trait defines the interface for all drawing tools
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Cursor shown while hovering the canvas
    fn cursor(&self) -> CursorIcon;

    /// Handle pointer press. The default records the anchor point.
    fn on_pointer_down(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) -> Option<ToolRequest> {
        ctx.state.set_anchor(pos);
        None
    }

    /// Handle pointer drag while the button is held down.
    fn on_pointer_move(&mut self, _pos: Pos2, _ctx: &mut ToolContext<'_>) {}

    /// Handle pointer release.
    fn on_pointer_up(&mut self, _pos: Pos2, _ctx: &mut ToolContext<'_>) {}
}

mod fill;
mod freehand;
mod shape_tool;
mod sprayer;
mod text_tool;

pub use fill::FillTool;
pub use freehand::FreehandTool;
pub use shape_tool::{ShapeKind, ShapeTool};
pub use sprayer::SprayerTool;
pub use text_tool::{TextEntry, TextTool};

/// The selectable tools, in tool-panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Pencil,
    Eraser,
    Fill,
    Sprayer,
    Line,
    DashedLine,
    Rectangle,
    Triangle,
    Oval,
    Text,
}

impl ToolKind {
    pub const ALL: [ToolKind; 10] = [
        ToolKind::Pencil,
        ToolKind::Eraser,
        ToolKind::Fill,
        ToolKind::Sprayer,
        ToolKind::Line,
        ToolKind::DashedLine,
        ToolKind::Rectangle,
        ToolKind::Triangle,
        ToolKind::Oval,
        ToolKind::Text,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Pencil => "Pencil",
            ToolKind::Eraser => "Eraser",
            ToolKind::Fill => "Fill",
            ToolKind::Sprayer => "Sprayer",
            ToolKind::Line => "Line",
            ToolKind::DashedLine => "Dashed line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Triangle => "Triangle",
            ToolKind::Oval => "Oval",
            ToolKind::Text => "Text",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToolKind::Pencil => "✏",
            ToolKind::Eraser => "⌫",
            ToolKind::Fill => "🎨",
            ToolKind::Sprayer => "💨",
            ToolKind::Line => "╱",
            ToolKind::DashedLine => "┄",
            ToolKind::Rectangle => "▭",
            ToolKind::Triangle => "△",
            ToolKind::Oval => "⬭",
            ToolKind::Text => "T",
        }
    }
}

/// Enum representing all available tool types
/// This allows us to avoid using Box<dyn Tool> and simplifies memory management
#[derive(Debug, Clone)]
pub enum ToolType {
    Freehand(FreehandTool),
    Sprayer(SprayerTool),
    Fill(FillTool),
    Shape(ShapeTool),
    Text(TextTool),
}

impl ToolType {
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Pencil => Self::Freehand(FreehandTool::pencil()),
            ToolKind::Eraser => Self::Freehand(FreehandTool::eraser()),
            ToolKind::Fill => Self::Fill(FillTool),
            ToolKind::Sprayer => Self::Sprayer(SprayerTool::new()),
            ToolKind::Line => Self::Shape(ShapeTool::new(ShapeKind::Line)),
            ToolKind::DashedLine => Self::Shape(ShapeTool::new(ShapeKind::DashedLine)),
            ToolKind::Rectangle => Self::Shape(ShapeTool::new(ShapeKind::Rectangle)),
            ToolKind::Triangle => Self::Shape(ShapeTool::new(ShapeKind::Triangle)),
            ToolKind::Oval => Self::Shape(ShapeTool::new(ShapeKind::Oval)),
            ToolKind::Text => Self::Text(TextTool),
        }
    }

    fn as_tool_mut(&mut self) -> &mut dyn Tool {
        match self {
            Self::Freehand(tool) => tool,
            Self::Sprayer(tool) => tool,
            Self::Fill(tool) => tool,
            Self::Shape(tool) => tool,
            Self::Text(tool) => tool,
        }
    }

    fn as_tool(&self) -> &dyn Tool {
        match self {
            Self::Freehand(tool) => tool,
            Self::Sprayer(tool) => tool,
            Self::Fill(tool) => tool,
            Self::Shape(tool) => tool,
            Self::Text(tool) => tool,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        self.as_tool().name()
    }

    fn cursor(&self) -> CursorIcon {
        self.as_tool().cursor()
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) -> Option<ToolRequest> {
        self.as_tool_mut().on_pointer_down(pos, ctx)
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        self.as_tool_mut().on_pointer_move(pos, ctx)
    }

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        self.as_tool_mut().on_pointer_up(pos, ctx)
    }
}

/// Gesture phase of the pointer on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
}

/// Routes pointer events to the active tool and tracks the Idle → Dragging → Idle cycle.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    kind: ToolKind,
    active: ToolType,
    gesture: GestureState,
}

impl Default for ToolDispatcher {
    fn default() -> Self {
        Self::new(ToolKind::Pencil)
    }
}

impl ToolDispatcher {
    pub fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            active: ToolType::new(kind),
            gesture: GestureState::Idle,
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn active_tool(&self) -> &ToolType {
        &self.active
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn select(&mut self, kind: ToolKind) {
        if kind == self.kind {
            return;
        }
        self.kind = kind;
        self.active = ToolType::new(kind);
        info!("Tool selected: {}", self.active.name());
        self.gesture = GestureState::Idle;
    }

    pub fn pointer_down(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) -> Option<ToolRequest> {
        self.gesture = GestureState::Dragging;
        self.active.on_pointer_down(pos, ctx)
    }

    pub fn pointer_move(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        if self.gesture == GestureState::Dragging {
            self.active.on_pointer_move(pos, ctx);
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        if self.gesture == GestureState::Dragging {
            self.gesture = GestureState::Idle;
            self.active.on_pointer_up(pos, ctx);
        }
    }
}
