use egui::{Color32, CursorIcon, Pos2};

use super::{Tool, ToolContext};
use crate::element::{ElementType, factory};

/// The anchored shapes that preview while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    DashedLine,
    Rectangle,
    Triangle,
    Oval,
}

/// Draws a preview from the anchor to the pointer on each move and commits it on release.
#[derive(Debug, Clone)]
pub struct ShapeTool {
    kind: ShapeKind,
}

impl ShapeTool {
    pub fn new(kind: ShapeKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    fn build(&self, anchor: Pos2, pos: Pos2, color: Color32, width: f32, dash: (f32, f32)) -> ElementType {
        match self.kind {
            ShapeKind::Line => factory::create_line(anchor, pos, color, width),
            ShapeKind::DashedLine => factory::create_dashed_line(anchor, pos, color, width, dash),
            ShapeKind::Rectangle => factory::create_rectangle(anchor, pos, color, width),
            ShapeKind::Triangle => factory::create_triangle(anchor, pos, color, width),
            ShapeKind::Oval => factory::create_oval(anchor, pos, color, width),
        }
    }

    fn shape_for(&self, pos: Pos2, ctx: &ToolContext<'_>) -> Option<ElementType> {
        let anchor = ctx.state.anchor()?;
        Some(self.build(anchor, pos, ctx.state.stroke_color(), ctx.width, ctx.config.dash_pattern))
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Line => "line",
            ShapeKind::DashedLine => "dashed_line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Oval => "oval",
        }
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::Crosshair
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        ctx.canvas.delete_previews();
        if let Some(shape) = self.shape_for(pos, ctx) {
            ctx.canvas.add_preview(shape);
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        ctx.canvas.delete_previews();
        if let Some(shape) = self.shape_for(pos, ctx) {
            ctx.canvas.add(shape);
        }
    }
}
