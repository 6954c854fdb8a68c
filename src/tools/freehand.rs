use egui::{CursorIcon, Pos2};

use super::{Tool, ToolContext};
use crate::element::factory;

/// Pencil and eraser: commit a segment per move and advance the anchor.
#[derive(Debug, Clone)]
pub struct FreehandTool {
    eraser: bool,
}

impl FreehandTool {
    pub fn pencil() -> Self {
        Self { eraser: false }
    }

    pub fn eraser() -> Self {
        Self { eraser: true }
    }
}

impl Tool for FreehandTool {
    fn name(&self) -> &'static str {
        if self.eraser { "eraser" } else { "pencil" }
    }

    fn cursor(&self) -> CursorIcon {
        if self.eraser { CursorIcon::Cell } else { CursorIcon::Default }
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        let Some(anchor) = ctx.state.anchor() else {
            return;
        };
        let color = if self.eraser {
            ctx.state.erase_color()
        } else {
            ctx.state.stroke_color()
        };
        ctx.canvas.add(factory::create_segment(anchor, pos, color, ctx.width));
        ctx.state.set_anchor(pos);
    }
}
