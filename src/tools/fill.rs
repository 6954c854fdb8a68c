use egui::{CursorIcon, Pos2};
use log::debug;

use super::{Tool, ToolContext};

/// Recolors the item nearest to the pointer, or the background when the canvas is empty.
///
/// This is a nearest-item recolor, not a pixel flood fill.
#[derive(Debug, Clone, Default)]
pub struct FillTool;

impl FillTool {
    fn fill_at(pos: Pos2, ctx: &mut ToolContext<'_>) {
        let color = ctx.state.stroke_color();
        match ctx.canvas.find_closest(pos) {
            Some(id) => {
                if !ctx.canvas.set_fill(id, color) {
                    debug!("Item {} has no fill to recolor", id);
                }
            }
            None => ctx.canvas.set_background(color),
        }
    }
}

impl Tool for FillTool {
    fn name(&self) -> &'static str {
        "fill"
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::Copy
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) -> Option<super::ToolRequest> {
        ctx.state.set_anchor(pos);
        Self::fill_at(pos, ctx);
        None
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        Self::fill_at(pos, ctx);
    }
}
