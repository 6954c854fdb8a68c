use egui::{CursorIcon, Pos2};
use log::info;

use super::{Tool, ToolContext, ToolRequest};
use crate::canvas::ItemId;
use crate::config::EditorConfig;
use crate::element::factory;

/// Asks the shell for a text dialog at the clicked point.
#[derive(Debug, Clone, Default)]
pub struct TextTool;

impl Tool for TextTool {
    fn name(&self) -> &'static str {
        "text"
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::Text
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) -> Option<ToolRequest> {
        ctx.state.set_anchor(pos);
        Some(ToolRequest::OpenTextDialog(pos))
    }
}

/// Contents of the text dialog while it is open.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    pub position: Pos2,
    pub content: String,
    pub family: String,
    /// Raw size field; only committed once it parses.
    pub size: String,
}

impl TextEntry {
    pub fn new(position: Pos2, config: &EditorConfig) -> Self {
        Self {
            position,
            content: String::new(),
            family: config.default_font.to_owned(),
            size: config.default_font_size.to_string(),
        }
    }

    /// The point size, if the field holds a positive integer.
    pub fn parsed_size(&self) -> Option<u32> {
        self.size.trim().parse().ok().filter(|size| *size > 0)
    }

    /// Commit the text to the canvas in the current stroke color.
    pub fn apply(&self, ctx: &mut ToolContext<'_>) -> Option<ItemId> {
        let size = self.parsed_size()?;
        info!("Placing text at {:?} ({} {}pt)", self.position, self.family, size);
        Some(ctx.canvas.add(factory::create_text(
            self.position,
            self.content.clone(),
            self.family.clone(),
            size,
            ctx.state.stroke_color(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn entry_starts_with_defaults() {
        let entry = TextEntry::new(pos2(1.0, 2.0), &EditorConfig::default());
        assert_eq!(entry.family, "Calibri");
        assert_eq!(entry.parsed_size(), Some(11));
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        let mut entry = TextEntry::new(pos2(1.0, 2.0), &EditorConfig::default());
        entry.size = "big".to_owned();
        assert_eq!(entry.parsed_size(), None);
        entry.size = "0".to_owned();
        assert_eq!(entry.parsed_size(), None);
        entry.size = " 24 ".to_owned();
        assert_eq!(entry.parsed_size(), Some(24));
    }
}
