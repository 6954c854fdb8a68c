use egui::{Align2, Color32, FontFamily, FontId, Painter, Pos2, Rect, Vec2, vec2};

use super::Element;
use crate::element::common;

/// A line of text centered on the point where the user clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: Pos2,
    pub content: String,
    /// Font family name as picked in the text dialog.
    pub family: String,
    pub size: u32,
    pub color: Color32,
}

impl Text {
    pub fn new(position: Pos2, content: String, family: String, size: u32, color: Color32) -> Self {
        Self { position, content, family, size, color }
    }

    /// egui only bundles a proportional and a monospace face.
    pub fn font_id(&self) -> FontId {
        let family = if self.family.starts_with("Courier") {
            FontFamily::Monospace
        } else {
            FontFamily::Proportional
        };
        FontId::new(self.size as f32, family)
    }

    // Layout needs a font atlas, so hit testing uses a per-glyph estimate instead.
    fn estimated_size(&self) -> Vec2 {
        let size = self.size as f32;
        vec2(self.content.chars().count() as f32 * size * 0.6, size * 1.2)
    }
}

impl Element for Text {
    fn element_type(&self) -> &'static str {
        "text"
    }

    fn rect(&self) -> Rect {
        Rect::from_center_size(self.position, self.estimated_size())
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        painter.text(
            self.position + origin,
            Align2::CENTER_CENTER,
            &self.content,
            self.font_id(),
            self.color,
        );
    }

    fn distance_to(&self, pos: Pos2) -> f32 {
        common::distance_to_rect(pos, self.rect())
    }

    fn set_fill(&mut self, color: Color32) -> bool {
        self.color = color;
        true
    }
}
