use std::cell::OnceCell;
use std::sync::Arc;

use egui::{Color32, ColorImage, Painter, Pos2, Rect, TextureHandle, TextureOptions, Vec2, vec2};
use log::info;

use super::Element;
use crate::element::common;

/// Bitmap element holding a decoded image placed on the canvas
#[derive(Clone)]
pub struct Bitmap {
    id: usize,
    image: Arc<ColorImage>,
    position: Pos2,

    // Uploaded lazily on first draw
    texture: OnceCell<TextureHandle>,
}

// Custom Debug implementation since TextureHandle doesn't implement Debug
impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("id", &self.id)
            .field("size", &self.image.size)
            .field("position", &self.position)
            .field("uploaded", &self.texture.get().is_some())
            .finish()
    }
}

impl Bitmap {
    pub fn new(id: usize, image: ColorImage, position: Pos2) -> Self {
        Self {
            id,
            image: Arc::new(image),
            position,
            texture: OnceCell::new(),
        }
    }

    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.image.size[0] as f32, self.image.size[1] as f32)
    }

    fn texture(&self, painter: &Painter) -> &TextureHandle {
        self.texture.get_or_init(|| {
            info!("Uploading texture for bitmap {}: {:?}", self.id, self.image.size);
            painter.ctx().load_texture(
                format!("bitmap_{}", self.id),
                (*self.image).clone(),
                TextureOptions::LINEAR,
            )
        })
    }
}

impl Element for Bitmap {
    fn element_type(&self) -> &'static str {
        "image"
    }

    fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size())
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        let texture = self.texture(painter);
        painter.image(
            texture.id(),
            self.rect().translate(origin),
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    fn distance_to(&self, pos: Pos2) -> f32 {
        common::distance_to_rect(pos, self.rect())
    }

    /// Bitmaps have no fill to recolor.
    fn set_fill(&mut self, _color: Color32) -> bool {
        false
    }
}
