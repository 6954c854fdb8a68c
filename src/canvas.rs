use egui::{Color32, Painter, Pos2, Rect, Vec2};
use log::debug;

use crate::element::{Element, ElementType};
use crate::id_generator::next_item_id;

pub type ItemId = usize;

/// Whether an item is a throwaway drag preview or part of the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTag {
    Committed,
    Preview,
}

#[derive(Debug, Clone)]
pub struct CanvasItem {
    pub id: ItemId,
    pub element: ElementType,
    pub tag: ItemTag,
}

/// Retained display list of everything drawn on the canvas, bottom to top.
#[derive(Debug, Clone)]
pub struct Canvas {
    items: Vec<CanvasItem>,
    background: Color32,
    size: Vec2,
}

impl Canvas {
    pub fn new(size: Vec2, background: Color32) -> Self {
        Self {
            items: Vec::new(),
            background,
            size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn set_background(&mut self, color: Color32) {
        self.background = color;
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Commit a primitive on top of everything else.
    pub fn add(&mut self, element: ElementType) -> ItemId {
        self.push(element, ItemTag::Committed)
    }

    /// Add a primitive that the next [`Canvas::delete_previews`] will remove.
    pub fn add_preview(&mut self, element: ElementType) -> ItemId {
        self.push(element, ItemTag::Preview)
    }

    fn push(&mut self, element: ElementType, tag: ItemTag) -> ItemId {
        let id = next_item_id();
        self.items.push(CanvasItem { id, element, tag });
        id
    }

    pub fn previews(&self) -> impl Iterator<Item = &CanvasItem> {
        self.items.iter().filter(|item| item.tag == ItemTag::Preview)
    }

    pub fn committed(&self) -> impl Iterator<Item = &CanvasItem> {
        self.items.iter().filter(|item| item.tag == ItemTag::Committed)
    }

    pub fn delete_previews(&mut self) {
        self.items.retain(|item| item.tag != ItemTag::Preview);
    }

    /// Remove every item. The background color is kept.
    pub fn clear(&mut self) {
        debug!("Clearing {} canvas items", self.items.len());
        self.items.clear();
    }

    /// The item nearest to `pos`. Among equally near items the topmost wins.
    pub fn find_closest(&self, pos: Pos2) -> Option<ItemId> {
        let mut best: Option<(ItemId, f32)> = None;
        for item in &self.items {
            let distance = item.element.distance_to(pos);
            if best.is_none_or(|(_, nearest)| distance <= nearest) {
                best = Some((item.id, distance));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Recolor one item's fill. Returns false if the item is gone or cannot be filled.
    pub fn set_fill(&mut self, id: ItemId, color: Color32) -> bool {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .is_some_and(|item| item.element.set_fill(color))
    }

    /// Paint the background and every item into `rect`, clipped to it.
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, self.background);
        let origin = rect.min.to_vec2();
        for item in &self.items {
            item.element.draw(&painter, origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use egui::{pos2, vec2};

    fn canvas() -> Canvas {
        Canvas::new(vec2(200.0, 100.0), Color32::WHITE)
    }

    #[test]
    fn previews_are_removed_without_touching_committed_items() {
        let mut canvas = canvas();
        let kept = canvas.add(factory::create_line(pos2(0.0, 0.0), pos2(5.0, 5.0), Color32::RED, 1.0));
        canvas.add_preview(factory::create_oval(pos2(0.0, 0.0), pos2(9.0, 9.0), Color32::RED, 1.0));
        assert_eq!(canvas.previews().count(), 1);

        canvas.delete_previews();
        assert_eq!(canvas.len(), 1);
        assert_eq!(canvas.items()[0].id, kept);
    }

    #[test]
    fn closest_prefers_nearest_then_topmost() {
        let mut canvas = canvas();
        let far = canvas.add(factory::create_line(pos2(0.0, 90.0), pos2(100.0, 90.0), Color32::RED, 1.0));
        let near = canvas.add(factory::create_line(pos2(0.0, 10.0), pos2(100.0, 10.0), Color32::RED, 1.0));
        assert_eq!(canvas.find_closest(pos2(50.0, 20.0)), Some(near));
        assert_eq!(canvas.find_closest(pos2(50.0, 80.0)), Some(far));

        let top = canvas.add(factory::create_line(pos2(0.0, 10.0), pos2(100.0, 10.0), Color32::RED, 1.0));
        assert_eq!(canvas.find_closest(pos2(50.0, 20.0)), Some(top));
    }

    #[test]
    fn closest_on_empty_canvas_is_none() {
        assert_eq!(canvas().find_closest(pos2(1.0, 1.0)), None);
    }

    #[test]
    fn clear_keeps_background() {
        let mut canvas = canvas();
        canvas.set_background(Color32::YELLOW);
        canvas.add(factory::create_dot(pos2(3.0, 3.0), Color32::BLACK));
        canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(canvas.background(), Color32::YELLOW);
    }

    #[test]
    fn set_fill_on_missing_item_is_false() {
        let mut canvas = canvas();
        assert!(!canvas.set_fill(12345, Color32::RED));
    }
}
