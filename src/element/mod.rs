use egui::{Color32, Painter, Pos2, Rect, Vec2};

mod common;
pub(crate) mod image;
pub(crate) mod shape;
pub(crate) mod stroke;
pub(crate) mod text;

pub use image::Bitmap;
pub use shape::{Dot, Outline, Oval, Rectangle, Triangle};
pub use stroke::{Line, Segment};
pub use text::Text;

/// Common trait that all canvas primitives implement
pub trait Element {
    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Bounding rectangle in canvas coordinates
    fn rect(&self) -> Rect;

    /// Draw the element, offset by the canvas origin on screen
    fn draw(&self, painter: &Painter, origin: Vec2);

    /// Distance from `pos` to the visible part of the element. Zero on or inside it.
    fn distance_to(&self, pos: Pos2) -> f32;

    /// Recolor the element's fill. Returns false when the element has nothing to fill.
    fn set_fill(&mut self, color: Color32) -> bool;
}

/// Enumeration of all primitives the canvas can hold
#[derive(Debug, Clone)]
pub enum ElementType {
    Segment(Segment),
    Line(Line),
    Rectangle(Rectangle),
    Triangle(Triangle),
    Oval(Oval),
    Dot(Dot),
    Text(Text),
    Bitmap(Bitmap),
}

impl ElementType {
    fn as_element(&self) -> &dyn Element {
        match self {
            ElementType::Segment(e) => e,
            ElementType::Line(e) => e,
            ElementType::Rectangle(e) => e,
            ElementType::Triangle(e) => e,
            ElementType::Oval(e) => e,
            ElementType::Dot(e) => e,
            ElementType::Text(e) => e,
            ElementType::Bitmap(e) => e,
        }
    }

    fn as_element_mut(&mut self) -> &mut dyn Element {
        match self {
            ElementType::Segment(e) => e,
            ElementType::Line(e) => e,
            ElementType::Rectangle(e) => e,
            ElementType::Triangle(e) => e,
            ElementType::Oval(e) => e,
            ElementType::Dot(e) => e,
            ElementType::Text(e) => e,
            ElementType::Bitmap(e) => e,
        }
    }
}

impl Element for ElementType {
    fn element_type(&self) -> &'static str {
        self.as_element().element_type()
    }

    fn rect(&self) -> Rect {
        self.as_element().rect()
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        self.as_element().draw(painter, origin)
    }

    fn distance_to(&self, pos: Pos2) -> f32 {
        self.as_element().distance_to(pos)
    }

    fn set_fill(&mut self, color: Color32) -> bool {
        self.as_element_mut().set_fill(color)
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use egui::ColorImage;

    pub fn create_segment(from: Pos2, to: Pos2, color: Color32, width: f32) -> ElementType {
        ElementType::Segment(Segment::new(from, to, color, width))
    }

    pub fn create_line(from: Pos2, to: Pos2, color: Color32, width: f32) -> ElementType {
        ElementType::Line(Line::solid(from, to, color, width))
    }

    pub fn create_dashed_line(
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: f32,
        dash: (f32, f32),
    ) -> ElementType {
        ElementType::Line(Line::dashed(from, to, color, width, dash))
    }

    pub fn create_rectangle(a: Pos2, b: Pos2, color: Color32, width: f32) -> ElementType {
        ElementType::Rectangle(Rectangle::new(a, b, Outline::new(color, width)))
    }

    pub fn create_triangle(anchor: Pos2, current: Pos2, color: Color32, width: f32) -> ElementType {
        ElementType::Triangle(Triangle::from_drag(anchor, current, Outline::new(color, width)))
    }

    pub fn create_oval(a: Pos2, b: Pos2, color: Color32, width: f32) -> ElementType {
        ElementType::Oval(Oval::new(a, b, Outline::new(color, width)))
    }

    pub fn create_dot(top_left: Pos2, color: Color32) -> ElementType {
        ElementType::Dot(Dot::at(top_left, color))
    }

    pub fn create_text(
        position: Pos2,
        content: String,
        family: String,
        size: u32,
        color: Color32,
    ) -> ElementType {
        ElementType::Text(Text::new(position, content, family, size, color))
    }

    pub fn create_bitmap(id: usize, image: ColorImage, position: Pos2) -> ElementType {
        ElementType::Bitmap(Bitmap::new(id, image, position))
    }
}
