use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2, pos2};

use super::Element;
use crate::element::common;

/// Outline and optional interior of a closed shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Color32,
    pub width: f32,
    pub fill: Option<Color32>,
}

impl Outline {
    pub fn new(color: Color32, width: f32) -> Self {
        Self { color, width, fill: None }
    }

    fn stroke(&self) -> EguiStroke {
        EguiStroke::new(self.width, self.color)
    }

    fn fill_color(&self) -> Color32 {
        self.fill.unwrap_or(Color32::TRANSPARENT)
    }
}

/// Reorder vertices so they wind clockwise on screen, as egui's convex fill expects.
fn clockwise(mut vertices: Vec<Pos2>) -> Vec<Pos2> {
    let twice_area: f32 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    if twice_area < 0.0 {
        vertices.reverse();
    }
    vertices
}

fn draw_polygon(painter: &Painter, vertices: &[Pos2], origin: Vec2, outline: &Outline) {
    let points = vertices.iter().map(|p| *p + origin).collect();
    painter.add(Shape::convex_polygon(
        clockwise(points),
        outline.fill_color(),
        outline.stroke(),
    ));
}

/// Axis-aligned rectangle spanned by the anchor and the release point.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub corner_a: Pos2,
    pub corner_b: Pos2,
    pub outline: Outline,
}

impl Rectangle {
    pub fn new(corner_a: Pos2, corner_b: Pos2, outline: Outline) -> Self {
        Self { corner_a, corner_b, outline }
    }

    fn vertices(&self) -> [Pos2; 4] {
        let (a, b) = (self.corner_a, self.corner_b);
        [a, pos2(b.x, a.y), b, pos2(a.x, b.y)]
    }
}

impl Element for Rectangle {
    fn element_type(&self) -> &'static str {
        "rectangle"
    }

    fn rect(&self) -> Rect {
        Rect::from_two_pos(self.corner_a, self.corner_b).expand(self.outline.width / 2.0)
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        painter.rect(
            Rect::from_two_pos(self.corner_a + origin, self.corner_b + origin),
            0.0,
            self.outline.fill_color(),
            self.outline.stroke(),
        );
    }

    fn distance_to(&self, pos: Pos2) -> f32 {
        common::distance_to_closed_shape(pos, &self.vertices(), self.outline.fill.is_some())
    }

    fn set_fill(&mut self, color: Color32) -> bool {
        self.outline.fill = Some(color);
        true
    }
}

/// Isosceles triangle: apex on the anchor's row, base on the pointer's row.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Pos2; 3],
    pub outline: Outline,
}

impl Triangle {
    pub fn from_drag(anchor: Pos2, current: Pos2, outline: Outline) -> Self {
        let apex = pos2((anchor.x + current.x) / 2.0, anchor.y);
        Self {
            vertices: [apex, current, pos2(anchor.x, current.y)],
            outline,
        }
    }
}

impl Element for Triangle {
    fn element_type(&self) -> &'static str {
        "triangle"
    }

    fn rect(&self) -> Rect {
        common::padded_bounds(&self.vertices, self.outline.width / 2.0)
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        draw_polygon(painter, &self.vertices, origin, &self.outline);
    }

    fn distance_to(&self, pos: Pos2) -> f32 {
        common::distance_to_closed_shape(pos, &self.vertices, self.outline.fill.is_some())
    }

    fn set_fill(&mut self, color: Color32) -> bool {
        self.outline.fill = Some(color);
        true
    }
}

/// Ellipse inscribed in the box spanned by the anchor and the release point.
#[derive(Debug, Clone, PartialEq)]
pub struct Oval {
    pub corner_a: Pos2,
    pub corner_b: Pos2,
    pub outline: Outline,
}

impl Oval {
    pub fn new(corner_a: Pos2, corner_b: Pos2, outline: Outline) -> Self {
        Self { corner_a, corner_b, outline }
    }
}

impl Element for Oval {
    fn element_type(&self) -> &'static str {
        "oval"
    }

    fn rect(&self) -> Rect {
        Rect::from_two_pos(self.corner_a, self.corner_b).expand(self.outline.width / 2.0)
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        let vertices = common::oval_vertices(self.corner_a, self.corner_b);
        draw_polygon(painter, &vertices, origin, &self.outline);
    }

    fn distance_to(&self, pos: Pos2) -> f32 {
        let vertices = common::oval_vertices(self.corner_a, self.corner_b);
        common::distance_to_closed_shape(pos, &vertices, self.outline.fill.is_some())
    }

    fn set_fill(&mut self, color: Color32) -> bool {
        self.outline.fill = Some(color);
        true
    }
}

/// A single sprayer particle: a circle one unit across.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub center: Pos2,
    pub fill: Color32,
    pub outline: Color32,
}

impl Dot {
    pub const DIAMETER: f32 = 1.0;

    /// A dot whose bounding box starts at `top_left`.
    pub fn at(top_left: Pos2, color: Color32) -> Self {
        let half = Self::DIAMETER / 2.0;
        Self {
            center: top_left + Vec2::splat(half),
            fill: color,
            outline: color,
        }
    }
}

impl Element for Dot {
    fn element_type(&self) -> &'static str {
        "dot"
    }

    fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, Vec2::splat(Self::DIAMETER))
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        painter.circle(
            self.center + origin,
            Self::DIAMETER / 2.0,
            self.fill,
            EguiStroke::new(1.0, self.outline),
        );
    }

    fn distance_to(&self, pos: Pos2) -> f32 {
        (pos.distance(self.center) - Self::DIAMETER / 2.0).max(0.0)
    }

    fn set_fill(&mut self, color: Color32) -> bool {
        self.fill = color;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_vertices_follow_drag() {
        let tri = Triangle::from_drag(
            pos2(10.0, 10.0),
            pos2(50.0, 80.0),
            Outline::new(Color32::RED, 2.0),
        );
        assert_eq!(tri.vertices, [pos2(30.0, 10.0), pos2(50.0, 80.0), pos2(10.0, 80.0)]);
    }

    #[test]
    fn clockwise_reverses_counter_clockwise_input() {
        let ccw = vec![pos2(0.0, 0.0), pos2(0.0, 10.0), pos2(10.0, 10.0)];
        let cw = clockwise(ccw.clone());
        assert_eq!(cw, ccw.into_iter().rev().collect::<Vec<_>>());
    }

    #[test]
    fn filling_a_rectangle_makes_its_interior_hit() {
        let mut rect = Rectangle::new(
            pos2(0.0, 0.0),
            pos2(100.0, 100.0),
            Outline::new(Color32::BLACK, 1.0),
        );
        assert!(rect.distance_to(pos2(50.0, 50.0)) > 40.0);
        assert!(rect.set_fill(Color32::BLUE));
        assert_eq!(rect.distance_to(pos2(50.0, 50.0)), 0.0);
        assert_eq!(rect.outline.fill, Some(Color32::BLUE));
    }

    #[test]
    fn dot_is_one_unit_wide() {
        let dot = Dot::at(pos2(4.0, 7.0), Color32::GREEN);
        assert_eq!(dot.center, pos2(4.5, 7.5));
        assert_eq!(dot.rect().size(), Vec2::splat(1.0));
    }
}
