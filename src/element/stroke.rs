use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use super::Element;
use crate::element::common;

/// One piece of a free-hand stroke, drawn with round caps.
///
/// The pencil and eraser commit one of these per pointer move.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Pos2,
    pub to: Pos2,
    pub color: Color32,
    pub width: f32,
}

impl Segment {
    pub fn new(from: Pos2, to: Pos2, color: Color32, width: f32) -> Self {
        Self { from, to, color, width }
    }
}

impl Element for Segment {
    fn element_type(&self) -> &'static str {
        "segment"
    }

    fn rect(&self) -> Rect {
        common::padded_bounds(&[self.from, self.to], self.width / 2.0)
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        let (from, to) = (self.from + origin, self.to + origin);
        painter.line_segment([from, to], EguiStroke::new(self.width, self.color));
        // Round caps
        painter.circle_filled(from, self.width / 2.0, self.color);
        painter.circle_filled(to, self.width / 2.0, self.color);
    }

    fn distance_to(&self, pos: Pos2) -> f32 {
        (common::distance_to_line_segment(pos, self.from, self.to) - self.width / 2.0).max(0.0)
    }

    fn set_fill(&mut self, color: Color32) -> bool {
        self.color = color;
        true
    }
}

/// A straight line from the tool's anchor to the release point.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub from: Pos2,
    pub to: Pos2,
    pub color: Color32,
    pub width: f32,
    /// Dash and gap lengths. `None` draws a solid line.
    pub dash: Option<(f32, f32)>,
}

impl Line {
    pub fn solid(from: Pos2, to: Pos2, color: Color32, width: f32) -> Self {
        Self { from, to, color, width, dash: None }
    }

    pub fn dashed(from: Pos2, to: Pos2, color: Color32, width: f32, dash: (f32, f32)) -> Self {
        Self { from, to, color, width, dash: Some(dash) }
    }

    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }
}

impl Element for Line {
    fn element_type(&self) -> &'static str {
        if self.is_dashed() { "dashed_line" } else { "line" }
    }

    fn rect(&self) -> Rect {
        common::padded_bounds(&[self.from, self.to], self.width / 2.0)
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        let points = [self.from + origin, self.to + origin];
        let stroke = EguiStroke::new(self.width, self.color);
        match self.dash {
            Some((dash, gap)) => {
                painter.extend(Shape::dashed_line(&points, stroke, dash, gap));
            }
            None => {
                painter.line_segment(points, stroke);
            }
        }
    }

    fn distance_to(&self, pos: Pos2) -> f32 {
        (common::distance_to_line_segment(pos, self.from, self.to) - self.width / 2.0).max(0.0)
    }

    fn set_fill(&mut self, color: Color32) -> bool {
        self.color = color;
        true
    }
}
