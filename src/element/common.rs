use egui::{Pos2, Rect, pos2};

/// Number of vertices used to approximate an oval outline.
pub(crate) const OVAL_SEGMENTS: usize = 64;

/// Shortest distance from `point` to the segment `a`-`b`.
pub(crate) fn distance_to_line_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let along = b - a;
    let length_sq = along.length_sq();
    if length_sq == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(along) / length_sq).clamp(0.0, 1.0);
    point.distance(a + along * t)
}

/// Distance from a point to the outline of a closed polygon.
pub(crate) fn distance_to_outline(point: Pos2, vertices: &[Pos2]) -> f32 {
    match vertices {
        [] => f32::INFINITY,
        [only] => point.distance(*only),
        _ => vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(a, b)| distance_to_line_segment(point, *a, *b))
            .fold(f32::INFINITY, f32::min),
    }
}

/// Even-odd containment test for a closed polygon.
pub(crate) fn polygon_contains(point: Pos2, vertices: &[Pos2]) -> bool {
    let mut inside = false;
    let mut j = vertices.len().wrapping_sub(1);
    for i in 0..vertices.len() {
        let (a, b) = (vertices[i], vertices[j]);
        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Distance from a point to a closed shape. Zero anywhere inside when the shape is filled.
pub(crate) fn distance_to_closed_shape(point: Pos2, vertices: &[Pos2], filled: bool) -> f32 {
    if filled && polygon_contains(point, vertices) {
        0.0
    } else {
        distance_to_outline(point, vertices)
    }
}

/// Distance from a point to a rectangle's area. Zero inside.
pub(crate) fn distance_to_rect(point: Pos2, rect: Rect) -> f32 {
    let dx = (rect.min.x - point.x).max(0.0).max(point.x - rect.max.x);
    let dy = (rect.min.y - point.y).max(0.0).max(point.y - rect.max.y);
    (dx * dx + dy * dy).sqrt()
}

/// Vertices of the ellipse inscribed in the box spanned by two corners.
pub(crate) fn oval_vertices(a: Pos2, b: Pos2) -> Vec<Pos2> {
    let rect = Rect::from_two_pos(a, b);
    let center = rect.center();
    let (rx, ry) = (rect.width() / 2.0, rect.height() / 2.0);
    (0..OVAL_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / OVAL_SEGMENTS as f32 * std::f32::consts::TAU;
            pos2(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect()
}

/// Smallest rect holding every point, grown by `padding` for the stroke width.
pub(crate) fn padded_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }
    Rect::from_points(points).expand(padding)
}
