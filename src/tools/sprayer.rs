use egui::{CursorIcon, Pos2, pos2};

use super::{Tool, ToolContext};
use crate::element::factory;

/// Scatters single-unit dots around the pointer on every move.
#[derive(Debug, Clone, Default)]
pub struct SprayerTool {
    /// Bumped per dot so repeated moves over one spot still scatter.
    counter: u32,
}

impl SprayerTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn scatter_hash(x: f32, y: f32, counter: u32) -> u32 {
        let ix = (x * 100.0) as u32;
        let iy = (y * 100.0) as u32;
        let mut h = ix
            .wrapping_mul(374761393)
            .wrapping_add(iy.wrapping_mul(668265263))
            .wrapping_add(counter.wrapping_mul(1013904223));
        h ^= h >> 13;
        h = h.wrapping_mul(1274126177);
        h ^= h >> 16;
        h
    }

    /// Integer offset in `[-radius, radius]`.
    fn offset(hash: u32, radius: i32) -> f32 {
        let span = (2 * radius + 1) as u32;
        ((hash % span) as i32 - radius) as f32
    }
}

impl Tool for SprayerTool {
    fn name(&self) -> &'static str {
        "sprayer"
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::Copy
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &mut ToolContext<'_>) {
        let color = ctx.state.stroke_color();
        let radius = ctx.config.spray_radius;
        for _ in 0..ctx.config.spray_count {
            self.counter = self.counter.wrapping_add(1);
            let hx = Self::scatter_hash(pos.x, pos.y, self.counter);
            let hy = Self::scatter_hash(pos.y, pos.x, self.counter.wrapping_add(99991));
            let top_left = pos2(pos.x + Self::offset(hx, radius), pos.y + Self::offset(hy, radius));
            ctx.canvas.add(factory::create_dot(top_left, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_cover_the_whole_range() {
        assert_eq!(SprayerTool::offset(0, 15), -15.0);
        assert_eq!(SprayerTool::offset(30, 15), 15.0);
        for hash in [1u32, 77, 1234567, u32::MAX] {
            let offset = SprayerTool::offset(hash, 15);
            assert!((-15.0..=15.0).contains(&offset));
        }
    }
}
