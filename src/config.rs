use egui::{Color32, Vec2, vec2};

/// A palette entry: the color name shown in tooltips and its sRGB value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color32,
}

const fn named(name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor {
        name,
        color: Color32::from_rgb(r, g, b),
    }
}

/// The fixed palette, laid out two rows high.
pub const PALETTE: [NamedColor; 19] = [
    named("black", 0, 0, 0),
    named("white", 255, 255, 255),
    named("grey", 190, 190, 190),
    named("lightgrey", 211, 211, 211),
    named("brown", 165, 42, 42),
    named("darkgoldenrod", 184, 134, 11),
    named("red", 255, 0, 0),
    named("pink", 255, 192, 203),
    named("orange", 255, 165, 0),
    named("yellow", 255, 255, 0),
    named("lightyellow", 255, 255, 224),
    named("beige", 245, 245, 220),
    named("green", 0, 255, 0),
    named("lightgreen", 144, 238, 144),
    named("lightblue", 173, 216, 230),
    named("skyblue", 135, 206, 235),
    named("darkblue", 0, 0, 139),
    named("blue", 0, 0, 255),
    named("purple", 160, 32, 240),
];

/// Font families offered by the text dialog.
pub const FONT_FAMILIES: [&str; 4] = ["Arial", "Calibri", "Courier New", "Times New Roman"];

/// Editor-wide settings. There is no config file; everything is fixed at startup.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub window_title: String,
    pub window_size: Vec2,
    pub canvas_size: Vec2,
    pub canvas_background: Color32,
    pub stroke_color: Color32,
    pub erase_color: Color32,
    pub min_width: u8,
    pub max_width: u8,
    pub default_width: u8,
    pub spray_count: usize,
    pub spray_radius: i32,
    /// Dash and gap length for the dashed line tool.
    pub dash_pattern: (f32, f32),
    pub default_font: &'static str,
    pub default_font_size: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_title: "Raster Paint".to_owned(),
            window_size: vec2(1280.0, 720.0),
            canvas_size: vec2(1250.0, 600.0),
            canvas_background: Color32::WHITE,
            stroke_color: Color32::BLACK,
            erase_color: Color32::WHITE,
            min_width: 1,
            max_width: 36,
            default_width: 1,
            spray_count: 30,
            spray_radius: 15,
            dash_pattern: (5.0, 5.0),
            default_font: FONT_FAMILIES[1],
            default_font_size: 11,
        }
    }
}

impl EditorConfig {
    /// Clamp a requested stroke width into the slider range.
    pub fn clamp_width(&self, width: f32) -> f32 {
        width.clamp(self.min_width as f32, self.max_width as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_names_are_unique() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn width_is_clamped_to_slider_range() {
        let config = EditorConfig::default();
        assert_eq!(config.clamp_width(0.0), 1.0);
        assert_eq!(config.clamp_width(12.0), 12.0);
        assert_eq!(config.clamp_width(99.0), 36.0);
    }
}
