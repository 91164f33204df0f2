//! RGBA color primitive

use std::fmt;

/// RGBA color with channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    /// Channels as bytes, rounded to the nearest value
    pub fn to_rgb8(&self) -> [u8; 3] {
        [byte(self.r), byte(self.g), byte(self.b)]
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// CSS representation: `#RRGGBB` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        if self.is_opaque() {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            // Two decimals keep the output stable across float noise.
            let a = (self.a * 100.0).round() / 100.0;
            format!("rgba({r}, {g}, {b}, {a})")
        }
    }
}

fn byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_renders_back_to_same_value() {
        for hex in [0xDC2626, 0x000000, 0xFFFFFF, 0x0A0B0D, 0xD4AF37, 0x7F1D1D] {
            let expected = format!("#{hex:06X}");
            assert_eq!(Color::from_hex(hex).to_css(), expected);
        }
    }

    #[test]
    fn translucent_colors_render_as_rgba() {
        let c = Color::from_hex(0xDC2626).with_alpha(0.15);
        assert_eq!(c.to_css(), "rgba(220, 38, 38, 0.15)");
        assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
    }
}
