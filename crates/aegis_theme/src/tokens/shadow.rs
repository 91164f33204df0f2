//! Shadow tokens for theming

use aegis_core::Color;
use std::fmt;

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Deep,
    Soft,
}

/// A box shadow definition
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// CSS `box-shadow` value
    pub fn to_css(&self) -> String {
        format!(
            "{} {} {} {} {}",
            px(self.offset_x),
            px(self.offset_y),
            px(self.blur),
            px(self.spread),
            self.color.to_css()
        )
    }
}

fn px(v: f32) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}px")
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// The two shadow presets every theme carries
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    pub shadow_deep: Shadow,
    pub shadow_soft: Shadow,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::Deep => &self.shadow_deep,
            ShadowToken::Soft => &self.shadow_soft,
        }
    }

    /// Shadows for a dark theme: heavy black falloff
    pub fn dark() -> Self {
        let base = Color::BLACK;
        Self {
            shadow_deep: Shadow::new(0.0, 24.0, 64.0, -12.0, base.with_alpha(0.6)),
            shadow_soft: Shadow::new(0.0, 8.0, 24.0, 0.0, base.with_alpha(0.35)),
        }
    }

    /// Shadows for a light theme, tinted with the theme's text color
    pub fn light(tint: Color) -> Self {
        Self {
            shadow_deep: Shadow::new(0.0, 20.0, 50.0, -12.0, tint.with_alpha(0.18)),
            shadow_soft: Shadow::new(0.0, 4.0, 16.0, 0.0, tint.with_alpha(0.08)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offsets_render_unitless() {
        let s = Shadow::new(0.0, 8.0, 24.0, 0.0, Color::BLACK.with_alpha(0.35));
        assert_eq!(s.to_css(), "0 8px 24px 0 rgba(0, 0, 0, 0.35)");
    }

    #[test]
    fn negative_spread_keeps_sign() {
        let s = ShadowTokens::dark().shadow_deep;
        assert_eq!(s.to_css(), "0 24px 64px -12px rgba(0, 0, 0, 0.6)");
    }
}
