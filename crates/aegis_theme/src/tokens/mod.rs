//! Design tokens for theming
//!
//! Each theme carries one [`ThemeTokens`] bundle:
//! - Surface and text colors
//! - Accent and glass (frosted panel) colors
//! - Two shadow presets
//! - Finance semantic colors for positive/negative values
//!
//! Orbital glow colors live per palette in [`glow`].

mod glow;
mod shadow;

pub use glow::*;
pub use shadow::*;

use aegis_core::Color;

/// Complete token bundle of one theme
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeTokens {
    // Surfaces
    pub background: Color,
    pub background_secondary: Color,

    // Text
    pub text: Color,
    pub text_muted: Color,

    // Accent
    pub accent: Color,

    // Glass panels
    pub glass_fill: Color,
    pub glass_border: Color,

    // Shadows
    pub shadows: ShadowTokens,

    // Finance semantics
    pub finance_positive: Color,
    pub finance_negative: Color,
}

impl ThemeTokens {
    pub fn shadow(&self, token: ShadowToken) -> &Shadow {
        self.shadows.get(token)
    }
}
