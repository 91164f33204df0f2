//! Orbital glow colors
//!
//! Four supplementary colors per palette that drive the animated background
//! orbs. They depend only on the palette, so a theme and its light
//! counterpart share one glow set.

use crate::theme::Palette;
use aegis_core::Color;

/// Glow color keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum GlowToken {
    Primary,
    Secondary,
    Accent,
    Deep,
}

impl GlowToken {
    pub const ALL: [GlowToken; 4] = [
        GlowToken::Primary,
        GlowToken::Secondary,
        GlowToken::Accent,
        GlowToken::Deep,
    ];

    /// Custom property name (`orbital-glow-<key>`)
    pub fn property_name(self) -> &'static str {
        match self {
            GlowToken::Primary => "orbital-glow-primary",
            GlowToken::Secondary => "orbital-glow-secondary",
            GlowToken::Accent => "orbital-glow-accent",
            GlowToken::Deep => "orbital-glow-deep",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalGlow {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub deep: Color,
}

impl OrbitalGlow {
    pub fn get(&self, token: GlowToken) -> Color {
        match token {
            GlowToken::Primary => self.primary,
            GlowToken::Secondary => self.secondary,
            GlowToken::Accent => self.accent,
            GlowToken::Deep => self.deep,
        }
    }

    fn from_hex(primary: u32, secondary: u32, accent: u32, deep: u32) -> Self {
        Self {
            primary: Color::from_hex(primary),
            secondary: Color::from_hex(secondary),
            accent: Color::from_hex(accent),
            deep: Color::from_hex(deep),
        }
    }
}

impl Palette {
    pub fn orbital_glow(self) -> OrbitalGlow {
        match self {
            Palette::RoyalGold => OrbitalGlow::from_hex(0xD4AF37, 0xF59E0B, 0xFDE68A, 0x78350F),
            Palette::VerdantJade => OrbitalGlow::from_hex(0x10B981, 0x34D399, 0xA7F3D0, 0x064E3B),
            Palette::CrimsonEmber => OrbitalGlow::from_hex(0xEF4444, 0xF97316, 0xFCA5A5, 0x7F1D1D),
            Palette::SapphireTide => OrbitalGlow::from_hex(0x3B82F6, 0x06B6D4, 0x93C5FD, 0x1E3A8A),
            Palette::AmethystDusk => OrbitalGlow::from_hex(0xA855F7, 0xEC4899, 0xD8B4FE, 0x4C1D95),
            Palette::ObsidianSteel => OrbitalGlow::from_hex(0x94A3B8, 0x64748B, 0xE2E8F0, 0x1E293B),
            Palette::RoseQuartz => OrbitalGlow::from_hex(0xEC4899, 0xF472B6, 0xFBCFE8, 0x831843),
            Palette::ArcticFrost => OrbitalGlow::from_hex(0x22D3EE, 0x38BDF8, 0xCFFAFE, 0x164E63),
            Palette::CopperForge => OrbitalGlow::from_hex(0xEA8A3C, 0xD97706, 0xFED7AA, 0x7C2D12),
            Palette::MidnightAurora => OrbitalGlow::from_hex(0x6366F1, 0x8B5CF6, 0xC7D2FE, 0x312E81),
        }
    }
}
