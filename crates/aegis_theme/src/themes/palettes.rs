//! Base palettes for the built-in themes
//!
//! Each palette is written down as a handful of base colors per scheme; the
//! remaining tokens (glass, shadows, finance) are derived by
//! [`build_tokens`].

use crate::theme::{ColorScheme, Palette};
use crate::tokens::{ShadowTokens, ThemeTokens};
use aegis_core::Color;

#[derive(Clone, Copy)]
pub(crate) struct BasePalette {
    background: u32,
    background_secondary: u32,
    text: u32,
    text_muted: u32,
    accent: u32,
}

const fn base(
    background: u32,
    background_secondary: u32,
    text: u32,
    text_muted: u32,
    accent: u32,
) -> BasePalette {
    BasePalette {
        background,
        background_secondary,
        text,
        text_muted,
        accent,
    }
}

/// Base colors of `palette` in `scheme`
pub(crate) fn base_palette(palette: Palette, scheme: ColorScheme) -> BasePalette {
    use ColorScheme::{Dark, Light};
    match (palette, scheme) {
        (Palette::RoyalGold, Dark) => base(0x0B0A07, 0x17140C, 0xF5EBD0, 0xB8A67A, 0xD4AF37),
        (Palette::RoyalGold, Light) => base(0xFBF8EF, 0xF3ECD9, 0x2A2110, 0x7A6A45, 0xB8860B),
        (Palette::VerdantJade, Dark) => base(0x06110D, 0x0C1F18, 0xE3F5EC, 0x8DB8A4, 0x10B981),
        (Palette::VerdantJade, Light) => base(0xF3FBF7, 0xE3F4EB, 0x0F2A20, 0x4D7565, 0x047857),
        (Palette::CrimsonEmber, Dark) => base(0x120607, 0x210C0E, 0xFBE7E7, 0xC49A9A, 0xEF4444),
        (Palette::CrimsonEmber, Light) => base(0xFFF7F7, 0xFDE8E8, 0x2B0D0D, 0x7F4F4F, 0xDC2626),
        (Palette::SapphireTide, Dark) => base(0x050B17, 0x0B1730, 0xE2ECFF, 0x8EA3C9, 0x3B82F6),
        (Palette::SapphireTide, Light) => base(0xF5F8FF, 0xE6EEFD, 0x0C1A33, 0x51648A, 0x1D4ED8),
        (Palette::AmethystDusk, Dark) => base(0x0D0716, 0x1A0F2B, 0xEFE5FF, 0xA99AC7, 0xA855F7),
        (Palette::AmethystDusk, Light) => base(0xFAF6FF, 0xEFE6FC, 0x22103A, 0x6B5A8A, 0x7E22CE),
        (Palette::ObsidianSteel, Dark) => base(0x0A0B0D, 0x15171B, 0xE5E7EB, 0x9CA3AF, 0x94A3B8),
        (Palette::ObsidianSteel, Light) => base(0xF8FAFC, 0xEEF1F5, 0x111827, 0x4B5563, 0x475569),
        (Palette::RoseQuartz, Dark) => base(0x150A10, 0x26121D, 0xFDE7F1, 0xC79AB0, 0xEC4899),
        (Palette::RoseQuartz, Light) => base(0xFFF6FA, 0xFCE7F1, 0x3A0F24, 0x8A5470, 0xBE185D),
        (Palette::ArcticFrost, Dark) => base(0x061216, 0x0D2128, 0xE0F7FA, 0x8DB6BF, 0x22D3EE),
        (Palette::ArcticFrost, Light) => base(0xF4FCFD, 0xE2F5F8, 0x0B2A31, 0x4E7780, 0x0E7490),
        (Palette::CopperForge, Dark) => base(0x120B06, 0x22150C, 0xFBEBDD, 0xC2A183, 0xEA8A3C),
        (Palette::CopperForge, Light) => base(0xFFF8F1, 0xFCEBDC, 0x33200F, 0x80624A, 0xC2410C),
        (Palette::MidnightAurora, Dark) => base(0x05060F, 0x0E1124, 0xE6E9FF, 0x9096C4, 0x6366F1),
        (Palette::MidnightAurora, Light) => base(0xF6F7FF, 0xE8EAFD, 0x141736, 0x595E8F, 0x4338CA),
    }
}

/// One-line description of a palette
pub(crate) fn palette_description(palette: Palette) -> &'static str {
    match palette {
        Palette::RoyalGold => "Signature AEGIS palette with gilded accents for executive overviews",
        Palette::VerdantJade => "Calm clinical greens for care delivery and wellbeing views",
        Palette::CrimsonEmber => "High-alert reds for incidents, safeguarding and quality review",
        Palette::SapphireTide => "Steady blues for rotas, staffing and workforce planning",
        Palette::AmethystDusk => "Violet tones for analytics, insight and reporting",
        Palette::ObsidianSteel => "Neutral steel greys for system settings and security",
        Palette::RoseQuartz => "Warm pinks for care planning and family engagement",
        Palette::ArcticFrost => "Crisp cyans for compliance, audits and regulatory evidence",
        Palette::CopperForge => "Copper and amber for budgets, invoicing and payroll",
        Palette::MidnightAurora => "Indigo night tones for communications and training",
    }
}

/// Functional domains a palette is recommended for
pub(crate) fn palette_domains(palette: Palette) -> &'static [&'static str] {
    match palette {
        Palette::RoyalGold => &["admin", "executive"],
        Palette::VerdantJade => &["healthcare", "wellbeing"],
        Palette::CrimsonEmber => &["quality", "incidents"],
        Palette::SapphireTide => &["workforce", "scheduling"],
        Palette::AmethystDusk => &["analytics", "reporting"],
        Palette::ObsidianSteel => &["system", "security"],
        Palette::RoseQuartz => &["care-planning", "family-portal"],
        Palette::ArcticFrost => &["compliance", "audit"],
        Palette::CopperForge => &["finance", "finance-operations"],
        Palette::MidnightAurora => &["communications", "training"],
    }
}

/// Derive the full token bundle from a base palette
pub(crate) fn build_tokens(base: BasePalette, scheme: ColorScheme) -> ThemeTokens {
    let background = Color::from_hex(base.background);
    let background_secondary = Color::from_hex(base.background_secondary);
    let text = Color::from_hex(base.text);
    let accent = Color::from_hex(base.accent);

    let (glass_fill, glass_border, shadows) = match scheme {
        ColorScheme::Dark => (
            background_secondary.with_alpha(0.6),
            accent.with_alpha(0.18),
            ShadowTokens::dark(),
        ),
        ColorScheme::Light => (
            Color::WHITE.with_alpha(0.72),
            accent.with_alpha(0.22),
            ShadowTokens::light(text),
        ),
    };
    let (finance_positive, finance_negative) = match scheme {
        ColorScheme::Dark => (Color::from_hex(0x4ADE80), Color::from_hex(0xF87171)),
        ColorScheme::Light => (Color::from_hex(0x15803D), Color::from_hex(0xB91C1C)),
    };

    ThemeTokens {
        background,
        background_secondary,
        text,
        text_muted: Color::from_hex(base.text_muted),
        accent,
        glass_fill,
        glass_border,
        shadows,
        finance_positive,
        finance_negative,
    }
}
