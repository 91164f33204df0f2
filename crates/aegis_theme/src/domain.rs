//! Domain-to-theme mapping

use crate::theme::{Palette, ThemeId};

static DOMAIN_THEMES: &[(&str, Palette)] = &[
    ("healthcare", Palette::VerdantJade),
    ("wellbeing", Palette::VerdantJade),
    ("workforce", Palette::SapphireTide),
    ("scheduling", Palette::SapphireTide),
    ("finance", Palette::CopperForge),
    ("finance-operations", Palette::CopperForge),
    ("quality", Palette::CrimsonEmber),
    ("incidents", Palette::CrimsonEmber),
    ("compliance", Palette::ArcticFrost),
    ("audit", Palette::ArcticFrost),
    ("analytics", Palette::AmethystDusk),
    ("reporting", Palette::AmethystDusk),
    ("care-planning", Palette::RoseQuartz),
    ("family-portal", Palette::RoseQuartz),
    ("system", Palette::ObsidianSteel),
    ("security", Palette::ObsidianSteel),
    ("communications", Palette::MidnightAurora),
    ("training", Palette::MidnightAurora),
    ("admin", Palette::RoyalGold),
    ("executive", Palette::RoyalGold),
];

/// Recommended (dark) theme for a domain.
///
/// `None` means the domain has no preference and the current theme stays.
pub fn theme_for_domain(domain: &str) -> Option<ThemeId> {
    DOMAIN_THEMES
        .iter()
        .find(|(key, _)| *key == domain)
        .map(|(_, palette)| ThemeId::dark(*palette))
}

/// Every mapped domain key
pub fn mapped_domains() -> impl Iterator<Item = &'static str> {
    DOMAIN_THEMES.iter().map(|(key, _)| *key)
}
