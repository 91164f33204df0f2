//! Theme identifiers
//!
//! A theme is one of ten palettes in either its dark or light scheme. The
//! string form is the palette slug, suffixed with [`LIGHT_SUFFIX`] for the
//! light variant (`"royal-gold"`, `"royal-gold-light"`).

use crate::error::ThemeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Suffix that marks the light variant of a theme identifier
pub const LIGHT_SUFFIX: &str = "-light";

/// Light or dark color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == ColorScheme::Light
    }

    /// Marker class written to the document roots
    pub fn class_name(self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }
}

/// Base color palettes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Palette {
    RoyalGold,
    VerdantJade,
    CrimsonEmber,
    SapphireTide,
    AmethystDusk,
    ObsidianSteel,
    RoseQuartz,
    ArcticFrost,
    CopperForge,
    MidnightAurora,
}

impl Palette {
    pub const ALL: [Palette; 10] = [
        Palette::RoyalGold,
        Palette::VerdantJade,
        Palette::CrimsonEmber,
        Palette::SapphireTide,
        Palette::AmethystDusk,
        Palette::ObsidianSteel,
        Palette::RoseQuartz,
        Palette::ArcticFrost,
        Palette::CopperForge,
        Palette::MidnightAurora,
    ];

    /// Stable slug used in identifiers, classes and storage
    pub fn slug(self) -> &'static str {
        match self {
            Palette::RoyalGold => "royal-gold",
            Palette::VerdantJade => "verdant-jade",
            Palette::CrimsonEmber => "crimson-ember",
            Palette::SapphireTide => "sapphire-tide",
            Palette::AmethystDusk => "amethyst-dusk",
            Palette::ObsidianSteel => "obsidian-steel",
            Palette::RoseQuartz => "rose-quartz",
            Palette::ArcticFrost => "arctic-frost",
            Palette::CopperForge => "copper-forge",
            Palette::MidnightAurora => "midnight-aurora",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Palette::RoyalGold => "Royal Gold",
            Palette::VerdantJade => "Verdant Jade",
            Palette::CrimsonEmber => "Crimson Ember",
            Palette::SapphireTide => "Sapphire Tide",
            Palette::AmethystDusk => "Amethyst Dusk",
            Palette::ObsidianSteel => "Obsidian Steel",
            Palette::RoseQuartz => "Rose Quartz",
            Palette::ArcticFrost => "Arctic Frost",
            Palette::CopperForge => "Copper Forge",
            Palette::MidnightAurora => "Midnight Aurora",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Palette> {
        Palette::ALL.into_iter().find(|p| p.slug() == slug)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Identifier of one theme definition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeId {
    palette: Palette,
    scheme: ColorScheme,
}

impl ThemeId {
    /// Theme used whenever an identifier cannot be resolved
    pub const DEFAULT: ThemeId = ThemeId::dark(Palette::RoyalGold);

    /// Every theme, dark before light for each palette
    pub const ALL: [ThemeId; 20] = [
        ThemeId::dark(Palette::RoyalGold),
        ThemeId::light(Palette::RoyalGold),
        ThemeId::dark(Palette::VerdantJade),
        ThemeId::light(Palette::VerdantJade),
        ThemeId::dark(Palette::CrimsonEmber),
        ThemeId::light(Palette::CrimsonEmber),
        ThemeId::dark(Palette::SapphireTide),
        ThemeId::light(Palette::SapphireTide),
        ThemeId::dark(Palette::AmethystDusk),
        ThemeId::light(Palette::AmethystDusk),
        ThemeId::dark(Palette::ObsidianSteel),
        ThemeId::light(Palette::ObsidianSteel),
        ThemeId::dark(Palette::RoseQuartz),
        ThemeId::light(Palette::RoseQuartz),
        ThemeId::dark(Palette::ArcticFrost),
        ThemeId::light(Palette::ArcticFrost),
        ThemeId::dark(Palette::CopperForge),
        ThemeId::light(Palette::CopperForge),
        ThemeId::dark(Palette::MidnightAurora),
        ThemeId::light(Palette::MidnightAurora),
    ];

    pub const fn new(palette: Palette, scheme: ColorScheme) -> Self {
        Self { palette, scheme }
    }

    pub const fn dark(palette: Palette) -> Self {
        Self::new(palette, ColorScheme::Dark)
    }

    pub const fn light(palette: Palette) -> Self {
        Self::new(palette, ColorScheme::Light)
    }

    pub fn palette(self) -> Palette {
        self.palette
    }

    pub fn scheme(self) -> ColorScheme {
        self.scheme
    }

    pub fn is_light(self) -> bool {
        self.scheme.is_light()
    }

    /// Same palette in the opposite scheme
    pub fn counterpart(self) -> Self {
        Self::new(self.palette, self.scheme.toggle())
    }

    /// Same palette in `scheme`
    pub fn with_scheme(self, scheme: ColorScheme) -> Self {
        Self::new(self.palette, scheme)
    }

    /// Position in [`ThemeId::ALL`]
    pub fn index(self) -> usize {
        self.palette.index() * 2 + usize::from(self.is_light())
    }

    pub fn as_str(self) -> &'static str {
        match (self.palette, self.scheme) {
            (Palette::RoyalGold, ColorScheme::Dark) => "royal-gold",
            (Palette::RoyalGold, ColorScheme::Light) => "royal-gold-light",
            (Palette::VerdantJade, ColorScheme::Dark) => "verdant-jade",
            (Palette::VerdantJade, ColorScheme::Light) => "verdant-jade-light",
            (Palette::CrimsonEmber, ColorScheme::Dark) => "crimson-ember",
            (Palette::CrimsonEmber, ColorScheme::Light) => "crimson-ember-light",
            (Palette::SapphireTide, ColorScheme::Dark) => "sapphire-tide",
            (Palette::SapphireTide, ColorScheme::Light) => "sapphire-tide-light",
            (Palette::AmethystDusk, ColorScheme::Dark) => "amethyst-dusk",
            (Palette::AmethystDusk, ColorScheme::Light) => "amethyst-dusk-light",
            (Palette::ObsidianSteel, ColorScheme::Dark) => "obsidian-steel",
            (Palette::ObsidianSteel, ColorScheme::Light) => "obsidian-steel-light",
            (Palette::RoseQuartz, ColorScheme::Dark) => "rose-quartz",
            (Palette::RoseQuartz, ColorScheme::Light) => "rose-quartz-light",
            (Palette::ArcticFrost, ColorScheme::Dark) => "arctic-frost",
            (Palette::ArcticFrost, ColorScheme::Light) => "arctic-frost-light",
            (Palette::CopperForge, ColorScheme::Dark) => "copper-forge",
            (Palette::CopperForge, ColorScheme::Light) => "copper-forge-light",
            (Palette::MidnightAurora, ColorScheme::Dark) => "midnight-aurora",
            (Palette::MidnightAurora, ColorScheme::Light) => "midnight-aurora-light",
        }
    }

    /// Marker class for this theme (`theme-<id>`)
    pub fn class_name(self) -> String {
        format!("theme-{}", self.as_str())
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (slug, scheme) = match s.strip_suffix(LIGHT_SUFFIX) {
            Some(base) => (base, ColorScheme::Light),
            None => (s, ColorScheme::Dark),
        };
        Palette::from_slug(slug)
            .map(|palette| ThemeId::new(palette, scheme))
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

impl Serialize for ThemeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ThemeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_indexed_in_order() {
        for (i, id) in ThemeId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i, "{id}");
        }
    }

    #[test]
    fn string_form_round_trips() {
        for id in ThemeId::ALL {
            assert_eq!(id.as_str().parse::<ThemeId>().ok(), Some(id));
        }
    }

    #[test]
    fn light_ids_carry_the_suffix() {
        for id in ThemeId::ALL {
            assert_eq!(id.as_str().ends_with(LIGHT_SUFFIX), id.is_light());
        }
    }

    #[test]
    fn parse_rejects_near_misses() {
        for bad in ["", "-light", "royal", "Royal-Gold", "royal-gold-dark", "royal-gold-light-light"] {
            assert!(bad.parse::<ThemeId>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn serializes_as_its_string_form() {
        let id = ThemeId::light(Palette::RoseQuartz);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"rose-quartz-light\"");
        assert_eq!(serde_json::from_str::<ThemeId>(&json).unwrap(), id);
        assert!(serde_json::from_str::<ThemeId>("\"rose-quartz-dark\"").is_err());
    }

    #[test]
    fn ids_order_by_palette_then_scheme() {
        let mut ids = ThemeId::ALL.to_vec();
        ids.reverse();
        ids.sort();
        assert_eq!(ids, ThemeId::ALL.to_vec());
        assert!(ColorScheme::Dark < ColorScheme::Light);
        assert!(ThemeId::light(Palette::RoyalGold) < ThemeId::dark(Palette::VerdantJade));
    }

    #[test]
    fn parse_does_not_trim() {
        assert!(" royal-gold".parse::<ThemeId>().is_err());
        assert!("royal-gold-light\n".parse::<ThemeId>().is_err());
    }

    #[test]
    fn scheme_toggle_is_an_involution() {
        assert_eq!(ColorScheme::Dark.toggle().toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Light.class_name(), "light");
    }
}
