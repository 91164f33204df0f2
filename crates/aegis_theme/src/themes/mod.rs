//! Built-in theme catalog
//!
//! Twenty definitions, one per [`ThemeId`], built once on first access and
//! never mutated afterwards.

mod palettes;

use crate::theme::ThemeId;
use crate::tokens::{OrbitalGlow, ThemeTokens};
use std::sync::OnceLock;

use palettes::{base_palette, build_tokens, palette_description, palette_domains};

/// Static description of one theme
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeDefinition {
    pub id: ThemeId,
    /// User-facing display name
    pub name: String,
    pub description: &'static str,
    /// Functional domains this theme is recommended for
    pub domains: &'static [&'static str],
    pub tokens: ThemeTokens,
}

impl ThemeDefinition {
    fn build(id: ThemeId) -> Self {
        let palette = id.palette();
        let name = if id.is_light() {
            format!("{} Light", palette.display_name())
        } else {
            palette.display_name().to_string()
        };

        Self {
            id,
            name,
            description: palette_description(palette),
            domains: palette_domains(palette),
            tokens: build_tokens(base_palette(palette, id.scheme()), id.scheme()),
        }
    }

    pub fn is_light(&self) -> bool {
        self.id.is_light()
    }

    pub fn orbital_glow(&self) -> OrbitalGlow {
        self.id.palette().orbital_glow()
    }

    /// Whether this theme lists `domain` among its domains
    pub fn serves(&self, domain: &str) -> bool {
        self.domains.contains(&domain)
    }
}

static CATALOG: OnceLock<Vec<ThemeDefinition>> = OnceLock::new();

/// Every definition, ordered like [`ThemeId::ALL`]
pub fn catalog() -> &'static [ThemeDefinition] {
    CATALOG.get_or_init(|| ThemeId::ALL.into_iter().map(ThemeDefinition::build).collect())
}

/// Definition of `id`
pub fn definition(id: ThemeId) -> &'static ThemeDefinition {
    &catalog()[id.index()]
}

/// Definitions recommended for a functional domain
pub fn themes_for_domain(domain: &str) -> impl Iterator<Item = &'static ThemeDefinition> + '_ {
    catalog().iter().filter(move |def| def.serves(domain))
}
