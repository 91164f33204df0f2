//! Theme resolution from untrusted identifiers
//!
//! Identifiers arriving from storage, URLs or user input are plain strings.
//! These helpers turn them into definitions and never fail: anything unknown
//! resolves to [`ThemeId::DEFAULT`] with a warning.

use crate::error::ThemeError;
use crate::theme::{Palette, ThemeId, LIGHT_SUFFIX};
use crate::themes::{definition, ThemeDefinition};
use crate::tokens::OrbitalGlow;

/// Look up a definition, failing on unknown identifiers
pub fn try_resolve(identifier: &str) -> Result<&'static ThemeDefinition, ThemeError> {
    identifier.parse::<ThemeId>().map(definition)
}

/// Look up a definition, falling back to the default theme
pub fn resolve(identifier: &str) -> &'static ThemeDefinition {
    match try_resolve(identifier) {
        Ok(def) => def,
        Err(err) => {
            tracing::warn!(
                "{err}; falling back to `{}`",
                ThemeId::DEFAULT
            );
            definition(ThemeId::DEFAULT)
        }
    }
}

/// Whether `identifier` names a light variant.
///
/// Purely lexical: the identifier does not have to exist in the catalog.
pub fn is_light(identifier: &str) -> bool {
    identifier.ends_with(LIGHT_SUFFIX)
}

/// Orbital glow colors for the palette behind `identifier`
pub fn derive_orbital_glow(identifier: &str) -> OrbitalGlow {
    let slug = identifier
        .strip_suffix(LIGHT_SUFFIX)
        .unwrap_or(identifier);
    Palette::from_slug(slug)
        .unwrap_or(Palette::RoyalGold)
        .orbital_glow()
}
