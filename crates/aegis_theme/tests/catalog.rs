use aegis_theme::domain::mapped_domains;
use aegis_theme::navigation::{domain_of_view, domains, find_domain};
use aegis_theme::{
    catalog, definition, derive_orbital_glow, is_light, resolve, theme_for_domain,
    themes_for_domain, try_resolve, ColorScheme, Palette, ThemeError, ThemeId, LIGHT_SUFFIX,
};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn catalog_has_twenty_distinct_themes() {
    let ids: HashSet<&str> = catalog().iter().map(|def| def.id.as_str()).collect();
    assert_eq!(ids.len(), 20);
    assert_eq!(catalog().len(), 20);
}

#[test]
fn every_palette_has_a_dark_and_light_variant() {
    for palette in Palette::ALL {
        let dark = definition(ThemeId::dark(palette));
        let light = definition(ThemeId::light(palette));

        assert_eq!(dark.id.as_str(), palette.slug());
        assert_eq!(light.id.as_str(), format!("{}{LIGHT_SUFFIX}", palette.slug()));
        assert_eq!(light.name, format!("{} Light", dark.name));
        assert_ne!(
            dark.tokens.background, light.tokens.background,
            "palette={palette:?}"
        );
    }
}

#[test]
fn definition_ids_match_their_catalog_position() {
    for (def, id) in catalog().iter().zip(ThemeId::ALL) {
        assert_eq!(def.id, id);
        assert!(std::ptr::eq(def, definition(id)));
    }
}

#[test]
fn light_flag_matches_suffix() {
    for def in catalog() {
        assert_eq!(def.is_light(), def.id.as_str().ends_with(LIGHT_SUFFIX));
        assert_eq!(is_light(def.id.as_str()), def.is_light());
        assert_eq!(
            def.id.scheme() == ColorScheme::Light,
            def.is_light(),
            "{}",
            def.id
        );
    }
}

#[test]
fn crimson_ember_light_tokens() {
    let def = try_resolve("crimson-ember-light").unwrap();
    assert_eq!(def.name, "Crimson Ember Light");
    assert_eq!(def.tokens.accent.to_css(), "#DC2626");
    assert_eq!(def.tokens.glass_fill.to_css(), "rgba(255, 255, 255, 0.72)");
    assert_eq!(def.tokens.finance_negative.to_css(), "#B91C1C");
}

#[test]
fn default_theme_is_royal_gold_dark() {
    let def = definition(ThemeId::DEFAULT);
    assert_eq!(def.id.as_str(), "royal-gold");
    assert_eq!(def.tokens.accent.to_css(), "#D4AF37");
    assert_eq!(def.tokens.background.to_css(), "#0B0A07");
    assert!(!def.is_light());
}

#[test]
fn resolve_falls_back_for_unknown_identifiers() {
    for bad in ["", "neon-pink", "crimson-ember-dark", "ROYAL-GOLD"] {
        assert_eq!(resolve(bad).id, ThemeId::DEFAULT, "{bad:?}");
    }
    assert_eq!(resolve("sapphire-tide").id, ThemeId::dark(Palette::SapphireTide));
}

#[test]
fn surrounding_whitespace_is_not_a_theme() {
    for padded in [" verdant-jade", "verdant-jade-light\n", "\tcopper-forge "] {
        assert_eq!(resolve(padded).id, ThemeId::DEFAULT, "{padded:?}");
        assert!(try_resolve(padded).is_err());
    }
    // The lexical light check and resolution agree on padded input.
    assert!(!is_light("verdant-jade-light\n"));
    assert!(!resolve("verdant-jade-light\n").is_light());
}

#[test]
fn try_resolve_reports_the_identifier() {
    let err = try_resolve("neon-pink").unwrap_err();
    assert!(matches!(err, ThemeError::UnknownTheme(ref id) if id == "neon-pink"));
    assert_eq!(err.to_string(), "unknown theme `neon-pink`");
}

#[test]
fn is_light_is_lexical() {
    assert!(is_light("not-a-theme-light"));
    assert!(!is_light("crimson-ember"));
    assert!(!is_light("light-mode"));
}

#[test]
fn orbital_glow_ignores_scheme_and_defaults_to_royal_gold() {
    assert_eq!(
        derive_orbital_glow("verdant-jade-light"),
        derive_orbital_glow("verdant-jade")
    );
    assert_eq!(
        derive_orbital_glow("nonexistent"),
        Palette::RoyalGold.orbital_glow()
    );
    assert_eq!(derive_orbital_glow("royal-gold").primary.to_css(), "#D4AF37");
}

#[test]
fn domain_map_agrees_with_theme_domains() {
    for key in mapped_domains() {
        let id = theme_for_domain(key).unwrap();
        assert!(!id.is_light(), "{key} maps to a light theme");
        assert!(definition(id).serves(key), "{id} does not list {key}");
    }
    assert_eq!(theme_for_domain("unmapped"), None);
}

#[test]
fn every_theme_domain_is_mapped() {
    let mapped: HashSet<&str> = mapped_domains().collect();
    for def in catalog() {
        for domain in def.domains {
            assert!(mapped.contains(domain), "{domain} from {}", def.id);
        }
    }
}

#[test]
fn themes_for_domain_returns_both_schemes() {
    let ids: Vec<&str> = themes_for_domain("finance")
        .map(|def| def.id.as_str())
        .collect();
    assert_eq!(ids, vec!["copper-forge", "copper-forge-light"]);
    assert_eq!(themes_for_domain("nowhere").count(), 0);
}

#[test]
fn navigation_domains_all_have_a_theme() {
    for domain in domains() {
        assert!(
            theme_for_domain(domain.key).is_some(),
            "navigation domain {} has no theme",
            domain.key
        );
        assert!(!domain.views.is_empty());
    }
}

#[test]
fn navigation_lookups() {
    let finance = find_domain("finance-operations").unwrap();
    assert_eq!(finance.label, "Finance");
    assert_eq!(finance.view("payroll").map(|v| v.label), Some("Payroll"));

    assert_eq!(domain_of_view("rota").map(|d| d.key), Some("workforce"));
    assert_eq!(domain_of_view("missing"), None);
}
