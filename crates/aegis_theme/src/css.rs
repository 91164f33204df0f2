//! CSS custom-property generation
//!
//! [`theme_properties`] turns a definition into the fixed, ordered list of
//! custom properties every stylesheet and inline style reads by name. The
//! same list feeds live application ([`crate::ThemeContext`]) and static
//! stylesheet generation ([`stylesheet`]).

use crate::theme::ThemeId;
use crate::themes::{definition, ThemeDefinition};
use crate::tokens::{GlowToken, ShadowToken};
use aegis_core::{Color, CustomProperty};
use indexmap::IndexMap;
use std::fmt::Write as _;

/// Every property name written by [`theme_properties`], in order
pub const PROPERTY_NAMES: [&str; 35] = [
    "background",
    "background-secondary",
    "foreground",
    "primary",
    "primary-foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "border",
    "input",
    "ring",
    "glass-fill",
    "glass-border",
    "shadow-deep",
    "shadow-soft",
    "orbital-glow-primary",
    "orbital-glow-secondary",
    "orbital-glow-accent",
    "orbital-glow-deep",
    "destructive",
    "destructive-foreground",
    "success",
    "success-foreground",
    "warning",
    "warning-foreground",
    "finance-positive",
    "finance-negative",
    "color-scheme",
];

/// Opacity recipe for translucent surfaces
struct SurfaceAlpha {
    card: f32,
    popover: f32,
    secondary: f32,
    muted: f32,
}

impl SurfaceAlpha {
    fn for_scheme(light: bool) -> Self {
        if light {
            Self {
                card: 0.92,
                popover: 0.98,
                secondary: 0.12,
                muted: 0.10,
            }
        } else {
            Self {
                card: 0.85,
                popover: 0.95,
                secondary: 0.18,
                muted: 0.15,
            }
        }
    }
}

/// Build the ordered custom-property list for `def`
pub fn theme_properties(def: &ThemeDefinition) -> Vec<CustomProperty> {
    let t = &def.tokens;
    let light = def.is_light();
    let alpha = SurfaceAlpha::for_scheme(light);
    let glow = def.orbital_glow();

    // Text drawn on accent fills
    let on_accent = if light { Color::WHITE } else { t.background };

    let (destructive, success, warning) = if light {
        (
            Color::from_hex(0xB91C1C),
            Color::from_hex(0x15803D),
            Color::from_hex(0xB45309),
        )
    } else {
        (t.finance_negative, t.finance_positive, Color::from_hex(0xF59E0B))
    };

    let mut props = Vec::with_capacity(PROPERTY_NAMES.len());
    let mut push = |name: &'static str, value: String| {
        props.push(CustomProperty::new(name, value));
    };

    push("background", t.background.to_css());
    push("background-secondary", t.background_secondary.to_css());
    push("foreground", t.text.to_css());

    push("primary", t.accent.to_css());
    push("primary-foreground", on_accent.to_css());

    push("card", t.background_secondary.with_alpha(alpha.card).to_css());
    push("card-foreground", t.text.to_css());
    push("popover", t.background_secondary.with_alpha(alpha.popover).to_css());
    push("popover-foreground", t.text.to_css());
    push("secondary", t.accent.with_alpha(alpha.secondary).to_css());
    push("secondary-foreground", t.text.to_css());
    push("muted", t.text_muted.with_alpha(alpha.muted).to_css());
    push("muted-foreground", t.text_muted.to_css());

    push("accent", t.accent.to_css());
    push("accent-foreground", on_accent.to_css());

    push("border", t.glass_border.to_css());
    push("input", t.glass_border.to_css());
    push("ring", t.accent.to_css());
    push("glass-fill", t.glass_fill.to_css());
    push("glass-border", t.glass_border.to_css());

    push("shadow-deep", t.shadow(ShadowToken::Deep).to_css());
    push("shadow-soft", t.shadow(ShadowToken::Soft).to_css());

    for token in GlowToken::ALL {
        push(token.property_name(), glow.get(token).to_css());
    }

    push("destructive", destructive.to_css());
    push("destructive-foreground", Color::WHITE.to_css());
    push("success", success.to_css());
    push("success-foreground", Color::WHITE.to_css());
    push("warning", warning.to_css());
    push("warning-foreground", on_accent.to_css());
    push("finance-positive", t.finance_positive.to_css());
    push("finance-negative", t.finance_negative.to_css());

    push("color-scheme", def.id.scheme().class_name().to_string());

    props
}

/// Property map for `id`, keyed by name without the `--` prefix
pub fn variable_map(id: ThemeId) -> IndexMap<String, String> {
    theme_properties(definition(id))
        .into_iter()
        .map(|p| (p.name.into_owned(), p.value))
        .collect()
}

/// Render a static stylesheet with one `.theme-<id>` block per theme.
///
/// The first theme also provides the `:root` fallback so pages render
/// before any class is applied.
pub fn stylesheet(themes: &[ThemeId]) -> String {
    let mut out = String::new();
    for (i, id) in themes.iter().enumerate() {
        let selector = if i == 0 {
            format!(":root,\n.{}", id.class_name())
        } else {
            format!(".{}", id.class_name())
        };
        let _ = writeln!(out, "{selector} {{");
        for prop in theme_properties(definition(*id)) {
            let _ = writeln!(out, "  {prop}");
        }
        let _ = writeln!(out, "}}\n");
    }
    out
}
