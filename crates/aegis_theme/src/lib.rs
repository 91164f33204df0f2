//! AEGIS Theme System
//!
//! Theme catalog, resolution and application for the AEGIS care-management
//! dashboard.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Catalog**: 20 built-in themes, ten palettes each in a dark and a light
//!   variant
//! - **Resolution**: string identifiers from storage or user input resolve to
//!   definitions, with a fallback instead of an error
//! - **Application**: one batched write of CSS custom properties and marker
//!   classes onto a style scope
//! - **Persistence**: debounced, observable storage of the active theme plus
//!   an independently stored global/page scope
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use aegis_core::{Document, ScopeRoot};
//! use aegis_theme::{MemoryStorage, ThemeConfig, ThemeContext};
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let mut themes = ThemeContext::new(ThemeConfig::default(), storage)
//!     .with_document(Document::new());
//!
//! let def = themes.apply("crimson-ember-light", true);
//! assert_eq!(themes.current().as_str(), "crimson-ember-light");
//! assert_eq!(def.tokens.accent.to_css(), "#DC2626");
//!
//! let doc = themes.document().unwrap();
//! assert!(doc.has_class(ScopeRoot::Body, "light"));
//! ```
//!
//! # Identifiers
//!
//! Internally themes are addressed by [`ThemeId`], a closed type that cannot
//! name a missing theme. Strings are only parsed at the edges:
//! [`resolve`] falls back to [`ThemeId::DEFAULT`], [`try_resolve`] reports an
//! error.

pub mod config;
pub mod css;
pub mod domain;
mod error;
pub mod navigation;
pub mod persist;
pub mod resolver;
pub mod scope;
pub mod state;
pub mod storage;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use config::ThemeConfig;
pub use css::{stylesheet, theme_properties, variable_map};
pub use domain::theme_for_domain;
pub use error::ThemeError;
pub use navigation::{NavDomain, NavView};
pub use persist::{PersistOutcome, PersistStatus, PersistTicket, Persister};
pub use resolver::{derive_orbital_glow, is_light, resolve, try_resolve};
pub use scope::ThemeScope;
pub use state::ThemeContext;
pub use storage::{DisabledStorage, FileStorage, MemoryStorage, StorageError, ThemeStorage};
pub use theme::{ColorScheme, Palette, ThemeId, LIGHT_SUFFIX};
pub use themes::{catalog, definition, themes_for_domain, ThemeDefinition};
pub use tokens::*;
