//! Theme context
//!
//! [`ThemeContext`] owns the active theme, the application scope, the attached
//! style scope and persistence. The application shell creates one per
//! session (or per request when rendering on a server) and routes every theme
//! change through it.
//!
//! Theme switches are applied in one [`StyleBatch`]: all custom properties
//! plus the marker-class swaps. The cached theme updates before the call
//! returns; only the storage write is deferred.

use crate::config::ThemeConfig;
use crate::css::theme_properties;
use crate::domain;
use crate::persist::{PersistStatus, Persister};
use crate::resolver::resolve;
use crate::scope::ThemeScope;
use crate::storage::ThemeStorage;
use crate::theme::{ColorScheme, ThemeId};
use crate::themes::{definition, ThemeDefinition};
use aegis_core::{ClassSwap, StyleBatch, StyleScope};
use std::sync::Arc;
use tracing::{debug, warn};

/// Scheme marker classes; exactly one is present after an apply
pub const SCHEME_CLASSES: &[&str] = &["light", "dark"];

/// Prefix of the per-theme marker class
pub const THEME_CLASS_PREFIX: &str = "theme-";

/// Session-wide theme state and applicator
pub struct ThemeContext {
    config: ThemeConfig,
    current: ThemeId,
    scope: ThemeScope,
    document: Option<Box<dyn StyleScope>>,
    storage: Arc<dyn ThemeStorage>,
    persister: Persister,
    redraw: Option<fn()>,
}

impl ThemeContext {
    /// Create a context and restore the persisted theme and scope.
    ///
    /// Missing, unreadable or unknown persisted values fall back to the
    /// configured default theme and [`ThemeScope::Global`].
    pub fn new(config: ThemeConfig, storage: Arc<dyn ThemeStorage>) -> Self {
        let persister = Persister::new(
            storage.clone(),
            config.theme_key.clone(),
            config.persist_debounce(),
        );
        let current = restore_theme(&*storage, &config);
        let scope = restore_scope(&*storage, &config);
        debug!("ThemeContext::new - restored {current} ({scope})");

        Self {
            config,
            current,
            scope,
            document: None,
            storage,
            persister,
            redraw: None,
        }
    }

    /// Builder form of [`ThemeContext::attach_document`]
    pub fn with_document(mut self, document: impl StyleScope + 'static) -> Self {
        self.attach_document(Box::new(document));
        self
    }

    /// Attach a style scope and paint the current theme onto it
    pub fn attach_document(&mut self, document: Box<dyn StyleScope>) {
        self.document = Some(document);
        self.commit(definition(self.current));
    }

    /// Detach and return the style scope
    pub fn detach_document(&mut self) -> Option<Box<dyn StyleScope>> {
        self.document.take()
    }

    pub fn document(&self) -> Option<&dyn StyleScope> {
        self.document.as_deref()
    }

    /// Register a function called after every theme change
    pub fn set_redraw_callback(&mut self, callback: fn()) {
        self.redraw = Some(callback);
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    // ========== Theme ==========

    /// Apply a theme by identifier.
    ///
    /// Unknown identifiers fall back to the default theme. Returns the
    /// resolved definition. Without an attached style scope nothing changes:
    /// the cached theme, storage and redraw callback are left alone.
    pub fn apply(&mut self, identifier: &str, persist: bool) -> &'static ThemeDefinition {
        let def = resolve(identifier);
        self.apply_definition(def, persist)
    }

    /// Apply a known theme
    pub fn apply_theme(&mut self, id: ThemeId, persist: bool) -> &'static ThemeDefinition {
        self.apply_definition(definition(id), persist)
    }

    fn apply_definition(
        &mut self,
        def: &'static ThemeDefinition,
        persist: bool,
    ) -> &'static ThemeDefinition {
        if !self.commit(def) {
            return def;
        }
        debug!(
            "ThemeContext::apply - {} -> {} (persist: {persist})",
            self.current, def.id
        );
        self.current = def.id;

        if persist {
            self.persister.schedule(def.id.as_str());
        }

        if let Some(redraw) = self.redraw {
            redraw();
        }
        def
    }

    /// Paint `def` onto the attached scope; false when there is none
    fn commit(&mut self, def: &ThemeDefinition) -> bool {
        let Some(document) = self.document.as_mut() else {
            warn!("no style scope attached; `{}` not applied", def.id);
            return false;
        };

        let batch = StyleBatch::new()
            .properties(theme_properties(def))
            .swap(ClassSwap::exact(SCHEME_CLASSES, def.id.scheme().class_name()))
            .swap(ClassSwap::prefixed(THEME_CLASS_PREFIX, def.id.class_name()));
        document.commit(&batch);
        true
    }

    /// Active theme identifier
    pub fn current(&self) -> ThemeId {
        self.current
    }

    pub fn current_definition(&self) -> &'static ThemeDefinition {
        definition(self.current)
    }

    pub fn is_light(&self) -> bool {
        self.current.is_light()
    }

    /// Switch to the current palette's light/dark counterpart
    pub fn toggle_scheme(&mut self) -> &'static ThemeDefinition {
        self.apply_theme(self.current.counterpart(), true)
    }

    /// Switch the current palette to `scheme`
    pub fn set_scheme(&mut self, scheme: ColorScheme) -> &'static ThemeDefinition {
        self.apply_theme(self.current.with_scheme(scheme), true)
    }

    // ========== Scope ==========

    pub fn scope(&self) -> ThemeScope {
        self.scope
    }

    /// Set and persist the application scope
    pub fn set_scope(&mut self, scope: ThemeScope) {
        debug!("ThemeContext::set_scope - {} -> {scope}", self.scope);
        self.scope = scope;
        if let Err(err) = self.storage.store(&self.config.scope_key, scope.as_str()) {
            warn!("failed to persist theme scope: {err}");
        }
    }

    pub fn should_use_global_theme(&self) -> bool {
        self.scope.is_global()
    }

    // ========== Domains ==========

    /// Theme for a navigation domain, keeping the current light/dark choice.
    ///
    /// Unknown domains keep the current theme.
    pub fn theme_for_domain(&self, domain_key: &str) -> ThemeId {
        match domain::theme_for_domain(domain_key) {
            Some(id) => id.with_scheme(self.current.scheme()),
            None => self.current,
        }
    }

    /// Notify the context that the user navigated to a domain.
    ///
    /// With page scope the domain's theme is applied (not persisted); with
    /// global scope nothing changes. Returns the applied definition, if any.
    pub fn enter_domain(&mut self, domain_key: &str) -> Option<&'static ThemeDefinition> {
        if self.should_use_global_theme() {
            return None;
        }
        let id = self.theme_for_domain(domain_key);
        if id == self.current || self.document.is_none() {
            return None;
        }
        Some(self.apply_theme(id, false))
    }

    // ========== Persistence ==========

    /// Status of the most recent theme write
    pub fn persist_status(&self) -> PersistStatus {
        self.persister.status()
    }

    /// Wait for every scheduled theme write to complete or fail
    pub async fn flush(&self) -> PersistStatus {
        self.persister.flush().await
    }

    /// Return to the configured defaults and forget persisted preferences
    pub fn reset(&mut self) {
        if let Err(err) = self.storage.remove(&self.config.scope_key) {
            warn!("failed to clear `{}`: {err}", self.config.scope_key);
        }
        self.scope = ThemeScope::Global;
        let def = definition(self.config.default_theme);
        if self.document.is_some() {
            self.commit(def);
        }
        self.current = def.id;
        // Queued behind any pending theme write so it cannot be resurrected.
        self.persister.schedule_clear();
        if let Some(redraw) = self.redraw {
            redraw();
        }
    }
}

fn restore_theme(storage: &dyn ThemeStorage, config: &ThemeConfig) -> ThemeId {
    match storage.load(&config.theme_key) {
        Ok(Some(stored)) => stored.parse().unwrap_or_else(|err| {
            warn!("ignoring persisted theme: {err}");
            config.default_theme
        }),
        Ok(None) => config.default_theme,
        Err(err) => {
            warn!("failed to read persisted theme: {err}");
            config.default_theme
        }
    }
}

fn restore_scope(storage: &dyn ThemeStorage, config: &ThemeConfig) -> ThemeScope {
    match storage.load(&config.scope_key) {
        Ok(Some(stored)) => stored.parse().unwrap_or_else(|err| {
            warn!("ignoring persisted scope: {err}");
            ThemeScope::Global
        }),
        Ok(None) => ThemeScope::Global,
        Err(err) => {
            warn!("failed to read persisted scope: {err}");
            ThemeScope::Global
        }
    }
}
