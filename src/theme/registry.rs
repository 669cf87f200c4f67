//! Process-wide store of component theme definitions.
//!
//! Registration is expected during start-up. Rendering works against an
//! immutable [`snapshot`], so registering while a render is in flight never
//! changes what that render observes.

use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use mosaic_theme::{StyleMap, ThemeDefinition};

use crate::theme::{ResolvedStyle, Theme, ThemingOptions, resolve_definition};

/// What to do when a component name is registered twice.
///
/// Both policies keep the last registration; `Warn` additionally logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    #[default]
    Overwrite,
    Warn,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    pub duplicate_policy: DuplicatePolicy,
}

/// Theme definitions keyed by component name.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    definitions: IndexMap<String, Arc<ThemeDefinition>>,
    config: RegistryConfig,
}

static EMPTY_DEFINITION: LazyLock<Arc<ThemeDefinition>> = LazyLock::new(Default::default);

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            definitions: IndexMap::new(),
            config,
        }
    }

    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    pub fn set_config(&mut self, config: RegistryConfig) {
        self.config = config;
    }

    /// Registers `definition` under `component`, replacing any previous
    /// definition wholesale. Returns the replaced definition.
    pub fn register(
        &mut self,
        component: impl Into<String>,
        definition: ThemeDefinition,
    ) -> Option<Arc<ThemeDefinition>> {
        let component = component.into();
        let previous = self
            .definitions
            .insert(component.clone(), Arc::new(definition));

        match (&previous, self.config.duplicate_policy) {
            (Some(_), DuplicatePolicy::Warn) => {
                tracing::warn!(component = %component, "theme definition registered twice, keeping the last one");
            }
            _ => tracing::debug!(component = %component, replaced = previous.is_some(), "registered theme definition"),
        }

        previous
    }

    /// Registers every component of `theme`.
    pub fn register_theme(&mut self, theme: &Theme) {
        for (component, definition) in &theme.components {
            self.register(component.clone(), definition.clone());
        }
        tracing::debug!(theme = %theme.name, components = theme.components.len(), "registered theme");
    }

    /// The definition for `component`, or a shared empty definition when
    /// nothing is registered under that name.
    pub fn lookup(&self, component: &str) -> Arc<ThemeDefinition> {
        match self.definitions.get(component) {
            Some(definition) => definition.clone(),
            None => {
                tracing::trace!(component, "no theme definition, rendering unthemed");
                EMPTY_DEFINITION.clone()
            }
        }
    }

    pub fn contains(&self, component: &str) -> bool {
        self.definitions.contains_key(component)
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.definitions.clear();
    }

    /// Resolves the final style of `component`. See [`resolve_definition`].
    pub fn resolve(
        &self,
        component: &str,
        options: &ThemingOptions,
        local: &StyleMap,
    ) -> ResolvedStyle {
        resolve_definition(&self.lookup(component), options, local)
    }

    /// The options resolution would use for `component`: `options` with
    /// unset fields filled from the definition's defaults.
    pub fn effective_options(&self, component: &str, options: &ThemingOptions) -> ThemingOptions {
        options.or(&ThemingOptions::from(&self.lookup(component).default_options))
    }
}

static GLOBAL: LazyLock<RwLock<Arc<StyleRegistry>>> = LazyLock::new(Default::default);

fn read_global() -> RwLockReadGuard<'static, Arc<StyleRegistry>> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_global() -> RwLockWriteGuard<'static, Arc<StyleRegistry>> {
    GLOBAL.write().unwrap_or_else(PoisonError::into_inner)
}

/// Registers a definition in the global registry. Last registration wins.
pub fn register(component: impl Into<String>, definition: ThemeDefinition) {
    let mut global = write_global();
    Arc::make_mut(&mut global).register(component, definition);
}

/// Registers every component of `theme` in the global registry.
pub fn register_theme(theme: &Theme) {
    let mut global = write_global();
    Arc::make_mut(&mut global).register_theme(theme);
}

/// Looks up a definition in the global registry.
pub fn lookup(component: &str) -> Arc<ThemeDefinition> {
    read_global().lookup(component)
}

/// Sets the global registry's configuration.
pub fn configure(config: RegistryConfig) {
    let mut global = write_global();
    Arc::make_mut(&mut global).set_config(config);
}

/// An immutable view of the global registry as of now.
pub fn snapshot() -> Arc<StyleRegistry> {
    read_global().clone()
}

/// Drops every global definition and restores the default configuration.
///
/// Meant for test isolation and theme reloads. Existing snapshots keep the
/// definitions they were taken with.
pub fn reset() {
    *write_global() = Arc::new(StyleRegistry::default());
    tracing::debug!("global style registry reset");
}
