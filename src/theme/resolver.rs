//! Layered style resolution.
//!
//! A component's final style is built from its [`ThemeDefinition`] in a fixed
//! order, later layers overwriting earlier ones per top-level property:
//!
//! 1. `baseStyle`
//! 2. `sizes[size]`
//! 3. `variants[variant]`
//! 4. the instance's local override
//!
//! Nothing is cached; every render resolves again.

use std::ops::Deref;

use mosaic_theme::{DefaultOptions, StyleMap, StyleValue, ThemeDefinition};
use serde::Serialize;

use crate::theme::registry;

/// The variant, size and color scheme a component is rendered with.
///
/// Unset fields fall back to whatever the next source of options provides:
/// a group's shared options, then the definition defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ThemingOptions {
    pub variant: Option<String>,
    pub size: Option<String>,
    pub color_scheme: Option<String>,
}

impl ThemingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_color_scheme(mut self, color_scheme: impl Into<String>) -> Self {
        self.color_scheme = Some(color_scheme.into());
        self
    }

    /// Field-wise fallback: values set on `self` win, unset ones come from
    /// `fallback`.
    pub fn or(&self, fallback: &ThemingOptions) -> ThemingOptions {
        ThemingOptions {
            variant: self.variant.clone().or_else(|| fallback.variant.clone()),
            size: self.size.clone().or_else(|| fallback.size.clone()),
            color_scheme: self
                .color_scheme
                .clone()
                .or_else(|| fallback.color_scheme.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.variant.is_none() && self.size.is_none() && self.color_scheme.is_none()
    }
}

impl From<&DefaultOptions> for ThemingOptions {
    fn from(defaults: &DefaultOptions) -> Self {
        Self {
            variant: defaults.variant.clone(),
            size: defaults.size.clone(),
            color_scheme: defaults.color_scheme.clone(),
        }
    }
}

/// The flattened style a component renders with.
///
/// Only produced by resolution; read it through `Deref<Target = StyleMap>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle(StyleMap);

impl ResolvedStyle {
    pub fn as_map(&self) -> &StyleMap {
        &self.0
    }

    pub fn into_map(self) -> StyleMap {
        self.0
    }
}

impl Deref for ResolvedStyle {
    type Target = StyleMap;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<StyleMap> for ResolvedStyle {
    fn eq(&self, other: &StyleMap) -> bool {
        &self.0 == other
    }
}

impl From<ResolvedStyle> for StyleValue {
    fn from(style: ResolvedStyle) -> Self {
        StyleValue::Map(style.0)
    }
}

/// Resolves `definition` for the given options and local override.
///
/// Unset options are filled from the definition's defaults. Size and variant
/// keys the definition doesn't know add nothing. Theme layers get
/// `{colorScheme}` interpolated with the effective color scheme; the local
/// override is merged verbatim.
pub fn resolve_definition(
    definition: &ThemeDefinition,
    options: &ThemingOptions,
    local: &StyleMap,
) -> ResolvedStyle {
    let effective = options.or(&ThemingOptions::from(&definition.default_options));
    let color_scheme = effective.color_scheme.as_deref();

    let mut style = StyleMap::new();
    style.merge_interpolated(&definition.base_style, color_scheme);

    if let Some(size) = effective.size.as_deref() {
        match definition.sizes.get(size) {
            Some(layer) => style.merge_interpolated(layer, color_scheme),
            None => tracing::trace!(size, "size key not defined, skipping layer"),
        }
    }

    if let Some(variant) = effective.variant.as_deref() {
        match definition.variants.get(variant) {
            Some(layer) => style.merge_interpolated(layer, color_scheme),
            None => tracing::trace!(variant, "variant key not defined, skipping layer"),
        }
    }

    style.merge(local);
    ResolvedStyle(style)
}

/// Resolves `component` against the current global registry.
pub fn resolve(component: &str, options: &ThemingOptions, local: &StyleMap) -> ResolvedStyle {
    registry::snapshot().resolve(component, options, local)
}
