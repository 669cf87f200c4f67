use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{StyleMap, ThemeError};

/// Theme data for one component type.
///
/// Every field defaults to empty, so a definition that only sets `baseStyle`
/// (or nothing at all) is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeDefinition {
    /// Applied unconditionally, before size and variant layers.
    pub base_style: StyleMap,
    pub variants: IndexMap<String, StyleMap>,
    pub sizes: IndexMap<String, StyleMap>,
    /// Fallbacks for theming options the instance and its group leave unset.
    pub default_options: DefaultOptions,
}

impl ThemeDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json.as_ref())?)
    }

    pub fn base_style(mut self, style: StyleMap) -> Self {
        self.base_style = style;
        self
    }

    pub fn variant(mut self, name: impl Into<String>, style: StyleMap) -> Self {
        self.variants.insert(name.into(), style);
        self
    }

    pub fn size(mut self, name: impl Into<String>, style: StyleMap) -> Self {
        self.sizes.insert(name.into(), style);
        self
    }

    pub fn default_variant(mut self, variant: impl Into<String>) -> Self {
        self.default_options.variant = Some(variant.into());
        self
    }

    pub fn default_size(mut self, size: impl Into<String>) -> Self {
        self.default_options.size = Some(size.into());
        self
    }

    pub fn default_color_scheme(mut self, color_scheme: impl Into<String>) -> Self {
        self.default_options.color_scheme = Some(color_scheme.into());
        self
    }

    /// True for the definition handed out for unregistered components.
    pub fn is_empty(&self) -> bool {
        self.base_style.is_empty()
            && self.variants.is_empty()
            && self.sizes.is_empty()
            && self.default_options == DefaultOptions::default()
    }
}

/// Default theming option values of a [`ThemeDefinition`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefaultOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
}
