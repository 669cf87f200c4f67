use std::sync::LazyLock;

use indexmap::IndexMap;
use mosaic_theme::{ThemeDefinition, ThemeError};
use serde::{Deserialize, Serialize};

use crate::assets::AssetProvider;

/// A named bundle of component theme definitions.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Theme {
    pub name: String,
    /// Definitions keyed by component name, e.g. `"Button"`.
    #[serde(default)]
    pub components: IndexMap<String, ThemeDefinition>,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident, $fallback_name:literal] ),+ ) => {
        $(
            pub static $name: LazyLock<Theme> = LazyLock::new(|| {
                Theme::from_string(include_str!($path)).unwrap_or_else(|error| {
                    tracing::error!(%error, theme = $fallback_name, "bundled theme failed to parse");
                    Theme::new($fallback_name)
                })
            });
        )+
    };
}

generate_builtin_themes!(["../../assets/themes/default.json", DEFAULT_THEME, "default"]);

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: IndexMap::new(),
        }
    }

    /// The theme bundled with the crate.
    pub fn builtin() -> &'static Theme {
        &DEFAULT_THEME
    }

    /// Adds or replaces the definition for one component.
    pub fn component(mut self, name: impl Into<String>, definition: ThemeDefinition) -> Self {
        self.components.insert(name.into(), definition);
        self
    }

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    /// Loads a theme bundle from an asset provider, e.g. the embedded
    /// `MosaicAssets`.
    pub fn from_asset(provider: &dyn AssetProvider, path: &str) -> Result<Theme, ThemeError> {
        let bytes = provider
            .get(path)
            .ok_or_else(|| ThemeError::MissingAsset(path.to_string()))?;

        let theme: Theme = serde_json::from_slice(&bytes)?;
        tracing::debug!(theme = %theme.name, path, "loaded theme bundle from assets");
        Ok(theme)
    }

    pub fn definition(&self, component: &str) -> Option<&ThemeDefinition> {
        self.components.get(component)
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}
