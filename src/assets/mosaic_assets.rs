#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::borrow::Cow;

use anyhow::Result;
use enum_assoc::Assoc;
use rust_embed::RustEmbed;

use crate::assets::AssetProvider;

/// Icons and theme bundles embedded in the crate.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[include = "themes/**/*.json"]
#[exclude = "*.DS_Store"]
pub struct MosaicAssets;

impl AssetProvider for MosaicAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(MosaicAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into_owned()))
            .collect())
    }
}

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Assoc)]
#[func(pub fn path(&self) -> &'static str)]
pub enum MosaicIconKind {
    /// Checkmark icon for confirmations and selections.
    #[assoc(path = "icons/checkmark.svg")]
    Checkmark,

    /// Downward arrow for dropdowns and expand indicators.
    #[assoc(path = "icons/arrow_down.svg")]
    ArrowDown,

    #[assoc(path = "icons/close.svg")]
    Close,
}

impl From<MosaicIconKind> for String {
    fn from(kind: MosaicIconKind) -> String {
        kind.path().to_string()
    }
}
