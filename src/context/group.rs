use mosaic_theme::Length;

use crate::{
    RenderCx,
    theme::{Orientation, ThemingOptions},
};

/// Shared configuration a button group publishes to the controls inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupConfig {
    /// Shared size, variant and color scheme. Explicit options on a control
    /// win over these.
    pub options: ThemingOptions,
    pub spacing: Length,
    pub is_attached: bool,
    pub orientation: Orientation,
    pub is_disabled: bool,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            options: ThemingOptions::default(),
            spacing: Length::rem(0.5),
            is_attached: false,
            orientation: Orientation::default(),
            is_disabled: false,
        }
    }
}

impl RenderCx {
    /// The configuration of the nearest enclosing group, if any.
    ///
    /// Groups do not merge: an inner group fully replaces the outer one for
    /// its subtree.
    pub fn group(&self) -> Option<&GroupConfig> {
        self.read::<GroupConfig>()
    }
}
