//! Themeable UI components.
//!
//! Components resolve their look from theme definitions registered in a
//! process-wide [`registry`](theme::registry), layered as base, size, variant
//! and finally the instance's own style. Containers such as
//! [`ButtonGroup`](components::ButtonGroup) share configuration with the
//! components rendered inside them through the render context.
//!
//! ```
//! use mosaic_ui::prelude::*;
//!
//! mosaic_ui::init();
//!
//! let mut cx = RenderCx::new();
//! let tree = cx.mount(
//!     ButtonGroup::new()
//!         .size("sm")
//!         .child(Button::new().text("Save"))
//!         .child(Button::new().text("Cancel").variant("ghost")),
//! );
//! assert_eq!(tree.root().map(|root| root.children.len()), Some(2));
//! ```

pub mod animation;

pub mod components;

pub mod context;

pub mod extensions;

pub mod render;
pub use render::{AnyComponent, ComponentHandle, MountedTree, RenderCx, RenderNode, RenderOnce};

pub mod theme;

mod utils;

mod assets;
pub use assets::*;

mod init;
pub use init::*;

pub use mosaic_theme::{
    Length, StyleMap, StyleValue, ThemeDefinition, ThemeError, style,
};

pub mod prelude {
    pub use crate::{
        components::{Button, ButtonGroup, Icon, IconButton, Spinner},
        context::GroupConfig,
        extensions::{GroupAware, Themed},
        render::{ComponentHandle, MountedTree, RenderCx, RenderNode, RenderOnce},
        theme::{Orientation, SpinnerPlacement, ThemingOptions},
        Length, StyleMap, style,
    };
}
