//! Render output: node trees, the render context and component handles.

mod node;
pub use node::*;

mod cx;
pub use cx::*;

mod handle;
pub use handle::*;

mod component;
pub use component::*;

#[cfg(feature = "gpui")]
mod gpui;
#[cfg(feature = "gpui")]
pub use self::gpui::into_element;
