//! Theme data model shared by the mosaic component library.
//!
//! This crate owns the plain data side of theming: style values and maps,
//! per-component [`ThemeDefinition`]s as they are stored in theme JSON, and
//! the unit parsers used by component props.

mod style;
pub use style::*;

mod definition;
pub use definition::*;

mod deserializers;
pub use deserializers::*;

mod error;
pub use error::ThemeError;

#[cfg(feature = "gpui")]
mod gpui;
