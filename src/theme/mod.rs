//! Theme registry and style resolution.
//!
//! Component themes are plain [`ThemeDefinition`](mosaic_theme::ThemeDefinition)
//! data, usually loaded from a [`Theme`] bundle and registered once at
//! start-up. Components resolve their final style through
//! [`StyleRegistry::resolve`] on every render.

mod schema;
pub use schema::*;

pub mod registry;
pub use registry::{DuplicatePolicy, RegistryConfig, StyleRegistry};

mod resolver;
pub use resolver::*;

mod kinds;
pub use kinds::*;
