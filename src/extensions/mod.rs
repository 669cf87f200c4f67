/// Theming props and the traits components share to consume them.
pub mod themed;
pub use themed::{GroupAware, ThemeProps, Themed};
