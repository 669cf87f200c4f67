use crate::theme::{DEFAULT_THEME, RegistryConfig, registry};

/// Registers the bundled theme in the global registry.
///
/// Call once at start-up, before the first render. Definitions registered
/// afterwards replace the bundled ones for their component.
pub fn init() {
    registry::register_theme(&DEFAULT_THEME);
}

/// Like [`init`], also applying `config` to the global registry first.
pub fn init_with(config: RegistryConfig) {
    registry::configure(config);
    init();
}
