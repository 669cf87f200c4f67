use mosaic_ui::{
    MosaicAssets, MosaicIconKind, assets,
    prelude::*,
    theme::{DuplicatePolicy, RegistryConfig, Theme, registry},
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mosaic_ui=debug")),
        )
        .init();

    registry::configure(RegistryConfig {
        duplicate_policy: DuplicatePolicy::Warn,
    });

    // Load the bundled themes through the asset providers instead of `init`.
    let assets = assets![MosaicAssets];
    for path in assets.list("themes/")? {
        let theme = Theme::from_asset(&MosaicAssets, &path)?;
        registry::register_theme(&theme);
    }

    let save = ComponentHandle::new();
    let mut cx = RenderCx::new();
    let tree = cx.mount(
        ButtonGroup::new()
            .size("sm")
            .color_scheme("teal")
            .is_attached(true)
            .child(
                Button::new()
                    .text("Save")
                    .left_icon(Icon::new(MosaicIconKind::Checkmark))
                    .handle(&save),
            )
            .child(IconButton::new(Icon::new(MosaicIconKind::ArrowDown), "More options"))
            .child(
                Button::new()
                    .text("Publish")
                    .is_loading(true)
                    .loading_text("Publishing")
                    .variant("outline"),
            ),
    );

    if let Some(root) = tree.root() {
        println!("{}", serde_json::to_string_pretty(root)?);

        for animation in root.collect_animations() {
            println!("{}", animation.keyframes.css());
            println!("animation: {}", animation.shorthand());
        }
    }

    if let Some(node) = tree.node(&save) {
        tracing::info!(id = ?node.id, text = %node.text_content(), "save button rendered");
    }

    tree.unmount();
    tracing::info!(mounted = save.is_mounted(), "tree unmounted");

    Ok(())
}
