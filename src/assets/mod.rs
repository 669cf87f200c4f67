mod assets;
pub use assets::*;
use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod mosaic_assets;
        pub use mosaic_assets::*;
    }
);
