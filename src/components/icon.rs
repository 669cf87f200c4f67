use mosaic_theme::{StyleValue, style};

use crate::{
    extensions::{ThemeProps, Themed},
    render::{RenderCx, RenderNode, RenderOnce},
};

/// An SVG icon, sized by the theme's `Icon` definition.
///
/// Icons are decorative: they are hidden from screen readers and never take
/// focus. Give the surrounding control an accessible label instead.
pub struct Icon {
    path: String,
    color: Option<String>,
    rotate: f32,
    props: ThemeProps,
}

impl Icon {
    /// Creates a new icon from an SVG asset path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            color: None,
            rotate: 0.,
            props: ThemeProps::default(),
        }
    }

    /// Sets a custom color instead of inheriting the text color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Rotates the icon clockwise by `degrees`.
    pub fn rotate(mut self, degrees: f32) -> Self {
        self.rotate = degrees;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Themed for Icon {
    const THEME_KEY: &'static str = "Icon";

    fn theme_props(&self) -> &ThemeProps {
        &self.props
    }

    fn theme_props_mut(&mut self) -> &mut ThemeProps {
        &mut self.props
    }
}

impl RenderOnce for Icon {
    fn render(self, cx: &mut RenderCx) -> RenderNode {
        let mut intrinsic = style! {
            "display" => "inline-block",
            "lineHeight" => "1em",
            "flexShrink" => 0,
            "color" => self.color.as_deref().unwrap_or("currentColor"),
            "verticalAlign" => "middle",
        };
        if self.rotate != 0. {
            intrinsic.insert("transform", StyleValue::from(format!("rotate({}deg)", self.rotate)));
        }

        let style = self.themed_style(cx, &self.props.options, intrinsic);
        let node = cx
            .node("svg")
            .class("mosaic-icon")
            .style(style)
            .attr("src", self.path.as_str())
            .attr("focusable", "false")
            .aria_hidden();

        self.props.apply_to(node)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::theme::{StyleRegistry, Theme};
    use pretty_assertions::assert_eq;

    fn cx() -> RenderCx {
        let mut registry = StyleRegistry::new();
        registry.register_theme(Theme::builtin());
        RenderCx::with_registry(Arc::new(registry))
    }

    #[test]
    fn test_icon_is_hidden_svg() {
        let node = cx().render(Icon::new("icons/close.svg"));

        assert_eq!(node.tag, "svg");
        assert_eq!(node.attrs.get("src").map(String::as_str), Some("icons/close.svg"));
        assert_eq!(node.attrs.get("focusable").map(String::as_str), Some("false"));
        assert!(node.a11y.hidden);
    }

    #[test]
    fn test_icon_size_from_theme() {
        let node = cx().render(Icon::new("icons/close.svg").size("lg"));
        let lg = &Theme::builtin().definition("Icon").unwrap().sizes["lg"];

        for (property, value) in lg {
            assert_eq!(node.style.get(property), Some(value));
        }
    }

    #[test]
    fn test_icon_color_and_rotation() {
        let node = cx().render(Icon::new("icons/arrow_down.svg").color("red").rotate(180.));

        assert_eq!(node.style.get("color"), Some(&StyleValue::from("red")));
        assert_eq!(node.style.get("transform"), Some(&StyleValue::from("rotate(180deg)")));
    }

    #[cfg(feature = "assets")]
    #[test]
    fn test_bundled_icon_kind_path() {
        use crate::assets::MosaicIconKind;

        let node = cx().render(Icon::new(MosaicIconKind::Checkmark));
        assert_eq!(node.attrs.get("src").map(String::as_str), Some("icons/checkmark.svg"));
    }
}
