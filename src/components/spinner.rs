use std::time::Duration;

use mosaic_theme::{Length, parse_duration, style};

use crate::{
    animation::{self, Animation, Easing, Iterations},
    extensions::{ThemeProps, Themed},
    render::{RenderCx, RenderNode, RenderOnce},
};

const DEFAULT_LABEL: &str = "Loading...";
const DEFAULT_THICKNESS: Length = Length::Px(2.);
const DEFAULT_SPEED: Duration = Duration::from_millis(450);

/// A spinning ring indicating that something is loading.
pub struct Spinner {
    label: String,
    thickness: String,
    speed: String,
    empty_color: String,
    props: ThemeProps,
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            label: DEFAULT_LABEL.into(),
            thickness: DEFAULT_THICKNESS.to_string(),
            speed: "0.45s".into(),
            empty_color: "transparent".into(),
            props: ThemeProps::default(),
        }
    }

    /// Text announced to screen readers. Empty hides the announcement.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Ring width, e.g. `"4px"`.
    pub fn thickness(mut self, thickness: impl Into<String>) -> Self {
        self.thickness = thickness.into();
        self
    }

    /// Duration of one turn, e.g. `"0.2s"` or `"650ms"`.
    pub fn speed(mut self, speed: impl Into<String>) -> Self {
        self.speed = speed.into();
        self
    }

    /// Color of the unfilled part of the ring.
    pub fn empty_color(mut self, color: impl Into<String>) -> Self {
        self.empty_color = color.into();
        self
    }

    /// Color of the ring. Shorthand for the `color` style property.
    pub fn color(self, color: impl Into<String>) -> Self {
        self.style_prop("color", color.into())
    }

    fn parsed_thickness(&self) -> Length {
        self.thickness.parse().unwrap_or_else(|error| {
            tracing::warn!(%error, thickness = %self.thickness, "invalid spinner thickness, using default");
            DEFAULT_THICKNESS
        })
    }

    fn parsed_speed(&self) -> Duration {
        parse_duration(&self.speed).unwrap_or_else(|error| {
            tracing::warn!(%error, speed = %self.speed, "invalid spinner speed, using default");
            DEFAULT_SPEED
        })
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Themed for Spinner {
    const THEME_KEY: &'static str = "Spinner";

    fn theme_props(&self) -> &ThemeProps {
        &self.props
    }

    fn theme_props_mut(&mut self) -> &mut ThemeProps {
        &mut self.props
    }
}

impl RenderOnce for Spinner {
    fn render(self, cx: &mut RenderCx) -> RenderNode {
        let animation = Animation::new(animation::spin(), self.parsed_speed())
            .easing(Easing::Linear)
            .iterations(Iterations::Infinite);

        let intrinsic = style! {
            "display" => "inline-block",
            "borderColor" => "currentColor",
            "borderStyle" => "solid",
            "borderRadius" => "99999px",
            "borderWidth" => self.parsed_thickness(),
            "borderBottomColor" => self.empty_color.as_str(),
            "borderLeftColor" => self.empty_color.as_str(),
            "animation" => animation.shorthand(),
        };
        let style = self.themed_style(cx, &self.props.options, intrinsic);

        let mut node = cx
            .node("div")
            .class("mosaic-spinner")
            .style(style)
            .animation(animation);

        if !self.label.is_empty() {
            let label = cx.node("span").sr_only().text(self.label.as_str());
            node = node.child(label);
        }

        self.props.apply_to(node)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::theme::{StyleRegistry, Theme};
    use mosaic_theme::{StyleValue, ThemeDefinition};
    use pretty_assertions::assert_eq;

    fn cx_with(registry: StyleRegistry) -> RenderCx {
        RenderCx::with_registry(Arc::new(registry))
    }

    fn unthemed() -> RenderCx {
        cx_with(StyleRegistry::new())
    }

    #[test]
    fn test_defaults() {
        let node = unthemed().render(Spinner::new());

        assert_eq!(
            node.style,
            style! {
                "display" => "inline-block",
                "borderColor" => "currentColor",
                "borderStyle" => "solid",
                "borderRadius" => "99999px",
                "borderWidth" => "2px",
                "borderBottomColor" => "transparent",
                "borderLeftColor" => "transparent",
                "animation" => "spin 0.45s linear infinite",
            }
        );

        let animation = node.animation.as_ref().unwrap();
        assert_eq!(animation.name(), "spin");
        assert_eq!(animation.duration, Duration::from_millis(450));
        assert_eq!(animation.iterations, Iterations::Infinite);
    }

    #[test]
    fn test_label_is_screen_reader_only() {
        let node = unthemed().render(Spinner::new());
        let label = &node.children[0];

        assert!(label.a11y.sr_only);
        assert_eq!(label.text.as_deref(), Some("Loading..."));
    }

    #[test]
    fn test_empty_label_renders_no_child() {
        let node = unthemed().render(Spinner::new().label(""));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_custom_props() {
        let node = unthemed().render(
            Spinner::new()
                .thickness("4px")
                .speed("200ms")
                .empty_color("gray.200")
                .color("blue.500"),
        );

        assert_eq!(node.style.get("borderWidth"), Some(&StyleValue::from("4px")));
        assert_eq!(node.style.get("borderLeftColor"), Some(&StyleValue::from("gray.200")));
        assert_eq!(node.style.get("color"), Some(&StyleValue::from("blue.500")));
        assert_eq!(
            node.style.get("animation"),
            Some(&StyleValue::from("spin 0.2s linear infinite"))
        );
    }

    #[test]
    fn test_invalid_props_fall_back() {
        let node = unthemed().render(Spinner::new().thickness("thick").speed("fast"));

        assert_eq!(node.style.get("borderWidth"), Some(&StyleValue::from("2px")));
        assert_eq!(
            node.animation.as_ref().map(|animation| animation.duration),
            Some(DEFAULT_SPEED)
        );
    }

    #[test]
    fn test_non_finite_thickness_falls_back() {
        let node = unthemed().render(Spinner::new().thickness("NaNpx"));
        assert_eq!(node.style.get("borderWidth"), Some(&StyleValue::from("2px")));
    }

    #[test]
    fn test_theme_overrides_intrinsic_and_local_overrides_theme() {
        let mut registry = StyleRegistry::new();
        registry.register(
            "Spinner",
            ThemeDefinition::new().base_style(style! {
                "borderStyle" => "dashed",
                "width" => "1rem",
            }),
        );

        let node = cx_with(registry).render(Spinner::new().style_prop("width", "3rem"));

        assert_eq!(node.style.get("borderStyle"), Some(&StyleValue::from("dashed")));
        assert_eq!(node.style.get("width"), Some(&StyleValue::from("3rem")));
    }

    #[test]
    fn test_builtin_sizes() {
        let mut registry = StyleRegistry::new();
        registry.register_theme(Theme::builtin());

        let node = cx_with(registry).render(Spinner::new().size("xl"));
        let xl = &Theme::builtin().definition("Spinner").unwrap().sizes["xl"];

        for (property, value) in xl {
            assert_eq!(node.style.get(property), Some(value));
        }
    }
}
