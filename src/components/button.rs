use mosaic_theme::{Length, StyleMap, StyleValue, style};

use crate::{
    components::Spinner,
    extensions::{GroupAware, ThemeProps, Themed},
    render::{AnyComponent, RenderCx, RenderNode, RenderOnce},
    theme::SpinnerPlacement,
};

/// A clickable button styled through the theme's `Button` definition.
///
/// Inside a [`ButtonGroup`](crate::components::ButtonGroup) it takes the
/// group's size, variant, color scheme and disabled state unless set
/// explicitly.
pub struct Button {
    props: ThemeProps,
    label: Option<String>,
    aria_label: Option<String>,
    children: Vec<AnyComponent>,
    left_icon: Option<AnyComponent>,
    right_icon: Option<AnyComponent>,
    icon_spacing: Length,
    is_loading: bool,
    loading_text: Option<String>,
    spinner: Option<AnyComponent>,
    spinner_placement: SpinnerPlacement,
    is_active: bool,
    is_disabled: Option<bool>,
    button_type: String,
}

impl Button {
    pub fn new() -> Self {
        Self {
            props: ThemeProps::default(),
            label: None,
            aria_label: None,
            children: Vec::new(),
            left_icon: None,
            right_icon: None,
            icon_spacing: Length::rem(0.5),
            is_loading: false,
            loading_text: None,
            spinner: None,
            spinner_placement: SpinnerPlacement::default(),
            is_active: false,
            is_disabled: None,
            button_type: "button".into(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.label = Some(text.into());
        self
    }

    pub fn child(mut self, child: impl Into<AnyComponent>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn left_icon(mut self, icon: impl Into<AnyComponent>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    pub fn right_icon(mut self, icon: impl Into<AnyComponent>) -> Self {
        self.right_icon = Some(icon.into());
        self
    }

    /// Space between an icon and the label. Defaults to `0.5rem`.
    pub fn icon_spacing(mut self, spacing: Length) -> Self {
        self.icon_spacing = spacing;
        self
    }

    pub fn is_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Label shown next to the spinner while loading. Without it the
    /// content keeps its size but is hidden.
    pub fn loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = Some(text.into());
        self
    }

    /// Replaces the default loading spinner.
    pub fn spinner(mut self, spinner: impl Into<AnyComponent>) -> Self {
        self.spinner = Some(spinner.into());
        self
    }

    pub fn spinner_placement(mut self, placement: SpinnerPlacement) -> Self {
        self.spinner_placement = placement;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Overrides the disabled state inherited from an enclosing group.
    pub fn is_disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = Some(is_disabled);
        self
    }

    /// The `type` attribute. Defaults to `"button"`.
    pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
        self.button_type = button_type.into();
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    fn intrinsic_style() -> StyleMap {
        style! {
            "display" => "inline-flex",
            "appearance" => "none",
            "alignItems" => "center",
            "justifyContent" => "center",
            "userSelect" => "none",
            "position" => "relative",
            "whiteSpace" => "nowrap",
            "verticalAlign" => "middle",
            "outline" => "none",
        }
    }

    /// Raises the focused button above its attached neighbours, keeping any
    /// focus styling the theme already has.
    fn group_focus(theme: &StyleMap) -> StyleValue {
        let focus = match theme.get("_focus").and_then(StyleValue::as_map) {
            Some(focus) => focus.clone(),
            None => StyleMap::new(),
        };
        focus.with("zIndex", 1).into()
    }

    fn render_content(
        cx: &mut RenderCx,
        label: Option<String>,
        children: Vec<AnyComponent>,
        left_icon: Option<AnyComponent>,
        right_icon: Option<AnyComponent>,
        icon_spacing: Length,
    ) -> Vec<RenderNode> {
        let mut content = Vec::new();

        if let Some(icon) = left_icon {
            content.push(render_icon(cx, icon, "marginEnd", icon_spacing));
        }
        if let Some(label) = label {
            content.push(cx.text(label));
        }
        for child in children {
            content.push(child.render(cx));
        }
        if let Some(icon) = right_icon {
            content.push(render_icon(cx, icon, "marginStart", icon_spacing));
        }

        content
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

fn render_icon(cx: &mut RenderCx, icon: AnyComponent, margin: &str, spacing: Length) -> RenderNode {
    let icon = icon.render(cx);
    cx.node("span")
        .class("mosaic-button__icon")
        .style(style! {
            "display" => "inline-flex",
            "alignSelf" => "center",
            "flexShrink" => 0,
            margin => spacing,
        })
        .attr("focusable", "false")
        .aria_hidden()
        .child(icon)
}

fn render_spinner(
    cx: &mut RenderCx,
    spinner: Option<AnyComponent>,
    placement: SpinnerPlacement,
    has_loading_text: bool,
    spacing: Length,
) -> RenderNode {
    let spinner = match spinner {
        Some(spinner) => spinner.render(cx),
        None => cx.render(
            Spinner::new()
                .style_prop("color", "currentColor")
                .style_prop("width", "1em")
                .style_prop("height", "1em"),
        ),
    };

    let margin = if has_loading_text { spacing } else { Length::ZERO };
    cx.node("div")
        .class("mosaic-button__spinner")
        .style(style! {
            "display" => "flex",
            "alignItems" => "center",
            "position" => if has_loading_text { "relative" } else { "absolute" },
            placement.margin_property() => margin,
            "fontSize" => "1em",
            "lineHeight" => "normal",
        })
        .child(spinner)
}

impl Themed for Button {
    const THEME_KEY: &'static str = "Button";

    fn theme_props(&self) -> &ThemeProps {
        &self.props
    }

    fn theme_props_mut(&mut self) -> &mut ThemeProps {
        &mut self.props
    }
}

impl GroupAware for Button {}

impl RenderOnce for Button {
    fn render(self, cx: &mut RenderCx) -> RenderNode {
        let group = cx.group().cloned();
        let options = self.effective_options(group.as_ref());
        let is_disabled = self.is_disabled_in(self.is_disabled, group.as_ref());
        let effective = cx.registry().effective_options(Self::THEME_KEY, &options);

        let theme = self.theme_layer(cx, &options);
        let mut style = Self::intrinsic_style().merged(&theme);
        if group.is_some() {
            style.insert("_focus", Self::group_focus(&theme));
        }
        style.merge(&self.props.style);

        let Button {
            props,
            label,
            aria_label,
            children,
            left_icon,
            right_icon,
            icon_spacing,
            is_loading,
            loading_text,
            spinner,
            spinner_placement,
            is_active,
            button_type,
            ..
        } = self;

        let mut nodes = Vec::new();
        if is_loading {
            let has_loading_text = loading_text.is_some();
            let spinner = render_spinner(cx, spinner, spinner_placement, has_loading_text, icon_spacing);
            let mut trailing_spinner = None;
            match spinner_placement {
                SpinnerPlacement::Start => nodes.push(spinner.class("mosaic-button__spinner--start")),
                SpinnerPlacement::End => {
                    trailing_spinner = Some(spinner.class("mosaic-button__spinner--end"))
                }
            }

            match loading_text {
                Some(text) => nodes.push(cx.text(text)),
                None => {
                    let content = Self::render_content(cx, label, children, left_icon, right_icon, icon_spacing);
                    let hidden = cx.node("span").style(style! { "opacity" => 0 }).children(content);
                    nodes.push(hidden);
                }
            }

            nodes.extend(trailing_spinner);
        } else {
            nodes.extend(Self::render_content(cx, label, children, left_icon, right_icon, icon_spacing));
        }

        let mut node = cx
            .node("button")
            .class("mosaic-button")
            .style(style)
            .attr("type", button_type)
            .children(nodes);

        if is_disabled || is_loading {
            node = node.attr("disabled", "");
        }
        if is_active {
            node = node.attr("data-active", "");
        }
        if is_loading {
            node = node.attr("data-loading", "");
        }
        if let Some(variant) = effective.variant {
            node = node.attr("data-variant", variant);
        }
        if let Some(size) = effective.size {
            node = node.attr("data-size", size);
        }
        if let Some(label) = aria_label {
            node = node.attr("aria-label", label.as_str()).label(label);
        }

        props.apply_to(node)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        components::Icon,
        context::GroupConfig,
        render::ComponentHandle,
        theme::{StyleRegistry, Theme, ThemingOptions},
    };
    use mosaic_theme::ThemeDefinition;
    use pretty_assertions::assert_eq;

    fn builtin() -> RenderCx {
        let mut registry = StyleRegistry::new();
        registry.register_theme(Theme::builtin());
        RenderCx::with_registry(Arc::new(registry))
    }

    fn sized() -> RenderCx {
        let mut registry = StyleRegistry::new();
        registry.register(
            "Button",
            ThemeDefinition::new()
                .base_style(style! { "fontWeight" => "semibold" })
                .size("sm", style! { "h" => "2rem" })
                .size("md", style! { "h" => "2.5rem" })
                .size("lg", style! { "h" => "3rem" })
                .variant("solid", style! { "bg" => "{colorScheme}.500" })
                .variant("ghost", style! { "bg" => "transparent" })
                .default_size("md")
                .default_variant("solid")
                .default_color_scheme("gray"),
        );
        RenderCx::with_registry(Arc::new(registry))
    }

    fn attr<'a>(node: &'a RenderNode, name: &str) -> Option<&'a str> {
        node.attrs.get(name).map(String::as_str)
    }

    #[test]
    fn test_basic_button() {
        let node = sized().render(Button::new().text("Save"));

        assert_eq!(node.tag, "button");
        assert_eq!(node.text_content(), "Save");
        assert_eq!(attr(&node, "type"), Some("button"));
        assert_eq!(attr(&node, "data-variant"), Some("solid"));
        assert_eq!(attr(&node, "data-size"), Some("md"));
        assert_eq!(node.style.get("h"), Some(&StyleValue::from("2.5rem")));
        assert_eq!(node.style.get("bg"), Some(&StyleValue::from("gray.500")));
        assert_eq!(node.style.get("display"), Some(&StyleValue::from("inline-flex")));
        assert!(node.style.get("_focus").is_none());
    }

    #[test]
    fn test_size_precedence() {
        let mut cx = sized();
        let mut scope = cx.publish(GroupConfig {
            options: ThemingOptions::new().with_size("lg"),
            ..Default::default()
        });

        let explicit = scope.render(Button::new().size("sm"));
        let from_group = scope.render(Button::new());

        assert_eq!(explicit.style.get("h"), Some(&StyleValue::from("2rem")));
        assert_eq!(from_group.style.get("h"), Some(&StyleValue::from("3rem")));
    }

    #[test]
    fn test_local_style_beats_theme() {
        let node = sized().render(Button::new().style_prop("bg", "hotpink"));
        assert_eq!(node.style.get("bg"), Some(&StyleValue::from("hotpink")));
    }

    #[test]
    fn test_group_raises_focus() {
        let mut cx = sized();
        let mut scope = cx.publish(GroupConfig::default());
        let node = scope.render(Button::new());

        assert_eq!(node.style.get("_focus"), Some(&StyleValue::from(style! { "zIndex" => 1 })));
    }

    #[test]
    fn test_group_focus_keeps_theme_focus() {
        let theme = style! { "_focus" => style! { "boxShadow" => "outline" } };
        assert_eq!(
            Button::group_focus(&theme),
            StyleValue::from(style! { "boxShadow" => "outline", "zIndex" => 1 })
        );
    }

    #[test]
    fn test_disabled_from_group_and_override() {
        let mut cx = sized();
        let mut scope = cx.publish(GroupConfig {
            is_disabled: true,
            ..Default::default()
        });

        let inherited = scope.render(Button::new());
        let overridden = scope.render(Button::new().is_disabled(false));

        assert_eq!(attr(&inherited, "disabled"), Some(""));
        assert_eq!(attr(&overridden, "disabled"), None);
    }

    #[test]
    fn test_icons_wrap_label() {
        let node = builtin().render(
            Button::new()
                .text("Next")
                .left_icon(Icon::new("icons/checkmark.svg"))
                .right_icon(Icon::new("icons/arrow_down.svg"))
                .icon_spacing(Length::px(6.)),
        );

        let icons: Vec<_> = node
            .children
            .iter()
            .filter(|child| child.has_class("mosaic-button__icon"))
            .collect();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].style.get("marginEnd"), Some(&StyleValue::from("6px")));
        assert_eq!(icons[1].style.get("marginStart"), Some(&StyleValue::from("6px")));
        assert!(icons[0].a11y.hidden);
        assert_eq!(node.children[1].text.as_deref(), Some("Next"));
    }

    #[test]
    fn test_loading_without_text_hides_content() {
        let node = builtin().render(Button::new().text("Submit").is_loading(true));

        assert_eq!(attr(&node, "disabled"), Some(""));
        assert_eq!(attr(&node, "data-loading"), Some(""));

        let spinner = &node.children[0];
        assert!(spinner.has_class("mosaic-button__spinner"));
        assert!(spinner.has_class("mosaic-button__spinner--start"));
        assert_eq!(spinner.style.get("position"), Some(&StyleValue::from("absolute")));
        assert!(spinner.find_by_class("mosaic-spinner").is_some());

        let hidden = &node.children[1];
        assert_eq!(hidden.style.get("opacity"), Some(&StyleValue::from(0)));
        assert_eq!(hidden.text_content(), "Submit");
    }

    #[test]
    fn test_loading_text_replaces_label() {
        let node = builtin().render(
            Button::new()
                .text("Submit")
                .is_loading(true)
                .loading_text("Saving")
                .spinner_placement(SpinnerPlacement::End),
        );

        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].text.as_deref(), Some("Saving"));

        let spinner = &node.children[1];
        assert!(spinner.has_class("mosaic-button__spinner--end"));
        assert_eq!(spinner.style.get("marginStart"), Some(&StyleValue::from("0.5rem")));
        assert_eq!(spinner.style.get("position"), Some(&StyleValue::from("relative")));
    }

    #[test]
    fn test_custom_spinner() {
        let mut cx = builtin();
        let custom = cx.text("…");
        let node = cx.render(Button::new().is_loading(true).spinner(custom));

        assert_eq!(node.children[0].text_content(), "…");
        assert!(node.find_by_class("mosaic-spinner").is_none());
    }

    #[test]
    fn test_active_and_type_attrs() {
        let node = sized().render(Button::new().is_active(true).button_type("submit"));

        assert_eq!(attr(&node, "data-active"), Some(""));
        assert_eq!(attr(&node, "type"), Some("submit"));
    }

    #[test]
    fn test_handle_bound_to_root() {
        let handle = ComponentHandle::new();
        let mut cx = sized();
        let tree = cx.mount(Button::new().text("Go").handle(&handle));

        assert_eq!(tree.node(&handle).map(|node| node.tag.as_str()), Some("button"));
        drop(tree);
        assert!(!handle.is_mounted());
    }
}
