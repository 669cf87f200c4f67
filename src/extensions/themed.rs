use indexmap::IndexMap;
use mosaic_theme::{StyleMap, StyleValue};
use smallvec::SmallVec;

use crate::{
    context::GroupConfig,
    render::{ComponentHandle, RenderCx, RenderNode},
    theme::{ResolvedStyle, ThemingOptions},
};

/// Props every themed component accepts.
#[derive(Debug, Clone, Default)]
pub struct ThemeProps {
    pub options: ThemingOptions,
    /// Local style override, merged over everything the theme provides.
    pub style: StyleMap,
    /// Pass-through attributes for the root node.
    pub attrs: IndexMap<String, String>,
    pub classes: SmallVec<[String; 2]>,
    pub handle: Option<ComponentHandle>,
}

impl ThemeProps {
    /// Applies classes, attributes and the handle to a component's root
    /// node. Pass-through attributes override the component's own.
    pub fn apply_to(&self, mut node: RenderNode) -> RenderNode {
        node.classes.extend(self.classes.iter().cloned());
        for (name, value) in &self.attrs {
            node.attrs.insert(name.clone(), value.clone());
        }
        match &self.handle {
            Some(handle) => node.bind(handle),
            None => node,
        }
    }
}

/// A component styled through a theme definition.
pub trait Themed: Sized {
    /// Component name the theme definition is registered under.
    const THEME_KEY: &'static str;

    fn theme_props(&self) -> &ThemeProps;

    fn theme_props_mut(&mut self) -> &mut ThemeProps;

    fn variant(mut self, variant: impl Into<String>) -> Self {
        self.theme_props_mut().options.variant = Some(variant.into());
        self
    }

    fn size(mut self, size: impl Into<String>) -> Self {
        self.theme_props_mut().options.size = Some(size.into());
        self
    }

    fn color_scheme(mut self, color_scheme: impl Into<String>) -> Self {
        self.theme_props_mut().options.color_scheme = Some(color_scheme.into());
        self
    }

    /// Merges `style` into the local override.
    fn style(mut self, style: StyleMap) -> Self {
        self.theme_props_mut().style.merge(&style);
        self
    }

    /// Sets one property of the local override.
    fn style_prop(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.theme_props_mut().style.insert(property, value);
        self
    }

    fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.theme_props_mut()
            .attrs
            .insert(name.into(), value.into());
        self
    }

    fn class(mut self, class: impl Into<String>) -> Self {
        self.theme_props_mut().classes.push(class.into());
        self
    }

    /// Binds `handle` to the component's root when it renders.
    fn handle(mut self, handle: &ComponentHandle) -> Self {
        self.theme_props_mut().handle = Some(handle.clone());
        self
    }

    /// The resolved theme layers alone, without the local override.
    fn theme_layer(&self, cx: &RenderCx, options: &ThemingOptions) -> ResolvedStyle {
        cx.resolve(Self::THEME_KEY, options, &StyleMap::new())
    }

    /// Final style for the component: `intrinsic`, then the resolved theme,
    /// then the local override.
    fn themed_style(&self, cx: &RenderCx, options: &ThemingOptions, intrinsic: StyleMap) -> StyleMap {
        intrinsic
            .merged(&self.theme_layer(cx, options))
            .merged(&self.theme_props().style)
    }
}

/// A component that picks up shared options from an enclosing group.
pub trait GroupAware: Themed {
    /// Options with explicit values first, then the group's. Definition
    /// defaults fill the rest during resolution.
    fn effective_options(&self, group: Option<&GroupConfig>) -> ThemingOptions {
        let explicit = &self.theme_props().options;
        match group {
            Some(group) => explicit.or(&group.options),
            None => explicit.clone(),
        }
    }

    fn is_disabled_in(&self, explicit: Option<bool>, group: Option<&GroupConfig>) -> bool {
        explicit.unwrap_or_else(|| group.is_some_and(|group| group.is_disabled))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::theme::StyleRegistry;
    use mosaic_theme::{ThemeDefinition, style};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Badge {
        props: ThemeProps,
    }

    impl Themed for Badge {
        const THEME_KEY: &'static str = "Badge";

        fn theme_props(&self) -> &ThemeProps {
            &self.props
        }

        fn theme_props_mut(&mut self) -> &mut ThemeProps {
            &mut self.props
        }
    }

    impl GroupAware for Badge {}

    #[test]
    fn test_builder_methods_fill_props() {
        let badge = Badge::default()
            .variant("ghost")
            .size("sm")
            .style(style! { "a" => 1 })
            .style_prop("b", 2)
            .attr("data-x", "1")
            .class("badge");

        let props = badge.theme_props();
        assert_eq!(props.options, ThemingOptions::new().with_variant("ghost").with_size("sm"));
        assert_eq!(props.style, style! { "a" => 1, "b" => 2 });
        assert_eq!(props.attrs.get("data-x").map(String::as_str), Some("1"));
        assert_eq!(props.classes.as_slice(), ["badge".to_string()]);
    }

    #[test]
    fn test_themed_style_layers() {
        let mut registry = StyleRegistry::new();
        registry.register(
            "Badge",
            ThemeDefinition::new().base_style(style! { "b" => "theme", "c" => "theme" }),
        );
        let cx = RenderCx::with_registry(Arc::new(registry));

        let badge = Badge::default().style_prop("c", "local");
        let style = badge.themed_style(
            &cx,
            &ThemingOptions::new(),
            style! { "a" => "intrinsic", "b" => "intrinsic" },
        );

        assert_eq!(style, style! { "a" => "intrinsic", "b" => "theme", "c" => "local" });
    }

    #[test]
    fn test_effective_options_prefer_explicit() {
        let group = GroupConfig {
            options: ThemingOptions::new().with_size("lg").with_variant("outline"),
            ..Default::default()
        };
        let badge = Badge::default().size("sm");

        assert_eq!(
            badge.effective_options(Some(&group)),
            ThemingOptions::new().with_size("sm").with_variant("outline")
        );
        assert_eq!(badge.effective_options(None), ThemingOptions::new().with_size("sm"));
    }

    #[test]
    fn test_disabled_falls_back_to_group() {
        let group = GroupConfig {
            is_disabled: true,
            ..Default::default()
        };
        let badge = Badge::default();

        assert!(badge.is_disabled_in(None, Some(&group)));
        assert!(!badge.is_disabled_in(Some(false), Some(&group)));
        assert!(!badge.is_disabled_in(None, None));
    }

    #[test]
    fn test_apply_to_binds_handle_and_attrs() {
        let mut cx = RenderCx::with_registry(Arc::new(StyleRegistry::new()));
        let handle = ComponentHandle::new();
        let badge = Badge::default().attr("type", "submit").class("x").handle(&handle);

        let node = badge
            .theme_props()
            .apply_to(cx.node("button").attr("type", "button"));

        assert_eq!(node.attrs.get("type").map(String::as_str), Some("submit"));
        assert!(node.has_class("x"));
        assert_eq!(handle.get(), None);
        assert!(node.handles().any(|(id, bound)| id == node.id && bound.ptr_eq(&handle)));
    }
}
