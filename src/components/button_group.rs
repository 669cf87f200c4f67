use mosaic_theme::{Length, StyleMap, style};

use crate::{
    context::GroupConfig,
    extensions::{ThemeProps, Themed},
    render::{AnyComponent, RenderCx, RenderNode, RenderOnce},
    theme::Orientation,
};

/// Selector matching every child after the first.
const SPACED_CHILD: &str = "& > *:not(style) ~ *:not(style)";
const FIRST_CHILD: &str = "> *:first-of-type:not(:last-of-type)";
const MIDDLE_CHILD: &str = "> *:not(:first-of-type):not(:last-of-type)";
const LAST_CHILD: &str = "> *:not(:first-of-type):last-of-type";

/// Lays out buttons in a row or column and shares size, variant, color
/// scheme and disabled state with them.
///
/// Attached groups render their buttons as one segmented control.
pub struct ButtonGroup {
    props: ThemeProps,
    spacing: Length,
    is_attached: bool,
    orientation: Orientation,
    is_disabled: bool,
    children: Vec<AnyComponent>,
}

impl ButtonGroup {
    pub fn new() -> Self {
        Self {
            props: ThemeProps::default(),
            spacing: Length::rem(0.5),
            is_attached: false,
            orientation: Orientation::default(),
            is_disabled: false,
            children: Vec::new(),
        }
    }

    /// Gap between detached buttons. Defaults to `0.5rem`.
    pub fn spacing(mut self, spacing: Length) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn is_attached(mut self, is_attached: bool) -> Self {
        self.is_attached = is_attached;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn is_disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub fn child(mut self, child: impl Into<AnyComponent>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<C: Into<AnyComponent>>(mut self, children: impl IntoIterator<Item = C>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    fn config(&self) -> GroupConfig {
        GroupConfig {
            options: self.props.options.clone(),
            spacing: self.spacing,
            is_attached: self.is_attached,
            orientation: self.orientation,
            is_disabled: self.is_disabled,
        }
    }

    fn intrinsic_style(&self) -> StyleMap {
        let mut style = style! { "display" => "inline-flex" };
        if self.orientation == Orientation::Vertical {
            style.insert("flexDirection", self.orientation.flex_direction());
        }

        if self.is_attached {
            let leading = self.orientation.leading_radius_property();
            let trailing = self.orientation.trailing_radius_property();
            style.insert(FIRST_CHILD, style! { leading => 0 });
            style.insert(MIDDLE_CHILD, style! { "borderRadius" => 0 });
            style.insert(LAST_CHILD, style! { trailing => 0 });
        } else {
            let spacing_property = self.orientation.spacing_property();
            style.insert(SPACED_CHILD, style! { spacing_property => self.spacing });
        }

        style
    }
}

impl Default for ButtonGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Themed for ButtonGroup {
    const THEME_KEY: &'static str = "ButtonGroup";

    fn theme_props(&self) -> &ThemeProps {
        &self.props
    }

    fn theme_props_mut(&mut self) -> &mut ThemeProps {
        &mut self.props
    }
}

impl RenderOnce for ButtonGroup {
    fn render(mut self, cx: &mut RenderCx) -> RenderNode {
        let style = self.themed_style(cx, &self.props.options, self.intrinsic_style());
        let children = std::mem::take(&mut self.children);

        let rendered: Vec<RenderNode> = {
            let mut scope = cx.publish(self.config());
            children
                .into_iter()
                .map(|child| child.render(&mut scope))
                .collect()
        };

        let mut node = cx
            .node("div")
            .class("mosaic-button__group")
            .role("group")
            .style(style)
            .attr("data-orientation", self.orientation.token())
            .children(rendered);
        if self.is_attached {
            node = node.attr("data-attached", "");
        }

        self.props.apply_to(node)
    }
}
