use crate::{
    components::Button,
    extensions::{GroupAware, ThemeProps, Themed},
    render::{AnyComponent, RenderCx, RenderNode, RenderOnce},
};

/// A button whose only content is an icon.
///
/// Styled through the `Button` theme definition with no padding. The icon is
/// hidden from screen readers, so the accessible label is required.
pub struct IconButton {
    button: Button,
    icon: AnyComponent,
    is_round: bool,
}

impl IconButton {
    pub fn new(icon: impl Into<AnyComponent>, aria_label: impl Into<String>) -> Self {
        Self {
            button: Button::new().aria_label(aria_label),
            icon: icon.into(),
            is_round: false,
        }
    }

    /// Renders as a circle.
    pub fn is_round(mut self, is_round: bool) -> Self {
        self.is_round = is_round;
        self
    }

    pub fn is_loading(mut self, is_loading: bool) -> Self {
        self.button = self.button.is_loading(is_loading);
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.button = self.button.is_active(is_active);
        self
    }

    pub fn is_disabled(mut self, is_disabled: bool) -> Self {
        self.button = self.button.is_disabled(is_disabled);
        self
    }

    pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
        self.button = self.button.button_type(button_type);
        self
    }
}

impl Themed for IconButton {
    const THEME_KEY: &'static str = Button::THEME_KEY;

    fn theme_props(&self) -> &ThemeProps {
        self.button.theme_props()
    }

    fn theme_props_mut(&mut self) -> &mut ThemeProps {
        self.button.theme_props_mut()
    }
}

impl GroupAware for IconButton {}

impl RenderOnce for IconButton {
    fn render(self, cx: &mut RenderCx) -> RenderNode {
        let mut icon = self.icon.render(cx).attr("focusable", "false");
        icon.a11y.hidden = true;

        let mut button = self.button;
        let local = &mut button.theme_props_mut().style;
        local.insert_if_absent("padding", "0");
        if self.is_round {
            local.insert_if_absent("borderRadius", "full");
        }

        cx.render(button.child(icon))
    }
}
