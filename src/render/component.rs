use crate::render::{RenderCx, RenderNode};

/// A component consumed by rendering it once.
pub trait RenderOnce: 'static {
    fn render(self, cx: &mut RenderCx) -> RenderNode;
}

/// A type-erased component, used for children.
pub struct AnyComponent(Box<dyn FnOnce(&mut RenderCx) -> RenderNode>);

impl AnyComponent {
    pub fn new(component: impl RenderOnce) -> Self {
        Self(Box::new(move |cx| component.render(cx)))
    }

    pub fn render(self, cx: &mut RenderCx) -> RenderNode {
        (self.0)(cx)
    }
}

impl<C: RenderOnce> From<C> for AnyComponent {
    fn from(component: C) -> Self {
        AnyComponent::new(component)
    }
}

impl RenderOnce for String {
    fn render(self, cx: &mut RenderCx) -> RenderNode {
        cx.text(self)
    }
}

impl RenderOnce for &'static str {
    fn render(self, cx: &mut RenderCx) -> RenderNode {
        cx.text(self)
    }
}

impl RenderOnce for RenderNode {
    fn render(self, _cx: &mut RenderCx) -> RenderNode {
        self
    }
}
