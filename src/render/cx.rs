use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use mosaic_theme::StyleMap;

use crate::{
    context::ContextStack,
    render::{AnyComponent, MountedTree, NodeId, RenderNode, TEXT_TAG},
    theme::{ResolvedStyle, StyleRegistry, ThemingOptions, registry},
};

/// Node ids are unique across every render pass in the process, so a handle
/// bound by one pass is never mistaken for a node of another.
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// State threaded through one render pass.
///
/// Holds the registry snapshot the pass resolves against, the stack of
/// values published by containers.
pub struct RenderCx {
    registry: Arc<StyleRegistry>,
    pub(crate) stack: ContextStack,
}

impl RenderCx {
    /// Renders against a snapshot of the global registry.
    pub fn new() -> Self {
        Self::with_registry(registry::snapshot())
    }

    pub fn with_registry(registry: Arc<StyleRegistry>) -> Self {
        Self {
            registry,
            stack: ContextStack::default(),
        }
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn resolve(
        &self,
        component: &str,
        options: &ThemingOptions,
        local: &StyleMap,
    ) -> ResolvedStyle {
        self.registry.resolve(component, options, local)
    }

    pub fn next_node_id(&mut self) -> NodeId {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// A fresh element node.
    pub fn node(&mut self, tag: impl Into<String>) -> RenderNode {
        let id = self.next_node_id();
        RenderNode::new(id, tag)
    }

    /// A text node.
    pub fn text(&mut self, text: impl Into<String>) -> RenderNode {
        self.node(TEXT_TAG).text(text)
    }

    pub fn render(&mut self, component: impl Into<AnyComponent>) -> RenderNode {
        component.into().render(self)
    }

    /// Renders `component` and mounts the result.
    pub fn mount(&mut self, component: impl Into<AnyComponent>) -> MountedTree {
        MountedTree::mount(self.render(component))
    }
}

impl Default for RenderCx {
    fn default() -> Self {
        Self::new()
    }
}
