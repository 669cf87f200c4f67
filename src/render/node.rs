use indexmap::IndexMap;
use mosaic_theme::StyleMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::{animation::Animation, render::ComponentHandle};

/// Tag of plain text nodes.
pub const TEXT_TAG: &str = "#text";

/// Identifies a rendered node. Ids are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u64);

/// Accessibility information for a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct A11y {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Visually hidden but announced by screen readers.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sr_only: bool,
    /// Ignored by screen readers.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

/// Renderer-agnostic output of a component.
#[derive(Debug, Clone, Serialize)]
pub struct RenderNode {
    pub id: NodeId,
    pub tag: String,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub classes: SmallVec<[String; 2]>,
    #[serde(skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<String, String>,
    #[serde(skip_serializing_if = "is_default_a11y")]
    pub a11y: A11y,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
    #[serde(skip)]
    pub(crate) handle: Option<ComponentHandle>,
}

fn is_default_a11y(a11y: &A11y) -> bool {
    *a11y == A11y::default()
}

impl RenderNode {
    pub(crate) fn new(id: NodeId, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into(),
            classes: SmallVec::new(),
            style: StyleMap::new(),
            attrs: IndexMap::new(),
            a11y: A11y::default(),
            animation: None,
            text: None,
            children: Vec::new(),
            handle: None,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Replaces the node's style.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.a11y.label = Some(label.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.a11y.role = Some(role.into());
        self
    }

    pub fn sr_only(mut self) -> Self {
        self.a11y.sr_only = true;
        self
    }

    pub fn aria_hidden(mut self) -> Self {
        self.a11y.hidden = true;
        self
    }

    pub fn animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attaches `handle` to this node. The handle points here once the tree
    /// is mounted.
    pub fn bind(mut self, handle: &ComponentHandle) -> Self {
        self.handle = Some(handle.clone());
        self
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Depth-first, pre-order walk over this node and its descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &RenderNode> {
        let mut pending = vec![self];
        std::iter::from_fn(move || {
            let node = pending.pop()?;
            pending.extend(node.children.iter().rev());
            Some(node)
        })
    }

    pub fn find(&self, id: NodeId) -> Option<&RenderNode> {
        self.descendants().find(|node| node.id == id)
    }

    pub fn find_by_class(&self, class: &str) -> Option<&RenderNode> {
        self.descendants().find(|node| node.has_class(class))
    }

    /// All text in the subtree, concatenated in document order.
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|node| node.text.as_deref())
            .collect()
    }

    /// Every animation in the subtree, for registering keyframes up front.
    pub fn collect_animations(&self) -> Vec<&Animation> {
        self.descendants()
            .filter_map(|node| node.animation.as_ref())
            .collect()
    }

    pub(crate) fn handles(&self) -> impl Iterator<Item = (NodeId, &ComponentHandle)> {
        self.descendants()
            .filter_map(|node| node.handle.as_ref().map(|handle| (node.id, handle)))
    }
}
