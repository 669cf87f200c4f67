use std::{cell::Cell, fmt, rc::Rc};

use crate::render::{NodeId, RenderNode};

/// A reference to a component's rendered root, shared between whoever
/// created it and the component it was passed to.
///
/// The handle is empty until a tree containing the component is mounted and
/// becomes empty again when that [`MountedTree`] is unmounted.
#[derive(Clone, Default)]
pub struct ComponentHandle(Rc<Cell<Option<NodeId>>>);

impl ComponentHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The node this handle currently points at.
    pub fn get(&self) -> Option<NodeId> {
        self.0.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.get().is_some()
    }

    /// True when both handles share the same slot.
    pub fn ptr_eq(&self, other: &ComponentHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn bind(&self, id: NodeId) {
        self.0.set(Some(id));
    }

    /// Clears the handle if it still points at `id`. A handle rebound by a
    /// later render stays valid.
    pub(crate) fn release(&self, id: NodeId) {
        if self.get() == Some(id) {
            self.0.set(None);
        }
    }
}

impl fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentHandle").field(&self.get()).finish()
    }
}

/// A rendered tree whose handles stay valid while it is mounted.
///
/// Dropping the tree unmounts it.
#[derive(Debug)]
pub struct MountedTree {
    root: Option<RenderNode>,
}

impl MountedTree {
    /// Points every handle attached inside `root` at its node.
    pub fn mount(root: RenderNode) -> Self {
        for (id, handle) in root.handles() {
            handle.bind(id);
        }
        tracing::trace!(root = ?root.id, "mounted render tree");
        Self { root: Some(root) }
    }

    pub fn root(&self) -> Option<&RenderNode> {
        self.root.as_ref()
    }

    /// The node `handle` points at, if it belongs to this tree.
    pub fn node(&self, handle: &ComponentHandle) -> Option<&RenderNode> {
        let id = handle.get()?;
        self.root()?
            .find(id)
            .filter(|node| node.handle.as_ref().is_some_and(|bound| bound.ptr_eq(handle)))
    }

    /// Invalidates every handle bound inside the tree and returns the tree.
    pub fn unmount(mut self) -> Option<RenderNode> {
        self.release();
        self.root.take()
    }

    fn release(&mut self) {
        if let Some(root) = &self.root {
            for (id, handle) in root.handles() {
                handle.release(id);
            }
            tracing::trace!(root = ?root.id, "unmounted render tree");
        }
    }
}

impl Drop for MountedTree {
    fn drop(&mut self) {
        self.release();
    }
}
