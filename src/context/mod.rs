//! Scoped configuration a container publishes for its descendants.
//!
//! The channel is a stack owned by [`RenderCx`](crate::RenderCx). A container
//! pushes a value with [`RenderCx::publish`](crate::RenderCx::publish) and the
//! returned [`ScopeGuard`] pops it again when dropped, so a value is visible
//! exactly while the container's subtree renders.

mod stack;
pub use stack::*;

mod group;
pub use group::*;
