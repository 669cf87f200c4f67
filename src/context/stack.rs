use std::{
    any::Any,
    ops::{Deref, DerefMut},
};

use smallvec::SmallVec;

use crate::RenderCx;

/// Typed values published by the containers currently rendering, innermost
/// last.
#[derive(Default)]
pub(crate) struct ContextStack {
    frames: SmallVec<[Box<dyn Any>; 4]>,
}

impl ContextStack {
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn push<T: 'static>(&mut self, value: T) {
        self.frames.push(Box::new(value));
    }

    pub(crate) fn truncate(&mut self, depth: usize) {
        self.frames.truncate(depth);
    }

    /// The innermost value of type `T`.
    pub(crate) fn read<T: 'static>(&self) -> Option<&T> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.downcast_ref::<T>())
    }
}

/// Keeps a published value visible until dropped.
///
/// The guard derefs to the [`RenderCx`] it was published on, so the subtree
/// renders through it. Dropping it restores the stack to its depth before
/// the publish, on every exit path including early returns and unwinding.
#[must_use = "the published value is withdrawn when the guard is dropped"]
pub struct ScopeGuard<'a> {
    cx: &'a mut RenderCx,
    depth: usize,
}

impl Deref for ScopeGuard<'_> {
    type Target = RenderCx;

    fn deref(&self) -> &Self::Target {
        &*self.cx
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.cx
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.cx.stack.truncate(self.depth);
    }
}

impl RenderCx {
    /// Publishes `value` to everything rendered through the returned guard.
    ///
    /// An inner publish of the same type shadows the outer one until its
    /// guard drops.
    pub fn publish<T: 'static>(&mut self, value: T) -> ScopeGuard<'_> {
        let depth = self.stack.depth();
        self.stack.push(value);
        ScopeGuard { cx: self, depth }
    }

    /// Runs `f` with `value` published.
    pub fn scoped<T: 'static, R>(&mut self, value: T, f: impl FnOnce(&mut RenderCx) -> R) -> R {
        let mut guard = self.publish(value);
        f(&mut *guard)
    }

    /// The nearest enclosing published value of type `T`.
    pub fn read<T: 'static>(&self) -> Option<&T> {
        self.stack.read::<T>()
    }

    /// Number of values currently published.
    pub fn context_depth(&self) -> usize {
        self.stack.depth()
    }
}

#[cfg(test)]
mod tests {
    use std::{panic, sync::Arc};

    use super::*;
    use crate::theme::StyleRegistry;
    use proptest::prelude::*;

    fn cx() -> RenderCx {
        RenderCx::with_registry(Arc::new(StyleRegistry::new()))
    }

    #[derive(Debug, PartialEq)]
    struct Marker(u32);

    #[test]
    fn test_read_without_publish_is_none() {
        assert_eq!(cx().read::<Marker>(), None);
    }

    #[test]
    fn test_published_value_visible_inside_scope_only() {
        let mut cx = cx();
        {
            let guard = cx.publish(Marker(1));
            assert_eq!(guard.read::<Marker>(), Some(&Marker(1)));
        }
        assert_eq!(cx.read::<Marker>(), None);
        assert_eq!(cx.context_depth(), 0);
    }

    #[test]
    fn test_inner_publish_shadows_and_restores() {
        let mut cx = cx();
        let mut outer = cx.publish(Marker(1));
        {
            let inner = outer.publish(Marker(2));
            assert_eq!(inner.read::<Marker>(), Some(&Marker(2)));
        }
        assert_eq!(outer.read::<Marker>(), Some(&Marker(1)));
    }

    #[test]
    fn test_values_of_other_types_are_skipped() {
        let mut cx = cx();
        let mut outer = cx.publish(Marker(7));
        let inner = outer.publish("unrelated");

        assert_eq!(inner.read::<Marker>(), Some(&Marker(7)));
        assert_eq!(inner.read::<&str>(), Some(&"unrelated"));
    }

    #[test]
    fn test_early_return_pops() {
        fn render_until_missing(cx: &mut RenderCx, value: Option<u32>) -> Option<u32> {
            let guard = cx.publish(Marker(3));
            let value = value?;
            Some(value + guard.read::<Marker>()?.0)
        }

        let mut cx = cx();
        assert_eq!(render_until_missing(&mut cx, None), None);
        assert_eq!(cx.context_depth(), 0);
        assert_eq!(render_until_missing(&mut cx, Some(1)), Some(4));
        assert_eq!(cx.context_depth(), 0);
    }

    #[test]
    fn test_unwinding_pops() {
        let mut cx = cx();
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            cx.scoped(Marker(1), |_| panic!("render failed"));
        }));

        assert!(result.is_err());
        assert_eq!(cx.context_depth(), 0);
    }

    #[test]
    fn test_scoped_returns_closure_value() {
        let mut cx = cx();
        let seen = cx.scoped(Marker(9), |cx| cx.read::<Marker>().map(|marker| marker.0));

        assert_eq!(seen, Some(9));
        assert_eq!(cx.read::<Marker>(), None);
    }

    fn nest(cx: &mut RenderCx, levels: &[u32], seen: &mut Vec<(u32, Option<u32>)>) {
        let Some((&level, rest)) = levels.split_first() else {
            return;
        };

        let before = cx.read::<Marker>().map(|marker| marker.0);
        {
            let mut guard = cx.publish(Marker(level));
            nest(&mut guard, rest, seen);
            seen.push((level, guard.read::<Marker>().map(|marker| marker.0)));
        }
        assert_eq!(cx.read::<Marker>().map(|marker| marker.0), before);
    }

    proptest! {
        #[test]
        fn test_nested_scopes_restore_exactly(levels in prop::collection::vec(any::<u32>(), 0..12)) {
            let mut cx = cx();
            let mut seen = Vec::new();
            nest(&mut cx, &levels, &mut seen);

            prop_assert_eq!(cx.context_depth(), 0);
            for (published, observed) in seen {
                prop_assert_eq!(Some(published), observed);
            }
        }
    }
}
