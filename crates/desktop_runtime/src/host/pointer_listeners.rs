//! Scoped document-level pointer listeners for drags and resizes.
//!
//! A guard owns the move/up/cancel listeners for one interaction and detaches them when dropped.
//! [`PointerListenerRegistry`] keys live guards by [`PointerListenerOwner`], so releasing an owner
//! or tearing the shell down drops exactly the right set.

use std::collections::HashMap;

use leptos::{ev, leptos_dom::helpers::WindowListenerHandle, window_event_listener};

use crate::model::{PointerListenerOwner, PointerPosition};

pub struct PointerListenerGuard {
    handles: Vec<WindowListenerHandle>,
}

impl PointerListenerGuard {
    /// Attaches move and up listeners. `pointercancel` is routed to `on_up`.
    pub fn attach(
        on_move: impl Fn(PointerPosition) + 'static,
        on_up: impl Fn() + Clone + 'static,
    ) -> Self {
        let on_cancel = on_up.clone();
        let handles = vec![
            window_event_listener(ev::pointermove, move |event| {
                on_move(PointerPosition::new(event.client_x(), event.client_y()));
            }),
            window_event_listener(ev::pointerup, move |_| on_up()),
            window_event_listener(ev::pointercancel, move |_| on_cancel()),
        ];
        Self { handles }
    }
}

impl Drop for PointerListenerGuard {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

/// Live listener guards keyed by owner. Dropping an entry detaches its listeners.
pub struct PointerListenerRegistry<G = PointerListenerGuard> {
    guards: HashMap<PointerListenerOwner, G>,
}

impl<G> Default for PointerListenerRegistry<G> {
    fn default() -> Self {
        Self {
            guards: HashMap::new(),
        }
    }
}

impl<G> PointerListenerRegistry<G> {
    /// Stores `guard` for `owner`, dropping any guard the owner already held.
    pub fn acquire(&mut self, owner: PointerListenerOwner, guard: G) {
        self.guards.insert(owner, guard);
    }

    /// Drops the owner's guard. Returns `false` when it held none.
    pub fn release(&mut self, owner: PointerListenerOwner) -> bool {
        self.guards.remove(&owner).is_some()
    }

    pub fn release_all(&mut self) {
        self.guards.clear();
    }

    pub fn is_held(&self, owner: PointerListenerOwner) -> bool {
        self.guards.contains_key(&owner)
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowId;

    struct CountingGuard(Rc<Cell<u32>>);

    impl Drop for CountingGuard {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn release_drops_only_the_owner_guard() {
        let dropped = Rc::new(Cell::new(0));
        let mut registry = PointerListenerRegistry::default();
        let a = PointerListenerOwner::Window(WindowId(1));
        let b = PointerListenerOwner::Window(WindowId(2));
        registry.acquire(a, CountingGuard(dropped.clone()));
        registry.acquire(b, CountingGuard(dropped.clone()));

        assert!(registry.release(a));
        assert_eq!(dropped.get(), 1);
        assert!(!registry.is_held(a));
        assert!(registry.is_held(b));
        assert!(!registry.release(a));
    }

    #[test]
    fn reacquiring_replaces_previous_guard() {
        let dropped = Rc::new(Cell::new(0));
        let mut registry = PointerListenerRegistry::default();
        registry.acquire(
            PointerListenerOwner::DesktopIcons,
            CountingGuard(dropped.clone()),
        );
        registry.acquire(
            PointerListenerOwner::DesktopIcons,
            CountingGuard(dropped.clone()),
        );
        assert_eq!(dropped.get(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn release_all_drops_every_guard() {
        let dropped = Rc::new(Cell::new(0));
        let mut registry = PointerListenerRegistry::default();
        registry.acquire(
            PointerListenerOwner::DesktopIcons,
            CountingGuard(dropped.clone()),
        );
        registry.acquire(
            PointerListenerOwner::Window(WindowId(4)),
            CountingGuard(dropped.clone()),
        );

        registry.release_all();
        assert_eq!(dropped.get(), 2);
        assert!(registry.is_empty());
    }
}
