//! Shared callback handle for caller-supplied handlers.
//!
//! ## Usage
//!
//! Store a [`Callback`] in an args struct and invoke it from controller
//! methods. Handles compare by identity so args stay cheaply comparable.

use std::sync::Arc;

/// Stable, comparable handle for an `Fn()` handler.
///
/// Cloning shares the handler, and equality is pointer identity over the
/// shared allocation, so args rebuilt from the same handle every frame never
/// look like a change.
#[derive(Clone)]
pub struct Callback {
    handler: Arc<dyn Fn() + Send + Sync>,
}

impl Callback {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback.
    pub fn call(&self) {
        (self.handler)();
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Eq for Callback {}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    #[test]
    fn test_callback_invokes_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let callback = Callback::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        callback.call();
        callback.call();

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_callback_compares_by_identity() {
        let a = Callback::new(|| {});
        let b = a.clone();
        let c = Callback::new(|| {});

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_default_callback_is_noop() {
        Callback::default().call();
    }
}
