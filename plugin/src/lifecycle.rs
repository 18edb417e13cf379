//! Active-plugin accounting.
//!
//! The framework tracks how many plugin instances are alive. The 0→1 and 1→0 transitions of
//! that count are exactly what drives the factory's global lifecycle hooks, and this module
//! guarantees their strict alternation even when instances are created and dropped concurrently
//! from different host-managed threads: the transition check and the hook invocation happen
//! under a single lock.
//!
//! Because the lock is held while a hook runs, hook implementations must not create or destroy
//! plugin instances themselves.

use crate::factory::PluginFactory;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Counts live plugin instances and fires the factory's global lifecycle hooks on population
/// transitions.
pub struct LifecycleTracker {
    factory: Arc<dyn PluginFactory>,
    active: Mutex<usize>,
}

impl LifecycleTracker {
    pub(crate) fn new(factory: Arc<dyn PluginFactory>) -> Self {
        Self {
            factory,
            active: Mutex::new(0),
        }
    }

    /// The number of plugin instances currently alive.
    pub fn active_count(&self) -> usize {
        *self.lock()
    }

    /// Registers one newly created instance, firing
    /// [`global_plugin_initialize`](PluginFactory::global_plugin_initialize) if it is the first
    /// one alive. The count drops again when the returned guard does.
    pub(crate) fn acquire(self: &Arc<Self>) -> ActiveGuard {
        let mut active = self.lock();
        *active += 1;

        if *active == 1 {
            let factory = &self.factory;
            if catch_unwind(AssertUnwindSafe(|| factory.global_plugin_initialize())).is_err() {
                tracing::error!("global_plugin_initialize panicked");
            }
        }

        ActiveGuard {
            tracker: self.clone(),
        }
    }

    fn release(&self) {
        let mut active = self.lock();
        *active -= 1;

        if *active == 0 {
            let factory = &self.factory;
            if catch_unwind(AssertUnwindSafe(|| factory.global_plugin_deinitialize())).is_err() {
                tracing::error!("global_plugin_deinitialize panicked");
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, usize> {
        // A panicking hook must not wedge the counter for the rest of the process.
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps one plugin instance counted as active for as long as it lives.
pub(crate) struct ActiveGuard {
    tracker: Arc<LifecycleTracker>,
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.tracker.release();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::FactoryError;
    use crate::plugin::PluginCore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Inert;
    impl PluginCore for Inert {}

    #[derive(Default)]
    struct CountingFactory {
        initialized: AtomicUsize,
        deinitialized: AtomicUsize,
    }

    impl PluginFactory for CountingFactory {
        fn create_plugin(
            &self,
            _content_type: &str,
        ) -> Result<Arc<dyn PluginCore>, FactoryError> {
            Ok(Arc::new(Inert))
        }

        fn global_plugin_initialize(&self) {
            self.initialized.fetch_add(1, Ordering::SeqCst);
        }

        fn global_plugin_deinitialize(&self) {
            self.deinitialized.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn hooks_fire_only_on_population_transitions() {
        let factory = Arc::new(CountingFactory::default());
        let tracker = Arc::new(LifecycleTracker::new(factory.clone()));

        let first = tracker.acquire();
        let second = tracker.acquire();
        assert_eq!(tracker.active_count(), 2);
        assert_eq!(factory.initialized.load(Ordering::SeqCst), 1);

        drop(first);
        assert_eq!(factory.deinitialized.load(Ordering::SeqCst), 0);

        drop(second);
        assert_eq!(tracker.active_count(), 0);
        assert_eq!(factory.deinitialized.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn count_recovers_from_a_panicking_hook() {
        struct PanickyFactory;

        impl PluginFactory for PanickyFactory {
            fn create_plugin(
                &self,
                _content_type: &str,
            ) -> Result<Arc<dyn PluginCore>, FactoryError> {
                Ok(Arc::new(Inert))
            }

            fn global_plugin_initialize(&self) {
                panic!("broken hook");
            }
        }

        let tracker = Arc::new(LifecycleTracker::new(Arc::new(PanickyFactory)));

        let guard = tracker.acquire();
        assert_eq!(tracker.active_count(), 1);
        drop(guard);
        assert_eq!(tracker.active_count(), 0);
    }
}
