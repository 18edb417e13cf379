//! The plugin instance capability set and its ownership handle.
//!
//! The framework consumes [`PluginCore`] rather than defining much of it: the full surface a
//! plugin object exposes (DOM parameters, events, scripting members) belongs to the host binding
//! layer. Only the lifecycle hooks that layer invokes on every plugin are declared here, and all
//! of them carry no-op defaults.

use crate::lifecycle::ActiveGuard;
use std::ops::Deref;
use std::sync::Arc;

/// The capability set a user plugin object must implement.
///
/// One of these is created per browser-embedded object, through
/// [`PluginFactory::create_plugin`](crate::factory::PluginFactory::create_plugin). Both hooks
/// default to doing nothing.
pub trait PluginCore: Send + Sync {
    /// Called by the host binding layer once the browser has finished setting this instance up
    /// and it is safe to interact with the page.
    #[inline]
    fn on_plugin_ready(&self) {}

    /// Called by the host binding layer right before this instance is torn down.
    #[inline]
    fn shutdown(&self) {}
}

/// A shared-ownership handle to one live plugin instance.
///
/// Both the host binding layer and any internal callback graph may hold clones of this handle;
/// the instance counts as active until the last clone is dropped. At that point the owning
/// module's active-plugin count decrements, firing
/// [`global_plugin_deinitialize`](crate::factory::PluginFactory::global_plugin_deinitialize) if
/// it was the last instance alive.
///
/// The handle dereferences to the [`PluginCore`] it owns.
#[derive(Clone)]
pub struct PluginHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    core: Arc<dyn PluginCore>,
    // Dropped after `core`: the instance must be gone before the count transition fires.
    _active: ActiveGuard,
}

impl PluginHandle {
    pub(crate) fn new(core: Arc<dyn PluginCore>, active: ActiveGuard) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                core,
                _active: active,
            }),
        }
    }

    /// A reference to the owned plugin object, for callers that need to keep their own
    /// `Arc` to it.
    ///
    /// Note that such an `Arc` does not keep the instance *active*: the active-plugin count
    /// follows this handle and its clones, not the plugin object itself.
    #[inline]
    pub fn core(&self) -> &Arc<dyn PluginCore> {
        &self.inner.core
    }
}

impl Deref for PluginHandle {
    type Target = dyn PluginCore;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.inner.core
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use static_assertions::assert_impl_all;

    // Handles cross thread boundaries inside the host binding layer.
    assert_impl_all!(PluginHandle: Send, Sync, Clone);
}
