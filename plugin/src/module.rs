//! Process-wide plugin module state.
//!
//! A [`PluginModule`] ties a user factory to the bookkeeping the framework keeps for it: the
//! active-plugin count and the metadata accessors. It is an ordinary value — embedders and tests
//! construct as many as they like — but each process has at most one *global* module, installed
//! either explicitly through [`PluginModule::install`] or lazily through the
//! [`firewisp_export_factory!`](crate::firewisp_export_factory) macro.

use crate::error::FactoryError;
use crate::factory::PluginFactory;
use crate::lifecycle::LifecycleTracker;
use crate::plugin::PluginHandle;
use std::sync::{Arc, OnceLock};

static GLOBAL_MODULE: OnceLock<PluginModule> = OnceLock::new();

/// One plugin factory together with the process-wide state the framework keeps for it.
pub struct PluginModule {
    factory: Arc<dyn PluginFactory>,
    lifecycle: Arc<LifecycleTracker>,
}

impl PluginModule {
    /// Wraps the given factory into a fresh module with an active-plugin count of zero.
    pub fn new(factory: Arc<dyn PluginFactory>) -> Self {
        let lifecycle = Arc::new(LifecycleTracker::new(factory.clone()));

        Self { factory, lifecycle }
    }

    /// Installs the given factory as this process's global module.
    ///
    /// # Errors
    ///
    /// Fails with [`FactoryError::AlreadyInstalled`] if a global module exists already; the
    /// previously installed module stays in place.
    pub fn install(factory: Arc<dyn PluginFactory>) -> Result<&'static PluginModule, FactoryError> {
        let mut fresh = false;
        let module = GLOBAL_MODULE.get_or_init(|| {
            fresh = true;
            PluginModule::new(factory)
        });

        if fresh {
            tracing::debug!(
                framework = %firewisp_common::version::FrameworkVersion::CURRENT,
                name = module.plugin_name(),
                "installed global plugin factory"
            );
            Ok(module)
        } else {
            Err(FactoryError::AlreadyInstalled)
        }
    }

    /// The module installed for this process, if any.
    ///
    /// The returned reference is stable for the process lifetime: every call observes the same
    /// instance.
    #[inline]
    pub fn global() -> Option<&'static PluginModule> {
        GLOBAL_MODULE.get()
    }

    /// The user factory this module wraps.
    #[inline]
    pub fn factory(&self) -> &Arc<dyn PluginFactory> {
        &self.factory
    }

    /// The number of plugin instances created through this module that are still alive.
    #[inline]
    pub fn active_plugin_count(&self) -> usize {
        self.lifecycle.active_count()
    }

    /// Creates one plugin instance for a browser-embedded object.
    ///
    /// On success the active-plugin count advances, firing the factory's
    /// [`global_plugin_initialize`](PluginFactory::global_plugin_initialize) hook when this is
    /// the first live instance. The count drops again when the last clone of the returned
    /// handle is dropped.
    ///
    /// # Errors
    ///
    /// Forwards the factory's construction failure; in that case the active count is untouched
    /// and no hook fires.
    pub fn create_plugin(&self, content_type: &str) -> Result<PluginHandle, FactoryError> {
        let core = self.factory.create_plugin(content_type)?;
        let active = self.lifecycle.acquire();

        tracing::debug!(
            content_type,
            active = self.lifecycle.active_count(),
            "created plugin instance"
        );

        Ok(PluginHandle::new(core, active))
    }

    /// The configured plugin name, or an empty string when unset.
    #[inline]
    pub fn plugin_name(&self) -> &str {
        self.factory.descriptor().name()
    }

    /// The name registered for `content_type`, falling back to the primary name.
    pub fn plugin_name_for(&self, content_type: &str) -> &str {
        let descriptor = self.factory.descriptor();
        descriptor
            .name_for(content_type)
            .unwrap_or_else(|| descriptor.name())
    }

    /// The configured plugin description, or an empty string when unset.
    #[inline]
    pub fn plugin_description(&self) -> &str {
        self.factory.descriptor().description()
    }

    /// The description registered for `content_type`, falling back to the primary description.
    pub fn plugin_description_for(&self, content_type: &str) -> &str {
        let descriptor = self.factory.descriptor();
        descriptor
            .description_for(content_type)
            .unwrap_or_else(|| descriptor.description())
    }
}

/// Defines the canonical process-wide factory accessor for a plugin binary.
///
/// Expands to a `plugin_factory_module()` function that constructs the factory on first use —
/// guarded so concurrent first calls are safe — and returns the same
/// [`PluginModule`](crate::module::PluginModule) on every call.
///
/// The argument is a path to a nullary constructor for the factory type.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use firewisp_plugin::prelude::*;
///
/// struct MyPlugin;
/// impl PluginCore for MyPlugin {}
///
/// #[derive(Default)]
/// struct MyPluginFactory;
///
/// impl PluginFactory for MyPluginFactory {
///     fn create_plugin(&self, _content_type: &str) -> Result<Arc<dyn PluginCore>, FactoryError> {
///         Ok(Arc::new(MyPlugin))
///     }
/// }
///
/// firewisp_export_factory!(MyPluginFactory::default);
///
/// assert!(std::ptr::eq(plugin_factory_module(), plugin_factory_module()));
/// ```
#[macro_export]
macro_rules! firewisp_export_factory {
    ($factory:path) => {
        /// The process-wide factory accessor generated by `firewisp_export_factory!`.
        pub fn plugin_factory_module() -> &'static $crate::module::PluginModule {
            static MODULE: ::std::sync::OnceLock<$crate::module::PluginModule> =
                ::std::sync::OnceLock::new();

            MODULE.get_or_init(|| {
                $crate::module::PluginModule::new(::std::sync::Arc::new($factory()))
            })
        }
    };
}
