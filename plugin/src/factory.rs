//! The plugin factory trait.
//!
//! Every plugin built on this framework implements [`PluginFactory`] exactly once, and overrides
//! at least [`create_plugin`](PluginFactory::create_plugin). Everything else carries a default:
//! the global lifecycle hooks do nothing, [`descriptor`](PluginFactory::descriptor) reports no
//! metadata, window creation dispatches to the framework's default handler type for the
//! requested context, and the logging configuration is an empty sink list at
//! [`LogLevel::Info`].
//!
//! The factory's configuration must be immutable once constructed: the framework and the host
//! binding layer query it concurrently without further synchronization. Creation methods may be
//! invoked from different host-managed threads for different embedded objects, so any mutable
//! state a custom factory keeps across creations must be synchronized by its author.

use crate::descriptor::{PluginDescriptor, EMPTY_DESCRIPTOR};
use crate::error::FactoryError;
use crate::plugin::PluginCore;
use crate::window::{PluginWindow, WindowContext};
use firewisp_common::log::{LogLevel, LogMethod};
use std::sync::Arc;

#[cfg(windows)]
use crate::scripting::{DefaultScriptingBridge, ScriptingBridge};

/// A plugin factory implementation.
///
/// See the [module documentation](self) for the contract every method follows.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use firewisp_plugin::prelude::*;
///
/// pub struct MyPlugin;
///
/// impl PluginCore for MyPlugin {}
///
/// pub struct MyPluginFactory {
///     descriptor: StaticPluginDescriptor,
/// }
///
/// impl PluginFactory for MyPluginFactory {
///     fn create_plugin(&self, _content_type: &str) -> Result<Arc<dyn PluginCore>, FactoryError> {
///         Ok(Arc::new(MyPlugin))
///     }
///
///     fn descriptor(&self) -> &dyn PluginDescriptor {
///         &self.descriptor
///     }
///
///     fn global_plugin_initialize(&self) {
///         // Set up static resources shared by all MyPlugin instances.
///     }
///
///     fn global_plugin_deinitialize(&self) {
///         // Tear them down again.
///     }
/// }
/// ```
pub trait PluginFactory: Send + Sync {
    /// Creates the user plugin object for one browser-embedded instance.
    ///
    /// `content_type` is the MIME-type-like identifier the embedding object tag requested. It is
    /// advisory for now: it is passed through for plugins that register several types, but the
    /// host binding layer does not yet guarantee it disambiguates plugin variants.
    ///
    /// # Errors
    ///
    /// Construction either succeeds with a fully built object or fails with an error — a
    /// partially initialized plugin must never escape. On failure the surrounding
    /// [`PluginModule`](crate::module::PluginModule) treats the call as "no plugin created" and
    /// leaves the active-plugin count untouched.
    fn create_plugin(&self, content_type: &str) -> Result<Arc<dyn PluginCore>, FactoryError>;

    /// Returns this plugin's configured metadata.
    ///
    /// The default reports every field as unset, which reads as empty name and description.
    #[inline]
    fn descriptor(&self) -> &dyn PluginDescriptor {
        &EMPTY_DESCRIPTOR
    }

    /// Global plugin initialization.
    ///
    /// Called when the active plugin count goes from 0 to 1, after the instance that caused the
    /// transition was constructed. There is no guarantee this is called only once over the
    /// process lifetime — the population can empty out and grow again — but it is never called
    /// twice without an intervening [`global_plugin_deinitialize`](PluginFactory::global_plugin_deinitialize).
    ///
    /// Implementations must tolerate repeated initialize/deinitialize cycles, and must not
    /// create or destroy plugin instances from inside the hook.
    #[inline]
    fn global_plugin_initialize(&self) {}

    /// Global plugin deinitialization.
    ///
    /// Called when the last live instance is destroyed, taking the active plugin count from 1
    /// to 0. Like its counterpart, it can run several times per process, in strict alternation
    /// with [`global_plugin_initialize`](PluginFactory::global_plugin_initialize).
    #[inline]
    fn global_plugin_deinitialize(&self) {}

    /// Creates the window handler for one embedded object.
    ///
    /// The default implementation dispatches on the context variant and builds the framework's
    /// default handler type for it; only factories substituting a custom window-handling
    /// strategy need to override this. The context is input-only and need not be retained
    /// beyond this call.
    ///
    /// The returned handler is owned by the caller and lives for the embedded object's visible
    /// lifetime.
    ///
    /// # Errors
    ///
    /// Same conventions as [`create_plugin`](PluginFactory::create_plugin): a handler is either
    /// fully built or not created at all.
    fn create_window(&self, context: WindowContext) -> Result<Box<dyn PluginWindow>, FactoryError> {
        crate::window::create_default_window(context)
    }

    /// Appends the log sinks this plugin wants its output delivered to.
    ///
    /// Queried once by the logging subsystem during [`logging::initialize`](crate::logging::initialize).
    /// The default leaves the list empty, which keeps the plugin silent.
    #[inline]
    fn logging_methods(&self, _out: &mut Vec<LogMethod>) {}

    /// The minimum severity of log records this plugin wants to see.
    ///
    /// Queried once by the logging subsystem. Defaults to [`LogLevel::Info`].
    #[inline]
    fn log_level(&self) -> LogLevel {
        LogLevel::DEFAULT
    }

    /// Creates the COM-style scripting bridge for one plugin instance.
    ///
    /// The framework default holds the instance and exposes no scriptable members, which is the
    /// correct behavior for plugins without a scripting API.
    ///
    /// # Errors
    ///
    /// Same conventions as [`create_plugin`](PluginFactory::create_plugin).
    #[cfg(windows)]
    fn create_scripting_bridge(
        &self,
        plugin: &Arc<dyn PluginCore>,
    ) -> Result<Box<dyn ScriptingBridge>, FactoryError> {
        Ok(Box::new(DefaultScriptingBridge::new(plugin.clone())))
    }

    /// Updates the Windows registry entries for this plugin on install or uninstall.
    ///
    /// The default does nothing, leaving registration entirely to the installer.
    #[cfg(windows)]
    #[inline]
    fn update_registry(&self, _install: bool) -> Result<(), FactoryError> {
        Ok(())
    }
}
