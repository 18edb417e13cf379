//! COM-style scripting bridge extension point (Windows only).
//!
//! On Windows the browser scripts a plugin through a COM dispatch object. The object model
//! itself lives in the host binding layer; the factory only decides *which* bridge object gets
//! built for each plugin instance, through
//! [`create_scripting_bridge`](crate::factory::PluginFactory::create_scripting_bridge).

use crate::plugin::PluginCore;
use std::sync::Arc;

/// The capability interface of the scripting bridge object created for one plugin instance.
///
/// The host binding layer wraps this into the actual COM dispatch surface.
pub trait ScriptingBridge {
    /// The plugin instance this bridge scripts against.
    fn plugin(&self) -> &Arc<dyn PluginCore>;
}

/// The framework-default bridge: holds the instance and exposes no scriptable members.
pub struct DefaultScriptingBridge {
    plugin: Arc<dyn PluginCore>,
}

impl DefaultScriptingBridge {
    pub fn new(plugin: Arc<dyn PluginCore>) -> Self {
        Self { plugin }
    }
}

impl ScriptingBridge for DefaultScriptingBridge {
    #[inline]
    fn plugin(&self) -> &Arc<dyn PluginCore> {
        &self.plugin
    }
}
