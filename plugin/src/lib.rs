#![doc = include_str!("../README.md")]

pub mod descriptor;
pub mod factory;
pub mod lifecycle;
pub mod logging;
pub mod module;
pub mod plugin;
pub mod window;

#[cfg(windows)]
pub mod scripting;

mod error;
pub use error::FactoryError;

pub use firewisp_common::geometry;
pub use firewisp_common::log;
pub use firewisp_common::version;

/// A helpful prelude re-exporting everything needed to implement a plugin factory.
pub mod prelude {
    pub use crate::descriptor::{ContentTypeEntry, PluginDescriptor, StaticPluginDescriptor};
    pub use crate::error::FactoryError;
    pub use crate::factory::PluginFactory;
    pub use crate::firewisp_export_factory;
    pub use crate::geometry::{Rect, WindowFlags};
    pub use crate::log::{LogLevel, LogMethod};
    pub use crate::module::PluginModule;
    pub use crate::plugin::{PluginCore, PluginHandle};
    pub use crate::window::{PluginWindow, WindowContext};
}
