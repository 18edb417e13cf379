//! Plugin window handlers.
//!
//! A window handler owns the platform-specific side of rendering and input for one embedded
//! plugin object. The factory's
//! [`create_window`](crate::factory::PluginFactory::create_window) method builds one from the
//! [`WindowContext`] the host binding layer supplies; its default implementation dispatches to
//! the handler types in this module.
//!
//! Handlers are not [`Send`]: like all windowing state, they stay on the thread the host created
//! them on.

use crate::error::FactoryError;
use firewisp_common::geometry::{Rect, WindowFlags};
use raw_window_handle::RawWindowHandle;

pub use firewisp_common::window::*;

#[cfg(target_os = "macos")]
mod mac;
#[cfg(windows)]
mod win;
#[cfg(all(unix, not(target_os = "macos")))]
mod x11;

#[cfg(target_os = "macos")]
pub use mac::{MacDrawingModel, MacEventModel, PluginWindowMac};
#[cfg(windows)]
pub use win::{PluginWindowWin, PluginWindowlessWin};
#[cfg(all(unix, not(target_os = "macos")))]
pub use x11::PluginWindowX11;

/// The windowing capability interface every created handler satisfies.
///
/// The host binding layer drives these methods in response to browser events; everything else a
/// concrete handler can do (drawing, input translation) is platform business the framework does
/// not constrain.
pub trait PluginWindow {
    /// The behavior flags this handler was created with.
    fn flags(&self) -> WindowFlags;

    /// The current bounds of the plugin's rendering area, in the host's coordinate space.
    fn bounds(&self) -> Rect;

    /// Called by the host binding layer when the browser moves or resizes the embedded object.
    fn set_bounds(&mut self, bounds: Rect);

    /// Marks the rendering area as needing a repaint.
    ///
    /// The host binding layer picks the request up through the handler's platform surface on its
    /// next pass.
    fn invalidate(&mut self);

    /// The native handle of the window this handler draws into, if it owns one.
    ///
    /// Windowless handlers return [`None`].
    #[inline]
    fn raw_window_handle(&self) -> Option<RawWindowHandle> {
        None
    }
}

/// Builds the framework's default handler for the given context.
///
/// This is what [`create_window`](crate::factory::PluginFactory::create_window) does unless a
/// factory overrides it.
pub(crate) fn create_default_window(
    context: WindowContext,
) -> Result<Box<dyn PluginWindow>, FactoryError> {
    match context {
        #[cfg(windows)]
        WindowContext::Windowed(context) => Ok(Box::new(PluginWindowWin::new(context))),
        #[cfg(windows)]
        WindowContext::Windowless(context) => Ok(Box::new(PluginWindowlessWin::new(context))),

        #[cfg(target_os = "macos")]
        WindowContext::CarbonQuickDraw(context) => {
            Ok(Box::new(PluginWindowMac::carbon_quickdraw(context)))
        }
        #[cfg(target_os = "macos")]
        WindowContext::CarbonCoreGraphics(context) => {
            Ok(Box::new(PluginWindowMac::carbon_coregraphics(context)))
        }
        #[cfg(target_os = "macos")]
        WindowContext::CocoaCoreGraphics(context) => {
            Ok(Box::new(PluginWindowMac::cocoa_coregraphics(context)))
        }
        #[cfg(target_os = "macos")]
        WindowContext::CocoaCoreAnimation(context) => {
            Ok(Box::new(PluginWindowMac::cocoa_coreanimation(context, false)))
        }
        #[cfg(target_os = "macos")]
        WindowContext::CocoaInvalidatingCoreAnimation(context) => {
            Ok(Box::new(PluginWindowMac::cocoa_coreanimation(context, true)))
        }

        #[cfg(all(unix, not(target_os = "macos")))]
        WindowContext::X11(context) => Ok(Box::new(PluginWindowX11::new(context))),
    }
}
