use super::PluginWindow;
use firewisp_common::geometry::{Rect, WindowFlags};
use firewisp_common::window::WindowContextX11;
use raw_window_handle::{RawWindowHandle, XlibWindowHandle};
use std::ffi::c_void;
use std::os::raw::c_ulong;

/// The framework's default window handler for X11 targets.
///
/// Wraps the browser-provided X11 window and tracks the bounds and repaint requests the host
/// binding layer reports. Drawing itself happens against the X display the context names.
pub struct PluginWindowX11 {
    context: WindowContextX11,
    bounds: Rect,
    needs_repaint: bool,
}

impl PluginWindowX11 {
    pub fn new(context: WindowContextX11) -> Self {
        Self {
            context,
            bounds: Rect::default(),
            needs_repaint: false,
        }
    }

    /// The XID of the browser-provided window.
    #[inline]
    pub fn window(&self) -> c_ulong {
        self.context.window
    }

    /// The X display connection the window lives on.
    #[inline]
    pub fn display(&self) -> *mut c_void {
        self.context.display
    }

    /// Whether a repaint was requested since the last call, clearing the request.
    pub fn take_repaint_request(&mut self) -> bool {
        core::mem::take(&mut self.needs_repaint)
    }
}

impl PluginWindow for PluginWindowX11 {
    #[inline]
    fn flags(&self) -> WindowFlags {
        WindowFlags::empty()
    }

    #[inline]
    fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    #[inline]
    fn invalidate(&mut self) {
        self.needs_repaint = true;
    }

    fn raw_window_handle(&self) -> Option<RawWindowHandle> {
        let mut handle = XlibWindowHandle::empty();
        handle.window = self.context.window;
        Some(RawWindowHandle::Xlib(handle))
    }
}
