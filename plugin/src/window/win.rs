use super::PluginWindow;
use firewisp_common::geometry::{Rect, WindowFlags};
use firewisp_common::window::{WindowContextWin, WindowContextWindowless};
use raw_window_handle::{RawWindowHandle, Win32WindowHandle};
use std::ffi::c_void;

/// The framework's default handler for windowed plugins on Windows.
///
/// Wraps the browser-provided child window (`HWND`).
pub struct PluginWindowWin {
    context: WindowContextWin,
    bounds: Rect,
    needs_repaint: bool,
}

impl PluginWindowWin {
    pub fn new(context: WindowContextWin) -> Self {
        Self {
            context,
            bounds: Rect::default(),
            needs_repaint: false,
        }
    }

    /// The native handle (`HWND`) of the browser-provided window.
    #[inline]
    pub fn hwnd(&self) -> *mut c_void {
        self.context.hwnd
    }

    /// Whether a repaint was requested since the last call, clearing the request.
    pub fn take_repaint_request(&mut self) -> bool {
        core::mem::take(&mut self.needs_repaint)
    }
}

impl PluginWindow for PluginWindowWin {
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
        let mut handle = Win32WindowHandle::empty();
        handle.hwnd = self.context.hwnd;
        Some(RawWindowHandle::Win32(handle))
    }
}

/// The framework's default handler for windowless plugins on Windows.
///
/// The plugin draws directly into the browser-supplied device context; there is no native window
/// to hand out.
pub struct PluginWindowlessWin {
    context: WindowContextWindowless,
    bounds: Rect,
    needs_repaint: bool,
}

impl PluginWindowlessWin {
    pub fn new(context: WindowContextWindowless) -> Self {
        Self {
            context,
            bounds: Rect::default(),
            needs_repaint: false,
        }
    }

    /// The device context (`HDC`) the plugin draws into.
    #[inline]
    pub fn device_context(&self) -> *mut c_void {
        self.context.hdc
    }

    /// Whether a repaint was requested since the last call, clearing the request.
    pub fn take_repaint_request(&mut self) -> bool {
        core::mem::take(&mut self.needs_repaint)
    }
}

impl PluginWindow for PluginWindowlessWin {
    #[inline]
    fn flags(&self) -> WindowFlags {
        WindowFlags::WINDOWLESS | WindowFlags::TRANSPARENT
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
}
