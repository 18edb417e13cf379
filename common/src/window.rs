//! Platform window-context value types.
//!
//! When the browser wants a plugin rendered, the host binding layer hands the factory's window
//! creation method one of these context values. They are input-only: the factory reads them
//! during the creation call and must not retain them, unless the returned handler documents
//! otherwise.
//!
//! Which [`WindowContext`] variants exist is decided at compile time by the target platform, so
//! a window request for a platform that was not compiled into the binary cannot be expressed.

use raw_window_handle::RawWindowHandle;

#[cfg(any(windows, target_os = "macos"))]
use std::ffi::c_void;
#[cfg(all(unix, not(target_os = "macos")))]
use std::os::raw::c_ulong;

/// Context for a windowed plugin on Windows.
#[cfg(windows)]
#[derive(Copy, Clone, Debug)]
pub struct WindowContextWin {
    /// The native handle (`HWND`) of the browser-provided child window.
    pub hwnd: *mut c_void,
}

/// Context for a windowless plugin on Windows.
#[cfg(windows)]
#[derive(Copy, Clone, Debug)]
pub struct WindowContextWindowless {
    /// The device context (`HDC`) the plugin draws into.
    pub hdc: *mut c_void,
}

/// Context for a Carbon/QuickDraw plugin on macOS.
#[cfg(target_os = "macos")]
#[derive(Copy, Clone, Debug)]
pub struct WindowContextQuickDraw {
    /// The drawable port (`CGrafPtr`).
    pub port: *mut c_void,
    /// The browser window containing the port (`WindowRef`).
    pub window: *mut c_void,
}

/// Context for a CoreGraphics plugin on macOS, under either the Carbon or Cocoa event model.
#[cfg(target_os = "macos")]
#[derive(Copy, Clone, Debug)]
pub struct WindowContextCoreGraphics {
    /// The graphics context to draw into (`CGContextRef`).
    pub context: *mut c_void,
    /// The browser window the context belongs to (`WindowRef` or `NSWindow*`).
    pub window: *mut c_void,
}

/// Context for a CoreAnimation plugin on macOS.
#[cfg(target_os = "macos")]
#[derive(Copy, Clone, Debug)]
pub struct WindowContextCoreAnimation {
    /// The layer the plugin renders to (`CALayer*`).
    pub layer: *mut c_void,
}

/// Context for a windowed plugin on X11 targets.
#[cfg(all(unix, not(target_os = "macos")))]
#[derive(Copy, Clone, Debug)]
pub struct WindowContextX11 {
    /// The X display connection (`Display*`).
    pub display: *mut std::ffi::c_void,
    /// The XID of the browser-provided window.
    pub window: c_ulong,
}

/// The platform-specific window context handed to the factory's window creation method.
///
/// Only the current target's variants exist in a given build. The windowing mode (windowed vs.
/// windowless) and, on macOS, the event/drawing model combination are selected by the host
/// binding layer at runtime from what the browser negotiated.
#[derive(Copy, Clone, Debug)]
pub enum WindowContext {
    #[cfg(windows)]
    Windowed(WindowContextWin),
    #[cfg(windows)]
    Windowless(WindowContextWindowless),

    #[cfg(target_os = "macos")]
    CarbonQuickDraw(WindowContextQuickDraw),
    #[cfg(target_os = "macos")]
    CarbonCoreGraphics(WindowContextCoreGraphics),
    #[cfg(target_os = "macos")]
    CocoaCoreGraphics(WindowContextCoreGraphics),
    #[cfg(target_os = "macos")]
    CocoaCoreAnimation(WindowContextCoreAnimation),
    #[cfg(target_os = "macos")]
    CocoaInvalidatingCoreAnimation(WindowContextCoreAnimation),

    #[cfg(all(unix, not(target_os = "macos")))]
    X11(WindowContextX11),
}

impl WindowContext {
    /// Creates a windowed context from a [`RawWindowHandle`].
    ///
    /// This returns [`None`] if the given handle belongs to a windowing API this build does not
    /// support, or to one that has no windowed equivalent here.
    pub fn from_raw_window_handle(handle: RawWindowHandle) -> Option<Self> {
        match handle {
            #[cfg(windows)]
            RawWindowHandle::Win32(handle) => Some(WindowContext::Windowed(WindowContextWin {
                hwnd: handle.hwnd,
            })),
            #[cfg(target_os = "macos")]
            RawWindowHandle::AppKit(handle) => {
                Some(WindowContext::CocoaCoreGraphics(WindowContextCoreGraphics {
                    context: core::ptr::null_mut(),
                    window: handle.ns_view,
                }))
            }
            #[cfg(all(unix, not(target_os = "macos")))]
            RawWindowHandle::Xlib(handle) => Some(WindowContext::X11(WindowContextX11 {
                display: core::ptr::null_mut(),
                window: handle.window,
            })),
            _ => None,
        }
    }
}
