use super::PluginWindow;
use firewisp_common::geometry::{Rect, WindowFlags};
use firewisp_common::window::{
    WindowContextCoreAnimation, WindowContextCoreGraphics, WindowContextQuickDraw,
};
use raw_window_handle::{AppKitWindowHandle, RawWindowHandle};
use std::ffi::c_void;

/// The event model the browser negotiated for a macOS plugin.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MacEventModel {
    Carbon,
    Cocoa,
}

/// The drawing model the browser negotiated for a macOS plugin.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MacDrawingModel {
    QuickDraw,
    CoreGraphics,
    CoreAnimation,
    /// CoreAnimation where the plugin must tell the browser when the layer changed.
    InvalidatingCoreAnimation,
}

enum MacSurface {
    QuickDraw(WindowContextQuickDraw),
    CoreGraphics(WindowContextCoreGraphics),
    CoreAnimation(WindowContextCoreAnimation),
}

/// The framework's default window handler for macOS, covering every negotiated combination of
/// event and drawing model.
pub struct PluginWindowMac {
    event_model: MacEventModel,
    drawing_model: MacDrawingModel,
    surface: MacSurface,
    bounds: Rect,
    needs_repaint: bool,
}

impl PluginWindowMac {
    pub fn carbon_quickdraw(context: WindowContextQuickDraw) -> Self {
        Self::new(
            MacEventModel::Carbon,
            MacDrawingModel::QuickDraw,
            MacSurface::QuickDraw(context),
        )
    }

    pub fn carbon_coregraphics(context: WindowContextCoreGraphics) -> Self {
        Self::new(
            MacEventModel::Carbon,
            MacDrawingModel::CoreGraphics,
            MacSurface::CoreGraphics(context),
        )
    }

    pub fn cocoa_coregraphics(context: WindowContextCoreGraphics) -> Self {
        Self::new(
            MacEventModel::Cocoa,
            MacDrawingModel::CoreGraphics,
            MacSurface::CoreGraphics(context),
        )
    }

    pub fn cocoa_coreanimation(context: WindowContextCoreAnimation, invalidating: bool) -> Self {
        let drawing_model = if invalidating {
            MacDrawingModel::InvalidatingCoreAnimation
        } else {
            MacDrawingModel::CoreAnimation
        };

        Self::new(
            MacEventModel::Cocoa,
            drawing_model,
            MacSurface::CoreAnimation(context),
        )
    }

    fn new(event_model: MacEventModel, drawing_model: MacDrawingModel, surface: MacSurface) -> Self {
        Self {
            event_model,
            drawing_model,
            surface,
            bounds: Rect::default(),
            needs_repaint: false,
        }
    }

    #[inline]
    pub fn event_model(&self) -> MacEventModel {
        self.event_model
    }

    #[inline]
    pub fn drawing_model(&self) -> MacDrawingModel {
        self.drawing_model
    }

    /// The CoreAnimation layer the plugin renders to, for the CoreAnimation drawing models.
    pub fn layer(&self) -> Option<*mut c_void> {
        match &self.surface {
            MacSurface::CoreAnimation(context) => Some(context.layer),
            _ => None,
        }
    }

    /// Whether a repaint was requested since the last call, clearing the request.
    pub fn take_repaint_request(&mut self) -> bool {
        core::mem::take(&mut self.needs_repaint)
    }
}

impl PluginWindow for PluginWindowMac {
    fn flags(&self) -> WindowFlags {
        // Every macOS drawing model renders into a browser-managed surface.
        WindowFlags::WINDOWLESS
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
        match &self.surface {
            MacSurface::CoreGraphics(context) if self.event_model == MacEventModel::Cocoa => {
                let mut handle = AppKitWindowHandle::empty();
                handle.ns_view = context.window;
                Some(RawWindowHandle::AppKit(handle))
            }
            _ => None,
        }
    }
}
