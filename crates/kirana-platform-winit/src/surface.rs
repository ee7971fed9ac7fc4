use kirana_viewport::{DockLayout, DockType, LogicalSize, SurfaceHandle, SurfaceSource};
use raw_window_handle::HasWindowHandle;
use winit::window::Window;

use crate::events::valid_override;

/// winit window exposed as a monitor surface.
pub struct WinitSurface<'a> {
    window: &'a Window,
    dpi_override: Option<f64>,
}

impl<'a> WinitSurface<'a> {
    #[inline]
    pub fn new(window: &'a Window, dpi_override: Option<f64>) -> Self {
        Self {
            window,
            dpi_override: valid_override(dpi_override),
        }
    }
}

impl SurfaceSource for WinitSurface<'_> {
    fn handle(&self) -> Option<SurfaceHandle> {
        let h = self.window.window_handle().ok()?;
        SurfaceHandle::from_raw_window_handle(h.as_raw())
    }

    fn logical_size(&self) -> Option<LogicalSize> {
        let logical = self.window.inner_size().to_logical::<f64>(self.dpi_scale());
        Some(LogicalSize::new(logical.width, logical.height))
    }

    fn dpi_scale(&self) -> f64 {
        self.dpi_override.unwrap_or_else(|| self.window.scale_factor())
    }
}

/// Single-window layout: the whole client area is the viewport dock.
pub struct WinitLayout<'a> {
    viewport: WinitSurface<'a>,
}

impl<'a> WinitLayout<'a> {
    #[inline]
    pub fn new(window: &'a Window, dpi_override: Option<f64>) -> Self {
        Self {
            viewport: WinitSurface::new(window, dpi_override),
        }
    }
}

impl DockLayout for WinitLayout<'_> {
    fn find_dock(&self, dock: DockType) -> Option<&dyn SurfaceSource> {
        match dock {
            DockType::Viewport => Some(&self.viewport),
            DockType::SceneHierarchy | DockType::ObjectProperties => None,
        }
    }
}
