use crate::geometry::{LogicalSize, PixelSize};
use crate::handle::SurfaceHandle;

/// Introspection contract a host adapter implements for the surface it exposes.
pub trait SurfaceSource {
    fn handle(&self) -> Option<SurfaceHandle>;

    /// Current logical size, `None` if the surface cannot report one yet.
    fn logical_size(&self) -> Option<LogicalSize>;

    fn dpi_scale(&self) -> f64;
}

/// Parent window mode as reported by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum WindowMode {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// Latest known state of the attached surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceState {
    pub logical_width: f64,
    pub logical_height: f64,
    pub dpi_scale: f64,
    pub is_active: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
}

impl SurfaceState {
    pub(crate) fn new(size: LogicalSize, dpi_scale: f64) -> Self {
        Self {
            logical_width: size.width,
            logical_height: size.height,
            dpi_scale,
            is_active: false,
            is_minimized: false,
            is_maximized: false,
        }
    }

    #[inline]
    pub fn logical_size(&self) -> LogicalSize {
        LogicalSize::new(self.logical_width, self.logical_height)
    }

    #[inline]
    pub fn pixel_resolution(&self) -> PixelSize {
        self.logical_size().to_pixels(self.dpi_scale)
    }

    #[inline]
    pub fn window_mode(&self) -> WindowMode {
        if self.is_minimized {
            WindowMode::Minimized
        } else if self.is_maximized {
            WindowMode::Maximized
        } else {
            WindowMode::Normal
        }
    }

    #[inline]
    pub(crate) fn set_logical_size(&mut self, size: LogicalSize) {
        self.logical_width = size.width;
        self.logical_height = size.height;
    }

    #[inline]
    pub(crate) fn set_window_mode(&mut self, mode: WindowMode) {
        self.is_minimized = mode == WindowMode::Minimized;
        self.is_maximized = mode == WindowMode::Maximized;
    }
}
