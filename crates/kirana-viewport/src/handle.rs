use std::fmt;
use std::num::NonZeroUsize;

use raw_window_handle::RawWindowHandle;

/// Opaque native identifier of a drawable region.
///
/// The host windowing system owns the underlying object; this is only a
/// pointer-sized copy of its id and is never dereferenced here.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct SurfaceHandle(NonZeroUsize);

impl SurfaceHandle {
    /// `None` for a null handle.
    #[inline]
    pub fn new(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Extract the native window id from a platform window handle.
    ///
    /// Platforms without a pointer-like window id yield `None`.
    pub fn from_raw_window_handle(raw: RawWindowHandle) -> Option<Self> {
        let id = match raw {
            RawWindowHandle::Win32(h) => h.hwnd.get() as usize,
            RawWindowHandle::WinRt(h) => h.core_window.as_ptr() as usize,
            RawWindowHandle::Xlib(h) => h.window as usize,
            RawWindowHandle::Xcb(h) => h.window.get() as usize,
            RawWindowHandle::Wayland(h) => h.surface.as_ptr() as usize,
            RawWindowHandle::AppKit(h) => h.ns_view.as_ptr() as usize,
            RawWindowHandle::UiKit(h) => h.ui_view.as_ptr() as usize,
            RawWindowHandle::AndroidNdk(h) => h.a_native_window.as_ptr() as usize,
            RawWindowHandle::Web(h) => h.id as usize,
            _ => return None,
        };
        Self::new(id)
    }
}

impl fmt::Debug for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SurfaceHandle({:#x})", self.0.get())
    }
}

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}
