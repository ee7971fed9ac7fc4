use std::rc::Rc;

use log::{debug, info, warn};

use crate::dock::{DockLayout, DockType};
use crate::error::{AttachError, ListenerResult};
use crate::event::{
    ActivationEvent, CloseEvent, EventCategory, LifecycleEvent, RawEvent, ResizeEvent,
    WindowStateEvent,
};
use crate::geometry::{sanitize_scale, LogicalSize, PixelSize};
use crate::handle::SurfaceHandle;
use crate::registry::{Listener, ListenerId, ListenerRegistry};
use crate::surface::{SurfaceSource, SurfaceState, WindowMode};

/// Surface lifecycle monitor.
///
/// Driven by the host event loop through [`SurfaceMonitor::on_raw_event`].
/// State is always updated before listeners run, so a failing listener never
/// leaves the monitor out of sync with the platform.
///
/// Once a close has been observed the monitor is terminal: every further raw
/// event is ignored.
pub struct SurfaceMonitor {
    handle: SurfaceHandle,
    state: SurfaceState,
    listeners: ListenerRegistry,
    closed: bool,
}

impl SurfaceMonitor {
    pub fn attach(source: &dyn SurfaceSource) -> Result<Self, AttachError> {
        let handle = source.handle().ok_or(AttachError::InvalidHandle)?;
        let size = source.logical_size().ok_or(AttachError::NoSize)?;

        let raw_scale = source.dpi_scale();
        let dpi_scale = sanitize_scale(raw_scale).unwrap_or_else(|| {
            warn!("surface {handle}: unusable dpi scale {raw_scale}, using 1.0");
            1.0
        });

        // Re-clamp: sources may build the size by hand.
        let size = LogicalSize::new(size.width, size.height);
        let state = SurfaceState::new(size, dpi_scale);
        info!(
            "attached surface {handle}: logical {}x{} @ {dpi_scale} -> {:?}",
            size.width,
            size.height,
            state.pixel_resolution().as_tuple()
        );

        Ok(Self {
            handle,
            state,
            listeners: ListenerRegistry::new(),
            closed: false,
        })
    }

    /// Resolve a dock in the window layout and attach to its surface.
    pub fn attach_dock(layout: &dyn DockLayout, dock: DockType) -> Result<Self, AttachError> {
        let source = layout
            .find_dock(dock)
            .ok_or(AttachError::DockUnavailable(dock))?;
        Self::attach(source)
    }

    /// Feed one platform event.
    ///
    /// Returns the first listener failure of the dispatch it triggered, if any.
    pub fn on_raw_event(&mut self, event: RawEvent) -> ListenerResult {
        if self.closed {
            return Ok(());
        }

        match event {
            RawEvent::Resized { width, height } => {
                self.apply_resize(LogicalSize::new(width, height))
            }
            RawEvent::Activated => self.apply_activation(true),
            RawEvent::Deactivated => self.apply_activation(false),
            RawEvent::CloseRequested => self.apply_close(),
            RawEvent::WindowStateChanged(mode) => self.apply_window_mode(mode),
            RawEvent::ScaleFactorChanged(scale) => {
                self.apply_scale(scale);
                Ok(())
            }
            RawEvent::Other => Ok(()),
        }
    }

    fn apply_resize(&mut self, new_size: LogicalSize) -> ListenerResult {
        let old_size = self.state.logical_size();
        if old_size == new_size {
            return Ok(());
        }

        self.state.set_logical_size(new_size);
        debug!(
            "surface {}: resize {}x{} -> {}x{}",
            self.handle, old_size.width, old_size.height, new_size.width, new_size.height
        );
        self.dispatch(&ResizeEvent { old_size, new_size })
    }

    fn apply_activation(&mut self, is_active: bool) -> ListenerResult {
        if self.state.is_active == is_active {
            return Ok(());
        }

        self.state.is_active = is_active;
        debug!("surface {}: active={is_active}", self.handle);
        self.dispatch(&ActivationEvent { is_active })
    }

    fn apply_close(&mut self) -> ListenerResult {
        self.closed = true;
        info!("surface {}: closed", self.handle);
        self.dispatch(&CloseEvent)
    }

    fn apply_window_mode(&mut self, mode: WindowMode) -> ListenerResult {
        let prev = self.state.window_mode();
        let Some(tag) = WindowStateEvent::transition(prev, mode) else {
            return Ok(());
        };

        self.state.set_window_mode(mode);
        debug!("surface {}: window {prev:?} -> {mode:?}", self.handle);
        self.dispatch(&tag)
    }

    fn apply_scale(&mut self, scale: f64) {
        match sanitize_scale(scale) {
            Some(scale) => {
                if scale != self.state.dpi_scale {
                    debug!(
                        "surface {}: dpi scale {} -> {scale}",
                        self.handle, self.state.dpi_scale
                    );
                    self.state.dpi_scale = scale;
                }
            }
            None => warn!("surface {}: ignoring dpi scale {scale}", self.handle),
        }
    }

    fn dispatch<E: LifecycleEvent>(&self, event: &E) -> ListenerResult {
        self.listeners.dispatch(event).inspect_err(|e| {
            warn!("surface {}: {e}", self.handle);
        })
    }

    #[inline]
    pub fn handle(&self) -> SurfaceHandle {
        self.handle
    }

    #[inline]
    pub fn pixel_resolution(&self) -> PixelSize {
        self.state.pixel_resolution()
    }

    #[inline]
    pub fn logical_size(&self) -> LogicalSize {
        self.state.logical_size()
    }

    #[inline]
    pub fn dpi_scale(&self) -> f64 {
        self.state.dpi_scale
    }

    /// Copy of the current state.
    #[inline]
    pub fn state(&self) -> SurfaceState {
        self.state
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn register<E: LifecycleEvent>(&mut self, listener: Listener<E>) -> ListenerId {
        self.listeners.register(listener)
    }

    pub fn on_resize<F>(&mut self, f: F) -> ListenerId
    where
        F: Fn(&ResizeEvent) -> ListenerResult + 'static,
    {
        self.register::<ResizeEvent>(Rc::new(f))
    }

    pub fn on_activation<F>(&mut self, f: F) -> ListenerId
    where
        F: Fn(&ActivationEvent) -> ListenerResult + 'static,
    {
        self.register::<ActivationEvent>(Rc::new(f))
    }

    pub fn on_close<F>(&mut self, f: F) -> ListenerId
    where
        F: Fn(&CloseEvent) -> ListenerResult + 'static,
    {
        self.register::<CloseEvent>(Rc::new(f))
    }

    pub fn on_window_state<F>(&mut self, f: F) -> ListenerId
    where
        F: Fn(&WindowStateEvent) -> ListenerResult + 'static,
    {
        self.register::<WindowStateEvent>(Rc::new(f))
    }

    #[inline]
    pub fn unregister(&mut self, category: EventCategory, id: ListenerId) -> bool {
        self.listeners.unregister(category, id)
    }

    /// Linear in the number of listeners of `E`'s category.
    #[inline]
    pub fn unregister_callback<E: LifecycleEvent>(&mut self, listener: &Listener<E>) -> bool {
        self.listeners.unregister_callback(listener)
    }

    #[inline]
    pub fn listener_count(&self, category: EventCategory) -> usize {
        self.listeners.len(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListenerError;
    use std::cell::{Cell, RefCell};

    struct FakeSurface {
        handle: usize,
        size: Option<LogicalSize>,
        scale: f64,
    }

    impl SurfaceSource for FakeSurface {
        fn handle(&self) -> Option<SurfaceHandle> {
            SurfaceHandle::new(self.handle)
        }

        fn logical_size(&self) -> Option<LogicalSize> {
            self.size
        }

        fn dpi_scale(&self) -> f64 {
            self.scale
        }
    }

    fn monitor(w: f64, h: f64, scale: f64) -> SurfaceMonitor {
        SurfaceMonitor::attach(&FakeSurface {
            handle: 0xabc,
            size: Some(LogicalSize::new(w, h)),
            scale,
        })
        .unwrap()
    }

    #[test]
    fn attach_rejects_null_handle_and_missing_size() {
        let err = SurfaceMonitor::attach(&FakeSurface {
            handle: 0,
            size: Some(LogicalSize::new(1.0, 1.0)),
            scale: 1.0,
        })
        .err();
        assert_eq!(err, Some(AttachError::InvalidHandle));

        let err = SurfaceMonitor::attach(&FakeSurface {
            handle: 1,
            size: None,
            scale: 1.0,
        })
        .err();
        assert_eq!(err, Some(AttachError::NoSize));
    }

    #[test]
    fn bad_scale_falls_back_to_one() {
        let m = monitor(640.0, 480.0, f64::NAN);
        assert_eq!(m.dpi_scale(), 1.0);
        assert_eq!(m.pixel_resolution(), PixelSize::new(640, 480));
    }

    #[test]
    fn zero_scale_gives_empty_resolution() {
        let mut m = monitor(800.0, 600.0, 0.0);
        assert_eq!(m.dpi_scale(), 0.0);
        assert_eq!(m.pixel_resolution(), PixelSize::new(0, 0));

        m.on_raw_event(RawEvent::ScaleFactorChanged(1.5)).unwrap();
        assert_eq!(m.pixel_resolution(), PixelSize::new(1200, 900));
    }

    #[test]
    fn negative_resize_is_clamped() {
        let mut m = monitor(10.0, 10.0, 1.0);
        m.on_raw_event(RawEvent::Resized {
            width: -3.0,
            height: 5.0,
        })
        .unwrap();
        assert_eq!(m.pixel_resolution(), PixelSize::new(0, 5));
    }

    #[test]
    fn activation_dispatches_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut m = monitor(1.0, 1.0, 1.0);
        let s = seen.clone();
        m.on_activation(move |e| {
            s.borrow_mut().push(e.is_active);
            Ok(())
        });

        for ev in [
            RawEvent::Deactivated,
            RawEvent::Activated,
            RawEvent::Activated,
            RawEvent::Deactivated,
        ] {
            m.on_raw_event(ev).unwrap();
        }
        assert_eq!(*seen.borrow(), [true, false]);
    }

    #[test]
    fn scale_change_updates_resolution_without_resize_dispatch() {
        let hits = Rc::new(Cell::new(0));
        let mut m = monitor(800.0, 600.0, 1.0);
        let h = hits.clone();
        m.on_resize(move |_| {
            h.set(h.get() + 1);
            Ok(())
        });

        m.on_raw_event(RawEvent::ScaleFactorChanged(2.0)).unwrap();
        m.on_raw_event(RawEvent::ScaleFactorChanged(-1.0)).unwrap();
        assert_eq!(m.pixel_resolution(), PixelSize::new(1600, 1200));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn failing_listener_keeps_state_and_other_categories() {
        let closes = Rc::new(Cell::new(0));
        let mut m = monitor(100.0, 100.0, 1.0);
        m.on_resize(|_| Err(ListenerError::new("renderer lost")));
        let c = closes.clone();
        m.on_close(move |_| {
            c.set(c.get() + 1);
            Ok(())
        });

        let err = m
            .on_raw_event(RawEvent::Resized {
                width: 200.0,
                height: 50.0,
            })
            .unwrap_err();
        assert_eq!(err.category, Some(EventCategory::Resize));
        assert_eq!(m.pixel_resolution(), PixelSize::new(200, 50));

        m.on_raw_event(RawEvent::CloseRequested).unwrap();
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn events_after_close_are_ignored() {
        let mut m = monitor(100.0, 100.0, 1.0);
        m.on_raw_event(RawEvent::CloseRequested).unwrap();
        assert!(m.is_closed());

        m.on_raw_event(RawEvent::Resized {
            width: 1.0,
            height: 1.0,
        })
        .unwrap();
        m.on_raw_event(RawEvent::Activated).unwrap();
        assert_eq!(m.logical_size(), LogicalSize::new(100.0, 100.0));
        assert!(!m.state().is_active);
    }

    #[test]
    fn other_events_are_noops() {
        let mut m = monitor(3.0, 4.0, 1.0);
        let before = m.state();
        m.on_raw_event(RawEvent::Other).unwrap();
        assert_eq!(m.state(), before);
    }
}
