use std::time::Duration;

use kirana_viewport::{
    DockType, EngineBootstrap, RawEvent, RenderEngine, SurfaceMonitor, ViewportConfig,
    ViewportError, ViewportResult,
};
use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::events::{translate_into, WindowSnapshot};
use crate::signals::CloseSignal;
use crate::surface::WinitLayout;

/// How often the loop wakes up to look for a Ctrl+C close.
const CLOSE_POLL: Duration = Duration::from_millis(100);

struct ViewportApp<R: RenderEngine, S> {
    cfg: ViewportConfig,
    bootstrap: EngineBootstrap<R>,
    setup: S,
    close_signal: CloseSignal,

    window: Option<Window>,
    window_id: Option<WindowId>,
    monitor: Option<SurfaceMonitor>,

    // reused between events
    raw: Vec<RawEvent>,
    error: Option<ViewportError>,
}

impl<R, S> ViewportApp<R, S>
where
    R: RenderEngine,
    S: FnMut(&mut SurfaceMonitor),
{
    fn new(
        cfg: ViewportConfig,
        bootstrap: EngineBootstrap<R>,
        close_signal: CloseSignal,
        setup: S,
    ) -> Self {
        Self {
            cfg,
            bootstrap,
            setup,
            close_signal,
            window: None,
            window_id: None,
            monitor: None,
            raw: Vec::with_capacity(4),
            error: None,
        }
    }

    fn fail(&mut self, el: &ActiveEventLoop, err: ViewportError) {
        error!("{err}");
        self.error.get_or_insert(err);
        el.exit();
    }

    fn attach_if_needed(&mut self, el: &ActiveEventLoop) {
        if self.monitor.is_some() {
            return;
        }
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let layout = WinitLayout::new(window, self.cfg.dpi_override);
        match SurfaceMonitor::attach_dock(&layout, DockType::Viewport) {
            Ok(mut monitor) => {
                (self.setup)(&mut monitor);

                // The window is shown on creation, so the surface can go to the engine now.
                match self.bootstrap.launch(&monitor) {
                    Ok(true) => info!("engine running on viewport {}", monitor.handle()),
                    Ok(false) => debug!("engine bootstrap skipped"),
                    Err(e) => {
                        self.fail(el, e.into());
                        return;
                    }
                }
                self.monitor = Some(monitor);
            }
            Err(e) if e.is_retryable() => {
                warn!("viewport not ready ({e}), retrying on next resume");
            }
            Err(e) => self.fail(el, e.into()),
        }
    }
}

impl<R, S> ApplicationHandler for ViewportApp<R, S>
where
    R: RenderEngine,
    S: FnMut(&mut SurfaceMonitor),
{
    fn resumed(&mut self, el: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title(self.cfg.title.clone())
                .with_inner_size(LogicalSize::new(self.cfg.width, self.cfg.height));

            match el.create_window(attrs) {
                Ok(w) => {
                    self.window_id = Some(w.id());
                    self.window = Some(w);
                }
                Err(e) => {
                    self.fail(el, platform_err(e));
                    return;
                }
            }
        }

        self.attach_if_needed(el);
    }

    fn window_event(&mut self, el: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if Some(id) != self.window_id {
            return;
        }
        let (Some(window), Some(monitor)) = (self.window.as_ref(), self.monitor.as_mut()) else {
            return;
        };

        let snap = WindowSnapshot::of(window, self.cfg.dpi_override);
        translate_into(&event, snap, &mut self.raw);

        for raw in self.raw.drain(..) {
            // The monitor already logged it; dispatch of later events continues.
            // A failed close becomes the exit error.
            match monitor.on_raw_event(raw) {
                Ok(()) => {}
                Err(e) if matches!(raw, RawEvent::CloseRequested) => {
                    self.error.get_or_insert(e.into());
                }
                Err(e) => debug!("listener error on {raw:?}: {e}"),
            }
        }

        if monitor.is_closed() {
            el.exit();
        }
    }

    fn about_to_wait(&mut self, el: &ActiveEventLoop) {
        el.set_control_flow(ControlFlow::wait_duration(CLOSE_POLL));

        let Some(close) = self.close_signal.take() else {
            return;
        };

        info!("close requested from terminal");
        if let Some(monitor) = self.monitor.as_mut() {
            if let Err(e) = monitor.on_raw_event(close) {
                self.error.get_or_insert(e.into());
            }
        }
        el.exit();
    }

    fn exiting(&mut self, _el: &ActiveEventLoop) {
        info!("event loop exiting");
    }
}

#[inline]
fn platform_err(e: impl std::fmt::Display) -> ViewportError {
    ViewportError::Platform(e.to_string())
}

/// Run the viewport shell.
///
/// Creates the window, attaches a [`SurfaceMonitor`] to its viewport dock,
/// calls `setup` once so the caller can register listeners, then launches the
/// engine through `bootstrap`. Ctrl+C closes the viewport like the window's
/// close button. Returns when the window is closed; a failing close listener
/// is returned as [`ViewportError::Listener`].
pub fn run_viewport_app<R, S>(
    cfg: ViewportConfig,
    bootstrap: EngineBootstrap<R>,
    setup: S,
) -> ViewportResult<()>
where
    R: RenderEngine,
    S: FnMut(&mut SurfaceMonitor),
{
    let close_signal = CloseSignal::default();
    if let Err(e) = close_signal.install_ctrlc() {
        warn!("ctrl-c handler not installed: {e}");
    }

    let event_loop = EventLoop::new().map_err(platform_err)?;
    let mut app = ViewportApp::new(cfg, bootstrap, close_signal, setup);
    event_loop.run_app(&mut app).map_err(platform_err)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
