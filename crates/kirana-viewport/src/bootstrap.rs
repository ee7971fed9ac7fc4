use log::info;

use crate::error::BootstrapError;
use crate::handle::SurfaceHandle;
use crate::monitor::SurfaceMonitor;

/// External rendering engine.
///
/// Receives the drawing surface once and runs its own frame loop from then on.
pub trait RenderEngine {
    fn run(&mut self, surface: SurfaceHandle, width_px: u32, height_px: u32);
}

impl<F> RenderEngine for F
where
    F: FnMut(SurfaceHandle, u32, u32),
{
    fn run(&mut self, surface: SurfaceHandle, width_px: u32, height_px: u32) {
        self(surface, width_px, height_px)
    }
}

/// Hands the viewport surface to the engine at most once.
pub struct EngineBootstrap<R: RenderEngine> {
    engine: Option<R>,
    launched: bool,
}

impl<R: RenderEngine> EngineBootstrap<R> {
    pub fn new(engine: R) -> Self {
        Self {
            engine: Some(engine),
            launched: false,
        }
    }

    /// Bootstrap that never launches (engine switched off).
    pub fn disabled() -> Self {
        Self {
            engine: None,
            launched: false,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.engine.is_some()
    }

    #[inline]
    pub fn is_launched(&self) -> bool {
        self.launched
    }

    /// Start the engine on the monitor's surface at its current pixel resolution.
    ///
    /// `Ok(true)` when this call started the engine, `Ok(false)` when it was
    /// already started or is disabled.
    pub fn launch(&mut self, monitor: &SurfaceMonitor) -> Result<bool, BootstrapError> {
        if monitor.is_closed() {
            return Err(BootstrapError::SurfaceClosed);
        }
        if self.launched {
            return Ok(false);
        }
        let Some(engine) = self.engine.as_mut() else {
            return Ok(false);
        };

        let (w, h) = monitor.pixel_resolution().as_tuple();
        info!("bootstrapping engine on surface {} at {w}x{h}", monitor.handle());
        engine.run(monitor.handle(), w, h);
        self.launched = true;
        Ok(true)
    }

    /// Engine access after launch, e.g. to tear it down.
    #[inline]
    pub fn engine_mut(&mut self) -> Option<&mut R> {
        self.engine.as_mut()
    }
}
