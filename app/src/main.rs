use std::env;

use kirana_platform_winit::run_viewport_app;
use kirana_viewport::{EngineBootstrap, RenderEngine, SurfaceHandle, SurfaceMonitor, ViewportConfig};
use log::info;

const DEFAULT_CONFIG: &str = "kirana.toml";

/// Stand-in for the external renderer.
struct LogEngine;

impl RenderEngine for LogEngine {
    fn run(&mut self, surface: SurfaceHandle, width_px: u32, height_px: u32) {
        info!("engine: surface {surface} {width_px}x{height_px}");
    }
}

fn register_listeners(monitor: &mut SurfaceMonitor) {
    let (w, h) = monitor.pixel_resolution().as_tuple();
    info!("viewport {} ready, {w}x{h} px", monitor.handle());

    monitor.on_resize(|e| {
        info!(
            "viewport resized {}x{} -> {}x{}",
            e.old_size.width, e.old_size.height, e.new_size.width, e.new_size.height
        );
        Ok(())
    });
    monitor.on_activation(|e| {
        info!("viewport active: {}", e.is_active);
        Ok(())
    });
    monitor.on_window_state(|e| {
        info!("window {e:?}");
        Ok(())
    });
    monitor.on_close(|_| {
        info!("window closed");
        Ok(())
    });
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = env::var("KIRANA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let cfg = ViewportConfig::load_or_default(&path)?;
    info!("config {path}: {cfg:?}");

    let bootstrap = if cfg.run_engine {
        EngineBootstrap::new(LogEngine)
    } else {
        EngineBootstrap::disabled()
    };

    run_viewport_app(cfg, bootstrap, register_listeners)?;
    Ok(())
}
