use kirana_viewport::{RawEvent, WindowMode};
use winit::event::WindowEvent;
use winit::window::Window;

/// Window flags sampled right after an event arrived.
///
/// winit has no dedicated minimize/maximize event. Depending on the platform
/// a minimize shows up as a resize, an occlusion or a focus loss, so the mode
/// is sampled on each of those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSnapshot {
    pub minimized: bool,
    pub maximized: bool,
    /// Effective scale factor (override or platform value).
    pub scale: f64,
    pub scale_overridden: bool,
}

impl WindowSnapshot {
    pub fn of(window: &Window, dpi_override: Option<f64>) -> Self {
        let overridden = valid_override(dpi_override);
        Self {
            // `None` on platforms that cannot tell.
            minimized: window.is_minimized().unwrap_or(false),
            maximized: window.is_maximized(),
            scale: overridden.unwrap_or_else(|| window.scale_factor()),
            scale_overridden: overridden.is_some(),
        }
    }

    #[inline]
    pub fn mode(&self) -> WindowMode {
        if self.minimized {
            WindowMode::Minimized
        } else if self.maximized {
            WindowMode::Maximized
        } else {
            WindowMode::Normal
        }
    }
}

#[inline]
pub(crate) fn valid_override(dpi_override: Option<f64>) -> Option<f64> {
    dpi_override.filter(|s| s.is_finite() && *s > 0.0)
}

/// Translate one winit window event into raw monitor events, appended to `out`.
///
/// Events the monitor does not track produce nothing. Mode samples that did not
/// change are dropped by the monitor.
pub fn translate_into(event: &WindowEvent, snap: WindowSnapshot, out: &mut Vec<RawEvent>) {
    match event {
        WindowEvent::Resized(px) => {
            out.push(RawEvent::WindowStateChanged(snap.mode()));
            // Minimized windows report 0x0 on some platforms; keep the last real size.
            if !snap.minimized {
                let logical = px.to_logical::<f64>(snap.scale);
                out.push(RawEvent::Resized {
                    width: logical.width,
                    height: logical.height,
                });
            }
        }
        WindowEvent::Occluded(_) => out.push(RawEvent::WindowStateChanged(snap.mode())),
        WindowEvent::Focused(focused) => {
            out.push(RawEvent::WindowStateChanged(snap.mode()));
            out.push(if *focused {
                RawEvent::Activated
            } else {
                RawEvent::Deactivated
            });
        }
        WindowEvent::CloseRequested | WindowEvent::Destroyed => {
            out.push(RawEvent::CloseRequested)
        }
        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
            if !snap.scale_overridden {
                out.push(RawEvent::ScaleFactorChanged(*scale_factor));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    fn snap(minimized: bool, maximized: bool, scale: f64) -> WindowSnapshot {
        WindowSnapshot {
            minimized,
            maximized,
            scale,
            scale_overridden: false,
        }
    }

    fn translate(event: WindowEvent, s: WindowSnapshot) -> Vec<RawEvent> {
        let mut out = Vec::new();
        translate_into(&event, s, &mut out);
        out
    }

    #[test]
    fn resize_is_converted_to_logical_units() {
        let out = translate(
            WindowEvent::Resized(PhysicalSize::new(1600, 1200)),
            snap(false, false, 2.0),
        );
        assert_eq!(
            out,
            vec![
                RawEvent::WindowStateChanged(WindowMode::Normal),
                RawEvent::Resized {
                    width: 800.0,
                    height: 600.0
                },
            ]
        );
    }

    #[test]
    fn minimized_resize_only_reports_mode() {
        let out = translate(
            WindowEvent::Resized(PhysicalSize::new(0, 0)),
            snap(true, false, 1.0),
        );
        assert_eq!(out, vec![RawEvent::WindowStateChanged(WindowMode::Minimized)]);
    }

    #[test]
    fn maximized_resize_reports_maximized() {
        let out = translate(
            WindowEvent::Resized(PhysicalSize::new(1920, 1080)),
            snap(false, true, 1.0),
        );
        assert_eq!(out[0], RawEvent::WindowStateChanged(WindowMode::Maximized));
    }

    #[test]
    fn focus_carries_mode_then_activation() {
        let s = snap(false, false, 1.0);
        assert_eq!(
            translate(WindowEvent::Focused(true), s),
            vec![
                RawEvent::WindowStateChanged(WindowMode::Normal),
                RawEvent::Activated
            ]
        );

        // Minimizing through the taskbar on some platforms only drops focus.
        assert_eq!(
            translate(WindowEvent::Focused(false), snap(true, false, 1.0)),
            vec![
                RawEvent::WindowStateChanged(WindowMode::Minimized),
                RawEvent::Deactivated
            ]
        );
    }

    #[test]
    fn occlusion_reports_minimize() {
        let out = translate(WindowEvent::Occluded(true), snap(true, false, 1.0));
        assert_eq!(out, vec![RawEvent::WindowStateChanged(WindowMode::Minimized)]);

        let out = translate(WindowEvent::Occluded(false), snap(false, false, 1.0));
        assert_eq!(out, vec![RawEvent::WindowStateChanged(WindowMode::Normal)]);
    }

    #[test]
    fn close_and_destroy_both_close() {
        let s = snap(false, false, 1.0);
        assert_eq!(translate(WindowEvent::CloseRequested, s), vec![RawEvent::CloseRequested]);
        assert_eq!(translate(WindowEvent::Destroyed, s), vec![RawEvent::CloseRequested]);
    }

    #[test]
    fn untracked_events_produce_nothing() {
        let s = snap(false, false, 1.0);
        assert!(translate(WindowEvent::Moved(PhysicalPosition::new(5, 5)), s).is_empty());
        assert!(translate(WindowEvent::RedrawRequested, s).is_empty());
    }

    #[test]
    fn override_validation() {
        assert_eq!(valid_override(Some(2.0)), Some(2.0));
        assert_eq!(valid_override(Some(0.0)), None);
        assert_eq!(valid_override(Some(f64::NAN)), None);
        assert_eq!(valid_override(None), None);
    }

    #[test]
    fn mode_prefers_minimized() {
        assert_eq!(snap(true, true, 1.0).mode(), WindowMode::Minimized);
        assert_eq!(snap(false, true, 1.0).mode(), WindowMode::Maximized);
        assert_eq!(snap(false, false, 1.0).mode(), WindowMode::Normal);
    }
}
