mod app;
mod events;
mod signals;
mod surface;

pub use crate::app::run_viewport_app;
pub use crate::events::{translate_into, WindowSnapshot};
pub use crate::surface::{WinitLayout, WinitSurface};
