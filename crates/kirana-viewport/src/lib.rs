pub mod bootstrap;
pub mod config;
pub mod dock;
pub mod error;
pub mod event;
pub mod geometry;
pub mod handle;
pub mod monitor;
pub mod registry;
pub mod surface;

pub use crate::bootstrap::{EngineBootstrap, RenderEngine};
pub use crate::config::ViewportConfig;
pub use crate::dock::{DockLayout, DockType};
pub use crate::error::{
    AttachError, BootstrapError, ConfigError, ListenerError, ListenerResult, ViewportError,
    ViewportResult,
};
pub use crate::event::{
    ActivationEvent, CloseEvent, EventCategory, LifecycleEvent, RawEvent, ResizeEvent,
    WindowStateEvent,
};
pub use crate::geometry::{LogicalSize, PixelSize};
pub use crate::handle::SurfaceHandle;
pub use crate::monitor::SurfaceMonitor;
pub use crate::registry::{Listener, ListenerId, ListenerRegistry};
pub use crate::surface::{SurfaceSource, SurfaceState, WindowMode};
