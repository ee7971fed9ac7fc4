use crate::geometry::LogicalSize;
use crate::registry::{ListenerList, ListenerRegistry};
use crate::surface::WindowMode;

/// Toolkit-neutral platform event fed into the monitor by a host adapter.
#[derive(Debug, Copy, Clone, PartialEq)]
#[non_exhaustive]
pub enum RawEvent {
    /// Surface got a new logical size. Components may be negative or NaN on
    /// broken platforms; they are clamped.
    Resized { width: f64, height: f64 },
    Activated,
    Deactivated,
    /// Parent window was asked to close.
    CloseRequested,
    /// Parent window mode as it is after the change.
    WindowStateChanged(WindowMode),
    ScaleFactorChanged(f64),
    /// Event the adapter forwards but the monitor has no use for.
    Other,
}

/// Listener categories.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum EventCategory {
    Resize,
    Activation,
    Close,
    WindowState,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Resize,
        EventCategory::Activation,
        EventCategory::Close,
        EventCategory::WindowState,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventCategory::Resize => "resize",
            EventCategory::Activation => "activation",
            EventCategory::Close => "close",
            EventCategory::WindowState => "window_state",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResizeEvent {
    pub old_size: LogicalSize,
    pub new_size: LogicalSize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ActivationEvent {
    pub is_active: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CloseEvent;

/// Window mode transition tag. Exactly one per actual transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WindowStateEvent {
    Minimized,
    Maximized,
    Restored,
}

impl WindowStateEvent {
    /// Tag for moving from `prev` to `next`, `None` when nothing changed.
    pub fn transition(prev: WindowMode, next: WindowMode) -> Option<Self> {
        if prev == next {
            return None;
        }
        Some(match next {
            WindowMode::Minimized => WindowStateEvent::Minimized,
            WindowMode::Maximized => WindowStateEvent::Maximized,
            WindowMode::Normal => WindowStateEvent::Restored,
        })
    }
}

/// Ties a payload type to its listener category.
pub trait LifecycleEvent: sealed::Sealed + Sized + 'static {
    const CATEGORY: EventCategory;

    #[doc(hidden)]
    fn listeners(reg: &ListenerRegistry) -> &ListenerList<Self>;

    #[doc(hidden)]
    fn listeners_mut(reg: &mut ListenerRegistry) -> &mut ListenerList<Self>;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ResizeEvent {}
    impl Sealed for super::ActivationEvent {}
    impl Sealed for super::CloseEvent {}
    impl Sealed for super::WindowStateEvent {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_tags() {
        use WindowMode::*;
        assert_eq!(WindowStateEvent::transition(Normal, Normal), None);
        assert_eq!(WindowStateEvent::transition(Maximized, Maximized), None);
        assert_eq!(
            WindowStateEvent::transition(Normal, Minimized),
            Some(WindowStateEvent::Minimized)
        );
        assert_eq!(
            WindowStateEvent::transition(Minimized, Normal),
            Some(WindowStateEvent::Restored)
        );
        assert_eq!(
            WindowStateEvent::transition(Maximized, Normal),
            Some(WindowStateEvent::Restored)
        );
        assert_eq!(
            WindowStateEvent::transition(Minimized, Maximized),
            Some(WindowStateEvent::Maximized)
        );
    }

    #[test]
    fn category_names() {
        let names: Vec<_> = EventCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["resize", "activation", "close", "window_state"]);
    }
}
