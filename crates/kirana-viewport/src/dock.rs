use std::fmt;

use crate::surface::SurfaceSource;

/// Dock regions an application window layout can expose.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DockType {
    Viewport,
    SceneHierarchy,
    ObjectProperties,
}

impl DockType {
    pub const ALL: [DockType; 3] = [
        DockType::Viewport,
        DockType::SceneHierarchy,
        DockType::ObjectProperties,
    ];

    /// Object name of the dock in the window layout.
    #[inline]
    pub const fn object_name(self) -> &'static str {
        match self {
            DockType::Viewport => "viewport_dock",
            DockType::SceneHierarchy => "scene_hierarchy_dock",
            DockType::ObjectProperties => "object_properties_dock",
        }
    }
}

impl fmt::Display for DockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.object_name())
    }
}

/// Window layout that can hand out the surface behind a dock.
///
/// Returning `None` means the dock does not exist (yet). The monitor reports
/// that as a retryable attach failure.
pub trait DockLayout {
    fn find_dock(&self, dock: DockType) -> Option<&dyn SurfaceSource>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_names_are_distinct() {
        let mut names: Vec<_> = DockType::ALL.iter().map(|d| d.object_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DockType::ALL.len());
    }

    #[test]
    fn display_matches_object_name() {
        assert_eq!(DockType::Viewport.to_string(), "viewport_dock");
    }
}
