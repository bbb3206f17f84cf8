//! egui host for CornerDock widgets.
//!
//! Wraps a [`cornerdock_core::DraggableWidget`] so an egui app can drop a
//! draggable, corner-snapping panel into any region:
//!
//! - **Dock**: attaches the widget to the region, feeds it drag input, paints it
//! - **Convert**: kurbo <-> egui geometry helpers

pub mod convert;
pub mod dock;

pub use dock::{DockArea, DockStyle, FrameDrag};

/// Standard sizing constants.
pub mod sizing {
    /// Docked widget corner radius
    pub const CORNER_RADIUS: u8 = 8;
}

/// Standard colors.
pub mod theme {
    use egui::Color32;

    /// Default docked widget fill (green)
    pub const DOCK_FILL: Color32 = Color32::from_rgb(34, 197, 94);
    /// Drag outline color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
}
