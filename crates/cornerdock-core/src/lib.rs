//! CornerDock Core Library
//!
//! Platform-agnostic logic for a floating widget that can be dragged around
//! its container and snaps to a corner when released.

pub mod config;
pub mod corner;
pub mod dynamics;
pub mod gesture;
pub mod widget;

pub use config::{ConfigError, ConfigResult, WidgetConfig};
pub use corner::{Corner, Padding, compute_anchor};
pub use dynamics::{Animator, ConstraintHandle, SnapBehavior, SpringAnimator, SpringSpec};
pub use gesture::{DragEvent, DragPhase, PanRecognizer};
pub use widget::DraggableWidget;
