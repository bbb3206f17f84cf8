//! Animation driver abstraction for snap constraints.
//!
//! The widget never moves itself toward a corner. It installs a
//! [`SnapBehavior`] on an [`Animator`] and the animator pulls the item there
//! over the following frames.

mod spring;

pub use spring::{SpringAnimator, SpringSpec};

use kurbo::{Point, Size};

/// Damping value for a snap that settles without overshoot.
pub const FULL_DAMPING: f64 = 1.0;

/// Opaque identifier for a constraint installed on an animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintHandle(u64);

impl ConstraintHandle {
    /// Wrap a raw id. Animators hand these out; hosts rarely need this.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }
}

/// A rule pulling the item toward a fixed point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapBehavior {
    /// Target center point, in container coordinates.
    pub target: Point,
    /// 0.0 = loosest, 1.0 = fully damped (no oscillation).
    pub damping: f64,
}

impl SnapBehavior {
    /// Create a snap toward `target` with full damping.
    pub fn new(target: Point) -> Self {
        Self {
            target,
            damping: FULL_DAMPING,
        }
    }

    /// Set the damping, clamped to `[0, 1]`.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping.clamp(0.0, 1.0);
        self
    }
}

/// Physics driver the widget issues snap commands to.
///
/// Commands are fire-and-forget: the widget never waits for a snap to finish.
pub trait Animator {
    /// Scope the animator to a container of the given size.
    fn bind(&mut self, reference: Size);

    /// Whether [`Animator::bind`] has been called.
    fn is_bound(&self) -> bool;

    /// Install a snap constraint and return its handle.
    fn add_snap(&mut self, behavior: SnapBehavior) -> ConstraintHandle;

    /// Remove a previously installed constraint. Unknown handles are ignored.
    fn remove(&mut self, handle: ConstraintHandle);

    /// Advance the simulation by `dt` seconds, moving `item` in place.
    ///
    /// Returns `true` while the item is still in motion.
    fn advance(&mut self, item: &mut Point, dt: f64) -> bool;
}
