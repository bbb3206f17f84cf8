//! The draggable widget that docks to a corner of its container.

use kurbo::{Point, Rect, Size};

use crate::corner::{Corner, Padding, compute_anchor};
use crate::dynamics::{Animator, ConstraintHandle, SnapBehavior, SpringAnimator};
use crate::gesture::{DragEvent, DragPhase};

/// A floating item that can be dragged around and snaps to a container
/// corner when released.
///
/// Positions are center points in container coordinates. The container is
/// supplied explicitly through [`attach`](Self::attach) and
/// [`layout`](Self::layout); until attached, positioning and drag handling
/// are no-ops.
#[derive(Debug, Clone)]
pub struct DraggableWidget<A: Animator = SpringAnimator> {
    size: Size,
    center: Point,
    corner: Corner,
    padding: Padding,
    /// Last observed container size. `None` until attached.
    container: Option<Size>,
    phase: DragPhase,
    snap: Option<ConstraintHandle>,
    animator: A,
}

impl DraggableWidget<SpringAnimator> {
    /// Create a widget of the given size with the built-in spring driver.
    pub fn new(size: Size) -> Self {
        Self::with_animator(size, SpringAnimator::new())
    }
}

impl<A: Animator> DraggableWidget<A> {
    /// Create a widget driven by a custom animator.
    pub fn with_animator(size: Size, animator: A) -> Self {
        Self {
            size,
            center: Point::ZERO,
            corner: Corner::default(),
            padding: Padding::ZERO,
            container: None,
            phase: DragPhase::Idle,
            snap: None,
            animator,
        }
    }

    /// Set the target corner and padding, and snap toward the new anchor.
    pub fn configure(&mut self, corner: Corner, padding: Padding) {
        log::debug!("configure widget: corner={:?} padding={:?}", corner, padding);
        self.corner = corner;
        self.padding = padding;
        self.configure_dynamics();
    }

    /// Place the widget into a container of the given size.
    ///
    /// Jumps straight to the current corner's anchor, then installs the snap
    /// constraint holding it there.
    pub fn attach(&mut self, container: Size) {
        log::debug!("attach widget to {}x{} container", container.width, container.height);
        self.container = Some(container);
        if let Some(anchor) = self.anchor_for(self.corner) {
            self.center = anchor;
        }
        self.configure_dynamics();
    }

    /// Remove the widget from its container.
    pub fn detach(&mut self) {
        self.clear_snap();
        self.container = None;
        self.phase = DragPhase::Idle;
    }

    /// Layout pass hook. Re-pins the widget if the container size changed.
    pub fn layout(&mut self, container: Size) {
        match self.container {
            Some(previous) if previous != container => self.on_container_resized(container),
            _ => {}
        }
    }

    fn on_container_resized(&mut self, container: Size) {
        log::debug!(
            "container resized to {}x{}, re-pinning to {:?}",
            container.width,
            container.height,
            self.corner
        );
        self.container = Some(container);
        self.configure_dynamics();
    }

    /// Feed one drag gesture report through the state machine.
    pub fn handle_drag(&mut self, event: DragEvent) {
        let Some(container) = self.container else {
            log::trace!("drag event {:?} ignored: widget not attached", event);
            return;
        };
        if !self.animator.is_bound() {
            log::trace!("drag event {:?} ignored: animator not bound", event);
            return;
        }

        match event {
            DragEvent::Began => {
                self.clear_snap();
                self.phase = DragPhase::Dragging;
            }
            DragEvent::Changed { delta } => {
                self.center += delta;
            }
            DragEvent::Ended { location }
            | DragEvent::Cancelled { location }
            | DragEvent::Failed { location } => {
                let corner = Corner::from_quadrant(location, container);
                log::debug!("released at ({}, {}), snapping to {:?}", location.x, location.y, corner);
                self.corner = corner;
                if let Some(anchor) = self.anchor_for(corner) {
                    self.add_snap(anchor);
                }
                self.phase = DragPhase::Idle;
            }
            DragEvent::Possible => {}
        }
    }

    /// Advance the snap animation by `dt` seconds.
    ///
    /// Returns `true` while the widget is still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.container.is_none() {
            return false;
        }
        self.animator.advance(&mut self.center, dt)
    }

    /// Anchor for `corner` with the current padding in the current container.
    pub fn anchor_for(&self, corner: Corner) -> Option<Point> {
        let container = self.container?;
        match corner {
            Corner::None => None,
            _ => Some(compute_anchor(corner, self.padding, container, self.size)),
        }
    }

    /// Rebind the animator to the container and snap to the current corner.
    fn configure_dynamics(&mut self) {
        let Some(container) = self.container else {
            return;
        };
        self.animator.bind(container);
        match self.anchor_for(self.corner) {
            Some(anchor) => self.add_snap(anchor),
            None => self.clear_snap(),
        }
    }

    fn add_snap(&mut self, target: Point) {
        self.clear_snap();
        self.snap = Some(self.animator.add_snap(SnapBehavior::new(target)));
    }

    fn clear_snap(&mut self) {
        if let Some(handle) = self.snap.take() {
            self.animator.remove(handle);
        }
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Current center point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Current bounds in container coordinates.
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// Last observed container size.
    pub fn container_size(&self) -> Option<Size> {
        self.container
    }

    pub fn is_attached(&self) -> bool {
        self.container.is_some()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Handle of the installed snap constraint, if any.
    pub fn active_constraint(&self) -> Option<ConstraintHandle> {
        self.snap
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }
}
