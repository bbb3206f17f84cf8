//! Built-in spring driver.

use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

use super::{Animator, ConstraintHandle, SnapBehavior};

/// Fixed integration step (~60fps) for stability at large frame deltas.
const TIMESTEP: f64 = 0.016;

/// Upper bound on integration steps per `advance` call.
const MAX_SUBSTEPS: usize = 1000;

/// Lowest damping ratio a snap can map to, so zero damping still settles.
const MIN_DAMPING_RATIO: f64 = 0.05;

/// Spring tuning for [`SpringAnimator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpringSpec {
    /// Stiffness constant. Higher values = faster snap.
    pub stiffness: f64,
    /// Speed (px/s) below which the item may come to rest.
    pub velocity_threshold: f64,
    /// Distance (px) from the target below which the item may come to rest.
    pub position_threshold: f64,
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            velocity_threshold: 0.1,
            position_threshold: 0.01,
        }
    }
}

impl SpringSpec {
    /// Check that the tuning can be simulated.
    pub fn validate(&self) -> Result<(), String> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(format!("stiffness must be positive and finite, got {}", self.stiffness));
        }
        if !self.velocity_threshold.is_finite() || self.velocity_threshold < 0.0 {
            return Err(format!(
                "velocity_threshold must be non-negative and finite, got {}",
                self.velocity_threshold
            ));
        }
        if !self.position_threshold.is_finite() || self.position_threshold < 0.0 {
            return Err(format!(
                "position_threshold must be non-negative and finite, got {}",
                self.position_threshold
            ));
        }
        Ok(())
    }

    /// Integration step: the frame timestep, shortened for stiff springs so
    /// that `step * sqrt(stiffness)` stays at or below 0.5.
    fn substep(&self) -> f64 {
        TIMESTEP.min(0.5 / self.stiffness.sqrt())
    }
}

/// Damped-spring animator for a single item.
///
/// Every installed snap pulls the item toward its target with the same
/// stiffness; the widget keeps at most one installed at a time.
#[derive(Debug, Clone, Default)]
pub struct SpringAnimator {
    spec: SpringSpec,
    reference: Option<Size>,
    behaviors: Vec<(ConstraintHandle, SnapBehavior)>,
    velocity: Vec2,
    next_id: u64,
}

impl SpringAnimator {
    /// Create an unbound animator with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unbound animator with the given tuning.
    ///
    /// Tuning that fails [`SpringSpec::validate`] is replaced by the default.
    pub fn with_spec(spec: SpringSpec) -> Self {
        let spec = match spec.validate() {
            Ok(()) => spec,
            Err(e) => {
                log::warn!("Invalid spring tuning ({}), using defaults", e);
                SpringSpec::default()
            }
        };
        Self {
            spec,
            ..Self::default()
        }
    }

    /// Current tuning.
    pub fn spec(&self) -> SpringSpec {
        self.spec
    }

    /// Size of the container this animator is scoped to.
    pub fn reference(&self) -> Option<Size> {
        self.reference
    }

    /// Installed behaviors, oldest first.
    pub fn behaviors(&self) -> impl Iterator<Item = &SnapBehavior> {
        self.behaviors.iter().map(|(_, b)| b)
    }

    /// Number of installed behaviors.
    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    /// Current item velocity in px/s.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Rest point of the installed behaviors.
    fn equilibrium(&self) -> Option<Point> {
        if self.behaviors.is_empty() {
            return None;
        }
        let sum = self
            .behaviors
            .iter()
            .fold(Vec2::ZERO, |acc, (_, b)| acc + b.target.to_vec2());
        Some((sum / self.behaviors.len() as f64).to_point())
    }

    fn step(&mut self, item: &mut Point, step: f64) {
        let stiffness = self.spec.stiffness;
        let mut force = Vec2::ZERO;
        for (_, behavior) in &self.behaviors {
            let ratio = behavior.damping.clamp(MIN_DAMPING_RATIO, 1.0);
            let damping = 2.0 * ratio * stiffness.sqrt();
            let displacement = *item - behavior.target;
            force += -stiffness * displacement - damping * self.velocity;
        }

        // Semi-implicit Euler: velocity first, then position.
        self.velocity += force * step;
        *item += self.velocity * step;
    }
}

impl Animator for SpringAnimator {
    fn bind(&mut self, reference: Size) {
        log::trace!("spring animator bound to {}x{}", reference.width, reference.height);
        self.reference = Some(reference);
    }

    fn is_bound(&self) -> bool {
        self.reference.is_some()
    }

    fn add_snap(&mut self, behavior: SnapBehavior) -> ConstraintHandle {
        self.next_id += 1;
        let handle = ConstraintHandle::from_raw(self.next_id);
        self.behaviors.push((handle, behavior));
        handle
    }

    fn remove(&mut self, handle: ConstraintHandle) {
        let before = self.behaviors.len();
        self.behaviors.retain(|(h, _)| *h != handle);
        if self.behaviors.len() != before {
            self.velocity = Vec2::ZERO;
        }
    }

    fn advance(&mut self, item: &mut Point, dt: f64) -> bool {
        if !self.is_bound() || !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        let Some(rest) = self.equilibrium() else {
            return false;
        };

        let substep = self.spec.substep();
        let mut elapsed = 0.0;
        let mut steps = 0;
        while elapsed < dt && steps < MAX_SUBSTEPS {
            let step = substep.min(dt - elapsed);
            self.step(item, step);
            elapsed += step;
            steps += 1;
        }

        let at_rest = self.velocity.hypot() < self.spec.velocity_threshold;
        let near_target = item.distance(rest) < self.spec.position_threshold;
        if at_rest && near_target {
            *item = rest;
            self.velocity = Vec2::ZERO;
            return false;
        }
        true
    }
}
