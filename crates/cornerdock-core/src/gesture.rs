//! Drag gesture events and a pan recognizer that produces them from raw
//! pointer input.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A state-tagged drag gesture report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragEvent {
    /// Pointer is down but has not moved enough to count as a drag.
    Possible,
    /// Drag recognized.
    Began,
    /// Movement since the previous report.
    Changed { delta: Vec2 },
    /// Pointer released. `location` is in container coordinates.
    Ended { location: Point },
    /// Drag interrupted by the host.
    Cancelled { location: Point },
    /// Press ended before a drag was recognized.
    Failed { location: Point },
}

impl DragEvent {
    /// Release location for terminal events.
    pub fn release_location(&self) -> Option<Point> {
        match *self {
            DragEvent::Ended { location }
            | DragEvent::Cancelled { location }
            | DragEvent::Failed { location } => Some(location),
            _ => None,
        }
    }
}

/// Phase of the widget's drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Recognizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PanState {
    #[default]
    Idle,
    Possible,
    Dragging,
}

/// Converts pointer down/move/up into [`DragEvent`]s.
///
/// Translation accumulates between reports and is reset to zero every time
/// a `Changed` event is emitted, so consumers can add each delta directly.
#[derive(Debug, Clone, Default)]
pub struct PanRecognizer {
    state: PanState,
    /// Distance the pointer must travel before a drag begins.
    slop: f64,
    last_position: Point,
    /// Movement since press while still in `Possible`.
    travelled: Vec2,
    translation: Vec2,
}

impl PanRecognizer {
    /// Create a recognizer that begins on the first movement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recognizer that waits for `slop` px of travel.
    pub fn with_slop(slop: f64) -> Self {
        Self {
            slop: slop.max(0.0),
            ..Self::default()
        }
    }

    /// Whether a drag is currently recognized.
    pub fn is_dragging(&self) -> bool {
        self.state == PanState::Dragging
    }

    /// Unreported translation.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Overwrite the unreported translation.
    pub fn set_translation(&mut self, translation: Vec2) {
        self.translation = translation;
    }

    /// Pointer pressed. Ignored if a gesture is already in progress.
    pub fn pointer_down(&mut self, position: Point) -> Vec<DragEvent> {
        if self.state != PanState::Idle {
            return vec![];
        }
        self.state = PanState::Possible;
        self.last_position = position;
        self.travelled = Vec2::ZERO;
        self.translation = Vec2::ZERO;
        vec![DragEvent::Possible]
    }

    /// Pointer moved.
    pub fn pointer_move(&mut self, position: Point) -> Vec<DragEvent> {
        let step = position - self.last_position;
        self.last_position = position;

        match self.state {
            PanState::Idle => vec![],
            PanState::Possible => {
                self.travelled += step;
                self.translation += step;
                if step == Vec2::ZERO || self.travelled.hypot() < self.slop {
                    return vec![];
                }
                self.state = PanState::Dragging;
                vec![DragEvent::Began, self.take_change()]
            }
            PanState::Dragging => {
                if step == Vec2::ZERO {
                    return vec![];
                }
                self.translation += step;
                vec![self.take_change()]
            }
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, position: Point) -> Vec<DragEvent> {
        self.finish(position, |location| DragEvent::Ended { location })
    }

    /// Gesture interrupted by the host (focus loss, pointer capture lost).
    pub fn cancel(&mut self, position: Point) -> Vec<DragEvent> {
        self.finish(position, |location| DragEvent::Cancelled { location })
    }

    fn finish(&mut self, location: Point, terminal: fn(Point) -> DragEvent) -> Vec<DragEvent> {
        let previous = std::mem::take(&mut self.state);
        self.translation = Vec2::ZERO;
        self.travelled = Vec2::ZERO;
        match previous {
            PanState::Idle => vec![],
            PanState::Possible => vec![DragEvent::Failed { location }],
            PanState::Dragging => vec![terminal(location)],
        }
    }

    fn take_change(&mut self) -> DragEvent {
        let delta = self.translation;
        self.set_translation(Vec2::ZERO);
        DragEvent::Changed { delta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_drag_release_sequence() {
        let mut pan = PanRecognizer::new();
        assert_eq!(pan.pointer_down(Point::new(10.0, 10.0)), vec![DragEvent::Possible]);
        assert_eq!(
            pan.pointer_move(Point::new(15.0, 12.0)),
            vec![
                DragEvent::Began,
                DragEvent::Changed {
                    delta: Vec2::new(5.0, 2.0)
                }
            ]
        );
        assert!(pan.is_dragging());
        assert_eq!(
            pan.pointer_move(Point::new(20.0, 20.0)),
            vec![DragEvent::Changed {
                delta: Vec2::new(5.0, 8.0)
            }]
        );
        assert_eq!(
            pan.pointer_up(Point::new(20.0, 20.0)),
            vec![DragEvent::Ended {
                location: Point::new(20.0, 20.0)
            }]
        );
        assert!(!pan.is_dragging());
    }

    #[test]
    fn test_translation_is_reset_after_each_report() {
        let mut pan = PanRecognizer::new();
        pan.pointer_down(Point::ZERO);
        pan.pointer_move(Point::new(3.0, 4.0));
        assert_eq!(pan.translation(), Vec2::ZERO);
        pan.pointer_move(Point::new(6.0, 8.0));
        assert_eq!(pan.translation(), Vec2::ZERO);
    }

    #[test]
    fn test_release_without_movement_fails() {
        let mut pan = PanRecognizer::new();
        pan.pointer_down(Point::new(1.0, 1.0));
        assert_eq!(
            pan.pointer_up(Point::new(1.0, 1.0)),
            vec![DragEvent::Failed {
                location: Point::new(1.0, 1.0)
            }]
        );
    }

    #[test]
    fn test_slop_delays_begin_and_keeps_travel() {
        let mut pan = PanRecognizer::with_slop(10.0);
        pan.pointer_down(Point::ZERO);
        assert!(pan.pointer_move(Point::new(3.0, 4.0)).is_empty());
        let events = pan.pointer_move(Point::new(6.0, 8.0));
        assert_eq!(
            events,
            vec![
                DragEvent::Began,
                DragEvent::Changed {
                    delta: Vec2::new(6.0, 8.0)
                }
            ]
        );
    }

    #[test]
    fn test_cancel_while_dragging() {
        let mut pan = PanRecognizer::new();
        pan.pointer_down(Point::ZERO);
        pan.pointer_move(Point::new(1.0, 0.0));
        assert_eq!(
            pan.cancel(Point::new(1.0, 0.0)),
            vec![DragEvent::Cancelled {
                location: Point::new(1.0, 0.0)
            }]
        );
    }

    #[test]
    fn test_events_without_press_are_ignored() {
        let mut pan = PanRecognizer::new();
        assert!(pan.pointer_move(Point::new(5.0, 5.0)).is_empty());
        assert!(pan.pointer_up(Point::new(5.0, 5.0)).is_empty());
    }

    #[test]
    fn test_release_location() {
        let location = Point::new(2.0, 3.0);
        assert_eq!(DragEvent::Failed { location }.release_location(), Some(location));
        assert_eq!(DragEvent::Began.release_location(), None);
    }
}
