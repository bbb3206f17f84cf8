//! Dock area: shows a [`DraggableWidget`] inside an egui region.

use cornerdock_core::{Animator, DragEvent, DraggableWidget};
use egui::{Color32, CornerRadius, Id, Pos2, Response, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::convert;
use crate::{sizing, theme};

/// Visual style of the docked widget.
#[derive(Clone, Debug)]
pub struct DockStyle {
    /// Fill color
    pub fill: Color32,
    /// Corner radius
    pub corner_radius: u8,
    /// Outline drawn while the widget is being dragged
    pub drag_stroke: Stroke,
}

impl Default for DockStyle {
    fn default() -> Self {
        Self {
            fill: theme::DOCK_FILL,
            corner_radius: sizing::CORNER_RADIUS,
            drag_stroke: Stroke::new(2.0, theme::ACCENT),
        }
    }
}

/// Drag state reported by egui for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameDrag {
    pub started: bool,
    pub delta: Vec2,
    pub stopped: bool,
    /// Pointer position at release, relative to the container origin.
    pub release: Option<Pos2>,
}

impl FrameDrag {
    fn from_response(response: &Response, ui: &Ui, origin: Pos2) -> Self {
        let stopped = response.drag_stopped();
        let release = stopped
            .then(|| {
                response
                    .interact_pointer_pos()
                    .or_else(|| ui.input(|i| i.pointer.latest_pos()))
            })
            .flatten()
            .map(|pos| (pos - origin).to_pos2());
        Self {
            started: response.drag_started(),
            delta: if response.dragged() { response.drag_delta() } else { Vec2::ZERO },
            stopped,
            release,
        }
    }

    /// Translate into gesture events, in the order the widget expects.
    pub fn events(&self) -> Vec<DragEvent> {
        let mut events = Vec::new();
        if self.started {
            events.push(DragEvent::Began);
        }
        if self.delta != Vec2::ZERO {
            events.push(DragEvent::Changed {
                delta: convert::to_vec2(self.delta),
            });
        }
        if self.stopped {
            match self.release {
                Some(pos) => events.push(DragEvent::Ended {
                    location: convert::to_point(pos),
                }),
                // Pointer left the window; nothing to classify.
                None => log::trace!("drag stopped without a pointer position"),
            }
        }
        events
    }
}

/// Hosts one draggable widget in the region given by `ui.max_rect()`.
pub struct DockArea {
    id: Id,
    style: DockStyle,
}

impl DockArea {
    /// Create a dock area with a unique id source.
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        Self {
            id: Id::new(id_salt),
            style: DockStyle::default(),
        }
    }

    /// Set the visual style.
    pub fn style(mut self, style: DockStyle) -> Self {
        self.style = style;
        self
    }

    /// Attach or re-layout the widget, route this frame's drag input through
    /// it, advance the snap animation, and paint it.
    pub fn show<A: Animator>(self, ui: &mut Ui, widget: &mut DraggableWidget<A>) -> Response {
        let container = ui.max_rect();
        let origin = container.min;
        let container_size = convert::to_size(container.size());
        if widget.is_attached() {
            widget.layout(container_size);
        } else {
            widget.attach(container_size);
        }

        let rect = convert::to_rect(widget.frame()).translate(origin.to_vec2());
        let response = ui.interact(rect, self.id, Sense::drag());
        for event in FrameDrag::from_response(&response, ui, origin).events() {
            widget.handle_drag(event);
        }

        let dt = ui.input(|i| i.stable_dt) as f64;
        if widget.tick(dt) || widget.is_dragging() {
            ui.ctx().request_repaint();
        }

        let rect = convert::to_rect(widget.frame()).translate(origin.to_vec2());
        let radius = CornerRadius::same(self.style.corner_radius);
        ui.painter().rect_filled(rect, radius, self.style.fill);
        if widget.is_dragging() {
            ui.painter()
                .rect_stroke(rect, radius, self.style.drag_stroke, StrokeKind::Inside);
        }

        response
    }
}
