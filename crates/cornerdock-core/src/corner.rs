//! Corner positions, edge padding, and the anchor math that places a
//! widget's center inside its container.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Corner of the container a widget can dock to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Corner {
    /// No corner. Positioning is skipped.
    None,
    TopLeft,
    TopRight,
    #[default]
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// The four dockable corners, in reading order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Pick the corner for a release point by splitting the container along
    /// its midlines.
    ///
    /// This is a quadrant test, not a distance search: a point exactly on a
    /// midline belongs to the left/top half.
    pub fn from_quadrant(location: Point, container: Size) -> Self {
        let right = location.x > container.width / 2.0;
        let bottom = location.y > container.height / 2.0;
        match (right, bottom) {
            (false, false) => Corner::TopLeft,
            (true, false) => Corner::TopRight,
            (false, true) => Corner::BottomLeft,
            (true, true) => Corner::BottomRight,
        }
    }
}

/// Insets kept between the widget and the container edges.
///
/// Values are not validated; negative insets push the widget past the edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Padding {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create padding from individual insets.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on every edge.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Compute the center point of a widget of size `widget` docked at `corner`
/// of a container of size `container`.
///
/// `Corner::None` yields the origin.
pub fn compute_anchor(corner: Corner, padding: Padding, container: Size, widget: Size) -> Point {
    let half_w = widget.width / 2.0;
    let half_h = widget.height / 2.0;
    let left = padding.left + half_w;
    let right = container.width - half_w - padding.right;
    let top = padding.top + half_h;
    let bottom = container.height - half_h - padding.bottom;

    match corner {
        Corner::TopLeft => Point::new(left, top),
        Corner::TopRight => Point::new(right, top),
        Corner::BottomLeft => Point::new(left, bottom),
        Corner::BottomRight => Point::new(right, bottom),
        Corner::None => Point::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size::new(300.0, 600.0);
    const WIDGET: Size = Size::new(120.0, 240.0);

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < f64::EPSILON && (actual.y - y).abs() < f64::EPSILON,
            "expected ({x}, {y}), got {actual:?}"
        );
    }

    #[test]
    fn test_default_corner_is_bottom_left() {
        assert_eq!(Corner::default(), Corner::BottomLeft);
        assert_eq!(Padding::default(), Padding::ZERO);
    }

    #[test]
    fn test_anchor_closed_forms() {
        let padding = Padding::new(5.0, 7.0, 11.0, 13.0);
        assert_point(
            compute_anchor(Corner::TopLeft, padding, CONTAINER, WIDGET),
            7.0 + 60.0,
            5.0 + 120.0,
        );
        assert_point(
            compute_anchor(Corner::TopRight, padding, CONTAINER, WIDGET),
            300.0 - 60.0 - 13.0,
            5.0 + 120.0,
        );
        assert_point(
            compute_anchor(Corner::BottomLeft, padding, CONTAINER, WIDGET),
            7.0 + 60.0,
            600.0 - 120.0 - 11.0,
        );
        assert_point(
            compute_anchor(Corner::BottomRight, padding, CONTAINER, WIDGET),
            300.0 - 60.0 - 13.0,
            600.0 - 120.0 - 11.0,
        );
    }

    #[test]
    fn test_anchors_stay_inside_container() {
        for corner in Corner::ALL {
            let frame = kurbo::Rect::from_center_size(
                compute_anchor(corner, Padding::ZERO, CONTAINER, WIDGET),
                WIDGET,
            );
            assert!(frame.x0 >= 0.0 && frame.y0 >= 0.0, "{corner:?} {frame:?}");
            assert!(frame.x1 <= CONTAINER.width && frame.y1 <= CONTAINER.height);
            // The anchor's own quadrant is the corner it was computed for.
            assert_eq!(Corner::from_quadrant(frame.center(), CONTAINER), corner);
        }
    }

    #[test]
    fn test_none_anchor_is_origin() {
        let anchor = compute_anchor(Corner::None, Padding::uniform(10.0), CONTAINER, WIDGET);
        assert_eq!(anchor, Point::ZERO);
    }

    #[test]
    fn test_reference_scenario_anchors() {
        let padding = Padding::uniform(10.0);
        assert_point(
            compute_anchor(Corner::BottomLeft, padding, CONTAINER, WIDGET),
            70.0,
            470.0,
        );
        assert_point(
            compute_anchor(Corner::TopRight, padding, CONTAINER, WIDGET),
            230.0,
            130.0,
        );
    }

    #[test]
    fn test_quadrant_classification() {
        assert_eq!(Corner::from_quadrant(Point::new(10.0, 10.0), CONTAINER), Corner::TopLeft);
        assert_eq!(Corner::from_quadrant(Point::new(250.0, 50.0), CONTAINER), Corner::TopRight);
        assert_eq!(Corner::from_quadrant(Point::new(20.0, 590.0), CONTAINER), Corner::BottomLeft);
        assert_eq!(Corner::from_quadrant(Point::new(290.0, 590.0), CONTAINER), Corner::BottomRight);
    }

    #[test]
    fn test_quadrant_midlines_resolve_left_and_top() {
        assert_eq!(Corner::from_quadrant(Point::new(150.0, 300.0), CONTAINER), Corner::TopLeft);
        assert_eq!(Corner::from_quadrant(Point::new(150.1, 300.0), CONTAINER), Corner::TopRight);
        assert_eq!(Corner::from_quadrant(Point::new(150.0, 300.1), CONTAINER), Corner::BottomLeft);
    }

    #[test]
    fn test_quadrant_ignores_out_of_bounds_distance() {
        // Far outside the container still classifies by half-plane.
        assert_eq!(Corner::from_quadrant(Point::new(-500.0, 5000.0), CONTAINER), Corner::BottomLeft);
    }

    #[test]
    fn test_corner_serde_names() {
        let json = serde_json::to_string(&Corner::TopRight).unwrap();
        assert_eq!(json, "\"topRight\"");
        let parsed: Corner = serde_json::from_str("\"bottomRight\"").unwrap();
        assert_eq!(parsed, Corner::BottomRight);
    }

    #[test]
    fn test_padding_partial_deserialize() {
        let padding: Padding = serde_json::from_str(r#"{"top": 4.0}"#).unwrap();
        assert_eq!(padding, Padding::new(4.0, 0.0, 0.0, 0.0));
        assert!(serde_json::from_str::<Padding>(r#"{"leftt": 4.0}"#).is_err());
    }
}
