//! Conversions between kurbo geometry (f64) and egui geometry (f32).

use egui::{Pos2, Rect, Vec2};

pub fn to_pos2(point: kurbo::Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

pub fn to_rect(rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(rect.x0 as f32, rect.y0 as f32),
        Pos2::new(rect.x1 as f32, rect.y1 as f32),
    )
}

pub fn to_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(pos.x as f64, pos.y as f64)
}

pub fn to_vec2(vec: Vec2) -> kurbo::Vec2 {
    kurbo::Vec2::new(vec.x as f64, vec.y as f64)
}

pub fn to_size(vec: Vec2) -> kurbo::Size {
    kurbo::Size::new(vec.x as f64, vec.y as f64)
}
