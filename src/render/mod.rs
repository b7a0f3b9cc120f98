//! Renderer: Zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Zeichenreihenfolge: Hintergrund, Punkte, Ring um den ausstehenden Punkt,
//! danach alle Segmente über den Punkten.

use crate::shared::RenderScene;
use eframe::egui;
use eframe::egui::epaint;

/// Konvertiert eine RGBA-Option (0.0–1.0, sRGB) in eine egui-Farbe.
pub fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(rgba[0]),
        channel(rgba[1]),
        channel(rgba[2]),
        channel(rgba[3]),
    )
}

/// Zeichnet Hintergrund und Szene in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, color32(scene.options.background_color));
    painter.extend(scene_shapes(rect.min, scene));
}

/// Baut alle Shapes der Szene relativ zum Canvas-Ursprung `origin`.
pub fn scene_shapes(origin: egui::Pos2, scene: &RenderScene) -> Vec<egui::Shape> {
    let grid = &scene.grid;
    let opts = &scene.options;
    let to_screen = |v: glam::Vec2| egui::pos2(origin.x + v.x, origin.y + v.y);
    let radius = grid.diameter() * 0.5;

    let mut shapes = Vec::with_capacity(grid.len() + scene.segments.len() + 1);

    // Punkte (gedrückter Punkt mit eigener Füllfarbe)
    let outline = egui::Stroke::new(1.0, color32(opts.point_outline_color));
    for (index, point) in grid.points().iter().enumerate() {
        let is_armed = scene.armed.is_some_and(|id| id.0 == index);
        let fill = if is_armed {
            opts.point_color_armed
        } else {
            opts.point_color
        };
        shapes.push(egui::Shape::Circle(epaint::CircleShape {
            center: to_screen(grid.center(point)),
            radius: radius - 0.5,
            fill: color32(fill),
            stroke: outline,
        }));
    }

    if let Some(pending) = scene.pending {
        shapes.push(egui::Shape::circle_stroke(
            to_screen(grid.center(&pending)),
            radius + opts.pending_ring_width + 1.0,
            egui::Stroke::new(opts.pending_ring_width, color32(opts.pending_color)),
        ));
    }

    if scene.has_segments() {
        let stroke = egui::Stroke::new(opts.line_width, color32(opts.line_color));
        for segment in &scene.segments {
            shapes.push(egui::Shape::line_segment(
                [
                    to_screen(grid.center(&segment.start)),
                    to_screen(grid.center(&segment.end)),
                ],
                stroke,
            ));
        }
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};
    use crate::core::PointId;

    #[test]
    fn color32_maps_unit_channels_to_bytes() {
        assert_eq!(color32([1.0, 0.0, 0.0, 1.0]), egui::Color32::RED);
        assert_eq!(
            color32([0.5, 0.5, 0.5, 1.0]),
            egui::Color32::from_rgb(128, 128, 128)
        );
        assert_eq!(color32([2.0, -1.0, 0.0, 1.0]), egui::Color32::RED);
    }

    #[test]
    fn idle_scene_contains_only_points() {
        let state = AppState::new();
        let scene = build_render_scene(&state, None);

        let shapes = scene_shapes(egui::Pos2::ZERO, &scene);

        assert_eq!(shapes.len(), state.grid.len());
    }

    #[test]
    fn segments_are_drawn_after_points_between_centers() {
        let mut state = AppState::new();
        let a = state.grid.point(PointId(0)).expect("Punkt 0");
        let b = state.grid.point(PointId(1)).expect("Punkt 1");
        state.session.select_point(a);
        state.session.select_point(b);
        let scene = build_render_scene(&state, None);

        let shapes = scene_shapes(egui::pos2(0.0, 40.0), &scene);

        // Punkte + Ring um den ausstehenden Punkt + ein Segment
        assert_eq!(shapes.len(), state.grid.len() + 2);
        let Some(egui::Shape::LineSegment { points, stroke }) = shapes.last() else {
            panic!("Letztes Shape sollte ein Segment sein");
        };
        let center_a = state.grid.center(&a);
        assert_eq!(points[0], egui::pos2(center_a.x, center_a.y + 40.0));
        assert_eq!(stroke.width, state.options.line_width);
    }

    #[test]
    fn armed_point_uses_armed_fill() {
        let state = AppState::new();
        let scene = build_render_scene(&state, Some(PointId(2)));

        let shapes = scene_shapes(egui::Pos2::ZERO, &scene);

        let fill_of = |index: usize| match &shapes[index] {
            egui::Shape::Circle(circle) => circle.fill,
            other => panic!("Kreis erwartet, gefunden: {other:?}"),
        };
        assert_eq!(fill_of(2), color32(state.options.point_color_armed));
        assert_eq!(fill_of(3), color32(state.options.point_color));
    }
}
