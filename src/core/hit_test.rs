//! Hit-Test für Punkt-Widgets.
//!
//! Die Trefferform ist austauschbar: Punkte nutzen einen in die quadratischen
//! Widget-Grenzen eingeschriebenen Kreis statt des rechteckigen Standardbereichs.

use super::grid::{GridModel, PointId};
use glam::Vec2;

/// Trefferbereich eines Widgets, parametrisiert über dessen Grenzen.
pub trait HitShape {
    /// Prüft, ob `local` (relativ zur linken oberen Ecke) im Widget der Größe `size` liegt.
    fn contains(&self, local: Vec2, size: Vec2) -> bool;
}

/// Eingeschriebener Kreis mit Durchmesser = Widget-Breite.
///
/// Treffer gdw. `(x - d/2)² + (y - d/2)² <= (d/2)²`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleShape;

impl HitShape for CircleShape {
    fn contains(&self, local: Vec2, size: Vec2) -> bool {
        let radius = size.x * 0.5;
        (local - Vec2::splat(radius)).length_squared() <= radius * radius
    }
}

/// Rechteckiger Standard-Trefferbereich (`0 <= x < w`, `0 <= y < h`).
#[derive(Debug, Clone, Copy, Default)]
pub struct RectShape;

impl HitShape for RectShape {
    fn contains(&self, local: Vec2, size: Vec2) -> bool {
        local.x >= 0.0 && local.y >= 0.0 && local.x < size.x && local.y < size.y
    }
}

/// Liefert den ersten Punkt, dessen Widget `canvas_pos` unter `shape` enthält.
pub fn pick_point<S: HitShape + ?Sized>(
    grid: &GridModel,
    canvas_pos: Vec2,
    shape: &S,
) -> Option<PointId> {
    let size = Vec2::splat(grid.diameter());
    grid.points()
        .iter()
        .position(|p| shape.contains(canvas_pos - p.position, size))
        .map(PointId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::{GridLayout, GridModel};

    const D: f32 = 20.0;

    fn size() -> Vec2 {
        Vec2::splat(D)
    }

    #[test]
    fn center_is_always_a_hit() {
        for d in [1.0_f32, 2.0, 20.0, 77.5] {
            let s = Vec2::splat(d);
            assert!(CircleShape.contains(s * 0.5, s), "Mitte bei d={d}");
        }
    }

    #[test]
    fn corner_is_always_a_miss() {
        for d in [1.0_f32, 2.0, 20.0, 77.5] {
            assert!(!CircleShape.contains(Vec2::ZERO, Vec2::splat(d)), "Ecke bei d={d}");
        }
    }

    #[test]
    fn circle_boundary_is_inclusive() {
        // Oberster Punkt des Kreises liegt exakt auf dem Radius
        assert!(CircleShape.contains(Vec2::new(10.0, 0.0), size()));
        assert!(CircleShape.contains(Vec2::new(20.0, 10.0), size()));
    }

    #[test]
    fn circle_rejects_points_just_outside() {
        assert!(!CircleShape.contains(Vec2::new(2.0, 2.0), size()));
        assert!(!CircleShape.contains(Vec2::new(10.0, 20.5), size()));
    }

    #[test]
    fn rect_accepts_corner_that_circle_rejects() {
        let corner = Vec2::new(1.0, 1.0);
        assert!(RectShape.contains(corner, size()));
        assert!(!CircleShape.contains(corner, size()));
        assert!(!RectShape.contains(Vec2::new(20.0, 5.0), size()));
    }

    #[test]
    fn pick_point_finds_point_under_cursor() {
        let grid = GridModel::new(GridLayout::default(), D);
        let target = grid.point(PointId(13)).expect("Punkt 13 existiert");

        let hit = pick_point(&grid, grid.center(&target), &CircleShape);
        assert_eq!(hit, Some(PointId(13)));
    }

    #[test]
    fn pick_point_misses_widget_corner_and_gaps() {
        let grid = GridModel::new(GridLayout::default(), D);
        let target = grid.point(PointId(0)).expect("Punkt 0 existiert");

        assert_eq!(pick_point(&grid, target.position, &CircleShape), None);
        assert_eq!(
            pick_point(&grid, target.position + Vec2::new(50.0, 50.0), &CircleShape),
            None
        );
        assert_eq!(pick_point(&grid, target.position, &RectShape), Some(PointId(0)));
    }
}
