//! Core-Domänentypen: Gitter, Hit-Test, Verbindungs-Sitzung.

/// Statisches Punktgitter
pub mod grid;
pub mod hit_test;
pub mod session;

pub use grid::{generate, GridLayout, GridLayoutError, GridModel, GridPoint, PointId};
pub use hit_test::{pick_point, CircleShape, HitShape, RectShape};
pub use session::{ConnectionSession, Segment, SessionState};
