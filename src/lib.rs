//! Chem Grid Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState};
pub use core::{
    generate, pick_point, CircleShape, ConnectionSession, GridLayout, GridLayoutError, GridModel,
    GridPoint, HitShape, PointId, RectShape, Segment, SessionState,
};
pub use shared::{EditorOptions, RenderScene};
