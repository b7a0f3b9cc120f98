//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{GridModel, GridPoint, PointId, Segment};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Das statische Punktgitter (Arc für O(1)-Clone pro Frame)
    pub grid: Arc<GridModel>,
    /// Festgeschriebene Segmente in Einfügereihenfolge
    pub segments: Vec<Segment>,
    /// Ausstehender Punkt (für Hervorhebung)
    pub pending: Option<GridPoint>,
    /// Punkt, über dem die primäre Maustaste gerade gedrückt ist
    pub armed: Option<PointId>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob Segmente zu zeichnen sind.
    pub fn has_segments(&self) -> bool {
        !self.segments.is_empty()
    }
}
