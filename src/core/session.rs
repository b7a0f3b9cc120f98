//! Verbindungs-Sitzung: ausstehender Punkt und Liste festgeschriebener Segmente.
//!
//! Zustandsmaschine mit zwei beobachtbaren Zuständen:
//! - `Idle` — kein ausstehender Punkt
//! - `Pending` — ein Punkt gewählt, wartet auf den zweiten
//!
//! Nach jedem festgeschriebenen Segment wird dessen Endpunkt zum neuen
//! ausstehenden Punkt (Verkettung zu einem Linienzug).

use super::grid::GridPoint;

/// Festgeschriebene gerade Verbindung zwischen zwei Gitterpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Startpunkt
    pub start: GridPoint,
    /// Endpunkt
    pub end: GridPoint,
}

impl Segment {
    /// Erstellt ein Segment.
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }

    /// Start und Ende liegen in derselben Zelle (Länge 0).
    pub fn is_degenerate(&self) -> bool {
        self.start.cell() == self.end.cell()
    }
}

/// Beobachtbarer Zustand der Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Kein ausstehender Punkt
    Idle,
    /// Ein Punkt gewählt, wartet auf den zweiten
    Pending,
}

/// Mutierbarer Verbindungszustand eines Editor-Fensters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionSession {
    pending: Option<GridPoint>,
    segments: Vec<Segment>,
}

impl ConnectionSession {
    /// Erstellt eine leere Sitzung im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wählt einen Punkt.
    ///
    /// Im Zustand `Idle` wird `point` nur vorgemerkt. Im Zustand `Pending` wird
    /// ein Segment vom ausstehenden Punkt zu `point` festgeschrieben und `point`
    /// wird der neue ausstehende Punkt. Gibt das festgeschriebene Segment zurück.
    pub fn select_point(&mut self, point: GridPoint) -> Option<Segment> {
        let committed = self.pending.map(|start| {
            let segment = Segment::new(start, point);
            self.segments.push(segment);
            segment
        });
        self.pending = Some(point);
        committed
    }

    /// Verwirft den ausstehenden Punkt. Segmente bleiben unverändert.
    pub fn reset(&mut self) {
        self.pending = None;
    }

    /// Entfernt das zuletzt festgeschriebene Segment (LIFO).
    ///
    /// Der ausstehende Punkt bleibt unberührt. Auf leerer Liste ein No-op.
    pub fn undo(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Leert die Segmentliste und verwirft den ausstehenden Punkt.
    ///
    /// Die Sicherheitsabfrage liegt beim Aufrufer.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.pending = None;
    }

    pub fn pending(&self) -> Option<GridPoint> {
        self.pending
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn state(&self) -> SessionState {
        if self.pending.is_some() {
            SessionState::Pending
        } else {
            SessionState::Idle
        }
    }
}
