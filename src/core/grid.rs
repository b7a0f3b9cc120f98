//! Gitter-Modell: feste Menge auswählbarer Punkte in Zeilen und Spalten.
//!
//! Das Gitter wird einmalig beim Start erzeugt und danach nicht mehr verändert.
//! Positionen sind Canvas-Pixel relativ zur linken oberen Ecke der Zeichenfläche.

use glam::Vec2;
use thiserror::Error;

/// Standard-Zeilenanzahl des Gitters.
pub const GRID_ROWS: u32 = 10;
/// Standard-Spaltenanzahl des Gitters.
pub const GRID_COLUMNS: u32 = 25;
/// Abstand zwischen benachbarten Punkten in Pixeln.
pub const GRID_SPACING: u32 = 96;
/// Horizontaler Rand links vom ersten Punkt.
pub const GRID_PADDING_HORIZONTAL: u32 = 20;
/// Vertikaler Rand oberhalb der ersten Zeile.
pub const GRID_PADDING_VERTICAL: u32 = 150;
/// Durchmesser eines Punkt-Widgets in Pixeln.
pub const POINT_DIAMETER: f32 = 20.0;

/// Obergrenze für `rows * columns`.
pub const MAX_GRID_POINTS: u64 = 1_000_000;
/// Obergrenze für die Ausdehnung der Zeichenfläche je Achse in Pixeln.
/// Bis 2^24 sind ganzzahlige Pixel in `f32` exakt.
pub const MAX_CANVAS_EXTENT: u64 = 1 << 24;

/// Index eines Punkts im [`GridModel`] (Spalten-Major-Reihenfolge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// Ein unveränderlicher Gitterpunkt.
///
/// Identität ist die Zelle `(row, column)`; `position` ist die daraus
/// abgeleitete linke obere Ecke des Punkt-Widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// Zeile (0-basiert)
    pub row: u32,
    /// Spalte (0-basiert)
    pub column: u32,
    /// Linke obere Ecke des Widgets in Canvas-Pixeln
    pub position: Vec2,
}

impl GridPoint {
    /// Erstellt einen Gitterpunkt.
    pub fn new(row: u32, column: u32, position: Vec2) -> Self {
        Self {
            row,
            column,
            position,
        }
    }

    /// Gitterzelle `(row, column)`.
    pub fn cell(&self) -> (u32, u32) {
        (self.row, self.column)
    }
}

/// Fehler bei der Validierung konfigurierter Gitter-Parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridLayoutError {
    /// Ein Layout-Wert ist negativ.
    #[error("Gitter-Parameter `{field}` darf nicht negativ sein (Wert: {value})")]
    Negative {
        /// Name des Konfigurationsfelds
        field: &'static str,
        /// Konfigurierter Wert
        value: i32,
    },
    /// Der Punktdurchmesser ist nicht positiv oder nicht endlich.
    #[error("Punktdurchmesser muss positiv sein (Wert: {0})")]
    InvalidDiameter(f32),
    /// Zu viele Punkte (`rows * columns` über [`MAX_GRID_POINTS`]).
    #[error("Gitter mit {rows} × {columns} Punkten ist zu groß (max. {})", MAX_GRID_POINTS)]
    TooLarge {
        /// Konfigurierte Zeilen
        rows: u32,
        /// Konfigurierte Spalten
        columns: u32,
    },
    /// Rand plus Punktabstände überschreiten [`MAX_CANVAS_EXTENT`].
    #[error("Zeichenfläche wäre {extent} px breit oder hoch (max. {})", MAX_CANVAS_EXTENT)]
    CanvasTooLarge {
        /// Größere der beiden Achsen-Ausdehnungen
        extent: u64,
    },
}

/// Validierte Layout-Parameter des Gitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Anzahl Zeilen
    pub rows: u32,
    /// Anzahl Spalten
    pub columns: u32,
    /// Punktabstand in Pixeln
    pub spacing: u32,
    /// Horizontaler Rand
    pub h_padding: u32,
    /// Vertikaler Rand
    pub v_padding: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            columns: GRID_COLUMNS,
            spacing: GRID_SPACING,
            h_padding: GRID_PADDING_HORIZONTAL,
            v_padding: GRID_PADDING_VERTICAL,
        }
    }
}

impl GridLayout {
    /// Validiert vorzeichenbehaftete Konfigurationswerte.
    ///
    /// Jeder negative Wert wird mit Feldnamen als Fehler gemeldet. Danach
    /// werden Punktanzahl und Ausdehnung gegen [`MAX_GRID_POINTS`] und
    /// [`MAX_CANVAS_EXTENT`] geprüft, damit `generate` nie überläuft.
    pub fn from_signed(
        rows: i32,
        columns: i32,
        spacing: i32,
        h_padding: i32,
        v_padding: i32,
    ) -> Result<Self, GridLayoutError> {
        fn non_negative(field: &'static str, value: i32) -> Result<u32, GridLayoutError> {
            u32::try_from(value).map_err(|_| GridLayoutError::Negative { field, value })
        }

        let layout = Self {
            rows: non_negative("grid_rows", rows)?,
            columns: non_negative("grid_columns", columns)?,
            spacing: non_negative("grid_spacing", spacing)?,
            h_padding: non_negative("grid_padding_horizontal", h_padding)?,
            v_padding: non_negative("grid_padding_vertical", v_padding)?,
        };

        if u64::from(layout.rows) * u64::from(layout.columns) > MAX_GRID_POINTS {
            return Err(GridLayoutError::TooLarge {
                rows: layout.rows,
                columns: layout.columns,
            });
        }

        let extent = layout
            .pixel_extent(layout.columns, layout.h_padding)
            .max(layout.pixel_extent(layout.rows, layout.v_padding));
        if extent > MAX_CANVAS_EXTENT {
            return Err(GridLayoutError::CanvasTooLarge { extent });
        }

        Ok(layout)
    }

    /// Doppelter Rand plus Abstände zwischen `count` Punkten, ohne Widget.
    fn pixel_extent(&self, count: u32, padding: u32) -> u64 {
        2 * u64::from(padding) + u64::from(self.spacing) * u64::from(count.saturating_sub(1))
    }

    /// Gesamtzahl der Punkte.
    pub fn point_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// Erzeugt alle Gitterpunkte in Spalten-Major-Reihenfolge.
///
/// Punkt `(row, column)` liegt bei
/// `(spacing * column + h_padding, spacing * row + v_padding)`.
pub fn generate(
    rows: u32,
    columns: u32,
    spacing: u32,
    h_padding: u32,
    v_padding: u32,
) -> Vec<GridPoint> {
    let mut points = Vec::with_capacity(rows as usize * columns as usize);
    let spacing = spacing as f32;

    for column in 0..columns {
        for row in 0..rows {
            let x = spacing * column as f32 + h_padding as f32;
            let y = spacing * row as f32 + v_padding as f32;
            points.push(GridPoint::new(row, column, Vec2::new(x, y)));
        }
    }

    points
}

/// Statisches Gitter mit Layout, Widget-Durchmesser und allen Punkten.
#[derive(Debug, Clone)]
pub struct GridModel {
    layout: GridLayout,
    diameter: f32,
    points: Vec<GridPoint>,
}

impl Default for GridModel {
    fn default() -> Self {
        Self::new(GridLayout::default(), POINT_DIAMETER)
    }
}

impl GridModel {
    /// Erzeugt das Gitter aus validiertem Layout.
    ///
    /// `diameter` muss bereits geprüft sein (siehe
    /// [`crate::shared::EditorOptions::grid_model`]).
    pub fn new(layout: GridLayout, diameter: f32) -> Self {
        let points = generate(
            layout.rows,
            layout.columns,
            layout.spacing,
            layout.h_padding,
            layout.v_padding,
        );

        Self {
            layout,
            diameter,
            points,
        }
    }

    /// Layout-Parameter.
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Widget-Durchmesser in Pixeln.
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// Alle Punkte in Id-Reihenfolge.
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Liefert den Punkt zu einer Id.
    pub fn point(&self, id: PointId) -> Option<GridPoint> {
        self.points.get(id.0).copied()
    }

    /// Sucht die Id eines Punkts anhand seiner Zelle.
    pub fn id_of(&self, row: u32, column: u32) -> Option<PointId> {
        if row >= self.layout.rows || column >= self.layout.columns {
            return None;
        }
        Some(PointId(column as usize * self.layout.rows as usize + row as usize))
    }

    /// Widget-Mittelpunkt eines Punkts (Endpunkt gezeichneter Segmente).
    pub fn center(&self, point: &GridPoint) -> Vec2 {
        point.position + Vec2::splat(self.diameter * 0.5)
    }

    /// Quadratische Widget-Grenzen `(min, max)` eines Punkts.
    pub fn point_bounds(&self, id: PointId) -> Option<(Vec2, Vec2)> {
        self.point(id)
            .map(|p| (p.position, p.position + Vec2::splat(self.diameter)))
    }

    /// Kleinste Zeichenfläche, die das ganze Gitter mit symmetrischem Rand zeigt.
    pub fn canvas_size(&self) -> Vec2 {
        let l = self.layout;
        let extent = |count: u32, padding: u32| {
            let span = count.saturating_sub(1) as f32 * l.spacing as f32;
            let widget = if count > 0 { self.diameter } else { 0.0 };
            2.0 * padding as f32 + span + widget
        };
        Vec2::new(extent(l.columns, l.h_padding), extent(l.rows, l.v_padding))
    }
}
