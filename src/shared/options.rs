//! Zentrale Konfiguration für den Chem Grid Editor.
//!
//! `EditorOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::grid::{
    GRID_COLUMNS, GRID_PADDING_HORIZONTAL, GRID_PADDING_VERTICAL, GRID_ROWS, GRID_SPACING,
    POINT_DIAMETER,
};
use crate::core::{GridLayout, GridLayoutError, GridModel};
use serde::{Deserialize, Serialize};

// ── Linien ──────────────────────────────────────────────────────────

/// Linienstärke festgeschriebener Segmente in Pixeln.
pub const LINE_WIDTH: f32 = 8.0;
/// Farbe der Segmente (RGBA: Schwarz).
pub const LINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Punkte ──────────────────────────────────────────────────────────

/// Füllfarbe der Punkte (RGBA: Grau).
pub const POINT_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Füllfarbe eines gedrückt gehaltenen Punkts (RGBA: Hellgrau).
pub const POINT_COLOR_ARMED: [f32; 4] = [0.75, 0.75, 0.75, 1.0];
/// Umrissfarbe der Punkte (RGBA: Schwarz).
pub const POINT_OUTLINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe des Rings um den ausstehenden Punkt (RGBA: Magenta).
pub const PENDING_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Ringstärke um den ausstehenden Punkt.
pub const PENDING_RING_WIDTH: f32 = 2.0;

// ── Fenster ─────────────────────────────────────────────────────────

/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Start-Fenstergröße [Breite, Höhe].
pub const WINDOW_SIZE: [f32; 2] = [1920.0, 1080.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start einlesbaren Editor-Optionen.
/// Wird als `chem_grid_editor.toml` neben der Binary gespeichert.
///
/// Fehlende Felder werden mit Standardwerten aufgefüllt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Gitter ──────────────────────────────────────────────────
    /// Anzahl Zeilen (nicht negativ)
    pub grid_rows: i32,
    /// Anzahl Spalten (nicht negativ)
    pub grid_columns: i32,
    /// Punktabstand in Pixeln (nicht negativ)
    pub grid_spacing: i32,
    /// Linker Rand in Pixeln (nicht negativ)
    pub grid_padding_horizontal: i32,
    /// Oberer Rand in Pixeln (nicht negativ)
    pub grid_padding_vertical: i32,

    // ── Punkte ──────────────────────────────────────────────────
    /// Durchmesser der Punkt-Widgets
    pub point_diameter: f32,
    pub point_color: [f32; 4],
    pub point_color_armed: [f32; 4],
    pub point_outline_color: [f32; 4],
    /// Ring um den ausstehenden Punkt
    pub pending_color: [f32; 4],
    pub pending_ring_width: f32,

    // ── Linien ──────────────────────────────────────────────────
    pub line_width: f32,
    pub line_color: [f32; 4],

    // ── Fenster ─────────────────────────────────────────────────
    pub background_color: [f32; 4],
    /// Start-Fenstergröße [Breite, Höhe]
    pub window_size: [f32; 2],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_rows: GRID_ROWS as i32,
            grid_columns: GRID_COLUMNS as i32,
            grid_spacing: GRID_SPACING as i32,
            grid_padding_horizontal: GRID_PADDING_HORIZONTAL as i32,
            grid_padding_vertical: GRID_PADDING_VERTICAL as i32,

            point_diameter: POINT_DIAMETER,
            point_color: POINT_COLOR,
            point_color_armed: POINT_COLOR_ARMED,
            point_outline_color: POINT_OUTLINE_COLOR,
            pending_color: PENDING_COLOR,
            pending_ring_width: PENDING_RING_WIDTH,

            line_width: LINE_WIDTH,
            line_color: LINE_COLOR,

            background_color: BACKGROUND_COLOR,
            window_size: WINDOW_SIZE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler oder ungültigem Gitter: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                return Self::default();
            }
        };

        let opts: Self = match toml::from_str(&content) {
            Ok(opts) => opts,
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                return Self::default();
            }
        };

        if let Err(e) = opts.validate() {
            log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
            return Self::default();
        }

        log::info!("Optionen geladen aus: {}", path.display());
        opts
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("chem_grid_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("chem_grid_editor.toml")
    }

    /// Validiert die Gitter-Werte und liefert das Layout.
    pub fn grid_layout(&self) -> Result<GridLayout, GridLayoutError> {
        GridLayout::from_signed(
            self.grid_rows,
            self.grid_columns,
            self.grid_spacing,
            self.grid_padding_horizontal,
            self.grid_padding_vertical,
        )
    }

    /// Prüft alle Werte, die das Gitter bestimmen.
    pub fn validate(&self) -> Result<(), GridLayoutError> {
        self.grid_layout()?;
        if !(self.point_diameter.is_finite() && self.point_diameter > 0.0) {
            return Err(GridLayoutError::InvalidDiameter(self.point_diameter));
        }
        Ok(())
    }

    /// Erzeugt das Gitter-Modell aus den Optionen.
    pub fn grid_model(&self) -> Result<GridModel, GridLayoutError> {
        self.validate()?;
        Ok(GridModel::new(self.grid_layout()?, self.point_diameter))
    }
}
