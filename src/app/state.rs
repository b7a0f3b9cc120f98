//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{ConnectionSession, GridLayoutError, GridModel};
use crate::shared::EditorOptions;
use std::sync::Arc;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob die Clear-Sicherheitsabfrage angezeigt wird
    pub show_clear_confirmation: bool,
    /// Optionale Statusnachricht für die Status-Bar
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen neuen UI-Zustand ohne offene Dialoge.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Statisches Punktgitter (Arc für O(1)-Clone in RenderScene)
    pub grid: Arc<GridModel>,
    /// Verbindungs-Sitzung (ausstehender Punkt + Segmente)
    pub session: ConnectionSession,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Gitter, Farben, Breiten)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Gitter
    pub fn new() -> Self {
        Self {
            grid: Arc::new(GridModel::default()),
            session: ConnectionSession::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Erstellt einen App-State, dessen Gitter aus den Optionen erzeugt wird.
    pub fn with_options(options: EditorOptions) -> Result<Self, GridLayoutError> {
        let grid = options.grid_model()?;
        Ok(Self {
            grid: Arc::new(grid),
            options,
            ..Self::new()
        })
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.session.segment_count()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.session.segment_count() > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
