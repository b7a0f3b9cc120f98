//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::PointId;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppIntent {
    /// Gitterpunkt mit primärer Maustaste angeklickt
    PointClicked { point: PointId },
    /// Ausstehenden Punkt verwerfen (Rechtsklick auf die Zeichenfläche, Escape)
    ResetRequested,
    /// Undo: Letztes Segment entfernen (Cmd/Ctrl + Z)
    UndoRequested,
    /// Clear-Button gedrückt (öffnet Sicherheitsabfrage)
    ClearRequested,
    /// Sicherheitsabfrage mit "Yes" bestätigt
    ClearConfirmed,
    /// Sicherheitsabfrage mit "No" abgelehnt
    ClearCancelled,
    /// Anwendung beenden (Cmd/Ctrl + Q)
    ExitRequested,
}

/// Mutierende Commands, die der Controller auf den AppState anwendet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Punkt in der Verbindungs-Sitzung wählen
    SelectPoint { point: PointId },
    /// Ausstehenden Punkt verwerfen
    ResetPending,
    /// Zuletzt festgeschriebenes Segment entfernen
    UndoLastSegment,
    /// Sicherheitsabfrage für Clear anzeigen
    OpenClearConfirmation,
    /// Alle Segmente löschen
    ClearSegments,
    /// Sicherheitsabfrage schließen
    CloseClearConfirmation,
    /// Anwendung zum Beenden markieren
    RequestExit,
}
