//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Solange die Clear-Abfrage offen ist, blockiert sie wie ein modaler Dialog
/// alle Intents, die die Sitzung verändern würden.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    if state.ui.show_clear_confirmation && blocked_by_clear_dialog(&intent) {
        log::debug!("{:?} ignoriert: Clear-Abfrage ist offen", intent);
        return Vec::new();
    }

    match intent {
        AppIntent::PointClicked { point } => vec![AppCommand::SelectPoint { point }],
        AppIntent::ResetRequested => vec![AppCommand::ResetPending],
        AppIntent::UndoRequested => vec![AppCommand::UndoLastSegment],
        AppIntent::ClearRequested => vec![AppCommand::OpenClearConfirmation],
        AppIntent::ClearConfirmed => {
            // Nur eine tatsächlich angezeigte Abfrage darf löschen
            if state.ui.show_clear_confirmation {
                vec![
                    AppCommand::ClearSegments,
                    AppCommand::CloseClearConfirmation,
                ]
            } else {
                Vec::new()
            }
        }
        AppIntent::ClearCancelled => vec![AppCommand::CloseClearConfirmation],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

fn blocked_by_clear_dialog(intent: &AppIntent) -> bool {
    matches!(
        intent,
        AppIntent::PointClicked { .. }
            | AppIntent::ResetRequested
            | AppIntent::UndoRequested
            | AppIntent::ClearRequested
    )
}
