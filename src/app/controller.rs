//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::PointId;
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Verbindungs-Sitzung ===
            AppCommand::SelectPoint { point } => handlers::session::select_point(state, point)?,
            AppCommand::ResetPending => handlers::session::reset(state),
            AppCommand::UndoLastSegment => handlers::session::undo(state),
            AppCommand::ClearSegments => handlers::session::clear(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenClearConfirmation => handlers::dialog::open_clear_confirmation(state),
            AppCommand::CloseClearConfirmation => {
                handlers::dialog::close_clear_confirmation(state)
            }
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, armed: Option<PointId>) -> RenderScene {
        render_scene::build(state, armed)
    }
}
