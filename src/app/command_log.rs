//! Protokoll der Commands, die tatsächlich einen Handler erreicht haben.
//!
//! Intents, die das Mapping verwirft (z.B. Zeichnen bei offener
//! Clear-Abfrage), tauchen hier nicht auf. Die Sitzung selbst hat ihr
//! eigenes Undo und liest das Log nie.

use super::AppCommand;

/// Obergrenze; beim Erreichen wird die ältere Hälfte verworfen.
const MAX_ENTRIES: usize = 1000;

/// Ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.drain(..MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Anzahl ausgeführter Punktauswahlen (`SelectPoint`).
    pub fn select_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|command| matches!(command, AppCommand::SelectPoint { .. }))
            .count()
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_order() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::ResetPending);
        log.record(&AppCommand::UndoLastSegment);

        assert_eq!(
            log.entries(),
            &[AppCommand::ResetPending, AppCommand::UndoLastSegment]
        );
    }

    #[test]
    fn select_count_ignores_other_commands() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::SelectPoint {
            point: crate::core::PointId(0),
        });
        log.record(&AppCommand::ResetPending);
        log.record(&AppCommand::SelectPoint {
            point: crate::core::PointId(1),
        });

        assert_eq!(log.select_count(), 2);
        assert_eq!(
            log.last(),
            Some(&AppCommand::SelectPoint {
                point: crate::core::PointId(1)
            })
        );
    }

    #[test]
    fn record_drops_older_half_when_full() {
        let mut log = CommandLog::new();
        for _ in 0..MAX_ENTRIES {
            log.record(&AppCommand::ResetPending);
        }
        log.record(&AppCommand::RequestExit);

        assert_eq!(log.len(), MAX_ENTRIES / 2 + 1);
        assert_eq!(log.entries().last(), Some(&AppCommand::RequestExit));
    }
}
