//! Canvas-Input-Handling: Maus-Events und Tastatur → AppIntent.
//!
//! Ein einziger Handler für die ganze Zeichenfläche: Klicks werden per
//! Kreis-Hit-Test auf eine `PointId` abgebildet und zentral geroutet.

use super::keyboard;
use crate::app::AppIntent;
use crate::core::{pick_point, CircleShape, GridModel, PointId};
use glam::Vec2;

/// Rechnet eine Bildschirmposition in Canvas-Koordinaten um.
pub(crate) fn screen_pos_to_canvas(pos: egui::Pos2, origin: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x - origin.x, pos.y - origin.y)
}

/// Verwaltet den transienten Input-Zustand der Zeichenfläche.
#[derive(Debug, Default)]
pub struct InputState {
    /// Punkt, auf dem die primäre Maustaste gedrückt wurde, solange
    /// der Zeiger noch über ihm steht
    armed: Option<PointId>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { armed: None }
    }

    /// Aktuell gedrückter Punkt (nur für die Darstellung).
    pub fn armed(&self) -> Option<PointId> {
        self.armed
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `response` muss die Response der gesamten Zeichenfläche sein;
    /// deren `rect.min` ist der Canvas-Ursprung.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        grid: &GridModel,
        clear_dialog_open: bool,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui, clear_dialog_open);
        let origin = response.rect.min;

        let (primary_down, press_origin) =
            ui.input(|i| (i.pointer.primary_down(), i.pointer.press_origin()));
        let pick =
            |pos: egui::Pos2| pick_point(grid, screen_pos_to_canvas(pos, origin), &CircleShape);

        // Nur der beim Drücken getroffene Punkt, und nur solange er unter dem Zeiger bleibt
        self.armed = if primary_down {
            let pressed_on = press_origin.and_then(pick);
            let hovered = response.hover_pos().and_then(pick);
            pressed_on.filter(|point| hovered == Some(*point))
        } else {
            None
        };

        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let canvas_pos = screen_pos_to_canvas(pointer_pos, origin);
                match pick(pointer_pos) {
                    Some(point) => events.push(AppIntent::PointClicked { point }),
                    None => log::debug!(
                        "Klick bei ({:.1}, {:.1}) trifft keinen Punkt",
                        canvas_pos.x,
                        canvas_pos.y
                    ),
                }
            }
        }

        if response.clicked_by(egui::PointerButton::Secondary) {
            events.push(AppIntent::ResetRequested);
        }

        events
    }
}
