use crate::state::AppState;
use crate::workflow::UiEvent;

/// Blocking message window, used for the empty-input prompt and report errors.
pub fn draw_alert(ctx: &egui::Context, state: &AppState, events: &mut Vec<UiEvent>) {
    let Some(message) = &state.alert else {
        return;
    };

    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                events.push(UiEvent::DismissAlert);
            }
        });
}
