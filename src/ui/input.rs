use crate::state::AppState;
use crate::workflow::UiEvent;
use egui::Ui;

pub fn draw_input(ui: &mut Ui, state: &mut AppState, events: &mut Vec<UiEvent>) {
    let busy = state.submit.is_busy();

    ui.label("Email Content");
    ui.add_enabled(
        !busy,
        egui::TextEdit::multiline(&mut state.email_content)
            .hint_text("Paste the full email here, headers included if you have them")
            .desired_rows(12)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui
            .add_enabled(state.submit.enabled, egui::Button::new(&state.submit.label))
            .clicked()
        {
            events.push(UiEvent::Submit(state.email_content.clone()));
        }
        if busy {
            ui.add(egui::Spinner::new());
        }
    });
}
