use crate::bridge::{BackgroundEvent, UiCommand};
use crate::client::ServiceClient;
use crate::config::Config;
use crate::state::AppState;
use crate::ui::{input, notices, results};
use crate::workflow::{self, UiEvent};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug)]
pub struct PhishLensApp {
    state: AppState,
    cmd_tx: UnboundedSender<UiCommand>,
    event_rx: std::sync::mpsc::Receiver<BackgroundEvent>,
}

impl PhishLensApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        let client = ServiceClient::new(config.server_url.clone());
        let bridge = crate::bridge::setup_bridge(client, cc.egui_ctx.clone());
        Self {
            state: AppState::new(config.download_dir()),
            cmd_tx: bridge.cmd_tx,
            event_rx: bridge.event_rx,
        }
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.event_rx.try_recv() {
            workflow::apply(&mut self.state, event);
            ctx.request_repaint();
        }
    }

    fn dispatch(&mut self, events: Vec<UiEvent>) {
        for event in events {
            let Some(cmd) = workflow::handle(&mut self.state, event) else {
                continue;
            };
            // A dead worker would otherwise leave the control busy forever.
            if let Err(e) = self.cmd_tx.send(cmd) {
                tracing::error!("Background worker unavailable: {}", e);
                let reason = "background worker unavailable".to_string();
                let failure = match e.0 {
                    UiCommand::Analyze(_) => BackgroundEvent::AnalysisFailed(reason),
                    UiCommand::GenerateReport { .. } => BackgroundEvent::ReportFailed(reason),
                };
                workflow::apply(&mut self.state, failure);
            }
        }
    }
}

impl eframe::App for PhishLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);

        let mut events = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Phishing Email Analyzer");
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                input::draw_input(ui, &mut self.state, &mut events);
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(4.0);
                results::draw_results(ui, &self.state, &mut events);
            });
        });

        notices::draw_alert(ctx, &self.state, &mut events);

        self.dispatch(events);
    }
}
