use crate::card::{LinkStatus, UrlCard};
use crate::render::{Banner, ResultPanel, Severity};
use crate::state::{AnalysisPhase, AppState};
use crate::workflow::UiEvent;
use egui::{Color32, RichText, Ui};

fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Danger => Color32::from_rgb(220, 53, 69),
        Severity::Success => Color32::from_rgb(25, 135, 84),
        Severity::Warning => Color32::from_rgb(255, 193, 7),
    }
}

pub fn draw_results(ui: &mut Ui, state: &AppState, events: &mut Vec<UiEvent>) {
    let Some(panel) = &state.panel else {
        if state.analysis_phase == AnalysisPhase::Idle {
            ui.centered_and_justified(|ui| {
                ui.label("Paste an email above and click Analyze Email to begin.");
            });
        }
        return;
    };

    draw_banner(ui, &panel.banner, &panel.details);
    draw_panels(ui, panel);

    if state.download.visible {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(state.can_download(), egui::Button::new(&state.download.label))
                .clicked()
            {
                events.push(UiEvent::DownloadClicked);
            }
            if state.download.is_busy() {
                ui.add(egui::Spinner::new());
            }
        });
    }

    if let Some(notice) = &state.notice {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(notice).weak());
            if ui.small_button("✖").clicked() {
                events.push(UiEvent::DismissNotice);
            }
        });
    }
}

fn draw_banner(ui: &mut Ui, banner: &Banner, details: &[String]) {
    let color = severity_color(banner.severity);
    egui::Frame::default()
        .inner_margin(12.0)
        .corner_radius(4.0)
        .stroke(egui::Stroke::new(1.0, color))
        .fill(color.gamma_multiply(0.12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&banner.title).heading().color(color));
            ui.label(&banner.message);
            if !details.is_empty() {
                ui.add_space(6.0);
                ui.strong("Analysis Details:");
                for line in details {
                    ui.label(line);
                }
            }
        });
}

fn draw_panels(ui: &mut Ui, panel: &ResultPanel) {
    if let Some(cards) = &panel.url_cards {
        ui.add_space(12.0);
        ui.heading("URL Analysis");
        ui.add_space(4.0);
        for card in cards {
            draw_url_card(ui, card);
            ui.add_space(4.0);
        }
    }

    if let Some(findings) = &panel.advanced_findings {
        let color = severity_color(Severity::Warning);
        ui.add_space(12.0);
        egui::Frame::default()
            .inner_margin(12.0)
            .corner_radius(4.0)
            .stroke(egui::Stroke::new(1.0, color))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.strong("Advanced Findings:");
                for finding in findings {
                    ui.label(format!("• {finding}"));
                }
            });
    }
}

fn draw_url_card(ui: &mut Ui, card: &UrlCard) {
    let status_color = match card.status {
        LinkStatus::Suspicious => severity_color(Severity::Warning),
        LinkStatus::Clean => severity_color(Severity::Success),
    };

    egui::Frame::default()
        .inner_margin(8.0)
        .corner_radius(4.0)
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(card.status.icon()).color(status_color));
                ui.strong(&card.url);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(card.scheme);
                });
            });
            ui.horizontal(|ui| {
                ui.strong("Domain:");
                ui.label(&card.domain);
            });
            if let Some(subdomain) = &card.subdomain {
                ui.horizontal(|ui| {
                    ui.strong("Subdomain:");
                    ui.label(subdomain);
                });
            }
            if let Some(error) = &card.error {
                ui.label(RichText::new(format!("Not analyzed: {error}")).italics());
            }
            if !card.patterns.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new("Suspicious Patterns:").strong().color(status_color));
                for pattern in &card.patterns {
                    ui.label(format!("• {pattern}"));
                }
            }
        });
}
