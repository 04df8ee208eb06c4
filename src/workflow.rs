//! Analysis and report workflows as plain state transitions.
//!
//! The UI turns clicks into [`UiEvent`]s and forwards whatever command comes
//! back to the bridge; completions come back as [`BackgroundEvent`]s. Both
//! workflows share the same shape: `Idle -> Busy -> Idle`, with re-entry
//! blocked by disabling the control that started them.

use crate::bridge::{BackgroundEvent, UiCommand};
use crate::error::AppError;
use crate::model::AnalysisRequest;
use crate::render::{render, render_error};
use crate::state::{
    AnalysisPhase, AppState, ReportPhase, DOWNLOAD_BUSY_LABEL, SUBMIT_BUSY_LABEL,
};
use tracing::{debug, warn};

pub const VALIDATION_PROMPT: &str = "Please enter email content to analyze";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Submit(String),
    DownloadClicked,
    DismissAlert,
    DismissNotice,
}

pub fn handle(state: &mut AppState, event: UiEvent) -> Option<UiCommand> {
    match event {
        UiEvent::Submit(raw) => match submit(state, raw) {
            Ok(cmd) => cmd,
            Err(e) => {
                state.alert = Some(e.user_message());
                None
            }
        },
        UiEvent::DownloadClicked => download_report(state),
        UiEvent::DismissAlert => {
            state.alert = None;
            None
        }
        UiEvent::DismissNotice => {
            state.notice = None;
            None
        }
    }
}

/// Starts an analysis. Returns `Ok(None)` when the submit control is busy.
pub fn submit(state: &mut AppState, raw: String) -> Result<Option<UiCommand>, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::Validation(VALIDATION_PROMPT.to_string()));
    }
    if !state.submit.enabled {
        debug!("Ignoring submit while an analysis is in flight");
        return Ok(None);
    }

    state.analysis_phase = AnalysisPhase::Submitting;
    state.submit.begin_busy(SUBMIT_BUSY_LABEL);
    Ok(Some(UiCommand::Analyze(AnalysisRequest {
        email_content: raw,
    })))
}

/// Starts report generation for the cached analysis, if there is one.
pub fn download_report(state: &mut AppState) -> Option<UiCommand> {
    if !state.can_download() {
        return None;
    }
    let analysis = state.session.last()?.clone();

    state.report_phase = ReportPhase::Generating;
    state.download.begin_busy(DOWNLOAD_BUSY_LABEL);
    state.notice = None;
    Some(UiCommand::GenerateReport {
        analysis,
        download_dir: state.download_dir.clone(),
    })
}

pub fn apply(state: &mut AppState, event: BackgroundEvent) {
    match event {
        BackgroundEvent::AnalysisSucceeded { request, result } => {
            state.panel = Some(render(&result));
            state.session.store(request, result);
            state.analysis_phase = AnalysisPhase::Displaying;
            state.download.visible = true;
            state.submit.restore();
        }
        BackgroundEvent::AnalysisFailed(message) => {
            state.panel = Some(render_error(&message));
            state.analysis_phase = AnalysisPhase::DisplayingError;
            state.download.visible = false;
            state.submit.restore();
        }
        BackgroundEvent::ReportSaved(path) => {
            state.notice = Some(format!("Report saved to {}", path.display()));
            state.report_phase = ReportPhase::Idle;
            state.download.restore();
        }
        BackgroundEvent::ReportFailed(reason) => {
            warn!("Report not produced: {}", reason);
            state.alert = Some(format!("Error generating PDF: {reason}"));
            state.report_phase = ReportPhase::Idle;
            state.download.restore();
        }
    }
}
