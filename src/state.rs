use crate::render::ResultPanel;
use crate::session::AnalysisSession;
use std::path::PathBuf;

pub const SUBMIT_LABEL: &str = "Analyze Email";
pub const SUBMIT_BUSY_LABEL: &str = "Analyzing...";
pub const DOWNLOAD_LABEL: &str = "Download PDF Report";
pub const DOWNLOAD_BUSY_LABEL: &str = "Generating...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    Idle,
    Submitting,
    Displaying,
    DisplayingError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPhase {
    Idle,
    Generating,
}

/// A button whose label is swapped for a busy indicator while its
/// request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub enabled: bool,
    pub visible: bool,
    saved_label: Option<String>,
}

impl Control {
    pub fn new(label: &str, visible: bool) -> Self {
        Self {
            label: label.to_string(),
            enabled: true,
            visible,
            saved_label: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.saved_label.is_some()
    }

    pub fn begin_busy(&mut self, busy_label: &str) {
        let previous = std::mem::replace(&mut self.label, busy_label.to_string());
        self.saved_label.get_or_insert(previous);
        self.enabled = false;
    }

    pub fn restore(&mut self) {
        if let Some(label) = self.saved_label.take() {
            self.label = label;
        }
        self.enabled = true;
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    // Input
    pub email_content: String,

    // Workflows
    pub analysis_phase: AnalysisPhase,
    pub report_phase: ReportPhase,
    pub submit: Control,
    pub download: Control,

    // Results
    pub panel: Option<ResultPanel>,
    pub session: AnalysisSession,
    pub download_dir: PathBuf,

    // Messages
    pub alert: Option<String>,
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(download_dir: PathBuf) -> Self {
        Self {
            email_content: String::new(),
            analysis_phase: AnalysisPhase::Idle,
            report_phase: ReportPhase::Idle,
            submit: Control::new(SUBMIT_LABEL, true),
            download: Control::new(DOWNLOAD_LABEL, false),
            panel: None,
            session: AnalysisSession::default(),
            download_dir,
            alert: None,
            notice: None,
        }
    }

    /// The download button only works once an analysis has been cached.
    pub fn can_download(&self) -> bool {
        self.download.visible && self.download.enabled && !self.session.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_restores_its_original_label() {
        let mut control = Control::new(SUBMIT_LABEL, true);
        let before = control.clone();

        control.begin_busy(SUBMIT_BUSY_LABEL);
        assert!(!control.enabled);
        assert!(control.is_busy());
        assert_eq!(control.label, SUBMIT_BUSY_LABEL);

        control.restore();
        assert_eq!(control, before);
    }

    #[test]
    fn download_needs_a_cached_analysis() {
        let mut state = AppState::new(PathBuf::from("."));
        state.download.visible = true;
        assert!(!state.can_download());
    }
}
