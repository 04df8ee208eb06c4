//! Turns an analysis verdict into the result panel shown to the user.

use crate::card::UrlCard;
use crate::model::AnalysisResult;
use crate::sanitize::{display_message, display_text};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Danger,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

const PHISHING_TITLE: &str = "⚠ Potential Phishing Email Detected";
const PHISHING_MESSAGE: &str =
    "This email shows characteristics of a phishing attempt. Please be cautious.";
const LEGITIMATE_TITLE: &str = "✔ Email Appears Legitimate";
const LEGITIMATE_MESSAGE: &str = "This email appears to be legitimate based on our analysis.";

/// Everything the result area displays. `None` panels are hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub banner: Banner,
    /// `key: value` lines; empty leaves the details area blank.
    pub details: Vec<String>,
    pub url_cards: Option<Vec<UrlCard>>,
    pub advanced_findings: Option<Vec<String>>,
}

pub fn render(result: &AnalysisResult) -> ResultPanel {
    let banner = if result.is_phishing {
        Banner {
            severity: Severity::Danger,
            title: PHISHING_TITLE.to_string(),
            message: PHISHING_MESSAGE.to_string(),
        }
    } else {
        Banner {
            severity: Severity::Success,
            title: LEGITIMATE_TITLE.to_string(),
            message: LEGITIMATE_MESSAGE.to_string(),
        }
    };

    let mut details = Vec::new();
    if let Some(score) = result.risk_score() {
        details.push(format!("Risk score: {score}/100"));
    }
    if let Some(map) = &result.details {
        details.extend(
            map.iter()
                .map(|(key, value)| format!("{}: {}", display_text(key), value_text(value))),
        );
    }

    let urls = result.urls();
    let url_cards = (!urls.is_empty()).then(|| urls.iter().map(UrlCard::build).collect());

    let findings = result.findings();
    let advanced_findings = (!findings.is_empty())
        .then(|| findings.iter().map(|f| display_text(f).into_owned()).collect());

    ResultPanel {
        banner,
        details,
        url_cards,
        advanced_findings,
    }
}

/// Panel for a failed analysis: warning banner, everything else cleared.
pub fn render_error(message: &str) -> ResultPanel {
    ResultPanel {
        banner: Banner {
            severity: Severity::Warning,
            title: "Error".to_string(),
            message: display_message(message).into_owned(),
        },
        details: Vec::new(),
        url_cards: None,
        advanced_findings: None,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => display_text(s).into_owned(),
        other => display_text(&other.to_string()).into_owned(),
    }
}
