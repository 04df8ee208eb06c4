use crate::model::UrlFinding;
use crate::sanitize::display_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Suspicious,
    Clean,
}

impl LinkStatus {
    pub fn icon(self) -> &'static str {
        match self {
            LinkStatus::Suspicious => "⚠",
            LinkStatus::Clean => "✔",
        }
    }
}

/// Display form of one URL finding. All text is already sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCard {
    pub status: LinkStatus,
    pub url: String,
    pub scheme: &'static str,
    pub domain: String,
    pub subdomain: Option<String>,
    /// Empty means the pattern list is omitted.
    pub patterns: Vec<String>,
    pub error: Option<String>,
}

impl UrlCard {
    pub fn build(finding: &UrlFinding) -> Self {
        // Only the pattern list drives the status; HTTPS is display-only.
        let status = if finding.is_suspicious() {
            LinkStatus::Suspicious
        } else {
            LinkStatus::Clean
        };

        Self {
            status,
            url: display_text(&finding.url).into_owned(),
            scheme: if finding.is_https { "HTTPS" } else { "HTTP" },
            domain: format!(
                "{}.{}",
                display_text(&finding.domain),
                display_text(&finding.tld)
            ),
            subdomain: finding
                .subdomain
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| display_text(s).into_owned()),
            patterns: finding
                .patterns()
                .iter()
                .map(|p| display_text(p).into_owned())
                .collect(),
            error: finding
                .error
                .as_deref()
                .map(|e| display_text(e).into_owned()),
        }
    }
}
