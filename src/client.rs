use crate::error::AppError;
use crate::model::{AnalysisRequest, AnalysisResult, ReportRequest};
use crate::session::CachedAnalysis;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

const ANALYZE_FALLBACK: &str = "Failed to analyze email";
const REPORT_FALLBACK: &str = "Failed to generate PDF";

/// HTTP client for the analysis service.
///
/// No timeout or retry is configured: each call is a single attempt that
/// settles when the server answers or the connection fails.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base: Url,
}

impl ServiceClient {
    pub fn new(mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    fn endpoint(&self, name: &str) -> Result<Url, AppError> {
        self.base
            .join(name)
            .map_err(|e| AppError::Config(format!("invalid endpoint {name}: {e}")))
    }

    /// `POST /analyze`. A non-2xx status or an `error` field in the body is
    /// a [`AppError::Service`]; an unreadable body is a [`AppError::Transport`].
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AppError> {
        let url = self.endpoint("analyze")?;
        debug!(bytes = request.email_content.len(), %url, "Submitting email for analysis");

        let response = self.http.post(url).json(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let parsed = serde_json::from_slice::<Value>(&body);

        if !status.is_success() {
            let message = parsed
                .ok()
                .and_then(|v| error_field(&v))
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| ANALYZE_FALLBACK.to_string());
            warn!(%status, "Analysis request failed: {}", message);
            return Err(AppError::Service(message));
        }

        let value =
            parsed.map_err(|e| AppError::Transport(format!("invalid response body: {e}")))?;
        if let Some(mut message) = error_field(&value) {
            if message.is_empty() {
                message = ANALYZE_FALLBACK.to_string();
            }
            warn!(%status, "Analysis service reported an error: {}", message);
            return Err(AppError::Service(message));
        }

        serde_json::from_value(value)
            .map_err(|e| AppError::Transport(format!("unexpected response shape: {e}")))
    }

    /// `POST /report`. Returns the raw document bytes on success.
    pub async fn report(&self, cached: &CachedAnalysis) -> Result<Vec<u8>, AppError> {
        let url = self.endpoint("report")?;
        let body = ReportRequest {
            email_content: &cached.request.email_content,
            result: cached.result.raw(),
        };
        debug!(%url, "Requesting report");

        let response = self.http.post(url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<Value>(&body)
                .ok()
                .and_then(|v| error_field(&v))
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("{REPORT_FALLBACK} (HTTP {})", status.as_u16()));
            warn!(%status, "Report request failed: {}", message);
            return Err(AppError::Service(message));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Message carried by an `error` field, if the body has a non-null one.
fn error_field(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoints_join_under_base_path() {
        let client = ServiceClient::new(Url::parse("http://localhost:5000/tool").unwrap());
        assert_eq!(
            client.endpoint("analyze").unwrap().as_str(),
            "http://localhost:5000/tool/analyze"
        );

        let root = ServiceClient::new(Url::parse("http://localhost:5000").unwrap());
        assert_eq!(
            root.endpoint("report").unwrap().as_str(),
            "http://localhost:5000/report"
        );
    }

    #[test]
    fn error_field_ignores_null() {
        assert_eq!(error_field(&json!({"error": null})), None);
        assert_eq!(error_field(&json!({"is_phishing": true})), None);
        assert_eq!(
            error_field(&json!({"error": "model unavailable"})).as_deref(),
            Some("model unavailable")
        );
    }
}
