use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub email_content: String,
}

/// Reads a missing or `null` field as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One hyperlink extracted from the email by the analysis service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrlFinding {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tld: String,
    #[serde(default)]
    pub subdomain: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_https: bool,
    #[serde(default)]
    pub suspicious_patterns: Option<Vec<String>>,
    /// Set when the service failed to analyze this particular link.
    #[serde(default)]
    pub error: Option<String>,
}

impl UrlFinding {
    pub fn patterns(&self) -> &[String] {
        self.suspicious_patterns.as_deref().unwrap_or_default()
    }

    pub fn is_suspicious(&self) -> bool {
        !self.patterns().is_empty()
    }
}

#[derive(Deserialize)]
struct ResultFields {
    #[serde(default, deserialize_with = "null_as_default")]
    is_phishing: bool,
    #[serde(default)]
    details: Option<Map<String, Value>>,
    #[serde(default)]
    url_analysis: Option<Vec<UrlFinding>>,
    #[serde(default)]
    advanced_findings: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
}

/// Verdict returned by `POST /analyze`.
///
/// The typed fields are read from the response body, which is kept as
/// received. Serializing a result writes that body back out unchanged, so
/// `POST /report` gets exactly what `/analyze` returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct AnalysisResult {
    pub is_phishing: bool,
    pub details: Option<Map<String, Value>>,
    pub url_analysis: Option<Vec<UrlFinding>>,
    pub advanced_findings: Option<Vec<String>>,
    pub error: Option<String>,
    raw: Value,
}

impl TryFrom<Value> for AnalysisResult {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let fields = ResultFields::deserialize(&raw)?;
        Ok(Self {
            is_phishing: fields.is_phishing,
            details: fields.details,
            url_analysis: fields.url_analysis,
            advanced_findings: fields.advanced_findings,
            error: fields.error,
            raw,
        })
    }
}

impl From<AnalysisResult> for Value {
    fn from(result: AnalysisResult) -> Self {
        result.raw
    }
}

impl AnalysisResult {
    pub fn urls(&self) -> &[UrlFinding] {
        self.url_analysis.as_deref().unwrap_or_default()
    }

    pub fn findings(&self) -> &[String] {
        self.advanced_findings.as_deref().unwrap_or_default()
    }

    pub fn risk_score(&self) -> Option<f64> {
        self.raw.get("risk_score").and_then(Value::as_f64)
    }

    /// The response body as the service sent it.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Body of `POST /report`.
#[derive(Debug, Serialize)]
pub struct ReportRequest<'a> {
    pub email_content: &'a str,
    pub result: &'a Value,
}
