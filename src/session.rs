use crate::model::{AnalysisRequest, AnalysisResult};

#[derive(Debug, Clone, PartialEq)]
pub struct CachedAnalysis {
    pub request: AnalysisRequest,
    pub result: AnalysisResult,
}

/// Most recent successful analysis, kept for report generation.
///
/// Written only when an analysis succeeds, and always as a whole pair.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    last: Option<CachedAnalysis>,
}

impl AnalysisSession {
    pub fn store(&mut self, request: AnalysisRequest, result: AnalysisResult) {
        self.last = Some(CachedAnalysis { request, result });
    }

    pub fn last(&self) -> Option<&CachedAnalysis> {
        self.last.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }
}
