use serde::{Deserialize, Serialize};

use crate::errors::DeskguardResult;
use crate::models::PrivacyReport;

/// Result of anonymization with the audit report of what was touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizedText {
    pub text: String,
    pub report: PrivacyReport,
}

/// PII anonymization.
pub trait IAnonymizer: Send + Sync {
    /// Anonymize text, replacing detected PII with placeholders while
    /// leaving preserved identifiers intact.
    fn anonymize(&self, text: &str) -> DeskguardResult<AnonymizedText>;
}
