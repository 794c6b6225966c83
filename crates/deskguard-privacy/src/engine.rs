use regex::Regex;
use tracing::debug;

use deskguard_core::config::PrivacyConfig;
use deskguard_core::errors::{DeskguardError, DeskguardResult};
use deskguard_core::models::{PiiAction, PiiCategory, PrivacyReport, Ticket};
use deskguard_core::traits::{AnonymizedText, IAnonymizer};

use crate::patterns::{self, devices, pii, CompiledPreserve};

/// Privacy engine that anonymizes support-ticket text by replacing detected
/// PII with placeholders while leaving device identifiers intact.
///
/// Implements `IAnonymizer` from deskguard-core. Anonymization is a pure,
/// idempotent transform; after construction the engine holds only compiled
/// patterns, so it can be shared across threads freely.
#[derive(Debug)]
pub struct PrivacyEngine {
    extra_preserved: Vec<CompiledPreserve>,
    mask_char: char,
}

impl PrivacyEngine {
    /// Create an engine with the built-in pattern set.
    pub fn new() -> Self {
        Self {
            extra_preserved: Vec::new(),
            mask_char: 'X',
        }
    }

    /// Build an engine from configuration, compiling any additional preserve
    /// patterns. Invalid patterns fail here, never during a scan.
    pub fn with_config(config: &PrivacyConfig) -> DeskguardResult<Self> {
        let mut extra_preserved = Vec::with_capacity(config.preserve_patterns.len());
        for p in &config.preserve_patterns {
            let regex =
                Regex::new(&p.pattern).map_err(|e| DeskguardError::InvalidPattern {
                    name: p.name.clone(),
                    reason: e.to_string(),
                })?;
            debug!(name = %p.name, "compiled preserve pattern");
            extra_preserved.push(CompiledPreserve {
                name: p.name.clone(),
                regex,
            });
        }
        Ok(Self {
            extra_preserved,
            mask_char: config.mask_char,
        })
    }

    /// Anonymize free text. Never fails: malformed near-matches are left
    /// as-is rather than partially redacted.
    pub fn anonymize_text(&self, text: &str) -> AnonymizedText {
        if text.is_empty() {
            return AnonymizedText {
                text: String::new(),
                report: PrivacyReport::default(),
            };
        }

        let matches = patterns::scan(text, &self.extra_preserved);
        let report = patterns::to_report(&matches);
        let anonymized = patterns::apply_replacements(text, &matches, self.mask_char);

        debug!(
            redacted = report.redacted_total(),
            preserved = report.preserved_total(),
            "anonymized text"
        );
        AnonymizedText {
            text: anonymized,
            report,
        }
    }

    /// Anonymize a structured ticket. Free-text fields are scanned; the
    /// direct PII fields are force-replaced regardless of shape; device
    /// details are left intact and recorded as preserved.
    pub fn anonymize_ticket(&self, ticket: &Ticket) -> (Ticket, PrivacyReport) {
        let mut out = ticket.clone();
        let mut report = PrivacyReport::default();

        let raw = self.anonymize_text(&ticket.raw_text);
        out.raw_text = raw.text;
        report.merge(&raw.report);

        let issue = self.anonymize_text(&ticket.issue_description);
        out.issue_description = issue.text;
        report.merge(&issue.report);

        let mut steps = Vec::with_capacity(ticket.troubleshooting_completed.len());
        for step in &ticket.troubleshooting_completed {
            let result = self.anonymize_text(step);
            report.merge(&result.report);
            steps.push(result.text);
        }
        out.troubleshooting_completed = steps;

        let escalation = self.anonymize_text(&ticket.escalation_status);
        out.escalation_status = escalation.text;
        report.merge(&escalation.report);

        if !ticket.customer_name.is_empty()
            && ticket.customer_name != pii::CUSTOMER_NAME_PLACEHOLDER
        {
            out.customer_name = pii::CUSTOMER_NAME_PLACEHOLDER.to_string();
            report.record(PiiCategory::CustomerName, PiiAction::Redacted, 1);
        }
        if ticket.contact_number.chars().any(|c| c.is_ascii_digit()) {
            out.contact_number = patterns::mask_digits(&ticket.contact_number, self.mask_char);
            report.record(PiiCategory::Phone, PiiAction::Redacted, 1);
        }
        if !ticket.email.is_empty() && ticket.email != pii::EMAIL_PLACEHOLDER {
            out.email = pii::EMAIL_PLACEHOLDER.to_string();
            report.record(PiiCategory::Email, PiiAction::Redacted, 1);
        }
        if ticket.device_details.mac_address.is_some() {
            report.record(PiiCategory::MacAddress, PiiAction::Preserved, 1);
        }
        if ticket.device_details.serial_number.is_some() {
            report.record(PiiCategory::SerialNumber, PiiAction::Preserved, 1);
        }

        (out, report)
    }

    /// Re-scan text for redactable categories that still match. Empty means
    /// the text is safe to hand to an external service.
    pub fn verify_clean(&self, text: &str) -> Vec<PiiCategory> {
        let matches = patterns::scan(text, &self.extra_preserved);
        let mut residual = Vec::new();
        for m in &matches {
            if m.action == PiiAction::Redacted && !residual.contains(&m.category) {
                residual.push(m.category);
            }
        }
        residual
    }

    /// Names of built-in patterns whose regex failed to compile. A failed
    /// pattern silently produces no matches; this surfaces the degradation
    /// for audit.
    pub fn pattern_health() -> Vec<&'static str> {
        let mut failed = Vec::new();
        for pat in pii::all_patterns() {
            if pat.regex.is_none() {
                failed.push(pat.name);
            }
        }
        for pat in devices::all_patterns() {
            if pat.regex.is_none() {
                failed.push(pat.name);
            }
        }
        failed
    }
}

impl Default for PrivacyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IAnonymizer for PrivacyEngine {
    fn anonymize(&self, text: &str) -> DeskguardResult<AnonymizedText> {
        Ok(self.anonymize_text(text))
    }
}
