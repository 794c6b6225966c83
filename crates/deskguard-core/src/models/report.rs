use std::fmt;

use serde::{Deserialize, Serialize};

/// Sensitive-data categories the anonymizer recognizes.
///
/// `MacAddress`, `SerialNumber`, and `Custom` are preserved identifiers:
/// they are detected so that broader patterns cannot claim their spans, but
/// the matched text is left intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    Email,
    Phone,
    CustomerName,
    Ssn,
    CreditCard,
    MacAddress,
    SerialNumber,
    /// A config-supplied preserve pattern.
    Custom,
}

impl PiiCategory {
    /// Stable lowercase name used in reports and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::CustomerName => "customer_name",
            Self::Ssn => "ssn",
            Self::CreditCard => "credit_card",
            Self::MacAddress => "mac_address",
            Self::SerialNumber => "serial_number",
            Self::Custom => "custom",
        }
    }

    /// Whether this category is exempt from redaction.
    pub fn is_preserved(&self) -> bool {
        matches!(self, Self::MacAddress | Self::SerialNumber | Self::Custom)
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the anonymizer did with a detected span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiAction {
    Redacted,
    Preserved,
}

/// Per-category tally in a privacy report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub category: PiiCategory,
    pub action: PiiAction,
    pub count: usize,
}

/// Audit summary of an anonymization pass.
///
/// Carries category counts only — never the matched text, and never any
/// derived fragment of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyReport {
    pub entries: Vec<ReportEntry>,
}

impl PrivacyReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrence count for a category, zero if absent.
    pub fn count(&self, category: PiiCategory) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.count)
            .sum()
    }

    /// Total redacted spans.
    pub fn redacted_total(&self) -> usize {
        self.total(PiiAction::Redacted)
    }

    /// Total preserved spans.
    pub fn preserved_total(&self) -> usize {
        self.total(PiiAction::Preserved)
    }

    fn total(&self, action: PiiAction) -> usize {
        self.entries
            .iter()
            .filter(|e| e.action == action)
            .map(|e| e.count)
            .sum()
    }

    /// Record `count` occurrences, merging with an existing entry for the
    /// same category and action.
    pub fn record(&mut self, category: PiiCategory, action: PiiAction, count: usize) {
        if count == 0 {
            return;
        }
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.category == category && e.action == action)
        {
            entry.count += count;
        } else {
            self.entries.push(ReportEntry {
                category,
                action,
                count,
            });
        }
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: &PrivacyReport) {
        for entry in &other.entries {
            self.record(entry.category, entry.action, entry.count);
        }
    }

    /// Human-readable summary for audit display.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "no PII detected".to_string();
        }
        let mut lines = vec![format!(
            "{} span(s) redacted, {} preserved",
            self.redacted_total(),
            self.preserved_total()
        )];
        for entry in &self.entries {
            let verb = match entry.action {
                PiiAction::Redacted => "redacted",
                PiiAction::Preserved => "preserved",
            };
            lines.push(format!("  {}: {} {}", entry.category, entry.count, verb));
        }
        lines.join("\n")
    }
}
