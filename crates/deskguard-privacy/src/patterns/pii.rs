use regex::Regex;
use std::sync::LazyLock;

use deskguard_core::models::PiiCategory;

/// Fixed token substituted for a detected email address.
pub const EMAIL_PLACEHOLDER: &str = "[EMAIL]";
/// Fixed token substituted for a labeled customer name.
pub const CUSTOMER_NAME_PLACEHOLDER: &str = "[CUSTOMER_NAME]";

/// How a detected span is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// Substitute the whole span with a fixed token.
    Token(&'static str),
    /// Mask every digit in the span, keeping separators so the grouping
    /// shape survives (`989-601-1263` → `XXX-XXX-XXXX`).
    MaskDigits,
}

/// A compiled redaction pattern.
pub struct PiiPattern {
    pub name: &'static str,
    pub category: PiiCategory,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub replacement: Replacement,
    /// Replace capture group 1 (the labeled value) instead of the whole match.
    pub labeled_value: bool,
}

macro_rules! pii_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Email ──────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b"
);

// ── Labeled customer name (value up to end of line) ───────────────────────
pii_pattern!(RE_CUSTOMER_NAME, r"(?m)^\s*Customer\s+Name\s*:\s*(\S.*?)\s*$");

// ── SSN (dash-grouped only; undashed 9-digit runs are left alone) ─────────
pii_pattern!(RE_SSN, r"\b\d{3}-\d{2}-\d{4}\b");

// ── Credit card (groups of 4, or a bare 13-19 digit run) ──────────────────
pii_pattern!(
    RE_CREDIT_CARD,
    r"\b(?:\d{4}[-\s]){3}\d{1,4}\b|\b\d{13,19}\b"
);

// ── Phone (optional country code, NANP grouping, or 7-digit local) ────────
// Every branch is anchored at a digit-run edge: an ambiguous 11-15 digit
// run either matches whole (leading 1 or + prefix) or not at all, never
// partially.
pii_pattern!(
    RE_PHONE,
    r"(?:\+\d{1,3}[-.\s]?)?\b1?[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b|\+\d{7,15}\b|\b\d{3}[-.\s]\d{4}\b"
);

/// All redaction patterns in priority order. The labeled customer name runs
/// before the shape patterns so the whole labeled value becomes one token;
/// email runs before the digit patterns so an address is never partially
/// consumed by the phone pattern.
pub fn all_patterns() -> Vec<PiiPattern> {
    vec![
        PiiPattern {
            name: "customer_name",
            category: PiiCategory::CustomerName,
            regex: &RE_CUSTOMER_NAME,
            replacement: Replacement::Token(CUSTOMER_NAME_PLACEHOLDER),
            labeled_value: true,
        },
        PiiPattern {
            name: "email",
            category: PiiCategory::Email,
            regex: &RE_EMAIL,
            replacement: Replacement::Token(EMAIL_PLACEHOLDER),
            labeled_value: false,
        },
        PiiPattern {
            name: "ssn",
            category: PiiCategory::Ssn,
            regex: &RE_SSN,
            replacement: Replacement::MaskDigits,
            labeled_value: false,
        },
        PiiPattern {
            name: "credit_card",
            category: PiiCategory::CreditCard,
            regex: &RE_CREDIT_CARD,
            replacement: Replacement::MaskDigits,
            labeled_value: false,
        },
        PiiPattern {
            name: "phone",
            category: PiiCategory::Phone,
            regex: &RE_PHONE,
            replacement: Replacement::MaskDigits,
            labeled_value: false,
        },
    ]
}
