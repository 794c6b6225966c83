use regex::Regex;
use std::sync::LazyLock;

use deskguard_core::models::PiiCategory;

/// A compiled preserved-identifier pattern. Matches are claimed so that
/// broader digit patterns cannot consume them, then left intact.
pub struct PreservedPattern {
    pub name: &'static str,
    pub category: PiiCategory,
    pub regex: &'static LazyLock<Option<Regex>>,
    /// Match capture group 1 (the labeled value) instead of the whole match.
    pub labeled_value: bool,
}

macro_rules! preserved_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── MAC address (colon- or dash-separated hex pairs) ──────────────────────
preserved_pattern!(
    RE_MAC_ADDRESS,
    r"\b(?:[0-9A-Fa-f]{2}[:\-]){5}[0-9A-Fa-f]{2}\b"
);

// ── Labeled serial number ─────────────────────────────────────────────────
// Bare alphanumeric runs are too collision-prone with card and account
// numbers, so only labeled values are preserved by default; deployments
// with their own identifier shapes extend the set via PrivacyConfig.
preserved_pattern!(
    RE_SERIAL_NUMBER,
    r"(?mi)^\s*Serial\s*(?:Number|No\.?)?\s*[:#]\s*([A-Za-z0-9][A-Za-z0-9\-]{5,30})"
);

/// Built-in preserved-identifier patterns, scanned before any redaction
/// pattern.
pub fn all_patterns() -> Vec<PreservedPattern> {
    vec![
        PreservedPattern {
            name: "mac_address",
            category: PiiCategory::MacAddress,
            regex: &RE_MAC_ADDRESS,
            labeled_value: false,
        },
        PreservedPattern {
            name: "serial_number",
            category: PiiCategory::SerialNumber,
            regex: &RE_SERIAL_NUMBER,
            labeled_value: true,
        },
    ]
}
