pub mod devices;
pub mod pii;

use regex::Regex;

use deskguard_core::models::{PiiAction, PiiCategory, PrivacyReport};

pub use pii::Replacement;

/// A preserve pattern compiled from configuration.
#[derive(Debug)]
pub struct CompiledPreserve {
    pub name: String,
    pub regex: Regex,
}

/// One claimed span before replacement.
#[derive(Debug, Clone)]
pub struct RawMatch {
    pub category: PiiCategory,
    pub action: PiiAction,
    pub start: usize,
    pub end: usize,
    /// `None` for preserved spans, which are never rewritten.
    pub replacement: Option<Replacement>,
}

/// Scan text with every pattern in priority order, claiming spans as they
/// match. Preserved identifiers go first so broader digit patterns cannot
/// consume them; redaction categories follow in fixed priority order
/// (customer name, email, ssn, credit card, phone). A span claimed once is
/// excluded from all later patterns.
pub fn scan(text: &str, extra_preserved: &[CompiledPreserve]) -> Vec<RawMatch> {
    let mut claimed: Vec<(usize, usize)> = Vec::new();
    let mut matches = Vec::new();

    for pat in devices::all_patterns() {
        let Some(re) = pat.regex.as_ref() else { continue };
        collect(
            text,
            re,
            pat.category,
            PiiAction::Preserved,
            None,
            pat.labeled_value,
            &mut claimed,
            &mut matches,
        );
    }
    for pre in extra_preserved {
        collect(
            text,
            &pre.regex,
            PiiCategory::Custom,
            PiiAction::Preserved,
            None,
            false,
            &mut claimed,
            &mut matches,
        );
    }
    for pat in pii::all_patterns() {
        let Some(re) = pat.regex.as_ref() else { continue };
        collect(
            text,
            re,
            pat.category,
            PiiAction::Redacted,
            Some(pat.replacement),
            pat.labeled_value,
            &mut claimed,
            &mut matches,
        );
    }

    matches
}

#[allow(clippy::too_many_arguments)]
fn collect(
    text: &str,
    re: &Regex,
    category: PiiCategory,
    action: PiiAction,
    replacement: Option<Replacement>,
    labeled_value: bool,
    claimed: &mut Vec<(usize, usize)>,
    out: &mut Vec<RawMatch>,
) {
    for caps in re.captures_iter(text) {
        let m = if labeled_value {
            caps.get(1).or_else(|| caps.get(0))
        } else {
            caps.get(0)
        };
        let Some(m) = m else { continue };
        if m.start() == m.end() {
            continue;
        }
        if overlaps_any(claimed, m.start(), m.end()) {
            continue;
        }
        // Already-anonymized values match their own label patterns; skipping
        // them keeps re-anonymization a no-op and out of the report.
        if let Some(Replacement::Token(token)) = replacement {
            if m.as_str() == token {
                continue;
            }
        }
        claimed.push((m.start(), m.end()));
        out.push(RawMatch {
            category,
            action,
            start: m.start(),
            end: m.end(),
            replacement,
        });
    }
}

fn overlaps_any(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|&(s, e)| start < e && s < end)
}

/// Apply placeholder replacements. Spans are disjoint by construction;
/// replacing from the end keeps earlier offsets valid.
pub fn apply_replacements(text: &str, matches: &[RawMatch], mask_char: char) -> String {
    let mut sorted: Vec<&RawMatch> = matches
        .iter()
        .filter(|m| m.action == PiiAction::Redacted)
        .collect();
    sorted.sort_by(|a, b| b.start.cmp(&a.start));

    let mut result = text.to_string();
    for m in sorted {
        let replacement = match m.replacement {
            Some(Replacement::Token(token)) => token.to_string(),
            Some(Replacement::MaskDigits) => mask_digits(&text[m.start..m.end], mask_char),
            None => continue,
        };
        result.replace_range(m.start..m.end, &replacement);
    }
    result
}

/// Mask every ASCII digit, keeping separators so the grouping shape
/// survives.
pub(crate) fn mask_digits(span: &str, mask_char: char) -> String {
    span.chars()
        .map(|c| if c.is_ascii_digit() { mask_char } else { c })
        .collect()
}

/// Tally matches into a privacy report. Counts only — the matched text is
/// never copied out.
pub fn to_report(matches: &[RawMatch]) -> PrivacyReport {
    let mut report = PrivacyReport::default();
    for m in matches {
        report.record(m.category, m.action, 1);
    }
    report
}
