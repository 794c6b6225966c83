use deskguard_core::models::PiiCategory;
use deskguard_privacy::PrivacyEngine;
use proptest::prelude::*;

// ── Anonymized output never contains the raw value ────────────────────────

proptest! {
    #[test]
    fn output_never_contains_raw_email(
        user in "[a-z]{3,10}(\\.[a-z]{2,8})?",
        domain in "[a-z]{3,10}"
    ) {
        let email = format!("{user}@{domain}.com");
        let input = format!("Email: {email}");
        let engine = PrivacyEngine::new();
        let result = engine.anonymize_text(&input);
        prop_assert!(
            !result.text.contains(&email),
            "raw email in output: {}",
            result.text
        );
        prop_assert!(result.text.contains("[EMAIL]"));
    }

    #[test]
    fn ten_digit_phones_always_fully_masked(
        a in "[2-9][0-9]{2}",
        b in "[0-9]{3}",
        c in "[0-9]{4}"
    ) {
        let phone = format!("{a}-{b}-{c}");
        let input = format!("Contact Number: {phone}");
        let engine = PrivacyEngine::new();
        let result = engine.anonymize_text(&input);
        prop_assert!(
            !result.text.chars().any(|ch| ch.is_ascii_digit()),
            "digits survived masking: {}",
            result.text
        );
        prop_assert!(result.text.contains("XXX-XXX-XXXX"), "{}", result.text);
    }

    #[test]
    fn mac_addresses_always_preserved(pairs in prop::collection::vec("[0-9A-F]{2}", 6)) {
        let mac = pairs.join(":");
        let input = format!("MAC Address: {mac}");
        let engine = PrivacyEngine::new();
        let result = engine.anonymize_text(&input);
        prop_assert!(
            result.text.contains(&mac),
            "MAC '{}' altered: {}",
            mac,
            result.text
        );
        prop_assert_eq!(result.report.count(PiiCategory::MacAddress), 1);
    }
}

// ── Idempotence ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn anonymization_idempotent_on_labeled_tickets(
        name in "[A-Z][a-z]{2,10} [A-Z][a-z]{2,10}",
        user in "[a-z]{3,10}",
        domain in "[a-z]{3,10}",
        phone in "[2-9][0-9]{9}"
    ) {
        let input = format!(
            "Customer Name: {name}\nContact Number: {phone}\nEmail: {user}@{domain}.com"
        );
        let engine = PrivacyEngine::new();
        let first = engine.anonymize_text(&input);
        let second = engine.anonymize_text(&first.text);
        prop_assert_eq!(
            &first.text,
            &second.text,
            "not idempotent on: {}",
            input
        );
        prop_assert!(second.report.is_empty(), "re-reported: {:?}", second.report);
    }

    #[test]
    fn anonymization_idempotent_on_arbitrary_text(text in "[ -~]{0,200}") {
        let engine = PrivacyEngine::new();
        let first = engine.anonymize_text(&text);
        let second = engine.anonymize_text(&first.text);
        prop_assert_eq!(&first.text, &second.text, "input: {}", text);
    }
}
