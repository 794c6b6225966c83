//! # deskguard-privacy
//!
//! Regex-based PII anonymization for support-ticket text. Detects emails,
//! phone numbers, SSNs, credit-card numbers, and labeled customer names,
//! replaces each with a deterministic placeholder, and leaves device
//! identifiers (MAC address, serial number) intact because downstream
//! troubleshooting needs them.
//!
//! The engine is a pure text transform: no I/O, no shared state, safe to
//! call concurrently. Name detection is labeled-field extraction only
//! (`Customer Name:` lines) — unlabeled names are not recognized.

pub mod engine;
pub mod patterns;

pub use engine::PrivacyEngine;
