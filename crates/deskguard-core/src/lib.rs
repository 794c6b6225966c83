//! # deskguard-core
//!
//! Foundation crate for the deskguard ticket-privacy toolkit.
//! Defines the shared types, traits, errors, and configuration.
//! The engine and CLI crates depend on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{PreservePattern, PrivacyConfig};
pub use errors::{DeskguardError, DeskguardResult};
pub use models::{PiiAction, PiiCategory, PrivacyReport, ReportEntry, Ticket};
pub use traits::{AnonymizedText, IAnonymizer};
