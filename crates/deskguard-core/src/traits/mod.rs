mod anonymizer;

pub use anonymizer::{AnonymizedText, IAnonymizer};
