mod report;
mod ticket;

pub use report::{PiiAction, PiiCategory, PrivacyReport, ReportEntry};
pub use ticket::{DeviceDetails, Ticket};
