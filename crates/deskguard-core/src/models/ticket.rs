use serde::{Deserialize, Serialize};

/// Device identifiers attached to a ticket. Left verbatim by anonymization —
/// downstream troubleshooting needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDetails {
    pub mac_address: Option<String>,
    pub serial_number: Option<String>,
}

/// Structured view of a labeled support ticket.
///
/// Built from the pasted ticket format agents use (`Issue Description:`,
/// `Customer Name:`, `Contact Number:`, `Email:`, `MAC Address:`,
/// `Serial Number:`, checked troubleshooting lines). Fields for labels that
/// never appear stay at their defaults; the raw text is retained unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub raw_text: String,
    pub issue_description: String,
    pub customer_name: String,
    pub contact_number: String,
    pub email: String,
    pub device_details: DeviceDetails,
    pub troubleshooting_completed: Vec<String>,
    pub escalation_status: String,
}

impl Ticket {
    /// Parse labeled ticket text into structured fields. Unrecognized lines
    /// are ignored rather than rejected — pasted tickets are messy.
    pub fn parse(text: &str) -> Self {
        let mut ticket = Ticket {
            raw_text: text.to_string(),
            ..Ticket::default()
        };
        let mut in_troubleshooting = false;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(value) = line.strip_prefix("Issue Description:") {
                ticket.issue_description = value.trim().to_string();
            } else if let Some(value) = line.strip_prefix("Customer Name:") {
                ticket.customer_name = value.trim().to_string();
            } else if let Some(value) = line.strip_prefix("Contact Number:") {
                ticket.contact_number = value.trim().to_string();
            } else if let Some(value) = line.strip_prefix("Email:") {
                ticket.email = value.trim().to_string();
            } else if let Some(value) = line.strip_prefix("MAC Address:") {
                ticket.device_details.mac_address = Some(value.trim().to_string());
            } else if let Some(value) = line.strip_prefix("Serial Number:") {
                ticket.device_details.serial_number = Some(value.trim().to_string());
            } else if line.starts_with("Troubleshooting Steps") {
                in_troubleshooting = true;
            } else if in_troubleshooting && (line.contains('✅') || line.contains("✔️")) {
                let step = line.replace('✅', "").replace("✔️", "");
                let step = step.trim();
                if !step.is_empty() {
                    ticket.troubleshooting_completed.push(step.to_string());
                }
            } else if line.to_lowercase().contains("escalat") {
                ticket.escalation_status = line.to_string();
            }
        }

        ticket
    }
}
