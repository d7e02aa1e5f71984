//! Report delivery by email
//!
//! Transport and contact storage live behind traits; this module only
//! decides what gets sent and how failures are reported back.

use crate::app::SizingReport;
use crate::export::comparison_csv_bytes;
use bucketsize_types::{Error, Result};
use chrono::Utc;
use log::{info, warn};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// File name of the CSV attachment
pub const ATTACHMENT_NAME: &str = "excavator_simulation_data.csv";

/// Outgoing message with one CSV attachment
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub attachment_name: String,
    pub attachment: Vec<u8>,
}

/// Sends a rendered report
pub trait ReportMailer {
    fn send(&self, message: &ReportMessage) -> Result<()>;
}

/// Records addresses that asked for a report
pub trait ContactLog {
    fn append(&self, email: &str) -> Result<()>;
}

/// What happened during delivery
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryOutcome {
    pub sent: bool,
    pub logged: bool,
    pub warnings: Vec<String>,
}

/// Minimal address check: non-empty with an '@' that isn't at either end
pub fn validate_email(email: &str) -> Result<&str> {
    let email = email.trim();
    match email.find('@') {
        Some(at) if at > 0 && at < email.len() - 1 => Ok(email),
        _ => Err(Error::InvalidInput(format!(
            "Please enter a valid email address, got '{}'",
            email
        ))),
    }
}

/// Build the message for a report
pub fn compose_message(report: &SizingReport, recipient: &str) -> Result<ReportMessage> {
    let mut body = String::new();
    body.push_str(&report.recommendation());
    body.push('\n');
    body.push_str(&report.headline());
    body.push_str("\n\n");
    for line in report
        .summary_lines()
        .into_iter()
        .chain(report.fill_factor_notes())
    {
        body.push_str(&line);
        body.push('\n');
    }

    Ok(ReportMessage {
        recipient: recipient.to_string(),
        subject: format!(
            "Bucket recommendation for {} {}",
            report.request.excavator.make, report.request.excavator.model
        ),
        body,
        attachment_name: ATTACHMENT_NAME.to_string(),
        attachment: comparison_csv_bytes(report)?,
    })
}

/// Send the report and record the address.
///
/// An invalid address is a hard error. Send and log failures are collected
/// as warnings so one doesn't block the other.
pub fn deliver_report(
    report: &SizingReport,
    email: &str,
    mailer: &dyn ReportMailer,
    contacts: &dyn ContactLog,
) -> Result<DeliveryOutcome> {
    let email = validate_email(email)?;
    let message = compose_message(report, email)?;
    let mut outcome = DeliveryOutcome::default();

    match mailer.send(&message) {
        Ok(()) => {
            info!("Report sent to {}", email);
            outcome.sent = true;
        }
        Err(e) => {
            warn!("Failed to send report to {}: {}", email, e);
            outcome.warnings.push(format!("Failed to send email: {}", e));
        }
    }

    match contacts.append(email) {
        Ok(()) => outcome.logged = true,
        Err(e) => {
            warn!("Failed to record contact {}: {}", email, e);
            outcome.warnings.push(format!("Failed to record contact: {}", e));
        }
    }

    Ok(outcome)
}

/// Writes each message into a directory for a separate transport to pick up
pub struct OutboxMailer {
    dir: PathBuf,
}

impl OutboxMailer {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl ReportMailer for OutboxMailer {
    fn send(&self, message: &ReportMessage) -> Result<()> {
        let stem = format!(
            "{}_{}",
            Utc::now().format("%Y%m%d%H%M%S"),
            message.recipient.replace(['@', '.'], "_")
        );
        let msg_dir = self.dir.join(stem);
        fs::create_dir_all(&msg_dir)?;

        let header = format!("To: {}\nSubject: {}\n\n", message.recipient, message.subject);
        fs::write(msg_dir.join("message.txt"), header + &message.body)?;
        fs::write(msg_dir.join(&message.attachment_name), &message.attachment)?;
        Ok(())
    }
}

/// Appends contacts to a CSV file, writing the header on first use
pub struct CsvContactLog {
    path: PathBuf,
}

impl CsvContactLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ContactLog for CsvContactLog {
    fn append(&self, email: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::Writer::from_writer(file);
        if is_new {
            writer.write_record(["email", "requested_at"])?;
        }
        writer.write_record([email, Utc::now().to_rfc3339().as_str()])?;
        writer.flush()?;
        Ok(())
    }
}
