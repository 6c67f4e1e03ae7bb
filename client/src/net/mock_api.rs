//! Simulated onboarding API.
//!
//! Each call validates its input, waits a fixed latency, and succeeds. The
//! signatures are what a real HTTP client would expose, so pages do not
//! change when one is wired in.

#[cfg(test)]
#[path = "mock_api_test.rs"]
mod mock_api_test;

use std::time::Duration;

use super::types::{DocumentStatus, RequiredDocument, UploadedDocument};
use crate::util::delay::simulated_latency;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Please select a file to upload")]
    MissingFile,
    #[error("Please fill in all required fields")]
    MissingFields,
}

/// Support request categories offered by the support form.
pub const SUPPORT_CATEGORIES: &[(&str, &str)] = &[
    ("technical", "Technical Issue"),
    ("hr", "HR Query"),
    ("documents", "Documents"),
    ("payroll", "Payroll"),
    ("other", "Other"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportRequest {
    pub category: String,
    pub subject: String,
    pub message: String,
}

impl SupportRequest {
    /// Trim all fields and require each to be non-empty.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingFields`] when any field is blank.
    pub fn new(category: &str, subject: &str, message: &str) -> Result<Self, ApiError> {
        let (category, subject, message) = (category.trim(), subject.trim(), message.trim());
        if category.is_empty() || subject.is_empty() || message.is_empty() {
            return Err(ApiError::MissingFields);
        }
        Ok(Self {
            category: category.to_owned(),
            subject: subject.to_owned(),
            message: message.to_owned(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketReceipt {
    pub reference: String,
}

/// Human-readable file size, e.g. `"2.4 MB"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

/// "Upload" a file against a required document. The record comes back pending review.
///
/// # Errors
///
/// [`ApiError::MissingFile`] when no file name was given.
pub async fn upload_document(
    document: &RequiredDocument,
    file_name: &str,
    file_size_bytes: u64,
    latency: Duration,
) -> Result<UploadedDocument, ApiError> {
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return Err(ApiError::MissingFile);
    }
    simulated_latency(latency).await;
    Ok(UploadedDocument {
        id: uuid::Uuid::new_v4().to_string(),
        kind: document.name.to_owned(),
        file_name: file_name.to_owned(),
        file_size: format_file_size(file_size_bytes),
        status: DocumentStatus::Pending,
    })
}

/// "Submit" a support request and hand back a ticket reference.
pub async fn submit_support_request(request: &SupportRequest, latency: Duration) -> TicketReceipt {
    simulated_latency(latency).await;
    leptos::logging::log!("support request filed: [{}] {}", request.category, request.subject);
    let id = uuid::Uuid::new_v4().simple().to_string();
    TicketReceipt { reference: format!("SR-{}", id[..8].to_ascii_uppercase()) }
}
