//! Response envelope and pagination wrappers.
//!
//! Every service response shares one envelope; paged listings additionally
//! wrap their rows in a [`Page`].

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};

/// The envelope every service response is wrapped in.
///
/// # Example
///
/// ```
/// use fund_disbursement::models::ApiResponse;
///
/// let json = r#"{
///     "success": true,
///     "responseCode": 200,
///     "message": "OK",
///     "data": 42,
///     "timestamp": "2026-01-13T09:00:00Z",
///     "requestId": "req-1"
/// }"#;
/// let response: ApiResponse<u32> = serde_json::from_str(json).unwrap();
/// assert_eq!(response.data, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the service considers the call successful.
    pub success: bool,
    /// Numeric response code echoed by the service.
    #[serde(default)]
    pub response_code: u16,
    /// Short response description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// The payload.
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Server timestamp.
    #[serde(default)]
    pub timestamp: String,
    /// Request correlation identifier.
    #[serde(default)]
    pub request_id: String,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> ApiResponse<T> {
    /// Builds a successful envelope around `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            response_code: 200,
            response_message: Some("OK".to_string()),
            message: "Success".to_string(),
            data: Some(data),
            timestamp: String::new(),
            request_id: String::new(),
        }
    }

    /// Builds the envelope assumed for a successful response with no body.
    pub fn empty() -> Self {
        Self {
            success: true,
            response_code: 204,
            response_message: None,
            message: String::new(),
            data: None,
            timestamp: String::new(),
            request_id: String::new(),
        }
    }

    /// Takes the payload, failing if the service omitted it.
    pub fn into_data(self, path: &str) -> ConsoleResult<T> {
        self.data.ok_or_else(|| ConsoleError::MissingData {
            path: path.to_string(),
        })
    }

    /// Maps the payload, keeping the envelope metadata.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            response_code: self.response_code,
            response_message: self.response_message,
            message: self.message,
            data: self.data.map(f),
            timestamp: self.timestamp,
            request_id: self.request_id,
        }
    }
}

/// A page of results.
///
/// Paged endpoints report the page index as either `page` or `number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Rows on this page.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Zero-based page index.
    #[serde(default, alias = "number")]
    pub page: u32,
    /// Requested page size.
    #[serde(default)]
    pub size: u32,
    /// Total rows across all pages.
    #[serde(default)]
    pub total_elements: u64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Whether this is the first page.
    #[serde(default)]
    pub first: bool,
    /// Whether this is the last page.
    #[serde(default)]
    pub last: bool,
}

impl<T> Page<T> {
    /// Builds a single page holding every row.
    pub fn single(content: Vec<T>) -> Self {
        let total = content.len();
        Self {
            size: total as u32,
            total_elements: total as u64,
            total_pages: 1,
            first: true,
            last: true,
            page: 0,
            content,
        }
    }

    /// Returns the next page index, if there is one.
    pub fn next_page(&self) -> Option<u32> {
        (!self.last).then_some(self.page + 1)
    }

    /// Returns the previous page index, if there is one.
    pub fn previous_page(&self) -> Option<u32> {
        (!self.first && self.page > 0).then(|| self.page - 1)
    }
}
