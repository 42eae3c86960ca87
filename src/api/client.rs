//! HTTP API Client
//!
//! Typed requests to the crowd-analytics backend. Every endpoint is resolved
//! against the configurable API base URL; the backend signals refusals with
//! an `{"error": ...}` body, which is surfaced verbatim.

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use crate::state::global::{Snapshot, UserInfo};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// localStorage key holding the API base override
const API_BASE_STORAGE_KEY: &str = "crowdwatch_api_url";

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response without a usable backend message
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Request failed or the payload did not decode
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// Backend-supplied error message, passed through verbatim
    #[error("{0}")]
    Backend(String),
}

/// Get the API base URL from local storage, or fall back to the default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url)
}

/// Persist the API base URL in local storage
pub fn set_api_base(url: &str) {
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
    if let Some(storage) = storage {
        let _ = storage.set_item(API_BASE_STORAGE_KEY, normalize_base(url).as_str());
    }
}

/// Strip whitespace and trailing slashes so endpoint paths append cleanly
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Error payload shape used by the backend for refusals
#[derive(Debug, Deserialize)]
struct BackendError {
    error: String,
}

/// Map a non-2xx response to an error, preferring the backend's own message
async fn response_error(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<BackendError>().await {
        Ok(body) => ApiError::Backend(body.error),
        Err(_) => ApiError::Http(status),
    }
}

/// Fetch the current crowd snapshot
pub async fn fetch_snapshot() -> Result<Snapshot, ApiError> {
    let response = Request::get(&format!("{}/data", get_api_base()))
        .send()
        .await?;
    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(response.json().await?)
}

/// Set the global alert threshold
pub async fn set_threshold(threshold: u32) -> Result<(), ApiError> {
    #[derive(Serialize)]
    struct SetThresholdRequest {
        threshold: u32,
    }

    let response = Request::post(&format!("{}/set_threshold", get_api_base()))
        .json(&SetThresholdRequest { threshold })?
        .send()
        .await?;
    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

/// Switch the backend's camera source
pub async fn change_camera(source: &str) -> Result<(), ApiError> {
    #[derive(Serialize)]
    struct ChangeCameraRequest<'a> {
        source: &'a str,
    }

    let response = Request::post(&format!("{}/admin/change_camera", get_api_base()))
        .json(&ChangeCameraRequest { source })?
        .send()
        .await?;
    if !response.ok() {
        return Err(response_error(response).await);
    }
    Ok(())
}

/// Reply shape for the user list: either the list itself or a refusal
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UsersReply {
    Users(Vec<UserInfo>),
    Failure { error: String },
}

/// Fetch the registered users
pub async fn fetch_users() -> Result<Vec<UserInfo>, ApiError> {
    let response = Request::get(&format!("{}/admin/users", get_api_base()))
        .send()
        .await?;
    if !response.ok() {
        return Err(response_error(response).await);
    }
    match response.json::<UsersReply>().await? {
        UsersReply::Users(users) => Ok(users),
        UsersReply::Failure { error } => Err(ApiError::Backend(error)),
    }
}

/// Report formats the backend can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Pdf,
}

impl ReportFormat {
    /// Export endpoint path for this format
    pub fn endpoint(self) -> &'static str {
        match self {
            ReportFormat::Csv => "/export_csv",
            ReportFormat::Pdf => "/export_pdf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Pdf => "PDF",
        }
    }
}

/// Export reply; the backend omits the filename when there is nothing to
/// export
#[derive(Debug, Default, Deserialize)]
struct ExportReply {
    #[serde(default)]
    filename: Option<String>,
}

/// Ask the backend to generate a report. `Ok(None)` means there was no data
/// to export, which is an informational condition rather than an error.
pub async fn request_export(format: ReportFormat) -> Result<Option<String>, ApiError> {
    let response = Request::get(&format!("{}{}", get_api_base(), format.endpoint()))
        .send()
        .await?;
    if !response.ok() {
        return Err(response_error(response).await);
    }
    let reply: ExportReply = response.json().await?;
    Ok(reply.filename.filter(|name| !name.is_empty()))
}

/// Absolute download URL for a generated report file
pub fn download_url(base: &str, filename: &str) -> String {
    format!("{}/download/{}", base, filename)
}

/// Stream URL for the live camera panel
pub fn video_feed_url(base: &str) -> String {
    format!("{}/video_feed", base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slashes() {
        assert_eq!(normalize_base("http://localhost:5000"), "http://localhost:5000");
        assert_eq!(normalize_base("http://localhost:5000/"), "http://localhost:5000");
        assert_eq!(normalize_base(" http://cam.local// "), "http://cam.local");
    }

    #[test]
    fn test_report_formats_map_to_endpoints() {
        assert_eq!(ReportFormat::Csv.endpoint(), "/export_csv");
        assert_eq!(ReportFormat::Pdf.endpoint(), "/export_pdf");
        assert_eq!(ReportFormat::Csv.label(), "CSV");
    }

    #[test]
    fn test_download_and_feed_urls_compose() {
        assert_eq!(
            download_url("http://localhost:5000", "report.csv"),
            "http://localhost:5000/download/report.csv"
        );
        assert_eq!(video_feed_url("http://cam.local"), "http://cam.local/video_feed");
    }

    #[test]
    fn test_users_reply_decodes_both_shapes() {
        let users: UsersReply =
            serde_json::from_str(r#"[{"username": "amit", "role": "admin"}]"#).unwrap();
        assert!(matches!(users, UsersReply::Users(list) if list.len() == 1));

        let refusal: UsersReply =
            serde_json::from_str(r#"{"error": "Admin access required"}"#).unwrap();
        assert!(matches!(refusal, UsersReply::Failure { error } if error == "Admin access required"));
    }

    #[test]
    fn test_export_reply_treats_error_body_as_no_data() {
        let reply: ExportReply = serde_json::from_str(r#"{"error": "No data"}"#).unwrap();
        assert_eq!(reply.filename, None);

        let reply: ExportReply = serde_json::from_str(r#"{"filename": "crowd.pdf"}"#).unwrap();
        assert_eq!(reply.filename.as_deref(), Some("crowd.pdf"));
    }
}
