//! Common types used across the uploader.
//!
//! # Categories
//!
//! - **File Types** - the file picked by the user
//! - **Panel Types** - which section of the widget is visible
//! - **API Types** - backend response bodies
//! - **Error Types** - validation, upload and clipboard failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// A file chosen by the user.
///
/// `B` is the content handle: `web_sys::File` in the browser, raw bytes in
/// tests. The widget never mutates a selected file, it only replaces it.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<B> {
    /// File name as reported by the picker
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Declared MIME type (may be empty)
    pub mime_type: String,
    /// Binary content
    pub body: B,
}

impl<B> SelectedFile<B> {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>, body: B) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            body,
        }
    }
}

impl SelectedFile<Vec<u8>> {
    /// Build a file whose size is the length of its content.
    pub fn from_bytes(name: impl Into<String>, mime_type: impl Into<String>, body: Vec<u8>) -> Self {
        let size = body.len() as u64;
        Self::new(name, size, mime_type, body)
    }
}

impl SelectedFile<web_sys::File> {
    /// Wrap a file handle coming from an `<input type="file">`.
    pub fn from_web_file(file: web_sys::File) -> Self {
        // `File.size` is a JS number; sizes above 2^53 do not exist in practice.
        let size = file.size().max(0.0) as u64;
        Self::new(file.name(), size, file.type_(), file)
    }
}

// =============================================================================
// Panel Types
// =============================================================================

/// The five mutually exclusive panels of the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Upload area with the file picker
    Idle,
    /// File name and size, with upload/cancel buttons
    Previewing,
    /// Progress bar
    Uploading,
    /// Resulting URL and copy button
    Success,
    /// Error message
    Error,
}

impl Panel {
    /// DOM id of the panel.
    pub fn element_id(&self) -> &'static str {
        match self {
            Panel::Idle => "uploadArea",
            Panel::Previewing => "filePreview",
            Panel::Uploading => "progressBar",
            Panel::Success => "result",
            Panel::Error => "error",
        }
    }
}

/// Label state of the copy-to-clipboard button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyFeedback {
    #[default]
    Ready,
    Copied,
    Failed,
}

impl CopyFeedback {
    /// Button label for this state.
    pub fn label(&self) -> &'static str {
        match self {
            CopyFeedback::Ready => "Copy URL",
            CopyFeedback::Copied => "Copied!",
            CopyFeedback::Failed => "Copy failed",
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Body of a successful `POST /upload`.
///
/// Every field is optional: the widget only needs `url`, and falls back
/// to a generic message when it is missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Public URL of the stored file
    #[serde(default)]
    pub url: Option<String>,
    /// Name the backend stored the file under
    #[serde(default)]
    pub filename: Option<String>,
    /// Backend-side success flag
    #[serde(default)]
    pub success: Option<bool>,
}

/// Body of a rejected `POST /upload`, e.g. `{"error": "No file provided"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while talking to the upload endpoint.
///
/// These are logged for diagnostics and never shown verbatim to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The multipart body could not be built.
    #[error("Failed to build form data: {0}")]
    Form(String),

    /// The request never got a response (network, CORS, DNS...).
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The backend answered with a non-2xx status.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The 2xx body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),
}

/// Errors surfaced by the widget.
///
/// The `Display` text of each variant is the message shown in the error
/// panel.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// Selected file is above [`crate::MAX_FILE_SIZE`].
    #[error("File is too large! Maximum size is 10MB.")]
    FileTooLarge,

    /// Selected file has a MIME type outside [`crate::ALLOWED_MIME_TYPES`].
    #[error("Invalid file type! Only JPG, PNG, GIF, PDF, and TXT files are allowed.")]
    UnsupportedType,

    /// Upload failed; the cause is kept for logging only.
    #[error("Upload failed. Please try again.")]
    UploadRequestFailed(#[from] UploadError),

    /// Writing to the clipboard failed.
    #[error("Could not copy to clipboard: {0}")]
    ClipboardCopyFailed(String),

    /// A file was picked while an upload is running.
    #[error("An upload is already in progress.")]
    Busy,
}

/// Result type alias for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Result type alias for transport operations.
pub type UploadResult<T> = Result<T, UploadError>;
