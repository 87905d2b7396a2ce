//! Application configuration.
//!
//! Upload limits are fixed at build time. The backend base path defaults
//! to [`API_BASE`] and can be overridden per deployment with a
//! `<meta name="upload-api-base" content="...">` tag in the host page.

/// Default backend API base path.
pub const API_BASE: &str = "/api";

/// Name of the `<meta>` tag that overrides [`API_BASE`].
pub const API_BASE_META: &str = "upload-api-base";

/// Application name, used for the page title.
pub const APP_NAME: &str = "Simple File Uploader";

/// Maximum file size accepted by the widget (in bytes).
///
/// 10 MB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// MIME types the widget accepts.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "application/pdf",
    "text/plain",
];

/// Value of the file input's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".jpg,.jpeg,.png,.gif,.pdf,.txt";

/// Percent added to the progress bar on every tick.
pub const PROGRESS_STEP: u8 = 10;

/// The progress bar never passes this value before the response arrives.
pub const PROGRESS_CEILING: u8 = 90;

/// Delay between two progress ticks (in milliseconds).
pub const PROGRESS_TICK_MS: u32 = 200;

/// How long the copy button shows its feedback label (in milliseconds).
pub const COPY_FEEDBACK_MS: u32 = 2000;

/// Runtime configuration of the uploader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploaderConfig {
    /// Backend base path or URL, without the `/upload` suffix.
    pub api_base: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
        }
    }
}

impl UploaderConfig {
    /// Configuration pointing at a custom backend.
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Read the configuration from the host document.
    ///
    /// Falls back to [`UploaderConfig::default`] when there is no window,
    /// no `<meta name="upload-api-base">` tag, or the tag is empty.
    pub fn from_document() -> Self {
        let api_base = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                document
                    .query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"))
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty());

        match api_base {
            Some(api_base) => {
                log::info!("Using API base from page: {}", api_base);
                Self::with_api_base(api_base)
            }
            None => Self::default(),
        }
    }

    /// Full URL of the upload endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/upload", self.api_base.trim_end_matches('/'))
    }
}
