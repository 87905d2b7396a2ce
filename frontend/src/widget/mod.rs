//! Upload widget state machine.
//!
//! ```text
//!            select (valid)         confirm               2xx + JSON
//!   Idle ─────────────────▶ Previewing ─────▶ Uploading ─────────────▶ Success
//!    ▲  ◀───────────────────────┘  cancel        │
//!    │                                           │ non-2xx / network / bad body
//!    │       select (invalid)                    ▼
//!    │  ────────────────────────────────────▶  Error
//!    └──────────────── reset (from any state) ───┘
//! ```
//!
//! [`UploadWidget`] holds no browser types: the file content is the type
//! parameter `B`, and the network call happens outside, in
//! [`crate::services::perform_upload`], driven by the ticket returned from
//! [`UploadWidget::confirm_upload`].

mod progress;
mod validation;

pub use progress::Progress;
pub use validation::{format_file_size, is_allowed_type, validate};

use crate::{CopyFeedback, Panel, SelectedFile, UploadResponse, UploadResult, WidgetError, WidgetResult};

/// Text shown in the success panel when the backend returns no URL.
pub const SUCCESS_FALLBACK: &str = "File uploaded successfully";

/// Current state, with the data each panel displays.
///
/// A file only exists in `Previewing` and `Uploading`.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadState<B> {
    Idle,
    Previewing {
        file: SelectedFile<B>,
        size_label: String,
    },
    Uploading {
        file: SelectedFile<B>,
        upload_id: u64,
    },
    Success {
        url: Option<String>,
    },
    Error {
        error: WidgetError,
    },
}

impl<B> UploadState<B> {
    pub fn panel(&self) -> Panel {
        match self {
            UploadState::Idle => Panel::Idle,
            UploadState::Previewing { .. } => Panel::Previewing,
            UploadState::Uploading { .. } => Panel::Uploading,
            UploadState::Success { .. } => Panel::Success,
            UploadState::Error { .. } => Panel::Error,
        }
    }
}

/// Handed out when an upload starts; identifies which upload a response
/// or a progress tick belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadTicket<B> {
    pub id: u64,
    pub file: SelectedFile<B>,
}

/// The widget's whole state. One instance per widget on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadWidget<B> {
    state: UploadState<B>,
    progress: Progress,
    copy_feedback: CopyFeedback,
    copy_generation: u64,
    last_upload_id: u64,
}

impl<B> Default for UploadWidget<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> UploadWidget<B> {
    pub fn new() -> Self {
        Self {
            state: UploadState::Idle,
            progress: Progress::ZERO,
            copy_feedback: CopyFeedback::Ready,
            copy_generation: 0,
            last_upload_id: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &UploadState<B> {
        &self.state
    }

    pub fn panel(&self) -> Panel {
        self.state.panel()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn copy_feedback(&self) -> CopyFeedback {
        self.copy_feedback
    }

    pub fn selected_file(&self) -> Option<&SelectedFile<B>> {
        match &self.state {
            UploadState::Previewing { file, .. } | UploadState::Uploading { file, .. } => Some(file),
            _ => None,
        }
    }

    /// Size label of the file being previewed.
    pub fn size_label(&self) -> Option<&str> {
        match &self.state {
            UploadState::Previewing { size_label, .. } => Some(size_label),
            _ => None,
        }
    }

    /// URL returned by the last successful upload, if any.
    pub fn result_url(&self) -> Option<&str> {
        match &self.state {
            UploadState::Success { url } => url.as_deref(),
            _ => None,
        }
    }

    /// Text of the success panel: the URL, or [`SUCCESS_FALLBACK`].
    pub fn result_text(&self) -> Option<&str> {
        match &self.state {
            UploadState::Success { url } => Some(url.as_deref().unwrap_or(SUCCESS_FALLBACK)),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&WidgetError> {
        match &self.state {
            UploadState::Error { error } => Some(error),
            _ => None,
        }
    }

    /// Message of the error panel.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Validate and keep a newly picked file.
    ///
    /// On a validation failure the widget moves to the error panel and
    /// the previous file is dropped. Picking a file during an upload is
    /// rejected with [`WidgetError::Busy`] and changes nothing.
    pub fn select_file(&mut self, file: SelectedFile<B>) -> WidgetResult<()> {
        if let UploadState::Uploading { .. } = self.state {
            log::warn!("Ignoring {}: an upload is already in progress", file.name);
            return Err(WidgetError::Busy);
        }

        if let Err(error) = validate(&file) {
            log::info!("Rejected {} ({} bytes, {:?}): {}", file.name, file.size, file.mime_type, error);
            self.fail(error.clone());
            return Err(error);
        }

        let size_label = format_file_size(file.size);
        log::info!("Selected {} ({})", file.name, size_label);
        self.state = UploadState::Previewing { file, size_label };
        Ok(())
    }

    /// Start uploading the previewed file.
    ///
    /// Returns `None` (and does nothing) unless a file is being previewed.
    pub fn confirm_upload(&mut self) -> Option<UploadTicket<B>>
    where
        B: Clone,
    {
        let file = match std::mem::replace(&mut self.state, UploadState::Idle) {
            UploadState::Previewing { file, .. } => file,
            other => {
                log::debug!("confirm_upload ignored in {:?} state", other.panel());
                self.state = other;
                return None;
            }
        };

        self.last_upload_id += 1;
        let id = self.last_upload_id;
        log::info!("Uploading {} (upload #{})", file.name, id);

        self.progress.reset();
        self.state = UploadState::Uploading {
            file: file.clone(),
            upload_id: id,
        };
        Some(UploadTicket { id, file })
    }

    /// Whether `upload_id` is the upload currently on screen.
    pub fn is_current_upload(&self, upload_id: u64) -> bool {
        matches!(self.state, UploadState::Uploading { upload_id: current, .. } if current == upload_id)
    }

    /// Advance the cosmetic progress bar for `upload_id`.
    ///
    /// Returns `false` once ticking is pointless: the ceiling is reached or
    /// the upload is no longer the current one.
    pub fn tick_progress(&mut self, upload_id: u64) -> bool {
        if !self.is_current_upload(upload_id) {
            return false;
        }
        self.progress.tick()
    }

    /// Apply the outcome of upload `upload_id`.
    ///
    /// Outcomes of stale uploads (the widget was reset meanwhile) are
    /// dropped and `false` is returned.
    pub fn finish_upload(&mut self, upload_id: u64, outcome: UploadResult<UploadResponse>) -> bool {
        if !self.is_current_upload(upload_id) {
            log::debug!("Discarding result of stale upload #{}", upload_id);
            return false;
        }

        match outcome {
            Ok(response) => {
                log::info!(
                    "Upload #{} succeeded: url={:?} filename={:?} success={:?}",
                    upload_id,
                    response.url,
                    response.filename,
                    response.success
                );
                self.progress.complete();
                self.copy_feedback = CopyFeedback::Ready;
                // an empty URL is shown as the fallback message
                let url = response.url.filter(|url| !url.is_empty());
                self.state = UploadState::Success { url };
            }
            Err(cause) => {
                log::error!("Upload #{} failed: {}", upload_id, cause);
                self.fail(WidgetError::UploadRequestFailed(cause));
            }
        }
        true
    }

    /// Drop the previewed file and go back to the upload area.
    ///
    /// Only valid while previewing; returns whether anything changed.
    pub fn cancel(&mut self) -> bool {
        if let UploadState::Previewing { file, .. } = &self.state {
            log::info!("Cancelled {}", file.name);
            self.state = UploadState::Idle;
            true
        } else {
            false
        }
    }

    /// Return to the upload area from any state.
    ///
    /// A pending upload keeps running in the background but its result
    /// will be discarded by [`UploadWidget::finish_upload`].
    pub fn reset(&mut self) {
        if self.panel() != Panel::Idle {
            log::debug!("Reset from {:?}", self.panel());
        }
        self.state = UploadState::Idle;
        self.progress.reset();
        self.copy_feedback = CopyFeedback::Ready;
    }

    /// Text to put on the clipboard, when a URL is on screen.
    pub fn copy_result_url(&self) -> Option<String> {
        self.result_url().map(str::to_string)
    }

    /// Record the outcome of a clipboard write.
    ///
    /// Returns the feedback generation to hand back to
    /// [`UploadWidget::clear_copy_feedback`] once the label should revert,
    /// or `None` when no URL is on screen.
    pub fn record_copy(&mut self, outcome: WidgetResult<()>) -> Option<u64> {
        if self.panel() != Panel::Success {
            return None;
        }
        self.copy_feedback = match outcome {
            Ok(()) => CopyFeedback::Copied,
            Err(error) => {
                log::warn!("{}", error);
                CopyFeedback::Failed
            }
        };
        self.copy_generation += 1;
        Some(self.copy_generation)
    }

    /// Put the copy button back to its default label, unless a later copy
    /// replaced the feedback of `generation`.
    pub fn clear_copy_feedback(&mut self, generation: u64) -> bool {
        if generation != self.copy_generation {
            return false;
        }
        self.copy_feedback = CopyFeedback::Ready;
        true
    }

    fn fail(&mut self, error: WidgetError) {
        self.state = UploadState::Error { error };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UploadError;

    fn png(size: u64) -> SelectedFile<Vec<u8>> {
        SelectedFile::new("photo.png", size, "image/png", Vec::new())
    }

    fn previewing(size: u64) -> UploadWidget<Vec<u8>> {
        let mut widget = UploadWidget::<Vec<u8>>::new();
        widget.select_file(png(size)).unwrap();
        widget
    }

    #[test]
    fn test_initial_state() {
        let widget = UploadWidget::<Vec<u8>>::new();
        assert_eq!(widget.panel(), Panel::Idle);
        assert_eq!(widget.progress(), Progress::ZERO);
        assert!(widget.selected_file().is_none());
    }

    #[test]
    fn test_select_valid_file() {
        let widget = previewing(500_000);
        assert_eq!(widget.panel(), Panel::Previewing);
        assert_eq!(widget.selected_file().map(|f| f.name.as_str()), Some("photo.png"));
        assert_eq!(widget.size_label(), Some("488 KB"));

        let widget = previewing(5_242_880);
        assert_eq!(widget.size_label(), Some("5.00 MB"));
    }

    #[test]
    fn test_select_too_large_file() {
        let mut widget = previewing(10);
        let result = widget.select_file(SelectedFile::new("video.mp4", 20 * 1024 * 1024, "video/mp4", Vec::new()));

        assert_eq!(result, Err(WidgetError::FileTooLarge));
        assert_eq!(widget.panel(), Panel::Error);
        assert!(widget.selected_file().is_none());
        assert_eq!(
            widget.error_message().as_deref(),
            Some("File is too large! Maximum size is 10MB.")
        );
    }

    #[test]
    fn test_select_unsupported_type() {
        let mut widget = UploadWidget::<Vec<u8>>::new();
        let result = widget.select_file(SelectedFile::new("archive.zip", 100, "application/zip", Vec::new()));

        assert_eq!(result, Err(WidgetError::UnsupportedType));
        assert_eq!(
            widget.error_message().as_deref(),
            Some("Invalid file type! Only JPG, PNG, GIF, PDF, and TXT files are allowed.")
        );
    }

    #[test]
    fn test_new_selection_replaces_previous() {
        let mut widget = previewing(10);
        widget
            .select_file(SelectedFile::from_bytes("notes.txt", "text/plain", b"hello".to_vec()))
            .unwrap();
        let file = widget.selected_file().unwrap();
        assert_eq!(file.name, "notes.txt");
        assert_eq!(file.body, b"hello");
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut widget = previewing(10);
        assert!(widget.cancel());
        assert_eq!(widget.panel(), Panel::Idle);
        assert!(widget.selected_file().is_none());

        // not previewing anymore
        assert!(!widget.cancel());
    }

    #[test]
    fn test_cancel_ignored_while_uploading() {
        let mut widget = previewing(10);
        widget.confirm_upload().unwrap();
        assert!(!widget.cancel());
        assert_eq!(widget.panel(), Panel::Uploading);
    }

    #[test]
    fn test_confirm_requires_preview() {
        let mut widget = UploadWidget::<Vec<u8>>::new();
        assert!(widget.confirm_upload().is_none());
        assert_eq!(widget.panel(), Panel::Idle);

        let mut widget = previewing(10);
        let ticket = widget.confirm_upload().unwrap();
        assert_eq!(ticket.file.name, "photo.png");
        assert_eq!(widget.panel(), Panel::Uploading);
        assert!(widget.selected_file().is_some());

        // a second confirm while uploading is a no-op
        assert!(widget.confirm_upload().is_none());
        assert!(widget.is_current_upload(ticket.id));
    }

    #[test]
    fn test_select_while_uploading_is_rejected() {
        let mut widget = previewing(10);
        let ticket = widget.confirm_upload().unwrap();
        assert_eq!(widget.select_file(png(20)), Err(WidgetError::Busy));
        assert!(widget.is_current_upload(ticket.id));
    }

    #[test]
    fn test_success_with_url() {
        let mut widget = previewing(10);
        let ticket = widget.confirm_upload().unwrap();
        let response: UploadResponse = serde_json::from_str(r#"{"url":"https://x/y"}"#).unwrap();

        assert!(widget.finish_upload(ticket.id, Ok(response)));
        assert_eq!(widget.panel(), Panel::Success);
        assert_eq!(widget.result_text(), Some("https://x/y"));
        assert_eq!(widget.progress().percent(), 100);
        assert!(widget.selected_file().is_none());
    }

    #[test]
    fn test_success_without_url() {
        let mut widget = previewing(10);
        let ticket = widget.confirm_upload().unwrap();
        widget.finish_upload(ticket.id, Ok(UploadResponse::default()));

        assert_eq!(widget.result_text(), Some(SUCCESS_FALLBACK));
        assert!(widget.copy_result_url().is_none());
    }

    #[test]
    fn test_empty_url_falls_back_to_message() {
        let mut widget = previewing(10);
        let ticket = widget.confirm_upload().unwrap();
        let response: UploadResponse = serde_json::from_str(r#"{"url":""}"#).unwrap();
        widget.finish_upload(ticket.id, Ok(response));

        assert_eq!(widget.panel(), Panel::Success);
        assert_eq!(widget.result_text(), Some(SUCCESS_FALLBACK));
        assert!(widget.result_url().is_none());
        assert!(widget.copy_result_url().is_none());
    }

    #[test]
    fn test_failures_share_one_message() {
        let causes = [
            UploadError::Status {
                status: 500,
                body: "Internal Server Error".into(),
            },
            UploadError::Request("connection refused".into()),
            UploadError::MalformedResponse("expected value at line 1".into()),
        ];
        for cause in causes {
            let mut widget = previewing(10);
            let ticket = widget.confirm_upload().unwrap();
            widget.finish_upload(ticket.id, Err(cause));
            assert_eq!(widget.panel(), Panel::Error);
            assert_eq!(widget.error_message().as_deref(), Some("Upload failed. Please try again."));
        }
    }

    #[test]
    fn test_progress_ticks_only_for_current_upload() {
        let mut widget = previewing(10);
        let ticket = widget.confirm_upload().unwrap();
        assert!(widget.tick_progress(ticket.id));
        assert_eq!(widget.progress().percent(), 10);

        assert!(!widget.tick_progress(ticket.id + 1));
        assert_eq!(widget.progress().percent(), 10);

        widget.reset();
        assert!(!widget.tick_progress(ticket.id));
        assert_eq!(widget.progress().percent(), 0);
    }

    #[test]
    fn test_reset_discards_pending_result() {
        let mut widget = previewing(10);
        let ticket = widget.confirm_upload().unwrap();
        widget.reset();

        let late = UploadResponse {
            url: Some("https://x/late".into()),
            ..Default::default()
        };
        assert!(!widget.finish_upload(ticket.id, Ok(late)));
        assert_eq!(widget.panel(), Panel::Idle);

        // a new upload gets a fresh id, the old one stays stale
        widget.select_file(png(10)).unwrap();
        let next = widget.confirm_upload().unwrap();
        assert_ne!(next.id, ticket.id);
        assert!(!widget.finish_upload(ticket.id, Ok(UploadResponse::default())));
        assert_eq!(widget.panel(), Panel::Uploading);
    }

    #[test]
    fn test_reset_from_every_state() {
        let mut idle = UploadWidget::<Vec<u8>>::new();
        let mut preview = previewing(10);
        let mut uploading = previewing(10);
        let ticket = uploading.confirm_upload().unwrap();
        uploading.tick_progress(ticket.id);
        let mut success = uploading.clone();
        success.finish_upload(ticket.id, Ok(UploadResponse::default()));
        let mut error = UploadWidget::<Vec<u8>>::new();
        let _ = error.select_file(png(u64::MAX));

        for widget in [&mut idle, &mut preview, &mut uploading, &mut success, &mut error] {
            widget.reset();
            assert_eq!(widget.panel(), Panel::Idle);
            assert!(widget.selected_file().is_none());
            assert_eq!(widget.progress(), Progress::ZERO);
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut widget = previewing(10);
        widget.reset();
        let once = widget.clone();
        widget.reset();
        assert_eq!(widget, once);
    }

    #[test]
    fn test_copy_feedback() {
        let mut widget = previewing(10);
        let ticket = widget.confirm_upload().unwrap();
        let response = UploadResponse {
            url: Some("https://x/y".into()),
            ..Default::default()
        };
        widget.finish_upload(ticket.id, Ok(response));
        assert_eq!(widget.copy_result_url().as_deref(), Some("https://x/y"));

        let generation = widget.record_copy(Ok(())).unwrap();
        assert_eq!(widget.copy_feedback().label(), "Copied!");
        assert!(widget.clear_copy_feedback(generation));
        assert_eq!(widget.copy_feedback().label(), "Copy URL");

        widget.record_copy(Err(WidgetError::ClipboardCopyFailed("denied".into())));
        assert_eq!(widget.copy_feedback(), CopyFeedback::Failed);
        assert_eq!(widget.panel(), Panel::Success);

        widget.reset();
        assert_eq!(widget.copy_feedback(), CopyFeedback::Ready);
    }

    #[test]
    fn test_copy_outside_success_is_ignored() {
        let mut widget = previewing(10);
        assert!(widget.copy_result_url().is_none());
        assert_eq!(widget.record_copy(Ok(())), None);
        assert_eq!(widget.copy_feedback(), CopyFeedback::Ready);
    }

    fn succeeded(url: &str) -> UploadWidget<Vec<u8>> {
        let mut widget = previewing(10);
        let ticket = widget.confirm_upload().unwrap();
        let response = UploadResponse {
            url: Some(url.into()),
            ..Default::default()
        };
        widget.finish_upload(ticket.id, Ok(response));
        widget
    }

    #[test]
    fn test_earlier_copy_does_not_clear_later_feedback() {
        let mut widget = succeeded("https://x/y");
        let first = widget.record_copy(Ok(())).unwrap();
        let second = widget.record_copy(Err(WidgetError::ClipboardCopyFailed("denied".into()))).unwrap();

        // the first click's revert fires while the second label is showing
        assert!(!widget.clear_copy_feedback(first));
        assert_eq!(widget.copy_feedback(), CopyFeedback::Failed);

        assert!(widget.clear_copy_feedback(second));
        assert_eq!(widget.copy_feedback(), CopyFeedback::Ready);
    }

    #[test]
    fn test_copy_revert_from_previous_result_is_ignored() {
        let mut widget = succeeded("https://x/first");
        let stale = widget.record_copy(Ok(())).unwrap();

        widget.reset();
        widget.select_file(png(10)).unwrap();
        let ticket = widget.confirm_upload().unwrap();
        let response = UploadResponse {
            url: Some("https://x/second".into()),
            ..Default::default()
        };
        widget.finish_upload(ticket.id, Ok(response));
        widget.record_copy(Ok(())).unwrap();

        assert!(!widget.clear_copy_feedback(stale));
        assert_eq!(widget.copy_feedback(), CopyFeedback::Copied);
    }
}
