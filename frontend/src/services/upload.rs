//! HTTP upload of the selected file to the backend.
//!
//! [`perform_upload`] is the single suspension point of the widget: it
//! races the request against the progress ticker and returns one
//! `Result`. The ticker is owned by the call, so it stops as soon as the
//! response arrives or the widget moves on.

use futures::future::{self, Either};
use futures::{Stream, StreamExt};
use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::widget::UploadTicket;
use crate::{ErrorResponse, SelectedFile, UploadError, UploadResponse, UploadResult, UploaderConfig};

/// Multipart field name the backend reads the file from.
pub const FILE_FIELD: &str = "file";

/// Sends a selected file somewhere and returns the parsed reply.
///
/// The browser uses [`HttpTransport`]; tests plug in canned replies.
#[allow(async_fn_in_trait)] // WASM is single-threaded, futures need not be Send
pub trait UploadTransport {
    /// Content handle this transport can send.
    type Body;

    async fn send(&self, file: &SelectedFile<Self::Body>) -> UploadResult<UploadResponse>;
}

/// `POST {api_base}/upload` with a `multipart/form-data` body.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &UploaderConfig) -> Self {
        Self {
            endpoint: config.endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl UploadTransport for HttpTransport {
    type Body = File;

    async fn send(&self, file: &SelectedFile<File>) -> UploadResult<UploadResponse> {
        let form_data = FormData::new().map_err(|e| UploadError::Form(format!("{:?}", e)))?;
        form_data
            .append_with_blob_and_filename(FILE_FIELD, &file.body, &file.name)
            .map_err(|e| UploadError::Form(format!("{:?}", e)))?;

        log::debug!("POST {} ({} bytes)", self.endpoint, file.size);
        let response = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| UploadError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(status_error(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
        parse_upload_response(&body)
    }
}

/// Build the error for a non-2xx response, keeping the backend's
/// `{"error": ...}` message when there is one.
async fn status_error(response: Response) -> UploadError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    UploadError::Status {
        status,
        body: error_detail(&text),
    }
}

/// Extract the message from an error body, or return the body as is.
pub fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    }
}

/// Parse the body of a 2xx response.
pub fn parse_upload_response(body: &str) -> UploadResult<UploadResponse> {
    serde_json::from_str(body).map_err(|e| UploadError::MalformedResponse(e.to_string()))
}

/// Send `ticket`'s file while ticking the cosmetic progress bar.
///
/// `on_tick` runs for every item of `ticks` and returns whether ticking
/// should go on; once it returns `false`, or `ticks` ends, the ticker is
/// dropped and only the request is awaited.
pub async fn perform_upload<T, S, F>(
    transport: &T,
    ticket: &UploadTicket<T::Body>,
    ticks: S,
    mut on_tick: F,
) -> UploadResult<UploadResponse>
where
    T: UploadTransport,
    S: Stream<Item = ()> + Unpin,
    F: FnMut() -> bool,
{
    let request = transport.send(&ticket.file);
    futures::pin_mut!(request);

    let mut ticks = ticks;
    loop {
        match future::select(request.as_mut(), ticks.next()).await {
            Either::Left((reply, _)) => return reply,
            Either::Right((Some(()), _)) => {
                if !on_tick() {
                    break;
                }
            }
            Either::Right((None, _)) => break,
        }
    }

    drop(ticks);
    log::debug!("Progress ticker for upload #{} stopped", ticket.id);
    request.await
}
