//! UI Components of the uploader.
//!
//! [`FileUploader`] owns a [`BrowserWidget`] signal and shows exactly one
//! of the panels below, depending on the widget's state:
//!
//! - [`UploadArea`] - file picker (idle)
//! - [`FilePreview`] - name, size, upload/cancel (previewing)
//! - [`ProgressPanel`] - cosmetic progress bar (uploading)
//! - [`SuccessPanel`] - resulting URL with copy button (success)
//! - [`ErrorPanel`] - error message (error)

mod error;
mod preview;
mod progress;
mod result;
mod upload;
mod uploader;

pub use error::*;
pub use preview::*;
pub use progress::*;
pub use result::*;
pub use upload::*;
pub use uploader::*;

use crate::UploadWidget;

/// Widget state holding browser file handles.
pub type BrowserWidget = UploadWidget<web_sys::File>;
