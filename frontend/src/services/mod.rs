//! Browser services used by the widget.
//!
//! # Services
//!
//! - [`upload`] - multipart upload to the backend and the progress-ticking driver
//! - [`clipboard`] - copy the resulting URL to the system clipboard

pub mod clipboard;
pub mod upload;

pub use clipboard::*;
pub use upload::*;
