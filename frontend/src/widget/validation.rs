//! Client-side checks run before a file reaches the preview panel.

use crate::{SelectedFile, WidgetError, WidgetResult, ALLOWED_MIME_TYPES, MAX_FILE_SIZE};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Validate a picked file. Size is checked before type; first failure wins.
pub fn validate<B>(file: &SelectedFile<B>) -> WidgetResult<()> {
    if file.size > MAX_FILE_SIZE {
        return Err(WidgetError::FileTooLarge);
    }
    if !is_allowed_type(&file.mime_type) {
        return Err(WidgetError::UnsupportedType);
    }
    Ok(())
}

/// Whether `mime_type` is one of [`ALLOWED_MIME_TYPES`] (exact match).
pub fn is_allowed_type(mime_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime_type)
}

/// Human-readable size: whole kilobytes below 1 MiB, megabytes with two
/// decimals above.
///
/// Rounding is half-up on the exact quotient, so `"x.xx MB"` agrees with
/// what a browser's `toFixed(2)` prints for the same byte count.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < MIB {
        let kb = (bytes + KIB / 2) / KIB;
        format!("{} KB", kb)
    } else {
        let hundredths = (u128::from(bytes) * 100 + u128::from(MIB / 2)) / u128::from(MIB);
        format!("{}.{:02} MB", hundredths / 100, hundredths % 100)
    }
}
