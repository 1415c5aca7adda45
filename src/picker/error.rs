use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the picker operations.
///
/// User cancellation is never an error; it resolves to `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The dialog failed for a reason other than cancellation
    #[error("file dialog failed with platform status {code:#010x}")]
    Platform { code: i32 },
    /// The backend reported a selection without a path
    #[error("file dialog returned an empty path")]
    EmptyPath,
    /// The backend reported a path that is not absolute
    #[error("file dialog returned a relative path: {}", .0.display())]
    RelativePath(PathBuf),
}

impl PickerError {
    /// Platform status code, if the failure came from the dialog itself
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Platform { code } => Some(*code),
            _ => None,
        }
    }
}
