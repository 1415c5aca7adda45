//! The capability seam between picker operations and a native dialog service.

use std::path::PathBuf;

use futures_lite::future::Boxed;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use super::options::DialogOptions;

/// A window that can own a modal dialog.
///
/// Implemented for every type exposing both raw handles (winit windows,
/// bevy's window handle wrappers, etc).
pub trait ParentWindow: HasWindowHandle + HasDisplayHandle {}

impl<T: HasWindowHandle + HasDisplayHandle + ?Sized> ParentWindow for T {}

/// Outcome reported by a dialog backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// The user confirmed a selection
    Path(PathBuf),
    /// The user dismissed the dialog
    Cancelled,
    /// The dialog failed with a platform status code
    Error(i32),
}

/// A service able to present file dialogs.
///
/// `show` configures the dialog synchronously and returns a future that
/// presents it when polled. The parent handle is only read during `show`.
pub trait FileChooser: Send + Sync {
    fn show(
        &self,
        parent: Option<&dyn ParentWindow>,
        options: DialogOptions,
    ) -> Boxed<DialogResult>;
}
