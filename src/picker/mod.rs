//! Native file and image pickers.
//!
//! A picker call applies the default [`DialogFlags`], hands the options to a
//! caller-supplied customization step, presents the dialog through a
//! [`FileChooser`] and resolves to the selected path:
//!
//! - user cancelled: `Ok(None)`
//! - dialog failure: `Err(PickerError::Platform { code })`
//! - selection: `Ok(Some(path))`, always non-empty and absolute
//!
//! ## Module Structure
//!
//! - [`options`] - Dialog kind, flags, filters and options
//! - [`chooser`] - The `FileChooser` capability trait and backend results
//! - [`rfd_backend`] - OS-native dialogs via `rfd`
//! - [`pick`] - Open/save/image picker operations
//! - [`plugin`] - Bevy plugin running pickers on the async task pool

mod chooser;
mod error;
mod options;
mod pick;
mod plugin;
mod rfd_backend;


pub use chooser::{DialogResult, FileChooser, ParentWindow};
pub use error::PickerError;
pub use options::{DialogFlags, DialogKind, DialogOptions, FileFilter};
pub use pick::{
    PickerResult, file_picker, image_filters, open_file_picker, open_image_picker,
    save_file_picker,
};
pub use plugin::{
    FilePickerPlugin, PendingPickers, PickFileCompleted, PickFileRequest, PickerBackend,
    PickerKind, PickerTask, count_pending_pickers, poll_picker_tasks, spawn_picker_tasks,
};
pub use rfd_backend::RfdChooser;
