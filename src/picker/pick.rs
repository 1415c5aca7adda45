//! Picker operations: defaults, customization, presentation, result mapping.

use std::path::PathBuf;

use bevy::log::{debug, warn};
use futures_lite::future::Boxed;

use super::chooser::{DialogResult, FileChooser, ParentWindow};
use super::error::PickerError;
use super::options::{DialogKind, DialogOptions, FileFilter};
use crate::constants::IMAGE_EXTENSIONS;

/// Result of a picker call. `Ok(None)` means the user cancelled.
pub type PickerResult = Result<Option<PathBuf>, PickerError>;

/// Presents a dialog of `kind` and resolves to the selected path.
///
/// `customize` runs exactly once, after the default flags are applied and
/// before the dialog is shown. The returned future is `Send + 'static` and
/// can be handed to a task pool.
pub fn file_picker<F>(
    chooser: &dyn FileChooser,
    parent: Option<&dyn ParentWindow>,
    kind: DialogKind,
    customize: F,
) -> Boxed<PickerResult>
where
    F: FnOnce(&mut DialogOptions),
{
    let mut options = DialogOptions::new(kind);
    customize(&mut options);
    let pending = chooser.show(parent, options);
    Box::pin(async move { resolve(pending.await) })
}

/// Open variant of [`file_picker`]
pub fn open_file_picker<F>(
    chooser: &dyn FileChooser,
    parent: Option<&dyn ParentWindow>,
    customize: F,
) -> Boxed<PickerResult>
where
    F: FnOnce(&mut DialogOptions),
{
    file_picker(chooser, parent, DialogKind::Open, customize)
}

/// Save variant of [`file_picker`]
pub fn save_file_picker<F>(
    chooser: &dyn FileChooser,
    parent: Option<&dyn ParentWindow>,
    customize: F,
) -> Boxed<PickerResult>
where
    F: FnOnce(&mut DialogOptions),
{
    file_picker(chooser, parent, DialogKind::Save, customize)
}

/// Open picker restricted to [`image_filters`].
pub fn open_image_picker(
    chooser: &dyn FileChooser,
    parent: Option<&dyn ParentWindow>,
) -> Boxed<PickerResult> {
    open_file_picker(chooser, parent, |options| {
        for filter in image_filters() {
            options.add_filter(filter);
        }
    })
}

/// Filters used by [`open_image_picker`]: common image formats first, then everything.
pub fn image_filters() -> Vec<FileFilter> {
    vec![
        FileFilter::new("Image Files", IMAGE_EXTENSIONS),
        FileFilter::new("All Files", ["*"]),
    ]
}

fn resolve(result: DialogResult) -> PickerResult {
    match result {
        DialogResult::Cancelled => {
            debug!("File dialog cancelled");
            Ok(None)
        }
        DialogResult::Error(code) => Err(PickerError::Platform { code }),
        DialogResult::Path(path) if path.as_os_str().is_empty() => Err(PickerError::EmptyPath),
        DialogResult::Path(path) if !path.is_absolute() => {
            warn!("File dialog returned a relative path: {:?}", path);
            Err(PickerError::RelativePath(path))
        }
        DialogResult::Path(path) => Ok(Some(path)),
    }
}
