//! OS-native dialogs through `rfd`.
//!
//! Notes
//! - `rfd` only ever hands back filesystem paths, never changes the working
//!   directory, and does not register selections with recent-items lists, so
//!   the default [`DialogFlags`](super::DialogFlags) hold without extra work.
//! - Dismissal and backend failure are indistinguishable in `rfd`; both
//!   surface as [`DialogResult::Cancelled`].

use bevy::log::debug;
use futures_lite::future::Boxed;
use rfd::AsyncFileDialog;

use super::chooser::{DialogResult, FileChooser, ParentWindow};
use super::options::{DialogKind, DialogOptions, FileFilter};

/// Maps filters onto the `(name, extensions)` pairs handed to `rfd`.
///
/// A catch-all filter becomes `["*"]`, which every `rfd` backend expands to a
/// match-everything glob. Other filters keep only plain extensions, and a
/// filter left with none is skipped.
fn native_filters(filters: &[FileFilter]) -> Vec<(String, Vec<String>)> {
    filters
        .iter()
        .filter_map(|filter| {
            let extensions: Vec<String> = if filter.is_catch_all() {
                vec!["*".to_string()]
            } else {
                filter
                    .plain_extensions()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            };
            (!extensions.is_empty()).then(|| (filter.name.clone(), extensions))
        })
        .collect()
}

/// [`FileChooser`] backed by `rfd::AsyncFileDialog`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdChooser;

impl RfdChooser {
    fn build(parent: Option<&dyn ParentWindow>, options: &DialogOptions) -> AsyncFileDialog {
        let mut dialog = AsyncFileDialog::new();
        if let Some(title) = &options.title {
            dialog = dialog.set_title(title);
        }
        for (name, extensions) in native_filters(&options.filters) {
            dialog = dialog.add_filter(name, &extensions[..]);
        }
        if let Some(name) = &options.file_name {
            dialog = dialog.set_file_name(name);
        }
        if let Some(directory) = &options.directory {
            dialog = dialog.set_directory(directory);
        }
        if let Some(parent) = parent {
            dialog = dialog.set_parent(&parent);
        }
        dialog
    }
}

impl FileChooser for RfdChooser {
    fn show(
        &self,
        parent: Option<&dyn ParentWindow>,
        options: DialogOptions,
    ) -> Boxed<DialogResult> {
        let dialog = Self::build(parent, &options);
        debug!(
            "Showing {:?} dialog with {} filter(s)",
            options.kind,
            options.filters.len()
        );

        match options.kind {
            DialogKind::Open if options.flags.allow_multiple => Box::pin(async move {
                dialog
                    .pick_files()
                    .await
                    .and_then(|handles| handles.into_iter().next())
                    .map_or(DialogResult::Cancelled, |handle| {
                        DialogResult::Path(handle.path().to_path_buf())
                    })
            }),
            DialogKind::Open => Box::pin(async move {
                dialog
                    .pick_file()
                    .await
                    .map_or(DialogResult::Cancelled, |handle| {
                        DialogResult::Path(handle.path().to_path_buf())
                    })
            }),
            DialogKind::Save => Box::pin(async move {
                dialog
                    .save_file()
                    .await
                    .map_or(DialogResult::Cancelled, |handle| {
                        DialogResult::Path(handle.path().to_path_buf())
                    })
            }),
        }
    }
}
