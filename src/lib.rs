//! Native file pickers and saturating rect scaling for bevy desktop UIs.
//!
//! - [`rect`] - `Rect` and [`scale_rect`](rect::scale_rect)
//! - [`picker`] - open/save/image pickers over a pluggable [`FileChooser`](picker::FileChooser)
//! - [`config`] - persisted picker preferences
//! - [`paths`] / [`logging`] - config locations and log setup

pub mod config;
pub mod constants;
pub mod logging;
pub mod paths;
pub mod picker;
pub mod rect;

pub use picker::{
    DialogKind, DialogOptions, FileChooser, FilePickerPlugin, PickerError, PickerResult,
    RfdChooser, open_file_picker, open_image_picker, save_file_picker,
};
pub use rect::{Rect, scale_rect};
