//! Constants shared between the library and the demo binary.

/// Default window width in logical pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;

/// Default window height in logical pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 540.0;

/// Extensions offered by the image picker, most common first
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "gif", "tiff", "ico"];

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,shellpick=debug";

/// Log file name inside the logs directory
pub const LOG_FILE_NAME: &str = "shellpick.log";
