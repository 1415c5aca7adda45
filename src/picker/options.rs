//! Dialog configuration passed from callers to a [`FileChooser`](super::FileChooser).

use std::path::PathBuf;

/// Which dialog variant to present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    /// Select an existing item
    Open,
    /// Select or confirm a target path
    Save,
}

/// Behavior flags for a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogFlags {
    /// Only real filesystem objects may be selected
    pub force_filesystem: bool,
    /// The process working directory is left untouched
    pub no_change_dir: bool,
    /// The selection is not added to the shell's recent-items lists
    pub dont_add_to_recent: bool,
    /// Allow more than one selection (open dialogs only; the first item wins)
    pub allow_multiple: bool,
}

impl DialogFlags {
    /// Flags every picker starts with.
    pub const DEFAULT: Self = Self {
        force_filesystem: true,
        no_change_dir: true,
        dont_add_to_recent: true,
        allow_multiple: false,
    };
}

/// A named group of file extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    /// Lowercase extensions without a leading dot, or `*` for everything
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new<I, S>(name: impl Into<String>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Returns the extensions a native dialog can filter on.
    ///
    /// Wildcard tokens (`*`, `*.*`, `?`) and empty entries are dropped.
    pub fn plain_extensions(&self) -> Vec<&str> {
        self.extensions
            .iter()
            .map(String::as_str)
            .filter(|ext| !ext.is_empty() && !ext.contains('*') && !ext.contains('?'))
            .collect()
    }

    /// Whether this filter accepts every file
    pub fn is_catch_all(&self) -> bool {
        self.extensions.iter().any(|ext| ext == "*" || ext == "*.*")
    }
}

/// Everything a backend needs to present one dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOptions {
    pub kind: DialogKind,
    pub flags: DialogFlags,
    pub title: Option<String>,
    pub filters: Vec<FileFilter>,
    pub file_name: Option<String>,
    pub directory: Option<PathBuf>,
}

impl DialogOptions {
    /// Options for `kind` with [`DialogFlags::DEFAULT`] applied.
    pub fn new(kind: DialogKind) -> Self {
        Self {
            kind,
            flags: DialogFlags::DEFAULT,
            title: None,
            filters: Vec::new(),
            file_name: None,
            directory: None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_filter(&mut self, filter: FileFilter) -> &mut Self {
        self.filters.push(filter);
        self
    }

    pub fn set_file_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) -> &mut Self {
        self.directory = Some(directory.into());
        self
    }
}
