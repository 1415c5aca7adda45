//! Bevy integration: picker requests in, completion messages out.
//!
//! Requests are turned into tasks on the [`AsyncComputeTaskPool`] so the
//! frame loop never waits on an open dialog. Tasks are polled once per frame
//! and despawned when they resolve.

use std::path::PathBuf;
use std::sync::Arc;

use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use futures_lite::future;

use super::chooser::FileChooser;
use super::options::DialogOptions;
use super::pick::{PickerResult, image_filters, open_file_picker, save_file_picker};
use super::rfd_backend::RfdChooser;

/// Which picker a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Open,
    Save,
    OpenImage,
}

/// Message asking for a dialog to be shown.
///
/// Dialogs opened this way have no parent window: raw window handles are
/// not `Send`, so they cannot travel into the task pool. Call
/// [`open_file_picker`] / [`save_file_picker`] directly to parent a dialog.
#[derive(Message, Debug, Clone)]
pub struct PickFileRequest {
    /// Caller-chosen id echoed back in [`PickFileCompleted`]
    pub id: u64,
    pub kind: PickerKind,
    pub title: Option<String>,
    pub directory: Option<PathBuf>,
    pub file_name: Option<String>,
}

impl PickFileRequest {
    pub fn new(id: u64, kind: PickerKind) -> Self {
        Self {
            id,
            kind,
            title: None,
            directory: None,
            file_name: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_directory(mut self, directory: Option<PathBuf>) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    fn customize(&self, options: &mut DialogOptions) {
        if self.kind == PickerKind::OpenImage {
            for filter in image_filters() {
                options.add_filter(filter);
            }
        }
        if let Some(title) = &self.title {
            options.set_title(title.clone());
        }
        if let Some(directory) = &self.directory {
            options.set_directory(directory.clone());
        }
        if let Some(name) = &self.file_name {
            options.set_file_name(name.clone());
        }
    }
}

/// Message written when a dialog resolves
#[derive(Message, Debug, Clone)]
pub struct PickFileCompleted {
    pub id: u64,
    pub kind: PickerKind,
    pub result: PickerResult,
}

/// The dialog service used for every request
#[derive(Resource, Clone)]
pub struct PickerBackend(pub Arc<dyn FileChooser>);

impl Default for PickerBackend {
    fn default() -> Self {
        Self(Arc::new(RfdChooser))
    }
}

/// Number of dialogs currently open, recounted from [`PickerTask`] entities each frame
#[derive(Resource, Default)]
pub struct PendingPickers {
    pub count: usize,
}

impl PendingPickers {
    pub fn is_busy(&self) -> bool {
        self.count > 0
    }
}

/// Component for an in-flight dialog
#[derive(Component)]
pub struct PickerTask {
    pub id: u64,
    pub kind: PickerKind,
    task: Task<PickerResult>,
}

/// Spawns a task for each incoming request
pub fn spawn_picker_tasks(
    mut commands: Commands,
    mut requests: MessageReader<PickFileRequest>,
    backend: Res<PickerBackend>,
) {
    let task_pool = AsyncComputeTaskPool::get();
    for request in requests.read() {
        let chooser = backend.0.as_ref();
        let picker = match request.kind {
            PickerKind::Open | PickerKind::OpenImage => {
                open_file_picker(chooser, None, |options| request.customize(options))
            }
            PickerKind::Save => {
                save_file_picker(chooser, None, |options| request.customize(options))
            }
        };

        debug!("Starting {:?} picker (request {})", request.kind, request.id);
        commands.spawn(PickerTask {
            id: request.id,
            kind: request.kind,
            task: task_pool.spawn(picker),
        });
    }
}

/// Polls picker tasks and reports completion
pub fn poll_picker_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut PickerTask)>,
    mut completed: MessageWriter<PickFileCompleted>,
) {
    for (entity, mut picker) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut picker.task)) else {
            continue;
        };

        match &result {
            Ok(Some(path)) => info!("Picked {:?} (request {})", path, picker.id),
            Ok(None) => info!("Picker cancelled (request {})", picker.id),
            Err(e) => error!("Picker failed (request {}): {}", picker.id, e),
        }

        completed.write(PickFileCompleted {
            id: picker.id,
            kind: picker.kind,
            result,
        });
        commands.entity(entity).despawn();
    }
}

/// Recounts in-flight dialogs after spawning and polling have been applied
pub fn count_pending_pickers(
    tasks: Query<(), With<PickerTask>>,
    mut pending: ResMut<PendingPickers>,
) {
    let count = tasks.iter().count();
    if pending.count != count {
        pending.count = count;
    }
}

pub struct FilePickerPlugin;

impl Plugin for FilePickerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PickerBackend>()
            .init_resource::<PendingPickers>()
            .add_message::<PickFileRequest>()
            .add_message::<PickFileCompleted>()
            .add_systems(
                Update,
                (spawn_picker_tasks, poll_picker_tasks, count_pending_pickers).chain(),
            );
    }
}
