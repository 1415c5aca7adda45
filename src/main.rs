use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};

use shellpick::config::{
    ConfigPlugin, ConfigResetNotification, PickerConfig, RememberDirectoryRequest,
};
use shellpick::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use shellpick::picker::{
    FilePickerPlugin, PendingPickers, PickFileCompleted, PickFileRequest, PickerKind,
};
use shellpick::{logging, paths, rect};

/// What the demo window shows
#[derive(Resource, Default)]
struct DemoState {
    next_request_id: u64,
    last_outcome: Option<String>,
}

impl DemoState {
    fn next_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }
}

fn demo_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<DemoState>,
    pending: Res<PendingPickers>,
    config: Res<PickerConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut requests: MessageWriter<PickFileRequest>,
) -> Result {
    let start_directory = config
        .data
        .effective_start_directory()
        .map(|p| p.to_path_buf());
    let mut requested = None;

    egui::CentralPanel::default().show(contexts.ctx_mut()?, |ui| {
        ui.heading("File Pickers");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let enabled = !pending.is_busy();
            if ui.add_enabled(enabled, egui::Button::new("Open...")).clicked() {
                requested = Some(PickerKind::Open);
            }
            if ui.add_enabled(enabled, egui::Button::new("Save...")).clicked() {
                requested = Some(PickerKind::Save);
            }
            if ui.add_enabled(enabled, egui::Button::new("Open Image...")).clicked() {
                requested = Some(PickerKind::OpenImage);
            }
        });

        ui.add_space(8.0);
        match &state.last_outcome {
            Some(outcome) => ui.label(outcome.as_str()),
            None => ui.label(egui::RichText::new("Nothing picked yet").weak().italics()),
        };

        ui.add_space(16.0);
        ui.separator();
        ui.heading("Window");
        if let Ok(window) = window.single() {
            let logical = rect::Rect::from_size(window.width(), window.height());
            let physical = logical.scale(window.scale_factor() as f64);
            ui.label(format!("Scale factor: {:.2}", window.scale_factor()));
            ui.label(format!("Logical: {:.0} x {:.0}", logical.width, logical.height));
            ui.label(format!("Physical: {:.0} x {:.0}", physical.width, physical.height));
        }

        if reset_notification.show {
            ui.add_space(16.0);
            ui.separator();
            if let Some(reason) = &reset_notification.reason {
                ui.colored_label(egui::Color32::YELLOW, reason.as_str());
            }
            if ui.button("Dismiss").clicked() {
                reset_notification.show = false;
            }
        }
    });

    if let Some(kind) = requested {
        let id = state.next_id();
        let request = match kind {
            PickerKind::Open => PickFileRequest::new(id, kind).with_title("Open File"),
            PickerKind::Save => PickFileRequest::new(id, kind)
                .with_title("Save File")
                .with_file_name("untitled.txt"),
            PickerKind::OpenImage => PickFileRequest::new(id, kind).with_title("Open Image"),
        };
        requests.write(request.with_directory(start_directory));
    }

    Ok(())
}

fn handle_picker_results(
    mut completed: MessageReader<PickFileCompleted>,
    mut state: ResMut<DemoState>,
    mut remember: MessageWriter<RememberDirectoryRequest>,
) {
    for message in completed.read() {
        state.last_outcome = Some(match &message.result {
            Ok(Some(path)) => {
                remember.write(RememberDirectoryRequest { path: path.clone() });
                format!("Picked {}", path.display())
            }
            Ok(None) => "Cancelled".to_string(),
            Err(e) => format!("Error: {}", e),
        });
    }
}

fn main() {
    // Keep the guard alive for the duration of the program
    let _log_guard = logging::setup_logging();
    if let Err(e) = paths::ensure_directories() {
        eprintln!("Failed to create application directories: {}", e);
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "shellpick".into(),
                resolution: (DEFAULT_WINDOW_WIDTH as u32, DEFAULT_WINDOW_HEIGHT as u32).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(ConfigPlugin)
        .add_plugins(FilePickerPlugin)
        .init_resource::<DemoState>()
        .add_systems(Startup, |mut commands: Commands| {
            commands.spawn(Camera2d);
        })
        .add_systems(EguiPrimaryContextPass, demo_ui)
        .add_systems(
            Update,
            handle_picker_results.run_if(on_message::<PickFileCompleted>),
        )
        .run();
}
