use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

fn default_true() -> bool {
    true
}

/// Picker preferences persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfigData {
    /// Directory dialogs start in when nothing was remembered
    #[serde(default)]
    pub start_directory: Option<PathBuf>,

    /// Whether dialogs reopen in the directory of the last picked file
    #[serde(default = "default_true")]
    pub remember_last_directory: bool,

    /// Directory of the last picked file
    #[serde(default)]
    pub last_directory: Option<PathBuf>,
}

impl Default for PickerConfigData {
    fn default() -> Self {
        Self {
            start_directory: None,
            remember_last_directory: true,
            last_directory: None,
        }
    }
}

impl PickerConfigData {
    /// Directory the next dialog should open in
    pub fn effective_start_directory(&self) -> Option<&Path> {
        if self.remember_last_directory
            && let Some(last) = &self.last_directory
        {
            return Some(last.as_path());
        }
        self.start_directory.as_deref()
    }

    /// Records the directory containing `picked`. Returns true if it changed.
    pub fn remember(&mut self, picked: &Path) -> bool {
        if !self.remember_last_directory {
            return false;
        }
        let Some(directory) = picked.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return false;
        };
        if self.last_directory.as_deref() == Some(directory) {
            return false;
        }
        self.last_directory = Some(directory.to_path_buf());
        true
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct PickerConfig {
    /// The persisted configuration data
    pub data: PickerConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            data: PickerConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify the user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    pub show: bool,
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to remember the directory of a picked file
#[derive(Message)]
pub struct RememberDirectoryRequest {
    pub path: PathBuf,
}

/// Result of loading config from disk
pub struct LoadConfigResult {
    pub data: PickerConfigData,
    /// Set when the file existed but could not be used
    pub reset_reason: Option<String>,
}

/// Load configuration from `path`, falling back to defaults
pub fn load_config(path: &Path) -> LoadConfigResult {
    if !path.exists() {
        info!("No config file found at {:?}, using defaults", path);
        return LoadConfigResult {
            data: PickerConfigData::default(),
            reset_reason: None,
        };
    }

    let (data, reset_reason) = match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", path);
                (data, None)
            }
            Err(e) => {
                warn!("Failed to parse config file: {}", e);
                (
                    PickerConfigData::default(),
                    Some(format!("Configuration file was corrupted: {}", e)),
                )
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            (
                PickerConfigData::default(),
                Some(format!("Could not read configuration file: {}", e)),
            )
        }
    };

    LoadConfigResult { data, reset_reason }
}

/// Save configuration to `path` as pretty JSON
pub fn save_config(data: &PickerConfigData, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<PickerConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;
    config.dirty = false;

    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<PickerConfig>,
) {
    for _ in events.read() {
        if !config.dirty {
            continue;
        }
        match save_config(&config.data, &config.config_path) {
            Ok(()) => info!("Config saved to {:?}", config.config_path),
            Err(e) => error!("Failed to save config: {}", e),
        }
        config.dirty = false;
    }
}

/// System to remember the directory of picked files
fn remember_directory_system(
    mut events: MessageReader<RememberDirectoryRequest>,
    mut config: ResMut<PickerConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if config.data.remember(&event.path) {
            config.dirty = true;
            save_events.write(SaveConfigRequest);
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PickerConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<RememberDirectoryRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    remember_directory_system.run_if(on_message::<RememberDirectoryRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;

    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("shellpick-test-{}", std::process::id()))
            .join(name)
    }

    fn config_app(config_path: PathBuf) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(PickerConfig {
                data: PickerConfigData::default(),
                config_path,
                dirty: false,
            })
            .add_plugins(ConfigPlugin);
        app
    }

    fn remember(app: &mut App, path: PathBuf) {
        app.world_mut()
            .resource_mut::<Messages<RememberDirectoryRequest>>()
            .write(RememberDirectoryRequest { path });
    }

    #[test]
    fn test_config_data_default() {
        let data = PickerConfigData::default();
        assert!(data.start_directory.is_none());
        assert!(data.last_directory.is_none());
        assert!(data.remember_last_directory);
    }

    #[test]
    fn test_config_data_serialization() {
        let data = PickerConfigData {
            start_directory: Some(PathBuf::from("/home/user/Pictures")),
            remember_last_directory: false,
            last_directory: Some(PathBuf::from("/tmp")),
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: PickerConfigData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: PickerConfigData = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, PickerConfigData::default());
    }

    #[test]
    fn test_effective_start_directory() {
        let mut data = PickerConfigData {
            start_directory: Some(PathBuf::from("/start")),
            ..Default::default()
        };
        assert_eq!(data.effective_start_directory(), Some(Path::new("/start")));

        data.last_directory = Some(PathBuf::from("/last"));
        assert_eq!(data.effective_start_directory(), Some(Path::new("/last")));

        data.remember_last_directory = false;
        assert_eq!(data.effective_start_directory(), Some(Path::new("/start")));
    }

    #[test]
    fn test_remember_stores_parent_directory() {
        let mut data = PickerConfigData::default();
        assert!(data.remember(Path::new("/photos/cat.png")));
        assert_eq!(data.last_directory, Some(PathBuf::from("/photos")));

        // Same directory again is not a change
        assert!(!data.remember(Path::new("/photos/dog.png")));
    }

    #[test]
    fn test_remember_disabled() {
        let mut data = PickerConfigData {
            remember_last_directory: false,
            ..Default::default()
        };
        assert!(!data.remember(Path::new("/photos/cat.png")));
        assert!(data.last_directory.is_none());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let result = load_config(&temp_config_path("does-not-exist.json"));
        assert_eq!(result.data, PickerConfigData::default());
        assert!(result.reset_reason.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path("roundtrip.json");
        let data = PickerConfigData {
            last_directory: Some(PathBuf::from("/var/data")),
            ..Default::default()
        };

        save_config(&data, &path).unwrap();
        let result = load_config(&path);
        assert_eq!(result.data, data);
        assert!(result.reset_reason.is_none());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_resets_with_reason() {
        let path = temp_config_path("corrupt.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_config(&path);
        assert_eq!(result.data, PickerConfigData::default());
        let reason = result.reset_reason.unwrap();
        assert!(reason.starts_with("Configuration file was corrupted"));

        let _ = std::fs::remove_file(&path);
    }

    // Plugin wiring
    #[test]
    fn test_remember_request_saves_config() {
        let path = temp_config_path("remember.json");
        let _ = std::fs::remove_file(&path);
        let picked_dir = std::env::temp_dir().join("photos");

        let mut app = config_app(path.clone());
        remember(&mut app, picked_dir.join("cat.png"));
        app.update();

        let config = app.world().resource::<PickerConfig>();
        assert_eq!(config.data.last_directory.as_ref(), Some(&picked_dir));
        assert!(!config.dirty);
        assert_eq!(load_config(&path).data.last_directory, Some(picked_dir));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_remember_request_ignored_when_disabled() {
        let path = temp_config_path("remember-disabled.json");
        let data = PickerConfigData {
            remember_last_directory: false,
            ..Default::default()
        };
        save_config(&data, &path).unwrap();

        let mut app = config_app(path.clone());
        remember(&mut app, std::env::temp_dir().join("photos").join("cat.png"));
        app.update();

        let config = app.world().resource::<PickerConfig>();
        assert!(config.data.last_directory.is_none());
        assert!(!config.dirty);
        assert_eq!(load_config(&path).data, data);

        let _ = std::fs::remove_file(&path);
    }
}
