use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::templates::TemplateId;

pub const DEFAULT_SETTINGS_FILE: &str = "course-landing.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_template_id")]
    pub default_template: String,
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default = "default_write_provenance")]
    pub write_provenance: bool,
}

fn default_template_id() -> String {
    TemplateId::DEFAULT.as_str().to_string()
}

fn default_write_provenance() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_template: default_template_id(),
            output_dir: None,
            write_provenance: true,
        }
    }
}

impl Settings {
    /// Template named in the file; unknown ids fall back like any other selection.
    pub fn template(&self) -> TemplateId {
        crate::render::templates::select_template(&self.default_template)
    }

    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output_dir
            .as_deref()
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
    }
}

pub fn settings_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

pub fn load_settings(path: &Path) -> Result<Settings, String> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Unable to read {}: {e}", path.display()))?;
    if raw.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_json::from_str(&raw).map_err(|e| format!("Invalid settings JSON in {}: {e}", path.display()))
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    let payload = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(path, payload).map_err(|e| format!("Unable to write {}: {e}", path.display()))
}
