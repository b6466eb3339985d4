use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use crate::error::Result;
use crate::models::ReportSettings;

pub const SETTINGS_FILE: &str = "settings.json";

pub fn default_settings_path() -> PathBuf {
    PathBuf::from(SETTINGS_FILE)
}

/// Loads report settings, falling back to defaults when the file is missing or unreadable.
pub fn load_report_settings(file_path: &Path) -> ReportSettings {
    if !file_path.exists() {
        info!(path = %file_path.display(), "no settings file found, using defaults");
        return ReportSettings::default();
    }

    match fs::read_to_string(file_path) {
        Ok(content) => {
            match serde_json::from_str::<ReportSettings>(&content) {
                Ok(mut settings) => {
                    settings.set_name_width(settings.name_width);
                    info!(
                        families = settings.spell_families.len(),
                        max_interactions = ?settings.max_interactions,
                        name_width = settings.name_width,
                        "loaded settings"
                    );
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "error parsing settings JSON, using defaults");
                    ReportSettings::default()
                }
            }
        }
        Err(e) => {
            warn!(error = %e, "error reading settings file, using defaults");
            ReportSettings::default()
        }
    }
}

pub fn save_report_settings(settings: &ReportSettings, file_path: &Path) -> Result<()> {
    let json_content = serde_json::to_string_pretty(settings)?;

    let mut file = fs::File::create(file_path)?;
    file.write_all(json_content.as_bytes())?;
    file.flush()?;

    info!(path = %file_path.display(), "saved settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("aid_report_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = load_report_settings(&temp_path("missing_settings"));
        assert_eq!(settings, ReportSettings::default());
    }

    #[test]
    fn saved_settings_load_back_clamped() {
        let path = temp_path("saved_settings");
        let mut settings = ReportSettings::default();
        settings.max_interactions = Some(500);
        settings.name_width = 99;
        save_report_settings(&settings, &path).unwrap();

        let loaded = load_report_settings(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.max_interactions, Some(500));
        assert_eq!(loaded.name_width, 40);
        assert_eq!(loaded.spell_families, settings.spell_families);
    }

    #[test]
    fn invalid_json_yields_defaults() {
        let path = temp_path("invalid_settings");
        fs::write(&path, "{ not json").unwrap();

        let loaded = load_report_settings(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, ReportSettings::default());
    }
}
