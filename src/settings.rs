use std::path::PathBuf;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::shapes::{BlobParams, DEFAULT_CONCAVITY, DEFAULT_CORNER_RADIUS_RATIO};
use crate::MascotApp;

/// Returns the path to the settings file: `~/.config/koji-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("koji-rs");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub show_settings: bool,

    // Body
    pub body_width: f32,
    pub body_height: f32,
    pub corner_radius_ratio: f32,
    pub concavity: f32,

    // Display
    pub zoom: f32,
    pub curve_segments: usize,
    pub show_outline: bool,
    pub show_construction: bool,

    // Theme (stored as unmultiplied sRGBA since Color32 isn't serde-friendly)
    pub body_color: [u8; 4],
    pub eye_white_color: [u8; 4],
    pub pupil_color: [u8; 4],
    pub background_color: [u8; 4],
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_settings: true,

            body_width: 400.0,
            body_height: 400.0,
            corner_radius_ratio: DEFAULT_CORNER_RADIUS_RATIO,
            concavity: DEFAULT_CONCAVITY,

            zoom: 0.9,
            curve_segments: 16,
            show_outline: false,
            show_construction: false,

            body_color: [0x28, 0xcc, 0x56, 0xff],
            eye_white_color: [0xff, 0xff, 0xff, 0xff],
            pupil_color: [0x00, 0x00, 0x00, 0xff],
            background_color: [0xfe, 0xf7, 0xff, 0xff],
        }
    }
}

fn to_rgba(color: Color32) -> [u8; 4] {
    color.to_srgba_unmultiplied()
}

fn from_rgba([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                } else {
                    log::debug!("Saved settings to {}", path.display());
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Body parameters described by these settings
    pub fn blob_params(&self) -> BlobParams {
        BlobParams::new(self.body_width, self.body_height)
            .with_corner_radius_ratio(self.corner_radius_ratio)
            .with_concavity(self.concavity)
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &MascotApp) -> Self {
        let display = &app.canvas.settings;
        Self {
            show_settings: app.show_settings,

            body_width: app.params.width,
            body_height: app.params.height,
            corner_radius_ratio: app.params.corner_radius_ratio,
            concavity: app.params.concavity,

            zoom: display.zoom,
            curve_segments: display.curve_segments,
            show_outline: display.show_outline,
            show_construction: display.show_construction,

            body_color: to_rgba(display.body_color),
            eye_white_color: to_rgba(display.eye_white_color),
            pupil_color: to_rgba(display.pupil_color),
            background_color: to_rgba(display.background),
        }
    }

    /// Apply loaded settings to the running application.
    pub fn apply(&self, app: &mut MascotApp) {
        app.show_settings = self.show_settings;
        app.params = self.blob_params();

        let display = &mut app.canvas.settings;
        display.zoom = self.zoom;
        display.curve_segments = self.curve_segments.max(1);
        display.show_outline = self.show_outline;
        display.show_construction = self.show_construction;

        display.body_color = from_rgba(self.body_color);
        display.eye_white_color = from_rgba(self.eye_white_color);
        display.pupil_color = from_rgba(self.pupil_color);
        display.background = from_rgba(self.background_color);

        app.canvas.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"concavity": 0.5}"#).unwrap();
        assert_eq!(settings.concavity, 0.5);
        assert_eq!(settings.body_width, 400.0);
        assert_eq!(settings.body_color, [0x28, 0xcc, 0x56, 0xff]);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = AppSettings {
            body_height: 320.0,
            show_outline: true,
            ..AppSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_blob_params_from_settings() {
        let settings = AppSettings {
            body_width: 300.0,
            corner_radius_ratio: 0.25,
            ..AppSettings::default()
        };
        let params = settings.blob_params();
        assert_eq!(params.width, 300.0);
        assert_eq!(params.height, 400.0);
        assert_eq!(params.corner_radius_ratio, 0.25);
        assert_eq!(params.concavity, DEFAULT_CONCAVITY);
    }

    #[test]
    fn test_translucent_color_survives_restart() {
        let mut app = MascotApp::with_settings(&AppSettings::default());
        let picked = Color32::from_rgba_unmultiplied(0x28, 0xcc, 0x56, 128);
        app.canvas.settings.body_color = picked;

        let json = serde_json::to_string(&AppSettings::from_app(&app)).unwrap();
        let saved: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(saved.body_color[3], 128);

        let mut restarted = MascotApp::with_settings(&AppSettings::default());
        saved.apply(&mut restarted);
        let reloaded = restarted.canvas.settings.body_color;

        assert_eq!(reloaded.a(), picked.a());
        for (got, want) in reloaded.to_array().iter().zip(picked.to_array().iter()) {
            assert!(got.abs_diff(*want) <= 2, "{:?} vs {:?}", reloaded, picked);
        }
    }

    #[test]
    fn test_apply_then_extract() {
        let mut app = MascotApp::with_settings(&AppSettings::default());
        let settings = AppSettings {
            concavity: 0.7,
            pupil_color: [10, 20, 30, 0xff],
            show_construction: true,
            ..AppSettings::default()
        };
        settings.apply(&mut app);
        assert_eq!(AppSettings::from_app(&app), settings);
    }
}
