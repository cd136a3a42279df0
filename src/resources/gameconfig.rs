//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! base_width = 640
//! base_height = 320
//! scale_factor = 4
//!
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! tick_rate = 60
//! vsync = true
//!
//! [camera]
//! speed = 0.1
//! zoom_step = 0.01
//! min_zoom = 1.0
//! max_zoom = 4.0
//!
//! [player]
//! speed = 300.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::camera::CameraSettings;
use crate::resources::screen::{DEFAULT_BASE_HEIGHT, DEFAULT_BASE_WIDTH, DEFAULT_SCALE_FACTOR};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_PLAYER_SPEED: f32 = 300.0;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the render resolution, window settings, camera tuning and player
/// speed. Missing keys keep their current values when loading.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Base logical width, multiplied by `scale_factor` for the target width.
    pub base_width: u32,
    /// Base logical height, multiplied by `scale_factor` for the target height.
    pub base_height: u32,
    /// Integer scale from base to target resolution.
    pub scale_factor: u32,
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Target render frames per second.
    pub target_fps: u32,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Camera smoothing and zoom range.
    pub camera: CameraSettings,
    /// Player speed in world units per second.
    pub player_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            base_width: DEFAULT_BASE_WIDTH,
            base_height: DEFAULT_BASE_HEIGHT,
            scale_factor: DEFAULT_SCALE_FACTOR,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            tick_rate: DEFAULT_TICK_RATE,
            vsync: DEFAULT_VSYNC,
            camera: CameraSettings::default(),
            player_speed: DEFAULT_PLAYER_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Target resolution: base resolution times scale factor.
    pub fn target_size(&self) -> (u32, u32) {
        (
            self.base_width.saturating_mul(self.scale_factor),
            self.base_height.saturating_mul(self.scale_factor),
        )
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Camera settings to build the camera with.
    pub fn camera_settings(&self) -> CameraSettings {
        self.camera
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let get_u32 = |section: &str, key: &str| {
            config
                .getuint(section, key)
                .ok()
                .flatten()
                .and_then(|v| u32::try_from(v).ok())
        };
        let get_f32 = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [render] section
        let base_width = get_u32("render", "base_width").unwrap_or(self.base_width);
        let base_height = get_u32("render", "base_height").unwrap_or(self.base_height);
        let scale_factor = get_u32("render", "scale_factor").unwrap_or(self.scale_factor);
        if base_width == 0 || base_height == 0 || scale_factor == 0 {
            warn!(
                "Ignoring render resolution {}x{} x{}: all values must be positive",
                base_width, base_height, scale_factor
            );
        } else {
            self.base_width = base_width;
            self.base_height = base_height;
            self.scale_factor = scale_factor;
        }

        // [window] section
        if let Some(width) = get_u32("window", "width") {
            self.window_width = width;
        }
        if let Some(height) = get_u32("window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = get_u32("window", "target_fps") {
            self.target_fps = fps;
        }
        match get_u32("window", "tick_rate") {
            Some(0) => warn!("Ignoring tick_rate = 0"),
            Some(rate) => self.tick_rate = rate,
            None => {}
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [camera] section
        let camera = CameraSettings {
            speed: get_f32("camera", "speed").unwrap_or(self.camera.speed),
            zoom_step: get_f32("camera", "zoom_step").unwrap_or(self.camera.zoom_step),
            min_zoom: get_f32("camera", "min_zoom").unwrap_or(self.camera.min_zoom),
            max_zoom: get_f32("camera", "max_zoom").unwrap_or(self.camera.max_zoom),
        };
        match camera.validate() {
            Ok(()) => self.camera = camera,
            Err(e) => warn!("Ignoring [camera] settings: {}", e),
        }

        // [player] section
        match get_f32("player", "speed") {
            Some(speed) if !speed.is_finite() || speed < 0.0 => {
                warn!("Ignoring [player] speed {}: must be finite and not negative", speed)
            }
            Some(speed) => self.player_speed = speed,
            None => {}
        }

        let (target_w, target_h) = self.target_size();
        info!(
            "Loaded config: {}x{} target, {}x{} window, fps={}, tick_rate={}, vsync={}, zoom=[{}, {}]",
            target_w,
            target_h,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.tick_rate,
            self.vsync,
            self.camera.min_zoom,
            self.camera.max_zoom
        );
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        // [render] section
        config.set("render", "base_width", Some(self.base_width.to_string()));
        config.set("render", "base_height", Some(self.base_height.to_string()));
        config.set("render", "scale_factor", Some(self.scale_factor.to_string()));

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "tick_rate", Some(self.tick_rate.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [camera] section
        config.set("camera", "speed", Some(self.camera.speed.to_string()));
        config.set("camera", "zoom_step", Some(self.camera.zoom_step.to_string()));
        config.set("camera", "min_zoom", Some(self.camera.min_zoom.to_string()));
        config.set("camera", "max_zoom", Some(self.camera.max_zoom.to_string()));

        // [player] section
        config.set("player", "speed", Some(self.player_speed.to_string()));

        config
    }

    /// Configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
