//! Game configuration
//!
//! Every tunable number lives here. Values are read from an optional JSON file
//! and any field left out falls back to the built-in default, so an empty `{}`
//! is a valid config.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory
pub const LOCAL_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub obstacles: ObstacleConfig,
    pub scoring: ScoringConfig,
    pub audio: AudioConfig,
    pub assets: AssetPaths,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Pixel Runner".to_string(),
            width: 800,
            height: 400,
            fps: 60,
        }
    }
}

/// Player physics, in pixels and ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub ground_y: i32,
    pub player_x: i32,
    pub jump_impulse: i32,
    pub gravity: i32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            ground_y: 300,
            player_x: 80,
            jump_impulse: -20,
            gravity: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub spawn_interval_ms: u64,
    /// Inclusive lower bound of the spawn x
    pub spawn_min_x: i32,
    /// Exclusive upper bound of the spawn x
    pub spawn_max_x: i32,
    pub speed: i32,
    pub retire_x: i32,
    pub fly_bottom: i32,
    pub fly_weight: u32,
    pub snail_weight: u32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        ObstacleConfig {
            spawn_interval_ms: 1500,
            spawn_min_x: 900,
            spawn_max_x: 1100,
            speed: 6,
            retire_x: -100,
            fly_bottom: 210,
            fly_weight: 1,
            snail_weight: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub ms_per_point: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig { ms_per_point: 100 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub jump_volume: f32,
    pub music_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        AudioConfig {
            jump_volume: 0.2,
            music_volume: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub sky: PathBuf,
    pub ground: PathBuf,
    pub player_walk: Vec<PathBuf>,
    pub player_jump: PathBuf,
    pub player_stand: PathBuf,
    pub fly: Vec<PathBuf>,
    pub snail: Vec<PathBuf>,
    pub jump_sound: PathBuf,
    pub music: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            sky: "assets/graphics/Sky.png".into(),
            ground: "assets/graphics/ground.png".into(),
            player_walk: vec![
                "assets/graphics/player/player_walk_1.png".into(),
                "assets/graphics/player/player_walk_2.png".into(),
            ],
            player_jump: "assets/graphics/player/jump.png".into(),
            player_stand: "assets/graphics/player/player_stand.png".into(),
            fly: vec![
                "assets/graphics/fly/fly1.png".into(),
                "assets/graphics/fly/fly2.png".into(),
            ],
            snail: vec![
                "assets/graphics/snail/snail1.png".into(),
                "assets/graphics/snail/snail2.png".into(),
            ],
            jump_sound: "assets/audio/jump.mp3".into(),
            music: "assets/audio/music.wav".into(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Candidate config files, highest priority first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("pixel_runner").join("game.json"));
        }
        paths.push(PathBuf::from(LOCAL_CONFIG_PATH));
        paths
    }

    /// Load the first config file that exists, or the defaults if none do
    ///
    /// A file that exists but is broken is an error rather than a silent
    /// fallback.
    pub fn load() -> Result<(Self, Option<PathBuf>), GameError> {
        for path in Self::search_paths() {
            if path.is_file() {
                let config = Self::load_from_file(&path)?;
                return Ok((config, Some(path)));
            }
        }
        Ok((GameConfig::default(), None))
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |message: &str| -> Result<(), GameError> {
            Err(GameError::InvalidConfig(message.to_string()))
        };

        if self.window.fps == 0 {
            return invalid("window.fps must be positive");
        }
        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero");
        }
        if self.physics.ground_y <= 0 || self.physics.ground_y > self.window.height as i32 {
            return invalid("physics.ground_y must lie inside the window");
        }
        if self.obstacles.spawn_interval_ms == 0 {
            return invalid("obstacles.spawn_interval_ms must be positive");
        }
        if self.obstacles.spawn_min_x >= self.obstacles.spawn_max_x {
            return invalid("obstacles.spawn_min_x must be below spawn_max_x");
        }
        if self.obstacles.fly_weight + self.obstacles.snail_weight == 0 {
            return invalid("at least one obstacle weight must be non-zero");
        }
        if self.scoring.ms_per_point == 0 {
            return invalid("scoring.ms_per_point must be positive");
        }
        for volume in [self.audio.jump_volume, self.audio.music_volume] {
            if !(0.0..=1.0).contains(&volume) {
                return invalid("audio volumes must be between 0.0 and 1.0");
            }
        }
        if self.assets.player_walk.is_empty() || self.assets.fly.is_empty() || self.assets.snail.is_empty() {
            return invalid("every animation needs at least one frame");
        }
        Ok(())
    }
}
