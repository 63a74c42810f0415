//! Texture loading
//!
//! All images are loaded once at startup and owned here for the life of the
//! window. Any missing or unreadable file aborts startup.

use crate::config::AssetPaths;
use crate::entity::{FrameSize, SpriteMetrics};
use crate::error::GameError;
use crate::game::SessionMetrics;
use crate::obstacle::{ObstacleKind, ObstacleMetrics};
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::path::{Path, PathBuf};

/// Loads a single texture, tagging any failure with the file path
pub fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'a>, GameError> {
    texture_creator.load_texture(path).map_err(|message| GameError::Asset {
        path: path.to_path_buf(),
        message,
    })
}

fn load_frames<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    paths: &[PathBuf],
) -> Result<Vec<Texture<'a>>, GameError> {
    if paths.is_empty() {
        return Err(GameError::InvalidConfig("animation has no frames".to_string()));
    }
    paths.iter().map(|path| load_texture(texture_creator, path)).collect()
}

pub fn texture_size(texture: &Texture) -> FrameSize {
    let query = texture.query();
    FrameSize::new(query.width, query.height)
}

/// Hitbox comes from the first frame, the cycle length from the frame count
fn animation_metrics(frames: &[Texture]) -> SpriteMetrics {
    let size = frames.first().map(texture_size).unwrap_or(FrameSize::new(1, 1));
    SpriteMetrics::new(size, frames.len())
}

/// Every texture the game draws
pub struct GameTextures<'a> {
    pub sky: Texture<'a>,
    pub ground: Texture<'a>,
    pub player_walk: Vec<Texture<'a>>,
    pub player_jump: Texture<'a>,
    pub player_stand: Texture<'a>,
    pub fly: Vec<Texture<'a>>,
    pub snail: Vec<Texture<'a>>,
}

impl<'a> GameTextures<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>, paths: &AssetPaths) -> Result<Self, GameError> {
        let textures = GameTextures {
            sky: load_texture(texture_creator, &paths.sky)?,
            ground: load_texture(texture_creator, &paths.ground)?,
            player_walk: load_frames(texture_creator, &paths.player_walk)?,
            player_jump: load_texture(texture_creator, &paths.player_jump)?,
            player_stand: load_texture(texture_creator, &paths.player_stand)?,
            fly: load_frames(texture_creator, &paths.fly)?,
            snail: load_frames(texture_creator, &paths.snail)?,
        };

        log::info!(
            "Loaded {} textures ({} walk, {} fly, {} snail frames)",
            4 + textures.player_walk.len() + textures.fly.len() + textures.snail.len(),
            textures.player_walk.len(),
            textures.fly.len(),
            textures.snail.len(),
        );
        Ok(textures)
    }

    pub fn obstacle_frames(&self, kind: ObstacleKind) -> &[Texture<'a>] {
        match kind {
            ObstacleKind::Fly => &self.fly,
            ObstacleKind::Snail => &self.snail,
        }
    }

    /// Hitbox sizes and frame counts for the simulation
    pub fn metrics(&self) -> SessionMetrics {
        SessionMetrics {
            player: animation_metrics(&self.player_walk),
            obstacles: ObstacleMetrics {
                fly: animation_metrics(&self.fly),
                snail: animation_metrics(&self.snail),
            },
        }
    }
}
