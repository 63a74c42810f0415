use crate::config::{AssetPaths, AudioConfig};
use crate::error::GameError;
use sdl2::mixer::{self, Channel, Chunk, InitFlag, Music, Sdl2MixerContext, AUDIO_S16LSB, DEFAULT_CHANNELS, MAX_VOLUME};

const FREQUENCY: i32 = 44_100;
const CHUNK_SIZE: i32 = 1_024;
const MIXING_CHANNELS: i32 = 8;

/// Converts a 0.0-1.0 volume to SDL_mixer's 0-128 scale
pub fn mixer_volume(volume: f32) -> i32 {
    (volume.clamp(0.0, 1.0) * MAX_VOLUME as f32).round() as i32
}

/// Jump sound plus the looping background track
pub struct AudioSystem {
    jump: Chunk,
    music: Music<'static>,
    _mixer_context: Sdl2MixerContext,
}

impl AudioSystem {
    /// Opens the mixer and loads both sounds
    ///
    /// Requires the SDL audio subsystem to be initialised first.
    pub fn open(config: &AudioConfig, paths: &AssetPaths) -> Result<Self, GameError> {
        let mixer_context = mixer::init(InitFlag::MP3).map_err(GameError::Audio)?;
        mixer::open_audio(FREQUENCY, AUDIO_S16LSB, DEFAULT_CHANNELS, CHUNK_SIZE).map_err(GameError::Audio)?;
        mixer::allocate_channels(MIXING_CHANNELS);

        let mut jump = Chunk::from_file(&paths.jump_sound).map_err(|message| GameError::Asset {
            path: paths.jump_sound.clone(),
            message,
        })?;
        jump.set_volume(mixer_volume(config.jump_volume));

        let music = Music::from_file(&paths.music).map_err(|message| GameError::Asset {
            path: paths.music.clone(),
            message,
        })?;
        Music::set_volume(mixer_volume(config.music_volume));

        Ok(AudioSystem {
            jump,
            music,
            _mixer_context: mixer_context,
        })
    }

    /// Starts the background track, looping forever
    pub fn start_music(&self) -> Result<(), GameError> {
        self.music.play(-1).map_err(GameError::Audio)
    }

    /// Plays the jump sound once
    ///
    /// Running out of free channels only costs the sound, so it is logged
    /// rather than returned.
    pub fn play_jump(&self) {
        if let Err(e) = Channel::all().play(&self.jump, 0) {
            log::warn!("Could not play jump sound: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixer_volume_scale() {
        assert_eq!(mixer_volume(0.0), 0);
        assert_eq!(mixer_volume(1.0), 128);
        assert_eq!(mixer_volume(0.2), 26);
    }

    #[test]
    fn test_mixer_volume_clamps() {
        assert_eq!(mixer_volume(-1.0), 0);
        assert_eq!(mixer_volume(3.0), 128);
    }
}
