use std::fmt;
use std::path::PathBuf;

/// Errors that can stop the game from starting
///
/// Everything in here is raised during initialisation. Once the loop is
/// running the only failures are SDL draw calls, which surface as `Sdl`.
#[derive(Debug)]
pub enum GameError {
    /// SDL subsystem or draw call failure (SDL reports errors as strings)
    Sdl(String),

    /// Image or sound file could not be loaded
    Asset { path: PathBuf, message: String },

    /// Mixer could not be opened or configured
    Audio(String),

    /// Config file exists but could not be read
    ConfigIo(std::io::Error),

    /// Config file is not valid JSON for `GameConfig`
    ConfigParse(serde_json::Error),

    /// Config parsed but holds values the game cannot run with
    InvalidConfig(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Sdl(message) => write!(f, "SDL error: {}", message),
            GameError::Asset { path, message } => {
                write!(f, "Failed to load {}: {}", path.display(), message)
            }
            GameError::Audio(message) => write!(f, "Audio error: {}", message),
            GameError::ConfigIo(e) => write!(f, "Failed to read config: {}", e),
            GameError::ConfigParse(e) => write!(f, "Failed to parse config: {}", e),
            GameError::InvalidConfig(message) => write!(f, "Invalid config: {}", message),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigIo(e) => Some(e),
            GameError::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<String> for GameError {
    fn from(error: String) -> Self {
        GameError::Sdl(error)
    }
}

impl From<std::io::Error> for GameError {
    fn from(error: std::io::Error) -> Self {
        GameError::ConfigIo(error)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(error: serde_json::Error) -> Self {
        GameError::ConfigParse(error)
    }
}
