//! Loader for the RON character stats file read at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::motion::CharacterStats;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse stats from RON text. `source` only labels errors.
pub fn parse_character_stats(source: &str, contents: &str) -> Result<CharacterStats, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: source.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load character stats from a RON file such as `assets/data/character_stats.ron`.
pub fn load_character_stats(path: &Path) -> Result<CharacterStats, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_character_stats(&file_name, &contents)
}
