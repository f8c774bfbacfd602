//! Content domain: character stats loaded from RON before the simulation starts.

mod loader;
mod validation;


use std::path::PathBuf;

use bevy::prelude::*;

pub use loader::{ContentLoadError, load_character_stats, parse_character_stats};
pub use validation::{ValidationError, validate_stats};

use crate::motion::CharacterStats;

/// Default location of the stats file, relative to the working directory.
pub const DEFAULT_STATS_PATH: &str = "assets/data/character_stats.ron";

/// Loads [`CharacterStats`] once at build time and inserts it as a resource.
///
/// Falls back to the built-in defaults when the file is missing, malformed or
/// fails validation.
pub struct ContentPlugin {
    pub stats_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            stats_path: PathBuf::from(DEFAULT_STATS_PATH),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(resolve_stats(&self.stats_path));
    }
}

fn resolve_stats(path: &std::path::Path) -> CharacterStats {
    let stats = match load_character_stats(path) {
        Ok(stats) => stats,
        Err(e) => {
            warn!("{}; using default character stats", e);
            return CharacterStats::default();
        }
    };

    let errors = validate_stats(&stats);
    if !errors.is_empty() {
        for error in &errors {
            warn!("{}", error);
        }
        warn!(
            "{} invalid field(s) in {}; using default character stats",
            errors.len(),
            path.display()
        );
        return CharacterStats::default();
    }

    info!(
        "Loaded character stats from {}: jump_height={:.2}, time_to_apex={:.3}s, coyote_time={}s",
        path.display(),
        stats.single_jump_height(),
        stats.time_to_apex(),
        stats.coyote_time
    );
    stats
}
