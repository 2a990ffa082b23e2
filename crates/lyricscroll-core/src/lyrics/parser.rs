use std::path::Path;

use tracing::debug;

use super::models::{Lyrics, LyricsType};
use crate::{Error, Result};

/// Load lyrics from a JSON file
pub fn load_lyrics(path: &Path) -> Result<Lyrics> {
    let content = std::fs::read_to_string(path)?;
    let lyrics = parse_lyrics(&content)?;
    debug!(
        path = %path.display(),
        lines = lyrics.lines.len(),
        kind = ?lyrics.lyrics_type,
        "Loaded lyrics"
    );
    Ok(lyrics)
}

/// Parse and validate a lyrics JSON document
///
/// Syllable lines that omit their own window inherit it from the first and
/// last syllable.
pub fn parse_lyrics(content: &str) -> Result<Lyrics> {
    let mut lyrics: Lyrics = serde_json::from_str(content)?;

    if lyrics.lyrics_type == LyricsType::Static || lyrics.lyrics_type == LyricsType::None {
        return Ok(lyrics);
    }

    for (idx, line) in lyrics.lines.iter_mut().enumerate() {
        if line.start_time == 0.0 && line.end_time == 0.0 && !line.syllables.is_empty() {
            line.start_time = line
                .syllables
                .iter()
                .map(|s| s.start_time)
                .fold(f64::INFINITY, f64::min);
            line.end_time = line
                .syllables
                .iter()
                .map(|s| s.end_time)
                .fold(f64::NEG_INFINITY, f64::max);
        }

        if !line.start_time.is_finite() || !line.end_time.is_finite() {
            return Err(Error::LyricsParse(format!("line {idx}: timestamps must be finite")));
        }
        if line.start_time < 0.0 {
            return Err(Error::LyricsParse(format!(
                "line {idx}: negative start time {}",
                line.start_time
            )));
        }
        if line.end_time < line.start_time {
            return Err(Error::LyricsParse(format!(
                "line {idx}: end {} precedes start {}",
                line.end_time, line.start_time
            )));
        }
    }

    Ok(lyrics)
}
