mod models;
mod parser;

pub use models::{
    ElementId, EnhancedItem, LineStatus, Lyrics, LyricsLine, LyricsType, StatusCounts, Syllable,
};
pub use parser::{load_lyrics, parse_lyrics};
