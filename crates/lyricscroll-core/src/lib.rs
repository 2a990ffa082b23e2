pub mod config;
pub mod error;
pub mod lyrics;
pub mod playback;
pub mod scroll;

pub use config::{AppConfig, EasingType, PolicyConfig, ScrollConfig};
pub use error::{Error, Result};
pub use lyrics::{LineStatus, Lyrics, LyricsLine, LyricsType};
pub use playback::{PlaybackClock, PlaybackSnapshot, PlaybackSource};
pub use scroll::{ScrollController, ScrollPolicyState};
