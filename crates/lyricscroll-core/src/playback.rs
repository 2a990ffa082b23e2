//! Playback position sources
//!
//! The scroll policy only needs the current position and whether the track is
//! playing. `PlaybackClock` is a monotonic simulated player for front ends that
//! have no real media backend; `PlaybackSnapshot` freezes a reading so a tick
//! sees one consistent value.

use std::time::Instant;

use crate::lyrics::Lyrics;

/// Track time kept after the last line ends
pub const END_TAIL_MS: f64 = 1000.0;

/// Source of the current playback position (milliseconds)
pub trait PlaybackSource {
    fn position(&self) -> f64;
    fn is_playing(&self) -> bool;
}

/// A single reading of a playback source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSnapshot {
    pub position: f64,
    pub playing: bool,
}

impl PlaybackSnapshot {
    pub fn playing(position: f64) -> Self {
        Self { position, playing: true }
    }

    pub fn paused(position: f64) -> Self {
        Self { position, playing: false }
    }
}

impl PlaybackSource for PlaybackSnapshot {
    fn position(&self) -> f64 {
        self.position
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// Simulated player clock
///
/// While playing, the position advances with wall time from `anchor`. All
/// mutating calls take an explicit `now` so callers can drive it from a
/// virtual clock.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    /// Position at `anchor` (or the frozen position while paused)
    base_position: f64,
    /// Set while playing
    anchor: Option<Instant>,
    /// Track length; position is clamped to it
    duration: f64,
}

impl PlaybackClock {
    pub fn new(duration: f64) -> Self {
        Self {
            base_position: 0.0,
            anchor: None,
            duration: duration.max(0.0),
        }
    }

    /// Clock for a lyrics track, running past the last line so it can be
    /// fully sung
    pub fn for_lyrics(lyrics: &Lyrics) -> Self {
        Self::new(lyrics.duration() + END_TAIL_MS)
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn position_at(&self, now: Instant) -> f64 {
        let position = match self.anchor {
            Some(anchor) => {
                let elapsed = now.saturating_duration_since(anchor).as_secs_f64() * 1000.0;
                self.base_position + elapsed
            }
            None => self.base_position,
        };
        position.clamp(0.0, self.duration)
    }

    pub fn is_playing_at(&self, now: Instant) -> bool {
        self.anchor.is_some() && self.position_at(now) < self.duration
    }

    pub fn play_at(&mut self, now: Instant) {
        if self.anchor.is_none() {
            self.anchor = Some(now);
        }
    }

    pub fn pause_at(&mut self, now: Instant) {
        self.base_position = self.position_at(now);
        self.anchor = None;
    }

    pub fn toggle_at(&mut self, now: Instant) {
        if self.anchor.is_some() {
            self.pause_at(now);
        } else {
            self.play_at(now);
        }
    }

    /// Jump to an absolute position, keeping the play/pause state
    pub fn seek_at(&mut self, now: Instant, position: f64) {
        self.base_position = position.clamp(0.0, self.duration);
        if self.anchor.is_some() {
            self.anchor = Some(now);
        }
    }

    /// Seek relative to the current position
    pub fn seek_by_at(&mut self, now: Instant, delta: f64) {
        let target = self.position_at(now) + delta;
        self.seek_at(now, target);
    }

    pub fn snapshot_at(&self, now: Instant) -> PlaybackSnapshot {
        PlaybackSnapshot {
            position: self.position_at(now),
            playing: self.is_playing_at(now),
        }
    }
}

impl PlaybackSource for PlaybackClock {
    fn position(&self) -> f64 {
        self.position_at(Instant::now())
    }

    fn is_playing(&self) -> bool {
        self.is_playing_at(Instant::now())
    }
}
