use serde::{Deserialize, Serialize};

/// Which flavour of lyrics is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LyricsType {
    /// Untimed text, never auto-scrolled
    Static,
    /// Line-synced lyrics
    Line,
    /// Syllable-synced lyrics
    Syllable,
    /// Nothing loaded
    None,
}

impl LyricsType {
    /// Whether line-level auto-scrolling applies to this type
    pub fn supports_scrolling(self) -> bool {
        matches!(self, LyricsType::Line | LyricsType::Syllable)
    }
}

/// Sung state of a line, as tagged by the lyrics renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStatus {
    #[default]
    NotSung,
    Active,
    Sung,
}

/// Opaque handle to the rendered node of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Syllable {
    pub text: String,
    #[serde(rename = "start")]
    pub start_time: f64,
    #[serde(rename = "end")]
    pub end_time: f64,
}

/// A lyric line (or syllable group) with its timing window in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricsLine {
    #[serde(rename = "start", default)]
    pub start_time: f64,
    #[serde(rename = "end", default)]
    pub end_time: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub syllables: Vec<Syllable>,
    /// Instrumental/transition marker line
    #[serde(default)]
    pub dot_line: bool,
    #[serde(skip)]
    pub status: LineStatus,
    /// Set once the line has been rendered
    #[serde(skip)]
    pub element: Option<ElementId>,
}

impl LyricsLine {
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
            syllables: Vec::new(),
            dot_line: false,
            status: LineStatus::NotSung,
            element: None,
        }
    }

    /// Whether the closed interval `[start, end]` contains the position
    #[inline]
    pub fn contains(&self, position: f64) -> bool {
        self.start_time <= position && self.end_time >= position
    }

    /// Display text, joining syllables when the line carries no plain text
    pub fn display_text(&self) -> String {
        if !self.text.is_empty() || self.syllables.is_empty() {
            return self.text.clone();
        }
        self.syllables.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A line together with its position in the sequence
#[derive(Debug, Clone, Copy)]
pub struct EnhancedItem<'a> {
    pub line: &'a LyricsLine,
    pub index: usize,
}

impl EnhancedItem<'_> {
    pub fn element(&self) -> Option<ElementId> {
        self.line.element
    }
}

/// Aggregate status counts over all lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub not_sung: usize,
    pub active: usize,
    pub sung: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn all_not_sung(&self) -> bool {
        self.not_sung == self.total
    }

    /// Playback sits on the first singable line
    pub fn one_active_none_sung(&self) -> bool {
        self.active == 1 && self.sung == 0
    }

    pub fn all_sung(&self) -> bool {
        self.sung == self.total
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lyrics {
    #[serde(rename = "type")]
    pub lyrics_type: LyricsType,
    #[serde(default)]
    pub lines: Vec<LyricsLine>,
}

impl Lyrics {
    pub fn new(lyrics_type: LyricsType, lines: Vec<LyricsLine>) -> Self {
        Self { lyrics_type, lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            total: self.lines.len(),
            ..Default::default()
        };
        for line in &self.lines {
            match line.status {
                LineStatus::NotSung => counts.not_sung += 1,
                LineStatus::Active => counts.active += 1,
                LineStatus::Sung => counts.sung += 1,
            }
        }
        counts
    }

    /// Tag every line relative to the playback position
    pub fn update_statuses(&mut self, position: f64) {
        for line in &mut self.lines {
            line.status = if line.end_time < position {
                LineStatus::Sung
            } else if line.start_time <= position {
                LineStatus::Active
            } else {
                LineStatus::NotSung
            };
        }
    }

    /// Hand out one element handle per line, in order
    pub fn attach_elements(&mut self) {
        for (idx, line) in self.lines.iter_mut().enumerate() {
            line.element = Some(ElementId(idx));
        }
    }

    pub fn detach_elements(&mut self) {
        for line in &mut self.lines {
            line.element = None;
        }
    }

    /// End of the last line, used as the track length by the demo player
    pub fn duration(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.end_time)
            .fold(0.0_f64, f64::max)
    }
}
