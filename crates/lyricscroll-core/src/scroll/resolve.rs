use crate::lyrics::{EnhancedItem, LyricsLine};

/// Find the line whose timing window contains `position`
///
/// Overlapping windows are common around fast passages. A tight cluster of
/// matches (first and last at most one index apart) resolves to the earliest
/// onset; a wider spread resolves to the last match so playback moves forward.
pub fn resolve_active_line(lines: &[LyricsLine], position: f64) -> Option<EnhancedItem<'_>> {
    let mut first: Option<usize> = None;
    let mut last = 0;

    for (idx, line) in lines.iter().enumerate() {
        if line.contains(position) {
            if first.is_none() {
                first = Some(idx);
            }
            last = idx;
        }
    }

    let first = first?;
    let index = if last - first <= 1 { first } else { last };
    Some(EnhancedItem {
        line: &lines[index],
        index,
    })
}
