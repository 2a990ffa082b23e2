use std::path::Path;

use anyhow::Result;

use lyricscroll_core::lyrics::load_lyrics;
use lyricscroll_core::scroll::resolve_active_line;

pub async fn run(file: &Path, at: f64) -> Result<()> {
    let mut lyrics = load_lyrics(file)?;
    lyrics.update_statuses(at);

    println!("Lyrics: {:?}, {} lines", lyrics.lyrics_type, lyrics.lines.len());

    match resolve_active_line(&lyrics.lines, at) {
        Some(item) => println!(
            "Active line at {at} ms: #{} [{} - {}] {}",
            item.index,
            item.line.start_time,
            item.line.end_time,
            item.line.display_text()
        ),
        None => println!("No line is active at {at} ms"),
    }

    let counts = lyrics.status_counts();
    println!(
        "Status: {} sung, {} active, {} not sung",
        counts.sung, counts.active, counts.not_sung
    );
    if counts.all_not_sung() || counts.one_active_none_sung() {
        println!("  (start of song)");
    } else if counts.all_sung() {
        println!("  (end of song)");
    }

    Ok(())
}
