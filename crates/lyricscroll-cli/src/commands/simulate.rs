use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::debug;

use lyricscroll_core::lyrics::load_lyrics;
use lyricscroll_core::scroll::{
    ContainerId, LyricsView, ScrollAlignment, ScrollCommand, ScrollContainer, ScrollInput,
};
use lyricscroll_core::{AppConfig, Lyrics, PlaybackClock, ScrollController};

pub struct SimulateOptions {
    pub step_ms: u64,
    pub seeks: Vec<(u64, f64)>,
    pub wheels: Vec<u64>,
    pub pauses: Vec<u64>,
    pub compact: bool,
}

/// Parse `AT:TO` (both milliseconds)
pub fn parse_seek(s: &str) -> Result<(u64, f64), String> {
    let (at, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected AT:TO, got '{s}'"))?;
    let at = at
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid seek time '{at}': {e}"))?;
    let to = to
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid seek target '{to}': {e}"))?;
    if !to.is_finite() || to < 0.0 {
        return Err(format!("seek target must be a non-negative number, got {to}"));
    }
    Ok((at, to))
}

/// Headless view: always mounted, no content to move
#[derive(Debug)]
struct HeadlessView {
    compact: bool,
}

impl ScrollContainer for HeadlessView {
    fn scroll_element(&self) -> Option<ContainerId> {
        Some(ContainerId(0))
    }

    fn recalculate(&mut self) {}

    fn is_dragging(&self) -> bool {
        false
    }
}

impl LyricsView for HeadlessView {
    // Nothing to move; `flush` reports each executed command
    fn scroll_into_view(&mut self, _command: &ScrollCommand, _now: Instant) {}

    fn set_scroll_suppressed(&mut self, _suppressed: bool) -> bool {
        true
    }

    fn is_compact(&self) -> bool {
        self.compact
    }
}

/// One executed scroll at a virtual time
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedScroll {
    pub at_ms: u64,
    pub position: f64,
    pub command: ScrollCommand,
}

/// Drive the policy over the whole track on a virtual clock
pub fn simulate(config: &AppConfig, mut lyrics: Lyrics, options: &SimulateOptions) -> Vec<SimulatedScroll> {
    lyrics.attach_elements();

    let mut controller = ScrollController::new(&config.policy);
    let mut view = HeadlessView {
        compact: options.compact,
    };
    controller.initialize_scroll_events(&view);
    controller.set_waiting_for_height(false);

    let base = Instant::now();
    let mut clock = PlaybackClock::for_lyrics(&lyrics);
    clock.play_at(base);
    let end_ms = clock.duration() as u64;

    let step = options.step_ms.max(1);
    let mut scrolls = Vec::new();
    let mut prev_ms: Option<u64> = None;
    let mut t_ms = 0;

    while t_ms <= end_ms {
        let now = base + Duration::from_millis(t_ms);
        let in_step = |at: u64| prev_ms.map_or(at == 0, |p| at > p) && at <= t_ms;

        for &(_, to) in options.seeks.iter().filter(|(at, _)| in_step(*at)) {
            clock.seek_at(now, to);
        }
        for _ in options.pauses.iter().filter(|at| in_step(**at)) {
            clock.toggle_at(now);
        }
        for _ in options.wheels.iter().filter(|at| in_step(**at)) {
            controller.handle_user_scroll(&mut view, ScrollInput::Wheel, now);
        }

        let playback = clock.snapshot_at(now);
        lyrics.update_statuses(playback.position);
        controller.scroll_to_active_line(&mut view, &lyrics, &playback, now);
        if let Some(command) = controller.flush(&mut view, now) {
            debug!(at_ms = t_ms, line = command.line_index, "Simulated scroll");
            scrolls.push(SimulatedScroll {
                at_ms: t_ms,
                position: playback.position,
                command,
            });
        }

        prev_ms = Some(t_ms);
        t_ms += step;
    }

    controller.cleanup_scroll_events();
    scrolls
}

pub async fn run(config: &AppConfig, file: &Path, options: &SimulateOptions) -> Result<()> {
    let lyrics = load_lyrics(file)?;
    let texts: Vec<String> = lyrics.lines.iter().map(|l| l.display_text()).collect();

    let scrolls = simulate(config, lyrics, options);

    println!("{:>8}  {:>10}  {:>5}  {:<12}  text", "time", "position", "line", "scroll");
    for scroll in &scrolls {
        let command = &scroll.command;
        let alignment = match command.alignment {
            ScrollAlignment::Center => "center",
            ScrollAlignment::Top => "top",
        };
        let kind = if command.instant { "jump" } else { "smooth" };
        println!(
            "{:>6}ms  {:>8.0}ms  {:>5}  {:<12}  {}",
            scroll.at_ms,
            scroll.position,
            command.line_index,
            format!("{kind} {alignment}{:+}", command.offset),
            texts.get(command.line_index).map_or("", String::as_str)
        );
    }
    println!("\n{} scrolls", scrolls.len());

    Ok(())
}
