pub mod app;
pub mod event;
pub mod input;
pub mod scroll;
pub mod theme;
pub mod viewport;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
pub use viewport::LyricsViewport;
