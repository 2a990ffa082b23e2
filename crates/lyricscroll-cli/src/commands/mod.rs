pub mod inspect;
pub mod play;
pub mod simulate;
