//! Smooth scrolling for the lyrics viewport
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Configuration helpers (types re-exported from lyricscroll-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Animator that moves the viewport offset toward a target row
//!
//! The policy engine decides *where* to scroll; this module only animates the
//! viewport offset to get there.

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
