//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod height;
mod scroll;
mod view_state;

pub use animation::{AnimPhase, ease_out_cubic};
pub use height::HeightTransition;
pub use scroll::ScrollState;
pub use view_state::{HitBox, UiOptions, ViewState};
