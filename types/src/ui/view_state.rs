//! View state for rendering.
//!
//! This struct groups all state related to rendering and UI display,
//! separating it from the expand/collapse state machine.

use std::time::Instant;

use super::{HeightTransition, ScrollState};

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// Screen rectangle in terminal cells, used for mouse hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitBox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitBox {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Layout facts recorded by the last draw plus presentation-only state.
#[derive(Debug)]
pub struct ViewState {
    pub scroll: ScrollState,
    /// Width the list was last laid out at. Used to measure on toggle.
    pub list_width: u16,
    /// Where the trigger button was last drawn.
    pub trigger_area: HitBox,
    /// Eased height while the list grows or shrinks.
    pub height_transition: Option<HeightTransition>,
    pub ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scroll: ScrollState::default(),
            list_width: 0,
            trigger_area: HitBox::default(),
            height_transition: None,
            ui_options: UiOptions::default(),
            last_frame: Instant::now(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }
}
