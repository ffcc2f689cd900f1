//! Core engine for featurecards - application state without TUI dependencies.
//!
//! [`App`] owns the catalog, the expand/collapse container and the view
//! state the renderer reads. The TUI measures the list and hands the
//! measurement to [`App::activate_trigger`]; everything else here is plain
//! state bookkeeping.

use std::sync::Arc;
use std::time::{Duration, Instant};

mod catalog;
mod config;

pub use catalog::{BUILTIN_CATALOG, builtin_catalog};
pub use config::{AppConfig, ConfigError, FeatureCardsConfig, REDUCED_MOTION_ENV, config_path};
pub use featurecards_types::ui::{
    AnimPhase, HeightTransition, HitBox, ScrollState, UiOptions, ViewState,
};
pub use featurecards_types::{
    CatalogError, ContentHeight, ExpandableContainer, ExpansionState, FeatureCatalog,
    FeatureCategory,
};

/// How long the list takes to grow or shrink to its new height.
pub const HEIGHT_TRANSITION: Duration = Duration::from_millis(180);

pub struct App {
    catalog: Arc<FeatureCatalog>,
    container: ExpandableContainer,
    view: ViewState,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(catalog: FeatureCatalog, ui_options: UiOptions) -> Self {
        tracing::info!(categories = catalog.len(), "App initialized");
        Self {
            catalog: Arc::new(catalog),
            container: ExpandableContainer::new(),
            view: ViewState::new(ui_options),
            should_quit: false,
        }
    }

    /// Shared handle to the immutable catalog.
    #[must_use]
    pub fn catalog(&self) -> Arc<FeatureCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn expansion_state(&self) -> ExpansionState {
        self.container.state()
    }

    /// Height assigned by the last toggle. Zero while collapsed.
    #[must_use]
    pub fn allotted_height(&self) -> u16 {
        self.container.allotted_height()
    }

    /// Height to draw this frame, which trails the allotted height while a
    /// transition is running.
    #[must_use]
    pub fn displayed_list_height(&self) -> u16 {
        self.view
            .height_transition
            .as_ref()
            .map_or_else(|| self.container.allotted_height(), HeightTransition::current)
    }

    /// The user activated the Expand/Collapse trigger.
    pub fn activate_trigger<C: ContentHeight + ?Sized>(&mut self, content: &C) {
        let from = self.displayed_list_height();
        self.container.toggle(content);
        let to = self.container.allotted_height();

        if self.container.state() == ExpansionState::Collapsed {
            self.view.scroll.reset();
        }

        self.view.height_transition = if self.view.ui_options.reduced_motion || from == to {
            None
        } else {
            Some(HeightTransition::new(from, to, HEIGHT_TRANSITION))
        };

        tracing::debug!(
            state = self.container.state().as_str(),
            height = to,
            "Feature list toggled"
        );
    }

    /// Advance time-based effects by the wall-clock time since the last frame.
    pub fn tick(&mut self) {
        let elapsed = self.frame_elapsed();
        self.advance_animations(elapsed);
    }

    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        elapsed
    }

    pub fn advance_animations(&mut self, delta: Duration) {
        let finished = match self.view.height_transition.as_mut() {
            Some(transition) => {
                transition.advance(delta);
                transition.phase() == AnimPhase::Completed
            }
            None => false,
        };
        if finished {
            self.view.height_transition = None;
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.view.height_transition.is_some()
    }

    // ------------------------------------------------------------------
    // Layout facts recorded by the renderer
    // ------------------------------------------------------------------

    pub fn update_list_width(&mut self, width: u16) {
        self.view.list_width = width;
    }

    #[must_use]
    pub fn list_width(&self) -> u16 {
        self.view.list_width
    }

    pub fn update_trigger_area(&mut self, area: HitBox) {
        self.view.trigger_area = area;
    }

    #[must_use]
    pub fn trigger_area(&self) -> HitBox {
        self.view.trigger_area
    }

    pub fn update_scroll_max(&mut self, max: u16) {
        self.view.scroll.set_max(max);
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    #[must_use]
    pub fn scroll_offset(&self) -> u16 {
        self.view.scroll.offset()
    }

    /// Scrolling only applies to a settled, expanded list that overflows.
    #[must_use]
    pub fn scroll_enabled(&self) -> bool {
        self.container.is_expanded() && !self.is_animating() && self.view.scroll.is_enabled()
    }

    pub fn scroll_up(&mut self, rows: u16) {
        if self.scroll_enabled() {
            self.view.scroll.scroll_up(rows);
        }
    }

    pub fn scroll_down(&mut self, rows: u16) {
        if self.scroll_enabled() {
            self.view.scroll.scroll_down(rows);
        }
    }

    pub fn scroll_to_top(&mut self) {
        if self.scroll_enabled() {
            self.view.scroll.to_top();
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        if self.scroll_enabled() {
            self.view.scroll.to_bottom();
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}
