//! Expand/collapse state machine for the feature list.
//!
//! The container knows nothing about rendering. It asks its content for a
//! natural height through [`ContentHeight`] and records the height the list
//! is allotted. Layout reads that value on the next frame.

/// Anything that can report the height it needs to show all of its rows
/// without scrolling.
pub trait ContentHeight {
    fn natural_height(&self) -> u16;
}

impl<T: ContentHeight + ?Sized> ContentHeight for &T {
    fn natural_height(&self) -> u16 {
        (**self).natural_height()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpansionState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Expanded => "expanded",
        }
    }
}

/// Owns the expansion state and the height allotted to the list.
///
/// Always starts collapsed with a zero height.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandableContainer {
    state: ExpansionState,
    allotted_height: u16,
}

impl ExpandableContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the state and assign the matching height.
    ///
    /// Expanding measures `content` at the moment of the transition, so a
    /// catalog or width change between toggles is picked up.
    pub fn toggle<C: ContentHeight + ?Sized>(&mut self, content: &C) {
        let next = self.state.toggled();
        let height = match next {
            ExpansionState::Collapsed => 0,
            ExpansionState::Expanded => content.natural_height(),
        };
        self.apply(next, height);
    }

    fn apply(&mut self, state: ExpansionState, height: u16) {
        self.state = state;
        self.allotted_height = height;
    }

    #[must_use]
    pub fn state(&self) -> ExpansionState {
        self.state
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.state == ExpansionState::Expanded
    }

    #[must_use]
    pub fn allotted_height(&self) -> u16 {
        self.allotted_height
    }
}
