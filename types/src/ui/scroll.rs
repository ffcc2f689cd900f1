/// Vertical scroll position of the feature list, in rows from the top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    max: u16,
}

impl ScrollState {
    #[must_use]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    #[must_use]
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Scrolling only makes sense when the content overflows the viewport.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.max > 0
    }

    /// Record the largest valid offset and clamp the current one to it.
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows).min(self.max);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
