//! The scrollable stack of feature cards.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

use featurecards_engine::{ContentHeight, FeatureCatalog};

use crate::card::{CARD_INSET, FeatureCard};
use crate::theme::{Glyphs, Palette};

/// Every category in the catalog as a card, laid out at a fixed width.
///
/// Cards are built eagerly; the catalog is small and static.
#[derive(Debug, Clone)]
pub struct FeatureList<'a> {
    cards: Vec<FeatureCard<'a>>,
    width: u16,
}

impl<'a> FeatureList<'a> {
    #[must_use]
    pub fn new(catalog: &'a FeatureCatalog, width: u16) -> Self {
        Self {
            cards: catalog.iter().map(FeatureCard::new).collect(),
            width,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[FeatureCard<'a>] {
        &self.cards
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Rows needed to show every card without scrolling.
    #[must_use]
    pub fn natural_height(&self) -> u16 {
        self.cards
            .iter()
            .fold(0u16, |acc, card| acc.saturating_add(card.height(self.width)))
    }

    #[must_use]
    pub fn lines(&self, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
        self.cards
            .iter()
            .flat_map(|card| card.lines(self.width, palette, glyphs))
            .collect()
    }

    fn body(&self, palette: &Palette, glyphs: &Glyphs) -> Paragraph<'static> {
        Paragraph::new(self.lines(palette, glyphs)).wrap(Wrap { trim: false })
    }

    /// Draw into `area`, whose height is the list's allotted height.
    ///
    /// Returns the maximum scroll offset; zero means scrolling is disabled.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        scroll_offset: u16,
        palette: &Palette,
        glyphs: &Glyphs,
    ) -> u16 {
        if area.is_empty() {
            return 0;
        }

        let max_scroll = self.natural_height().saturating_sub(area.height);
        let offset = scroll_offset.min(max_scroll);

        frame.render_widget(
            self.body(palette, glyphs).scroll((offset, 0)),
            card_area(area),
        );

        // Only render scrollbar when content exceeds viewport
        if max_scroll > 0 {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some(glyphs.arrow_up))
                .end_symbol(Some(glyphs.arrow_down))
                .track_symbol(Some(glyphs.track))
                .thumb_symbol(glyphs.thumb)
                .style(Style::default().fg(palette.text_muted));

            // content_length = scrollable range (max_scroll), not total rows
            let mut scrollbar_state =
                ScrollbarState::new(usize::from(max_scroll)).position(usize::from(offset));

            frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
        }

        max_scroll
    }

    /// Draw the top of the list clipped to `area`, without scrolling.
    ///
    /// Used while the displayed height is still easing toward the allotted one.
    pub fn render_clipped(
        &self,
        frame: &mut Frame,
        area: Rect,
        palette: &Palette,
        glyphs: &Glyphs,
    ) {
        if area.is_empty() {
            return;
        }
        frame.render_widget(self.body(palette, glyphs), card_area(area));
    }
}

fn card_area(area: Rect) -> Rect {
    area.inner(Margin {
        vertical: 0,
        horizontal: CARD_INSET,
    })
}

impl ContentHeight for FeatureList<'_> {
    fn natural_height(&self) -> u16 {
        FeatureList::natural_height(self)
    }
}
