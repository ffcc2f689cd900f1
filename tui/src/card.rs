//! A single feature card: title, numbered features, divider.

use ratatui::{
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use featurecards_engine::{FeatureCategory, UiOptions};

use crate::theme::{Glyphs, Palette, glyphs, styles};

/// Columns kept clear on each side of a card.
pub const CARD_INSET: u16 = 1;

/// Rendering of one category. Holds no state between renders; every call
/// to [`FeatureCard::lines`] rebuilds the rows from the category.
#[derive(Debug, Clone, Copy)]
pub struct FeatureCard<'a> {
    category: &'a FeatureCategory,
}

impl<'a> FeatureCard<'a> {
    #[must_use]
    pub fn new(category: &'a FeatureCategory) -> Self {
        Self { category }
    }

    #[must_use]
    pub fn category(&self) -> &'a FeatureCategory {
        self.category
    }

    #[must_use]
    pub fn title(&self) -> &'a str {
        self.category.title()
    }

    /// `"1. first"`, `"2. second"`, ... in stored order.
    #[must_use]
    pub fn feature_labels(&self) -> Vec<String> {
        self.category
            .features()
            .iter()
            .enumerate()
            .map(|(index, feature)| format!("{}. {feature}", index + 1))
            .collect()
    }

    /// Rows for a card laid out `width` columns wide (inset included).
    #[must_use]
    pub fn lines(&self, width: u16, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
        let text_width = text_width(width);
        let mut lines = Vec::with_capacity(self.category.feature_count() + 3);

        lines.push(Line::from(Span::styled(
            self.title().to_string(),
            styles::card_title(palette),
        )));
        lines.push(Line::from(""));
        for label in self.feature_labels() {
            lines.push(Line::from(Span::styled(label, styles::feature_line(palette))));
        }
        lines.push(Line::from(Span::styled(
            glyphs.divider.repeat(usize::from(text_width)),
            styles::divider(palette),
        )));

        lines
    }

    /// Rows this card occupies at `width`, counting soft wraps.
    #[must_use]
    pub fn height(&self, width: u16) -> u16 {
        let text_width = text_width(width);
        if text_width == 0 {
            return 0;
        }
        let lines = self.lines(width, &Palette::standard(), &glyphs(UiOptions::default()));
        wrapped_line_count(lines, text_width)
    }
}

pub(crate) fn text_width(width: u16) -> u16 {
    width.saturating_sub(CARD_INSET * 2)
}

pub(crate) fn wrapped_line_count(lines: Vec<Line<'_>>, width: u16) -> u16 {
    if lines.is_empty() {
        return 0;
    }
    let rows = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .line_count(width.max(1));
    u16::try_from(rows).unwrap_or(u16::MAX)
}
