//! TUI rendering for featurecards using ratatui.
//!
//! One screen: the Expand/Collapse trigger, the feature list below it and a
//! status bar. Drawing records layout facts (list width, trigger position,
//! scroll range) back into the [`App`] so input handling can use them.

mod card;
mod input;
mod list;
mod theme;

pub use card::{CARD_INSET, FeatureCard};
pub use input::{InputPump, activate_trigger, apply_event, handle_events};
pub use list::FeatureList;
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use featurecards_engine::{App, ExpansionState, HitBox};

pub const TRIGGER_LABEL: &str = "Expand/Collapse";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top gap
            Constraint::Length(1), // Trigger
            Constraint::Length(1), // Gap
            Constraint::Min(0),    // Feature list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_trigger(frame, app, chunks[1], &palette, &glyphs);
    let natural = draw_list(frame, app, chunks[3], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[4], natural, &palette, &glyphs);
}

fn trigger_text(app: &App, glyphs: &Glyphs) -> String {
    let indicator = match app.expansion_state() {
        ExpansionState::Collapsed => glyphs.collapsed,
        ExpansionState::Expanded => glyphs.expanded,
    };
    format!(" {indicator} {TRIGGER_LABEL} ")
}

/// Centered button area for `text` within `area`.
fn trigger_rect(area: Rect, text: &str) -> Rect {
    let width = u16::try_from(text.width())
        .unwrap_or(u16::MAX)
        .min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height.min(1),
    }
}

fn draw_trigger(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let text = trigger_text(app, glyphs);
    let rect = trigger_rect(area, &text);
    app.update_trigger_area(HitBox::new(rect.x, rect.y, rect.width, rect.height));

    let button = Paragraph::new(Line::from(Span::styled(text, styles::trigger(palette))));
    frame.render_widget(button, rect);
}

/// Returns the list's natural height at the current width.
fn draw_list(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> u16 {
    app.update_list_width(area.width);

    let catalog = app.catalog();
    let list = FeatureList::new(&catalog, area.width);

    // Collapsed lists get a zero-height area but stay in the layout.
    let list_area = Rect {
        height: app.displayed_list_height().min(area.height),
        ..area
    };
    let max_scroll = if app.is_animating() {
        list.render_clipped(frame, list_area, palette, glyphs);
        0
    } else {
        list.render(frame, list_area, app.scroll_offset(), palette, glyphs)
    };
    app.update_scroll_max(max_scroll);

    list.natural_height()
}

fn draw_status_bar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    natural: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let hint = styles::key_hint(palette);
    let muted = styles::status(palette);

    let mut spans = vec![
        Span::styled(
            format!(
                " {} {} {}/{} rows ",
                app.expansion_state().as_str(),
                glyphs.separator,
                app.allotted_height(),
                natural
            ),
            muted,
        ),
        Span::styled(" Enter", hint),
        Span::styled(" toggle ", muted),
    ];
    if app.scroll_enabled() {
        spans.push(Span::styled(
            format!(" {}{}", glyphs.arrow_up, glyphs.arrow_down),
            hint,
        ));
        spans.push(Span::styled(" scroll ", muted));
    }
    spans.push(Span::styled(" q", hint));
    spans.push(Span::styled(" quit ", muted));

    let status = Paragraph::new(Line::from(spans)).style(muted);
    frame.render_widget(status, area);
}
