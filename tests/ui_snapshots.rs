//! Full-screen rendering tests using the vt100 virtual terminal.


use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;

use featurecards_engine::{
    App, ExpansionState, FeatureCatalog, HEIGHT_TRANSITION, UiOptions, builtin_catalog,
};
use featurecards_tui::{apply_event, draw};

use vt100_backend::VT100Backend;

fn patient_management() -> FeatureCatalog {
    FeatureCatalog::from_table(&[(
        "Patient Management",
        &[
            "Add patients",
            "Edit patients",
            "Delete patients",
            "Track medical history / patient records",
            "Edit medical history",
            "Delete medical history",
        ],
    )])
    .expect("valid catalog")
}

fn still(options: UiOptions) -> UiOptions {
    UiOptions {
        reduced_motion: true,
        ..options
    }
}

fn terminal(width: u16, height: u16) -> Terminal<VT100Backend> {
    Terminal::new(VT100Backend::new(width, height)).expect("failed to create terminal")
}

fn redraw(terminal: &mut Terminal<VT100Backend>, app: &mut App) {
    terminal.draw(|frame| draw(frame, app)).expect("failed to draw");
}

fn press(app: &mut App, code: KeyCode) {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

#[test]
fn collapsed_screen_shows_only_trigger() {
    let mut app = App::new(builtin_catalog().unwrap(), still(UiOptions::default()));
    let mut term = terminal(60, 20);
    redraw(&mut term, &mut app);

    let screen = term.backend();
    assert_eq!(screen.find_row("Expand/Collapse"), Some(1));
    assert_eq!(screen.find_row("Patient Management"), None);
    let status = &screen.rows()[19];
    assert!(status.contains("collapsed"), "status bar: {status:?}");
    assert!(status.contains("0/"), "status bar: {status:?}");
}

#[test]
fn trigger_expands_and_collapses_single_category() {
    let mut app = App::new(patient_management(), still(UiOptions::default()));
    let mut term = terminal(60, 20);
    redraw(&mut term, &mut app);

    press(&mut app, KeyCode::Enter);
    redraw(&mut term, &mut app);

    assert_eq!(app.expansion_state(), ExpansionState::Expanded);
    assert_eq!(app.allotted_height(), 9);

    let screen = term.backend();
    assert_eq!(screen.find_row("Patient Management"), Some(3));
    let expected = [
        "1. Add patients",
        "2. Edit patients",
        "3. Delete patients",
        "4. Track medical history / patient records",
        "5. Edit medical history",
        "6. Delete medical history",
    ];
    for (offset, line) in expected.iter().enumerate() {
        assert_eq!(screen.find_row(line), Some(5 + offset), "row for {line}");
    }
    assert!(screen.rows()[11].trim_start().starts_with('─'));
    assert!(screen.rows()[19].contains("expanded · 9/9 rows"));

    press(&mut app, KeyCode::Enter);
    redraw(&mut term, &mut app);

    assert_eq!(app.expansion_state(), ExpansionState::Collapsed);
    assert_eq!(app.allotted_height(), 0);
    let screen = term.backend();
    assert_eq!(screen.find_row("Add patients"), None);
    assert!(screen.rows()[19].contains("collapsed · 0/9 rows"));
}

#[test]
fn toggling_twice_restores_initial_screen() {
    let mut app = App::new(builtin_catalog().unwrap(), still(UiOptions::default()));
    let mut term = terminal(70, 24);
    redraw(&mut term, &mut app);
    let before = term.backend().contents();

    press(&mut app, KeyCode::Enter);
    redraw(&mut term, &mut app);
    press(&mut app, KeyCode::Char(' '));
    redraw(&mut term, &mut app);

    assert_eq!(term.backend().contents(), before);
}

#[test]
fn short_terminal_scrolls_the_list() {
    let mut app = App::new(builtin_catalog().unwrap(), still(UiOptions::default()));
    let mut term = terminal(60, 12);
    redraw(&mut term, &mut app);

    press(&mut app, KeyCode::Enter);
    redraw(&mut term, &mut app);

    assert!(app.scroll_enabled());
    let rows = term.backend().rows();
    assert!(rows[3].ends_with('↑'), "top of scrollbar: {:?}", rows[3]);
    assert!(rows[10].ends_with('↓'), "bottom of scrollbar: {:?}", rows[10]);
    assert!(rows[11].contains("scroll"));
    assert_eq!(term.backend().find_row("Control room booking"), None);

    press(&mut app, KeyCode::End);
    redraw(&mut term, &mut app);

    let screen = term.backend();
    assert!(screen.find_row("3. Control room booking").is_some());
    assert_eq!(screen.find_row("Patient Management"), None);
}

#[test]
fn tall_terminal_does_not_scroll() {
    let mut app = App::new(patient_management(), still(UiOptions::default()));
    let mut term = terminal(60, 30);
    redraw(&mut term, &mut app);
    press(&mut app, KeyCode::Enter);
    redraw(&mut term, &mut app);

    assert!(!app.scroll_enabled());
    press(&mut app, KeyCode::Down);
    assert_eq!(app.scroll_offset(), 0);
}

#[test]
fn card_title_is_bold_accent() {
    let mut app = App::new(patient_management(), still(UiOptions::default()));
    let mut term = terminal(60, 20);
    redraw(&mut term, &mut app);
    press(&mut app, KeyCode::Enter);
    redraw(&mut term, &mut app);

    let screen = term.backend();
    assert!(screen.bold_at(3, 1));
    assert_eq!(screen.fg_at(3, 1), Some(vt100::Color::Rgb(126, 156, 216)));
}

#[test]
fn ascii_mode_uses_plain_divider() {
    let options = still(UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    });
    let mut app = App::new(patient_management(), options);
    let mut term = terminal(40, 20);
    redraw(&mut term, &mut app);
    press(&mut app, KeyCode::Enter);
    redraw(&mut term, &mut app);

    let rows = term.backend().rows();
    assert_eq!(rows[11], format!(" {}", "-".repeat(38)));
    assert!(rows[1].contains("v Expand/Collapse"));
}

#[test]
fn animated_expansion_reveals_list_over_time() {
    let mut app = App::new(patient_management(), UiOptions::default());
    let mut term = terminal(60, 20);
    redraw(&mut term, &mut app);

    press(&mut app, KeyCode::Enter);
    redraw(&mut term, &mut app);
    assert_eq!(term.backend().find_row("Patient Management"), None);
    assert!(app.is_animating());

    app.advance_animations(HEIGHT_TRANSITION);
    redraw(&mut term, &mut app);
    assert!(!app.is_animating());
    assert_eq!(term.backend().find_row("6. Delete medical history"), Some(10));
}

#[test]
fn list_does_not_scroll_while_expanding() {
    let mut app = App::new(patient_management(), UiOptions::default());
    let mut term = terminal(60, 30);
    redraw(&mut term, &mut app);

    press(&mut app, KeyCode::Enter);
    app.advance_animations(HEIGHT_TRANSITION / 3);
    redraw(&mut term, &mut app);

    assert!(app.is_animating());
    assert!(app.displayed_list_height() < app.allotted_height());
    assert!(!app.scroll_enabled());
    let rows = term.backend().rows();
    assert!(!rows[29].contains("scroll"), "status bar: {:?}", rows[29]);
    assert!(rows[3..29].iter().all(|row| !row.ends_with('↑')));

    press(&mut app, KeyCode::Down);
    assert_eq!(app.scroll_offset(), 0);

    app.advance_animations(HEIGHT_TRANSITION);
    redraw(&mut term, &mut app);
    assert!(!app.scroll_enabled());
    assert_eq!(term.backend().find_row("Patient Management"), Some(3));
}
