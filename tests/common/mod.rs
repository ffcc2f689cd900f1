//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use featurecards_engine::{App, FeatureCatalog, UiOptions};
use featurecards_tui::{FeatureList, apply_event};

pub const LIST_WIDTH: u16 = 80;

pub fn patient_management() -> FeatureCatalog {
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

/// App with motion disabled and a known list width, as if one frame was drawn.
pub fn laid_out_app(catalog: FeatureCatalog) -> App {
    let mut app = App::new(
        catalog,
        UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
    );
    app.update_list_width(LIST_WIDTH);
    app
}

pub fn natural_height(app: &App) -> u16 {
    let catalog = app.catalog();
    FeatureList::new(&catalog, app.list_width()).natural_height()
}

/// Press Enter with the trigger focused.
pub fn activate(app: &mut App) {
    apply_event(
        app,
        Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
    );
}
