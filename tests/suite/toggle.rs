//! Expand/collapse behavior driven through input events.

use featurecards_engine::{ExpansionState, builtin_catalog};
use featurecards_tui::FeatureList;

use crate::common::{activate, laid_out_app, natural_height, patient_management};

#[test]
fn patient_management_scenario() {
    let mut app = laid_out_app(patient_management());
    assert_eq!(app.expansion_state(), ExpansionState::Collapsed);
    assert_eq!(app.allotted_height(), 0);

    activate(&mut app);
    assert_eq!(app.expansion_state(), ExpansionState::Expanded);
    let natural = natural_height(&app);
    assert!(natural > 0);
    assert_eq!(app.allotted_height(), natural);

    let catalog = app.catalog();
    let list = FeatureList::new(&catalog, app.list_width());
    let labels = list.cards()[0].feature_labels();
    assert_eq!(labels.first().map(String::as_str), Some("1. Add patients"));
    assert_eq!(
        labels.last().map(String::as_str),
        Some("6. Delete medical history")
    );

    activate(&mut app);
    assert_eq!(app.expansion_state(), ExpansionState::Collapsed);
    assert_eq!(app.allotted_height(), 0);
}

#[test]
fn toggle_is_its_own_inverse() {
    let mut app = laid_out_app(builtin_catalog().unwrap());
    for _ in 0..3 {
        activate(&mut app);
        activate(&mut app);
        assert_eq!(app.expansion_state(), ExpansionState::Collapsed);
        assert_eq!(app.allotted_height(), 0);
    }
}

#[test]
fn expanded_height_is_stable_for_fixed_catalog() {
    let mut app = laid_out_app(builtin_catalog().unwrap());
    activate(&mut app);
    let first = app.allotted_height();
    activate(&mut app);
    activate(&mut app);
    assert_eq!(app.allotted_height(), first);
    assert_eq!(natural_height(&app), first);
}

#[test]
fn expansion_measures_at_current_width() {
    let mut app = laid_out_app(builtin_catalog().unwrap());
    activate(&mut app);
    let wide = app.allotted_height();
    activate(&mut app);

    app.update_list_width(30);
    activate(&mut app);
    assert!(app.allotted_height() > wide);
}
