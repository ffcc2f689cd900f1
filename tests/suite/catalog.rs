//! Catalog construction and card rendering order.

use featurecards_engine::{CatalogError, FeatureCatalog, FeatureCategory, builtin_catalog};
use featurecards_tui::FeatureList;

use crate::common::LIST_WIDTH;

#[test]
fn empty_feature_category_is_rejected_at_construction() {
    let err = FeatureCatalog::from_table(&[
        ("Patient Management", &["Add patients"]),
        ("Inventory management", &[]),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        CatalogError::NoFeatures {
            title: "Inventory management".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "category 'Inventory management' has no features"
    );
}

#[test]
fn list_has_one_card_per_category_for_any_order() {
    let base = builtin_catalog().unwrap();
    let mut orders: Vec<Vec<FeatureCategory>> = (0..base.len())
        .map(|shift| {
            let mut rotated = base.categories().to_vec();
            rotated.rotate_left(shift);
            rotated
        })
        .collect();
    orders.push(base.categories().iter().rev().cloned().collect());

    for order in orders {
        let catalog = FeatureCatalog::new(order).unwrap();
        let list = FeatureList::new(&catalog, LIST_WIDTH);

        assert_eq!(list.cards().len(), catalog.len());
        for (card, category) in list.cards().iter().zip(catalog.iter()) {
            assert_eq!(card.category(), category);
        }
    }
}

#[test]
fn every_card_numbers_its_features_one_to_n() {
    let catalog = builtin_catalog().unwrap();
    let list = FeatureList::new(&catalog, LIST_WIDTH);

    for card in list.cards() {
        let labels = card.feature_labels();
        assert_eq!(labels.len(), card.category().feature_count());
        for (index, (label, feature)) in labels
            .iter()
            .zip(card.category().features())
            .enumerate()
        {
            assert_eq!(label, &format!("{}. {feature}", index + 1));
        }
    }
}
