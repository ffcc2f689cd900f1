//! Feature catalog: the ordered, validated set of categories shown as cards.

use std::slice;

use thiserror::Error;

use crate::NonEmptyString;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one category")]
    Empty,
    #[error("category title must not be empty")]
    BlankTitle,
    #[error("category {index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("category '{title}' has no features")]
    NoFeatures { title: String },
    #[error("category '{title}' has an empty feature at position {index}")]
    EmptyFeature { title: String, index: usize },
}

/// One feature group: a title and its features in display order.
///
/// Fields are private so a constructed category can never be emptied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCategory {
    title: NonEmptyString,
    features: Vec<NonEmptyString>,
}

impl FeatureCategory {
    pub fn new<T, I, F>(title: T, features: I) -> Result<Self, CatalogError>
    where
        T: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        let title = NonEmptyString::new(title).map_err(|_| CatalogError::BlankTitle)?;

        let features = features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| {
                NonEmptyString::new(feature).map_err(|_| CatalogError::EmptyFeature {
                    title: title.to_string(),
                    index,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if features.is_empty() {
            return Err(CatalogError::NoFeatures {
                title: title.into_inner(),
            });
        }

        Ok(Self { title, features })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub fn features(&self) -> &[NonEmptyString] {
        &self.features
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

/// Ordered list of categories. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCatalog {
    categories: Vec<FeatureCategory>,
}

impl FeatureCatalog {
    pub fn new(categories: Vec<FeatureCategory>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { categories })
    }

    /// Build a catalog from a literal `(title, features)` table.
    pub fn from_table(table: &[(&str, &[&str])]) -> Result<Self, CatalogError> {
        let categories = table
            .iter()
            .enumerate()
            .map(|(index, (title, features))| {
                FeatureCategory::new(*title, features.iter().copied()).map_err(|err| match err {
                    CatalogError::BlankTitle => CatalogError::EmptyTitle { index },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(categories)
    }

    #[must_use]
    pub fn categories(&self) -> &[FeatureCategory] {
        &self.categories
    }

    pub fn iter(&self) -> slice::Iter<'_, FeatureCategory> {
        self.categories.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FeatureCategory> {
        self.categories.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a constructed catalog; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<'a> IntoIterator for &'a FeatureCatalog {
    type Item = &'a FeatureCategory;
    type IntoIter = slice::Iter<'a, FeatureCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
