//! # Catalog
//!
//! A read-only list of products the CLI can buy from.
//!
//! The built-in [`Catalog::sample`] is fake data for demos. A catalog can
//! also be parsed from a JSON array of `{"name": ..., "price": ...}`
//! objects; reading the file is the caller's job.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{Productable, Vegetable};

/// Sample vegetables and their unit prices.
const SAMPLE: &[(&str, f64)] = &[
    ("Carrot", 1.50),
    ("Broccoli", 2.75),
    ("Spinach", 1.80),
    ("Tomato", 3.20),
    ("Bell Pepper", 2.10),
    ("Cucumber", 1.60),
    ("Lettuce", 1.30),
    ("Onion", 1.40),
    ("Zucchini", 2.50),
    ("Potato", 1.20),
];

/// An ordered product list, looked up by exact name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<Vegetable>,
}

impl Catalog {
    pub fn new(entries: Vec<Vegetable>) -> Self {
        Catalog { entries }
    }

    /// The ten-vegetable demo catalog.
    ///
    /// ## Example
    /// ```rust
    /// use solid_core::{Catalog, Productable};
    ///
    /// let catalog = Catalog::sample();
    /// assert_eq!(catalog.len(), 10);
    /// assert_eq!(catalog.get("Tomato").unwrap().price(), 3.2);
    /// ```
    pub fn sample() -> Self {
        SAMPLE
            .iter()
            .map(|&(name, price)| Vegetable::new(name, price))
            .collect()
    }

    /// Parses a JSON array of `{name, price}` entries.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// First entry named exactly `name`.
    pub fn find(&self, name: &str) -> Option<&Vegetable> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Like [`Catalog::find`], but a missing product is an error.
    pub fn get(&self, name: &str) -> CoreResult<&Vegetable> {
        self.find(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vegetable> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Vegetable> for Catalog {
    fn from_iter<I: IntoIterator<Item = Vegetable>>(iter: I) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 10);

        let names: Vec<&str> = catalog.iter().map(|v| v.name()).collect();
        assert_eq!(names[0], "Carrot");
        assert_eq!(names[9], "Potato");
        assert_eq!(catalog.get("Broccoli").unwrap().price(), 2.75);
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::sample();
        assert!(catalog.find("Bell Pepper").is_some());
        assert!(catalog.find("bell pepper").is_none());
        assert!(catalog.find("Pepper").is_none());
    }

    #[test]
    fn test_get_missing_product() {
        let err = Catalog::sample().get("Kale").unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(name) if name == "Kale"));
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"[
                { "name": "Apple", "price": 2 },
                { "name": "Banana", "price": 1.25 }
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Apple").unwrap().price(), 2.0);
        assert_eq!(catalog.get("Banana").unwrap().price(), 1.25);
    }

    #[test]
    fn test_from_json_rejects_malformed_entries() {
        let err = Catalog::from_json(r#"[{ "name": "Apple" }]"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCatalog(_)));

        let err = Catalog::from_json(r#"{ "name": "Apple", "price": 2 }"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCatalog(_)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog, Catalog::default());
    }
}
