//! Named-color reference catalog and classification
//!
//! A [`ReferenceCatalog`] is a two-level table mapping category name to
//! subcategory name to a reference color with a stable identifier. It is
//! loaded once,
//! read many times, and never modified; classification maps an arbitrary
//! color to its nearest catalog entry by Euclidean RGB distance.
//!
//! Iteration order is `BTreeMap` order (alphabetical by category, then
//! subcategory). Ties on distance keep the first entry found in that order,
//! so the order is implementation-defined but stable across runs.

use crate::color::{color_distance, srgb_array};
use crate::{ExtractionError, Result};
use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Built-in catalog shipped with the crate
const BUILTIN_CATALOG_JSON: &str = include_str!("../assets/color_catalog.json");

/// One named reference color with its stable export identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Reference color
    #[serde(with = "srgb_array")]
    pub rgb: Srgb<u8>,

    /// Stable identifier written to exports
    pub id: String,
}

/// Classification result: the catalog entry nearest to a query color
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatch<'a> {
    /// Top-level category name (e.g., "Red")
    pub category: &'a str,
    /// Subcategory name (e.g., "Crimson")
    pub subcategory: &'a str,
    /// The matched entry
    pub entry: &'a CatalogEntry,
    /// Euclidean RGB distance from the query to the entry
    pub distance: f64,
}

/// Immutable two-level named-color catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceCatalog {
    categories: BTreeMap<String, BTreeMap<String, CatalogEntry>>,
}

impl ReferenceCatalog {
    /// Load the catalog embedded in the crate
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError` if the embedded asset fails to parse,
    /// or `CatalogEmpty` if it contains no entries
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)
            .map_err(|e| ExtractionError::catalog_load("parse catalog JSON", e))?;
        if catalog.is_empty() {
            return Err(ExtractionError::CatalogEmpty);
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExtractionError::catalog_load(format!("read {}", path.display()), e))?;
        Self::from_json_str(&content)
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|subs| subs.is_empty())
    }

    /// Total number of entries across all categories
    pub fn entry_count(&self) -> usize {
        self.categories.values().map(|subs| subs.len()).sum()
    }

    /// Look up one entry by category and subcategory name
    pub fn get(&self, category: &str, subcategory: &str) -> Option<&CatalogEntry> {
        self.categories.get(category)?.get(subcategory)
    }

    /// Iterate over `(category, subcategory, entry)` in catalog order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &CatalogEntry)> {
        self.categories.iter().flat_map(|(category, subs)| {
            subs.iter()
                .map(move |(subcategory, entry)| (category.as_str(), subcategory.as_str(), entry))
        })
    }

    /// Classify a color against the catalog
    ///
    /// Scans every entry, tracking the running minimum distance. Ties keep
    /// the first entry found in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogEmpty` if the catalog has no entries. This is a
    /// fatal configuration error, since catalogs are validated at load time
    pub fn classify(&self, rgb: Srgb<u8>) -> Result<ColorMatch<'_>> {
        let mut best: Option<ColorMatch<'_>> = None;

        for (category, subcategory, entry) in self.entries() {
            let distance = color_distance(rgb, entry.rgb);
            let closer = match &best {
                Some(found) => distance < found.distance,
                None => true,
            };
            if closer {
                best = Some(ColorMatch {
                    category,
                    subcategory,
                    entry,
                    distance,
                });
            }
        }

        best.ok_or(ExtractionError::CatalogEmpty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.entry_count() >= 30);
    }

    #[test]
    fn test_get_entry() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        let entry = catalog.get("Red", "Crimson").unwrap();
        assert_eq!(entry.id, "red-crimson");
        assert_eq!(entry.rgb, Srgb::new(220u8, 20, 60));
        assert!(catalog.get("Red", "Nonexistent").is_none());
    }

    #[test]
    fn test_classify_exact_match() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        let result = catalog.classify(Srgb::new(220u8, 20, 60)).unwrap();

        assert_eq!(result.category, "Red");
        assert_eq!(result.subcategory, "Crimson");
        assert_eq!(result.entry.id, "red-crimson");
        assert_eq!(result.distance, 0.0);
    }

    #[test]
    fn test_classify_nearest() {
        let catalog = ReferenceCatalog::builtin().unwrap();

        let near_black = catalog.classify(Srgb::new(5u8, 5, 5)).unwrap();
        assert_eq!(near_black.entry.id, "neutral-black");

        let pure_green = catalog.classify(Srgb::new(0u8, 255, 0)).unwrap();
        assert_eq!(pure_green.entry.id, "green-lime");
    }

    #[test]
    fn test_empty_catalog_rejected_at_load() {
        let err = ReferenceCatalog::from_json_str("{}").unwrap_err();
        assert!(matches!(err, ExtractionError::CatalogEmpty));

        // Categories present but no subcategories is still empty
        let err = ReferenceCatalog::from_json_str(r#"{"Red": {}}"#).unwrap_err();
        assert!(matches!(err, ExtractionError::CatalogEmpty));
    }

    #[test]
    fn test_malformed_catalog_json() {
        let err = ReferenceCatalog::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ExtractionError::CatalogLoadError { .. }));
    }

    #[test]
    fn test_entries_iteration_order_is_stable() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        let first: Vec<String> = catalog.entries().map(|(_, _, e)| e.id.clone()).collect();
        let second: Vec<String> = catalog.entries().map(|(_, _, e)| e.id.clone()).collect();
        assert_eq!(first, second);

        // BTreeMap order: categories alphabetical
        let (category, _, _) = catalog.entries().next().unwrap();
        assert_eq!(category, "Blue");
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        let back = ReferenceCatalog::from_json_str(&json).unwrap();
        assert_eq!(catalog, back);
    }
}
