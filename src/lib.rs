//! # Palette Scan
//!
//! A Rust crate for reducing an image to a compact, human-interpretable
//! color palette.
//!
//! The pipeline:
//! - Collapses a pixel buffer into an exact-color histogram, filtered by
//!   minimum coverage percent
//! - Merges similar colors into clusters by Euclidean distance threshold
//!   (order-dependent, anchor-preserving)
//! - Ranks palette entries by distance from the weighted mean color to find
//!   "accent" colors
//! - Classifies arbitrary colors against a named-color reference catalog
//!
//! ## Example
//!
//! ```rust
//! use palette_scan::{extract_palette, select_accents, ExtractionParams};
//!
//! // Three red pixels, one green pixel
//! let pixels = [255u8, 0, 0, 255, 0, 0, 255, 0, 0, 0, 255, 0];
//! let params = ExtractionParams::new(10.0, 0.0)?;
//!
//! let palette = extract_palette(&pixels, &params)?;
//! assert_eq!(palette.len(), 2);
//! assert_eq!(palette[0].percent, 75.0);
//!
//! let accents = select_accents(&palette);
//! assert_eq!(accents.len(), 2);
//! # Ok::<(), palette_scan::ExtractionError>(())
//! ```

use palette::Srgb;
use serde::{Deserialize, Serialize};

pub mod accent;
pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod histogram;
pub mod image_loader;
pub mod merge;
pub mod session;

pub use accent::select_accents;
pub use catalog::{CatalogEntry, ColorMatch, ReferenceCatalog};
pub use config::ExtractionParams;
pub use error::{ExtractionError, Result};
pub use histogram::build_histogram;
pub use merge::ThresholdMerger;
pub use session::ExtractionSession;

/// One palette entry: a color with its coverage statistics.
///
/// Before merging this is one exact pixel color; after merging it is a
/// cluster whose `count` and `percent` are the sums of everything absorbed,
/// anchored at the color of the sample that founded the cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    /// Anchor color (never recomputed after merges)
    #[serde(with = "color::srgb_array")]
    pub rgb: Srgb<u8>,
    /// Coverage as a percent of the total pixel count
    pub percent: f64,
    /// Number of pixels covered
    pub count: u64,
}

/// A palette: color samples sorted descending by coverage percent
pub type Palette = Vec<ColorSample>;

/// Extract a palette from a flat RGB8 pixel buffer
///
/// This is the main entry point. It validates the parameters, builds the
/// filtered exact-color histogram, and merges similar colors into the final
/// palette. The computation is pure and deterministic: the same buffer and
/// parameters always produce the same palette.
///
/// # Arguments
///
/// * `pixels` - Flat RGB8 buffer, three bytes per pixel
/// * `params` - Merge threshold and minimum coverage percent
///
/// # Returns
///
/// The palette, sorted descending by coverage percent. An empty buffer
/// yields an empty palette.
///
/// # Errors
///
/// Returns `ExtractionError` if:
/// - A parameter is negative or non-finite
/// - The buffer length is not a whole number of RGB triples
pub fn extract_palette(pixels: &[u8], params: &ExtractionParams) -> Result<Palette> {
    params.validate()?;
    let samples = build_histogram(pixels, params.min_percent)?;
    Ok(ThresholdMerger::new(params.threshold).merge(samples))
}
