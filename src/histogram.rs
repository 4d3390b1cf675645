//! Exact-color histogram construction
//!
//! Collapses a flat RGB8 pixel buffer into one [`ColorSample`] per distinct
//! color, with coverage computed against the total pixel count, then filters
//! entries below the minimum coverage percent.
//!
//! The output order is the first-appearance order of each distinct color in
//! the scanned buffer. This is a contract, not an accident: the threshold
//! merge stage is order-dependent, so the histogram order must be stable and
//! reproducible for a given buffer.

use crate::{ColorSample, ExtractionError, Result};
use palette::Srgb;
use std::collections::HashMap;

/// Build the filtered exact-color histogram of a pixel buffer
///
/// # Arguments
///
/// * `pixels` - Flat RGB8 buffer, three bytes per pixel
/// * `min_percent` - Minimum coverage percent to retain an entry;
///   zero or negative retains every distinct color
///
/// # Returns
///
/// One `ColorSample` per distinct color with `percent >= min_percent`,
/// in first-appearance order
///
/// # Errors
///
/// Returns `MalformedPixelBuffer` if the buffer length is not a multiple
/// of three
pub fn build_histogram(pixels: &[u8], min_percent: f64) -> Result<Vec<ColorSample>> {
    if pixels.len() % 3 != 0 {
        return Err(ExtractionError::MalformedPixelBuffer { len: pixels.len() });
    }

    let total_pixels = (pixels.len() / 3) as u64;
    if total_pixels == 0 {
        return Ok(Vec::new());
    }

    // Counts in first-appearance order: the map resolves a color to its
    // slot, the vector preserves discovery order.
    let mut slots: HashMap<[u8; 3], usize> = HashMap::new();
    let mut entries: Vec<([u8; 3], u64)> = Vec::new();

    for triple in pixels.chunks_exact(3) {
        let key = [triple[0], triple[1], triple[2]];
        match slots.get(&key) {
            Some(&idx) => entries[idx].1 += 1,
            None => {
                slots.insert(key, entries.len());
                entries.push((key, 1));
            }
        }
    }

    let samples = entries
        .into_iter()
        .filter_map(|([r, g, b], count)| {
            let percent = (count as f64 / total_pixels as f64) * 100.0;
            (percent >= min_percent).then(|| ColorSample {
                rgb: Srgb::new(r, g, b),
                percent,
                count,
            })
        })
        .collect();

    Ok(samples)
}
