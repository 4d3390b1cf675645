//! Color distance and representation utilities
//!
//! Provides the Euclidean RGB distance used throughout the pipeline,
//! hex string conversion, and a serde adapter for compact `[r, g, b]`
//! serialization of `Srgb<u8>` values.
//!
//! Distance is plain Euclidean in 8-bit RGB space. Perceptual metrics
//! (Lab/ΔE) are deliberately not used: merge, accent, and classification
//! results are reference behavior defined in RGB coordinates.

use crate::{ExtractionError, Result};
use palette::Srgb;

/// Euclidean distance between two colors in 8-bit RGB space
///
/// # Arguments
///
/// * `a`, `b` - sRGB colors with 8-bit components
///
/// # Returns
///
/// Distance in the range [0, ~441.67]
pub fn color_distance(a: Srgb<u8>, b: Srgb<u8>) -> f64 {
    let dr = a.red as f64 - b.red as f64;
    let dg = a.green as f64 - b.green as f64;
    let db = a.blue as f64 - b.blue as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Euclidean distance from an arbitrary point in RGB space to a color
///
/// The point carries fractional channel values; weighted means are not
/// rounded to 8-bit coordinates before ranking against them.
pub fn distance_from_point(point: [f64; 3], rgb: Srgb<u8>) -> f64 {
    let dr = point[0] - rgb.red as f64;
    let dg = point[1] - rgb.green as f64;
    let db = point[2] - rgb.blue as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Convert a color to a hexadecimal string (e.g., "#FF0000")
pub fn rgb_to_hex(rgb: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

/// Parse a hexadecimal color string (e.g., "#FF0000" or "FF0000")
///
/// # Errors
///
/// Returns `InvalidParameter` if the string is not six hex digits
pub fn parse_hex(hex: &str) -> Result<Srgb<u8>> {
    let stripped = hex.trim_start_matches('#');
    // ASCII check keeps the byte-indexed slices below on char boundaries
    if stripped.len() != 6 || !stripped.is_ascii() {
        return Err(ExtractionError::invalid_parameter("hex color", hex));
    }

    let r = u8::from_str_radix(&stripped[0..2], 16)
        .map_err(|_| ExtractionError::invalid_parameter("hex color", hex))?;
    let g = u8::from_str_radix(&stripped[2..4], 16)
        .map_err(|_| ExtractionError::invalid_parameter("hex color", hex))?;
    let b = u8::from_str_radix(&stripped[4..6], 16)
        .map_err(|_| ExtractionError::invalid_parameter("hex color", hex))?;

    Ok(Srgb::new(r, g, b))
}

/// Serde adapter serializing `Srgb<u8>` as a `[r, g, b]` array
///
/// Used with `#[serde(with = "palette_scan::color::srgb_array")]` so palette
/// output and catalog files stay compact and hand-editable.
pub mod srgb_array {
    use palette::Srgb;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(rgb: &Srgb<u8>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [rgb.red, rgb.green, rgb.blue].serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Srgb<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [r, g, b] = <[u8; 3]>::deserialize(deserializer)?;
        Ok(Srgb::new(r, g, b))
    }
}
