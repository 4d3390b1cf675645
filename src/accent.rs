//! Accent color selection
//!
//! Treats the percent-weighted mean color of a palette as the "background"
//! tone and flags the palette entries that diverge most from it as accents.

use crate::color::distance_from_point;
use crate::constants::limits::{MAX_ACCENT_COLORS, MIN_PALETTE_FOR_ACCENTS};
use crate::ColorSample;
use std::cmp::Ordering;

/// Select up to five accent colors from a palette
///
/// Entries are ranked by Euclidean distance from the percent-weighted mean
/// RGB of the whole palette, farthest first. The mean keeps fractional
/// channel values; rounding it to an 8-bit color would tie entries that the
/// true mean separates and change the ranking.
///
/// # Arguments
///
/// * `palette` - Palette entries; order does not affect the ranking
///
/// # Returns
///
/// At most [`MAX_ACCENT_COLORS`] entries, or an empty vector when the
/// palette has fewer than two entries
pub fn select_accents(palette: &[ColorSample]) -> Vec<ColorSample> {
    if palette.len() < MIN_PALETTE_FOR_ACCENTS {
        return Vec::new();
    }

    let mean = match weighted_mean_rgb(palette) {
        Some(mean) => mean,
        None => return Vec::new(),
    };

    let mut ranked: Vec<ColorSample> = palette.to_vec();
    ranked.sort_by(|a, b| {
        let da = distance_from_point(mean, a.rgb);
        let db = distance_from_point(mean, b.rgb);
        db.partial_cmp(&da).unwrap_or(Ordering::Equal)
    });
    ranked.truncate(MAX_ACCENT_COLORS);
    ranked
}

/// Percent-weighted mean color of a palette, per channel, unrounded
///
/// Returns `None` when the total weight is zero (degenerate palette).
fn weighted_mean_rgb(palette: &[ColorSample]) -> Option<[f64; 3]> {
    let total_weight: f64 = palette.iter().map(|s| s.percent).sum();
    if total_weight <= 0.0 {
        return None;
    }

    let mut r = 0.0;
    let mut g = 0.0;
    let mut b = 0.0;
    for sample in palette {
        r += sample.rgb.red as f64 * sample.percent;
        g += sample.rgb.green as f64 * sample.percent;
        b += sample.rgb.blue as f64 * sample.percent;
    }

    Some([
        r / total_weight,
        g / total_weight,
        b / total_weight,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    fn sample(rgb: (u8, u8, u8), percent: f64) -> ColorSample {
        ColorSample {
            rgb: Srgb::new(rgb.0, rgb.1, rgb.2),
            percent,
            count: percent as u64,
        }
    }

    #[test]
    fn test_empty_palette() {
        assert!(select_accents(&[]).is_empty());
    }

    #[test]
    fn test_single_entry_palette() {
        let palette = vec![sample((255, 0, 0), 100.0)];
        assert!(select_accents(&palette).is_empty());
    }

    #[test]
    fn test_two_entry_palette_returns_both() {
        let palette = vec![sample((255, 0, 0), 90.0), sample((0, 255, 0), 10.0)];
        let accents = select_accents(&palette);
        assert_eq!(accents.len(), 2);
    }

    #[test]
    fn test_caps_at_five() {
        let palette: Vec<ColorSample> = (0u8..8)
            .map(|i| sample((i * 30, 0, 0), 12.5))
            .collect();
        let accents = select_accents(&palette);
        assert_eq!(accents.len(), 5);
    }

    #[test]
    fn test_farthest_from_weighted_mean_first() {
        // Mean is dominated by the heavy near-white entries, so the lone
        // dark entry is the most atypical color
        let palette = vec![
            sample((250, 250, 250), 45.0),
            sample((240, 240, 240), 45.0),
            sample((10, 10, 10), 10.0),
        ];

        let accents = select_accents(&palette);
        assert_eq!(accents[0].rgb, Srgb::new(10u8, 10, 10));
    }

    #[test]
    fn test_weighting_shifts_the_mean() {
        // Same colors, different weights: the accent ranking follows the
        // weighted mean, not the arithmetic one
        let palette = vec![
            sample((0, 0, 0), 99.0),
            sample((100, 100, 100), 0.5),
            sample((255, 255, 255), 0.5),
        ];

        let accents = select_accents(&palette);
        // Mean sits near black, so white is farthest, mid-gray second,
        // black itself last
        assert_eq!(accents[0].rgb, Srgb::new(255u8, 255, 255));
        assert_eq!(accents[1].rgb, Srgb::new(100u8, 100, 100));
        assert_eq!(accents[2].rgb, Srgb::new(0u8, 0, 0));
    }

    #[test]
    fn test_weighted_mean() {
        let palette = vec![sample((100, 0, 0), 75.0), sample((0, 100, 0), 25.0)];
        let mean = weighted_mean_rgb(&palette).unwrap();
        assert_eq!(mean, [75.0, 25.0, 0.0]);
    }

    #[test]
    fn test_weighted_mean_keeps_fractions() {
        let palette = vec![
            sample((0, 0, 0), 50.0),
            sample((1, 0, 0), 30.0),
            sample((2, 0, 0), 20.0),
        ];
        let mean = weighted_mean_rgb(&palette).unwrap();
        assert!((mean[0] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_fractional_mean_orders_near_ties() {
        // Mean red channel is 0.7. Against the true mean the distances are
        // 1.3, 0.7, 0.3 for reds 2, 0, 1; a mean rounded to a whole channel
        // value would tie reds 0 and 2 at distance 1 and misorder them.
        let palette = vec![
            sample((0, 0, 0), 50.0),
            sample((1, 0, 0), 30.0),
            sample((2, 0, 0), 20.0),
        ];

        let accents = select_accents(&palette);
        assert_eq!(accents[0].rgb, Srgb::new(2u8, 0, 0));
        assert_eq!(accents[1].rgb, Srgb::new(0u8, 0, 0));
        assert_eq!(accents[2].rgb, Srgb::new(1u8, 0, 0));
    }

    #[test]
    fn test_zero_total_weight() {
        let palette = vec![sample((1, 1, 1), 0.0), sample((2, 2, 2), 0.0)];
        assert!(weighted_mean_rgb(&palette).is_none());
        assert!(select_accents(&palette).is_empty());
    }
}
