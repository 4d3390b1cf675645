//! Threshold-based color merging
//!
//! Clusters histogram entries whose colors lie within a distance threshold.
//! This is an online, order-dependent single-link pass: each incoming sample
//! either folds into its nearest existing representative (when strictly
//! closer than the threshold) or founds a new cluster. A cluster keeps the
//! RGB anchor of the sample that founded it; counts and percents accumulate
//! but the anchor color is never recomputed.
//!
//! The nearest-representative query runs over a k-d tree rebuilt per
//! insertion. Rebuilding costs O(n² log n) over the whole pass, which is
//! acceptable: n is bounded by the number of distinct colors surviving the
//! coverage filter, typically small.
//!
//! The result depends on the input order (first-appearance order from the
//! histogram stage). That ordering is part of the contract: a globally
//! optimal clustering would produce different palettes and is out of scope.

use crate::ColorSample;
use kd_tree::{KdPoint, KdTree};
use std::cmp::Ordering;

/// A cluster representative indexed into the working set, positioned at its
/// anchor color for nearest-neighbor queries.
struct RepresentativePoint {
    index: usize,
    pos: [i64; 3],
}

impl KdPoint for RepresentativePoint {
    type Scalar = i64;
    type Dim = typenum::U3;

    fn at(&self, k: usize) -> Self::Scalar {
        self.pos[k]
    }
}

/// Merges color samples into clusters by distance threshold
pub struct ThresholdMerger {
    threshold: f64,
}

impl ThresholdMerger {
    /// Create a merger with the given radius.
    ///
    /// A zero threshold never merges: distance 0 is not strictly less
    /// than 0, so every distinct color founds its own cluster.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Merge samples into the final palette
    ///
    /// # Arguments
    ///
    /// * `samples` - Filtered histogram entries in their stable input order
    ///
    /// # Returns
    ///
    /// Cluster representatives sorted descending by coverage percent;
    /// ties keep insertion order (stable sort)
    pub fn merge(&self, samples: Vec<ColorSample>) -> Vec<ColorSample> {
        let mut representatives: Vec<ColorSample> = Vec::new();

        for sample in samples {
            match self.nearest_representative(&representatives, &sample) {
                Some((index, distance)) if distance < self.threshold => {
                    representatives[index].percent += sample.percent;
                    representatives[index].count += sample.count;
                }
                _ => representatives.push(sample),
            }
        }

        representatives.sort_by(|a, b| {
            b.percent
                .partial_cmp(&a.percent)
                .unwrap_or(Ordering::Equal)
        });
        representatives
    }

    /// Find the representative closest to the sample's color
    fn nearest_representative(
        &self,
        representatives: &[ColorSample],
        sample: &ColorSample,
    ) -> Option<(usize, f64)> {
        if representatives.is_empty() {
            return None;
        }

        let points: Vec<RepresentativePoint> = representatives
            .iter()
            .enumerate()
            .map(|(index, rep)| RepresentativePoint {
                index,
                pos: [rep.rgb.red as i64, rep.rgb.green as i64, rep.rgb.blue as i64],
            })
            .collect();
        let tree = KdTree::build(points);

        let query = [
            sample.rgb.red as i64,
            sample.rgb.green as i64,
            sample.rgb.blue as i64,
        ];
        tree.nearest(&query)
            .map(|found| (found.item.index, (found.squared_distance as f64).sqrt()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    fn sample(rgb: (u8, u8, u8), percent: f64, count: u64) -> ColorSample {
        ColorSample {
            rgb: Srgb::new(rgb.0, rgb.1, rgb.2),
            percent,
            count,
        }
    }

    #[test]
    fn test_empty_input() {
        let merger = ThresholdMerger::new(10.0);
        assert!(merger.merge(Vec::new()).is_empty());
    }

    #[test]
    fn test_single_sample_passes_through() {
        let merger = ThresholdMerger::new(10.0);
        let palette = merger.merge(vec![sample((5, 5, 5), 100.0, 10)]);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].rgb, Srgb::new(5u8, 5, 5));
    }

    #[test]
    fn test_close_colors_merge_into_anchor() {
        let merger = ThresholdMerger::new(10.0);
        // distance((255,0,0),(250,2,1)) = sqrt(30) ≈ 5.48 < 10
        let palette = merger.merge(vec![
            sample((255, 0, 0), 60.0, 60),
            sample((250, 2, 1), 30.0, 30),
        ]);

        assert_eq!(palette.len(), 1);
        // Anchor is the founding sample's color, not a centroid
        assert_eq!(palette[0].rgb, Srgb::new(255u8, 0, 0));
        assert_eq!(palette[0].percent, 90.0);
        assert_eq!(palette[0].count, 90);
    }

    #[test]
    fn test_distant_colors_stay_separate() {
        let merger = ThresholdMerger::new(10.0);
        let palette = merger.merge(vec![
            sample((255, 0, 0), 50.0, 50),
            sample((0, 255, 0), 50.0, 50),
        ]);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_zero_threshold_never_merges() {
        let merger = ThresholdMerger::new(0.0);
        // Identical colors cannot occur post-histogram, but even a
        // duplicate would not merge at threshold 0 (0 < 0 is false)
        let palette = merger.merge(vec![
            sample((1, 1, 1), 40.0, 4),
            sample((1, 1, 2), 40.0, 4),
            sample((1, 1, 3), 20.0, 2),
        ]);
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_full_merge_at_max_distance() {
        let merger = ThresholdMerger::new(crate::constants::limits::MAX_RGB_DISTANCE + 0.1);
        let palette = merger.merge(vec![
            sample((0, 0, 0), 30.0, 30),
            sample((255, 255, 255), 50.0, 50),
            sample((0, 255, 0), 20.0, 20),
        ]);

        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].rgb, Srgb::new(0u8, 0, 0));
        assert!((palette[0].percent - 100.0).abs() < 1e-9);
        assert_eq!(palette[0].count, 100);
    }

    #[test]
    fn test_order_dependence_is_preserved() {
        // b is within threshold of both a and c, but a and c are not
        // within threshold of each other. Processing order decides the
        // outcome; with a first, b folds into a and c stands alone.
        let merger = ThresholdMerger::new(10.0);
        let palette = merger.merge(vec![
            sample((100, 0, 0), 40.0, 40),
            sample((107, 0, 0), 30.0, 30),
            sample((114, 0, 0), 30.0, 30),
        ]);

        assert_eq!(palette.len(), 2);
        assert_eq!(palette[0].rgb, Srgb::new(100u8, 0, 0));
        assert_eq!(palette[0].percent, 70.0);
        assert_eq!(palette[1].rgb, Srgb::new(114u8, 0, 0));
    }

    #[test]
    fn test_result_sorted_descending_by_percent() {
        let merger = ThresholdMerger::new(1.0);
        let palette = merger.merge(vec![
            sample((1, 1, 1), 10.0, 10),
            sample((200, 200, 200), 60.0, 60),
            sample((100, 100, 100), 30.0, 30),
        ]);

        let percents: Vec<f64> = palette.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![60.0, 30.0, 10.0]);
    }
}
