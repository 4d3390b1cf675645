//! Constants and reference values for palette extraction
//!
//! Compile-time limits, defaults, and the parameter domains exposed by the
//! reference user interface.

/// Geometric limits of the RGB cube
pub mod limits {
    /// Maximum possible Euclidean distance in 8-bit RGB space:
    /// the black-to-white diagonal, sqrt(3 * 255^2) ≈ 441.67
    pub const MAX_RGB_DISTANCE: f64 = 441.672_955_930_063_7;

    /// Maximum number of accent colors returned per palette
    pub const MAX_ACCENT_COLORS: usize = 5;

    /// Minimum palette size for accent selection to be meaningful
    pub const MIN_PALETTE_FOR_ACCENTS: usize = 2;
}

/// Default extraction parameters (reference UI defaults)
pub mod defaults {
    /// Default merge threshold
    pub const THRESHOLD: f64 = 50.0;

    /// Default minimum coverage percent for histogram entries
    pub const MIN_PERCENT: f64 = 1.0;
}

/// Parameter domains exposed by the reference UI sliders.
///
/// The core accepts any non-negative value; these bound only the
/// interactive controls.
pub mod ranges {
    pub const THRESHOLD_MIN: f64 = 0.0;
    pub const THRESHOLD_MAX: f64 = 100.0;

    pub const MIN_PERCENT_MIN: f64 = 0.0;
    pub const MIN_PERCENT_MAX: f64 = 10.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_rgb_distance() {
        let diagonal = (3.0_f64 * 255.0 * 255.0).sqrt();
        assert!((limits::MAX_RGB_DISTANCE - diagonal).abs() < 1e-9);
    }

    #[test]
    fn test_defaults_within_ui_ranges() {
        assert!(defaults::THRESHOLD >= ranges::THRESHOLD_MIN);
        assert!(defaults::THRESHOLD <= ranges::THRESHOLD_MAX);
        assert!(defaults::MIN_PERCENT >= ranges::MIN_PERCENT_MIN);
        assert!(defaults::MIN_PERCENT <= ranges::MIN_PERCENT_MAX);
    }
}
