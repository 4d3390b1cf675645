//! Extraction session state
//!
//! An [`ExtractionSession`] is the caller-owned value holding the current
//! palette and the accent color the user selected from it. Each extraction
//! run replaces the palette and clears the selection; the session never
//! shares state with other runs.

use crate::accent::select_accents;
use crate::catalog::ReferenceCatalog;
use crate::config::ExtractionParams;
use crate::{extract_palette, ColorSample, ExtractionError, Palette, Result};
use palette::Srgb;

/// Session state for interactive palette extraction and export
#[derive(Debug, Clone, Default)]
pub struct ExtractionSession {
    palette: Option<Palette>,
    selected_accent: Option<Srgb<u8>>,
}

impl ExtractionSession {
    /// Create a session with no palette yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Run an extraction, replacing any previous palette
    ///
    /// The previous accent selection is cleared: it was drawn from the
    /// palette being superseded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` or `MalformedPixelBuffer` from the
    /// underlying extraction; the session keeps its prior palette in
    /// that case
    pub fn run(&mut self, pixels: &[u8], params: &ExtractionParams) -> Result<&Palette> {
        let palette = extract_palette(pixels, params)?;
        self.selected_accent = None;
        Ok(self.palette.insert(palette))
    }

    /// The palette from the most recent run, if any
    pub fn palette(&self) -> Option<&[ColorSample]> {
        self.palette.as_deref()
    }

    /// Accent colors of the current palette (empty when no palette or
    /// fewer than two entries)
    pub fn accent_colors(&self) -> Vec<ColorSample> {
        self.palette
            .as_deref()
            .map(select_accents)
            .unwrap_or_default()
    }

    /// Record the accent color the user picked
    ///
    /// # Errors
    ///
    /// Returns `NoPalette` if no extraction has run yet
    pub fn select_accent(&mut self, rgb: Srgb<u8>) -> Result<()> {
        if self.palette.is_none() {
            return Err(ExtractionError::NoPalette);
        }
        self.selected_accent = Some(rgb);
        Ok(())
    }

    /// The currently selected accent color, if any
    pub fn selected_accent(&self) -> Option<Srgb<u8>> {
        self.selected_accent
    }

    /// Clear the accent selection without touching the palette
    pub fn clear_accent(&mut self) {
        self.selected_accent = None;
    }

    /// Resolve the session's colors to catalog identifiers for export
    ///
    /// The selected accent's id comes first (when an accent is selected),
    /// followed by each palette entry's id in palette order. Duplicate ids
    /// are skipped; the first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns `NoPalette` if no extraction has run yet (callers should
    /// not produce an empty export file), or `CatalogEmpty` from
    /// classification
    pub fn export_identifiers(&self, catalog: &ReferenceCatalog) -> Result<Vec<String>> {
        let palette = self.palette.as_ref().ok_or(ExtractionError::NoPalette)?;

        let mut ids: Vec<String> = Vec::new();

        if let Some(accent) = self.selected_accent {
            let matched = catalog.classify(accent)?;
            ids.push(matched.entry.id.clone());
        }

        for sample in palette {
            let matched = catalog.classify(sample.rgb)?;
            if !ids.iter().any(|id| id == &matched.entry.id) {
                ids.push(matched.entry.id.clone());
            }
        }

        Ok(ids)
    }
}
