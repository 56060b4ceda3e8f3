//! Universally disliked colors.
//!
//! Cross-cultural color-preference research consistently ranks dark
//! yellow-greens (bile, biological waste) at the bottom. Palette
//! strategies that derive hues automatically (complements, analogous
//! sets) can land there; these helpers detect the region and lift the
//! tone out of it.

use tinct_color::Hct;

/// Whether a color sits in the universally disliked zone: hue 90–111,
/// chroma above 16, tone below 65 (all rounded).
#[must_use]
pub fn is_disliked(hct: &Hct) -> bool {
    let hue_passes = (90.0..=111.0).contains(&hct.hue().round());
    let chroma_passes = hct.chroma().round() > 16.0;
    let tone_passes = hct.tone().round() < 65.0;
    hue_passes && chroma_passes && tone_passes
}

/// Lighten a disliked color to tone 70, keeping hue and chroma;
/// likeable colors pass through unchanged.
#[must_use]
pub fn fix_if_disliked(hct: Hct) -> Hct {
    if is_disliked(&hct) {
        Hct::new(hct.hue(), hct.chroma(), 70.0)
    } else {
        hct
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
