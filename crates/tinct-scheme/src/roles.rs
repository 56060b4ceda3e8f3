//! The standard role table.
//!
//! Each function builds the policy for one named role: the palette it
//! samples, its preferred tone in light and dark mode, and the contrast
//! machinery that adjusts it. Accent roles special-case the monochrome
//! variant (tones must carry all the meaning when chroma is zero) and
//! the fidelity/content variants (containers chase the seed color
//! instead of fixed tones).

use crate::curve::ContrastCurve;
use crate::delta::{ToneDeltaPair, TonePolarity};
use crate::dynamic::{find_desired_chroma_by_tone, foreground_tone, DynamicColor};
use crate::scheme::{DynamicScheme, SpecVersion, Variant};
use tinct_palette::dislike::fix_if_disliked;

fn is_fidelity(s: &DynamicScheme) -> bool {
    matches!(s.variant, Variant::Fidelity | Variant::Content)
}

fn is_monochrome(s: &DynamicScheme) -> bool {
    s.variant == Variant::Monochrome
}

/// The lightest surface in dark mode, the darkest in light mode: the
/// worst case a floating role must stay readable against.
#[must_use]
pub fn highest_surface(s: &DynamicScheme) -> DynamicColor {
    if s.is_dark { surface_bright() } else { surface_dim() }
}

// ─── Key colors ──────────────────────────────────────────────────────────────

#[must_use]
pub fn primary_palette_key_color() -> DynamicColor {
    DynamicColor {
        name: "primary_palette_key_color",
        palette: |s| &s.primary_palette,
        tone: |s| s.primary_palette.key_color().tone(),
        is_background: false,
        background: None,
        second_background: None,
        contrast_curve: None,
        tone_delta_pair: None,
        opacity: None,
    }
}

#[must_use]
pub fn secondary_palette_key_color() -> DynamicColor {
    DynamicColor {
        name: "secondary_palette_key_color",
        palette: |s| &s.secondary_palette,
        tone: |s| s.secondary_palette.key_color().tone(),
        ..primary_palette_key_color()
    }
}

#[must_use]
pub fn tertiary_palette_key_color() -> DynamicColor {
    DynamicColor {
        name: "tertiary_palette_key_color",
        palette: |s| &s.tertiary_palette,
        tone: |s| s.tertiary_palette.key_color().tone(),
        ..primary_palette_key_color()
    }
}

#[must_use]
pub fn neutral_palette_key_color() -> DynamicColor {
    DynamicColor {
        name: "neutral_palette_key_color",
        palette: |s| &s.neutral_palette,
        tone: |s| s.neutral_palette.key_color().tone(),
        ..primary_palette_key_color()
    }
}

#[must_use]
pub fn neutral_variant_palette_key_color() -> DynamicColor {
    DynamicColor {
        name: "neutral_variant_palette_key_color",
        palette: |s| &s.neutral_variant_palette,
        tone: |s| s.neutral_variant_palette.key_color().tone(),
        ..primary_palette_key_color()
    }
}

// ─── Surfaces ────────────────────────────────────────────────────────────────

#[must_use]
pub fn background() -> DynamicColor {
    DynamicColor {
        name: "background",
        palette: |s| &s.neutral_palette,
        tone: |s| if s.is_dark { 6.0 } else { 98.0 },
        is_background: true,
        background: None,
        second_background: None,
        contrast_curve: None,
        tone_delta_pair: None,
        opacity: None,
    }
}

#[must_use]
pub fn on_background() -> DynamicColor {
    DynamicColor {
        name: "on_background",
        palette: |s| &s.neutral_palette,
        tone: |s| if s.is_dark { 90.0 } else { 10.0 },
        is_background: false,
        background: Some(|_| background()),
        contrast_curve: Some(ContrastCurve::new(3.0, 3.0, 4.5, 7.0)),
        ..background()
    }
}

#[must_use]
pub fn surface() -> DynamicColor {
    DynamicColor {
        name: "surface",
        tone: |s| if s.is_dark { 6.0 } else { 98.0 },
        ..background()
    }
}

#[must_use]
pub fn surface_dim() -> DynamicColor {
    DynamicColor {
        name: "surface_dim",
        tone: |s| if s.is_dark { 6.0 } else { 87.0 },
        ..background()
    }
}

#[must_use]
pub fn surface_bright() -> DynamicColor {
    DynamicColor {
        name: "surface_bright",
        tone: |s| if s.is_dark { 24.0 } else { 98.0 },
        ..background()
    }
}

#[must_use]
pub fn surface_container_lowest() -> DynamicColor {
    DynamicColor {
        name: "surface_container_lowest",
        tone: |s| if s.is_dark { 4.0 } else { 100.0 },
        ..background()
    }
}

#[must_use]
pub fn surface_container_low() -> DynamicColor {
    DynamicColor {
        name: "surface_container_low",
        tone: |s| if s.is_dark { 10.0 } else { 96.0 },
        ..background()
    }
}

#[must_use]
pub fn surface_container() -> DynamicColor {
    DynamicColor {
        name: "surface_container",
        tone: |s| if s.is_dark { 12.0 } else { 94.0 },
        ..background()
    }
}

#[must_use]
pub fn surface_container_high() -> DynamicColor {
    DynamicColor {
        name: "surface_container_high",
        tone: |s| if s.is_dark { 17.0 } else { 92.0 },
        ..background()
    }
}

#[must_use]
pub fn surface_container_highest() -> DynamicColor {
    DynamicColor {
        name: "surface_container_highest",
        tone: |s| if s.is_dark { 22.0 } else { 90.0 },
        ..background()
    }
}

#[must_use]
pub fn on_surface() -> DynamicColor {
    DynamicColor {
        name: "on_surface",
        tone: |s| if s.is_dark { 90.0 } else { 10.0 },
        is_background: false,
        background: Some(highest_surface),
        contrast_curve: Some(ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
        ..background()
    }
}

#[must_use]
pub fn surface_variant() -> DynamicColor {
    DynamicColor {
        name: "surface_variant",
        palette: |s| &s.neutral_variant_palette,
        tone: |s| if s.is_dark { 30.0 } else { 90.0 },
        ..background()
    }
}

#[must_use]
pub fn on_surface_variant() -> DynamicColor {
    DynamicColor {
        name: "on_surface_variant",
        palette: |s| &s.neutral_variant_palette,
        tone: |s| if s.is_dark { 80.0 } else { 30.0 },
        is_background: false,
        background: Some(highest_surface),
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),
        ..background()
    }
}

#[must_use]
pub fn inverse_surface() -> DynamicColor {
    DynamicColor {
        name: "inverse_surface",
        tone: |s| if s.is_dark { 90.0 } else { 20.0 },
        is_background: false,
        ..background()
    }
}

#[must_use]
pub fn inverse_on_surface() -> DynamicColor {
    DynamicColor {
        name: "inverse_on_surface",
        tone: |s| if s.is_dark { 20.0 } else { 95.0 },
        is_background: false,
        background: Some(|_| inverse_surface()),
        contrast_curve: Some(ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
        ..background()
    }
}

#[must_use]
pub fn outline() -> DynamicColor {
    DynamicColor {
        name: "outline",
        palette: |s| &s.neutral_variant_palette,
        tone: |s| if s.is_dark { 60.0 } else { 50.0 },
        is_background: false,
        background: Some(highest_surface),
        contrast_curve: Some(ContrastCurve::new(1.5, 3.0, 4.5, 7.0)),
        ..background()
    }
}

#[must_use]
pub fn outline_variant() -> DynamicColor {
    DynamicColor {
        name: "outline_variant",
        palette: |s| &s.neutral_variant_palette,
        tone: |s| if s.is_dark { 30.0 } else { 80.0 },
        is_background: false,
        background: Some(highest_surface),
        contrast_curve: Some(ContrastCurve::new(1.0, 1.0, 3.0, 4.5)),
        ..background()
    }
}

#[must_use]
pub fn shadow() -> DynamicColor {
    DynamicColor {
        name: "shadow",
        tone: |_| 0.0,
        is_background: false,
        ..background()
    }
}

#[must_use]
pub fn scrim() -> DynamicColor {
    DynamicColor {
        name: "scrim",
        tone: |_| 0.0,
        is_background: false,
        ..background()
    }
}

#[must_use]
pub fn surface_tint() -> DynamicColor {
    DynamicColor {
        name: "surface_tint",
        palette: |s| &s.primary_palette,
        tone: |s| if s.is_dark { 80.0 } else { 40.0 },
        ..background()
    }
}

// ─── Primary ─────────────────────────────────────────────────────────────────

#[must_use]
pub fn primary() -> DynamicColor {
    DynamicColor {
        name: "primary",
        palette: |s| &s.primary_palette,
        tone: |s| {
            if is_monochrome(s) {
                if s.is_dark { 100.0 } else { 0.0 }
            } else if s.is_dark {
                80.0
            } else {
                40.0
            }
        },
        is_background: true,
        background: Some(highest_surface),
        second_background: None,
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 7.0)),
        tone_delta_pair: Some(|_| {
            ToneDeltaPair::new(primary_container(), primary(), 10.0, TonePolarity::Nearer, false)
        }),
        opacity: None,
    }
}

#[must_use]
pub fn on_primary() -> DynamicColor {
    DynamicColor {
        name: "on_primary",
        palette: |s| &s.primary_palette,
        tone: |s| {
            if is_monochrome(s) {
                if s.is_dark { 10.0 } else { 90.0 }
            } else if s.is_dark {
                20.0
            } else {
                100.0
            }
        },
        is_background: false,
        background: Some(|_| primary()),
        contrast_curve: Some(ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
        tone_delta_pair: None,
        ..primary()
    }
}

#[must_use]
pub fn primary_container() -> DynamicColor {
    DynamicColor {
        name: "primary_container",
        tone: |s| {
            if is_fidelity(s) {
                return s.source_color.tone();
            }
            if is_monochrome(s) {
                return if s.is_dark { 85.0 } else { 25.0 };
            }
            if s.is_dark { 30.0 } else { 90.0 }
        },
        contrast_curve: Some(ContrastCurve::new(1.0, 1.0, 3.0, 4.5)),
        ..primary()
    }
}

#[must_use]
pub fn on_primary_container() -> DynamicColor {
    DynamicColor {
        name: "on_primary_container",
        tone: |s| {
            if is_fidelity(s) {
                return foreground_tone(primary_container().get_tone(s), 4.5);
            }
            if is_monochrome(s) {
                return if s.is_dark { 0.0 } else { 100.0 };
            }
            if s.is_dark { 90.0 } else { 30.0 }
        },
        is_background: false,
        background: Some(|_| primary_container()),
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),
        tone_delta_pair: None,
        ..primary()
    }
}

#[must_use]
pub fn inverse_primary() -> DynamicColor {
    DynamicColor {
        name: "inverse_primary",
        tone: |s| if s.is_dark { 40.0 } else { 80.0 },
        is_background: false,
        background: Some(|_| inverse_surface()),
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 7.0)),
        tone_delta_pair: None,
        ..primary()
    }
}

// ─── Secondary ───────────────────────────────────────────────────────────────

#[must_use]
pub fn secondary() -> DynamicColor {
    DynamicColor {
        name: "secondary",
        palette: |s| &s.secondary_palette,
        tone: |s| if s.is_dark { 80.0 } else { 40.0 },
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 7.0)),
        tone_delta_pair: Some(|_| {
            ToneDeltaPair::new(
                secondary_container(),
                secondary(),
                10.0,
                TonePolarity::Nearer,
                false,
            )
        }),
        ..primary()
    }
}

#[must_use]
pub fn on_secondary() -> DynamicColor {
    DynamicColor {
        name: "on_secondary",
        palette: |s| &s.secondary_palette,
        tone: |s| {
            if is_monochrome(s) {
                if s.is_dark { 10.0 } else { 100.0 }
            } else if s.is_dark {
                20.0
            } else {
                100.0
            }
        },
        is_background: false,
        background: Some(|_| secondary()),
        contrast_curve: Some(ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
        tone_delta_pair: None,
        ..secondary()
    }
}

#[must_use]
pub fn secondary_container() -> DynamicColor {
    DynamicColor {
        name: "secondary_container",
        tone: |s| {
            let initial_tone = if s.is_dark { 30.0 } else { 90.0 };
            if is_monochrome(s) {
                return if s.is_dark { 30.0 } else { 85.0 };
            }
            if !is_fidelity(s) {
                return initial_tone;
            }
            find_desired_chroma_by_tone(
                s.secondary_palette.hue(),
                s.secondary_palette.chroma(),
                initial_tone,
                !s.is_dark,
            )
        },
        contrast_curve: Some(ContrastCurve::new(1.0, 1.0, 3.0, 4.5)),
        ..secondary()
    }
}

#[must_use]
pub fn on_secondary_container() -> DynamicColor {
    DynamicColor {
        name: "on_secondary_container",
        tone: |s| {
            if is_monochrome(s) {
                return if s.is_dark { 90.0 } else { 10.0 };
            }
            if !is_fidelity(s) {
                return if s.is_dark { 90.0 } else { 30.0 };
            }
            foreground_tone(secondary_container().get_tone(s), 4.5)
        },
        is_background: false,
        background: Some(|_| secondary_container()),
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),
        tone_delta_pair: None,
        ..secondary()
    }
}

// ─── Tertiary ────────────────────────────────────────────────────────────────

#[must_use]
pub fn tertiary() -> DynamicColor {
    DynamicColor {
        name: "tertiary",
        palette: |s| &s.tertiary_palette,
        tone: |s| {
            if is_monochrome(s) {
                if s.is_dark { 90.0 } else { 25.0 }
            } else if s.is_dark {
                80.0
            } else {
                40.0
            }
        },
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 7.0)),
        tone_delta_pair: Some(|_| {
            ToneDeltaPair::new(
                tertiary_container(),
                tertiary(),
                10.0,
                TonePolarity::Nearer,
                false,
            )
        }),
        ..primary()
    }
}

#[must_use]
pub fn on_tertiary() -> DynamicColor {
    DynamicColor {
        name: "on_tertiary",
        palette: |s| &s.tertiary_palette,
        tone: |s| {
            if is_monochrome(s) {
                if s.is_dark { 10.0 } else { 90.0 }
            } else if s.is_dark {
                20.0
            } else {
                100.0
            }
        },
        is_background: false,
        background: Some(|_| tertiary()),
        contrast_curve: Some(ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
        tone_delta_pair: None,
        ..tertiary()
    }
}

#[must_use]
pub fn tertiary_container() -> DynamicColor {
    DynamicColor {
        name: "tertiary_container",
        tone: |s| {
            if is_monochrome(s) {
                return if s.is_dark { 60.0 } else { 49.0 };
            }
            if !is_fidelity(s) {
                return if s.is_dark { 30.0 } else { 90.0 };
            }
            let proposed = s.tertiary_palette.hct(s.source_color.tone());
            fix_if_disliked(proposed).tone()
        },
        contrast_curve: Some(ContrastCurve::new(1.0, 1.0, 3.0, 4.5)),
        ..tertiary()
    }
}

#[must_use]
pub fn on_tertiary_container() -> DynamicColor {
    DynamicColor {
        name: "on_tertiary_container",
        tone: |s| {
            if is_monochrome(s) {
                return if s.is_dark { 0.0 } else { 100.0 };
            }
            if !is_fidelity(s) {
                return if s.is_dark { 90.0 } else { 30.0 };
            }
            foreground_tone(tertiary_container().get_tone(s), 4.5)
        },
        is_background: false,
        background: Some(|_| tertiary_container()),
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),
        tone_delta_pair: None,
        ..tertiary()
    }
}

// ─── Error ───────────────────────────────────────────────────────────────────

#[must_use]
pub fn error() -> DynamicColor {
    DynamicColor {
        name: "error",
        palette: |s| &s.error_palette,
        tone: |s| if s.is_dark { 80.0 } else { 40.0 },
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 7.0)),
        tone_delta_pair: Some(|_| {
            ToneDeltaPair::new(error_container(), error(), 10.0, TonePolarity::Nearer, false)
        }),
        ..primary()
    }
}

#[must_use]
pub fn on_error() -> DynamicColor {
    DynamicColor {
        name: "on_error",
        palette: |s| &s.error_palette,
        tone: |s| if s.is_dark { 20.0 } else { 100.0 },
        is_background: false,
        background: Some(|_| error()),
        contrast_curve: Some(ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
        tone_delta_pair: None,
        ..error()
    }
}

#[must_use]
pub fn error_container() -> DynamicColor {
    DynamicColor {
        name: "error_container",
        tone: |s| if s.is_dark { 30.0 } else { 90.0 },
        contrast_curve: Some(ContrastCurve::new(1.0, 1.0, 3.0, 4.5)),
        ..error()
    }
}

#[must_use]
pub fn on_error_container() -> DynamicColor {
    DynamicColor {
        name: "on_error_container",
        tone: |s| {
            if is_monochrome(s) {
                if s.is_dark { 90.0 } else { 10.0 }
            } else if s.is_dark {
                90.0
            } else {
                30.0
            }
        },
        is_background: false,
        background: Some(|_| error_container()),
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),
        tone_delta_pair: None,
        ..error()
    }
}

// ─── Fixed accents ───────────────────────────────────────────────────────────
//
// Fixed roles keep the same tone in light and dark themes, so they are
// constrained as light/dark pairs rather than nearer/farther ones.

#[must_use]
pub fn primary_fixed() -> DynamicColor {
    DynamicColor {
        name: "primary_fixed",
        tone: |s| if is_monochrome(s) { 40.0 } else { 90.0 },
        contrast_curve: Some(ContrastCurve::new(1.0, 1.0, 3.0, 4.5)),
        tone_delta_pair: Some(|_| {
            ToneDeltaPair::new(
                primary_fixed(),
                primary_fixed_dim(),
                10.0,
                TonePolarity::Lighter,
                true,
            )
        }),
        ..primary()
    }
}

#[must_use]
pub fn primary_fixed_dim() -> DynamicColor {
    DynamicColor {
        name: "primary_fixed_dim",
        tone: |s| if is_monochrome(s) { 30.0 } else { 80.0 },
        ..primary_fixed()
    }
}

#[must_use]
pub fn on_primary_fixed() -> DynamicColor {
    DynamicColor {
        name: "on_primary_fixed",
        tone: |s| if is_monochrome(s) { 100.0 } else { 10.0 },
        is_background: false,
        background: Some(|_| primary_fixed_dim()),
        second_background: Some(|_| primary_fixed()),
        contrast_curve: Some(ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
        tone_delta_pair: None,
        ..primary_fixed()
    }
}

#[must_use]
pub fn on_primary_fixed_variant() -> DynamicColor {
    DynamicColor {
        name: "on_primary_fixed_variant",
        tone: |s| if is_monochrome(s) { 90.0 } else { 30.0 },
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),
        ..on_primary_fixed()
    }
}

#[must_use]
pub fn secondary_fixed() -> DynamicColor {
    DynamicColor {
        name: "secondary_fixed",
        palette: |s| &s.secondary_palette,
        tone: |s| if is_monochrome(s) { 80.0 } else { 90.0 },
        contrast_curve: Some(ContrastCurve::new(1.0, 1.0, 3.0, 4.5)),
        tone_delta_pair: Some(|_| {
            ToneDeltaPair::new(
                secondary_fixed(),
                secondary_fixed_dim(),
                10.0,
                TonePolarity::Lighter,
                true,
            )
        }),
        ..primary()
    }
}

#[must_use]
pub fn secondary_fixed_dim() -> DynamicColor {
    DynamicColor {
        name: "secondary_fixed_dim",
        tone: |s| if is_monochrome(s) { 70.0 } else { 80.0 },
        ..secondary_fixed()
    }
}

#[must_use]
pub fn on_secondary_fixed() -> DynamicColor {
    DynamicColor {
        name: "on_secondary_fixed",
        tone: |_| 10.0,
        is_background: false,
        background: Some(|_| secondary_fixed_dim()),
        second_background: Some(|_| secondary_fixed()),
        contrast_curve: Some(ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
        tone_delta_pair: None,
        ..secondary_fixed()
    }
}

#[must_use]
pub fn on_secondary_fixed_variant() -> DynamicColor {
    DynamicColor {
        name: "on_secondary_fixed_variant",
        tone: |s| if is_monochrome(s) { 25.0 } else { 30.0 },
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),
        ..on_secondary_fixed()
    }
}

#[must_use]
pub fn tertiary_fixed() -> DynamicColor {
    DynamicColor {
        name: "tertiary_fixed",
        palette: |s| &s.tertiary_palette,
        tone: |s| if is_monochrome(s) { 40.0 } else { 90.0 },
        contrast_curve: Some(ContrastCurve::new(1.0, 1.0, 3.0, 4.5)),
        tone_delta_pair: Some(|_| {
            ToneDeltaPair::new(
                tertiary_fixed(),
                tertiary_fixed_dim(),
                10.0,
                TonePolarity::Lighter,
                true,
            )
        }),
        ..primary()
    }
}

#[must_use]
pub fn tertiary_fixed_dim() -> DynamicColor {
    DynamicColor {
        name: "tertiary_fixed_dim",
        tone: |s| if is_monochrome(s) { 30.0 } else { 80.0 },
        ..tertiary_fixed()
    }
}

#[must_use]
pub fn on_tertiary_fixed() -> DynamicColor {
    DynamicColor {
        name: "on_tertiary_fixed",
        tone: |s| if is_monochrome(s) { 100.0 } else { 10.0 },
        is_background: false,
        background: Some(|_| tertiary_fixed_dim()),
        second_background: Some(|_| tertiary_fixed()),
        contrast_curve: Some(ContrastCurve::new(4.5, 7.0, 11.0, 21.0)),
        tone_delta_pair: None,
        ..tertiary_fixed()
    }
}

#[must_use]
pub fn on_tertiary_fixed_variant() -> DynamicColor {
    DynamicColor {
        name: "on_tertiary_fixed_variant",
        tone: |s| if is_monochrome(s) { 90.0 } else { 30.0 },
        contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),
        ..on_tertiary_fixed()
    }
}

// ─── Role registry ───────────────────────────────────────────────────────────

/// Every role in the table, for iteration and by-name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    PrimaryPaletteKeyColor,
    SecondaryPaletteKeyColor,
    TertiaryPaletteKeyColor,
    NeutralPaletteKeyColor,
    NeutralVariantPaletteKeyColor,
    Background,
    OnBackground,
    Surface,
    SurfaceDim,
    SurfaceBright,
    SurfaceContainerLowest,
    SurfaceContainerLow,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    InverseSurface,
    InverseOnSurface,
    Outline,
    OutlineVariant,
    Shadow,
    Scrim,
    SurfaceTint,
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    InversePrimary,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    PrimaryFixed,
    PrimaryFixedDim,
    OnPrimaryFixed,
    OnPrimaryFixedVariant,
    SecondaryFixed,
    SecondaryFixedDim,
    OnSecondaryFixed,
    OnSecondaryFixedVariant,
    TertiaryFixed,
    TertiaryFixedDim,
    OnTertiaryFixed,
    OnTertiaryFixedVariant,
}

impl Role {
    pub const ALL: [Self; 54] = [
        Self::PrimaryPaletteKeyColor,
        Self::SecondaryPaletteKeyColor,
        Self::TertiaryPaletteKeyColor,
        Self::NeutralPaletteKeyColor,
        Self::NeutralVariantPaletteKeyColor,
        Self::Background,
        Self::OnBackground,
        Self::Surface,
        Self::SurfaceDim,
        Self::SurfaceBright,
        Self::SurfaceContainerLowest,
        Self::SurfaceContainerLow,
        Self::SurfaceContainer,
        Self::SurfaceContainerHigh,
        Self::SurfaceContainerHighest,
        Self::OnSurface,
        Self::SurfaceVariant,
        Self::OnSurfaceVariant,
        Self::InverseSurface,
        Self::InverseOnSurface,
        Self::Outline,
        Self::OutlineVariant,
        Self::Shadow,
        Self::Scrim,
        Self::SurfaceTint,
        Self::Primary,
        Self::OnPrimary,
        Self::PrimaryContainer,
        Self::OnPrimaryContainer,
        Self::InversePrimary,
        Self::Secondary,
        Self::OnSecondary,
        Self::SecondaryContainer,
        Self::OnSecondaryContainer,
        Self::Tertiary,
        Self::OnTertiary,
        Self::TertiaryContainer,
        Self::OnTertiaryContainer,
        Self::Error,
        Self::OnError,
        Self::ErrorContainer,
        Self::OnErrorContainer,
        Self::PrimaryFixed,
        Self::PrimaryFixedDim,
        Self::OnPrimaryFixed,
        Self::OnPrimaryFixedVariant,
        Self::SecondaryFixed,
        Self::SecondaryFixedDim,
        Self::OnSecondaryFixed,
        Self::OnSecondaryFixedVariant,
        Self::TertiaryFixed,
        Self::TertiaryFixedDim,
        Self::OnTertiaryFixed,
        Self::OnTertiaryFixedVariant,
    ];

    /// The policy object for this role under one recipe edition.
    #[must_use]
    pub fn recipe(self, version: SpecVersion) -> DynamicColor {
        let SpecVersion::Spec2021 = version;
        match self {
            Self::PrimaryPaletteKeyColor => primary_palette_key_color(),
            Self::SecondaryPaletteKeyColor => secondary_palette_key_color(),
            Self::TertiaryPaletteKeyColor => tertiary_palette_key_color(),
            Self::NeutralPaletteKeyColor => neutral_palette_key_color(),
            Self::NeutralVariantPaletteKeyColor => neutral_variant_palette_key_color(),
            Self::Background => background(),
            Self::OnBackground => on_background(),
            Self::Surface => surface(),
            Self::SurfaceDim => surface_dim(),
            Self::SurfaceBright => surface_bright(),
            Self::SurfaceContainerLowest => surface_container_lowest(),
            Self::SurfaceContainerLow => surface_container_low(),
            Self::SurfaceContainer => surface_container(),
            Self::SurfaceContainerHigh => surface_container_high(),
            Self::SurfaceContainerHighest => surface_container_highest(),
            Self::OnSurface => on_surface(),
            Self::SurfaceVariant => surface_variant(),
            Self::OnSurfaceVariant => on_surface_variant(),
            Self::InverseSurface => inverse_surface(),
            Self::InverseOnSurface => inverse_on_surface(),
            Self::Outline => outline(),
            Self::OutlineVariant => outline_variant(),
            Self::Shadow => shadow(),
            Self::Scrim => scrim(),
            Self::SurfaceTint => surface_tint(),
            Self::Primary => primary(),
            Self::OnPrimary => on_primary(),
            Self::PrimaryContainer => primary_container(),
            Self::OnPrimaryContainer => on_primary_container(),
            Self::InversePrimary => inverse_primary(),
            Self::Secondary => secondary(),
            Self::OnSecondary => on_secondary(),
            Self::SecondaryContainer => secondary_container(),
            Self::OnSecondaryContainer => on_secondary_container(),
            Self::Tertiary => tertiary(),
            Self::OnTertiary => on_tertiary(),
            Self::TertiaryContainer => tertiary_container(),
            Self::OnTertiaryContainer => on_tertiary_container(),
            Self::Error => error(),
            Self::OnError => on_error(),
            Self::ErrorContainer => error_container(),
            Self::OnErrorContainer => on_error_container(),
            Self::PrimaryFixed => primary_fixed(),
            Self::PrimaryFixedDim => primary_fixed_dim(),
            Self::OnPrimaryFixed => on_primary_fixed(),
            Self::OnPrimaryFixedVariant => on_primary_fixed_variant(),
            Self::SecondaryFixed => secondary_fixed(),
            Self::SecondaryFixedDim => secondary_fixed_dim(),
            Self::OnSecondaryFixed => on_secondary_fixed(),
            Self::OnSecondaryFixedVariant => on_secondary_fixed_variant(),
            Self::TertiaryFixed => tertiary_fixed(),
            Self::TertiaryFixedDim => tertiary_fixed_dim(),
            Self::OnTertiaryFixed => on_tertiary_fixed(),
            Self::OnTertiaryFixedVariant => on_tertiary_fixed_variant(),
        }
    }

    /// The role's snake_case token name, matching `DynamicColor::name`.
    /// Stable across recipe editions.
    #[must_use]
    pub fn token_name(self) -> &'static str {
        self.recipe(SpecVersion::default()).name
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::ContrastLevel;
    use tinct_color::contrast::ratio_of_tones;
    use tinct_color::Argb;

    fn scheme(variant: Variant, is_dark: bool, contrast: ContrastLevel) -> DynamicScheme {
        DynamicScheme::new(Argb(0xFF67_50A4), variant, is_dark, contrast)
    }

    #[test]
    fn registry_names_are_unique_and_match() {
        let mut seen = std::collections::HashSet::new();
        for role in Role::ALL {
            assert!(seen.insert(role.token_name()), "duplicate {}", role.token_name());
            assert_eq!(role.recipe(SpecVersion::Spec2021).name, role.token_name());
        }
    }

    #[test]
    fn light_theme_baseline_tones() {
        let s = scheme(Variant::TonalSpot, false, ContrastLevel::Standard);
        assert_eq!(primary().get_tone(&s), 40.0);
        assert_eq!(on_primary().get_tone(&s), 100.0);
        assert_eq!(primary_container().get_tone(&s), 90.0);
        assert_eq!(surface().get_tone(&s), 98.0);
        assert_eq!(on_surface().get_tone(&s), 10.0);
    }

    #[test]
    fn dark_theme_baseline_tones() {
        let s = scheme(Variant::TonalSpot, true, ContrastLevel::Standard);
        assert_eq!(primary().get_tone(&s), 80.0);
        assert_eq!(on_primary().get_tone(&s), 20.0);
        assert_eq!(surface().get_tone(&s), 6.0);
        assert_eq!(on_surface().get_tone(&s), 90.0);
    }

    #[test]
    fn on_primary_always_readable_on_primary() {
        // The curve's requirement can exceed what any tone offers
        // against the resolved background (even 7:1 is unreachable over
        // a tone-40 accent, where tone 100 tops out at 6.46:1). The
        // promise is best effort: meet the curve, or land at whichever
        // extreme gets closest.
        for variant in Variant::ALL {
            for is_dark in [false, true] {
                for contrast in
                    [ContrastLevel::Reduced, ContrastLevel::Standard, ContrastLevel::High]
                {
                    let s = scheme(variant, is_dark, contrast);
                    let bg = primary().get_tone(&s);
                    let ratio = ratio_of_tones(bg, on_primary().get_tone(&s));
                    let curve = on_primary().contrast_curve.unwrap();
                    let required = curve.get(s.contrast_level.min(0.0));
                    let best = ratio_of_tones(bg, 0.0).max(ratio_of_tones(bg, 100.0));
                    assert!(
                        ratio >= required.min(best) - 0.05,
                        "{variant} dark={is_dark} contrast={contrast:?}: {ratio} < {required}"
                    );
                }
            }
        }
    }

    #[test]
    fn container_keeps_tone_delta_from_accent() {
        for contrast in [ContrastLevel::Reduced, ContrastLevel::Standard, ContrastLevel::High] {
            for is_dark in [false, true] {
                let s = scheme(Variant::TonalSpot, is_dark, contrast);
                let accent = primary().get_tone(&s);
                let container = primary_container().get_tone(&s);
                assert!(
                    (accent - container).abs() >= 10.0 - 1e-9,
                    "dark={is_dark} contrast={contrast:?}: |{accent} - {container}| < 10"
                );
            }
        }
    }

    #[test]
    fn fixed_family_respects_polarity() {
        let s = scheme(Variant::TonalSpot, false, ContrastLevel::Standard);
        let fixed = primary_fixed().get_tone(&s);
        let dim = primary_fixed_dim().get_tone(&s);
        assert!(fixed > dim, "fixed {fixed} should be lighter than dim {dim}");
        assert!((fixed - dim).abs() >= 10.0 - 1e-9);
    }

    #[test]
    fn background_roles_stay_off_midtone_band() {
        for variant in Variant::ALL {
            for is_dark in [false, true] {
                let s = scheme(variant, is_dark, ContrastLevel::Standard);
                for role in Role::ALL {
                    let color = role.recipe(s.spec_version);
                    if color.is_background {
                        let tone = color.get_tone(&s);
                        assert!(
                            !(50.0..60.0).contains(&tone),
                            "{} in {variant} dark={is_dark}: tone {tone}",
                            color.name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn monochrome_primary_is_pure_black_or_white() {
        let light = scheme(Variant::Monochrome, false, ContrastLevel::Standard);
        let dark = scheme(Variant::Monochrome, true, ContrastLevel::Standard);
        assert_eq!(primary().get_argb(&light), Argb::BLACK);
        assert_eq!(primary().get_argb(&dark), Argb::WHITE);
    }

    #[test]
    fn fidelity_container_tracks_seed_tone() {
        let s = scheme(Variant::Fidelity, false, ContrastLevel::Standard);
        let container = primary_container().get_tone(&s);
        assert!((container - s.source_color.tone()).abs() < 1e-9);
    }

    #[test]
    fn shadow_and_scrim_are_black() {
        let s = scheme(Variant::Vibrant, true, ContrastLevel::Standard);
        assert_eq!(shadow().get_argb(&s), Argb::BLACK);
        assert_eq!(scrim().get_argb(&s), Argb::BLACK);
    }
}
