//! Dynamic schemes: a seed color plus a variant recipe, expanded into
//! the six tonal palettes every role draws from.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use tinct_color::math::sanitize_degrees;
use tinct_color::{Argb, Hct};
use tinct_palette::dislike::fix_if_disliked;
use tinct_palette::{TemperatureCache, TonalPalette};

// ─── Variants ────────────────────────────────────────────────────────────────

/// How a seed color is translated into palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Grayscale, no chroma anywhere.
    Monochrome,
    /// Nearly grayscale with a whisper of the seed hue.
    Neutral,
    /// Calibrated pastels; the default.
    TonalSpot,
    /// Maximum-chroma primary with hue-dependent accent rotations.
    Vibrant,
    /// A playful scheme whose primary hue sits far from the seed.
    Expressive,
    /// Keeps the seed's exact hue and chroma; accents from the
    /// temperature wheel.
    Fidelity,
    /// Like fidelity, but accents stay analogous to the seed.
    Content,
    /// Chromatic accents over pure-gray neutrals.
    Rainbow,
    /// Hue-shifted primary against a matching-hue tertiary.
    FruitSalad,
}

impl Variant {
    pub const ALL: [Self; 9] = [
        Self::Monochrome,
        Self::Neutral,
        Self::TonalSpot,
        Self::Vibrant,
        Self::Expressive,
        Self::Fidelity,
        Self::Content,
        Self::Rainbow,
        Self::FruitSalad,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::Neutral => "neutral",
            Self::TonalSpot => "tonal-spot",
            Self::Vibrant => "vibrant",
            Self::Expressive => "expressive",
            Self::Fidelity => "fidelity",
            Self::Content => "content",
            Self::Rainbow => "rainbow",
            Self::FruitSalad => "fruit-salad",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error from parsing a variant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError(String);

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant {:?}; expected one of ", self.0)?;
        for (i, variant) in Variant::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(variant.name())?;
        }
        Ok(())
    }
}

impl Error for ParseVariantError {}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name() == s)
            .ok_or_else(|| ParseVariantError(s.to_owned()))
    }
}

// ─── Contrast level ──────────────────────────────────────────────────────────

/// Named anchor points on the contrast slider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContrastLevel {
    Reduced,
    #[default]
    Standard,
    Medium,
    High,
}

impl ContrastLevel {
    /// The slider value this level maps to.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Reduced => -1.0,
            Self::Standard => 0.0,
            Self::Medium => 0.5,
            Self::High => 1.0,
        }
    }
}

impl FromStr for ContrastLevel {
    type Err = ParseContrastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reduced" => Ok(Self::Reduced),
            "standard" => Ok(Self::Standard),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParseContrastError(other.to_owned())),
        }
    }
}

/// Error from parsing a contrast level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContrastError(String);

impl fmt::Display for ParseContrastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown contrast level {:?}; expected reduced, standard, medium, or high",
            self.0
        )
    }
}

impl Error for ParseContrastError {}

// ─── Spec version and platform ───────────────────────────────────────────────

/// Which edition of the role-recipe table a scheme resolves against.
/// Only one edition exists; future editions add a variant here and a
/// table beside the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpecVersion {
    #[default]
    Spec2021,
}

/// The device class a theme targets. The 2021 recipes are identical
/// across platforms; the field is carried so schemes stay comparable
/// when platform-sensitive editions arrive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    Phone,
    Watch,
}

/// Error from constructing a scheme with a raw contrast value outside
/// [−1, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastOutOfRange(pub f64);

impl fmt::Display for ContrastOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contrast level {} is outside [-1.0, 1.0]", self.0)
    }
}

impl Error for ContrastOutOfRange {}

// ─── Scheme ──────────────────────────────────────────────────────────────────

/// A seed color expanded by a variant recipe into the palettes the role
/// layer samples from.
#[derive(Debug, Clone)]
pub struct DynamicScheme {
    pub source_color: Hct,
    pub variant: Variant,
    pub is_dark: bool,
    /// Slider position in [−1, 1]; 0.0 is standard contrast.
    pub contrast_level: f64,
    pub spec_version: SpecVersion,
    pub platform: Platform,
    pub primary_palette: TonalPalette,
    pub secondary_palette: TonalPalette,
    pub tertiary_palette: TonalPalette,
    pub neutral_palette: TonalPalette,
    pub neutral_variant_palette: TonalPalette,
    pub error_palette: TonalPalette,
}

impl DynamicScheme {
    /// Build a scheme at one of the named contrast levels.
    #[must_use]
    pub fn new(source: Argb, variant: Variant, is_dark: bool, contrast: ContrastLevel) -> Self {
        // A named level is always in range.
        match Self::with_contrast_value(source, variant, is_dark, contrast.value()) {
            Ok(scheme) => scheme,
            Err(_) => unreachable!("named contrast levels are in range"),
        }
    }

    /// Build a scheme at an arbitrary slider position in [−1, 1].
    pub fn with_contrast_value(
        source: Argb,
        variant: Variant,
        is_dark: bool,
        contrast_level: f64,
    ) -> Result<Self, ContrastOutOfRange> {
        if !(-1.0..=1.0).contains(&contrast_level) || contrast_level.is_nan() {
            return Err(ContrastOutOfRange(contrast_level));
        }
        let source_color = Hct::from_argb(source);
        let [primary, secondary, tertiary, neutral, neutral_variant] =
            variant_palettes(&source_color, variant);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            seed = %source,
            variant = variant.name(),
            is_dark,
            contrast_level,
            "built dynamic scheme"
        );
        Ok(Self {
            source_color,
            variant,
            is_dark,
            contrast_level,
            spec_version: SpecVersion::default(),
            platform: Platform::default(),
            primary_palette: primary,
            secondary_palette: secondary,
            tertiary_palette: tertiary,
            neutral_palette: neutral,
            neutral_variant_palette: neutral_variant,
            error_palette: TonalPalette::from_hue_and_chroma(25.0, 84.0),
        })
    }

    #[must_use]
    pub fn source_argb(&self) -> Argb {
        self.source_color.to_argb()
    }
}

/// Rotate the seed hue by an amount that depends on which band of the
/// hue wheel it falls in. `hues` are the band boundaries (ascending,
/// ending at 360) and `rotations` the per-band rotation in degrees.
#[must_use]
pub fn rotated_hue(source: &Hct, hues: &[f64], rotations: &[f64]) -> f64 {
    let source_hue = source.hue();
    if rotations.len() == 1 {
        return sanitize_degrees(source_hue + rotations[0]);
    }
    for i in 0..hues.len().saturating_sub(1) {
        if hues[i] <= source_hue && source_hue < hues[i + 1] {
            return sanitize_degrees(source_hue + rotations[i]);
        }
    }
    source_hue
}

/// The variant recipes: primary, secondary, tertiary, neutral, and
/// neutral-variant palettes for a seed.
fn variant_palettes(source: &Hct, variant: Variant) -> [TonalPalette; 5] {
    let hue = source.hue();
    let chroma = source.chroma();
    match variant {
        Variant::Monochrome => [
            TonalPalette::from_hue_and_chroma(hue, 0.0),
            TonalPalette::from_hue_and_chroma(hue, 0.0),
            TonalPalette::from_hue_and_chroma(hue, 0.0),
            TonalPalette::from_hue_and_chroma(hue, 0.0),
            TonalPalette::from_hue_and_chroma(hue, 0.0),
        ],
        Variant::Neutral => [
            TonalPalette::from_hue_and_chroma(hue, 12.0),
            TonalPalette::from_hue_and_chroma(hue, 8.0),
            TonalPalette::from_hue_and_chroma(hue, 16.0),
            TonalPalette::from_hue_and_chroma(hue, 2.0),
            TonalPalette::from_hue_and_chroma(hue, 2.0),
        ],
        Variant::TonalSpot => [
            TonalPalette::from_hue_and_chroma(hue, 36.0),
            TonalPalette::from_hue_and_chroma(hue, 16.0),
            TonalPalette::from_hue_and_chroma(sanitize_degrees(hue + 60.0), 24.0),
            TonalPalette::from_hue_and_chroma(hue, 6.0),
            TonalPalette::from_hue_and_chroma(hue, 8.0),
        ],
        Variant::Vibrant => {
            const HUES: [f64; 9] = [0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0];
            const SECONDARY: [f64; 9] = [18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0];
            const TERTIARY: [f64; 9] = [35.0, 30.0, 20.0, 25.0, 30.0, 35.0, 30.0, 25.0, 25.0];
            [
                TonalPalette::from_hue_and_chroma(hue, 200.0),
                TonalPalette::from_hue_and_chroma(rotated_hue(source, &HUES, &SECONDARY), 24.0),
                TonalPalette::from_hue_and_chroma(rotated_hue(source, &HUES, &TERTIARY), 32.0),
                TonalPalette::from_hue_and_chroma(hue, 10.0),
                TonalPalette::from_hue_and_chroma(hue, 12.0),
            ]
        }
        Variant::Expressive => {
            const HUES: [f64; 9] = [0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0];
            const SECONDARY: [f64; 9] = [45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0];
            const TERTIARY: [f64; 9] = [120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 75.0, 12.0, 45.0];
            [
                TonalPalette::from_hue_and_chroma(sanitize_degrees(hue + 240.0), 40.0),
                TonalPalette::from_hue_and_chroma(rotated_hue(source, &HUES, &SECONDARY), 24.0),
                TonalPalette::from_hue_and_chroma(rotated_hue(source, &HUES, &TERTIARY), 32.0),
                TonalPalette::from_hue_and_chroma(sanitize_degrees(hue + 15.0), 8.0),
                TonalPalette::from_hue_and_chroma(sanitize_degrees(hue + 15.0), 12.0),
            ]
        }
        Variant::Fidelity => {
            let complement = TemperatureCache::new(*source).complement();
            [
                TonalPalette::from_hue_and_chroma(hue, chroma),
                TonalPalette::from_hue_and_chroma(hue, (chroma - 32.0).max(chroma * 0.5)),
                TonalPalette::from_hct(fix_if_disliked(complement)),
                TonalPalette::from_hue_and_chroma(hue, chroma / 8.0),
                TonalPalette::from_hue_and_chroma(hue, chroma / 8.0 + 4.0),
            ]
        }
        Variant::Content => {
            let analogous = TemperatureCache::new(*source).analogous(3, 6);
            // Three analogous colors always come back; the last is the
            // farthest clockwise.
            let accent = analogous.last().copied().unwrap_or(*source);
            [
                TonalPalette::from_hue_and_chroma(hue, chroma),
                TonalPalette::from_hue_and_chroma(hue, (chroma - 32.0).max(chroma * 0.5)),
                TonalPalette::from_hct(fix_if_disliked(accent)),
                TonalPalette::from_hue_and_chroma(hue, chroma / 8.0),
                TonalPalette::from_hue_and_chroma(hue, chroma / 8.0 + 4.0),
            ]
        }
        Variant::Rainbow => [
            TonalPalette::from_hue_and_chroma(hue, 48.0),
            TonalPalette::from_hue_and_chroma(hue, 16.0),
            TonalPalette::from_hue_and_chroma(sanitize_degrees(hue + 60.0), 24.0),
            TonalPalette::from_hue_and_chroma(hue, 0.0),
            TonalPalette::from_hue_and_chroma(hue, 0.0),
        ],
        Variant::FruitSalad => [
            TonalPalette::from_hue_and_chroma(sanitize_degrees(hue - 50.0), 48.0),
            TonalPalette::from_hue_and_chroma(sanitize_degrees(hue - 50.0), 36.0),
            TonalPalette::from_hue_and_chroma(hue, 36.0),
            TonalPalette::from_hue_and_chroma(hue, 10.0),
            TonalPalette::from_hue_and_chroma(hue, 16.0),
        ],
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: Argb = Argb(0xFF67_50A4);

    #[test]
    fn variant_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
        }
        assert!("mauve".parse::<Variant>().is_err());
    }

    #[test]
    fn contrast_levels_parse() {
        assert_eq!("standard".parse::<ContrastLevel>(), Ok(ContrastLevel::Standard));
        assert_eq!("high".parse::<ContrastLevel>().map(ContrastLevel::value), Ok(1.0));
        assert!("ultra".parse::<ContrastLevel>().is_err());
    }

    #[test]
    fn raw_contrast_is_validated() {
        assert!(DynamicScheme::with_contrast_value(SEED, Variant::TonalSpot, false, 1.5).is_err());
        assert!(DynamicScheme::with_contrast_value(SEED, Variant::TonalSpot, false, f64::NAN).is_err());
        assert!(DynamicScheme::with_contrast_value(SEED, Variant::TonalSpot, false, -1.0).is_ok());
    }

    #[test]
    fn monochrome_palettes_have_no_chroma() {
        let scheme = DynamicScheme::new(SEED, Variant::Monochrome, false, ContrastLevel::Standard);
        assert_eq!(scheme.primary_palette.chroma(), 0.0);
        assert_eq!(scheme.tertiary_palette.chroma(), 0.0);
        assert_eq!(scheme.neutral_palette.chroma(), 0.0);
    }

    #[test]
    fn tonal_spot_tertiary_is_rotated_60() {
        let scheme = DynamicScheme::new(SEED, Variant::TonalSpot, false, ContrastLevel::Standard);
        let expected = sanitize_degrees(scheme.source_color.hue() + 60.0);
        assert!((scheme.tertiary_palette.hue() - expected).abs() < 1e-9);
        assert_eq!(scheme.primary_palette.chroma(), 36.0);
    }

    #[test]
    fn fidelity_keeps_seed_chroma() {
        let scheme = DynamicScheme::new(SEED, Variant::Fidelity, false, ContrastLevel::Standard);
        assert!((scheme.primary_palette.chroma() - scheme.source_color.chroma()).abs() < 1e-9);
        assert!((scheme.primary_palette.hue() - scheme.source_color.hue()).abs() < 1e-9);
    }

    #[test]
    fn rainbow_neutrals_are_pure_gray() {
        let scheme = DynamicScheme::new(SEED, Variant::Rainbow, true, ContrastLevel::Standard);
        assert_eq!(scheme.neutral_palette.chroma(), 0.0);
        assert_eq!(scheme.neutral_variant_palette.chroma(), 0.0);
        assert_eq!(scheme.primary_palette.chroma(), 48.0);
    }

    #[test]
    fn rotated_hue_picks_band() {
        let source = Hct::new(50.0, 40.0, 50.0);
        let hues = [0.0, 41.0, 61.0, 360.0];
        let rotations = [18.0, 15.0, 10.0];
        // The solver lands near, not exactly on, the requested hue;
        // the expectation is built from the solved hue.
        let hue = source.hue();
        assert!((41.0..61.0).contains(&hue), "hue = {hue}");
        let expected = sanitize_degrees(hue + 15.0);
        assert!((rotated_hue(&source, &hues, &rotations) - expected).abs() < 1e-9);
    }

    #[test]
    fn rotated_hue_single_rotation_applies_everywhere() {
        let source = Hct::new(350.0, 40.0, 50.0);
        let expected = sanitize_degrees(source.hue() + 60.0);
        assert!((rotated_hue(&source, &[0.0, 360.0], &[60.0]) - expected).abs() < 1e-9);
    }
}
