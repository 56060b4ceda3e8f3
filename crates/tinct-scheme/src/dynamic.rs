//! Roles whose tone is decided at lookup time.
//!
//! A [`DynamicColor`] is pure policy: which palette to sample, what
//! tone to prefer, which background it must stay readable against, and
//! how hard that requirement is ([`ContrastCurve`]). Tones adjust to
//! the scheme's contrast slider at resolution time, so the same role
//! definition serves every scheme.

use tinct_color::contrast;
use tinct_color::math::clamp_double;
use tinct_color::{Argb, Hct};
use tinct_palette::TonalPalette;

use crate::curve::ContrastCurve;
use crate::delta::{ToneDeltaPair, TonePolarity};
use crate::scheme::DynamicScheme;

type PaletteFn = fn(&DynamicScheme) -> &TonalPalette;
type ToneFn = fn(&DynamicScheme) -> f64;
type BackgroundFn = fn(&DynamicScheme) -> DynamicColor;
type PairFn = fn(&DynamicScheme) -> ToneDeltaPair;

/// A named color role, resolved against a [`DynamicScheme`].
#[derive(Debug, Clone, Copy)]
pub struct DynamicColor {
    pub name: &'static str,
    /// Which of the scheme's palettes this role samples.
    pub palette: PaletteFn,
    /// The tone the role wants before contrast adjustment.
    pub tone: ToneFn,
    /// Whether other roles may use this one as their background.
    pub is_background: bool,
    pub background: Option<BackgroundFn>,
    /// For roles sandwiched between two surfaces (the fixed-dim family).
    pub second_background: Option<BackgroundFn>,
    /// Required contrast against `background`, if any.
    pub contrast_curve: Option<ContrastCurve>,
    /// Constraint binding this role's tone to a sibling's.
    pub tone_delta_pair: Option<PairFn>,
    /// Alpha applied on top of the resolved color, 0.0–1.0.
    pub opacity: Option<f64>,
}

impl DynamicColor {
    /// Resolve to a packed color, applying opacity if the role has one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn get_argb(&self, scheme: &DynamicScheme) -> Argb {
        let argb = (self.palette)(scheme).argb(self.get_tone(scheme));
        match self.opacity {
            Some(opacity) => {
                let alpha = (opacity * 255.0).round().clamp(0.0, 255.0) as u8;
                argb.with_alpha(alpha)
            }
            None => argb,
        }
    }

    /// Resolve to a full HCT color.
    #[must_use]
    pub fn get_hct(&self, scheme: &DynamicScheme) -> Hct {
        Hct::from_argb(self.get_argb(scheme))
    }

    /// The tone this role takes in `scheme`, after contrast adjustment,
    /// delta-pair negotiation, and midtone avoidance.
    #[must_use]
    pub fn get_tone(&self, scheme: &DynamicScheme) -> f64 {
        let decreasing_contrast = scheme.contrast_level < 0.0;

        if let Some(pair_fn) = self.tone_delta_pair {
            let pair = pair_fn(scheme);
            return self.paired_tone(scheme, &pair, decreasing_contrast);
        }

        let mut answer = (self.tone)(scheme);
        let Some(background) = self.background else {
            return answer;
        };

        let bg_tone = background(scheme).get_tone(scheme);
        let desired_ratio = self
            .contrast_curve
            .expect("a role with a background declares a contrast curve")
            .get(scheme.contrast_level);

        if contrast::ratio_of_tones(bg_tone, answer) < desired_ratio {
            answer = foreground_tone(bg_tone, desired_ratio);
        }
        // Below-standard contrast always re-derives from the background
        // so the whole theme fades coherently.
        if decreasing_contrast {
            answer = foreground_tone(bg_tone, desired_ratio);
        }

        if self.is_background && (50.0..60.0).contains(&answer) {
            // Tones 50–60 straddle white's 4.5:1 boundary; push
            // backgrounds off the band so text color stays decidable.
            answer = if contrast::ratio_of_tones(49.0, bg_tone) >= desired_ratio {
                49.0
            } else {
                60.0
            };
        }

        if let Some(second_background) = self.second_background {
            let bg_tone_1 = background(scheme).get_tone(scheme);
            let bg_tone_2 = second_background(scheme).get_tone(scheme);
            let upper = bg_tone_1.max(bg_tone_2);
            let lower = bg_tone_1.min(bg_tone_2);
            if contrast::ratio_of_tones(upper, answer) >= desired_ratio
                && contrast::ratio_of_tones(lower, answer) >= desired_ratio
            {
                return answer;
            }
            // The tone must contrast with both surfaces at once; only a
            // tone lighter than the lighter or darker than the darker
            // can do that.
            let light_option = contrast::lighter(upper, desired_ratio);
            let dark_option = contrast::darker(lower, desired_ratio);
            let prefers_light = tone_prefers_light_foreground(bg_tone_1)
                || tone_prefers_light_foreground(bg_tone_2);
            if prefers_light {
                return if light_option < 0.0 { 100.0 } else { light_option };
            }
            let light_feasible = light_option >= 0.0;
            let dark_feasible = dark_option >= 0.0;
            if light_feasible && !dark_feasible {
                return light_option;
            }
            if dark_feasible && !light_feasible {
                return dark_option;
            }
            return if dark_option < 0.0 { 0.0 } else { dark_option };
        }

        answer
    }

    /// Tone resolution for a role bound to its sibling by a delta pair.
    fn paired_tone(
        &self,
        scheme: &DynamicScheme,
        pair: &ToneDeltaPair,
        decreasing_contrast: bool,
    ) -> f64 {
        let bg = self
            .background
            .expect("a paired role declares a background");
        let bg_tone = bg(scheme).get_tone(scheme);

        let a_is_nearer = match pair.polarity {
            TonePolarity::Nearer => true,
            TonePolarity::Farther => false,
            TonePolarity::Lighter => !scheme.is_dark,
            TonePolarity::Darker => scheme.is_dark,
        };
        let (nearer, farther) = if a_is_nearer {
            (&pair.role_a, &pair.role_b)
        } else {
            (&pair.role_b, &pair.role_a)
        };
        let am_nearer = self.name == nearer.name;
        let expansion_dir = if scheme.is_dark { 1.0 } else { -1.0 };

        let n_contrast = nearer
            .contrast_curve
            .expect("paired roles declare contrast curves")
            .get(scheme.contrast_level);
        let f_contrast = farther
            .contrast_curve
            .expect("paired roles declare contrast curves")
            .get(scheme.contrast_level);

        // Start from the preferred tones, correcting only where the
        // background contrast falls short.
        let n_initial = (nearer.tone)(scheme);
        let mut n_tone = if contrast::ratio_of_tones(bg_tone, n_initial) >= n_contrast {
            n_initial
        } else {
            foreground_tone(bg_tone, n_contrast)
        };
        let f_initial = (farther.tone)(scheme);
        let mut f_tone = if contrast::ratio_of_tones(bg_tone, f_initial) >= f_contrast {
            f_initial
        } else {
            foreground_tone(bg_tone, f_contrast)
        };

        if decreasing_contrast {
            n_tone = foreground_tone(bg_tone, n_contrast);
            f_tone = foreground_tone(bg_tone, f_contrast);
        }

        // Enforce the delta: the farther role moves first, then drags
        // the nearer one if the range ran out.
        if (f_tone - n_tone) * expansion_dir < pair.delta {
            f_tone = clamp_double(0.0, 100.0, n_tone + pair.delta * expansion_dir);
            if (f_tone - n_tone) * expansion_dir < pair.delta {
                n_tone = clamp_double(0.0, 100.0, f_tone - pair.delta * expansion_dir);
            }
        }

        // Keep both members off the 50–60 midtone band.
        if (50.0..60.0).contains(&n_tone) {
            if expansion_dir > 0.0 {
                n_tone = 60.0;
                f_tone = f_tone.max(n_tone + pair.delta * expansion_dir);
            } else {
                n_tone = 49.0;
                f_tone = f_tone.min(n_tone + pair.delta * expansion_dir);
            }
        } else if (50.0..60.0).contains(&f_tone) {
            if pair.stay_together {
                if expansion_dir > 0.0 {
                    n_tone = 60.0;
                    f_tone = f_tone.max(n_tone + pair.delta * expansion_dir);
                } else {
                    n_tone = 49.0;
                    f_tone = f_tone.min(n_tone + pair.delta * expansion_dir);
                }
            } else if expansion_dir > 0.0 {
                f_tone = 60.0;
            } else {
                f_tone = 49.0;
            }
        }

        if am_nearer { n_tone } else { f_tone }
    }
}

// ─── Foreground selection ────────────────────────────────────────────────────

/// The tone to put on `bg_tone` to reach `ratio`, choosing the lighter
/// or darker direction by what the background affords.
#[must_use]
pub fn foreground_tone(bg_tone: f64, ratio: f64) -> f64 {
    let lighter_tone = contrast::lighter_unsafe(bg_tone, ratio);
    let darker_tone = contrast::darker_unsafe(bg_tone, ratio);
    let lighter_ratio = contrast::ratio_of_tones(lighter_tone, bg_tone);
    let darker_ratio = contrast::ratio_of_tones(darker_tone, bg_tone);

    if tone_prefers_light_foreground(bg_tone) {
        // Handle the ambiguous zone around tone 50 where neither
        // direction quite reaches the ratio; prefer light unless dark
        // is clearly better.
        let negligible_difference = (lighter_ratio - darker_ratio).abs() < 0.1
            && lighter_ratio < ratio
            && darker_ratio < ratio;
        if lighter_ratio >= ratio || lighter_ratio >= darker_ratio || negligible_difference {
            lighter_tone
        } else {
            darker_tone
        }
    } else if darker_ratio >= ratio || darker_ratio >= lighter_ratio {
        darker_tone
    } else {
        lighter_tone
    }
}

/// Tones in the high 50s read as "dark enough for white text" to most
/// viewers; rounding up lets them keep a light foreground.
#[must_use]
pub fn tone_prefers_light_foreground(tone: f64) -> bool {
    tone.round() < 60.0
}

/// Whether a tone can take a light foreground without falling below
/// 4.5:1.
#[must_use]
pub fn tone_allows_light_foreground(tone: f64) -> bool {
    tone.round() <= 49.0
}

/// Adjust a tone so that a light foreground stays possible: tones that
/// read as dark but sit just above 49 are pulled down to 49.
#[must_use]
pub fn enable_light_foreground(tone: f64) -> f64 {
    if tone_prefers_light_foreground(tone) && !tone_allows_light_foreground(tone) {
        49.0
    } else {
        tone
    }
}

/// The tallest `chroma` a palette of `hue` can hold while staying close
/// to `tone`, walking tones away from the target until chroma stops
/// improving.
#[must_use]
pub fn find_desired_chroma_by_tone(
    hue: f64,
    chroma: f64,
    tone: f64,
    by_decreasing_tone: bool,
) -> f64 {
    let mut answer = tone;
    let mut closest_to_chroma = Hct::new(hue, chroma, tone);
    if closest_to_chroma.chroma() < chroma {
        let mut chroma_peak = closest_to_chroma.chroma();
        while closest_to_chroma.chroma() < chroma {
            answer += if by_decreasing_tone { -1.0 } else { 1.0 };
            let potential_solution = Hct::new(hue, chroma, answer);
            if chroma_peak > potential_solution.chroma() {
                break;
            }
            if (potential_solution.chroma() - chroma).abs() < 0.4 {
                break;
            }
            let potential_delta = (potential_solution.chroma() - chroma).abs();
            let current_delta = (closest_to_chroma.chroma() - chroma).abs();
            if potential_delta < current_delta {
                closest_to_chroma = potential_solution;
            }
            chroma_peak = chroma_peak.max(potential_solution.chroma());
        }
    }
    answer
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{ContrastLevel, Variant};
    use tinct_color::Argb;

    fn scheme(is_dark: bool, contrast: ContrastLevel) -> DynamicScheme {
        DynamicScheme::new(Argb(0xFF67_50A4), Variant::TonalSpot, is_dark, contrast)
    }

    fn plain_role(tone: ToneFn) -> DynamicColor {
        DynamicColor {
            name: "test_role",
            palette: |s| &s.primary_palette,
            tone,
            is_background: false,
            background: None,
            second_background: None,
            contrast_curve: None,
            tone_delta_pair: None,
            opacity: None,
        }
    }

    #[test]
    fn role_without_background_keeps_its_tone() {
        let role = plain_role(|_| 40.0);
        assert_eq!(role.get_tone(&scheme(false, ContrastLevel::Standard)), 40.0);
        assert_eq!(role.get_tone(&scheme(false, ContrastLevel::High)), 40.0);
    }

    #[test]
    fn foreground_meets_curve_at_high_contrast() {
        let role = DynamicColor {
            name: "fg",
            background: Some(|_| plain_role(|_| 90.0)),
            contrast_curve: Some(ContrastCurve::new(3.0, 4.5, 7.0, 11.0)),
            ..plain_role(|_| 80.0)
        };
        let s = scheme(false, ContrastLevel::High);
        let tone = role.get_tone(&s);
        assert!(contrast::ratio_of_tones(90.0, tone) >= 11.0 - 0.05, "tone = {tone}");
    }

    #[test]
    fn reduced_contrast_relaxes_toward_curve_minimum() {
        let role = DynamicColor {
            name: "fg",
            background: Some(|_| plain_role(|_| 90.0)),
            contrast_curve: Some(ContrastCurve::new(1.5, 4.5, 7.0, 11.0)),
            ..plain_role(|_| 10.0)
        };
        let s = scheme(false, ContrastLevel::Reduced);
        let tone = role.get_tone(&s);
        // Relaxed tone sits closer to the background than the standard one.
        assert!(tone > 10.0, "tone = {tone}");
    }

    #[test]
    fn background_roles_avoid_midtone_band() {
        let role = DynamicColor {
            name: "bg",
            is_background: true,
            background: Some(|_| plain_role(|_| 98.0)),
            contrast_curve: Some(ContrastCurve::new(1.0, 1.0, 1.0, 1.0)),
            ..plain_role(|_| 55.0)
        };
        let tone = role.get_tone(&scheme(false, ContrastLevel::Standard));
        assert!(!(50.0..60.0).contains(&tone), "tone = {tone}");
    }

    #[test]
    fn opacity_is_applied_to_alpha() {
        let role = DynamicColor { opacity: Some(0.5), ..plain_role(|_| 40.0) };
        let argb = role.get_argb(&scheme(false, ContrastLevel::Standard));
        assert_eq!(argb.alpha(), 128);
    }

    #[test]
    fn foreground_tone_picks_readable_side() {
        // Dark backgrounds get light foregrounds and vice versa.
        assert!(foreground_tone(10.0, 4.5) > 50.0);
        assert!(foreground_tone(95.0, 4.5) < 50.0);
    }

    #[test]
    fn light_foreground_preference_boundaries() {
        assert!(tone_prefers_light_foreground(59.4));
        assert!(!tone_prefers_light_foreground(59.5));
        assert!(tone_allows_light_foreground(49.4));
        assert!(!tone_allows_light_foreground(49.5));
    }

    #[test]
    fn enable_light_foreground_pulls_ambiguous_tones_down() {
        // 55 prefers a light foreground but cannot support one.
        assert_eq!(enable_light_foreground(55.0), 49.0);
        // Clearly light and clearly dark tones pass through.
        assert_eq!(enable_light_foreground(80.0), 80.0);
        assert_eq!(enable_light_foreground(30.0), 30.0);
    }

    #[test]
    fn desired_chroma_walks_toward_richer_tones() {
        // Chroma 36 at tone 90 is unreachable for most hues; the search
        // must move the tone downward to find it.
        let answer = find_desired_chroma_by_tone(240.0, 36.0, 90.0, true);
        assert!(answer < 90.0);
    }
}
