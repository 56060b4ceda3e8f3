//! Tonal palettes — a fixed hue/chroma pair across the full tone range.
//!
//! A palette never stores colors eagerly; each requested tone is solved
//! on demand through the HCT solver and memoized. The *key color* is
//! the tone at which this hue can actually deliver the requested chroma
//! (chroma availability varies wildly with tone — yellows peak light,
//! blues peak dark).

use std::cell::RefCell;
use std::collections::HashMap;

use tinct_color::{Argb, Hct};

/// All tones of a single hue at a single chroma.
#[derive(Debug, Clone)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    key_color: RefCell<Option<Hct>>,
    // Tone (rounded to 1/100th) → solved color. Performance only.
    cache: RefCell<HashMap<i64, Argb>>,
}

impl TonalPalette {
    /// Palette of the given hue (degrees) and chroma.
    #[must_use]
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        Self {
            hue,
            chroma,
            key_color: RefCell::new(None),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Palette through an existing color: its hue and chroma, with the
    /// color itself as key color.
    #[must_use]
    pub fn from_hct(hct: Hct) -> Self {
        Self {
            hue: hct.hue(),
            chroma: hct.chroma(),
            key_color: RefCell::new(Some(hct)),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Palette of a color's hue and chroma.
    #[must_use]
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_hct(Hct::from_argb(argb))
    }

    #[inline]
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    #[inline]
    #[must_use]
    pub const fn chroma(&self) -> f64 {
        self.chroma
    }

    /// The color at `tone` (0–100) on this palette.
    #[must_use]
    pub fn hct(&self, tone: f64) -> Hct {
        Hct::new(self.hue, self.chroma, tone)
    }

    /// The packed color at `tone`, memoized.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn argb(&self, tone: f64) -> Argb {
        let key = (tone * 100.0).round() as i64;
        if let Some(&hit) = self.cache.borrow().get(&key) {
            return hit;
        }
        let argb = self.hct(tone).to_argb();
        self.cache.borrow_mut().insert(key, argb);
        argb
    }

    /// The tone where this hue comes closest to the requested chroma
    /// without clipping, preferring tones near 50.
    #[must_use]
    pub fn key_color(&self) -> Hct {
        if let Some(key) = *self.key_color.borrow() {
            return key;
        }
        let key = create_key_color(self.hue, self.chroma);
        *self.key_color.borrow_mut() = Some(key);
        key
    }
}

impl PartialEq for TonalPalette {
    fn eq(&self, other: &Self) -> bool {
        self.hue == other.hue && self.chroma == other.chroma
    }
}

// ─── Key color search ────────────────────────────────────────────────────────

const MAX_CHROMA_VALUE: f64 = 200.0;
const PIVOT_TONE: i32 = 50;
const TONE_STEP_SIZE: i32 = 1;
const EPSILON: f64 = 0.01;

/// Binary search over tones for the one whose achievable chroma best
/// matches the request, pivoting toward mid tones.
fn create_key_color(hue: f64, requested_chroma: f64) -> Hct {
    let mut chroma_cache: HashMap<i32, f64> = HashMap::new();
    let mut max_chroma = |tone: i32| -> f64 {
        *chroma_cache
            .entry(tone)
            .or_insert_with(|| Hct::new(hue, MAX_CHROMA_VALUE, f64::from(tone)).chroma())
    };

    let mut lower_tone = 0;
    let mut upper_tone = 100;
    while lower_tone < upper_tone {
        let mid_tone = (lower_tone + upper_tone) / 2;
        let is_ascending = max_chroma(mid_tone) < max_chroma(mid_tone + TONE_STEP_SIZE);
        let sufficient_chroma = max_chroma(mid_tone) >= requested_chroma - EPSILON;
        if sufficient_chroma {
            // Both halves can deliver; take the one closer to the pivot.
            if (lower_tone - PIVOT_TONE).abs() < (upper_tone - PIVOT_TONE).abs() {
                upper_tone = mid_tone;
            } else {
                if lower_tone == mid_tone {
                    return Hct::new(hue, requested_chroma, f64::from(lower_tone));
                }
                lower_tone = mid_tone;
            }
        } else if is_ascending {
            lower_tone = mid_tone + TONE_STEP_SIZE;
        } else {
            upper_tone = mid_tone;
        }
    }
    Hct::new(hue, requested_chroma, f64::from(lower_tone))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_span_black_to_white() {
        let palette = TonalPalette::from_hue_and_chroma(250.0, 40.0);
        assert_eq!(palette.argb(0.0), Argb::BLACK);
        assert_eq!(palette.argb(100.0), Argb::WHITE);
    }

    #[test]
    fn cached_tone_equals_recomputed() {
        let palette = TonalPalette::from_hue_and_chroma(120.0, 30.0);
        let first = palette.argb(42.0);
        let second = palette.argb(42.0);
        assert_eq!(first, second);
        assert_eq!(first, palette.hct(42.0).to_argb());
    }

    #[test]
    fn tone_ordering_is_monotone_in_lightness() {
        use tinct_color::space::lstar_from_argb;
        let palette = TonalPalette::from_hue_and_chroma(27.0, 36.0);
        let mut previous = -1.0;
        for tone in (0..=100).step_by(10) {
            let lstar = lstar_from_argb(palette.argb(f64::from(tone)));
            assert!(lstar >= previous - 0.5, "tone {tone}: {lstar} < {previous}");
            previous = lstar;
        }
    }

    #[test]
    fn key_color_reaches_achievable_chroma() {
        // Chroma 36 is achievable for most hues.
        let palette = TonalPalette::from_hue_and_chroma(27.0, 36.0);
        let key = palette.key_color();
        assert!((key.chroma() - 36.0).abs() < 2.0, "chroma = {}", key.chroma());
        assert!((0.0..=100.0).contains(&key.tone()));
    }

    #[test]
    fn key_color_caps_at_gamut_for_extreme_requests() {
        // No hue can reach chroma 200; the key color lands on the tone
        // with the most chroma available.
        let palette = TonalPalette::from_hue_and_chroma(300.0, 200.0);
        let key = palette.key_color();
        assert!(key.chroma() < 200.0);
        assert!(key.chroma() > 40.0, "chroma = {}", key.chroma());
    }

    #[test]
    fn key_color_is_memoized() {
        let palette = TonalPalette::from_hue_and_chroma(27.0, 36.0);
        let a = palette.key_color();
        let b = palette.key_color();
        assert_eq!(a, b);
    }

    #[test]
    fn from_hct_uses_color_as_key() {
        let source = Hct::new(200.0, 50.0, 60.0);
        let palette = TonalPalette::from_hct(source);
        assert_eq!(palette.key_color(), source);
        assert_eq!(palette.hue(), source.hue());
        assert_eq!(palette.chroma(), source.chroma());
    }

    #[test]
    fn equality_ignores_caches() {
        let a = TonalPalette::from_hue_and_chroma(10.0, 20.0);
        let b = TonalPalette::from_hue_and_chroma(10.0, 20.0);
        let _ = a.argb(50.0);
        assert_eq!(a, b);
    }
}
