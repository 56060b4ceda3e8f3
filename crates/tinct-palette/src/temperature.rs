//! Hue-wheel temperature analysis.
//!
//! "Warm" and "cool" are not symmetric around the hue circle: perceived
//! temperature follows Lab-derived hue and chroma, peaking near orange
//! (hue ≈ 50° in Lab) and bottoming out near blue. This cache samples
//! every whole hue at the input's chroma and tone, ranks the samples by
//! raw temperature, and answers two questions the palette strategies
//! ask: *what is the complement by temperature?* and *which hues are
//! analogous, spaced by equal temperature change rather than equal
//! angle?*
//!
//! All derived tables are built lazily on first use and memoized per
//! cache instance; a new input color means a new cache.

use std::cell::RefCell;

use tinct_color::math::sanitize_degrees;
use tinct_color::space::lab_from_argb;
use tinct_color::Hct;

/// Memoized temperature analysis around one input color.
#[derive(Debug)]
pub struct TemperatureCache {
    input: Hct,
    hcts_by_hue: RefCell<Option<Vec<Hct>>>,
    hcts_by_temp: RefCell<Option<Vec<Hct>>>,
    complement: RefCell<Option<Hct>>,
}

impl TemperatureCache {
    #[must_use]
    pub fn new(input: Hct) -> Self {
        Self {
            input,
            hcts_by_hue: RefCell::new(None),
            hcts_by_temp: RefCell::new(None),
            complement: RefCell::new(None),
        }
    }

    #[inline]
    #[must_use]
    pub const fn input(&self) -> Hct {
        self.input
    }

    /// Raw temperature of a color, from Lab-derived hue and chroma.
    ///
    /// `-0.5 + 0.02 · C*^1.07 · cos(h − 50°)`. Negative is cool,
    /// positive warm; achromatic colors sit at −0.5.
    #[must_use]
    pub fn raw_temperature(color: &Hct) -> f64 {
        let [_, a, b] = lab_from_argb(color.to_argb());
        let hue = sanitize_degrees(b.atan2(a).to_degrees());
        let chroma = a.hypot(b);
        -0.5 + 0.02 * chroma.powf(1.07) * (sanitize_degrees(hue - 50.0)).to_radians().cos()
    }

    /// The warmest sampled hue.
    #[must_use]
    pub fn warmest(&self) -> Hct {
        *self.hcts_by_temp().last().expect("361 samples")
    }

    /// The coldest sampled hue.
    #[must_use]
    pub fn coldest(&self) -> Hct {
        *self.hcts_by_temp().first().expect("361 samples")
    }

    /// Temperature of `hct` relative to the sampled range: 0 at the
    /// coldest hue, 1 at the warmest. Degenerate ranges report 0.5.
    #[must_use]
    pub fn relative_temperature(&self, hct: &Hct) -> f64 {
        let range = Self::raw_temperature(&self.warmest()) - Self::raw_temperature(&self.coldest());
        let difference_from_coldest =
            Self::raw_temperature(hct) - Self::raw_temperature(&self.coldest());
        if range == 0.0 {
            0.5
        } else {
            difference_from_coldest / range
        }
    }

    /// Relative temperature of the input color.
    #[must_use]
    pub fn input_relative_temperature(&self) -> f64 {
        self.relative_temperature(&self.input)
    }

    /// The complement by temperature: the hue on the opposite arc of
    /// the wheel whose relative temperature mirrors the input's.
    #[must_use]
    pub fn complement(&self) -> Hct {
        if let Some(complement) = *self.complement.borrow() {
            return complement;
        }

        let coldest_hue = self.coldest().hue();
        let coldest_temp = Self::raw_temperature(&self.coldest());
        let warmest_hue = self.warmest().hue();
        let warmest_temp = Self::raw_temperature(&self.warmest());
        let range = warmest_temp - coldest_temp;
        let start_hue_is_coldest_to_warmest =
            is_between(self.input.hue(), coldest_hue, warmest_hue);
        let start_hue = if start_hue_is_coldest_to_warmest {
            warmest_hue
        } else {
            coldest_hue
        };
        let end_hue = if start_hue_is_coldest_to_warmest {
            coldest_hue
        } else {
            warmest_hue
        };
        let direction_of_rotation = 1.0;
        let mut smallest_error = 1000.0;
        let mut answer = self.hct_by_hue(self.input.hue());

        let complement_relative_temp = 1.0 - self.input_relative_temperature();
        for hue_addend in 0..=360 {
            let hue = sanitize_degrees(start_hue + direction_of_rotation * f64::from(hue_addend));
            if !is_between(hue, start_hue, end_hue) {
                continue;
            }
            let possible_answer = self.hct_by_hue(hue);
            let relative_temp = (Self::raw_temperature(&possible_answer) - coldest_temp) / range;
            let error = (complement_relative_temp - relative_temp).abs();
            if error < smallest_error {
                smallest_error = error;
                answer = possible_answer;
            }
        }

        *self.complement.borrow_mut() = Some(answer);
        answer
    }

    /// Five analogous colors (including the input), using twelve
    /// temperature divisions of the wheel.
    #[must_use]
    pub fn analogous_default(&self) -> Vec<Hct> {
        self.analogous(5, 12)
    }

    /// `count` analogous colors centered on the input.
    ///
    /// The wheel is divided into `divisions` buckets of equal
    /// *cumulative temperature delta* — not equal hue angle — and the
    /// returned set takes `floor((count − 1) / 2)` colors
    /// counter-clockwise of the input and the rest clockwise.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn analogous(&self, count: usize, divisions: usize) -> Vec<Hct> {
        if count == 0 {
            return vec![self.input];
        }
        let start_hue = self.input.hue().round() as i32;
        let start_hct = self.hct_by_hue(f64::from(start_hue));
        let mut last_temp = self.relative_temperature(&start_hct);

        let mut all_colors = vec![start_hct];

        // Total temperature movement over one full revolution.
        let mut absolute_total_temp_delta = 0.0;
        for i in 0..360 {
            let hue = sanitize_degrees(f64::from(start_hue + i));
            let hct = self.hct_by_hue(hue);
            let temp = self.relative_temperature(&hct);
            absolute_total_temp_delta += (temp - last_temp).abs();
            last_temp = temp;
        }

        // Walk the wheel, emitting a color every time the cumulative
        // delta crosses the next bucket boundary.
        let mut hue_addend = 1;
        let temp_step = absolute_total_temp_delta / divisions as f64;
        let mut total_temp_delta = 0.0;
        last_temp = self.relative_temperature(&start_hct);
        while all_colors.len() < divisions {
            let hue = sanitize_degrees(f64::from(start_hue + hue_addend));
            let hct = self.hct_by_hue(hue);
            let temp = self.relative_temperature(&hct);
            total_temp_delta += (temp - last_temp).abs();

            let mut desired_total_temp_delta_for_index = all_colors.len() as f64 * temp_step;
            let mut index_satisfied = total_temp_delta >= desired_total_temp_delta_for_index;
            let mut index_addend = 1;
            // Keep a fixed iteration budget: a single degree of hue can
            // cross multiple bucket boundaries.
            while index_satisfied && all_colors.len() < divisions {
                all_colors.push(hct);
                desired_total_temp_delta_for_index =
                    (all_colors.len() + index_addend) as f64 * temp_step;
                index_satisfied = total_temp_delta >= desired_total_temp_delta_for_index;
                index_addend += 1;
            }
            last_temp = temp;
            hue_addend += 1;

            if hue_addend > 360 {
                while all_colors.len() < divisions {
                    all_colors.push(hct);
                }
                break;
            }
        }

        let mut answers = vec![self.input];

        let ccw_count = (count - 1) / 2;
        for i in 1..=ccw_count {
            let mut index = 0_i64 - i as i64;
            while index < 0 {
                index += all_colors.len() as i64;
            }
            let index = (index as usize) % all_colors.len();
            answers.insert(0, all_colors[index]);
        }

        let cw_count = count - ccw_count - 1;
        for i in 1..=cw_count {
            let index = i % all_colors.len();
            answers.push(all_colors[index]);
        }

        answers
    }

    // ── Sample tables ───────────────────────────────────────────────

    /// The sample at a (whole) hue, from the 361-entry table.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn hct_by_hue(&self, hue: f64) -> Hct {
        self.hcts_by_hue()[hue.round() as usize]
    }

    /// 361 samples, hue 0–360 inclusive, at the input's chroma and tone.
    fn hcts_by_hue(&self) -> Vec<Hct> {
        if let Some(hcts) = self.hcts_by_hue.borrow().as_ref() {
            return hcts.clone();
        }
        let hcts: Vec<Hct> = (0..=360)
            .map(|hue| Hct::new(f64::from(hue), self.input.chroma(), self.input.tone()))
            .collect();
        *self.hcts_by_hue.borrow_mut() = Some(hcts.clone());
        hcts
    }

    /// The hue samples plus the input, sorted coldest-first.
    fn hcts_by_temp(&self) -> Vec<Hct> {
        if let Some(hcts) = self.hcts_by_temp.borrow().as_ref() {
            return hcts.clone();
        }
        let mut hcts = self.hcts_by_hue();
        hcts.push(self.input);
        hcts.sort_by(|a, b| {
            Self::raw_temperature(a)
                .partial_cmp(&Self::raw_temperature(b))
                .expect("temperatures are finite")
        });
        *self.hcts_by_temp.borrow_mut() = Some(hcts.clone());
        hcts
    }
}

/// Whether `angle` lies on the arc from `a` to `b` (inclusive),
/// travelling clockwise through increasing hue.
fn is_between(angle: f64, a: f64, b: f64) -> bool {
    if a < b {
        (a..=b).contains(&angle)
    } else {
        a <= angle || angle <= b
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
