//! # tinct-palette — tonal palettes and hue-wheel analysis
//!
//! The middle layer of the engine. A [`TonalPalette`] pins a hue and a
//! chroma and exposes the full tone range 0–100 through the HCT solver;
//! a [`TemperatureCache`] analyzes the hue wheel around a seed color to
//! find complementary and analogous hues by perceived warmth rather
//! than raw hue angle.
//!
//! Everything here is derived data over `tinct-color` value types.
//! Caches are per-instance, lazily built, and purely an optimization:
//! every cached value is identical to what recomputation would produce.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/chroma/tone variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod dislike;
pub mod temperature;
pub mod tonal;

pub use temperature::TemperatureCache;
pub use tonal::TonalPalette;
