// SPDX-License-Identifier: MIT
//
// tinct-color — CAM16/HCT colorimetry engine for tinct.
//
// The leaf crate of the workspace: everything here is pure, synchronous
// f64 math over immutable value types. The pipeline runs
//
//   sRGB bytes ↔ linear RGB ↔ CIE XYZ ↔ CAM16 ↔ HCT (hue/chroma/tone)
//                              ↕
//                           L*a*b*
//
// The forward direction (color → appearance) has a closed form. The
// reverse direction (HCT → color) does not: CAM16 cannot be inverted
// analytically, so `hct` carries a two-phase solver — Newton's method
// on lightness J with a bisection gamut-mapping fallback across the
// sRGB cube. Most requested hue/chroma/tone triples sit near the gamut
// edge, where the fallback does the real work.
//
// This crate intentionally avoids general-purpose color crates
// (palette, colorsys) in favor of exact reference coefficients. The
// matrices and thresholds below must match the reference bit-for-bit
// in rounding behavior; a general crate's "close enough" constants are
// not close enough for snapshot-tested theme output.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/chroma/tone variable names are inherently similar.
#![allow(clippy::similar_names)]
// Reference coefficients are written in full precision.
#![allow(clippy::unreadable_literal)]
// Appearance-model formulas do not gain from mul_add reshuffling; keep
// them textually close to the reference.
#![allow(clippy::suboptimal_flops)]

pub mod argb;
pub mod cam16;
pub mod contrast;
pub mod hct;
pub mod math;
pub mod space;
pub mod viewing;

pub use argb::{Argb, ParseArgbError};
pub use cam16::Cam16;
pub use hct::Hct;
pub use viewing::ViewingConditions;
