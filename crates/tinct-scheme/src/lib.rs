//! # tinct-scheme — color roles, variants, and resolved themes
//!
//! The top layer of the engine. A seed color and a [`Variant`] become a
//! [`DynamicScheme`] (six tonal palettes); the role table in [`roles`]
//! assigns every UI slot a palette and a tone policy; a [`Theme`]
//! resolves the whole table to packed colors at one of four contrast
//! levels.
//!
//! Role tones are not fixed numbers. Each role adjusts at resolution
//! time: contrast curves push foregrounds apart from their backgrounds
//! as the contrast slider rises, tone-delta pairs keep containers and
//! accents visually distinct, and backgrounds avoid the 50–60 tone band
//! where neither black nor white text is clearly readable.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/chroma/tone variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod curve;
pub mod delta;
pub mod dynamic;
pub mod roles;
pub mod scheme;
pub mod theme;

pub use curve::ContrastCurve;
pub use delta::{ToneDeltaPair, TonePolarity};
pub use dynamic::DynamicColor;
pub use roles::Role;
pub use scheme::{
    ContrastLevel, ContrastOutOfRange, DynamicScheme, Platform, SpecVersion, Variant,
};
pub use theme::Theme;
