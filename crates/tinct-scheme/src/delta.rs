//! Tone-delta constraints between pairs of roles.

use crate::dynamic::DynamicColor;

/// Which member of a pair must end up lighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TonePolarity {
    /// Role A is always the lighter one.
    Lighter,
    /// Role A is always the darker one.
    Darker,
    /// Role A hugs the shared background; light/dark flips with the
    /// scheme's light/dark mode.
    Nearer,
    /// Role A sits away from the shared background.
    Farther,
}

/// A guaranteed tone separation between two roles, e.g. a container and
/// its fixed-dim variant staying visually distinct at every contrast
/// level.
#[derive(Debug, Clone, Copy)]
pub struct ToneDeltaPair {
    pub role_a: DynamicColor,
    pub role_b: DynamicColor,
    /// Required tone distance between the two, in L* units.
    pub delta: f64,
    pub polarity: TonePolarity,
    /// When one member is pushed off the 50–60 midtone band, whether
    /// the other follows to preserve the delta exactly.
    pub stay_together: bool,
}

impl ToneDeltaPair {
    #[must_use]
    pub const fn new(
        role_a: DynamicColor,
        role_b: DynamicColor,
        delta: f64,
        polarity: TonePolarity,
        stay_together: bool,
    ) -> Self {
        Self { role_a, role_b, delta, polarity, stay_together }
    }
}
