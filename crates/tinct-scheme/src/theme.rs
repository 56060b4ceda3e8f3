//! Resolved themes: every role flattened to a packed color.
//!
//! A [`Theme`] is a snapshot. Resolution walks the whole role table
//! once against a [`DynamicScheme`]; afterwards lookups are plain array
//! reads and the theme is `Send + Sync` (the palettes' interior caches
//! stay behind in the scheme).

use std::sync::LazyLock;

use tinct_color::Argb;

use crate::roles::Role;
use crate::scheme::{ContrastLevel, ContrastOutOfRange, DynamicScheme, Variant};

/// All roles of one scheme, resolved to colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    seed: Argb,
    variant: Variant,
    is_dark: bool,
    contrast_level: f64,
    // Indexed by the role's position in Role::ALL.
    colors: Vec<Argb>,
}

impl Theme {
    /// Resolve a full theme from a seed color.
    #[must_use]
    pub fn new(seed: Argb, variant: Variant, is_dark: bool, contrast: ContrastLevel) -> Self {
        Self::from_scheme(&DynamicScheme::new(seed, variant, is_dark, contrast))
    }

    /// Resolve a theme at an arbitrary contrast slider position.
    pub fn with_contrast_value(
        seed: Argb,
        variant: Variant,
        is_dark: bool,
        contrast_level: f64,
    ) -> Result<Self, ContrastOutOfRange> {
        let scheme = DynamicScheme::with_contrast_value(seed, variant, is_dark, contrast_level)?;
        Ok(Self::from_scheme(&scheme))
    }

    /// Resolve every role of an already-built scheme.
    #[must_use]
    pub fn from_scheme(scheme: &DynamicScheme) -> Self {
        let colors = Role::ALL
            .iter()
            .map(|role| role.recipe(scheme.spec_version).get_argb(scheme))
            .collect();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            seed = %scheme.source_argb(),
            variant = scheme.variant.name(),
            is_dark = scheme.is_dark,
            "resolved theme"
        );
        Self {
            seed: scheme.source_argb(),
            variant: scheme.variant,
            is_dark: scheme.is_dark,
            contrast_level: scheme.contrast_level,
            colors,
        }
    }

    /// The baseline theme: light, standard contrast, tonal-spot, seeded
    /// with mid-tone lavender.
    #[must_use]
    pub fn baseline() -> &'static Self {
        static BASELINE: LazyLock<Theme> = LazyLock::new(|| {
            Theme::new(
                Argb(0xFF67_50A4),
                Variant::TonalSpot,
                false,
                ContrastLevel::Standard,
            )
        });
        &BASELINE
    }

    #[must_use]
    pub const fn seed(&self) -> Argb {
        self.seed
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.is_dark
    }

    #[must_use]
    pub const fn contrast_level(&self) -> f64 {
        self.contrast_level
    }

    /// The resolved color of one role.
    #[must_use]
    pub fn color(&self, role: Role) -> Argb {
        let index = Role::ALL
            .iter()
            .position(|r| *r == role)
            .unwrap_or_default();
        self.colors[index]
    }

    /// All roles with their colors, in stable table order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Argb)> + '_ {
        Role::ALL.iter().copied().zip(self.colors.iter().copied())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::baseline().clone()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Theme {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.colors.len() + 4))?;
        map.serialize_entry("seed", &self.seed.to_hex())?;
        map.serialize_entry("variant", self.variant.name())?;
        map.serialize_entry("dark", &self.is_dark)?;
        map.serialize_entry("contrast_level", &self.contrast_level)?;
        for (role, argb) in self.iter() {
            map.serialize_entry(role.token_name(), &argb.to_hex())?;
        }
        map.end()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_color::contrast::ratio_of_tones;
    use tinct_color::space::lstar_from_argb;

    const SEED: Argb = Argb(0xFF67_50A4);

    #[test]
    fn resolution_is_deterministic() {
        let a = Theme::new(SEED, Variant::TonalSpot, false, ContrastLevel::Standard);
        let b = Theme::new(SEED, Variant::TonalSpot, false, ContrastLevel::Standard);
        assert_eq!(a, b);
    }

    #[test]
    fn baseline_matches_explicit_construction() {
        let explicit = Theme::new(SEED, Variant::TonalSpot, false, ContrastLevel::Standard);
        assert_eq!(*Theme::baseline(), explicit);
        assert_eq!(Theme::default(), explicit);
    }

    #[test]
    fn red_seed_light_primary() {
        let theme = Theme::new(
            Argb(0xFFFF_0000),
            Variant::TonalSpot,
            false,
            ContrastLevel::Standard,
        );
        let primary = theme.color(Role::Primary);
        let expected = Argb(0xFF90_4B40);
        // Allow one unit per channel for solver rounding.
        for (got, want) in [
            (primary.red(), expected.red()),
            (primary.green(), expected.green()),
            (primary.blue(), expected.blue()),
        ] {
            assert!(
                (i32::from(got) - i32::from(want)).abs() <= 1,
                "primary {primary} != {expected}"
            );
        }
    }

    #[test]
    fn every_role_is_opaque() {
        for is_dark in [false, true] {
            let theme = Theme::new(SEED, Variant::Vibrant, is_dark, ContrastLevel::Standard);
            for (role, argb) in theme.iter() {
                assert!(argb.is_opaque(), "{} is {argb}", role.token_name());
            }
        }
    }

    #[test]
    fn on_colors_contrast_with_their_surfaces() {
        for is_dark in [false, true] {
            let theme = Theme::new(SEED, Variant::TonalSpot, is_dark, ContrastLevel::Standard);
            let pairs = [
                (Role::Primary, Role::OnPrimary, 4.5),
                (Role::Secondary, Role::OnSecondary, 4.5),
                (Role::Tertiary, Role::OnTertiary, 4.5),
                (Role::Error, Role::OnError, 4.5),
                (Role::Surface, Role::OnSurface, 7.0),
            ];
            for (bg, fg, required) in pairs {
                let ratio = ratio_of_tones(
                    lstar_from_argb(theme.color(bg)),
                    lstar_from_argb(theme.color(fg)),
                );
                assert!(
                    ratio >= required - 0.1,
                    "dark={is_dark} {}/{}: {ratio}",
                    bg.token_name(),
                    fg.token_name()
                );
            }
        }
    }

    #[test]
    fn raising_contrast_never_reduces_on_primary_ratio() {
        let mut previous = 0.0;
        for level in [-1.0, -0.5, 0.0, 0.5, 1.0] {
            let theme =
                Theme::with_contrast_value(SEED, Variant::TonalSpot, true, level).unwrap();
            let ratio = ratio_of_tones(
                lstar_from_argb(theme.color(Role::Primary)),
                lstar_from_argb(theme.color(Role::OnPrimary)),
            );
            assert!(ratio >= previous - 0.1, "level {level}: {ratio} < {previous}");
            previous = ratio;
        }
    }

    #[test]
    fn out_of_range_contrast_is_rejected() {
        assert!(Theme::with_contrast_value(SEED, Variant::TonalSpot, false, 2.0).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_flat_role_map() {
        let theme = Theme::new(SEED, Variant::TonalSpot, false, ContrastLevel::Standard);
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["variant"], "tonal-spot");
        assert_eq!(json["dark"], false);
        assert_eq!(json["seed"], "#6750A4");
        assert!(json["primary"].as_str().unwrap().starts_with('#'));
        assert_eq!(json.as_object().unwrap().len(), crate::roles::Role::ALL.len() + 4);
    }
}
