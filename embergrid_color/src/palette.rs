// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Palettes: ordered color ramps and the value → color mapping.

use log::{debug, warn};

use crate::presets::{DEFAULT_PRESET, preset};
use crate::rgb::Rgb;

/// Requested interpolation curve for a palette.
///
/// Only [`Interpolation::Linear`] is implemented. The other modes are
/// accepted in configuration for compatibility with existing palette files
/// and resolve to the linear ramp; they are placeholders, not alternate
/// formulas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Interpolation {
    /// Piecewise-linear interpolation over adjacent palette entries.
    #[default]
    Linear,
    /// Accepted but unimplemented; resolves to linear.
    Exponential,
    /// Accepted but unimplemented; resolves to linear.
    Logarithmic,
}

/// An ordered low→high color ramp plus the metadata needed to map a
/// normalized value onto it.
///
/// Invariants:
/// - `colors` is non-empty ([`Palette::new`] substitutes the default preset
///   ramp for an empty list and logs the fallback).
/// - `levels` is at least 1 and defaults to `colors.len()`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// Display name of the palette.
    pub name: String,
    colors: Vec<Rgb>,
    levels: usize,
    /// Color used for empty cells; the first ramp entry when unset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub empty_color: Option<Rgb>,
    /// Requested interpolation curve (resolved linearly, see
    /// [`Interpolation`]).
    #[cfg_attr(feature = "serde", serde(default))]
    pub interpolation: Interpolation,
}

impl Palette {
    /// Creates a palette from an ordered low→high ramp.
    ///
    /// `levels` defaults to the ramp length. An empty ramp is replaced with
    /// the default preset's ramp; configuration problems resolve to defaults
    /// here rather than erroring.
    #[must_use]
    pub fn new(name: impl Into<String>, colors: Vec<Rgb>) -> Self {
        let name = name.into();
        let colors = if colors.is_empty() {
            warn!("palette {name:?} has no colors; using the {DEFAULT_PRESET:?} ramp");
            default_ramp()
        } else {
            colors
        };
        let levels = colors.len();
        Self {
            name,
            colors,
            levels,
            empty_color: None,
            interpolation: Interpolation::Linear,
        }
    }

    /// Overrides the number of discrete levels the ramp is indexed by.
    ///
    /// `0` is meaningless and resolves back to the ramp length.
    #[must_use]
    pub fn with_levels(mut self, levels: usize) -> Self {
        if levels == 0 {
            debug!("palette {:?}: levels 0 resolved to ramp length", self.name);
            self.levels = self.colors.len();
        } else {
            self.levels = levels;
        }
        self
    }

    /// Sets the color used for empty cells.
    #[must_use]
    pub fn with_empty_color(mut self, color: Rgb) -> Self {
        self.empty_color = Some(color);
        self
    }

    /// Sets the requested interpolation curve.
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// The ordered low→high ramp.
    #[must_use]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of discrete levels the ramp is indexed by.
    #[must_use]
    pub const fn levels(&self) -> usize {
        self.levels
    }

    /// The color for empty cells: `empty_color`, or the first ramp entry.
    #[must_use]
    pub fn empty(&self) -> Rgb {
        self.empty_color.unwrap_or_else(|| self.color_at(0))
    }

    /// Maps a normalized value onto the ramp.
    ///
    /// - Empty cells, and `normalized <= 0`, yield [`Palette::empty`];
    ///   the empty color is independent of the value.
    /// - `normalized >= 1` yields the last ramp entry exactly.
    /// - Anything in between scales by `levels - 1` and linearly
    ///   interpolates the two bracketing ramp entries by the fractional
    ///   remainder. Interpolation always involves exactly two adjacent
    ///   colors, whatever [`Palette::interpolation`] says.
    #[must_use]
    pub fn color_for(&self, normalized: f64, is_empty: bool) -> Rgb {
        if is_empty || normalized <= 0.0 {
            return self.empty();
        }
        if normalized >= 1.0 {
            return self.color_at(self.colors.len().saturating_sub(1));
        }
        let steps = self.levels.saturating_sub(1);
        if steps == 0 {
            return self.color_at(0);
        }
        let scaled = normalized * steps as f64;
        let lower = scaled.floor() as usize;
        let fraction = scaled - scaled.floor();
        self.color_at(lower).lerp(self.color_at(lower + 1), fraction)
    }

    /// Ramp entry at `index`, clamped to the last entry.
    fn color_at(&self, index: usize) -> Rgb {
        let clamped = index.min(self.colors.len().saturating_sub(1));
        self.colors.get(clamped).copied().unwrap_or(Rgb::new(0xeb, 0xed, 0xf0))
    }
}

fn default_ramp() -> Vec<Rgb> {
    preset(DEFAULT_PRESET).map_or_else(|| vec![Rgb::new(0xeb, 0xed, 0xf0)], |p| p.colors)
}

/// A palette reference as it appears in configuration: either the name of a
/// built-in preset or a complete inline palette.
///
/// With the `serde` feature this is untagged, so configuration may supply
/// either `"github"` or a full palette object in the same field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PaletteRef {
    /// The name of a built-in preset.
    Named(String),
    /// A complete palette definition.
    Inline(Palette),
}

impl PaletteRef {
    /// Resolves the reference to a concrete palette.
    ///
    /// An unrecognized preset name resolves to the default preset rather
    /// than failing; the fallback is logged. This is the single place where
    /// palette configuration is interpreted.
    #[must_use]
    pub fn resolve(&self) -> Palette {
        match self {
            Self::Named(name) => preset(name).unwrap_or_else(|| {
                warn!("unknown palette preset {name:?}; falling back to {DEFAULT_PRESET:?}");
                Palette::default()
            }),
            Self::Inline(palette) => palette.clone(),
        }
    }
}

impl Default for PaletteRef {
    fn default() -> Self {
        Self::Named(DEFAULT_PRESET.to_owned())
    }
}

impl From<&str> for PaletteRef {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<Palette> for PaletteRef {
    fn from(palette: Palette) -> Self {
        Self::Inline(palette)
    }
}

impl Default for Palette {
    /// The default preset ([`DEFAULT_PRESET`]).
    fn default() -> Self {
        preset(DEFAULT_PRESET)
            .unwrap_or_else(|| Self::new(DEFAULT_PRESET, vec![Rgb::new(0xeb, 0xed, 0xf0)]))
    }
}

#[cfg(test)]
mod tests {
    use super::{Interpolation, Palette, PaletteRef};
    use crate::rgb::Rgb;

    fn mono() -> Palette {
        Palette::new(
            "mono",
            vec![Rgb::new(0xff, 0xff, 0xff), Rgb::new(0x00, 0x00, 0x00)],
        )
    }

    #[test]
    fn endpoints_are_exact() {
        let palette = mono();
        assert_eq!(palette.color_for(1.0, false).to_hex(), "#000000");
        assert_eq!(palette.color_for(1.5, false).to_hex(), "#000000");
        // Zero (non-empty) yields the empty/first color.
        assert_eq!(palette.color_for(0.0, false).to_hex(), "#ffffff");
    }

    #[test]
    fn empty_color_is_independent_of_value() {
        let palette = mono().with_empty_color(Rgb::new(0x12, 0x34, 0x56));
        for normalized in [0.0, 0.3, 0.7, 1.0] {
            assert_eq!(palette.color_for(normalized, true).to_hex(), "#123456");
        }
        assert_eq!(
            palette.color_for(0.0, false),
            palette.color_for(0.9, true)
        );
    }

    #[test]
    fn midpoint_interpolates_between_adjacent_entries() {
        let palette = mono();
        // levels = 2 → 0.5 scales to 0.5 between the two entries.
        assert_eq!(palette.color_for(0.5, false), Rgb::new(128, 128, 128));
    }

    #[test]
    fn interpolation_uses_exactly_two_bracketing_entries() {
        let palette = Palette::new(
            "trio",
            vec![
                Rgb::new(0, 0, 0),
                Rgb::new(100, 100, 100),
                Rgb::new(200, 0, 0),
            ],
        );
        // 0.25 scales to 0.5 within the first pair: untouched by the third.
        assert_eq!(palette.color_for(0.25, false), Rgb::new(50, 50, 50));
        // 0.75 scales to 1.5: halfway through the second pair.
        assert_eq!(palette.color_for(0.75, false), Rgb::new(150, 50, 50));
    }

    #[test]
    fn nonlinear_modes_resolve_to_the_linear_ramp() {
        let linear = mono();
        let exponential = mono().with_interpolation(Interpolation::Exponential);
        let logarithmic = mono().with_interpolation(Interpolation::Logarithmic);
        for normalized in [0.1, 0.4, 0.5, 0.9] {
            assert_eq!(
                linear.color_for(normalized, false),
                exponential.color_for(normalized, false)
            );
            assert_eq!(
                linear.color_for(normalized, false),
                logarithmic.color_for(normalized, false)
            );
        }
    }

    #[test]
    fn single_color_palette_is_flat() {
        let palette = Palette::new("flat", vec![Rgb::new(10, 20, 30)]);
        assert_eq!(palette.levels(), 1);
        assert_eq!(palette.color_for(0.5, false), Rgb::new(10, 20, 30));
        assert_eq!(palette.color_for(1.0, false), Rgb::new(10, 20, 30));
    }

    #[test]
    fn empty_ramp_falls_back_to_default_preset() {
        let palette = Palette::new("broken", Vec::new());
        assert!(!palette.colors().is_empty());
        assert_eq!(palette.name, "broken");
    }

    #[test]
    fn zero_levels_resolves_to_ramp_length() {
        let palette = mono().with_levels(0);
        assert_eq!(palette.levels(), 2);
    }

    #[test]
    fn levels_override_changes_indexing() {
        // Five levels over a two-color ramp: indexes clamp to the ramp.
        let palette = mono().with_levels(5);
        assert_eq!(palette.levels(), 5);
        // 0.25 scales to 1.0 → fully the last entry pair start, clamped.
        assert_eq!(palette.color_for(0.25, false).to_hex(), "#000000");
    }

    #[test]
    fn named_reference_resolves_presets_and_falls_back() {
        let github = PaletteRef::from("github").resolve();
        assert_eq!(github.name, "github");

        let fallback = PaletteRef::from("definitely-not-a-preset").resolve();
        assert_eq!(fallback.name, Palette::default().name);
    }

    #[test]
    fn inline_reference_resolves_to_itself() {
        let inline = PaletteRef::from(mono()).resolve();
        assert_eq!(inline, mono());
    }
}
