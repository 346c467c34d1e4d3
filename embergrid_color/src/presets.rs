// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in palette presets.
//!
//! Presets are a static lookup table keyed by name. Lookup is
//! case-insensitive on ASCII. [`crate::PaletteRef::resolve`] is the soft
//! boundary that turns unknown names into the default preset; [`preset`]
//! itself reports unknown names as `None`.

use crate::palette::Palette;
use crate::rgb::Rgb;

/// Name of the preset used when no palette is configured or a named lookup
/// misses.
pub const DEFAULT_PRESET: &str = "github";

const fn c(r: u8, g: u8, b: u8) -> Rgb {
    Rgb::new(r, g, b)
}

/// GitHub contribution-calendar greens (light).
const GITHUB: [Rgb; 5] = [
    c(0xeb, 0xed, 0xf0),
    c(0x9b, 0xe9, 0xa8),
    c(0x40, 0xc4, 0x63),
    c(0x30, 0xa1, 0x4e),
    c(0x21, 0x6e, 0x39),
];

/// GitHub contribution-calendar greens (dark).
const GITHUB_DARK: [Rgb; 5] = [
    c(0x16, 0x1b, 0x22),
    c(0x0e, 0x44, 0x29),
    c(0x00, 0x6d, 0x32),
    c(0x26, 0xa6, 0x41),
    c(0x39, 0xd3, 0x53),
];

/// Yellow→red heat ramp.
const HEAT: [Rgb; 5] = [
    c(0xff, 0xff, 0xb2),
    c(0xfe, 0xcc, 0x5c),
    c(0xfd, 0x8d, 0x3c),
    c(0xf0, 0x3b, 0x20),
    c(0xbd, 0x00, 0x26),
];

/// Light→deep blues.
const OCEAN: [Rgb; 5] = [
    c(0xf7, 0xfb, 0xff),
    c(0xc6, 0xdb, 0xef),
    c(0x6b, 0xae, 0xd6),
    c(0x21, 0x71, 0xb5),
    c(0x08, 0x30, 0x6b),
];

/// Light→deep greens.
const FOREST: [Rgb; 5] = [
    c(0xf7, 0xfc, 0xf5),
    c(0xc7, 0xe9, 0xc0),
    c(0x74, 0xc4, 0x76),
    c(0x23, 0x8b, 0x45),
    c(0x00, 0x44, 0x1b),
];

/// Orange→red dusk ramp.
const SUNSET: [Rgb; 5] = [
    c(0xff, 0xf7, 0xec),
    c(0xfd, 0xd4, 0x9e),
    c(0xfc, 0x8d, 0x59),
    c(0xd7, 0x30, 0x1f),
    c(0x7f, 0x00, 0x00),
];

/// Light→deep purples.
const GRAPE: [Rgb; 5] = [
    c(0xfc, 0xfb, 0xfd),
    c(0xda, 0xda, 0xeb),
    c(0x9e, 0x9a, 0xc8),
    c(0x6a, 0x51, 0xa3),
    c(0x3f, 0x00, 0x7d),
];

/// Neutral greys.
const SLATE: [Rgb; 5] = [
    c(0xff, 0xff, 0xff),
    c(0xd9, 0xd9, 0xd9),
    c(0x96, 0x96, 0x96),
    c(0x52, 0x52, 0x52),
    c(0x00, 0x00, 0x00),
];

/// Warm ambers.
const AMBER: [Rgb; 5] = [
    c(0xff, 0xfb, 0xeb),
    c(0xfd, 0xe6, 0x8a),
    c(0xf5, 0x9e, 0x0b),
    c(0xb4, 0x53, 0x09),
    c(0x78, 0x35, 0x0f),
];

/// Pink→deep crimson.
const CRIMSON: [Rgb; 5] = [
    c(0xff, 0xf1, 0xf2),
    c(0xfd, 0xa4, 0xaf),
    c(0xf4, 0x3f, 0x5e),
    c(0xbe, 0x12, 0x3c),
    c(0x88, 0x13, 0x37),
];

/// Perceptually-uniform viridis stops.
const VIRIDIS: [Rgb; 5] = [
    c(0x44, 0x01, 0x54),
    c(0x3b, 0x52, 0x8b),
    c(0x21, 0x91, 0x8c),
    c(0x5e, 0xc9, 0x62),
    c(0xfd, 0xe7, 0x25),
];

/// Cream→rust browns.
const RUST: [Rgb; 5] = [
    c(0xfd, 0xf6, 0xec),
    c(0xf5, 0xc1, 0x99),
    c(0xe6, 0x8a, 0x4e),
    c(0xc6, 0x5d, 0x21),
    c(0x7c, 0x2d, 0x12),
];

const PRESET_NAMES: [&str; 12] = [
    "github",
    "github-dark",
    "heat",
    "ocean",
    "forest",
    "sunset",
    "grape",
    "slate",
    "amber",
    "crimson",
    "viridis",
    "rust",
];

/// Returns the built-in preset with the given name, or `None` if the name
/// is unknown. Matching is ASCII case-insensitive.
#[must_use]
pub fn preset(name: &str) -> Option<Palette> {
    let ramp: &[Rgb] = match name.to_ascii_lowercase().as_str() {
        "github" => &GITHUB,
        "github-dark" => &GITHUB_DARK,
        "heat" => &HEAT,
        "ocean" => &OCEAN,
        "forest" => &FOREST,
        "sunset" => &SUNSET,
        "grape" => &GRAPE,
        "slate" => &SLATE,
        "amber" => &AMBER,
        "crimson" => &CRIMSON,
        "viridis" => &VIRIDIS,
        "rust" => &RUST,
        _ => return None,
    };
    Some(Palette::new(name.to_ascii_lowercase(), ramp.to_vec()))
}

/// Names of every built-in preset, in presentation order.
#[must_use]
pub const fn preset_names() -> &'static [&'static str] {
    &PRESET_NAMES
}
