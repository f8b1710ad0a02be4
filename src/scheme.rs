//! Named multi-level colour gradient schemes.
//!
//! Each scheme holds several levels of the same gradient at increasing
//! granularity (3 up to 11 colours). Consumers normally want the finest level,
//! available through [`ColorScheme::finest_level`].
//!
//! The bundled schemes are the ColorBrewer diverging palettes as shipped by
//! d3-scale-chromatic.
//!
//! # Examples
//!
//! ```
//! use transit_palette::scheme::color_schemes;
//!
//! let spectral = color_schemes().get_scheme("Spectral").unwrap();
//! assert_eq!(spectral.finest_level().map(|l| l.len()), Some(11));
//! ```

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::PaletteError;

type Level = &'static [&'static str];

/// A named gradient with one colour list per granularity level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub name: &'static str,
    levels: &'static [Level],
}

impl ColorScheme {
    pub const fn new(name: &'static str, levels: &'static [Level]) -> Self {
        Self { name, levels }
    }

    /// All levels, coarsest first.
    pub fn levels(&self) -> &[Level] {
        self.levels
    }

    /// The level with the most colours. By convention this is the last one.
    pub fn finest_level(&self) -> Option<Level> {
        self.levels.last().copied()
    }

    /// Like [`finest_level`](Self::finest_level), failing for a scheme without levels.
    pub fn require_finest_level(&self) -> Result<Level, PaletteError> {
        self.finest_level().ok_or(PaletteError::EmptyScheme)
    }

    /// The level holding exactly `count` colours, if the scheme has one.
    pub fn level_with(&self, count: usize) -> Option<Level> {
        self.levels.iter().copied().find(|level| level.len() == count)
    }
}

const SPECTRAL: &[Level] = &[
    &["#fc8d59", "#ffffbf", "#99d594"],
    &["#d7191c", "#fdae61", "#abdda4", "#2b83ba"],
    &["#d7191c", "#fdae61", "#ffffbf", "#abdda4", "#2b83ba"],
    &["#d53e4f", "#fc8d59", "#fee08b", "#e6f598", "#99d594", "#3288bd"],
    &["#d53e4f", "#fc8d59", "#fee08b", "#ffffbf", "#e6f598", "#99d594", "#3288bd"],
    &["#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#e6f598", "#abdda4", "#66c2a5", "#3288bd"],
    &[
        "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598", "#abdda4", "#66c2a5",
        "#3288bd",
    ],
    &[
        "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#e6f598", "#abdda4", "#66c2a5",
        "#3288bd", "#5e4fa2",
    ],
    &[
        "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598", "#abdda4",
        "#66c2a5", "#3288bd", "#5e4fa2",
    ],
];

const RD_YL_BU: &[Level] = &[
    &["#fc8d59", "#ffffbf", "#91bfdb"],
    &["#d7191c", "#fdae61", "#abd9e9", "#2c7bb6"],
    &["#d7191c", "#fdae61", "#ffffbf", "#abd9e9", "#2c7bb6"],
    &["#d73027", "#fc8d59", "#fee090", "#e0f3f8", "#91bfdb", "#4575b4"],
    &["#d73027", "#fc8d59", "#fee090", "#ffffbf", "#e0f3f8", "#91bfdb", "#4575b4"],
    &["#d73027", "#f46d43", "#fdae61", "#fee090", "#e0f3f8", "#abd9e9", "#74add1", "#4575b4"],
    &[
        "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8", "#abd9e9", "#74add1",
        "#4575b4",
    ],
    &[
        "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#e0f3f8", "#abd9e9", "#74add1",
        "#4575b4", "#313695",
    ],
    &[
        "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8", "#abd9e9",
        "#74add1", "#4575b4", "#313695",
    ],
];

const RD_YL_GN: &[Level] = &[
    &["#fc8d59", "#ffffbf", "#91cf60"],
    &["#d7191c", "#fdae61", "#a6d96a", "#1a9641"],
    &["#d7191c", "#fdae61", "#ffffbf", "#a6d96a", "#1a9641"],
    &["#d73027", "#fc8d59", "#fee08b", "#d9ef8b", "#91cf60", "#1a9850"],
    &["#d73027", "#fc8d59", "#fee08b", "#ffffbf", "#d9ef8b", "#91cf60", "#1a9850"],
    &["#d73027", "#f46d43", "#fdae61", "#fee08b", "#d9ef8b", "#a6d96a", "#66bd63", "#1a9850"],
    &[
        "#d73027", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#d9ef8b", "#a6d96a", "#66bd63",
        "#1a9850",
    ],
    &[
        "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee08b", "#d9ef8b", "#a6d96a", "#66bd63",
        "#1a9850", "#006837",
    ],
    &[
        "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#d9ef8b", "#a6d96a",
        "#66bd63", "#1a9850", "#006837",
    ],
];

/// Spectral: red → yellow → green → blue → purple.
pub const SCHEME_SPECTRAL: ColorScheme = ColorScheme::new("Spectral", SPECTRAL);
/// RdYlBu: red → yellow → blue.
pub const SCHEME_RD_YL_BU: ColorScheme = ColorScheme::new("RdYlBu", RD_YL_BU);
/// RdYlGn: red → yellow → green.
pub const SCHEME_RD_YL_GN: ColorScheme = ColorScheme::new("RdYlGn", RD_YL_GN);

/// Read-only registry of the bundled gradient schemes.
#[derive(Debug)]
pub struct SchemeRegistry {
    schemes: HashMap<&'static str, ColorScheme>,
}

impl SchemeRegistry {
    /// Creates a registry holding the bundled schemes.
    pub fn new() -> Self {
        let schemes = [SCHEME_SPECTRAL, SCHEME_RD_YL_BU, SCHEME_RD_YL_GN]
            .into_iter()
            .map(|scheme| (scheme.name, scheme))
            .collect();
        Self { schemes }
    }

    /// Retrieves a scheme by name.
    pub fn get_scheme(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes.get(name)
    }

    /// Retrieves a scheme by name, failing with [`PaletteError::UnknownScheme`].
    pub fn require_scheme(&self, name: &str) -> Result<&ColorScheme, PaletteError> {
        self.get_scheme(name)
            .ok_or_else(|| PaletteError::UnknownScheme(name.to_string()))
    }

    /// Returns all scheme names, sorted.
    pub fn list_schemes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemes.keys().copied().collect();
        names.sort();
        names
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static COLOR_SCHEMES: Lazy<SchemeRegistry> = Lazy::new(SchemeRegistry::new);

/// The process-wide scheme registry.
pub fn color_schemes() -> &'static SchemeRegistry {
    &COLOR_SCHEMES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_color;

    #[test]
    fn registry_lists_bundled_schemes() {
        assert_eq!(color_schemes().list_schemes(), vec!["RdYlBu", "RdYlGn", "Spectral"]);
    }

    #[test]
    fn spectral_levels_grow() {
        let spectral = color_schemes().get_scheme("Spectral").unwrap();
        let first = spectral.levels().first().unwrap();
        let last = spectral.finest_level().unwrap();
        assert!(last.len() > first.len());
        assert_eq!(last.first(), Some(&"#9e0142"));
        assert_eq!(last.last(), Some(&"#5e4fa2"));
    }

    #[test]
    fn every_scheme_runs_from_three_to_eleven() {
        for name in color_schemes().list_schemes() {
            let scheme = color_schemes().get_scheme(name).unwrap();
            let counts: Vec<usize> = scheme.levels().iter().map(|l| l.len()).collect();
            assert_eq!(counts, (3..=11).collect::<Vec<_>>(), "{}", name);
            assert_eq!(scheme.level_with(7).map(|l| l.len()), Some(7));
            assert_eq!(scheme.level_with(12), None);
        }
    }

    #[test]
    fn every_token_parses() {
        for name in color_schemes().list_schemes() {
            let scheme = color_schemes().get_scheme(name).unwrap();
            for level in scheme.levels() {
                for token in level.iter() {
                    assert!(parse_color(token).is_ok(), "{} {}", name, token);
                }
            }
        }
    }

    #[test]
    fn unknown_scheme() {
        assert!(color_schemes().get_scheme("spectral").is_none());
        assert_eq!(
            color_schemes().require_scheme("Viridis"),
            Err(PaletteError::UnknownScheme("Viridis".to_string()))
        );
    }

    #[test]
    fn empty_scheme_has_no_finest_level() {
        let empty = ColorScheme::new("Empty", &[]);
        assert_eq!(empty.finest_level(), None);
        assert_eq!(empty.require_finest_level(), Err(PaletteError::EmptyScheme));
    }
}
