pub mod error;
pub mod color;
pub mod rail;
pub mod scheme;
pub mod stops;
pub mod ramp;
pub mod config;
pub mod export;

// Export error type
pub use error::PaletteError;

// Export colour token helpers
pub use color::{parse_color, to_hex, to_css_rgb, triple_to_color32};

// Export rail colour lookup
pub use rail::{RAIL_COLORS, rail_color, rail_color32, rail_color_or, rail_color_map, rail_lines};

// Export scheme registry
pub use scheme::{
    ColorScheme, SchemeRegistry, color_schemes,
    SCHEME_SPECTRAL, SCHEME_RD_YL_BU, SCHEME_RD_YL_GN
};

// Export colour stops and ramps
pub use stops::{
    ColorStop, ColorStops, StopValue, DEFAULT_MAX_MINUTES,
    color_stops_for_level, create_color_stops, create_color_stops_with_max
};
pub use ramp::{Ramp, ramp};

// Export settings and legend output
pub use config::ExportConfig;
pub use export::{Legend, LegendWriter, RailEntry};
