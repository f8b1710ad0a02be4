//! Discrete colour stops spread over a travel-time axis.
//!
//! Map renderers that take explicit breakpoints expect a flat list
//! `[position_0, color_0, position_1, color_1, ...]`. [`ColorStops`] serializes
//! to exactly that shape.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::error::PaletteError;
use crate::scheme::ColorScheme;

/// Upper end of the time axis when none is given, in minutes.
pub const DEFAULT_MAX_MINUTES: f64 = 60.0;

/// One breakpoint of a discrete gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: String,
}

/// One entry of the flattened stop list.
#[derive(Debug, Clone, PartialEq)]
pub enum StopValue {
    Number(f64),
    Color(String),
}

impl Serialize for StopValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StopValue::Number(position) => Position(*position).serialize(serializer),
            StopValue::Color(color) => serializer.serialize_str(color),
        }
    }
}

/// Whole-number positions are written as integers (`45`, not `45.0`).
struct Position(f64);

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // 2^53: beyond this f64 no longer holds every integer
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Evenly spaced stops from 0 up to the maximum, in scheme order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorStops {
    stops: Vec<ColorStop>,
}

impl ColorStops {
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Flattens into alternating positions and colours.
    pub fn to_flat(&self) -> Vec<StopValue> {
        self.stops
            .iter()
            .flat_map(|stop| {
                [
                    StopValue::Number(stop.position),
                    StopValue::Color(stop.color.clone()),
                ]
            })
            .collect()
    }
}

impl Serialize for ColorStops {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.stops.len() * 2))?;
        for stop in &self.stops {
            seq.serialize_element(&Position(stop.position))?;
            seq.serialize_element(&stop.color)?;
        }
        seq.end()
    }
}

/// Spreads an already selected level across `0..=max_minutes`.
///
/// Stop `i` lands at `max_minutes * i / (len - 1)`. Tokens are passed through
/// unchanged.
pub fn color_stops_for_level<S: AsRef<str>>(
    level: &[S],
    max_minutes: f64,
) -> Result<ColorStops, PaletteError> {
    if level.len() < 2 {
        return Err(PaletteError::TooFewColors { found: level.len() });
    }

    let last = (level.len() - 1) as f64;
    let stops = level
        .iter()
        .enumerate()
        .map(|(i, color)| ColorStop {
            position: max_minutes * i as f64 / last,
            color: color.as_ref().to_string(),
        })
        .collect();

    Ok(ColorStops { stops })
}

/// Stops for the finest level of `scheme` over `0..=max_minutes`.
pub fn create_color_stops_with_max(
    scheme: &ColorScheme,
    max_minutes: f64,
) -> Result<ColorStops, PaletteError> {
    color_stops_for_level(scheme.require_finest_level()?, max_minutes)
}

/// Stops for the finest level of `scheme` over the default 60 minutes.
pub fn create_color_stops(scheme: &ColorScheme) -> Result<ColorStops, PaletteError> {
    create_color_stops_with_max(scheme, DEFAULT_MAX_MINUTES)
}
