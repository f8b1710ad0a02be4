//! Continuous colour ramps through uniform cubic B-splines in RGB space.
//!
//! The curve is smoothed across all anchors instead of joining neighbours with
//! straight lines. It passes exactly through the first and last anchor (the
//! ends are reflected), but interior anchors are only approached.
//!
//! # Examples
//!
//! ```
//! use egui::Color32;
//! use transit_palette::{ramp, SCHEME_SPECTRAL};
//!
//! let spectral = ramp(&SCHEME_SPECTRAL).unwrap();
//! assert_eq!(spectral.sample(0.0), Color32::from_rgb(0x9e, 0x01, 0x42));
//! assert_eq!(spectral.sample_css(1.0), "rgb(94, 79, 162)");
//! ```

use egui::Color32;

use crate::color::{parse_color, to_css_rgb};
use crate::error::PaletteError;
use crate::scheme::ColorScheme;

/// A continuous `t ↦ colour` function over `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    red: Vec<f64>,
    green: Vec<f64>,
    blue: Vec<f64>,
}

impl Ramp {
    /// Builds a ramp from an explicit list of anchor colours.
    pub fn from_level<S: AsRef<str>>(level: &[S]) -> Result<Self, PaletteError> {
        if level.len() < 2 {
            return Err(PaletteError::TooFewColors { found: level.len() });
        }

        let mut ramp = Ramp {
            red: Vec::with_capacity(level.len()),
            green: Vec::with_capacity(level.len()),
            blue: Vec::with_capacity(level.len()),
        };
        for token in level {
            let color = parse_color(token.as_ref())?;
            ramp.red.push(color.r() as f64);
            ramp.green.push(color.g() as f64);
            ramp.blue.push(color.b() as f64);
        }
        Ok(ramp)
    }

    /// Number of anchor colours.
    pub fn anchors(&self) -> usize {
        self.red.len()
    }

    /// Evaluates the ramp. `t` is clamped to `[0, 1]`; NaN maps to 0.
    pub fn sample(&self, t: f64) -> Color32 {
        Color32::from_rgb(
            to_channel(basis_spline(&self.red, t)),
            to_channel(basis_spline(&self.green, t)),
            to_channel(basis_spline(&self.blue, t)),
        )
    }

    /// Evaluates the ramp and formats it as `rgb(r, g, b)`.
    pub fn sample_css(&self, t: f64) -> String {
        to_css_rgb(self.sample(t))
    }

    /// Borrows the ramp as a plain closure.
    pub fn as_fn(&self) -> impl Fn(f64) -> Color32 + '_ {
        move |t| self.sample(t)
    }

    /// `steps` samples evenly spaced from 0 to 1 inclusive.
    pub fn legend(&self, steps: usize) -> Vec<Color32> {
        match steps {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => {
                let last = (steps - 1) as f64;
                (0..steps).map(|i| self.sample(i as f64 / last)).collect()
            }
        }
    }
}

/// Builds a ramp over the finest level of `scheme`.
pub fn ramp(scheme: &ColorScheme) -> Result<Ramp, PaletteError> {
    Ramp::from_level(scheme.require_finest_level()?)
}

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Uniform cubic B-spline through `values` (at least two) at `t`.
fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let i = if t >= 1.0 {
        n - 1
    } else {
        (t * n as f64).floor() as usize
    };

    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i + 1 < n { values[i + 2] } else { 2.0 * v2 - v1 };

    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}
