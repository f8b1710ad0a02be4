//! Legend documents for map front-ends.
//!
//! A [`Legend`] bundles what a travel-time map needs to draw its colours: the
//! discrete stops for the choropleth, a sampled continuous ramp for the legend
//! bar, and the rail line colours. [`LegendWriter`] writes it as JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::color::{to_hex, triple_to_color32};
use crate::config::ExportConfig;
use crate::error::PaletteError;
use crate::ramp::ramp;
use crate::rail::{rail_color, rail_lines};
use crate::scheme::color_schemes;
use crate::stops::{create_color_stops_with_max, ColorStops};

/// A rail line and the colour it is drawn with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RailEntry {
    pub name: String,
    pub rgb: [u8; 3],
    pub hex: String,
    /// False when the line is not in the table and the fallback colour was used.
    pub known: bool,
}

/// Everything a renderer needs for one travel-time map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub scheme: String,
    pub max_minutes: f64,
    pub stops: ColorStops,
    pub ramp: Vec<String>,
    pub rails: Vec<RailEntry>,
}

impl Legend {
    /// Builds a legend from `config`.
    ///
    /// `lines` restricts the rail section to the given names; when empty every
    /// known line is included.
    pub fn build(config: &ExportConfig, lines: &[String]) -> Result<Self, PaletteError> {
        let scheme = color_schemes().require_scheme(&config.scheme)?;
        let stops = create_color_stops_with_max(scheme, config.max_minutes)?;
        let ramp = ramp(scheme)?
            .legend(config.samples)
            .into_iter()
            .map(to_hex)
            .collect();

        let rails = if lines.is_empty() {
            rail_lines()
                .map(|(name, rgb)| rail_entry(name, rgb, true))
                .collect()
        } else {
            lines
                .iter()
                .map(|name| match rail_color(name) {
                    Some(rgb) => rail_entry(name, rgb, true),
                    None => rail_entry(name, config.fallback_rail_color, false),
                })
                .collect()
        };

        Ok(Legend {
            scheme: scheme.name.to_string(),
            max_minutes: config.max_minutes,
            stops,
            ramp,
            rails,
        })
    }
}

fn rail_entry(name: &str, rgb: [u8; 3], known: bool) -> RailEntry {
    RailEntry {
        name: name.to_string(),
        rgb,
        hex: to_hex(triple_to_color32(rgb)),
        known,
    }
}

/// Writes legend documents as pretty-printed JSON.
pub struct LegendWriter {
    writer: Box<dyn Write>,
    legend_count: usize,
}

impl LegendWriter {
    /// Creates a writer for the specified file path.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use transit_palette::{ExportConfig, Legend, LegendWriter};
    /// # fn main() -> anyhow::Result<()> {
    /// let legend = Legend::build(&ExportConfig::default(), &[])?;
    /// let mut writer = LegendWriter::new("legend.json")?;
    /// writer.write_legend(&legend)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Creates a writer on standard output.
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    pub fn from_writer(writer: impl Write + 'static) -> Self {
        LegendWriter {
            writer: Box::new(writer),
            legend_count: 0,
        }
    }

    pub fn write_legend(&mut self, legend: &Legend) -> Result<()> {
        self.write_document(legend)?;
        self.legend_count += 1;
        Ok(())
    }

    /// Number of legends written so far.
    pub fn legend_count(&self) -> usize {
        self.legend_count
    }

    pub fn write_document<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)
            .context("Failed to serialize to JSON")?;

        writeln!(self.writer, "{}", json)
            .context("Failed to write document")?;

        self.writer.flush()
            .context("Failed to flush writer")?;

        Ok(())
    }
}

impl Drop for LegendWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
