use anyhow::Result;
use std::env;
use std::path::PathBuf;
use transit_palette::{color_schemes, rail_lines, ExportConfig, Legend, LegendWriter};

/// Command-line choices. Anything left unset comes from the config file.
#[derive(Default)]
struct Args {
    config_file: Option<PathBuf>,
    scheme: Option<String>,
    max_minutes: Option<f64>,
    samples: Option<usize>,
    rails: Vec<String>,
    output_file: Option<String>,
    list: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<ExportConfig> {
        let mut config = match &self.config_file {
            Some(path) => ExportConfig::load_from_path(path)?,
            None => ExportConfig::load_or_default(),
        };
        if let Some(scheme) = &self.scheme {
            config.scheme = scheme.clone();
        }
        if let Some(max_minutes) = self.max_minutes {
            config.max_minutes = max_minutes;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        Ok(config)
    }
}

fn parse_args() -> Result<Args> {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-scheme" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-scheme requires a scheme name");
                }
                parsed.scheme = Some(args[i].clone());
            }
            "-max" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-max requires a number of minutes");
                }
                let max: f64 = args[i].parse()?;
                if !max.is_finite() || max <= 0.0 {
                    anyhow::bail!("-max must be a positive number (got {})", args[i]);
                }
                parsed.max_minutes = Some(max);
            }
            "-samples" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-samples requires an argument");
                }
                parsed.samples = Some(args[i].parse()?);
            }
            "-rail" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-rail requires a line name");
                }
                parsed.rails.push(args[i].clone());
            }
            "-config" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-config requires a file path argument");
                }
                parsed.config_file = Some(PathBuf::from(&args[i]));
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                parsed.output_file = Some(args[i].clone());
            }
            "-list" => {
                parsed.list = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                log::warn!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(parsed)
}

fn print_help() {
    println!("Travel-time map palette exporter");
    println!("Usage: transit-palette [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -scheme <NAME>         Gradient scheme (default: Spectral)");
    println!("  -max <MINUTES>         Upper end of the time axis (default: 60)");
    println!("  -samples <N>           Samples in the continuous legend (default: 16)");
    println!("  -rail <LINE>           Only export this rail line (repeatable)");
    println!("  -config <FILE>         Settings file (default: <config dir>/transit-palette/config.json)");
    println!("  -out <FILE>            Output file path (default: stdout)");
    println!("  -list                  List schemes and rail lines, then exit");
    println!("  -h, -help, --help      Show this help message");
}

fn print_catalog() {
    println!("Schemes:");
    for name in color_schemes().list_schemes() {
        println!("  {}", name);
    }
    println!();
    println!("Rail lines:");
    for (name, [r, g, b]) in rail_lines() {
        println!("  {:<24} #{:02x}{:02x}{:02x}", name, r, g, b);
    }
}

fn setup_logging() -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{}: {}", record.level(), message))
        })
        .level(log::LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn main() -> Result<()> {
    setup_logging()?;
    let args = parse_args()?;

    if args.list {
        print_catalog();
        return Ok(());
    }

    let config = args.resolve_config()?;
    let legend = Legend::build(&config, &args.rails)?;

    let mut writer = match &args.output_file {
        Some(path) => LegendWriter::new(path)?,
        None => LegendWriter::stdout(),
    };
    writer.write_legend(&legend)?;

    if let Some(path) = &args.output_file {
        println!("Legend written to: {}", path);
    }

    Ok(())
}
