//! Subcommand execution
//!
//! Commands write to caller-supplied writers so they can be driven from
//! tests without spawning the binary.

use crate::cli::{ConvertArgs, GlobalArgs};
use crate::config::AppConfig;
use clap::ArgMatches;
use serde::Serialize;
use std::io::Write;
use upskill_thermo::{
    Celsius, ConverterConfig, Fahrenheit, TemperatureConverter, ABS_ZERO_FAHRENHEIT,
};

/// One successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionRecord {
    /// Input reading
    pub fahrenheit: Fahrenheit,
    /// Converted reading
    pub celsius: Celsius,
}

/// Outcome of a `convert` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Readings converted
    pub converted: usize,
    /// Readings rejected
    pub rejected: usize,
}

impl ConvertSummary {
    /// Process exit status: non-zero if any reading was rejected
    #[inline]
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(self.rejected > 0)
    }
}

/// Apply command-line overrides to the configured converter settings
#[must_use]
pub fn effective_config(base: ConverterConfig, args: &ConvertArgs) -> ConverterConfig {
    let mut config = base;
    if let Some(decimals) = args.decimals {
        config = config.with_decimals(decimals);
    }
    if let Some(limit) = args.max_fahrenheit {
        config = config.with_max_fahrenheit(limit);
    }
    config
}

/// Convert every reading, reporting rejections to `err` and continuing
///
/// # Errors
/// Fails only if writing to `out` or `err` fails
pub fn run_convert<W: Write, E: Write>(
    converter: &TemperatureConverter,
    readings: &[Fahrenheit],
    json: bool,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<ConvertSummary> {
    tracing::info!(count = readings.len(), json, "converting readings");

    let mut summary = ConvertSummary::default();
    let mut records = Vec::with_capacity(readings.len());

    for &reading in readings {
        match converter.convert_typed(reading) {
            Ok(celsius) => {
                summary.converted += 1;
                if json {
                    records.push(ConversionRecord {
                        fahrenheit: reading,
                        celsius,
                    });
                } else {
                    writeln!(out, "{reading} = {celsius}")?;
                }
            }
            Err(e) => {
                summary.rejected += 1;
                tracing::warn!(%reading, error = %e, "reading rejected");
                writeln!(err, "error: {reading}: {e}")?;
            }
        }
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
    }

    Ok(summary)
}

/// Print the effective limits and precision
///
/// # Errors
/// Fails if writing to `out` fails
pub fn run_limits<W: Write>(config: &ConverterConfig, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "lower bound: > {}", Fahrenheit(ABS_ZERO_FAHRENHEIT))?;
    match config.max_fahrenheit {
        Some(limit) => writeln!(out, "upper bound: <= {}", Fahrenheit(limit))?,
        None => writeln!(out, "upper bound: none")?,
    }
    writeln!(out, "decimal places: {}", config.decimals)?;
    Ok(())
}

/// Run the subcommand selected in `matches`, returning the process exit status
///
/// # Errors
/// Fails on config-file problems, invalid overrides, or output errors
pub fn dispatch<W: Write, E: Write>(
    matches: &ArgMatches,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<i32> {
    let globals = GlobalArgs::from_matches(matches);
    let app_config = AppConfig::load_or_default(globals.config.as_deref())?;

    match matches.subcommand() {
        Some(("convert", sub)) => {
            let args = ConvertArgs::from_matches(sub);
            let config = effective_config(app_config.converter, &args);
            let converter = TemperatureConverter::new(config)?;
            let summary = run_convert(&converter, &args.readings, args.json, out, err)?;
            tracing::info!(
                converted = summary.converted,
                rejected = summary.rejected,
                "conversion finished"
            );
            Ok(summary.exit_code())
        }
        Some(("limits", _)) => {
            run_limits(&app_config.converter, out)?;
            Ok(0)
        }
        Some((name, _)) => anyhow::bail!("unknown subcommand '{name}'"),
        None => anyhow::bail!("no subcommand given"),
    }
}
