// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Result};
use pitchbender::config::Config;
use pitchbender::music::{
    approximate_ratio, classify_frequency, convert_cents_to_decimal, convert_decimal_to_cents,
    convert_ratio_to_cents, convert_ratio_to_decimal, parse_tet, step_cents, step_decimal,
    ScalaScale, NO_PITCH_DETECTED, TWELVE_TET_PITCH_FREQUENCIES,
};
use pitchbender::PitchTracker;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("PitchBender - Interval math for microtonal tuning");
    println!();
    println!("Usage: pitchbender [--config <FILE>] [--verbose] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --ratio <DECIMAL>       Approximate a decimal interval as a ratio");
    println!("  --decimal <RATIO>       Convert a ratio (e.g. 3/2) to a decimal");
    println!("  --cents <RATIO>         Convert a ratio to cents");
    println!("  --from-cents <CENTS>    Convert cents to a decimal and a ratio");
    println!("  --pitch <HZ>            Show the pitch class of a frequency");
    println!("  --tet <LIST>            Show step sizes for equal temperaments (e.g. 12,19,31)");
    println!("  --scala <FILE>          List the intervals of a Scala (.scl) file");
    println!("  --track <HZ>...         Average frequency samples and classify each window");
    println!("  --help                  Show this help message");
}

fn init_logging(level: &str, verbose: bool) {
    let default_level = if verbose { "debug" } else { level };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Remove a bare flag from the argument list, reporting whether it was present
fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !names.contains(&a.as_str()));
    args.len() != before
}

/// Remove an option and its value from the argument list
fn take_option(args: &mut Vec<String>, name: &str) -> Result<Option<String>> {
    let Some(pos) = args.iter().position(|a| a == name) else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        return Err(anyhow!("{} requires a value", name));
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(value))
}

fn value<'a>(args: &'a [String], what: &str) -> Result<&'a str> {
    args.get(1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires {}", args[0], what))
}

fn parse_number(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| anyhow!("Invalid number: {}", text))
}

fn show_ratio(decimal: f64, config: &Config) -> Result<()> {
    let ratio = approximate_ratio(decimal, config.ratio.tolerance)?;
    println!("{} ≈ {}", decimal, ratio);
    Ok(())
}

fn show_from_cents(cents: f64, config: &Config) -> Result<()> {
    let decimal = convert_cents_to_decimal(cents);
    let ratio = approximate_ratio(decimal, config.ratio.tolerance)?;
    println!("{} cents = {:.6} ≈ {}", cents, decimal, ratio);
    Ok(())
}

fn show_pitch(frequency: f64, config: &Config) {
    debug!(frequency, spelling = %config.detection.spelling, "classifying frequency");
    let name = classify_frequency(
        frequency,
        &TWELVE_TET_PITCH_FREQUENCIES,
        config.detection.spelling,
    );
    println!("{} Hz: {}", frequency, name.unwrap_or(NO_PITCH_DETECTED));
}

fn show_tet(list: &str) -> Result<()> {
    for divisions in parse_tet(list)? {
        println!(
            "{}-TET: step = {:.4} cents ({:.6})",
            divisions,
            step_cents(divisions)?,
            step_decimal(divisions)?
        );
    }
    Ok(())
}

fn show_scala(path: &str, config: &Config) -> Result<()> {
    let scale = ScalaScale::load(path)?;
    info!(path, notes = scale.len(), "loaded scale");

    println!("{}", scale.description());
    println!("{} notes", scale.len());
    for (degree, &interval) in scale.intervals().iter().enumerate() {
        let cents = convert_decimal_to_cents(interval)?;
        let ratio = approximate_ratio(interval, config.ratio.tolerance)?;
        println!(
            "{:>3}: {:>10.4} cents  {:.6}  ≈ {}",
            degree + 1,
            cents,
            interval,
            ratio
        );
    }
    Ok(())
}

fn track(samples: &[String], config: &Config) -> Result<()> {
    let mut tracker = PitchTracker::new(config.detection.sample_window, config.detection.spelling);
    debug!(
        window = config.detection.sample_window,
        spelling = %config.detection.spelling,
        "tracking samples"
    );

    for sample in samples {
        if let Some(detection) = tracker.process(parse_number(sample)?) {
            println!("{}", detection);
        }
    }

    if tracker.last().is_none() {
        println!(
            "Not enough samples: {} positive samples are needed per window",
            config.detection.sample_window
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let verbose = take_flag(&mut args, &["--verbose", "-v"]);
    let config = match take_option(&mut args, "--config")? {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    init_logging(&config.logging.level, verbose);

    if args.is_empty() {
        println!("PitchBender - Interval math for microtonal tuning");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[0].as_str() {
        "--ratio" => {
            let decimal = parse_number(value(&args, "a decimal value")?)?;
            show_ratio(decimal, &config)?;
        }
        "--decimal" => {
            let ratio = value(&args, "a ratio")?;
            println!("{} = {}", ratio, convert_ratio_to_decimal(ratio)?);
        }
        "--cents" => {
            let ratio = value(&args, "a ratio")?;
            println!("{} = {:.4} cents", ratio, convert_ratio_to_cents(ratio)?);
        }
        "--from-cents" => {
            let cents = parse_number(value(&args, "a value in cents")?)?;
            show_from_cents(cents, &config)?;
        }
        "--pitch" => {
            let frequency = parse_number(value(&args, "a frequency in Hz")?)?;
            show_pitch(frequency, &config);
        }
        "--tet" => {
            show_tet(value(&args, "a list of divisions")?)?;
        }
        "--scala" => {
            show_scala(value(&args, "a .scl file")?, &config)?;
        }
        "--track" => {
            track(&args[1..], &config)?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[0]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
