// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Context, Result};
use harmony::config::validate_library;
use harmony::music::{
    CompoundInterval, KeySignature, Mode, ModeType, PitchClass, Scale, ToneRow,
};
use std::env;
use tracing::Level;

fn print_usage() {
    println!("HARMONY - Music theory calculator");
    println!();
    println!("Usage: harmony [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --interval <SEMITONES>  Name an interval and show its inverse and tunings");
    println!("  --key <ROOT> <TYPE>     Show a key and its related keys (major, minor, harmonic minor)");
    println!("  --mode <ROOT> <MODE>    Show a mode and the key signature it is written in");
    println!("  --row <PC x 12>         Show the prime, inverted and retrograde forms of a tone row");
    println!("  --scales <FILE>         List the scales in a YAML or TOML scale library");
    println!("  --verbose               Log debug output to stderr");
    println!("  --help                  Show this help message");
}

fn spelled(classes: &[PitchClass], sharps: bool) -> String {
    classes
        .iter()
        .map(|pc| pc.name(sharps))
        .collect::<Vec<_>>()
        .join(" ")
}

fn show_interval(semitones: i32) {
    let interval = CompoundInterval::from_num_semitones(semitones);
    let simple = interval.simple_interval();
    println!("{} ({})", interval, interval.description(true));
    println!("Semitones: {}", interval.num_semitones());
    if interval.num_octaves() == 0 {
        println!("Inverse: {}", simple.inverse());
    }
    println!(
        "Equal temperament: {:.2} cents",
        interval.cents_equal_temperament()
    );
    let just: Vec<String> = interval
        .cents_just_intonation()
        .iter()
        .map(|cents| format!("{:.2}", cents))
        .collect();
    println!("Just intonation: {} cents", just.join(", "));
}

fn show_key(key: &KeySignature) {
    let sharps = key.is_sharp_key();
    println!("{}", key);
    if sharps {
        println!("Sharps: {}", key.num_sharps());
    } else {
        println!("Flats: {}", key.num_flats());
    }
    println!("Pitch classes: {}", spelled(&key.pitch_classes(), sharps));
    println!("Relative key: {}", key.relative_key());
    println!("Parallel key: {}", key.parallel_key());
    println!("Dominant key: {}", key.dominant_key());
    if key.has_enharmonic_key() {
        println!("Enharmonic key: {}", key.enharmonic_key());
    }
}

fn show_mode(mode: &Mode) {
    let key = mode.key_signature();
    println!("{}", mode);
    println!("Pitch classes: {}", spelled(&mode.pitch_classes(), key.is_sharp_key()));
    println!("Key signature: {}", key);
}

fn show_row(row: &ToneRow) {
    println!("P:  {}", row);
    println!("I:  {}", row.inversion());
    println!("R:  {}", row.retrograde());
    println!("RI: {}", row.retrograde_inversion());
    let steps: Vec<String> = row
        .intervals()
        .iter()
        .map(|interval| interval.description(true))
        .collect();
    println!("Intervals: {}", steps.join(" "));
}

fn show_library(path: &str) -> Result<()> {
    let library = validate_library(path)?;
    for name in library.names() {
        let scale = library.build(name)?;
        let classes = scale.pitch_classes();
        println!("{:<24} {}", name, spelled(&classes, true));
    }
    Ok(())
}

fn parse_row(args: &[String]) -> Result<ToneRow> {
    let classes = args
        .iter()
        .map(|arg| match arg.parse::<i32>() {
            Ok(value) => Ok(PitchClass::new(value)),
            Err(_) => arg.parse::<PitchClass>(),
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let classes: [PitchClass; 12] = classes
        .try_into()
        .map_err(|_| anyhow!("A tone row needs exactly 12 pitch classes"))?;
    Ok(ToneRow::new(classes)?)
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().collect();

    let verbose = args.iter().any(|arg| arg == "--verbose" || arg == "-v");
    args.retain(|arg| arg != "--verbose" && arg != "-v");
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if args.len() < 2 {
        println!("HARMONY - Music theory calculator");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--interval" => {
            if args.len() < 3 {
                eprintln!("Error: --interval requires a number of semitones");
                std::process::exit(1);
            }
            let semitones: i32 = args[2]
                .parse()
                .map_err(|_| anyhow!("Invalid number of semitones: {}", args[2]))?;
            show_interval(semitones);
        }
        "--key" => {
            if args.len() < 3 {
                eprintln!("Error: --key requires a root (e.g. Eb)");
                std::process::exit(1);
            }
            let key_type = if args.len() >= 4 {
                args[3..].join(" ")
            } else {
                "major".to_string()
            };
            let key = KeySignature::parse(&args[2], &key_type)
                .with_context(|| format!("Invalid key: {} {}", args[2], key_type))?;
            show_key(&key);
        }
        "--mode" => {
            if args.len() < 4 {
                eprintln!("Error: --mode requires a root and a mode (e.g. D dorian)");
                std::process::exit(1);
            }
            let root: PitchClass = args[2]
                .parse()
                .with_context(|| format!("Invalid root: {}", args[2]))?;
            let mode_type: ModeType = args[3]
                .parse()
                .with_context(|| format!("Invalid mode: {}", args[3]))?;
            show_mode(&Mode::new(mode_type, root));
        }
        "--row" => {
            let row = parse_row(&args[2..]).context("Invalid tone row")?;
            show_row(&row);
        }
        "--scales" => {
            if args.len() < 3 {
                eprintln!("Error: --scales requires a library file");
                std::process::exit(1);
            }
            show_library(&args[2])?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
