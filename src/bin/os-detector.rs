//! Prints the detected platform properties.
//!
//! # Usage
//!
//! ```bash
//! # key=value lines
//! os-detector
//!
//! # Prefer a distribution family in the classifier
//! os-detector --like debian --like rhel
//!
//! # Read likes and failOnUnknownOS from TOML, print JSON
//! os-detector --config os-detector.toml --json
//! ```
//!
//! Diagnostics go to stderr and honour `RUST_LOG`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use os_detector::core::{DetectedProperties, Detector, DetectorConfig, parse_classifier_with_likes};

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    likes: Vec<String>,
    json: bool,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => parsed.help = true,
            "--json" => parsed.json = true,
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--like" => {
                let like = args.next().context("--like requires a name")?;
                parsed.likes.extend(parse_classifier_with_likes(Some(&like)));
            }
            other => bail!("unexpected argument: {other}"),
        }
    }
    Ok(parsed)
}

fn print_help() {
    println!("Usage: os-detector [--config <path>] [--like <name>]... [--json]");
    println!();
    println!("Options:");
    println!("  --config <path>  Load classifier likes and failOnUnknownOS from TOML");
    println!("  --like <name>    Append a distribution family to try (repeatable)");
    println!("  --json           Print properties as a JSON object");
    println!("  -h, --help       Print this help");
}

fn run(args: Args) -> anyhow::Result<()> {
    let detector = Detector::host();
    let props = detector.system_properties();

    let mut config = match &args.config {
        Some(path) => DetectorConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => DetectorConfig::default(),
    };
    config.merge_likes(DetectorConfig::from_properties(props).classifier_with_likes);
    config.merge_likes(args.likes);
    config.apply(props);

    let mut detected = DetectedProperties::new();
    detector.detect_properties(&mut detected, &config.classifier_with_likes)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detected)?);
    } else {
        for (key, value) in &detected {
            println!("{key}={value}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            print_help();
            return ExitCode::from(2);
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
